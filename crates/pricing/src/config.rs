use serde::Deserialize;
use thiserror::Error;

use crate::{LinearPricing, MarketParameters, MaterialTable};

/// Configuration for [`LinearPricing`].
///
/// ```toml
/// [market]
/// alpha_likes = 0.5
/// alpha_followers = 0.01
/// alpha_constant = 20.0
///
/// [materials.gold]
/// carat_9k = 10.0
/// carat_10k = 20.0
/// carat_14k = 30.0
/// ```
///
/// `materials` may be omitted, in which case the default table is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingConfig {
    pub market: MarketParameters,
    #[serde(default)]
    pub materials: MaterialTable,
}

/// Errors that can occur when loading a pricing config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse pricing config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl PricingConfig {
    /// Parses a config from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed, names an unknown material
    /// or tier, or lists an invalid unit cost.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Builds the pricing provider described by this config.
    #[must_use]
    pub fn into_provider(self) -> LinearPricing {
        LinearPricing::new(self.market, self.materials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{Carat, Material};

    #[test]
    fn loads_market_and_materials() {
        let config = PricingConfig::from_toml_str(
            r"
            [market]
            alpha_likes = 0.5
            alpha_followers = 0.01
            alpha_constant = 20.0

            [materials.gold]
            carat_14k = 35.0
            ",
        )
        .expect("should parse");

        assert_relative_eq!(config.market.alpha_constant, 20.0);
        assert_relative_eq!(
            config.materials.unit_cost(Material::Gold, Carat::K14).unwrap(),
            35.0
        );
        assert!(config.materials.unit_cost(Material::Gold, Carat::K9).is_err());
    }

    #[test]
    fn materials_default_when_omitted() {
        let config = PricingConfig::from_toml_str(
            r"
            [market]
            alpha_likes = 1.0
            alpha_followers = 0.0
            alpha_constant = 0.0
            ",
        )
        .expect("should parse");

        assert_eq!(config.materials, MaterialTable::default());
    }

    #[test]
    fn missing_market_is_an_error() {
        assert!(matches!(
            PricingConfig::from_toml_str(""),
            Err(ConfigError::Parse(_))
        ));
    }
}
