use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;
use uom::si::{f64::Mass, mass::gram};

use crate::PricingError;

/// A base material an item is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Gold,
}

/// Purity tier of a precious metal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Carat {
    #[serde(rename = "carat_9k")]
    K9,
    #[serde(rename = "carat_10k")]
    K10,
    #[serde(rename = "carat_14k")]
    K14,
}

/// Errors that can occur when building a [`MaterialTable`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MaterialTableError {
    #[error("unit cost for {material:?} at {carat:?} must be finite and non-negative, got {value}")]
    InvalidUnitCost {
        material: Material,
        carat: Carat,
        value: f64,
    },
}

type Tiers = BTreeMap<Material, BTreeMap<Carat, f64>>;

/// Unit cost per gram for each material and carat.
///
/// Unknown materials or tiers are rejected when the table is deserialized,
/// and every unit cost is checked to be finite and non-negative.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Tiers")]
pub struct MaterialTable(Tiers);

impl MaterialTable {
    /// Creates a table from explicit entries.
    ///
    /// # Errors
    ///
    /// Returns an error if any unit cost is negative or not finite.
    pub fn new(
        entries: impl IntoIterator<Item = (Material, Carat, f64)>,
    ) -> Result<Self, MaterialTableError> {
        let mut tiers = Tiers::new();
        for (material, carat, value) in entries {
            tiers.entry(material).or_default().insert(carat, value);
        }
        Self::try_from(tiers)
    }

    /// Returns the unit cost per gram for a material and carat.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::UnknownTier`] if the table has no entry.
    pub fn unit_cost(&self, material: Material, carat: Carat) -> Result<f64, PricingError> {
        self.0
            .get(&material)
            .and_then(|tiers| tiers.get(&carat))
            .copied()
            .ok_or(PricingError::UnknownTier { material, carat })
    }
}

impl TryFrom<Tiers> for MaterialTable {
    type Error = MaterialTableError;

    fn try_from(tiers: Tiers) -> Result<Self, Self::Error> {
        for (&material, entries) in &tiers {
            for (&carat, &value) in entries {
                if !value.is_finite() || value < 0.0 {
                    return Err(MaterialTableError::InvalidUnitCost {
                        material,
                        carat,
                        value,
                    });
                }
            }
        }
        Ok(Self(tiers))
    }
}

impl Default for MaterialTable {
    /// Gold at 10, 20, and 30 per gram for 9k, 10k, and 14k.
    fn default() -> Self {
        let tiers = [
            (Carat::K9, 10.0),
            (Carat::K10, 20.0),
            (Carat::K14, 30.0),
        ];
        Self(Tiers::from([(Material::Gold, BTreeMap::from(tiers))]))
    }
}

/// The amount and unit cost of one material in an item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProfile {
    pub weight: Mass,
    pub unit_cost: f64,
}

impl MaterialProfile {
    #[must_use]
    pub fn new(weight: Mass, unit_cost: f64) -> Self {
        Self { weight, unit_cost }
    }

    /// Returns the cost of the material: weight in grams times unit cost.
    #[must_use]
    pub fn material_cost(&self) -> f64 {
        self.weight.get::<gram>() * self.unit_cost
    }
}
