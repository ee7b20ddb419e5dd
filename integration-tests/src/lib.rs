//! Shared fixtures for Lapidary's end-to-end tests.

use serde::Deserialize;

use lapidary_pricing::RawItem;

/// A batch of raw items as listed in a TOML catalog.
#[derive(Debug, Deserialize)]
pub struct Catalog {
    pub items: Vec<RawItem>,
}

impl Catalog {
    /// Parses a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or an item is incomplete.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }
}

/// Pricing config used across the end-to-end tests.
pub const PRICING: &str = r#"
[market]
alpha_likes = 0.125
alpha_followers = 0.0078125
alpha_constant = 2.0

[materials.gold]
carat_9k = 8.0
carat_10k = 20.0
carat_14k = 30.0
"#;

/// A small catalog of gold rings.
///
/// With [`PRICING`], the rings price to:
///
/// | id        | cost | price |
/// |-----------|------|-------|
/// | band      | 4    | 10    |
/// | signet    | 5    | 14    |
/// | solitaire | 15   | 20    |
pub const CATALOG: &str = r#"
[[items]]
id = "band"
jeweler = "Ada"
product_class = "ring"
likes = 16.0
followers = 256.0
material = "gold"
carat = "carat_9k"
weight_grams = 0.5

[[items]]
id = "signet"
jeweler = "Grace"
product_class = "ring"
likes = 40.0
followers = 256.0
material = "gold"
carat = "carat_10k"
weight_grams = 0.25

[[items]]
id = "solitaire"
jeweler = "Ada"
product_class = "ring"
likes = 8.0
followers = 256.0
material = "gold"
carat = "carat_14k"
weight_grams = 0.5
"#;
