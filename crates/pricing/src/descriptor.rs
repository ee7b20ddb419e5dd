use serde::Deserialize;
use uom::si::{f64::Mass, mass::gram};

use crate::{Carat, Material};

/// A raw catalog entry before pricing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawItem {
    pub id: String,
    pub jeweler: String,
    pub product_class: String,
    pub likes: f64,
    pub followers: f64,
    pub material: Material,
    pub carat: Carat,
    pub weight_grams: f64,
}

impl RawItem {
    /// Returns the material weight.
    #[must_use]
    pub fn weight(&self) -> Mass {
        Mass::new::<gram>(self.weight_grams)
    }
}
