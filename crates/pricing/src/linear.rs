use lapidary_core::{Item, PricingProvider};

use crate::{MarketParameters, MaterialProfile, MaterialTable, PricingError, RawItem};

/// Prices items as material cost plus a linear market premium.
///
/// Prices and costs are rounded to the nearest cent, so a material cost that
/// is a whole number of currency units truncates to that number regardless of
/// unit conversion error in the weight.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPricing {
    market: MarketParameters,
    materials: MaterialTable,
}

impl LinearPricing {
    #[must_use]
    pub fn new(market: MarketParameters, materials: MaterialTable) -> Self {
        Self { market, materials }
    }

    /// Prices a single raw item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item's tier is not in the material table or the
    /// resulting price or cost is negative or not finite.
    pub fn price_one(&self, raw: &RawItem) -> Result<Item, PricingError> {
        let unit_cost = self.materials.unit_cost(raw.material, raw.carat)?;
        let material_cost = MaterialProfile::new(raw.weight(), unit_cost).material_cost();
        let cost = to_cents(material_cost);
        let price = to_cents(material_cost + self.market.premium(raw.likes, raw.followers));

        tracing::debug!(id = %raw.id, price, cost, "priced item");

        Item::new(price, cost).map_err(|source| PricingError::InvalidItem {
            id: raw.id.clone(),
            source,
        })
    }
}

fn to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

impl PricingProvider for LinearPricing {
    type Descriptor = RawItem;
    type Error = PricingError;

    fn price(&self, descriptors: &[RawItem]) -> Result<Vec<Item>, PricingError> {
        descriptors.iter().map(|raw| self.price_one(raw)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use lapidary_core::ItemError;

    use crate::{Carat, Material};

    fn ring(id: &str, likes: f64, weight_grams: f64) -> RawItem {
        RawItem {
            id: id.to_owned(),
            jeweler: "Ada".to_owned(),
            product_class: "ring".to_owned(),
            likes,
            followers: 200.0,
            material: Material::Gold,
            carat: Carat::K10,
            weight_grams,
        }
    }

    fn pricing() -> LinearPricing {
        LinearPricing::new(MarketParameters::new(0.5, 0.01, 1.0), MaterialTable::default())
    }

    #[test]
    fn prices_are_cost_plus_premium() {
        let items = pricing()
            .price(&[ring("a", 10.0, 0.25), ring("b", 0.0, 0.5)])
            .expect("should price");

        // cost = 0.25 g * 20; premium = 5 + 2 + 1.
        assert_relative_eq!(items[0].cost(), 5.0);
        assert_relative_eq!(items[0].price(), 13.0);
        assert_relative_eq!(items[1].cost(), 10.0);
        assert_relative_eq!(items[1].price(), 13.0);
    }

    #[test]
    fn rounds_to_cents() {
        let pricing = LinearPricing::new(
            MarketParameters::new(0.0, 0.0, 0.004),
            MaterialTable::default(),
        );

        // 0.1 g at 30 per gram is not exact in binary floating point.
        let mut raw = ring("a", 0.0, 0.1);
        raw.carat = Carat::K14;
        let item = pricing.price_one(&raw).unwrap();

        assert_eq!(item.cost(), 3.0);
        assert_eq!(item.cost_units(), 3);
        assert_eq!(item.price(), 3.0);
    }

    #[test]
    fn empty_batch_prices_to_empty() {
        assert!(pricing().price(&[]).unwrap().is_empty());
    }

    #[test]
    fn unknown_tier_fails() {
        let materials = MaterialTable::new([(Material::Gold, Carat::K14, 30.0)]).unwrap();
        let pricing = LinearPricing::new(MarketParameters::default(), materials);

        let err = pricing.price(&[ring("a", 0.0, 1.0)]).unwrap_err();

        assert_eq!(
            err,
            PricingError::UnknownTier {
                material: Material::Gold,
                carat: Carat::K10
            }
        );
    }

    #[test]
    fn negative_price_is_invalid() {
        let pricing = LinearPricing::new(
            MarketParameters::new(0.0, 0.0, -100.0),
            MaterialTable::default(),
        );

        let err = pricing.price(&[ring("cheap", 0.0, 1.0)]).unwrap_err();

        assert_eq!(
            err,
            PricingError::InvalidItem {
                id: "cheap".to_owned(),
                source: ItemError::NegativePrice(-80.0),
            }
        );
    }
}
