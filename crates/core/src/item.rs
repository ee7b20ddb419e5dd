use thiserror::Error;

/// A priced item that can be selected into a portfolio.
///
/// Both `price` and `cost` are finite and non-negative, which is checked at
/// construction. Solvers index spend levels by integer cost, so [`Item::cost_units`]
/// truncates the cost toward zero before use.
///
/// Items have no identity of their own; solvers refer to them by their
/// position in the input slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    price: f64,
    cost: f64,
}

/// Errors that can occur when constructing an [`Item`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ItemError {
    #[error("price must be non-negative, got {0}")]
    NegativePrice(f64),

    #[error("cost must be non-negative, got {0}")]
    NegativeCost(f64),

    #[error("price must be finite, got {0}")]
    NonFinitePrice(f64),

    #[error("cost must be finite, got {0}")]
    NonFiniteCost(f64),
}

impl Item {
    /// Creates a new item from a price and a cost.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is negative or not finite.
    pub fn new(price: f64, cost: f64) -> Result<Self, ItemError> {
        if !price.is_finite() {
            return Err(ItemError::NonFinitePrice(price));
        }
        if !cost.is_finite() {
            return Err(ItemError::NonFiniteCost(cost));
        }
        if price < 0.0 {
            return Err(ItemError::NegativePrice(price));
        }
        if cost < 0.0 {
            return Err(ItemError::NegativeCost(cost));
        }

        Ok(Self { price, cost })
    }

    /// Returns the price (value contributed per unit).
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Returns the cost as provided.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Returns the cost truncated to whole budget units.
    ///
    /// Costs too large for `usize` saturate, which leaves the item
    /// unreachable at any budget a table could be built for.
    #[must_use]
    pub fn cost_units(&self) -> usize {
        self.cost.trunc() as usize
    }
}
