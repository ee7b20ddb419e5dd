use thiserror::Error;

/// How the solver treats items whose cost truncates to zero.
///
/// Items with zero cost and zero price add nothing and are never selected,
/// regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroCost {
    /// Fail with [`Error::UnboundedItem`] if a zero-cost item has a positive price.
    ///
    /// [`Error::UnboundedItem`]: super::Error::UnboundedItem
    #[default]
    Reject,

    /// Include this many units of each positive-price, zero-cost item at every
    /// spend level.
    Cap(u64),
}

/// Configuration for the knapsack solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    max_cells: usize,
    zero_cost: ZeroCost,
}

/// Errors that can occur when validating a knapsack solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_cells must be positive")]
    ZeroMaxCells,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cells: 50_000_000,
            zero_cost: ZeroCost::Reject,
        }
    }
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_cells` bounds the allocation table size, `(budget + 1) * n`.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_cells` is zero.
    pub fn new(max_cells: usize, zero_cost: ZeroCost) -> Result<Self, ConfigError> {
        if max_cells == 0 {
            return Err(ConfigError::ZeroMaxCells);
        }

        Ok(Self {
            max_cells,
            zero_cost,
        })
    }

    /// Returns a copy of this config with a different zero-cost policy.
    #[must_use]
    pub fn with_zero_cost(self, zero_cost: ZeroCost) -> Self {
        Self { zero_cost, ..self }
    }

    /// Returns the maximum number of table cells the solver may allocate.
    #[must_use]
    pub fn max_cells(&self) -> usize {
        self.max_cells
    }

    /// Returns the zero-cost item policy.
    #[must_use]
    pub fn zero_cost(&self) -> ZeroCost {
        self.zero_cost
    }
}
