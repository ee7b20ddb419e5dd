use thiserror::Error;

/// A validated, non-negative spend limit.
///
/// A budget of `b` defines the spend levels `0..=b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Budget(usize);

/// Errors that can occur when validating a budget.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BudgetError {
    #[error("budget must be non-negative, got {0}")]
    Negative(i64),

    #[error("budget {0} does not fit in a table index")]
    TooLarge(i64),
}

impl Budget {
    /// Creates a budget from a signed value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or cannot index a table on
    /// this platform.
    pub fn new(value: i64) -> Result<Self, BudgetError> {
        if value < 0 {
            return Err(BudgetError::Negative(value));
        }
        usize::try_from(value)
            .map(Self)
            .map_err(|_| BudgetError::TooLarge(value))
    }

    /// Returns the budget as a spend level.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of spend levels, `budget + 1`.
    pub(super) fn levels(self) -> Option<usize> {
        self.0.checked_add(1)
    }
}

impl TryFrom<i64> for Budget {
    type Error = BudgetError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<usize> for Budget {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_positive() {
        assert_eq!(Budget::new(0).unwrap().get(), 0);
        assert_eq!(Budget::new(11).unwrap().get(), 11);
        assert_eq!(Budget::new(11).unwrap().levels(), Some(12));
    }

    #[test]
    fn rejects_negative() {
        assert_eq!(Budget::new(-1), Err(BudgetError::Negative(-1)));
        assert_eq!(Budget::try_from(-42_i64), Err(BudgetError::Negative(-42)));
    }
}
