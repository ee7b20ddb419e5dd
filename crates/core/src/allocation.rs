use crate::Item;

/// A count of selected units per item, indexed by item position.
///
/// Positions past the end of the stored counts are implicitly zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Allocation(Vec<u64>);

impl Allocation {
    /// Creates an allocation with zero units of each of `n` items.
    #[must_use]
    pub fn zeros(n: usize) -> Self {
        Self(vec![0; n])
    }

    /// Returns the number of units selected for the item at `index`.
    #[must_use]
    pub fn count(&self, index: usize) -> u64 {
        self.0.get(index).copied().unwrap_or(0)
    }

    /// Returns the per-item counts.
    #[must_use]
    pub fn counts(&self) -> &[u64] {
        &self.0
    }

    /// Returns the number of items this allocation covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no units are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    /// Iterates over `(index, count)` pairs for items with at least one unit.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(index, &count)| (index, count))
    }

    /// Returns the total whole-unit cost of the allocation, saturating at `u64::MAX`.
    ///
    /// Items are matched by position; counts without a matching item are ignored.
    #[must_use]
    pub fn total_cost(&self, items: &[Item]) -> u64 {
        self.iter()
            .filter_map(|(index, count)| items.get(index).map(|item| (item, count)))
            .map(|(item, count)| (item.cost_units() as u64).saturating_mul(count))
            .fold(0, u64::saturating_add)
    }

    /// Returns the total value (sum of `count * price`) of the allocation.
    #[must_use]
    pub fn total_value(&self, items: &[Item]) -> f64 {
        self.iter()
            .filter_map(|(index, count)| items.get(index).map(|item| (item, count)))
            .map(|(item, count)| item.price() * count as f64)
            .sum()
    }
}

impl From<Vec<u64>> for Allocation {
    fn from(counts: Vec<u64>) -> Self {
        Self(counts)
    }
}

impl From<&[u64]> for Allocation {
    fn from(counts: &[u64]) -> Self {
        Self(counts.to_vec())
    }
}

/// The outcome of a portfolio optimization.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Units selected per item.
    pub allocation: Allocation,

    /// Maximum achievable value under the budget.
    pub total_value: f64,
}
