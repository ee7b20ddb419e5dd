/// Best values and allocations for every computed spend level.
///
/// Row `level` holds the best value achievable with total cost at most
/// `level`, and the per-item counts that achieve it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    item_count: usize,
    values: Vec<f64>,
    counts: Vec<u64>,
}

impl Table {
    pub(super) fn with_capacity(item_count: usize, levels: usize) -> Self {
        Self {
            item_count,
            values: Vec::with_capacity(levels),
            counts: Vec::with_capacity(levels * item_count),
        }
    }

    /// Returns the number of computed spend levels.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.values.len()
    }

    /// Returns the number of items each row covers.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns the best value for every computed level, in ascending order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Returns the best value at `level`, if computed.
    #[must_use]
    pub fn value(&self, level: usize) -> Option<f64> {
        self.values.get(level).copied()
    }

    /// Returns the per-item counts at `level`, if computed.
    #[must_use]
    pub fn allocation(&self, level: usize) -> Option<&[u64]> {
        (level < self.levels()).then(|| self.row(level))
    }

    /// Appends a row initialized to `value` and `counts`.
    pub(super) fn push(&mut self, value: f64, counts: &[u64]) {
        debug_assert_eq!(counts.len(), self.item_count);
        self.values.push(value);
        self.counts.extend_from_slice(counts);
    }

    pub(super) fn value_at(&self, level: usize) -> f64 {
        self.values[level]
    }

    pub(super) fn row(&self, level: usize) -> &[u64] {
        let start = level * self.item_count;
        &self.counts[start..start + self.item_count]
    }

    /// Overwrites row `to` with row `from` plus one unit of `item`.
    ///
    /// Returns `None` if the unit count would overflow, leaving the copied
    /// counts in place.
    pub(super) fn extend_from(
        &mut self,
        from: usize,
        to: usize,
        item: usize,
        value: f64,
    ) -> Option<()> {
        let n = self.item_count;
        self.counts.copy_within(from * n..from * n + n, to * n);
        let count = &mut self.counts[to * n + item];
        *count = count.checked_add(1)?;
        self.values[to] = value;
        Some(())
    }
}
