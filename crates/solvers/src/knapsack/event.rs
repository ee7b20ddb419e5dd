/// Event emitted by the knapsack solver once a spend level is final.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event<'a> {
    /// The spend level, from 0 up to the budget.
    pub level: usize,

    /// Best value achievable with total cost at most `level`.
    pub value: f64,

    /// Units selected per item for that value.
    pub counts: &'a [u64],

    /// Index of the item whose candidate last replaced this level's row,
    /// or `None` if no item fit or improved on the baseline.
    pub updated_by: Option<usize>,
}
