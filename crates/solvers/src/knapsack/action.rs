/// Control actions supported by the knapsack solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop after the current spend level and return the table so far.
    StopEarly,
}
