/// Watches a solver's progress and may steer it.
///
/// A solver reports each unit of progress as an event of type `E` (for the
/// knapsack solver, one finished spend level). Returning `Some(action)` asks
/// the solver to act on it; the actions `A` a solver honors are its own.
pub trait Observer<E, A> {
    /// Receives one progress event.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Any `FnMut(&E) -> Option<A>` closure can observe a solve.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// `()` observes nothing and never acts; the `*_unobserved` entry points pass it.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
