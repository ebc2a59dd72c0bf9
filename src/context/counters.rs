/// Counts regarding the most recent refutation.
///
/// Counters are reset at the start of each refutation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// A count of steps taken.
    pub steps: usize,

    /// A count of attempts to resolve the current clause with some clause of the knowledge base.
    pub attempts: usize,
}
