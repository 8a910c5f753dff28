//! Execution strategies for per-index dispatch.

/// How the per-index computation of an operation is scheduled.
///
/// Every strategy runs the same per-index kernel over the same index
/// range with disjoint write targets, so all of them produce
/// bit-identical results for the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Run on the calling thread, one index at a time.
    Serial,
    /// Split the index range into exactly `n` chunks, one parallel task each.
    ///
    /// `Fixed(0)` is rejected with an error.
    Fixed(usize),
    /// Split the index range into chunks of the given length.
    ///
    /// `AutoChunks(0)` is rejected with an error.
    AutoChunks(usize),
    /// Parallel dispatch with a runtime-chosen chunk length.
    ParallelElements,
}

/// Default chunk length for [`ExecutionStrategy::ParallelElements`].
pub(crate) const ELEMENTS_CHUNK: usize = 1024;
