//! Error types for element-wise operations.

use thiserror::Error;

/// Result type for element-wise operations.
pub type Result<T> = std::result::Result<T, OpsError>;

/// Error types that can occur during element-wise operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Operand or result sequence lengths do not match.
    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch {
        /// Expected sequence length
        expected: usize,
        /// Actual sequence length
        actual: usize,
    },

    /// Invalid parallel execution parameters.
    #[error("Parallel execution error: {0}")]
    Parallel(String),
}
