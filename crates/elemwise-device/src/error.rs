//! Error types for device operations.

use thiserror::Error;

/// Result type for device operations.
pub type Result<T> = std::result::Result<T, DeviceError>;

/// Error types that can occur during device operations.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// Device not available or its execution context failed to initialize.
    #[error("Device not available: {0}")]
    DeviceNotAvailable(String),

    /// Invalid buffer size or mismatched buffer lengths.
    #[error("Invalid buffer size: expected {expected}, got {actual}")]
    InvalidBufferSize {
        /// Expected buffer length in elements
        expected: usize,
        /// Actual buffer length in elements
        actual: usize,
    },

    /// Error from the underlying element-wise operation.
    #[error("Operation error: {0}")]
    Ops(#[from] elemwise_ops::OpsError),
}
