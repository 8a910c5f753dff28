//! Element-wise combine operations for equal-length sequences.
//!
//! This crate provides the CPU side of the element-wise demonstrations:
//! plain per-index kernels, validated combine/scale operations, and an
//! execution strategy that dispatches the per-index work either serially
//! on the calling thread or data-parallel across a thread pool.
//!
//! # Guarantees
//!
//! - **Validated**: operand length mismatches surface as [`OpsError::LengthMismatch`]
//!   instead of out-of-bounds access
//! - **Deterministic**: every execution strategy produces bit-identical results,
//!   since no per-index computation reads or writes another index
//!
//! # Examples
//!
//! ```rust
//! use elemwise_ops::{add, ExecutionStrategy};
//!
//! let a = [1, 2, 3, 4, 5];
//! let b = [6, 7, 8, 9, 10];
//! let mut c = [0i32; 5];
//! add(&a, &b, &mut c, ExecutionStrategy::Serial)?;
//! assert_eq!(c, [7, 9, 11, 13, 15]);
//! # Ok::<(), elemwise_ops::OpsError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kernels;
pub mod ops;
pub mod parallel;

// Re-exports
pub use error::{OpsError, Result};
pub use ops::*;
pub use parallel::ExecutionStrategy;
