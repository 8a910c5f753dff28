//! Per-index kernel implementations.
//!
//! Each kernel is a plain function of `(index, inputs...) -> output`
//! with no cross-index dependency, so the same kernel can be dispatched
//! serially or in parallel without behavioral difference.

pub mod elementwise;

// Re-export commonly used kernels
pub use elementwise::*;
