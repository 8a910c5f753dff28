//! Validated element-wise operations with strategy dispatch.
//!
//! Each operation validates operand lengths, then runs its per-index
//! kernel either serially or in parallel chunks according to the
//! [`ExecutionStrategy`]. Writes are disjoint per index, so every
//! strategy yields the same result.

use crate::error::{OpsError, Result};
use crate::kernels::elementwise::{add_at, mul_at, mul_scalar_at};
use crate::parallel::{ExecutionStrategy, ELEMENTS_CHUNK};
use core::ops::{Add, Mul};
use rayon::prelude::*;

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(OpsError::LengthMismatch { expected, actual });
    }
    Ok(())
}

/// Resolve a strategy to a parallel chunk length, `None` meaning serial.
fn chunk_len(strategy: ExecutionStrategy, len: usize) -> Result<Option<usize>> {
    match strategy {
        ExecutionStrategy::Serial => Ok(None),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(OpsError::Parallel("chunk count must be > 0".to_string()));
            }
            Ok(Some(len.div_ceil(n)))
        }
        ExecutionStrategy::AutoChunks(chunk) => {
            if chunk == 0 {
                return Err(OpsError::Parallel("chunk length must be > 0".to_string()));
            }
            Ok(Some(chunk))
        }
        ExecutionStrategy::ParallelElements => Ok(Some(ELEMENTS_CHUNK)),
    }
}

/// Combine two sequences with an arbitrary per-index kernel:
/// `output[i] = kernel(i, a, b)`.
///
/// The kernel must read only index `i` of each input; the dispatch makes
/// no ordering guarantee between indices.
///
/// # Errors
///
/// Returns [`OpsError::LengthMismatch`] if `a`, `b`, and `output` do not
/// all have the same length, and [`OpsError::Parallel`] for invalid
/// strategy parameters.
pub fn combine_with<T, F>(
    a: &[T],
    b: &[T],
    output: &mut [T],
    strategy: ExecutionStrategy,
    kernel: F,
) -> Result<()>
where
    T: Copy + Send + Sync,
    F: Fn(usize, &[T], &[T]) -> T + Send + Sync,
{
    check_len(a.len(), b.len())?;
    check_len(a.len(), output.len())?;
    if output.is_empty() {
        return Ok(());
    }

    match chunk_len(strategy, output.len())? {
        None => {
            for (i, out) in output.iter_mut().enumerate() {
                *out = kernel(i, a, b);
            }
        }
        Some(chunk) => {
            output
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(chunk_idx, out_chunk)| {
                    let start = chunk_idx * chunk;
                    for (j, out) in out_chunk.iter_mut().enumerate() {
                        *out = kernel(start + j, a, b);
                    }
                });
        }
    }

    Ok(())
}

/// Element-wise addition: `output[i] = a[i] + b[i]`.
///
/// # Example
///
/// ```rust
/// use elemwise_ops::{add, ExecutionStrategy};
///
/// let a = [1, 2, 3, 4, 5];
/// let b = [6, 7, 8, 9, 10];
/// let mut c = [0i32; 5];
/// add(&a, &b, &mut c, ExecutionStrategy::ParallelElements)?;
/// assert_eq!(c, [7, 9, 11, 13, 15]);
/// # Ok::<(), elemwise_ops::OpsError>(())
/// ```
pub fn add<T>(a: &[T], b: &[T], output: &mut [T], strategy: ExecutionStrategy) -> Result<()>
where
    T: Add<Output = T> + Copy + Send + Sync,
{
    combine_with(a, b, output, strategy, add_at)
}

/// Element-wise multiplication: `output[i] = a[i] * b[i]`.
pub fn mul<T>(a: &[T], b: &[T], output: &mut [T], strategy: ExecutionStrategy) -> Result<()>
where
    T: Mul<Output = T> + Copy + Send + Sync,
{
    combine_with(a, b, output, strategy, mul_at)
}

/// Scalar multiplication: `output[i] = a[i] * scalar`.
pub fn mul_scalar<T>(
    a: &[T],
    scalar: T,
    output: &mut [T],
    strategy: ExecutionStrategy,
) -> Result<()>
where
    T: Mul<Output = T> + Copy + Send + Sync,
{
    check_len(a.len(), output.len())?;
    if output.is_empty() {
        return Ok(());
    }

    match chunk_len(strategy, output.len())? {
        None => {
            for (i, out) in output.iter_mut().enumerate() {
                *out = mul_scalar_at(i, a, scalar);
            }
        }
        Some(chunk) => {
            output
                .par_chunks_mut(chunk)
                .enumerate()
                .for_each(|(chunk_idx, out_chunk)| {
                    let start = chunk_idx * chunk;
                    for (j, out) in out_chunk.iter_mut().enumerate() {
                        *out = mul_scalar_at(start + j, a, scalar);
                    }
                });
        }
    }

    Ok(())
}

/// In-place scalar multiplication: `x[i] *= scalar`.
pub fn mul_scalar_inplace<T>(x: &mut [T], scalar: T, strategy: ExecutionStrategy) -> Result<()>
where
    T: Mul<Output = T> + Copy + Send + Sync,
{
    if x.is_empty() {
        return Ok(());
    }

    match chunk_len(strategy, x.len())? {
        None => crate::kernels::elementwise::mul_scalar_slice_inplace(x, scalar),
        Some(chunk) => {
            x.par_chunks_mut(chunk).for_each(|x_chunk| {
                crate::kernels::elementwise::mul_scalar_slice_inplace(x_chunk, scalar)
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_serial() {
        let a = [1, 2, 3, 4, 5];
        let b = [6, 7, 8, 9, 10];
        let mut c = [0i32; 5];
        add(&a, &b, &mut c, ExecutionStrategy::Serial).unwrap();
        assert_eq!(c, [7, 9, 11, 13, 15]);
    }

    #[test]
    fn test_strategies_consistency() {
        let a: Vec<i64> = (0..3000).collect();
        let b: Vec<i64> = (0..3000).map(|i| i * 2).collect();

        let mut serial = vec![0i64; 3000];
        add(&a, &b, &mut serial, ExecutionStrategy::Serial).unwrap();

        let mut fixed = vec![0i64; 3000];
        add(&a, &b, &mut fixed, ExecutionStrategy::Fixed(4)).unwrap();

        let mut auto = vec![0i64; 3000];
        add(&a, &b, &mut auto, ExecutionStrategy::AutoChunks(17)).unwrap();

        let mut elements = vec![0i64; 3000];
        add(&a, &b, &mut elements, ExecutionStrategy::ParallelElements).unwrap();

        assert_eq!(serial, fixed, "Fixed strategy mismatch");
        assert_eq!(serial, auto, "AutoChunks strategy mismatch");
        assert_eq!(serial, elements, "ParallelElements strategy mismatch");
    }

    #[test]
    fn test_length_mismatch() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 2, 3, 4];
        let mut c = [0i32; 5];
        let result = add(&a, &b, &mut c, ExecutionStrategy::Serial);
        assert_eq!(
            result,
            Err(OpsError::LengthMismatch {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn test_output_length_mismatch() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let mut c = [0i32; 2];
        assert!(add(&a, &b, &mut c, ExecutionStrategy::Serial).is_err());
    }

    #[test]
    fn test_empty_sequences() {
        let a: [i32; 0] = [];
        let b: [i32; 0] = [];
        let mut c: [i32; 0] = [];
        add(&a, &b, &mut c, ExecutionStrategy::ParallelElements).unwrap();
    }

    #[test]
    fn test_invalid_strategy_parameters() {
        let a = [1, 2, 3];
        let b = [4, 5, 6];
        let mut c = [0i32; 3];

        let result = add(&a, &b, &mut c, ExecutionStrategy::Fixed(0));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("chunk count must be > 0"));

        let result = add(&a, &b, &mut c, ExecutionStrategy::AutoChunks(0));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("chunk length must be > 0"));
    }

    #[test]
    fn test_mul() {
        let a = [2, 3, 4];
        let b = [5, 6, 7];
        let mut c = [0i32; 3];
        mul(&a, &b, &mut c, ExecutionStrategy::Serial).unwrap();
        assert_eq!(c, [10, 18, 28]);
    }

    #[test]
    fn test_mul_scalar() {
        let a = [1, 2, 3, 4, 5];
        let mut out = [0i32; 5];
        mul_scalar(&a, 3, &mut out, ExecutionStrategy::ParallelElements).unwrap();
        assert_eq!(out, [3, 6, 9, 12, 15]);
    }

    #[test]
    fn test_mul_scalar_inplace() {
        let mut x = [0, 1, 2, 3, 4];
        mul_scalar_inplace(&mut x, 10, ExecutionStrategy::ParallelElements).unwrap();
        assert_eq!(x, [0, 10, 20, 30, 40]);

        // A second application compounds, there is no hidden state.
        mul_scalar_inplace(&mut x, 10, ExecutionStrategy::Serial).unwrap();
        assert_eq!(x, [0, 100, 200, 300, 400]);
    }

    #[test]
    fn test_combine_with_custom_kernel() {
        let a = [10, 20, 30];
        let b = [1, 2, 3];
        let mut c = [0i32; 3];
        combine_with(&a, &b, &mut c, ExecutionStrategy::Serial, |i, a, b| {
            a[i] - b[i]
        })
        .unwrap();
        assert_eq!(c, [9, 18, 27]);
    }

    #[test]
    fn test_repeated_invocation_is_deterministic() {
        let a: Vec<i32> = (0..500).collect();
        let b: Vec<i32> = (0..500).map(|i| 500 - i).collect();

        let mut first = vec![0i32; 500];
        add(&a, &b, &mut first, ExecutionStrategy::ParallelElements).unwrap();

        for _ in 0..5 {
            let mut again = vec![0i32; 500];
            add(&a, &b, &mut again, ExecutionStrategy::ParallelElements).unwrap();
            assert_eq!(first, again);
        }
    }
}
