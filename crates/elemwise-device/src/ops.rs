//! Executable element-wise operations on device buffers.
//!
//! Each `*_execute` function validates buffer lengths, then launches the
//! per-index kernel on the context's execution units. Launches are
//! synchronous; buffer contents are final when the call returns, though
//! they remain device-resident until staged out.

use crate::error::{DeviceError, Result};
use crate::runtime::{DeviceBuffer, DeviceContext};
use bytemuck::Pod;
use core::ops::{Add, Mul};
use elemwise_ops::kernels::elementwise::add_at;
use elemwise_ops::ExecutionStrategy;

fn check_len(expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(DeviceError::InvalidBufferSize { expected, actual });
    }
    Ok(())
}

/// Execute an arbitrary per-index kernel on the device:
/// `output[i] = kernel(i, a, b)`.
///
/// The kernel runs as independent tasks across the context's execution
/// units, one logical task per index, with no ordering guarantee.
///
/// # Errors
///
/// Returns [`DeviceError::InvalidBufferSize`] if the buffers do not all
/// have the same length.
pub fn combine_execute<T, F>(
    a: &DeviceBuffer<T>,
    b: &DeviceBuffer<T>,
    output: &mut DeviceBuffer<T>,
    ctx: &DeviceContext,
    kernel: F,
) -> Result<()>
where
    T: Pod + Send + Sync,
    F: Fn(usize, &[T], &[T]) -> T + Send + Sync,
{
    check_len(a.len(), b.len())?;
    check_len(a.len(), output.len())?;
    if output.is_empty() {
        return Ok(());
    }

    let (a_dev, b_dev) = (a.storage(), b.storage());
    let out_dev = output.storage_mut();
    ctx.run(|| {
        elemwise_ops::combine_with(
            a_dev,
            b_dev,
            out_dev,
            ExecutionStrategy::ParallelElements,
            kernel,
        )
    })?;

    Ok(())
}

/// Execute element-wise addition on the device: `output = a + b`.
///
/// # Example
///
/// ```rust
/// # use elemwise_device::{add_execute, allocate, to_cpu, to_device, Device, DeviceContext};
/// # let ctx = DeviceContext::new(Device::new(0)?)?;
/// let a = to_device(&[1, 2, 3, 4, 5], &ctx)?;
/// let b = to_device(&[6, 7, 8, 9, 10], &ctx)?;
/// let mut out = allocate::<i32>(5, &ctx)?;
/// add_execute(&a, &b, &mut out, &ctx)?;
/// assert_eq!(to_cpu(&out, &ctx)?, vec![7, 9, 11, 13, 15]);
/// # Ok::<(), elemwise_device::DeviceError>(())
/// ```
pub fn add_execute<T>(
    a: &DeviceBuffer<T>,
    b: &DeviceBuffer<T>,
    output: &mut DeviceBuffer<T>,
    ctx: &DeviceContext,
) -> Result<()>
where
    T: Pod + Add<Output = T> + Send + Sync,
{
    combine_execute(a, b, output, ctx, add_at)
}

/// Execute scalar multiplication on the device: `output = a * scalar`.
pub fn mul_scalar_execute<T>(
    a: &DeviceBuffer<T>,
    scalar: T,
    output: &mut DeviceBuffer<T>,
    ctx: &DeviceContext,
) -> Result<()>
where
    T: Pod + Mul<Output = T> + Send + Sync,
{
    check_len(a.len(), output.len())?;
    if output.is_empty() {
        return Ok(());
    }

    let a_dev = a.storage();
    let out_dev = output.storage_mut();
    ctx.run(|| elemwise_ops::mul_scalar(a_dev, scalar, out_dev, ExecutionStrategy::ParallelElements))?;

    Ok(())
}

/// Execute in-place scalar multiplication on the device: `buffer[i] *= scalar`.
///
/// The host-visible mirror of the buffer stays stale until the caller
/// stages the buffer out with [`to_cpu`](crate::memory::to_cpu).
pub fn scale_inplace_execute<T>(
    buffer: &mut DeviceBuffer<T>,
    scalar: T,
    ctx: &DeviceContext,
) -> Result<()>
where
    T: Pod + Mul<Output = T> + Send + Sync,
{
    if buffer.is_empty() {
        return Ok(());
    }

    let dev = buffer.storage_mut();
    ctx.run(|| elemwise_ops::mul_scalar_inplace(dev, scalar, ExecutionStrategy::ParallelElements))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::Device;
    use crate::memory::{allocate, to_cpu, to_device};

    fn test_ctx() -> DeviceContext {
        DeviceContext::new(Device::new(0).unwrap()).unwrap()
    }

    #[test]
    fn test_add_execute() {
        let ctx = test_ctx();

        let a = to_device(&[1, 2, 3, 4], &ctx).unwrap();
        let b = to_device(&[5, 6, 7, 8], &ctx).unwrap();
        let mut out = allocate::<i32>(4, &ctx).unwrap();

        add_execute(&a, &b, &mut out, &ctx).unwrap();

        assert_eq!(to_cpu(&out, &ctx).unwrap(), vec![6, 8, 10, 12]);
    }

    #[test]
    fn test_combine_execute_custom_kernel() {
        let ctx = test_ctx();

        let a = to_device(&[10, 20, 30], &ctx).unwrap();
        let b = to_device(&[1, 2, 3], &ctx).unwrap();
        let mut out = allocate::<i32>(3, &ctx).unwrap();

        combine_execute(&a, &b, &mut out, &ctx, |i, a, b| a[i] * b[i]).unwrap();

        assert_eq!(to_cpu(&out, &ctx).unwrap(), vec![10, 40, 90]);
    }

    #[test]
    fn test_buffer_length_mismatch() {
        let ctx = test_ctx();

        let a = to_device(&[1, 2, 3], &ctx).unwrap();
        let b = to_device(&[4, 5], &ctx).unwrap();
        let mut out = allocate::<i32>(3, &ctx).unwrap();

        let result = add_execute(&a, &b, &mut out, &ctx);
        assert!(matches!(
            result,
            Err(DeviceError::InvalidBufferSize {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_scale_inplace_execute() {
        let ctx = test_ctx();

        let mut buffer = to_device(&[0, 1, 2, 3, 4], &ctx).unwrap();
        scale_inplace_execute(&mut buffer, 10, &ctx).unwrap();

        assert_eq!(to_cpu(&buffer, &ctx).unwrap(), vec![0, 10, 20, 30, 40]);
    }

    #[test]
    fn test_empty_buffers() {
        let ctx = test_ctx();

        let a = to_device::<i32>(&[], &ctx).unwrap();
        let b = to_device::<i32>(&[], &ctx).unwrap();
        let mut out = allocate::<i32>(0, &ctx).unwrap();

        assert!(add_execute(&a, &b, &mut out, &ctx).is_ok());
        assert!(scale_inplace_execute(&mut out, 10, &ctx).is_ok());
    }
}
