//! Memory transfer between host and device.
//!
//! Device-resident buffers live in a memory space the host cannot
//! address directly, so data moves through explicit stage-in
//! ([`to_device`]) and stage-out ([`to_cpu`]) copies. No read of the
//! host sequence reflects device-side writes until the stage-out copy
//! completes; [`with_staged`] pairs the two so the copy-back happens on
//! every exit path.

use crate::error::Result;
use crate::runtime::{DeviceBuffer, DeviceContext};
use bytemuck::Pod;

/// Stage host data into a new device buffer.
///
/// # Arguments
///
/// * `data` - Slice of host data to transfer
/// * `ctx` - Device context owning the target memory space
///
/// # Example
///
/// ```rust
/// # use elemwise_device::{Device, DeviceContext, to_device};
/// # let ctx = DeviceContext::new(Device::new(0)?)?;
/// let buffer = to_device(&[1, 2, 3, 4, 5], &ctx)?;
/// assert_eq!(buffer.len(), 5);
/// # Ok::<(), elemwise_device::DeviceError>(())
/// ```
pub fn to_device<T: Pod>(data: &[T], ctx: &DeviceContext) -> Result<DeviceBuffer<T>> {
    let mut buffer = allocate::<T>(data.len(), ctx)?;
    let src = bytemuck::cast_slice::<T, u8>(data);
    bytemuck::cast_slice_mut::<T, u8>(buffer.storage_mut()).copy_from_slice(src);
    Ok(buffer)
}

/// Stage device data back out to host memory.
///
/// This is the only way device-side writes become host-visible.
pub fn to_cpu<T: Pod>(buffer: &DeviceBuffer<T>, _ctx: &DeviceContext) -> Result<Vec<T>> {
    let mut data = vec![T::zeroed(); buffer.len()];
    bytemuck::cast_slice_mut::<T, u8>(&mut data)
        .copy_from_slice(bytemuck::cast_slice::<T, u8>(buffer.storage()));
    Ok(data)
}

/// Allocate a zero-initialized device buffer of `len` elements.
pub fn allocate<T: Pod>(len: usize, _ctx: &DeviceContext) -> Result<DeviceBuffer<T>> {
    Ok(DeviceBuffer::from_storage(vec![T::zeroed(); len]))
}

/// Run a device operation over a staged mirror of `host`, copying the
/// mirror back to `host` on every exit path.
///
/// The closure receives the device buffer and the context. Whether it
/// succeeds or fails, the buffer's final contents are staged out to
/// `host` before this function returns, so the host sequence is never
/// left stale.
///
/// # Example
///
/// ```rust
/// # use elemwise_device::{scale_inplace_execute, Device, DeviceContext, with_staged};
/// # let ctx = DeviceContext::new(Device::new(0)?)?;
/// let mut data = vec![0, 1, 2, 3, 4];
/// with_staged(&mut data, &ctx, |buffer, ctx| {
///     scale_inplace_execute(buffer, 10, ctx)
/// })?;
/// assert_eq!(data, vec![0, 10, 20, 30, 40]);
/// # Ok::<(), elemwise_device::DeviceError>(())
/// ```
pub fn with_staged<T, R, F>(host: &mut [T], ctx: &DeviceContext, f: F) -> Result<R>
where
    T: Pod,
    F: FnOnce(&mut DeviceBuffer<T>, &DeviceContext) -> Result<R>,
{
    let mut buffer = to_device(host, ctx)?;
    let result = f(&mut buffer, ctx);
    // Stage-out runs regardless of the closure's outcome.
    let staged = to_cpu(&buffer, ctx)?;
    host.copy_from_slice(&staged);
    result
}
