//! Device execution context and device-resident buffers.
//!
//! The context owns a dedicated thread pool that plays the role of the
//! accelerator's execution units: kernels launched through it run one
//! logical task per index with no ordering guarantee between tasks.
//! Dispatch is synchronous from the host's perspective; when an
//! operation returns, all of its tasks have completed.

use crate::device::Device;
use crate::error::{DeviceError, Result};
use bytemuck::Pod;

/// Execution context for a [`Device`].
///
/// Wraps the device's thread pool and provides the entry point for
/// launching per-index kernels. Host code never executes kernels on the
/// calling thread through this context.
pub struct DeviceContext {
    device: Device,
    pool: rayon::ThreadPool,
}

impl DeviceContext {
    /// Create a context with one execution unit per available core.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::DeviceNotAvailable`] if the execution
    /// context cannot be initialized.
    pub fn new(device: Device) -> Result<Self> {
        Self::with_execution_units(device, 0)
    }

    /// Create a context with an explicit number of execution units.
    ///
    /// `units == 0` selects one unit per available core.
    pub fn with_execution_units(device: Device, units: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(units)
            .thread_name(|i| format!("elemwise-device-{}", i))
            .build()
            .map_err(|e| DeviceError::DeviceNotAvailable(e.to_string()))?;
        Ok(Self { device, pool })
    }

    /// Get the device this context executes on.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Number of execution units in the context.
    pub fn execution_units(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Block until all previously launched operations have completed.
    ///
    /// Every dispatch through this context is already synchronous, so
    /// this is a no-op kept for callers that want an explicit sync point.
    pub fn synchronize(&self) -> Result<()> {
        Ok(())
    }

    /// Run a closure on the device's execution units, blocking until done.
    pub(crate) fn run<R, F>(&self, f: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        self.pool.install(f)
    }
}

impl std::fmt::Debug for DeviceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceContext")
            .field("device", &self.device)
            .field("execution_units", &self.execution_units())
            .finish()
    }
}

/// Device-resident buffer of `T` elements.
///
/// Backing storage belongs to the device's memory space: host code
/// cannot read it directly and must stage data out with
/// [`to_cpu`](crate::memory::to_cpu) (or [`with_staged`](crate::memory::with_staged))
/// before the values are host-visible.
pub struct DeviceBuffer<T: Pod> {
    storage: Vec<T>,
}

impl<T: Pod> DeviceBuffer<T> {
    /// Wrap device storage in a buffer handle.
    pub(crate) fn from_storage(storage: Vec<T>) -> Self {
        Self { storage }
    }

    /// Get the number of elements in the buffer.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Buffer size in bytes.
    pub fn size_bytes(&self) -> usize {
        std::mem::size_of_val(self.storage.as_slice())
    }

    /// Device-side view of the storage. Not exposed to host code.
    pub(crate) fn storage(&self) -> &[T] {
        &self.storage
    }

    /// Mutable device-side view of the storage. Not exposed to host code.
    pub(crate) fn storage_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }
}
