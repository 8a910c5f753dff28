//! Device handle.

use crate::error::Result;

/// Handle to a data-parallel device.
///
/// Represents the execution context that runs per-index kernels and
/// owns device-resident memory. Obtain a [`DeviceContext`](crate::DeviceContext)
/// from the handle to allocate buffers and launch operations.
#[derive(Debug, Clone)]
pub struct Device {
    device_id: usize,
    name: String,
}

impl Device {
    /// Create a new device handle with the specified device ID.
    ///
    /// # Arguments
    ///
    /// * `device_id` - The device ID (typically 0 for the first device)
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be initialized.
    pub fn new(device_id: usize) -> Result<Self> {
        Ok(Self {
            device_id,
            name: format!("Device {}", device_id),
        })
    }

    /// Get the device ID.
    pub fn device_id(&self) -> usize {
        self.device_id
    }

    /// Get the device name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if this device is available.
    pub fn is_available(&self) -> bool {
        std::thread::available_parallelism().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_creation() {
        let device = Device::new(0);
        assert!(device.is_ok());

        let device = device.unwrap();
        assert_eq!(device.device_id(), 0);
        assert!(!device.name().is_empty());
    }

    #[test]
    fn test_device_is_available() {
        let device = Device::new(0).unwrap();
        assert!(device.is_available());
    }
}
