//! Accelerator-style offload backend for element-wise operations.
//!
//! This crate models an accelerator whose memory space the host cannot
//! address directly: sequences are staged into device-resident buffers,
//! per-index kernels run as independent data-parallel tasks on the
//! device's execution units, and results become host-visible only after
//! an explicit stage-out copy.
//!
//! # Usage
//!
//! ```rust
//! use elemwise_device::{
//!     add_execute, allocate, to_cpu, to_device, Device, DeviceContext,
//! };
//!
//! let device = Device::new(0)?;
//! let ctx = DeviceContext::new(device)?;
//!
//! // Stage operands in, compute, stage the result out.
//! let a = to_device(&[1, 2, 3, 4, 5], &ctx)?;
//! let b = to_device(&[6, 7, 8, 9, 10], &ctx)?;
//! let mut c = allocate::<i32>(5, &ctx)?;
//! add_execute(&a, &b, &mut c, &ctx)?;
//! assert_eq!(to_cpu(&c, &ctx)?, vec![7, 9, 11, 13, 15]);
//! # Ok::<(), elemwise_device::DeviceError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod device;
pub mod error;
pub mod memory;
pub mod ops;
pub mod runtime;


// Re-exports
pub use device::Device;
pub use error::{DeviceError, Result};
pub use memory::{allocate, to_cpu, to_device, with_staged};
pub use ops::{add_execute, combine_execute, mul_scalar_execute, scale_inplace_execute};
pub use runtime::{DeviceBuffer, DeviceContext};
