//! Element-wise kernels on raw slices.
//!
//! Per-index kernels read only their own index of each input and
//! produce one output value: `output[i] = f(a[i], b[i])`. The slice
//! variants are the serial loops over those kernels.

use core::ops::{Add, Mul, Sub};

/// Per-index addition: `a[idx] + b[idx]`.
///
/// Reads only index `idx` of each input.
#[inline]
pub fn add_at<T: Add<Output = T> + Copy>(idx: usize, a: &[T], b: &[T]) -> T {
    a[idx] + b[idx]
}

/// Per-index multiplication: `a[idx] * b[idx]`.
#[inline]
pub fn mul_at<T: Mul<Output = T> + Copy>(idx: usize, a: &[T], b: &[T]) -> T {
    a[idx] * b[idx]
}

/// Per-index subtraction: `a[idx] - b[idx]`.
#[inline]
pub fn sub_at<T: Sub<Output = T> + Copy>(idx: usize, a: &[T], b: &[T]) -> T {
    a[idx] - b[idx]
}

/// Per-index scalar multiplication: `a[idx] * scalar`.
#[inline]
pub fn mul_scalar_at<T: Mul<Output = T> + Copy>(idx: usize, a: &[T], scalar: T) -> T {
    a[idx] * scalar
}

/// Serial in-place scalar multiplication: `x[i] *= scalar`.
pub fn mul_scalar_slice_inplace<T: Mul<Output = T> + Copy>(x: &mut [T], scalar: T) {
    for v in x.iter_mut() {
        *v = *v * scalar;
    }
}
