//! Plain 3-vectors.
//!
//! A [`Vec3`] is just `[T; 3]`: the imaginary part of a quaternion and the
//! geometric argument of [`rotate`](crate::rotate) share this representation.

use crate::traits::FloatScalar;

/// Ordered 3-vector `[x, y, z]`.
pub type Vec3<T> = [T; 3];

/// Dot product `a · b`.
///
/// Accumulated left to right from zero: `((0 + a₀b₀) + a₁b₁) + a₂b₂`.
///
/// ```
/// use hamilton::vector::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
#[inline]
pub fn dot<T: FloatScalar>(a: &Vec3<T>, b: &Vec3<T>) -> T {
    let mut sum = T::zero();
    for i in 0..3 {
        sum = sum + a[i] * b[i];
    }
    sum
}

/// Cross product `a × b`.
#[inline]
pub fn cross<T: FloatScalar>(a: &Vec3<T>, b: &Vec3<T>) -> Vec3<T> {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Euclidean length `|a|`.
#[inline]
pub fn norm<T: FloatScalar>(a: &Vec3<T>) -> T {
    dot(a, a).sqrt()
}

/// Scale every component by `s`.
#[inline]
pub fn scale<T: FloatScalar>(a: &Vec3<T>, s: T) -> Vec3<T> {
    [a[0] * s, a[1] * s, a[2] * s]
}
