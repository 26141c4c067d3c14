use crate::quaternion::{Quaternion, QuaternionError};
use crate::traits::FloatScalar;
use crate::vector::Vec3;

/// Rotate `vector` by `angle` radians about `axis`.
///
/// Builds `q = (cos(angle/2), sin(angle/2) * axis)` and returns the vector
/// part of `q * (0, vector) * q⁻¹`.
///
/// `axis` must be unit length; it is not normalized here. With a non-unit
/// axis the result is still a rotation about the axis direction, but not by
/// `angle`.
///
/// # Errors
///
/// [`QuaternionError::ZeroNorm`] if the rotation quaternion has zero norm.
///
/// ```
/// use hamilton::rotate;
/// use core::f64::consts::PI;
///
/// // 180° about x negates y and z.
/// let r = rotate([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], PI).unwrap();
/// assert!((r[0] - 1.0).abs() < 1e-12);
/// assert!((r[1] + 1.0).abs() < 1e-12);
/// assert!((r[2] + 1.0).abs() < 1e-12);
/// ```
pub fn rotate<T: FloatScalar>(
    vector: Vec3<T>,
    axis: Vec3<T>,
    angle: T,
) -> Result<Vec3<T>, QuaternionError> {
    Quaternion::from_axis_angle(axis, angle).rotate_vector(vector)
}
