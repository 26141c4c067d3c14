use crate::quaternion::{Quaternion, QuaternionError};
use crate::traits::FloatScalar;

/// Dot-product threshold above which [`slerp`] falls back to normalized
/// linear interpolation.
pub const DEFAULT_CLEARANCE: f64 = 0.999;

/// Spherical linear interpolation with [`DEFAULT_CLEARANCE`].
///
/// See [`slerp_with_clearance`].
///
/// ```
/// use hamilton::{slerp, Quaternion};
///
/// let q1 = Quaternion::new(1.0_f64, [0.6, 0.8, 0.0]);
/// let q2 = Quaternion::new(2.0_f64, [-0.8, 0.0, -0.6]);
/// let q = slerp(&q1, &q2, 0.1).unwrap();
/// assert!((q.norm() - 1.0).abs() < 1e-12);
/// assert!((q.w() - 0.7705652764449337).abs() < 1e-12);
/// ```
pub fn slerp<T: FloatScalar>(
    q1: &Quaternion<T>,
    q2: &Quaternion<T>,
    t: T,
) -> Result<Quaternion<T>, QuaternionError> {
    let clearance = T::from(DEFAULT_CLEARANCE).unwrap();
    slerp_with_clearance(q1, q2, t, clearance)
}

/// Spherical linear interpolation from `q1` (`t = 0`) to `q2` (`t = 1`).
///
/// Both inputs are normalized first, so they need not be unit length. The
/// result is a unit quaternion on the shorter great-circle arc between them.
///
/// - If the normalized inputs have `dot > clearance` they are treated as
///   nearly parallel and the result is the normalized linear interpolation
///   `q1 + (q2 - q1) t`.
/// - If `dot < 0`, `q1` is replaced by its [antipode](Quaternion::antipodal)
///   (all four components negated, the same rotation) so interpolation takes
///   the short way round.
/// - If the remaining angle is exactly zero (possible when
///   `clearance >= 1`), the normalized `q1` is returned.
///
/// `t` is not clamped; values outside `[0, 1]` extrapolate along the arc.
///
/// # Errors
///
/// [`QuaternionError::ZeroNorm`] if either input has zero norm.
pub fn slerp_with_clearance<T: FloatScalar>(
    q1: &Quaternion<T>,
    q2: &Quaternion<T>,
    t: T,
    clearance: T,
) -> Result<Quaternion<T>, QuaternionError> {
    let mut q1n = q1.normalize()?;
    let q2n = q2.normalize()?;
    let mut dot = q1n.dot(&q2n);

    if dot > clearance {
        return (q1n + (q2n - q1n) * t).normalize();
    } else if dot < T::zero() {
        q1n = q1n.antipodal();
        dot = -dot;
    }

    // Rounding can push |dot| a hair past 1 when clearance >= 1
    let angle = dot.min(T::one()).acos();
    let sin_angle = angle.sin();
    if sin_angle == T::zero() {
        return Ok(q1n);
    }

    let a = ((T::one() - t) * angle).sin() / sin_angle;
    let b = (t * angle).sin() / sin_angle;
    (q1n * a + q2n * b).normalize()
}
