use core::ops::{Add, Mul, Neg, Sub};

use crate::traits::FloatScalar;
use crate::vector::{self, Vec3};

/// Errors from quaternion operations that divide by the norm.
///
/// ```
/// use hamilton::{Quaternion, QuaternionError};
///
/// let zero = Quaternion::new(0.0_f64, [0.0, 0.0, 0.0]);
/// assert_eq!(zero.normalize().unwrap_err(), QuaternionError::ZeroNorm);
/// assert_eq!(zero.inverse().unwrap_err(), QuaternionError::ZeroNorm);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuaternionError {
    /// The quaternion has zero norm, so it cannot be normalized or inverted.
    ZeroNorm,
}

impl core::fmt::Display for QuaternionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            QuaternionError::ZeroNorm => write!(f, "quaternion has zero norm"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for QuaternionError {}

/// Quaternion `w + xi + yj + zk`.
///
/// Scalar part `w` plus vector part `vect = [x, y, z]`. No magnitude is
/// enforced: any quaternion, including zero, can be constructed. Operations
/// that divide by the norm return [`QuaternionError::ZeroNorm`] instead of
/// producing infinities.
///
/// Every operation returns a new value; the type is `Copy`.
///
/// ```
/// use hamilton::Quaternion;
///
/// let q3 = Quaternion::new(1.1_f64, [1.0, 2.9, 3.1]);
/// let q4 = Quaternion::new(1.1_f64, [-2.9, 3.1, -1.0]);
/// let sum = q3 + q4;
/// assert!((sum.w() - 2.2).abs() < 1e-12);
/// assert!((sum.vect()[1] - 6.0).abs() < 1e-12);
///
/// let p = q3 * q3.inverse().unwrap();
/// assert!((p.w() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    w: T,
    vect: Vec3<T>,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Create a quaternion from its scalar and vector parts.
    #[inline]
    pub fn new(w: T, vect: Vec3<T>) -> Self {
        Self { w, vect }
    }

    /// Identity quaternion `(1, [0, 0, 0])`.
    #[inline]
    pub fn identity() -> Self {
        Self {
            w: T::one(),
            vect: [T::zero(); 3],
        }
    }

    /// Pure-vector quaternion `(0, v)`.
    #[inline]
    pub fn from_vector(v: Vec3<T>) -> Self {
        Self { w: T::zero(), vect: v }
    }

    /// Rotation quaternion `(cos(angle/2), sin(angle/2) * axis)`.
    ///
    /// `axis` is used as given; it must already be unit length for the
    /// result to be a unit quaternion.
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let half = angle * T::half();
        let s = half.sin();
        Self {
            w: half.cos(),
            vect: [s * axis[0], s * axis[1], s * axis[2]],
        }
    }
}

impl<T: FloatScalar> Default for Quaternion<T> {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: FloatScalar> From<Vec3<T>> for Quaternion<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        Self::from_vector(v)
    }
}

// ── Accessors ────────────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Scalar (real) part.
    #[inline]
    pub fn w(&self) -> T {
        self.w
    }

    /// Vector (imaginary) part `[x, y, z]`.
    #[inline]
    pub fn vect(&self) -> Vec3<T> {
        self.vect
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Conjugate: `(w, -vect)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self {
            w: self.w,
            vect: [-self.vect[0], -self.vect[1], -self.vect[2]],
        }
    }

    /// Squared norm: `w² + vect · vect`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.w * self.w + vector::dot(&self.vect, &self.vect)
    }

    /// Norm (magnitude), the Euclidean length of `[w, x, y, z]`.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm: `(w / n, vect / n)`.
    ///
    /// A norm whose square underflows to zero counts as zero.
    pub fn normalize(&self) -> Result<Self, QuaternionError> {
        let n = self.norm();
        if n == T::zero() {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(Self {
            w: self.w / n,
            vect: [self.vect[0] / n, self.vect[1] / n, self.vect[2] / n],
        })
    }

    /// Negate all four components: `(-w, -vect)`.
    ///
    /// This is the antipodal point on the 4-sphere, *not* the multiplicative
    /// inverse. `q` and `-q` encode the same rotation, which is what lets
    /// SLERP swap one for the other to travel the shorter arc.
    #[inline]
    pub fn antipodal(&self) -> Self {
        Self {
            w: -self.w,
            vect: [-self.vect[0], -self.vect[1], -self.vect[2]],
        }
    }

    /// Multiplicative inverse: `conjugate / norm²`, so that `q * q⁻¹ = 1`.
    ///
    /// For unit quaternions this equals the conjugate. Fails when `1 / norm²`
    /// is not finite, which includes norms whose square is subnormal.
    pub fn inverse(&self) -> Result<Self, QuaternionError> {
        let n = self.norm();
        let n2 = n * n;
        if n2 == T::zero() {
            return Err(QuaternionError::ZeroNorm);
        }
        let inv_n2 = T::one() / n2;
        if !inv_n2.is_finite() {
            return Err(QuaternionError::ZeroNorm);
        }
        Ok(self.conjugate() * inv_n2)
    }

    /// 4-D dot product `w₁w₂ + vect₁ · vect₂`.
    ///
    /// For unit quaternions this is the cosine of the angle between them.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + vector::dot(&self.vect, &rhs.vect)
    }
}

// ── Rotation and interpolation ───────────────────────────────────────

impl<T: FloatScalar> Quaternion<T> {
    /// Sandwich product `q v q⁻¹`, returning the vector part.
    ///
    /// `v` is embedded as the pure quaternion `(0, v)`. For a unit `self`
    /// this is a rigid rotation; otherwise `v` is also scaled.
    pub fn rotate_vector(&self, v: Vec3<T>) -> Result<Vec3<T>, QuaternionError> {
        let inv = self.inverse()?;
        Ok((*self * Self::from_vector(v) * inv).vect)
    }

    /// Spherical linear interpolation from `self` to `other` with the
    /// default clearance. See [`slerp`](crate::slerp::slerp).
    #[inline]
    pub fn slerp(&self, other: &Self, t: T) -> Result<Self, QuaternionError> {
        crate::slerp::slerp(self, other, t)
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product: q1 * q2
// Expanded by hand; the term order is fixed so results match bit for bit.
impl<T: FloatScalar> Mul for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (&self.vect, &rhs.vect);
        Self {
            w: self.w * rhs.w - vector::dot(a, b),
            vect: [
                self.w * b[0] + rhs.w * a[0] + a[1] * b[2] - a[2] * b[1],
                self.w * b[1] + rhs.w * a[1] + a[2] * b[0] - a[0] * b[2],
                self.w * b[2] + rhs.w * a[2] + a[0] * b[1] - a[1] * b[0],
            ],
        }
    }
}

impl<T: FloatScalar> Add for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            w: self.w + rhs.w,
            vect: [
                self.vect[0] + rhs.vect[0],
                self.vect[1] + rhs.vect[1],
                self.vect[2] + rhs.vect[2],
            ],
        }
    }
}

impl<T: FloatScalar> Sub for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            w: self.w - rhs.w,
            vect: [
                self.vect[0] - rhs.vect[0],
                self.vect[1] - rhs.vect[1],
                self.vect[2] - rhs.vect[2],
            ],
        }
    }
}

// Scalar multiplication: q * s
impl<T: FloatScalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self {
            w: self.w * rhs,
            vect: vector::scale(&self.vect, rhs),
        }
    }
}

impl<T: FloatScalar> Mul<T> for &Quaternion<T> {
    type Output = Quaternion<T>;
    #[inline]
    fn mul(self, rhs: T) -> Quaternion<T> {
        (*self).mul(rhs)
    }
}

// Quaternion is Copy, so &Quaternion ops just deref and delegate.
macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: FloatScalar> $Op<Quaternion<T>> for &Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: Quaternion<T>) -> Quaternion<T> {
                (*self).$method(rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                self.$method(*rhs)
            }
        }

        impl<T: FloatScalar> $Op<&Quaternion<T>> for &Quaternion<T> {
            type Output = Quaternion<T>;
            #[inline]
            fn $method(self, rhs: &Quaternion<T>) -> Quaternion<T> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Mul, mul);
forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// s * q (concrete impls to avoid orphan rules)
macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Quaternion<$t>> for $t {
                type Output = Quaternion<$t>;

                #[inline]
                fn mul(self, rhs: Quaternion<$t>) -> Quaternion<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64);

impl<T: FloatScalar> Neg for Quaternion<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.antipodal()
    }
}

impl<T: FloatScalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    #[inline]
    fn neg(self) -> Quaternion<T> {
        self.antipodal()
    }
}

// ── Display ──────────────────────────────────────────────────────────

// `(w, xi, yj, zk)`; a precision flag applies to every component.
impl<T: core::fmt::Display> core::fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [x, y, z] = &self.vect;
        match f.precision() {
            Some(p) => write!(
                f,
                "({:.*}, {:.*}i, {:.*}j, {:.*}k)",
                p, self.w, p, x, p, y, p, z
            ),
            None => write!(f, "({}, {}i, {}j, {}k)", self.w, x, y, z),
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────
