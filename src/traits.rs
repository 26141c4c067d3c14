use core::fmt::Debug;
use num_traits::Float;

/// Trait for floating-point quaternion and vector elements.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`. Supplies `sqrt`, `sin`, `cos`, `acos`
/// and friends through [`num_traits::Float`], so the crate works the same
/// with the `std` (system libm) and `libm` (pure Rust) backends.
pub trait FloatScalar: Copy + PartialEq + Debug + Float {
    /// `1 / 2`, used for half-angle computations.
    #[inline]
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl<T: Copy + PartialEq + Debug + Float> FloatScalar for T {}
