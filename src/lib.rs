//! # hamilton
//!
//! Quaternion algebra and its two classical applications: rotating a 3-D
//! vector about an axis and spherical linear interpolation (SLERP) between
//! orientations. No-std compatible, no heap allocation.
//!
//! ## Quick start
//!
//! ```
//! use hamilton::{rotate, slerp, Quaternion};
//! use core::f64::consts::PI;
//!
//! // Interpolate 10% of the way between two (non-unit) orientations.
//! let q1 = Quaternion::new(1.0_f64, [0.6, 0.8, 0.0]);
//! let q2 = Quaternion::new(2.0_f64, [-0.8, 0.0, -0.6]);
//! let q = slerp(&q1, &q2, 0.1).unwrap();
//! assert!((q.norm() - 1.0).abs() < 1e-12);
//!
//! // Half turn about x.
//! let v = rotate([1.0, 1.0, 1.0], [1.0, 0.0, 0.0], PI).unwrap();
//! assert!((v[1] + 1.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`quaternion`]: `Quaternion<T>` value type. Scalar part `w` plus vector
//!   part `[x, y, z]`. Conjugate, norm, normalize, inverse, 4-D dot product,
//!   Hamilton product, addition, subtraction, scalar scaling, and a
//!   `(w, xi, yj, zk)` display form.
//!
//! - [`rotation`]: [`rotate`], axis-angle rotation of a 3-vector through the
//!   sandwich product `q v q⁻¹`.
//!
//! - [`slerp`](mod@slerp): [`slerp()`] and [`slerp_with_clearance`], shortest-arc
//!   interpolation between unit quaternions with a near-parallel lerp fallback.
//!
//! - [`vector`]: [`Vec3<T>`] (`[T; 3]`) and its dot/cross/norm helpers.
//!
//! - [`traits`]: [`FloatScalar`], the element trait (`f32`, `f64`).
//!
//! ## Errors
//!
//! Operations that divide by a quaternion's norm return
//! `Result<_, QuaternionError>`; a zero-norm input yields
//! [`QuaternionError::ZeroNorm`].
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impl |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod quaternion;
pub mod rotation;
pub mod slerp;
pub mod traits;
pub mod vector;

pub use quaternion::{Quaternion, QuaternionError};
pub use rotation::rotate;
pub use slerp::{slerp, slerp_with_clearance, DEFAULT_CLEARANCE};
pub use traits::FloatScalar;
pub use vector::Vec3;
