//! Quaternion scalar and dense quaternion array arithmetic over `f64`.
//!
//! The scalar type [`Quaternion`] carries the full non-commutative
//! algebra (Hamilton product, conjugate, inverse, right-division,
//! powers), a textual literal parser, rotation utilities (angle/axis and
//! rotation-matrix conversions, vector rotation) and a transcendental
//! layer (`exp`, `ln`, trig, hyperbolic and their inverses) that agrees
//! with the real and complex functions on those subspaces. The container
//! type [`QuaternionArray`] is a contiguous, growable buffer of 32-byte
//! slots with extended slicing, byte and file serialization, and a flat
//! `&[f64]` view.
//!
//! One convention to keep in mind throughout: the complex view of a
//! quaternion pairs `(w, y)`, so the `j` axis — not `i` — is the
//! imaginary axis of the embedded complex plane, and the default
//! direction for transcendental results on real inputs.

pub mod array;
pub mod error;
pub mod funcs;
pub mod hash;
pub mod mat3;
mod parse;
pub mod quat;
pub mod vec3;

pub use array::{QuaternionArray, Slice};
pub use error::{QuatError, Result};
pub use funcs::{axis, dot, isclose, isclose_with, lerp, real_pow, rect};
pub use mat3::Mat3;
pub use quat::Quaternion;
pub use vec3::Vec3;

/// Module-level constant values.
pub mod consts {
    use crate::Quaternion;

    /// The zero quaternion (0, 0, 0, 0).
    pub const ZERO: Quaternion = Quaternion::ZERO;
    /// The multiplicative identity (1, 0, 0, 0).
    pub const ONE: Quaternion = Quaternion::ONE;
    /// The unit basis element `i`.
    pub const I: Quaternion = Quaternion::I;
    /// The unit basis element `j`.
    pub const J: Quaternion = Quaternion::J;
    /// The unit basis element `k`.
    pub const K: Quaternion = Quaternion::K;
    /// A full turn in radians, `2π`.
    pub const TAU: f64 = std::f64::consts::TAU;
}

/// Prelude for easy importing of the common types.
pub mod prelude {
    pub use crate::array::{Iter, QuaternionArray, Slice};
    pub use crate::consts;
    pub use crate::error::{QuatError, Result};
    pub use crate::funcs::{axis, dot, isclose, isclose_with, lerp, real_pow, rect};
    pub use crate::mat3::Mat3;
    pub use crate::quat::Quaternion;
    pub use crate::vec3::Vec3;
}
