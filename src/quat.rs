use crate::error::{QuatError, Result};
use crate::{hash, Mat3, Vec3};

use bytemuck::{Pod, Zeroable};
use num_complex::Complex64;
use num_traits::{One, Zero};

use std::fmt;
use std::iter;

/// Quaternion `w + x·i + y·j + z·k` over IEEE-754 binary64 components,
/// with `i² = j² = k² = ijk = −1`.
///
/// * Values are immutable: every operation returns a new quaternion.
/// * The 2D complex view of this library pairs `(w, y)` — the imaginary
///   part of [`Quaternion::complex`] is `y`, not `x` — and the `j` axis
///   is therefore the default imaginary direction wherever a vector part
///   is absent.
/// * The in-memory layout is the four components in `w, x, y, z` order,
///   32 bytes total, which is also the array-slot and wire layout.
///
/// # Examples
/// ```
/// use quaternion_math::Quaternion;
///
/// let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
/// assert_eq!(q * Quaternion::ONE, q);
/// assert_eq!(Quaternion::I * Quaternion::J, Quaternion::K);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Default, Pod, Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// The zero quaternion (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// The multiplicative identity (1, 0, 0, 0).
    pub const ONE: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// The unit basis element `i`.
    pub const I: Self = Self::new(0.0, 1.0, 0.0, 0.0);

    /// The unit basis element `j`.
    pub const J: Self = Self::new(0.0, 0.0, 1.0, 0.0);

    /// The unit basis element `k`.
    pub const K: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from components.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Promotes a real to `(r, 0, 0, 0)`.
    pub const fn from_real(r: f64) -> Self {
        Self::new(r, 0.0, 0.0, 0.0)
    }

    /// Promotes a complex value `a + b·i` to `(a, 0, b, 0)`.
    ///
    /// The imaginary part lands on the `j` axis: the complex plane of
    /// this library is the `(w, y)` plane.
    pub fn from_complex(c: Complex64) -> Self {
        Self::new(c.re, 0.0, c.im, 0.0)
    }

    /// Assembles a quaternion from a scalar part and a vector part.
    pub fn from_parts(w: f64, v: Vec3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// Constructs the unit rotation quaternion for a turn of `angle`
    /// radians about `axis`.
    ///
    /// The axis is normalised first, so the result is always unit length:
    /// `(cos(a/2), sin(a/2)·û)`. An axis of zero or non-finite length
    /// cannot define a rotation and fails with a value error.
    pub fn from_angle_axis(angle: f64, axis: impl Into<Vec3>) -> Result<Self> {
        let axis = axis.into();
        let unit = axis
            .normalized()
            .ok_or_else(|| QuatError::value("rotation axis must have positive finite length"))?;
        let (sin_half, cos_half) = (angle * 0.5).sin_cos();
        Ok(Self::from_parts(cos_half, unit * sin_half))
    }

    /// Extracts the unit quaternion of a proper rotation matrix.
    ///
    /// Selects the largest of the four diagonal combinations and derives
    /// the remaining components from the off-diagonal sums/differences,
    /// which stays well-conditioned for rotations near a half turn where
    /// a single-formula extraction cancels catastrophically. The matrix
    /// is assumed orthogonal with determinant +1; no check is made.
    pub fn from_rotation_matrix(m: &Mat3) -> Self {
        let t_w = 1.0 + m.at(0, 0) + m.at(1, 1) + m.at(2, 2);
        let t_x = 1.0 + m.at(0, 0) - m.at(1, 1) - m.at(2, 2);
        let t_y = 1.0 - m.at(0, 0) + m.at(1, 1) - m.at(2, 2);
        let t_z = 1.0 - m.at(0, 0) - m.at(1, 1) + m.at(2, 2);

        if t_w >= t_x && t_w >= t_y && t_w >= t_z {
            let w = 0.5 * t_w.sqrt();
            let d = 4.0 * w;
            Self::new(
                w,
                (m.at(2, 1) - m.at(1, 2)) / d,
                (m.at(0, 2) - m.at(2, 0)) / d,
                (m.at(1, 0) - m.at(0, 1)) / d,
            )
        } else if t_x >= t_y && t_x >= t_z {
            let x = 0.5 * t_x.sqrt();
            let d = 4.0 * x;
            Self::new(
                (m.at(2, 1) - m.at(1, 2)) / d,
                x,
                (m.at(0, 1) + m.at(1, 0)) / d,
                (m.at(0, 2) + m.at(2, 0)) / d,
            )
        } else if t_y >= t_z {
            let y = 0.5 * t_y.sqrt();
            let d = 4.0 * y;
            Self::new(
                (m.at(0, 2) - m.at(2, 0)) / d,
                (m.at(0, 1) + m.at(1, 0)) / d,
                y,
                (m.at(1, 2) + m.at(2, 1)) / d,
            )
        } else {
            let z = 0.5 * t_z.sqrt();
            let d = 4.0 * z;
            Self::new(
                (m.at(1, 0) - m.at(0, 1)) / d,
                (m.at(0, 2) + m.at(2, 0)) / d,
                (m.at(1, 2) + m.at(2, 1)) / d,
                z,
            )
        }
    }

    /// The real (scalar) part.
    pub const fn real(&self) -> f64 {
        self.w
    }

    /// The imaginary (vector) part `(x, y, z)`.
    pub const fn imag(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Alias for [`Quaternion::imag`].
    pub const fn vector(&self) -> Vec3 {
        self.imag()
    }

    /// The `(w, y)` complex view, `w + y·i`.
    pub fn complex(&self) -> Complex64 {
        Complex64::new(self.w, self.y)
    }

    /// Legacy spelling of `w`.
    pub const fn r(&self) -> f64 {
        self.w
    }

    /// Legacy spelling of `x`.
    pub const fn i(&self) -> f64 {
        self.x
    }

    /// Legacy spelling of `y`.
    pub const fn j(&self) -> f64 {
        self.y
    }

    /// Legacy spelling of `z`.
    pub const fn k(&self) -> f64 {
        self.z
    }

    /// The conjugate `(w, −x, −y, −z)`.
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// The Euclidean norm `sqrt(w² + x² + y² + z²)`, computed with
    /// chained `hypot` so intermediate squares cannot overflow.
    pub fn abs(&self) -> f64 {
        self.w.hypot(self.x).hypot(self.y).hypot(self.z)
    }

    /// The squared norm `w² + x² + y² + z²`.
    pub fn quadrance(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Four-component dot product with another quaternion.
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// The multiplicative inverse `conj(q) / quadrance(q)`.
    ///
    /// Fails with [`QuatError::DivisionByZero`] for the zero quaternion.
    pub fn inverse(&self) -> Result<Self> {
        let q2 = self.quadrance();
        if q2 == 0.0 {
            return Err(QuatError::DivisionByZero);
        }
        Ok(self.conjugate() / q2)
    }

    /// Checked right-division `self · rhs⁻¹`.
    ///
    /// Quaternion multiplication does not commute, so `a / b` is
    /// ambiguous in general; this library defines it as multiplication
    /// by the inverse on the right. Fails with
    /// [`QuatError::DivisionByZero`] when `rhs` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self> {
        Ok(*self * rhs.inverse()?)
    }

    /// Raises to a non-negative integer power by iterated multiplication.
    /// `q⁰` is one for every `q`, the zero quaternion included.
    pub fn powu(&self, n: u32) -> Self {
        let mut acc = Self::ONE;
        for _ in 0..n {
            acc = acc * *self;
        }
        acc
    }

    /// Raises to a signed integer power; negative exponents invert first
    /// and therefore fail with [`QuatError::DivisionByZero`] on zero.
    pub fn powi(&self, n: i32) -> Result<Self> {
        if n >= 0 {
            Ok(self.powu(n as u32))
        } else {
            Ok(self.inverse()?.powu(n.unsigned_abs()))
        }
    }

    /// Rotates a 3D point: `(q · (0, v) · conj(q)).vector()`.
    ///
    /// When `|q| ≠ 1` the result is the rotation scaled by `|q|²`;
    /// no normalisation is applied here. Build the quaternion with
    /// [`Quaternion::from_angle_axis`] for a pure rotation.
    pub fn rotate(&self, v: impl Into<Vec3>) -> Vec3 {
        let p = Self::from_parts(0.0, v.into());
        (*self * p * self.conjugate()).vector()
    }

    /// The rotation angle encoded by a unit quaternion:
    /// `2·atan2(|vector|, w)`, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        2.0 * self.imag().length().atan2(self.w)
    }

    /// The unit rotation axis, or the `j` axis when the vector part is
    /// zero (consistent with the `(w, y)` complex convention).
    pub fn axis(&self) -> Vec3 {
        self.imag().normalized().unwrap_or(Vec3::UNIT_Y)
    }

    /// The 3×3 rotation matrix of a unit quaternion.
    ///
    /// Satisfies `q.matrix().mul_vec(v) == q.rotate(v)` and turns the
    /// Hamilton product into matrix composition.
    pub fn matrix(&self) -> Mat3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);
        Mat3::new([
            [
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y - z * w),
                2.0 * (x * z + y * w),
            ],
            [
                2.0 * (x * y + z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z - x * w),
            ],
            [
                2.0 * (x * z - y * w),
                2.0 * (y * z + x * w),
                1.0 - 2.0 * (x * x + y * y),
            ],
        ])
    }

    /// Value hash, consistent with real and complex hashing: a real-only
    /// quaternion hashes as its real (and as the integer it may equal),
    /// a `(w, 0, y, 0)` quaternion hashes as the complex pair `(w, y)`,
    /// and the general case combines all four components so the unit
    /// basis elements hash pairwise distinctly.
    pub fn hash_value(&self) -> i64 {
        if self.x == 0.0 && self.z == 0.0 {
            if self.y == 0.0 {
                hash::hash_real(self.w)
            } else {
                hash::hash_complex(self.w, self.y)
            }
        } else {
            hash::hash_parts(self.w, self.x, self.y, self.z)
        }
    }
}

/// A quaternion equals a real iff its three imaginary components are
/// zero and the real components compare equal.
impl PartialEq<f64> for Quaternion {
    fn eq(&self, other: &f64) -> bool {
        self.w == *other && self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl PartialEq<Quaternion> for f64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

/// A quaternion equals a complex value iff `x == z == 0` and the `(w, y)`
/// pair matches `(re, im)`.
impl PartialEq<Complex64> for Quaternion {
    fn eq(&self, other: &Complex64) -> bool {
        self.w == other.re && self.y == other.im && self.x == 0.0 && self.z == 0.0
    }
}

impl PartialEq<Quaternion> for Complex64 {
    fn eq(&self, other: &Quaternion) -> bool {
        other == self
    }
}

impl From<f64> for Quaternion {
    fn from(r: f64) -> Self {
        Self::from_real(r)
    }
}

impl From<i32> for Quaternion {
    fn from(r: i32) -> Self {
        Self::from_real(f64::from(r))
    }
}

impl From<Complex64> for Quaternion {
    fn from(c: Complex64) -> Self {
        Self::from_complex(c)
    }
}

impl From<(f64, f64, f64, f64)> for Quaternion {
    fn from(t: (f64, f64, f64, f64)) -> Self {
        Self::new(t.0, t.1, t.2, t.3)
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from(a: [f64; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl core::ops::Neg for Quaternion {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl core::ops::Add for Quaternion {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl core::ops::Sub for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

/// Hamilton product. Non-commutative: `i * j == k` but `j * i == -k`.
impl core::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let (aw, ax, ay, az) = (self.w, self.x, self.y, self.z);
        let (bw, bx, by, bz) = (rhs.w, rhs.x, rhs.y, rhs.z);
        Self::new(
            aw * bw - ax * bx - ay * by - az * bz,
            aw * bx + ax * bw + ay * bz - az * by,
            aw * by + ay * bw + az * bx - ax * bz,
            aw * bz + az * bw + ax * by - ay * bx,
        )
    }
}

/// Right-division `self · rhs⁻¹`; see [`Quaternion::try_div`] for the
/// checked form.
///
/// # Panics
/// Panics when `rhs` is the zero quaternion, like integer division by
/// zero.
impl core::ops::Div for Quaternion {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        match self.try_div(&rhs) {
            Ok(q) => q,
            Err(_) => panic!("division by zero quaternion"),
        }
    }
}

impl core::ops::Add<f64> for Quaternion {
    type Output = Self;
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.w + rhs, self.x, self.y, self.z)
    }
}

impl core::ops::Add<Quaternion> for f64 {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Self::Output {
        rhs + self
    }
}

impl core::ops::Sub<f64> for Quaternion {
    type Output = Self;
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.w - rhs, self.x, self.y, self.z)
    }
}

impl core::ops::Sub<Quaternion> for f64 {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_real(self) - rhs
    }
}

impl core::ops::Mul<f64> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl core::ops::Mul<Quaternion> for f64 {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Self::Output {
        rhs * self
    }
}

/// Component-wise division by a real scalar, with ordinary IEEE
/// semantics for a zero divisor.
impl core::ops::Div<f64> for Quaternion {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl core::ops::Div<Quaternion> for f64 {
    type Output = Quaternion;
    fn div(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_real(self) / rhs
    }
}

impl core::ops::Add<Complex64> for Quaternion {
    type Output = Self;
    fn add(self, rhs: Complex64) -> Self::Output {
        self + Quaternion::from_complex(rhs)
    }
}

impl core::ops::Add<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn add(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_complex(self) + rhs
    }
}

impl core::ops::Sub<Complex64> for Quaternion {
    type Output = Self;
    fn sub(self, rhs: Complex64) -> Self::Output {
        self - Quaternion::from_complex(rhs)
    }
}

impl core::ops::Sub<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn sub(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_complex(self) - rhs
    }
}

impl core::ops::Mul<Complex64> for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Complex64) -> Self::Output {
        self * Quaternion::from_complex(rhs)
    }
}

impl core::ops::Mul<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn mul(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_complex(self) * rhs
    }
}

impl core::ops::Div<Complex64> for Quaternion {
    type Output = Self;
    fn div(self, rhs: Complex64) -> Self::Output {
        self / Quaternion::from_complex(rhs)
    }
}

impl core::ops::Div<Quaternion> for Complex64 {
    type Output = Quaternion;
    fn div(self, rhs: Quaternion) -> Self::Output {
        Quaternion::from_complex(self) / rhs
    }
}

impl core::ops::AddAssign for Quaternion {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Quaternion {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl core::ops::MulAssign<f64> for Quaternion {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl core::ops::DivAssign<f64> for Quaternion {
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl iter::Sum for Quaternion {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |a, b| a + b)
    }
}

impl Zero for Quaternion {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.w == 0.0 && self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}

impl One for Quaternion {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        *self == Self::ONE
    }
}

/// Formats as `w±xi±yj±zk`: all four components, shortest round-trip
/// decimals, imaginary signs taken from the IEEE sign bit. A formatter
/// precision applies to all four components uniformly.
///
/// # Examples
/// ```
/// use quaternion_math::Quaternion;
///
/// let q = Quaternion::new(1.2, -3.4, 5.6, -7.8);
/// assert_eq!(q.to_string(), "1.2-3.4i+5.6j-7.8k");
/// assert_eq!(format!("{q:.2}"), "1.20-3.40i+5.60j-7.80k");
/// ```
impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn component(
            f: &mut fmt::Formatter<'_>,
            value: f64,
            unit: &str,
            leading: bool,
        ) -> fmt::Result {
            let sign = if value.is_sign_negative() {
                "-"
            } else if leading {
                ""
            } else {
                "+"
            };
            let magnitude = value.abs();
            match f.precision() {
                Some(p) => write!(f, "{sign}{magnitude:.p$}{unit}"),
                None => write!(f, "{sign}{magnitude}{unit}"),
            }
        }
        component(f, self.w, "", true)?;
        component(f, self.x, "i", false)?;
        component(f, self.y, "j", false)?;
        component(f, self.z, "k", false)
    }
}

impl approx::AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        (*self - *other).abs() <= epsilon
    }
}

impl approx::RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::EPSILON
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let diff = (*self - *other).abs();
        diff <= epsilon || diff <= max_relative * self.abs().max(other.abs())
    }
}
