//! Transcendental functions, polar form and small utilities.
//!
//! Every unary function here acts in the plane spanned by the real axis
//! and the unit imaginary direction `n̂` of its argument: reduce to the
//! complex number `w + i·|v|`, apply the one-dimensional function, and
//! map the result `a + i·b` back to `(a, b·n̂)`. Two properties follow
//! directly: results agree with the real and complex functions on those
//! subspaces, and the imaginary direction is preserved through every
//! function. On the real subspace (`|v| = 0`) the direction defaults to
//! `ĵ`, matching the `(w, y)` complex view of this library.

use crate::error::{QuatError, Result};
use crate::{Quaternion, Vec3};

use num_complex::Complex64;

/// Default relative tolerance of [`isclose`].
pub const DEFAULT_REL_TOL: f64 = 1e-9;

impl Quaternion {
    /// Applies a complex function in the plane spanned by the real axis
    /// and this quaternion's imaginary direction.
    fn lift(&self, f: impl FnOnce(Complex64) -> Complex64) -> Quaternion {
        let fz = f(Complex64::new(self.w, self.imag().length()));
        Quaternion::from_parts(fz.re, self.axis() * fz.im)
    }

    /// The exponential `e^w · (cos|v| + n̂·sin|v|)`.
    pub fn exp(&self) -> Quaternion {
        let n = self.imag().length();
        let (sin_n, cos_n) = n.sin_cos();
        let scale = self.w.exp();
        Quaternion::from_parts(scale * cos_n, self.axis() * (scale * sin_n))
    }

    /// The natural logarithm `(ln|q|, n̂·acos(w/|q|))`.
    ///
    /// Fails with a domain error for the zero quaternion.
    pub fn ln(&self) -> Result<Quaternion> {
        let norm = self.abs();
        if norm == 0.0 {
            return Err(QuatError::Domain("logarithm of the zero quaternion"));
        }
        let phi = (self.w / norm).clamp(-1.0, 1.0).acos();
        Ok(Quaternion::from_parts(norm.ln(), self.axis() * phi))
    }

    /// The base-10 logarithm, `ln(q) / ln(10)`.
    pub fn log10(&self) -> Result<Quaternion> {
        Ok(self.ln()? / std::f64::consts::LN_10)
    }

    /// The principal square root, `exp(ln(q)/2)`; the square root of
    /// zero is zero.
    pub fn sqrt(&self) -> Quaternion {
        match self.ln() {
            Ok(log) => (log * 0.5).exp(),
            Err(_) => Quaternion::ZERO,
        }
    }

    /// Raises to a real power, `exp(ln(q)·r)`.
    pub fn powf(&self, r: f64) -> Result<Quaternion> {
        Ok((self.ln()? * r).exp())
    }

    /// Raises to a quaternion power, `exp(ln(q)·p)`.
    ///
    /// Inherits the branch conventions of [`Quaternion::ln`] and the
    /// operand order of the Hamilton product.
    pub fn powq(&self, p: &Quaternion) -> Result<Quaternion> {
        Ok((self.ln()? * *p).exp())
    }

    /// Sine.
    pub fn sin(&self) -> Quaternion {
        self.lift(|z| z.sin())
    }

    /// Cosine.
    pub fn cos(&self) -> Quaternion {
        self.lift(|z| z.cos())
    }

    /// Tangent.
    pub fn tan(&self) -> Quaternion {
        self.lift(|z| z.tan())
    }

    /// Hyperbolic sine.
    pub fn sinh(&self) -> Quaternion {
        self.lift(|z| z.sinh())
    }

    /// Hyperbolic cosine.
    pub fn cosh(&self) -> Quaternion {
        self.lift(|z| z.cosh())
    }

    /// Hyperbolic tangent.
    pub fn tanh(&self) -> Quaternion {
        self.lift(|z| z.tanh())
    }

    /// Inverse sine, with the complex branch cuts.
    pub fn asin(&self) -> Quaternion {
        self.lift(|z| z.asin())
    }

    /// Inverse cosine, with the complex branch cuts.
    pub fn acos(&self) -> Quaternion {
        self.lift(|z| z.acos())
    }

    /// Inverse tangent, with the complex branch cuts.
    pub fn atan(&self) -> Quaternion {
        self.lift(|z| z.atan())
    }

    /// Inverse hyperbolic sine.
    pub fn asinh(&self) -> Quaternion {
        self.lift(|z| z.asinh())
    }

    /// Inverse hyperbolic cosine.
    pub fn acosh(&self) -> Quaternion {
        self.lift(|z| z.acosh())
    }

    /// Inverse hyperbolic tangent.
    pub fn atanh(&self) -> Quaternion {
        self.lift(|z| z.atanh())
    }

    /// The polar form `(|q|, atan2(|v|, w), n̂)`.
    ///
    /// [`rect`] is the inverse; for the zero quaternion the angle is 0
    /// and the axis is `ĵ`.
    pub fn polar(&self) -> (f64, f64, Vec3) {
        let n = self.imag().length();
        (self.abs(), n.atan2(self.w), self.axis())
    }
}

/// Rebuilds a quaternion from polar form: `r·(cos φ, sin φ·n̂)`.
///
/// The axis is taken as given and is expected to be unit length, as
/// produced by [`Quaternion::polar`].
pub fn rect(r: f64, phi: f64, axis: impl Into<Vec3>) -> Quaternion {
    let (sin_phi, cos_phi) = phi.sin_cos();
    Quaternion::from_parts(r * cos_phi, axis.into() * (r * sin_phi))
}

/// The unit imaginary direction of `q`; see [`Quaternion::axis`].
pub fn axis(q: &Quaternion) -> Vec3 {
    q.axis()
}

/// Four-component dot product.
pub fn dot(p: &Quaternion, q: &Quaternion) -> f64 {
    p.dot(q)
}

/// Component-wise linear interpolation `(1−t)·p + t·q`.
pub fn lerp(p: &Quaternion, q: &Quaternion, t: f64) -> Quaternion {
    *p * (1.0 - t) + *q * t
}

/// Approximate equality with the default relative tolerance of 1e-9 and
/// no absolute floor; see [`isclose_with`].
pub fn isclose(p: &Quaternion, q: &Quaternion) -> bool {
    isclose_with(p, q, DEFAULT_REL_TOL, 0.0)
}

/// True iff `|p − q| ≤ max(rel_tol · max(|p|, |q|), abs_tol)`.
pub fn isclose_with(p: &Quaternion, q: &Quaternion, rel_tol: f64, abs_tol: f64) -> bool {
    (*p - *q).abs() <= f64::max(rel_tol * f64::max(p.abs(), q.abs()), abs_tol)
}

/// Raises a positive real to a quaternion power, `exp(ln(r)·q)`.
///
/// Fails with a domain error for a non-positive base.
pub fn real_pow(base: f64, exponent: &Quaternion) -> Result<Quaternion> {
    if base <= 0.0 {
        return Err(QuatError::Domain(
            "real base of a quaternion power must be positive",
        ));
    }
    Ok((*exponent * base.ln()).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TAU;

    #[test]
    fn euler_identity_on_each_axis() {
        for unit in [Quaternion::I, Quaternion::J, Quaternion::K] {
            let r = (-unit * (TAU / 2.0)).exp() + 1.0;
            assert!(r.abs() <= 1.0e-12, "exp(-u*pi) + 1 = {r}");
        }
    }

    #[test]
    fn exp_of_a_real_stays_real_and_matches_f64() {
        let q = Quaternion::from_real(1.75);
        let e = q.exp();
        assert_eq!(e.imag(), Vec3::ZERO);
        assert_eq!(e.w, 1.75_f64.exp());
    }

    #[test]
    fn log_of_a_negative_real_lands_on_the_j_axis() {
        // The complex plane of this library is (w, y), so ln(-1) = pi*j.
        let l = Quaternion::from_real(-1.0).ln().unwrap();
        assert!((l.w).abs() < 1e-15);
        assert!((l.y - std::f64::consts::PI).abs() < 1e-15);
        assert_eq!(l.x, 0.0);
        assert_eq!(l.z, 0.0);
    }

    #[test]
    fn log_of_zero_is_a_domain_error() {
        assert!(matches!(
            Quaternion::ZERO.ln(),
            Err(QuatError::Domain(_))
        ));
        assert!(Quaternion::ZERO.log10().is_err());
        assert!(Quaternion::ZERO.powf(0.5).is_err());
    }

    #[test]
    fn sqrt_special_cases() {
        assert_eq!(Quaternion::ZERO.sqrt(), Quaternion::ZERO);

        let two = Quaternion::from_real(4.0).sqrt();
        assert!(isclose(&two, &Quaternion::from_real(2.0)));

        let a = Quaternion::new(1.23, 4.56, -7.89, 2.456);
        let s = a.sqrt();
        assert!(isclose(&(s * s), &a));
    }

    #[test]
    fn tan_is_sin_over_cos() {
        let q = Quaternion::new(0.3, -0.4, 0.5, 0.6);
        let t = q.sin() / q.cos();
        assert!(isclose(&t, &q.tan()));
    }

    #[test]
    fn polar_and_rect_are_inverse() {
        let q = Quaternion::new(3.16, 0.32, -1.48, -2.8);
        let (r, phi, n) = q.polar();
        assert!(isclose(&rect(r, phi, n), &q));

        // Real subspace: the axis defaults to j and still round-trips.
        let q = Quaternion::from_real(-2.5);
        let (r, phi, n) = q.polar();
        assert_eq!(n, Vec3::UNIT_Y);
        assert!(isclose(&rect(r, phi, n), &q));
    }

    #[test]
    fn lerp_is_the_affine_combination() {
        let a = Quaternion::new(3.16, -1.32, -1.48, -2.8);
        let b = Quaternion::new(-1.32, -3.48, -2.8, 3.142);

        assert!((lerp(&a, &b, 0.5) - (a + b) / 2.0).abs() < 1e-15);
        assert!((lerp(&a, &b, 0.75) - (a + b * 3.0) / 4.0).abs() < 1e-15);
        assert!((lerp(&a, &-b, 0.9) - (a - b * 9.0) / 10.0).abs() < 1e-15);
    }

    #[test]
    fn isclose_scales_with_magnitude() {
        let a = Quaternion::from_real(1.23e10);
        let b = a + 0.001;
        assert_ne!(a, b);
        assert!(isclose(&a, &b));
        assert!(isclose(&a, &a));
        assert!(!isclose(
            &Quaternion::from_real(1.0),
            &Quaternion::from_real(1.1)
        ));
        assert!(isclose_with(
            &Quaternion::from_real(1.0),
            &Quaternion::from_real(1.05),
            0.0,
            0.1
        ));
    }

    #[test]
    fn real_pow_requires_a_positive_base() {
        assert!(real_pow(0.0, &Quaternion::ONE).is_err());
        assert!(real_pow(-2.0, &Quaternion::ONE).is_err());

        let b = Quaternion::new(7.8, 9.0, -1.2, -3.4);
        let p = real_pow(2.3456, &b).unwrap();
        let q = (b * 2.3456_f64.ln()).exp();
        assert!(isclose(&p, &q));
    }
}
