//! Value hashing consistent across the real, complex and quaternion
//! subspaces.
//!
//! Finite doubles hash by reduction modulo the Mersenne prime `2^61 - 1`,
//! the quotient-based rule used by hosts that hash rationals by value: a
//! double equal to an integer hashes exactly as that integer, and a
//! quaternion on the real or `(w, y)` complex subspace hashes exactly as
//! the real or complex value it equals.

const HASH_BITS: u32 = 61;
const HASH_MODULUS: u64 = (1 << HASH_BITS) - 1;
const HASH_INF: i64 = 314_159;

/// Multiplier pairing the two components of a complex value.
const COMPLEX_MULT: u64 = 1_000_003;
/// Multiplier combining the four components of a general quaternion.
/// Distinct from [`COMPLEX_MULT`] so the unit basis elements `i` and `j`
/// land on different hashes.
const QUAT_MULT: u64 = 1_000_033;

/// 2^64 as a double, for rescaling subnormals into the normal range.
const SCALE_UP: f64 = 18_446_744_073_709_551_616.0;

/// Splits a finite nonzero double into `(m, e)` with `0.5 <= |m| < 1`
/// and `x == m * 2^e`, straight off the binary64 encoding.
fn frexp(x: f64) -> (f64, i32) {
    if x == 0.0 || !x.is_finite() {
        return (x, 0);
    }
    let bits = x.to_bits();
    let exp_field = ((bits >> 52) & 0x7ff) as i32;
    if exp_field == 0 {
        let (m, e) = frexp(x * SCALE_UP);
        return (m, e - 64);
    }
    let mantissa = f64::from_bits((bits & !(0x7ff << 52)) | (1022 << 52));
    (mantissa, exp_field - 1022)
}

/// Hashes a double by the quotient rule: reduce `|x|` modulo `2^61 - 1`
/// 28 mantissa bits at a time, rotate the leftover exponent back in,
/// apply the sign, and remap the reserved value `-1` to `-2`.
/// Infinities hash to `±314159`; NaN hashes to `0`.
pub fn hash_real(v: f64) -> i64 {
    if v.is_nan() {
        return 0;
    }
    if v.is_infinite() {
        return if v > 0.0 { HASH_INF } else { -HASH_INF };
    }

    let (mut m, mut e) = frexp(v);
    let sign = if m < 0.0 {
        m = -m;
        -1
    } else {
        1
    };

    let mut x: u64 = 0;
    while m != 0.0 {
        x = ((x << 28) & HASH_MODULUS) | (x >> (HASH_BITS - 28));
        m *= 268_435_456.0; // 2^28
        e -= 28;
        let y = m as u64;
        m -= y as f64;
        x += y;
        if x >= HASH_MODULUS {
            x -= HASH_MODULUS;
        }
    }

    let bits = HASH_BITS as i32;
    let rot = if e >= 0 {
        e % bits
    } else {
        bits - 1 - ((-1 - e) % bits)
    } as u32;
    x = ((x << rot) & HASH_MODULUS) | (x >> (HASH_BITS - rot));

    let mut result = sign * x as i64;
    if result == -1 {
        result = -2;
    }
    result
}

/// Hashes a complex pair with the same pairing rule complex hosts use:
/// `hash(re) + 1000003 · hash(im)` with wraparound, `-1` remapped.
pub fn hash_complex(re: f64, im: f64) -> i64 {
    let combined = (hash_real(re) as u64)
        .wrapping_add(COMPLEX_MULT.wrapping_mul(hash_real(im) as u64));
    dodge_reserved(combined)
}

/// Hashes four quaternion components. Callers dispatch the real and
/// complex subspaces to [`hash_real`]/[`hash_complex`] before falling
/// through to this general combination.
pub(crate) fn hash_parts(w: f64, x: f64, y: f64, z: f64) -> i64 {
    let hz = hash_real(z) as u64;
    let hy = (hash_real(y) as u64).wrapping_add(QUAT_MULT.wrapping_mul(hz));
    let hx = (hash_real(x) as u64).wrapping_add(QUAT_MULT.wrapping_mul(hy));
    let combined = (hash_real(w) as u64).wrapping_add(QUAT_MULT.wrapping_mul(hx));
    dodge_reserved(combined)
}

fn dodge_reserved(combined: u64) -> i64 {
    if combined as i64 == -1 {
        -2
    } else {
        combined as i64
    }
}
