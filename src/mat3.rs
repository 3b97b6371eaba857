use crate::Vec3;
use approx::{AbsDiffEq, RelativeEq};

/// Row-major 3×3 matrix used for rotation extraction and application.
///
/// * Stored as three rows of three `f64` values.
/// * Only rotation-shaped uses are supported; there is no inversion or
///   decomposition beyond what the quaternion conversions need.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    /// Creates a matrix from rows.
    pub const fn new(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Returns row `r`; panics when `r >= 3`.
    pub const fn row(&self, r: usize) -> [f64; 3] {
        self.rows[r]
    }

    /// Entry at row `r`, column `c`; panics when out of range.
    pub const fn at(&self, r: usize, c: usize) -> f64 {
        self.rows[r][c]
    }

    /// Returns the rows as a nested array.
    pub const fn to_rows(self) -> [[f64; 3]; 3] {
        self.rows
    }

    /// Applies the matrix to a column vector (`M · v`).
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        Vec3::new(
            self.rows[0][0] * v.x + self.rows[0][1] * v.y + self.rows[0][2] * v.z,
            self.rows[1][0] * v.x + self.rows[1][1] * v.y + self.rows[1][2] * v.z,
            self.rows[2][0] * v.x + self.rows[2][1] * v.y + self.rows[2][2] * v.z,
        )
    }
}

impl From<[[f64; 3]; 3]> for Mat3 {
    fn from(rows: [[f64; 3]; 3]) -> Self {
        Self::new(rows)
    }
}

/// Matrix product (`self · rhs`). Composition order matches rotation
/// composition: the right-hand factor is applied to a vector first.
impl core::ops::Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = self.rows[r][0] * rhs.rows[0][c]
                    + self.rows[r][1] * rhs.rows[1][c]
                    + self.rows[r][2] * rhs.rows[2][c];
            }
        }
        Self::new(rows)
    }
}

impl AbsDiffEq for Mat3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows
            .iter()
            .zip(other.rows.iter())
            .all(|(a, b)| a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff_eq(y, epsilon)))
    }
}

impl RelativeEq for Mat3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.rows.iter().zip(other.rows.iter()).all(|(a, b)| {
            a.iter()
                .zip(b.iter())
                .all(|(x, y)| x.relative_eq(y, epsilon, max_relative))
        })
    }
}
