//! 2×2 integer matrix algebra modulo `n`, used by the Hill cipher.

use std::fmt;

use crate::error::CipherError;
use crate::utils::number_theory::modular_inverse;

/// 2×2 integer matrix stored row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix2 {
    rows: [[i64; 2]; 2],
}

impl Matrix2 {
    /// Creates a matrix from its rows.
    pub const fn new(rows: [[i64; 2]; 2]) -> Self {
        Matrix2 { rows }
    }

    /// Creates a matrix from four entries read row-major: `[[a, b], [c, d]]`.
    pub const fn from_row_major(a: i64, b: i64, c: i64, d: i64) -> Self {
        Matrix2 {
            rows: [[a, b], [c, d]],
        }
    }

    /// The identity matrix.
    pub const fn identity() -> Self {
        Self::from_row_major(1, 0, 0, 1)
    }

    /// Returns the rows of the matrix.
    pub fn rows(&self) -> [[i64; 2]; 2] {
        self.rows
    }

    /// Returns the entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is greater than 1.
    pub fn get(&self, row: usize, col: usize) -> i64 {
        self.rows[row][col]
    }

    /// Exact determinant `a·d − b·c`, computed without overflow.
    pub fn determinant(&self) -> i128 {
        let [[a, b], [c, d]] = self.rows;
        a as i128 * d as i128 - b as i128 * c as i128
    }

    /// Determinant reduced into `[0, n)`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidDomain`] if `n < 2`.
    pub fn determinant_mod(&self, n: i64) -> Result<i64, CipherError> {
        if n < 2 {
            return Err(CipherError::InvalidDomain { n });
        }
        Ok(self.determinant().rem_euclid(n as i128) as i64)
    }

    /// Adjugate: `[[a, b], [c, d]]` becomes `[[d, −b], [−c, a]]`.
    pub fn adjugate(&self) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::from_row_major(d, -b, -c, a)
    }

    /// Every entry reduced into `[0, n)`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidDomain`] if `n < 2`.
    pub fn reduce(&self, n: i64) -> Result<Self, CipherError> {
        if n < 2 {
            return Err(CipherError::InvalidDomain { n });
        }
        Ok(self.map(|v| v.rem_euclid(n)))
    }

    /// Modular inverse `K⁻¹ = det⁻¹ · adj(K) mod n`.
    ///
    /// # Errors
    /// - [`CipherError::InvalidDomain`] if `n < 2`.
    /// - [`CipherError::KeyNotInvertible`] if the determinant has no inverse modulo `n`.
    pub fn inverse_mod(&self, n: i64) -> Result<Self, CipherError> {
        let det = self.determinant_mod(n)?;
        let det_inv = modular_inverse(n, det)?;
        let reduced_adj = self.reduce(n)?.adjugate();
        Ok(reduced_adj.map(|v| (det_inv * v).rem_euclid(n)))
    }

    /// Product `self · rhs`, reduced modulo `n`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidDomain`] if `n < 2`.
    pub fn mul_mod(&self, rhs: &Self, n: i64) -> Result<Self, CipherError> {
        let l = self.reduce(n)?.rows;
        let r = rhs.reduce(n)?.rows;
        let mut out = [[0i64; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (l[i][0] * r[0][j] + l[i][1] * r[1][j]).rem_euclid(n);
            }
        }
        Ok(Matrix2 { rows: out })
    }

    /// Applies the matrix to a column vector of residues, reduced modulo `n`.
    ///
    /// Entries of `self` must already be reduced into `[0, n)` and the
    /// vector components must lie in `[0, n)`.
    pub(crate) fn apply_reduced(&self, v: [i64; 2], n: i64) -> [i64; 2] {
        let [[a, b], [c, d]] = self.rows;
        [
            (a * v[0] + b * v[1]).rem_euclid(n),
            (c * v[0] + d * v[1]).rem_euclid(n),
        ]
    }

    fn map(&self, f: impl Fn(i64) -> i64) -> Self {
        let [[a, b], [c, d]] = self.rows;
        Self::from_row_major(f(a), f(b), f(c), f(d))
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [[a, b], [c, d]] = self.rows;
        write!(f, "[[{}, {}], [{}, {}]]", a, b, c, d)
    }
}
