//! Immutable symmetric QUBO matrix with fixed-point scaling.
//!
//! `Q[i][j] * scale` is truncated to a signed 64-bit integer once, at
//! construction time, so that every energy computation during the search
//! is exact integer arithmetic — no floating-point drift accumulates
//! across the millions of incremental flips a long-running search
//! performs.

use super::error::{Result, SearchError};

/// A symmetrized, fixed-point QUBO coefficient matrix.
#[derive(Debug, Clone)]
pub struct Qubo {
    n: usize,
    scale: f64,
    coef: Vec<i64>,
}

impl Qubo {
    /// Builds a `Qubo` from a dense real matrix and a positive scaling
    /// factor.
    ///
    /// The matrix need not be symmetric: the non-symmetric part does not
    /// affect the objective on `{0,1}^N`, so `Q` is replaced by
    /// `(Q + Q^T) / 2` before scaling. Every entry of `Q` must be finite,
    /// and every scaled entry must fit in `i64`.
    pub fn new(matrix: &[Vec<f64>], scale: f64) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SearchError::InvalidInput(format!(
                "scale must be positive and finite, got {scale}"
            )));
        }

        let n = matrix.len();
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(SearchError::InvalidInput(format!(
                    "Q must be square: row {i} has {} columns, expected {n}",
                    row.len()
                )));
            }
        }

        let mut coef = vec![0i64; n * n];
        for i in 0..n {
            for j in 0..n {
                let symmetrized = if i == j {
                    matrix[i][j]
                } else {
                    0.5 * (matrix[i][j] + matrix[j][i])
                };
                if !symmetrized.is_finite() {
                    return Err(SearchError::InvalidInput(format!(
                        "Q[{i}][{j}] is not finite"
                    )));
                }
                let scaled = (symmetrized * scale).floor();
                // i64::MAX as f64 rounds up to 2^63, one past the real
                // upper bound, so compare against 2^63 directly instead
                // of letting `scaled as i64` silently saturate.
                if scaled < i64::MIN as f64 || scaled >= 2f64.powi(63) {
                    return Err(SearchError::OutOfRange {
                        i,
                        j,
                        value: symmetrized,
                        scale,
                    });
                }
                coef[i * n + j] = scaled as i64;
            }
        }

        Ok(Self { n, scale, coef })
    }

    /// Order of the matrix.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Scaling factor used to reinterpret real coefficients as `i64`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Scaled, symmetrized coefficient `Q[i][j]`.
    pub fn coef(&self, i: usize, j: usize) -> i64 {
        self.coef[i * self.n + j]
    }

    /// Reference O(N^2) energy evaluator: `E(x) = sum_ij Q[i][j] * x_i * x_j`.
    ///
    /// Used only for validation and for initializing a fresh [`super::state::State`];
    /// the incremental engine never calls this after the first flip.
    pub fn energy(&self, x: &[u8]) -> i64 {
        let n = self.n;
        let mut total = 0i64;
        for i in 0..n {
            if x[i] == 0 {
                continue;
            }
            for j in 0..n {
                if x[j] == 0 {
                    continue;
                }
                total += self.coef(i, j);
            }
        }
        total
    }
}
