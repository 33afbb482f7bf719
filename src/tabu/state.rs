//! Binary assignment with an incrementally-maintained move-gain cache.

use super::error::{Result, SearchError};
use super::qubo::Qubo;

/// A binary assignment `x`, its current integer energy `E`, and the
/// per-variable move-gain vector `delta` where `delta[i]` is the change
/// in energy a flip of bit `i` would produce.
///
/// `flip` updates `delta` and `energy` in O(N); only [`State::from_assignment`]
/// pays the O(N^2) cost of a full recomputation.
#[derive(Debug, Clone)]
pub struct State<'q> {
    qubo: &'q Qubo,
    x: Vec<u8>,
    delta: Vec<i64>,
    energy: i64,
}

impl<'q> State<'q> {
    /// Builds a state from a caller-supplied assignment, fully
    /// recomputing `delta` and `energy` from scratch.
    ///
    /// Any nonzero byte in `x` is coerced to `1`.
    pub fn from_assignment(qubo: &'q Qubo, x: &[u8]) -> Self {
        let n = qubo.size();
        let x: Vec<u8> = x.iter().map(|&b| if b != 0 { 1 } else { 0 }).collect();
        let energy = qubo.energy(&x);

        let mut delta = vec![0i64; n];
        for i in 0..n {
            let xi = x[i] as i64;
            let mut cross = qubo.coef(i, i);
            for j in 0..n {
                if j == i {
                    continue;
                }
                cross += 2 * qubo.coef(i, j) * (x[j] as i64);
            }
            delta[i] = (1 - 2 * xi) * cross;
        }

        Self { qubo, x, delta, energy }
    }

    /// Toggles bit `k`, updating `delta` and `energy` in O(N).
    ///
    /// For `j != k`, `delta[j]` gains `2*(1-2*x[j])*(1-2*xk_old)*Q[j][k]` —
    /// the swing in `Q[j][k]`'s contribution to `delta[j]` caused by `k`
    /// moving from its *old* value to its new one. Using `xk_old` (not
    /// the post-toggle value) is what keeps this an exact O(N) update
    /// instead of an approximation.
    pub fn flip(&mut self, k: usize) -> Result<()> {
        let n = self.x.len();
        if k >= n {
            return Err(SearchError::IndexOutOfRange { index: k, len: n });
        }

        let gain = self.delta[k];
        self.energy += gain;
        let xk_old = self.x[k] as i64;
        self.x[k] = 1 - self.x[k];
        self.delta[k] = -gain;

        for j in 0..n {
            if j == k {
                continue;
            }
            let qjk = self.qubo.coef(j, k);
            if qjk == 0 {
                continue;
            }
            let xj = self.x[j] as i64;
            self.delta[j] += 2 * (1 - 2 * xj) * (1 - 2 * xk_old) * qjk;
        }

        Ok(())
    }

    /// Change in energy a flip of bit `i` would currently produce.
    pub fn delta(&self, i: usize) -> i64 {
        self.delta[i]
    }

    /// Current integer energy of `x`.
    pub fn energy(&self) -> i64 {
        self.energy
    }

    /// Current assignment.
    pub fn assignment(&self) -> &[u8] {
        &self.x
    }
}
