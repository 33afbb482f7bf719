//! MST2 multistart controller: orchestrates restarts, tracks the global
//! best, and enforces the wall-clock budget.
//!
//! # Algorithm
//!
//! 1. Seed: run [`sts::run`] once from the caller's initial assignment,
//!    to completion, regardless of the deadline.
//! 2. While the deadline has not passed and the restart budget is not
//!    exhausted: perturb the incumbent toward a fresh starting point,
//!    biased away from variables that have appeared set across past
//!    bests, and run STS from there. Replace the incumbent on
//!    improvement; otherwise fold the attempt's assignment into the
//!    visit history and keep going.
//!
//! # Reference
//!
//! D-Wave's `dwave-tabu` `TabuSearch`/`TabuSampler` (MST2 multistart
//! strategy over single-run tabu search).

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::SearchConfig;
use super::qubo::Qubo;
use super::sts;

/// Exploration constant controlling how aggressively over-represented
/// variables are perturbed between restarts. See `SPEC_FULL.md` §4.5.
const ALPHA: f64 = 0.5;

/// Outcome of a full multistart session.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best_assignment: Vec<u8>,
    pub best_energy: i64,
}

/// Runs the MST2 multistart tabu search.
///
/// `seed` must already be resolved (the facade derives one from the
/// clock when the caller does not supply one) so this function is
/// fully deterministic given its arguments.
pub fn run(qubo: &Qubo, x0: &[u8], config: &SearchConfig, seed: u64) -> SearchOutcome {
    let n = qubo.size();
    if n == 0 {
        return SearchOutcome { best_assignment: Vec::new(), best_energy: 0 };
    }

    let deadline = Instant::now() + Duration::from_millis(config.timeout_ms);
    let restart_cap = config.restarts.unwrap_or(usize::MAX);

    let seed_run = sts::run(qubo, x0, config.tenure, None);
    let mut best_assignment = seed_run.best_assignment;
    let mut best_energy = seed_run.best_energy;

    let mut visits = vec![0u64; n];
    accumulate(&mut visits, &best_assignment);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut restarts = 0usize;

    while Instant::now() < deadline && restarts < restart_cap {
        let start = diversify(&best_assignment, &visits, restarts, &mut rng);
        let attempt = sts::run(qubo, &start, config.tenure, Some(deadline));

        if attempt.best_energy < best_energy {
            best_energy = attempt.best_energy;
            best_assignment = attempt.best_assignment;
            visits.iter_mut().for_each(|v| *v = 0);
            accumulate(&mut visits, &best_assignment);
            restarts = 1;
        } else {
            accumulate(&mut visits, &attempt.best_assignment);
            restarts += 1;
        }
    }

    SearchOutcome { best_assignment, best_energy }
}

/// Adds `indicator(x)` (1 where `x_i = 1`, else 0) to `visits`.
fn accumulate(visits: &mut [u64], x: &[u8]) {
    for (v, &b) in visits.iter_mut().zip(x) {
        if b == 1 {
            *v += 1;
        }
    }
}

/// Builds a new starting assignment by perturbing `incumbent`: each bit
/// is kept with probability `p_i = clamp(1 - ALPHA * H_i / max(R, 1), 0.5, 1.0)`,
/// flipped otherwise.
fn diversify(incumbent: &[u8], visits: &[u64], restarts: usize, rng: &mut StdRng) -> Vec<u8> {
    let r = restarts.max(1) as f64;
    incumbent
        .iter()
        .zip(visits)
        .map(|(&bit, &h)| {
            let h_hat = h as f64 / r;
            let p = (1.0 - ALPHA * h_hat).clamp(0.5, 1.0);
            if rng.random::<f64>() < p {
                bit
            } else {
                1 - bit
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(tenure: usize, timeout_ms: u64) -> SearchConfig {
        SearchConfig::default().with_tenure(tenure).with_timeout_ms(timeout_ms)
    }

    #[test]
    fn empty_problem_returns_immediately() {
        let q = Qubo::new(&[], 1.0).unwrap();
        let out = run(&q, &[], &config(0, 100), 1);
        assert_eq!(out.best_assignment, Vec::<u8>::new());
        assert_eq!(out.best_energy, 0);
    }

    #[test]
    fn monotone_incumbent_never_worsens() {
        let q = Qubo::new(
            &[vec![-1.0, 2.0, 1.0], vec![2.0, -3.0, -4.5], vec![1.0, -4.5, 3.25]],
            4.0,
        )
        .unwrap();
        let x0 = [0u8, 0, 1];
        let out = run(&q, &x0, &config(1, 100), 7);
        assert!(out.best_energy <= q.energy(&x0));
    }

    #[test]
    fn deterministic_given_fixed_seed_and_restart_budget() {
        let q = Qubo::new(
            &[vec![-1.0, 2.0, 1.0], vec![2.0, -3.0, -4.5], vec![1.0, -4.5, 3.25]],
            4.0,
        )
        .unwrap();
        let x0 = [0u8, 0, 1];
        let cfg = config(1, 5_000).with_restarts(20);

        let a = run(&q, &x0, &cfg, 99);
        let b = run(&q, &x0, &cfg, 99);

        assert_eq!(a.best_assignment, b.best_assignment);
        assert_eq!(a.best_energy, b.best_energy);
    }

    #[test]
    fn restart_budget_finds_known_optimum() {
        // Optimum at [0,1,0] with energy -3.0 (scale=4 -> -12).
        let q = Qubo::new(
            &[vec![-1.0, 2.0, 1.0], vec![2.0, -3.0, -4.5], vec![1.0, -4.5, 3.25]],
            4.0,
        )
        .unwrap();
        let x0 = [0u8, 0, 1];
        let cfg = config(1, 5_000).with_restarts(50);
        let out = run(&q, &x0, &cfg, 3);
        assert_eq!(out.best_energy, -12);
        assert_eq!(out.best_assignment, vec![0, 1, 0]);
    }
}
