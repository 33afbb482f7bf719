//! Single-run tabu search (STS): one descent from a given start until
//! local stagnation.
//!
//! # Algorithm
//!
//! At each iteration, find the admissible move (non-tabu, or tabu but
//! meeting the aspiration criterion) with the lowest move-gain, breaking
//! ties by the lowest variable index. Apply it, taboo the flipped
//! variable for `tenure` iterations, and continue until no admissible
//! move exists or the run has gone `stagnation_bound` iterations without
//! improving its own best.
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

use std::time::Instant;

use super::qubo::Qubo;
use super::state::State;
use super::tabu_list::TabuList;

/// How often (in iterations) the wall clock is polled. Amortizes the
/// cost of `Instant::now()` across many cheap moves.
pub const CLOCK_CHECK_INTERVAL: usize = 32;

/// Outcome of a single STS run: the best assignment observed and its
/// energy.
#[derive(Debug, Clone)]
pub struct StsOutcome {
    pub best_assignment: Vec<u8>,
    pub best_energy: i64,
}

/// Runs one tabu descent from `initial_x`.
///
/// If `deadline` is `None`, the run proceeds to stagnation regardless of
/// wall-clock time (used for the multistart controller's first, seeding
/// run, which always completes). If `deadline` is `Some`, the run also
/// halts once the deadline has passed, checked every
/// [`CLOCK_CHECK_INTERVAL`] iterations.
pub fn run(qubo: &Qubo, initial_x: &[u8], tenure: usize, deadline: Option<Instant>) -> StsOutcome {
    let n = qubo.size();
    let mut state = State::from_assignment(qubo, initial_x);
    let mut tabu = TabuList::new(n);

    let mut best_assignment = state.assignment().to_vec();
    let mut best_energy = state.energy();
    let stagnation_bound = n.max(1);
    let mut stagnant = 0usize;
    let mut iter = 0usize;

    loop {
        if let Some(dl) = deadline {
            if iter > 0 && iter % CLOCK_CHECK_INTERVAL == 0 && Instant::now() >= dl {
                break;
            }
        }

        let mut chosen: Option<usize> = None;
        let mut chosen_delta = i64::MAX;
        for i in 0..n {
            let aspires = state.energy() + state.delta(i) < best_energy;
            if tabu.is_tabu(i) && !aspires {
                continue;
            }
            let d = state.delta(i);
            if d < chosen_delta {
                chosen_delta = d;
                chosen = Some(i);
            }
        }

        let k = match chosen {
            Some(k) => k,
            None => break,
        };

        state.flip(k).expect("k came from 0..n, always in range");
        tabu.set(k, tenure);
        tabu.tick_except(k);
        iter += 1;

        if state.energy() < best_energy {
            best_energy = state.energy();
            best_assignment = state.assignment().to_vec();
            stagnant = 0;
        } else {
            stagnant += 1;
        }

        if stagnant > stagnation_bound {
            break;
        }
    }

    StsOutcome { best_assignment, best_energy }
}
