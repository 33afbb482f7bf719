//! Validated entry point exposed to external collaborators.

use std::time::{SystemTime, UNIX_EPOCH};

use super::config::SearchConfig;
use super::error::{Result, SearchError};
use super::mst2;
use super::qubo::Qubo;

/// Result of a [`search`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best assignment found, length `N`, every entry in `{0, 1}`.
    pub best_assignment: Vec<u8>,
    /// `integer_energy / scale`.
    pub best_energy: f64,
}

/// Runs MST2 multistart tabu search on `Q` starting from `x0`.
///
/// Validates all inputs before allocating any per-search structure, so a
/// returned `Err` leaves no partial state behind. `N = 0` is accepted
/// and returns an empty assignment with energy `0.0`, not an error.
pub fn search(q: &[Vec<f64>], x0: &[u8], config: &SearchConfig) -> Result<SearchResult> {
    let n = q.len();

    if x0.len() != n {
        return Err(SearchError::InvalidInput(format!(
            "initial assignment length {} does not match matrix size {n}",
            x0.len()
        )));
    }

    if n > 0 && config.tenure >= n {
        return Err(SearchError::InvalidInput(format!(
            "tenure {} out of range [0, {})",
            config.tenure,
            n
        )));
    }

    // Qubo::new independently validates squareness, finiteness, scale,
    // and fixed-point overflow.
    let qubo = Qubo::new(q, config.scale)?;

    if n == 0 {
        return Ok(SearchResult { best_assignment: Vec::new(), best_energy: 0.0 });
    }

    let seed = config.seed.unwrap_or_else(derive_seed_from_clock);
    let outcome = mst2::run(&qubo, x0, config, seed);

    Ok(SearchResult {
        best_assignment: outcome.best_assignment,
        best_energy: outcome.best_energy as f64 / qubo.scale(),
    })
}

fn derive_seed_from_clock() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
