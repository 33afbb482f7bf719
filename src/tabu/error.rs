//! Error taxonomy for the tabu search engine.

use thiserror::Error;

/// Errors surfaced by [`crate::tabu::search`] and the lower-level engine
/// types it composes.
///
/// All validation happens before any per-search structure is allocated, so
/// an `Err` leaves no partial state behind. Timeouts are never errors: a
/// search that runs out of wall-clock budget returns its best-so-far
/// result as `Ok`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    /// Malformed `Q`, a mismatched initial assignment, an out-of-range
    /// tenure, or a non-positive/non-finite scale or timeout.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A scaled coefficient `Q[i][j] * scale` does not fit in a signed
    /// 64-bit integer.
    #[error("coefficient at ({i}, {j}) overflows i64 after scaling: {value} * {scale}")]
    OutOfRange { i: usize, j: usize, value: f64, scale: f64 },

    /// Internal: a flip index fell outside `[0, N)`. Indicates an engine
    /// bug — valid input can never reach this path.
    #[error("flip index {index} out of range for N={len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience alias used throughout the engine.
pub type Result<T> = std::result::Result<T, SearchError>;
