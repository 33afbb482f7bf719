//! Tabu search configuration.

/// Hyperparameters for [`crate::tabu::search`].
///
/// # Examples
///
/// ```
/// use qubo_tabu::tabu::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_tenure(7)
///     .with_scale(1.0)
///     .with_timeout_ms(50)
///     .with_seed(42);
/// assert_eq!(config.tenure, 7);
/// assert_eq!(config.timeout_ms, 50);
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of iterations a just-flipped variable stays tabu. Must be
    /// in `[0, N)` for a problem of size `N` (`N = 0` is exempt).
    pub tenure: usize,
    /// Positive scaling factor used to reinterpret `Q` as fixed-point
    /// integers.
    pub scale: f64,
    /// Wall-clock budget for the whole multistart session, in
    /// milliseconds. `0` permits exactly one single-run search.
    pub timeout_ms: u64,
    /// Cap on the number of restarts. `None` means unbounded (bounded
    /// only by `timeout_ms`).
    pub restarts: Option<usize>,
    /// Seed for the deterministic pseudo-random source. `None` derives a
    /// seed from the monotonic clock.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            tenure: 0,
            scale: 1.0,
            timeout_ms: 20,
            restarts: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the tabu tenure.
    pub fn with_tenure(mut self, tenure: usize) -> Self {
        self.tenure = tenure;
        self
    }

    /// Sets the fixed-point scaling factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the wall-clock budget, in milliseconds.
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Caps the number of restarts.
    pub fn with_restarts(mut self, restarts: usize) -> Self {
        self.restarts = Some(restarts);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Caller-level default tenure policy: `min(20, n / 4)`.
    ///
    /// Not invoked implicitly by [`crate::tabu::search`] — callers that
    /// want this default apply it themselves via `with_tenure`.
    pub fn default_tenure(n: usize) -> usize {
        (n / 4).min(20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.tenure, 0);
        assert_eq!(config.scale, 1.0);
        assert_eq!(config.timeout_ms, 20);
        assert!(config.restarts.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn builder_chain() {
        let config = SearchConfig::default()
            .with_tenure(5)
            .with_scale(2.0)
            .with_timeout_ms(100)
            .with_restarts(10)
            .with_seed(7);

        assert_eq!(config.tenure, 5);
        assert_eq!(config.scale, 2.0);
        assert_eq!(config.timeout_ms, 100);
        assert_eq!(config.restarts, Some(10));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn default_tenure_policy() {
        assert_eq!(SearchConfig::default_tenure(0), 0);
        assert_eq!(SearchConfig::default_tenure(40), 10);
        assert_eq!(SearchConfig::default_tenure(200), 20);
    }
}
