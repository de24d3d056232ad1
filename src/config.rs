//! Generator policy values and the process-wide default.

use std::sync::{PoisonError, RwLock};

/// Default cap on simultaneously computed vertices.
pub const DEFAULT_CONCURRENCY_LIMIT: usize = 10;

/// Default upper bound on the requested segment count.
pub const DEFAULT_MAX_SEGMENTS: usize = 180;

static DEFAULT_CONFIG: RwLock<GeneratorConfig> = RwLock::new(GeneratorConfig::builtin());

/// Policy knobs for circle generation.
///
/// Read once at the start of each generation call and never mutated during it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Maximum number of vertex computations in flight at once.
    pub concurrency_limit: usize,
    /// Largest segment count a request may ask for.
    pub max_segments: usize,
}

impl GeneratorConfig {
    /// Creates a configuration. Neither value is validated.
    #[must_use]
    pub fn new(concurrency_limit: usize, max_segments: usize) -> Self {
        Self {
            concurrency_limit,
            max_segments,
        }
    }

    const fn builtin() -> Self {
        Self {
            concurrency_limit: DEFAULT_CONCURRENCY_LIMIT,
            max_segments: DEFAULT_MAX_SEGMENTS,
        }
    }

    #[must_use]
    pub fn with_concurrency_limit(mut self, concurrency_limit: usize) -> Self {
        self.concurrency_limit = concurrency_limit;
        self
    }

    #[must_use]
    pub fn with_max_segments(mut self, max_segments: usize) -> Self {
        self.max_segments = max_segments;
        self
    }

    /// Number of workers used for a ring of `segments` vertices:
    /// `min(segments, concurrency_limit)`, never below 1.
    #[must_use]
    pub fn worker_bound(&self, segments: usize) -> usize {
        segments.min(self.concurrency_limit).max(1)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Returns a snapshot of the process-wide default configuration.
#[must_use]
pub fn default_config() -> GeneratorConfig {
    *DEFAULT_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replaces the process-wide default configuration.
///
/// Calls already in progress keep the snapshot they started with.
pub fn set_default_config(config: GeneratorConfig) {
    *DEFAULT_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner) = config;
}

/// Restores the built-in process-wide defaults.
pub fn reset_default_config() {
    set_default_config(GeneratorConfig::builtin());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(config.concurrency_limit, 10);
        assert_eq!(config.max_segments, 180);
    }

    #[test]
    fn new_keeps_values_as_given() {
        let config = GeneratorConfig::new(0, 2);
        let built = GeneratorConfig::default()
            .with_concurrency_limit(0)
            .with_max_segments(2);
        assert_eq!(config, built);
    }

    #[test]
    fn worker_bound_is_min_of_segments_and_limit() {
        let config = GeneratorConfig::new(10, 180);
        assert_eq!(config.worker_bound(4), 4);
        assert_eq!(config.worker_bound(100), 10);
    }

    #[test]
    fn zero_limit_falls_back_to_one_worker() {
        assert_eq!(GeneratorConfig::new(0, 180).worker_bound(10), 1);
    }

    #[test]
    fn process_default_is_replaceable() {
        // Only test that writes the global; generation tests that read it stay
        // within both configurations.
        assert_eq!(default_config(), GeneratorConfig::default());

        set_default_config(GeneratorConfig::new(2, 30));
        assert_eq!(default_config(), GeneratorConfig::new(2, 30));

        reset_default_config();
        assert_eq!(default_config(), GeneratorConfig::default());
    }
}
