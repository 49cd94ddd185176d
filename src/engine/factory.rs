// ============================================================================
// Ranker Factory
// Creates rankers with validated configuration
// ============================================================================

use super::cache::RankCache;
use super::ranker::Ranker;
use crate::domain::{RankConfig, RankResult};
use crate::numeric::Base;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a ranker from configuration
///
/// # Example
/// ```
/// use lexorank::prelude::*;
///
/// let ranker = create_from_config(RankConfig::base64()).unwrap();
/// assert_eq!(ranker.middle(Bucket::Bucket0).to_string(), "0|W00000:");
/// ```
pub fn create_from_config(config: RankConfig) -> RankResult<Ranker> {
    Ranker::new(config)
}

// ============================================================================
// Builder Pattern for Advanced Configuration
// ============================================================================

/// Builder for creating rankers with fluent API
///
/// # Example
/// ```
/// use lexorank::prelude::*;
///
/// let ranker = RankerBuilder::new()
///     .base10()
///     .with_whole_width(4)
///     .with_step(10)
///     .build()
///     .unwrap();
///
/// let middle = ranker.middle(Bucket::Bucket0);
/// assert_eq!(middle.to_string(), "0|5000:");
/// assert_eq!(ranker.next(&middle).unwrap().to_string(), "0|5010:");
/// ```
#[derive(Debug, Default)]
pub struct RankerBuilder {
    config: RankConfig,
    cache: Option<Arc<RankCache>>,
}

impl RankerBuilder {
    /// Create a new builder with the default base-36 configuration
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Radix Configuration
    // ========================================================================

    /// Use decimal digits
    pub fn base10(self) -> Self {
        self.with_base(RankConfig::base10().base)
    }

    /// Use lowercase alphanumerics (default)
    pub fn base36(self) -> Self {
        self.with_base(RankConfig::base36().base)
    }

    /// Use the 64-symbol alphabet
    pub fn base64(self) -> Self {
        self.with_base(RankConfig::base64().base)
    }

    /// Use a custom alphabet
    pub fn with_base(mut self, base: &'static dyn Base) -> Self {
        self.config.base = base;
        self
    }

    // ========================================================================
    // Formatting Configuration
    // ========================================================================

    /// Set radix-point character
    pub fn with_point(mut self, point: char) -> Self {
        self.config = self.config.with_point(point);
        self
    }

    /// Set bucket separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.config = self.config.with_separator(separator);
        self
    }

    /// Set zero-padded whole-number width
    pub fn with_whole_width(mut self, whole_width: usize) -> Self {
        self.config = self.config.with_whole_width(whole_width);
        self
    }

    /// Set next/prev step
    pub fn with_step(mut self, step: u32) -> Self {
        self.config = self.config.with_step(step);
        self
    }

    /// Share a cache with other rankers
    pub fn with_cache(mut self, cache: Arc<RankCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Build the ranker
    pub fn build(self) -> RankResult<Ranker> {
        match self.cache {
            Some(cache) => Ranker::with_cache(self.config, cache),
            None => Ranker::new(self.config),
        }
    }
}
