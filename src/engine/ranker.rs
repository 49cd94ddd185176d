// ============================================================================
// Ranker
// Rank generation service bound to one configuration and a shared cache
// ============================================================================

use super::cache::RankCache;
use crate::domain::{Bucket, LexoRank, RankConfig, RankError, RankResult};
use crate::numeric::Integer;
use std::sync::Arc;

/// Generates rank keys for one configuration.
///
/// Cheap to clone; clones share the cache. Safe to use from many threads.
#[derive(Debug, Clone)]
pub struct Ranker {
    /// Radix and formatting parameters
    config: RankConfig,

    /// Memoized middle ranks and step constants
    cache: Arc<RankCache>,
}

impl Ranker {
    /// Create a ranker with its own cache.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the configuration does not validate.
    pub fn new(config: RankConfig) -> RankResult<Self> {
        Self::with_cache(config, Arc::new(RankCache::new()))
    }

    /// Create a ranker sharing an existing cache.
    pub fn with_cache(config: RankConfig, cache: Arc<RankCache>) -> RankResult<Self> {
        config.validate()?;
        Ok(Self { config, cache })
    }

    #[inline]
    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    #[inline]
    pub fn cache(&self) -> &Arc<RankCache> {
        &self.cache
    }

    /// Seed rank for an empty list in `bucket`.
    pub fn middle(&self, bucket: Bucket) -> LexoRank {
        self.cache.middle(bucket, &self.config)
    }

    /// Parse a rank key in this configuration.
    pub fn parse(&self, value: &str) -> RankResult<LexoRank> {
        LexoRank::parse_with(value, &self.config)
    }

    /// Rank one configured step after `rank`.
    pub fn next(&self, rank: &LexoRank) -> RankResult<LexoRank> {
        let step = self.cache.step(&self.config);
        let next = rank.offset(&step)?;
        self.note_fallback(rank, &next, &step);
        Ok(next)
    }

    /// Rank one configured step before `rank`.
    pub fn prev(&self, rank: &LexoRank) -> RankResult<LexoRank> {
        let step = self.cache.step(&self.config);
        let prev = rank.offset(&-&step)?;
        self.note_fallback(rank, &prev, &step);
        Ok(prev)
    }

    /// Rank strictly between two neighbours; see [`LexoRank::between`].
    pub fn between(&self, a: Option<&LexoRank>, b: Option<&LexoRank>) -> RankResult<LexoRank> {
        match (a, b) {
            (None, None) => Err(RankError::InvalidRange),
            (None, Some(b)) => self.prev(b),
            (Some(a), None) => self.next(a),
            (Some(a), Some(b)) => {
                let rank = LexoRank::between_pair(a, b)?;
                if rank.rank().exponent() < 0 {
                    tracing::debug!(
                        rank = %rank,
                        fraction_digits = rank.rank().exponent().unsigned_abs(),
                        "between kept a fractional key"
                    );
                }
                Ok(rank)
            }
        }
    }

    /// Rank strictly between two stored key strings.
    pub fn between_str(&self, a: Option<&str>, b: Option<&str>) -> RankResult<LexoRank> {
        let a = a.map(|value| self.parse(value)).transpose()?;
        let b = b.map(|value| self.parse(value)).transpose()?;
        self.between(a.as_ref(), b.as_ref())
    }

    fn note_fallback(&self, from: &LexoRank, to: &LexoRank, step: &Integer) {
        let moved = (&to.rank().whole() - &from.rank().whole()).abs();
        if &moved != step {
            tracing::debug!(
                from = %from,
                to = %to,
                step = self.config.step,
                "step overshot the whole-number range, used midpoint"
            );
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            config: RankConfig::default(),
            cache: Arc::new(RankCache::new()),
        }
    }
}
