// ============================================================================
// Rank Cache
// Memoized middle ranks and step constants
// ============================================================================

use crate::domain::{Bucket, LexoRank, RankConfig};
use crate::numeric::{Base, Integer};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Everything that changes the value or rendering of a middle rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MiddleKey {
    bucket: Bucket,
    alphabet: &'static str,
    point: char,
    separator: char,
    whole_width: usize,
}

impl MiddleKey {
    fn new(bucket: Bucket, config: &RankConfig) -> Self {
        let base: &'static dyn Base = config.base;
        Self {
            bucket,
            alphabet: base.alphabet(),
            point: config.point,
            separator: config.separator,
            whole_width: config.whole_width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct StepKey {
    alphabet: &'static str,
    step: u32,
}

/// Shared memo of pure rank constants.
///
/// Filled through a [`crate::engine::Ranker`], which validates its
/// configuration before any lookup.
///
/// Lookups take a read lock; a miss computes outside any lock and inserts
/// under a write lock. Two threads missing together compute equal values and
/// the first insert wins. Call [`RankCache::clear`] to drop every entry.
#[derive(Debug, Default)]
pub struct RankCache {
    middles: RwLock<HashMap<MiddleKey, LexoRank>>,
    steps: RwLock<HashMap<StepKey, Integer>>,
}

impl RankCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Middle rank of `bucket` under an already validated `config`.
    pub(crate) fn middle(&self, bucket: Bucket, config: &RankConfig) -> LexoRank {
        let key = MiddleKey::new(bucket, config);
        if let Some(rank) = self.middles.read().get(&key) {
            return rank.clone();
        }

        tracing::trace!(%bucket, radix = config.base.radix(), "middle rank cache miss");
        let rank = LexoRank::middle_unchecked(bucket, config);
        self.middles.write().entry(key).or_insert(rank).clone()
    }

    /// `config.step` as an integer in the configured radix.
    pub(crate) fn step(&self, config: &RankConfig) -> Integer {
        let base: &'static dyn Base = config.base;
        let key = StepKey {
            alphabet: base.alphabet(),
            step: config.step,
        };
        if let Some(step) = self.steps.read().get(&key) {
            return step.clone();
        }

        tracing::trace!(step = config.step, radix = config.base.radix(), "step cache miss");
        let step = Integer::from_i64(config.step as i64, config.base);
        self.steps.write().entry(key).or_insert(step).clone()
    }

    /// Drop every memoized value.
    pub fn clear(&self) {
        let mut middles = self.middles.write();
        let mut steps = self.steps.write();
        tracing::trace!(
            middles = middles.len(),
            steps = steps.len(),
            "clearing rank cache"
        );
        middles.clear();
        steps.clear();
    }

    /// Number of memoized values.
    pub fn len(&self) -> usize {
        self.middles.read().len() + self.steps.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
