// ============================================================================
// Engine Module
// Rank generation: cache, ranker service and default entry points
// ============================================================================

mod cache;
pub mod factory;
mod ranker;

pub use cache::RankCache;
pub use factory::{create_from_config, RankerBuilder};
pub use ranker::Ranker;

use crate::domain::{Bucket, LexoRank, RankResult};
use std::sync::LazyLock;

static DEFAULT_RANKER: LazyLock<Ranker> = LazyLock::new(Ranker::default);

/// Process-wide ranker with the default configuration.
///
/// Its cache can be cleared through `default_ranker().cache().clear()`.
pub fn default_ranker() -> &'static Ranker {
    &DEFAULT_RANKER
}

/// Seed rank for an empty list, default configuration.
pub fn middle(bucket: Bucket) -> LexoRank {
    DEFAULT_RANKER.middle(bucket)
}

/// Parse a rank key, default configuration.
pub fn parse(value: &str) -> RankResult<LexoRank> {
    DEFAULT_RANKER.parse(value)
}

/// Rank strictly between two neighbours, default configuration.
pub fn between(a: Option<&LexoRank>, b: Option<&LexoRank>) -> RankResult<LexoRank> {
    DEFAULT_RANKER.between(a, b)
}
