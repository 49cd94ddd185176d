// ============================================================================
// Domain Models Module
// Rank keys, buckets and their formatting configuration
// ============================================================================

pub mod bucket;
pub mod config;
pub mod errors;
pub mod rank;

pub use bucket::Bucket;
pub use config::{RankConfig, DEFAULT_SEPARATOR, DEFAULT_STEP, DEFAULT_WHOLE_WIDTH};
pub use errors::{RankError, RankResult};
pub use rank::LexoRank;
