// ============================================================================
// LexoRank Library
// Sortable, insertable rank keys over arbitrary-precision radix arithmetic
// ============================================================================

//! # LexoRank
//!
//! Rank keys that order items in a list and leave room to insert new items
//! between any two neighbours without renumbering.
//!
//! ## Features
//!
//! - **Arbitrary-precision arithmetic** over base 10, 36, 64 or custom alphabets
//! - **Canonical decimals** whose text sorts the same as their value
//! - **Fixed-shape keys** (`0|i00000:`) comparable as plain strings
//! - **Midpoint insertion** that prefers short keys when there is room
//! - **Shared, clearable cache** for seed ranks and step constants
//!
//! ## Example
//!
//! ```rust
//! use lexorank::prelude::*;
//!
//! let ranker = Ranker::default();
//!
//! // Seed an empty list, then append
//! let first = ranker.middle(Bucket::Bucket0);
//! let last = ranker.next(&first).unwrap();
//! assert_eq!(first.to_string(), "0|i00000:");
//! assert_eq!(last.to_string(), "0|i0000g:");
//!
//! // Insert between two neighbours
//! let inserted = ranker.between(Some(&first), Some(&last)).unwrap();
//! assert_eq!(inserted.to_string(), "0|i00008:");
//!
//! // Insert before the head of the list
//! let head = ranker.between(None, Some(&first)).unwrap();
//! assert!(head.to_string() < first.to_string());
//! ```

pub mod domain;
pub mod engine;
pub mod numeric;

pub use engine::{between, middle, parse};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        Bucket, LexoRank, RankConfig, RankError, RankResult, DEFAULT_SEPARATOR, DEFAULT_STEP,
        DEFAULT_WHOLE_WIDTH,
    };
    pub use crate::engine::{create_from_config, default_ranker, RankCache, Ranker, RankerBuilder};
    pub use crate::numeric::{
        Alphabet, Base, Decimal, Integer, NumericError, NumericResult, Sign, BASE10, BASE36,
        BASE64, DEFAULT_POINT,
    };
}
