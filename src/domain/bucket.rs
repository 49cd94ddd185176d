// ============================================================================
// Rank Buckets
// Rebalancing epochs, rotated cyclically
// ============================================================================

use super::errors::{RankError, RankResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rebalancing epoch marker and primary sort key of a rank.
///
/// Rotating every key of a list into `next()` lets a surrounding system
/// re-space keys without colliding with the live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bucket {
    #[default]
    Bucket0,
    Bucket1,
    Bucket2,
}

impl Bucket {
    /// All buckets in sort order.
    pub const ALL: [Bucket; 3] = [Bucket::Bucket0, Bucket::Bucket1, Bucket::Bucket2];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Following bucket, wrapping 2 -> 0.
    #[inline]
    pub const fn next(self) -> Bucket {
        match self {
            Bucket::Bucket0 => Bucket::Bucket1,
            Bucket::Bucket1 => Bucket::Bucket2,
            Bucket::Bucket2 => Bucket::Bucket0,
        }
    }

    /// Preceding bucket, wrapping 0 -> 2.
    #[inline]
    pub const fn prev(self) -> Bucket {
        match self {
            Bucket::Bucket0 => Bucket::Bucket2,
            Bucket::Bucket1 => Bucket::Bucket0,
            Bucket::Bucket2 => Bucket::Bucket1,
        }
    }

    /// Digit written in the first position of a rank key.
    #[inline]
    pub const fn digit(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Decode the leading digit of a rank key.
    ///
    /// # Errors
    /// Returns `InvalidBucket` for anything but `'0'`, `'1'` or `'2'`.
    pub fn from_digit(ch: char) -> RankResult<Bucket> {
        match ch {
            '0' => Ok(Bucket::Bucket0),
            '1' => Ok(Bucket::Bucket1),
            '2' => Ok(Bucket::Bucket2),
            _ => Err(RankError::InvalidBucket(ch)),
        }
    }
}

impl TryFrom<u8> for Bucket {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Bucket::ALL
            .get(value as usize)
            .copied()
            .ok_or(RankError::InvalidBucket(char::from(b'0'.wrapping_add(value))))
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
