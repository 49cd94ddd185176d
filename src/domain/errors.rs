// ============================================================================
// Rank Errors
// Error types for rank parsing, configuration and insertion
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Errors that can occur while parsing or generating rank keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankError {
    /// Separator or point is not at its fixed position
    InvalidFormat,
    /// Bucket digit is not 0, 1 or 2
    InvalidBucket(char),
    /// No neighbour given, or neighbours cannot bracket a new key
    InvalidRange,
    /// No key fits inside the whole-number width in that direction
    OutOfRange,
    /// Formatting parameters are unusable
    InvalidConfig(&'static str),
    /// Digit-level failure
    Numeric(NumericError),
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankError::InvalidFormat => write!(f, "invalid rank format"),
            RankError::InvalidBucket(ch) => write!(f, "invalid bucket: {:?}", ch),
            RankError::InvalidRange => write!(f, "invalid range: no key can be placed between"),
            RankError::OutOfRange => {
                write!(f, "out of range: no key fits the whole-number width")
            }
            RankError::InvalidConfig(reason) => write!(f, "invalid rank config: {}", reason),
            RankError::Numeric(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RankError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for RankError {
    fn from(err: NumericError) -> Self {
        RankError::Numeric(err)
    }
}

/// Result type alias for rank operations
pub type RankResult<T> = Result<T, RankError>;
