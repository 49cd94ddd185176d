// ============================================================================
// Numeric Errors
// Error types for radix digits, integers and decimals
// ============================================================================

use std::fmt;

/// Errors that can occur while parsing or combining radix numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Character is not part of the alphabet
    InvalidDigit(char),
    /// Digit value is outside `[0, radix)`
    DigitOutOfRange(u32),
    /// Integer text has no digits or a stray sign
    MalformedInteger,
    /// Shift amount was negative
    InvalidShiftAmount(i64),
    /// Decimal text has more than one radix point
    MalformedDecimal,
    /// Operands use different radices
    RadixMismatch { left: u32, right: u32 },
    /// Value does not fit the requested native type
    Overflow,
    /// Float input was NaN or infinite
    NonFinite,
    /// Alphabet is not a valid digit set
    InvalidAlphabet,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidDigit(ch) => write!(f, "invalid digit: {:?}", ch),
            NumericError::DigitOutOfRange(value) => {
                write!(f, "digit value out of range: {}", value)
            }
            NumericError::MalformedInteger => write!(f, "malformed integer: no digits"),
            NumericError::InvalidShiftAmount(amount) => {
                write!(f, "shift amount must be non-negative, got {}", amount)
            }
            NumericError::MalformedDecimal => {
                write!(f, "malformed decimal: more than one radix point")
            }
            NumericError::RadixMismatch { left, right } => {
                write!(f, "radix mismatch: {} vs {}", left, right)
            }
            NumericError::Overflow => write!(f, "value does not fit the native type"),
            NumericError::NonFinite => write!(f, "float value is not finite"),
            NumericError::InvalidAlphabet => write!(
                f,
                "invalid alphabet: expected 2..=255 distinct ASCII digits"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
