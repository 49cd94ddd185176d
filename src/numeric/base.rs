// ============================================================================
// Radix Alphabets
// Digit symbol <-> digit value mapping for positional numerals
// ============================================================================

use super::errors::{NumericError, NumericResult};
use std::fmt;

/// A digit alphabet for a positional numeral system.
///
/// Implementations must be total and collision-free over `[0, radix)`:
/// `digit_char(digit_value(c)?)? == c` for every legal digit `c`.
///
/// Integers and decimals hold a `&'static dyn Base`, so custom alphabets are
/// usually kept in a `static` (see [`Alphabet`]).
pub trait Base: Send + Sync + fmt::Debug {
    /// Digit symbols in value order. Index `i` is the symbol for value `i`.
    fn alphabet(&self) -> &str;

    /// Decode one digit symbol.
    fn digit_value(&self, ch: char) -> NumericResult<u8>;

    /// Number of distinct digit symbols.
    #[inline]
    fn radix(&self) -> u32 {
        self.alphabet().len() as u32
    }

    /// Encode one digit value.
    #[inline]
    fn digit_char(&self, value: u32) -> NumericResult<char> {
        self.alphabet()
            .as_bytes()
            .get(value as usize)
            .map(|b| *b as char)
            .ok_or(NumericError::DigitOutOfRange(value))
    }
}

// ============================================================================
// Built-in Alphabets
// ============================================================================

const BASE10_DIGITS: &str = "0123456789";
const BASE36_DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyz";
const BASE64_DIGITS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ^_abcdefghijklmnopqrstuvwxyz";

/// Decimal digits `0-9`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base10;

/// Lowercase alphanumerics `0-9a-z`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base36;

/// `0-9`, `A-Z`, `^`, `_`, `a-z` in that value order.
///
/// The order places every symbol at its ASCII rank, so byte-wise string
/// comparison of equal-length numerals matches numeric comparison.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64;

pub static BASE10: Base10 = Base10;
pub static BASE36: Base36 = Base36;
pub static BASE64: Base64 = Base64;

impl Base for Base10 {
    fn alphabet(&self) -> &str {
        BASE10_DIGITS
    }

    #[inline]
    fn digit_value(&self, ch: char) -> NumericResult<u8> {
        match ch {
            '0'..='9' => Ok(ch as u8 - b'0'),
            _ => Err(NumericError::InvalidDigit(ch)),
        }
    }
}

impl Base for Base36 {
    fn alphabet(&self) -> &str {
        BASE36_DIGITS
    }

    #[inline]
    fn digit_value(&self, ch: char) -> NumericResult<u8> {
        match ch {
            '0'..='9' => Ok(ch as u8 - b'0'),
            'a'..='z' => Ok(ch as u8 - b'a' + 10),
            _ => Err(NumericError::InvalidDigit(ch)),
        }
    }
}

impl Base for Base64 {
    fn alphabet(&self) -> &str {
        BASE64_DIGITS
    }

    #[inline]
    fn digit_value(&self, ch: char) -> NumericResult<u8> {
        match ch {
            '0'..='9' => Ok(ch as u8 - b'0'),
            'A'..='Z' => Ok(ch as u8 - b'A' + 10),
            '^' => Ok(36),
            '_' => Ok(37),
            'a'..='z' => Ok(ch as u8 - b'a' + 38),
            _ => Err(NumericError::InvalidDigit(ch)),
        }
    }
}

// ============================================================================
// Custom Alphabet
// ============================================================================

/// User-supplied alphabet backed by a reverse lookup table.
///
/// # Example
/// ```
/// use lexorank::numeric::{Alphabet, Base};
///
/// let hex = Alphabet::new("0123456789abcdef").unwrap();
/// assert_eq!(hex.radix(), 16);
/// assert_eq!(hex.digit_value('f').unwrap(), 15);
/// ```
#[derive(Clone)]
pub struct Alphabet {
    digits: &'static str,
    lookup: [u8; 128],
}

/// Marker for ASCII bytes that are not in the alphabet.
const NOT_A_DIGIT: u8 = u8::MAX;

impl Alphabet {
    /// Build an alphabet from its symbols in value order.
    ///
    /// # Errors
    /// Returns `InvalidAlphabet` unless the symbols are 2..=255 distinct
    /// ASCII characters, none of them a sign (`+`/`-`).
    pub fn new(digits: &'static str) -> NumericResult<Self> {
        let len = digits.len();
        if !digits.is_ascii() || !(2..=255).contains(&len) {
            return Err(NumericError::InvalidAlphabet);
        }

        let mut lookup = [NOT_A_DIGIT; 128];
        for (value, byte) in digits.bytes().enumerate() {
            if byte == b'+' || byte == b'-' || lookup[byte as usize] != NOT_A_DIGIT {
                return Err(NumericError::InvalidAlphabet);
            }
            lookup[byte as usize] = value as u8;
        }

        Ok(Self { digits, lookup })
    }
}

impl Base for Alphabet {
    fn alphabet(&self) -> &str {
        self.digits
    }

    #[inline]
    fn digit_value(&self, ch: char) -> NumericResult<u8> {
        if !ch.is_ascii() {
            return Err(NumericError::InvalidDigit(ch));
        }
        match self.lookup[ch as usize] {
            NOT_A_DIGIT => Err(NumericError::InvalidDigit(ch)),
            value => Ok(value),
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("digits", &self.digits)
            .finish()
    }
}
