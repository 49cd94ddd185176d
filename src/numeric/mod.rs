// ============================================================================
// Numeric Module
// Arbitrary-precision radix arithmetic for rank keys
// ============================================================================
//
// This module provides:
// - Base: digit alphabets (base 10, 36, 64 and custom)
// - Integer: signed arbitrary-precision integer over a Base
// - Decimal: significand x radix^exponent with canonical rendering
// - NumericError: Error types for parsing and arithmetic
//
// Design principles:
// - Immutable values; every operation returns a new value
// - Canonical form (no leading zeros, trailing zeros folded into exponent)
// - No native big-integer type; precision grows with the digit sequence
// - All fallible operations return Result (operators panic only on radix mismatch)

mod base;
mod decimal;
mod errors;
mod integer;

pub use base::{Alphabet, Base, Base10, Base36, Base64, BASE10, BASE36, BASE64};
pub use decimal::{Decimal, DEFAULT_POINT};
pub use errors::{NumericError, NumericResult};
pub use integer::{Integer, Sign};
