// ============================================================================
// Radix Decimal
// Fixed-point number: significand x radix^exponent
// ============================================================================

use super::base::{Base, BASE10};
use super::errors::{NumericError, NumericResult};
use super::integer::Integer;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter;
use std::ops::{Add, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Default radix-point character.
pub const DEFAULT_POINT: char = ':';

/// Significant digits kept by [`Decimal::from_f64`].
const FLOAT_DIGITS: i64 = 10;

/// Lowest exponent [`Decimal::from_f64`] will scale down to.
const FLOAT_EXPONENT_FLOOR: i64 = -150;

/// Decimal number `significand × radix^exponent`.
///
/// Trailing zero digits of the significand are always folded into the
/// exponent, so numerically equal values of one radix share a single
/// `(significand, exponent)` pair and a single rendering.
///
/// # Example
/// ```
/// use lexorank::numeric::{Decimal, BASE10};
///
/// let a = Decimal::parse("12:345", &BASE10, ':').unwrap();
/// let b = Decimal::parse("55", &BASE10, ':').unwrap();
/// assert_eq!((&a * &b).to_string(), "678:975");
/// ```
#[derive(Clone)]
pub struct Decimal {
    significand: Integer,
    exponent: i64,
    point: char,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a significand and exponent using the default point.
    #[inline]
    pub fn new(significand: Integer, exponent: i64) -> Self {
        Self::with_point(significand, exponent, DEFAULT_POINT)
    }

    /// Create from a significand and exponent, rendering with `point`.
    pub fn with_point(significand: Integer, exponent: i64, point: char) -> Self {
        if significand.is_zero() {
            return Self {
                significand,
                exponent: 0,
                point,
            };
        }

        let zeros = significand.trailing_zeros();
        Self {
            significand: significand.shifted_right(zeros),
            exponent: exponent + zeros as i64,
            point,
        }
    }

    #[inline]
    pub fn from_integer(value: Integer) -> Self {
        Self::new(value, 0)
    }

    /// Parse a numeral with at most one radix point.
    ///
    /// # Errors
    /// - `MalformedDecimal` if `point` appears more than once
    /// - `MalformedInteger` / `InvalidDigit` from the digits themselves
    pub fn parse(value: &str, base: &'static dyn Base, point: char) -> NumericResult<Self> {
        let Some(index) = value.find(point) else {
            return Ok(Self::with_point(Integer::parse(value, base)?, 0, point));
        };

        let (head, tail) = (&value[..index], &value[index + point.len_utf8()..]);
        if tail.contains(point) {
            return Err(NumericError::MalformedDecimal);
        }

        let digits = format!("{}{}", head, tail);
        let exponent = -(tail.chars().count() as i64);
        Ok(Self::with_point(Integer::parse(&digits, base)?, exponent, point))
    }

    /// Approximate a float.
    ///
    /// Keeps about ten significant digits and never scales below
    /// `radix^-150`. Parse a string instead when the exact value matters.
    ///
    /// # Errors
    /// - `NonFinite` for NaN or infinity
    /// - `Overflow` if the whole part does not fit in an `i128`
    pub fn from_f64(value: f64, base: &'static dyn Base) -> NumericResult<Self> {
        if !value.is_finite() {
            return Err(NumericError::NonFinite);
        }
        if value.abs() >= i128::MAX as f64 {
            return Err(NumericError::Overflow);
        }

        let radix = base.radix() as f64;
        let whole = Integer::from_i128(value.trunc() as i128, base);
        if whole.len() as i64 >= FLOAT_DIGITS || value == 0.0 {
            return Ok(Self::from_integer(whole));
        }

        let exponent = if value.abs() >= 1.0 {
            whole.len() as i64 - FLOAT_DIGITS
        } else {
            let mut exponent = 1 - FLOAT_DIGITS;
            let mut probe = value.abs();
            loop {
                probe *= radix;
                exponent -= 1;
                if probe >= 1.0 || exponent <= FLOAT_EXPONENT_FLOOR {
                    break exponent;
                }
            }
        };

        let mut scaled = value;
        for _ in 0..-exponent {
            scaled *= radix;
        }
        Ok(Self::new(Integer::from_i128(scaled as i128, base), exponent))
    }

    /// Exact conversion from a `rust_decimal::Decimal` into base 10.
    pub fn from_rust_decimal(value: rust_decimal::Decimal) -> Self {
        Self::new(
            Integer::from_i128(value.mantissa(), &BASE10),
            -(value.scale() as i64),
        )
    }

    /// Convert a base-10 decimal to `rust_decimal::Decimal`.
    ///
    /// # Errors
    /// - `RadixMismatch` unless the radix is 10
    /// - `Overflow` if the value exceeds 96 bits or 28 fractional digits
    pub fn to_rust_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        if self.radix() != 10 {
            return Err(NumericError::RadixMismatch {
                left: self.radix(),
                right: 10,
            });
        }

        let (mantissa, scale) = if self.exponent >= 0 {
            (self.whole().to_i128()?, 0)
        } else {
            let scale = u32::try_from(-self.exponent).map_err(|_| NumericError::Overflow)?;
            (self.significand.to_i128()?, scale)
        };

        rust_decimal::Decimal::try_from_i128_with_scale(mantissa, scale)
            .map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn significand(&self) -> &Integer {
        &self.significand
    }

    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    #[inline]
    pub fn point(&self) -> char {
        self.point
    }

    #[inline]
    pub fn base(&self) -> &'static dyn Base {
        self.significand.base()
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.significand.radix()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.significand.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.significand.is_negative()
    }

    /// Same value, rendered with a different point character.
    pub fn with_radix_point(mut self, point: char) -> Self {
        self.point = point;
        self
    }

    /// Integer part, truncated toward zero.
    pub fn whole(&self) -> Integer {
        if self.exponent < 0 {
            self.significand.shifted_right(self.exponent.unsigned_abs() as usize)
        } else {
            self.significand.shifted_left(self.exponent as usize)
        }
    }

    /// Approximate value as a float.
    pub fn to_f64(&self) -> f64 {
        let radix = self.radix() as f64;
        let scale = self.exponent.unsigned_abs().min(i32::MAX as u64) as i32;
        if self.exponent < 0 {
            self.significand.to_f64() / radix.powi(scale)
        } else {
            self.significand.to_f64() * radix.powi(scale)
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// The operand with the larger exponent is aligned on a shifted copy;
    /// neither input is modified.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let (high, low) = if self.exponent >= rhs.exponent {
            (self, rhs)
        } else {
            (rhs, self)
        };

        let aligned = high
            .significand
            .shifted_left((high.exponent - low.exponent) as usize);
        let sum = aligned.checked_add(&low.significand)?;
        Ok(Self::with_point(sum, low.exponent, self.point))
    }

    /// Checked subtraction, computed as `self + (-rhs)`.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(&-rhs)
    }

    /// Checked multiplication: significands multiply, exponents add.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let product = self.significand.checked_mul(&rhs.significand)?;
        Ok(Self::with_point(
            product,
            self.exponent + rhs.exponent,
            self.point,
        ))
    }

    /// Both significands scaled to the smaller exponent.
    fn aligned(&self, other: &Self) -> (Integer, Integer) {
        let exponent = self.exponent.min(other.exponent);
        (
            self.significand
                .shifted_left((self.exponent - exponent) as usize),
            other
                .significand
                .shifted_left((other.exponent - exponent) as usize),
        )
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.significand == other.significand && self.exponent == other.exponent
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.exponent == other.exponent {
            return self.significand.cmp(&other.significand);
        }
        let (left, right) = self.aligned(other);
        left.cmp(&right)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significand.hash(state);
        self.exponent.hash(state);
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        Decimal {
            significand: -&self.significand,
            exponent: self.exponent,
            point: self.point,
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        -&self
    }
}

// Infallible operators for ergonomics (panic on radix mismatch - use checked_* at boundaries)
impl Add for &Decimal {
    type Output = Decimal;

    #[inline]
    fn add(self, rhs: Self) -> Decimal {
        self.checked_add(rhs).expect("Decimal addition radix mismatch")
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    #[inline]
    fn sub(self, rhs: Self) -> Decimal {
        self.checked_sub(rhs).expect("Decimal subtraction radix mismatch")
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    #[inline]
    fn mul(self, rhs: Self) -> Decimal {
        self.checked_mul(rhs).expect("Decimal multiplication radix mismatch")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal {
    /// Sign, whole digits, point, fractional digits. The point is always
    /// written, even when there is no fractional part. Padding uses the
    /// alphabet's zero digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        let zero = self.base().digit_char(0).map_err(|_| fmt::Error)?;
        let digits = self.significand.abs().to_string();

        match self.exponent.cmp(&0) {
            Ordering::Less => {
                let fraction = self.exponent.unsigned_abs() as usize;
                let padding = (fraction + 1).saturating_sub(digits.len());
                let padded: String = iter::repeat(zero)
                    .take(padding)
                    .chain(digits.chars())
                    .collect();
                let split = padded.len() - fraction;
                write!(f, "{}{}{}", &padded[..split], self.point, &padded[split..])
            }
            Ordering::Greater => {
                let zeros: String = iter::repeat(zero).take(self.exponent as usize).collect();
                write!(f, "{}{}{}", digits, zeros, self.point)
            }
            Ordering::Equal => write!(f, "{}{}", digits, self.point),
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal(value={}, radix={})", self, self.radix())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::base::{Alphabet, BASE36, BASE64};
    use std::sync::LazyLock;

    fn dec(digits: &str, base: &'static dyn Base, exponent: i64) -> Decimal {
        Decimal::new(Integer::parse(digits, base).unwrap(), exponent)
    }

    #[test]
    fn test_parse() {
        let cases: [(&str, &'static dyn Base, &str); 5] = [
            ("12:3", &BASE10, "12:3"),
            ("10", &BASE36, "10:"),
            ("0000:00ri", &BASE36, "0:00ri"),
            ("-0000:00ri", &BASE36, "-0:00ri"),
            ("r^i", &BASE64, "r^i:"),
        ];
        for (text, base, want) in cases {
            let got = Decimal::parse(text, base, DEFAULT_POINT).unwrap();
            assert_eq!(got.to_string(), want, "parse {}", text);
        }
    }

    #[test]
    fn test_parse_trailing_fraction_zeros() {
        let x = Decimal::parse("ri01:000000", &BASE36, ':').unwrap();
        assert_eq!(x.to_string(), "ri01:");
        assert_eq!(x.exponent(), 0);
    }

    #[test]
    fn test_parse_multiple_points() {
        assert_eq!(
            Decimal::parse("1:2:3", &BASE10, ':'),
            Err(NumericError::MalformedDecimal)
        );
    }

    #[test]
    fn test_parse_custom_point() {
        let x = Decimal::parse("12.5", &BASE10, '.').unwrap();
        assert_eq!(x.to_string(), "12.5");
        assert_eq!(x.point(), '.');
        assert_eq!(x.with_radix_point(':').to_string(), "12:5");
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(Decimal::from_f64(0.5, &BASE36).unwrap().to_string(), "0:i");
        assert_eq!(Decimal::from_f64(-0.5, &BASE36).unwrap().to_string(), "-0:i");
        assert_eq!(Decimal::from_f64(10.0, &BASE36).unwrap().to_string(), "a:");
        assert_eq!(Decimal::from_f64(0.0, &BASE36).unwrap().to_string(), "0:");
        assert_eq!(Decimal::from_f64(2.25, &BASE10).unwrap().to_string(), "2:25");
    }

    #[test]
    fn test_from_f64_non_finite() {
        assert_eq!(
            Decimal::from_f64(f64::NAN, &BASE10),
            Err(NumericError::NonFinite)
        );
        assert_eq!(
            Decimal::from_f64(f64::INFINITY, &BASE36),
            Err(NumericError::NonFinite)
        );
    }

    #[test]
    fn test_add() {
        let cases = [
            (("12345", -3), ("55", -1), 17.845),
            (("12345", 1), ("55", -1), 123455.5),
            (("12345", 1), ("55", 1), 124000.0),
        ];
        for ((a, ea), (b, eb), want) in cases {
            let sum = &dec(a, &BASE10, ea) + &dec(b, &BASE10, eb);
            assert_eq!(sum.to_f64(), want);
        }
    }

    #[test]
    fn test_add_exact() {
        let sum = &dec("12345", &BASE10, -3) + &dec("55", &BASE10, -1);
        assert_eq!(sum.to_string(), "17:845");
    }

    #[test]
    fn test_add_leaves_operands_untouched() {
        let a = dec("12345", &BASE10, 1);
        let b = dec("55", &BASE10, -1);
        let _ = &a + &b;
        assert_eq!(a.to_string(), "123450:");
        assert_eq!(a.exponent(), 1);
        assert_eq!(b.to_string(), "5:5");
    }

    #[test]
    fn test_sub() {
        let diff = &dec("5", &BASE10, -1) - &dec("75", &BASE10, -2);
        assert_eq!(diff.to_string(), "-0:25");
        assert!((&diff - &diff).is_zero());
    }

    #[test]
    fn test_mul() {
        let cases: [((&str, &'static dyn Base, i64), (&str, i64), &str); 3] = [
            (("12345", &BASE10, -3), ("55", -1), "67:8975"),
            (("12345", &BASE10, 1), ("5", -1), "61725:"),
            (("12as5", &BASE36, 0), ("i", -1), "j5e2:i"),
        ];
        for ((a, base, ea), (b, eb), want) in cases {
            let product = &dec(a, base, ea) * &dec(b, base, eb);
            assert_eq!(product.to_string(), want);
        }
    }

    #[test]
    fn test_mul_parsed() {
        let a = Decimal::parse("12:345", &BASE10, ':').unwrap();
        let b = Decimal::parse("55", &BASE10, ':').unwrap();
        assert_eq!((&a * &b).to_string(), "678:975");
    }

    #[test]
    fn test_negate() {
        let x = dec("12345", &BASE10, -3);
        let neg = -&x;
        assert_eq!(neg.to_string(), "-12:345");
        assert_eq!(neg.exponent(), x.exponent());
        assert_eq!(-neg, x);
    }

    #[test]
    fn test_whole() {
        assert_eq!(dec("12345", &BASE10, -3).whole().to_string(), "12");
        assert_eq!(dec("21i3v9", &BASE36, -4).whole().to_string(), "21");
        assert_eq!(dec("21", &BASE36, 2).whole().to_string(), "2100");
        assert_eq!(dec("-12345", &BASE10, -3).whole().to_string(), "-12");
    }

    #[test]
    fn test_display() {
        let cases: [(&str, &'static dyn Base, i64, &str); 5] = [
            ("12345", &BASE10, -3, "12:345"),
            ("21i3v9", &BASE36, 1, "21i3v90:"),
            ("21i3v9", &BASE36, -6, "0:21i3v9"),
            ("21i3v9", &BASE36, -10, "0:000021i3v9"),
            ("21i3v9^", &BASE64, 2, "21i3v9^00:"),
        ];
        for (digits, base, exponent, want) in cases {
            assert_eq!(dec(digits, base, exponent).to_string(), want);
        }
    }

    #[test]
    fn test_canonical_equality() {
        let a = dec("1200", &BASE10, -3);
        let b = dec("12", &BASE10, -1);
        assert_eq!(a, b);
        assert_eq!(a.significand().to_string(), "12");
        assert_eq!(a.exponent(), -1);
        assert_eq!(a.to_string(), b.to_string());

        let zero = dec("000", &BASE10, -5);
        assert_eq!(zero.exponent(), 0);
        assert_eq!(zero.to_string(), "0:");
    }

    #[test]
    fn test_ordering() {
        let values = ["-2:5", "-0:01", "0", "0:001", "0:5", "1", "1:0001", "10:"];
        let parsed: Vec<Decimal> = values
            .iter()
            .map(|v| Decimal::parse(v, &BASE10, ':').unwrap())
            .collect();
        for (i, a) in parsed.iter().enumerate() {
            for (j, b) in parsed.iter().enumerate() {
                assert_eq!(a.cmp(b), i.cmp(&j), "{} vs {}", a, b);
            }
        }
    }

    #[test]
    fn test_rust_decimal_interop() {
        let d = rust_decimal::Decimal::new(12345, 2);
        let x = Decimal::from_rust_decimal(d);
        assert_eq!(x.to_string(), "123:45");
        assert_eq!(x.to_rust_decimal().unwrap(), d);

        let whole = dec("12", &BASE10, 3);
        assert_eq!(
            whole.to_rust_decimal().unwrap(),
            rust_decimal::Decimal::from(12000)
        );

        let base36 = dec("1", &BASE36, 0);
        assert_eq!(
            base36.to_rust_decimal(),
            Err(NumericError::RadixMismatch { left: 36, right: 10 })
        );
    }

    #[test]
    fn test_display_custom_zero_digit() {
        static BINARY: LazyLock<Alphabet> = LazyLock::new(|| Alphabet::new("ox").unwrap());

        let small = Decimal::new(Integer::parse("x", &*BINARY).unwrap(), -3);
        assert_eq!(small.to_string(), "o:oox");
        assert_eq!(Decimal::parse("o:oox", &*BINARY, ':').unwrap(), small);

        let large = Decimal::new(Integer::parse("x", &*BINARY).unwrap(), 2);
        assert_eq!(large.to_string(), "xoo:");
        assert_eq!(Decimal::parse("xoo", &*BINARY, ':').unwrap(), large);

        let zero = Decimal::from_integer(Integer::zero(&*BINARY));
        assert_eq!(zero.to_string(), "o:");
        assert_eq!(Decimal::parse("o:", &*BINARY, ':').unwrap(), zero);
    }
}
