// ============================================================================
// Arbitrary-Precision Integer
// Signed integer over a pluggable radix alphabet
// ============================================================================

use super::base::Base;
use super::errors::{NumericError, NumericResult};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Shl, Shr, Sub};

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// Digit storage, least-significant digit first.
///
/// Rank keys rarely exceed a dozen digits, so they stay inline.
pub(crate) type Digits = SmallVec<[u8; 16]>;

/// Sign of an [`Integer`]. Zero is always `Positive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    Positive,
}

impl Neg for Sign {
    type Output = Sign;

    #[inline]
    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Positive => Sign::Negative,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Arbitrary-precision signed integer in a configurable radix.
///
/// Values are immutable: every operation returns a new `Integer`. The digit
/// sequence never carries leading zeros and zero has no digits at all, so
/// structural and numeric equality coincide.
///
/// # Example
/// ```
/// use lexorank::numeric::{Integer, BASE36};
///
/// let a = Integer::parse("zz", &BASE36).unwrap();
/// let b = Integer::from_i64(1, &BASE36);
/// assert_eq!((&a + &b).to_string(), "100");
/// ```
#[derive(Clone)]
pub struct Integer {
    sign: Sign,
    digits: Digits,
    base: &'static dyn Base,
}

impl Integer {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build from a sign and little-endian digits, stripping leading zeros.
    pub(crate) fn from_digits(sign: Sign, mut digits: Digits, base: &'static dyn Base) -> Self {
        while digits.last() == Some(&0) {
            digits.pop();
        }
        let sign = if digits.is_empty() { Sign::Positive } else { sign };
        Self { sign, digits, base }
    }

    /// Zero in the given base.
    #[inline]
    pub fn zero(base: &'static dyn Base) -> Self {
        Self {
            sign: Sign::Positive,
            digits: Digits::new(),
            base,
        }
    }

    /// Parse an optionally signed numeral, most-significant digit first.
    ///
    /// # Errors
    /// - `MalformedInteger` if there are no digits after the sign
    /// - `InvalidDigit` if a character is not in the alphabet
    pub fn parse(value: &str, base: &'static dyn Base) -> NumericResult<Self> {
        let (sign, body) = match value.strip_prefix('-') {
            Some(rest) => (Sign::Negative, rest),
            None => (Sign::Positive, value.strip_prefix('+').unwrap_or(value)),
        };
        if body.is_empty() {
            return Err(NumericError::MalformedInteger);
        }

        let digits = body
            .chars()
            .rev()
            .map(|ch| base.digit_value(ch))
            .collect::<NumericResult<Digits>>()?;

        Ok(Self::from_digits(sign, digits, base))
    }

    /// Convert a native integer by repeated division by the radix.
    pub fn from_i128(value: i128, base: &'static dyn Base) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let radix = base.radix() as u128;
        let mut magnitude = value.unsigned_abs();

        let mut digits = Digits::new();
        while magnitude > 0 {
            digits.push((magnitude % radix) as u8);
            magnitude /= radix;
        }

        Self::from_digits(sign, digits, base)
    }

    #[inline]
    pub fn from_i64(value: i64, base: &'static dyn Base) -> Self {
        Self::from_i128(value as i128, base)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn base(&self) -> &'static dyn Base {
        self.base
    }

    #[inline]
    pub fn radix(&self) -> u32 {
        self.base.radix()
    }

    /// Number of significant digits (zero has none).
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Digit values, most-significant first.
    pub fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + '_ {
        self.digits.iter().rev().copied()
    }

    /// Number of zero digits at the least-significant end.
    pub(crate) fn trailing_zeros(&self) -> usize {
        self.digits.iter().take_while(|d| **d == 0).count()
    }

    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            digits: self.digits.clone(),
            base: self.base,
        }
    }

    /// `-1`, `0` or `1` in the same base.
    pub fn signum(&self) -> Self {
        match (self.is_zero(), self.sign) {
            (true, _) => Self::zero(self.base),
            (false, Sign::Positive) => Self::from_i64(1, self.base),
            (false, Sign::Negative) => Self::from_i64(-1, self.base),
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Checked addition.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let radix = self.same_radix(rhs)?;

        if self.sign == rhs.sign {
            let digits = add_magnitudes(&self.digits, &rhs.digits, radix);
            return Ok(Self::from_digits(self.sign, digits, self.base));
        }

        match cmp_magnitudes(&self.digits, &rhs.digits) {
            Ordering::Equal => Ok(Self::zero(self.base)),
            Ordering::Greater => {
                let digits = sub_magnitudes(&self.digits, &rhs.digits, radix);
                Ok(Self::from_digits(self.sign, digits, self.base))
            }
            Ordering::Less => {
                let digits = sub_magnitudes(&rhs.digits, &self.digits, radix);
                Ok(Self::from_digits(rhs.sign, digits, self.base))
            }
        }
    }

    /// Checked subtraction, computed as `self + (-rhs)`.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    #[inline]
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(&-rhs)
    }

    /// Checked schoolbook multiplication.
    ///
    /// # Errors
    /// Returns `RadixMismatch` if the operands use different radices.
    pub fn checked_mul(&self, rhs: &Self) -> NumericResult<Self> {
        let radix = self.same_radix(rhs)?;
        if self.is_zero() || rhs.is_zero() {
            return Ok(Self::zero(self.base));
        }

        // Each cell stays below radix^2 + radix, well inside u32 for radix <= 255.
        let mut cells = vec![0u32; self.len() + rhs.len()];
        for (i, &a) in self.digits.iter().enumerate() {
            let mut carry = 0u32;
            for (j, &b) in rhs.digits.iter().enumerate() {
                let total = cells[i + j] + a as u32 * b as u32 + carry;
                cells[i + j] = total % radix;
                carry = total / radix;
            }
            let mut k = i + rhs.len();
            while carry > 0 {
                let total = cells[k] + carry;
                cells[k] = total % radix;
                carry = total / radix;
                k += 1;
            }
        }

        let digits = cells.into_iter().map(|c| c as u8).collect();
        Ok(Self::from_digits(self.sign * rhs.sign, digits, self.base))
    }

    /// Multiply by `radix^shift`.
    ///
    /// # Errors
    /// Returns `InvalidShiftAmount` if `shift` is negative.
    pub fn checked_shl(&self, shift: i64) -> NumericResult<Self> {
        let shift = usize::try_from(shift).map_err(|_| NumericError::InvalidShiftAmount(shift))?;
        Ok(self.shifted_left(shift))
    }

    /// Divide by `radix^shift`, truncating toward zero.
    ///
    /// # Errors
    /// Returns `InvalidShiftAmount` if `shift` is negative.
    pub fn checked_shr(&self, shift: i64) -> NumericResult<Self> {
        let shift = usize::try_from(shift).map_err(|_| NumericError::InvalidShiftAmount(shift))?;
        Ok(self.shifted_right(shift))
    }

    pub(crate) fn shifted_left(&self, shift: usize) -> Self {
        if self.is_zero() || shift == 0 {
            return self.clone();
        }
        let mut digits = Digits::with_capacity(self.len() + shift);
        digits.extend(std::iter::repeat(0).take(shift));
        digits.extend_from_slice(&self.digits);
        Self::from_digits(self.sign, digits, self.base)
    }

    pub(crate) fn shifted_right(&self, shift: usize) -> Self {
        if shift >= self.len() {
            return Self::zero(self.base);
        }
        let digits = Digits::from_slice(&self.digits[shift..]);
        Self::from_digits(self.sign, digits, self.base)
    }

    // ========================================================================
    // Native Conversion
    // ========================================================================

    /// Convert to a native integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit in an `i128`.
    pub fn to_i128(&self) -> NumericResult<i128> {
        let radix = self.radix() as i128;
        let negative = self.is_negative();
        self.digits().try_fold(0i128, |acc, digit| {
            let scaled = acc.checked_mul(radix)?;
            if negative {
                scaled.checked_sub(digit as i128)
            } else {
                scaled.checked_add(digit as i128)
            }
        })
        .ok_or(NumericError::Overflow)
    }

    /// Approximate value as a float.
    pub fn to_f64(&self) -> f64 {
        let radix = self.radix() as f64;
        let magnitude = self.digits().fold(0.0, |acc, d| acc * radix + d as f64);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }

    #[inline]
    fn same_radix(&self, other: &Self) -> NumericResult<u32> {
        let (left, right) = (self.radix(), other.radix());
        if left == right {
            Ok(left)
        } else {
            Err(NumericError::RadixMismatch { left, right })
        }
    }
}

// ============================================================================
// Magnitude Helpers (little-endian digit slices)
// ============================================================================

fn cmp_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

fn add_magnitudes(a: &[u8], b: &[u8], radix: u32) -> Digits {
    let mut digits = Digits::with_capacity(a.len().max(b.len()) + 1);
    let mut carry = 0u32;
    for i in 0..a.len().max(b.len()) {
        let total = a.get(i).copied().unwrap_or(0) as u32
            + b.get(i).copied().unwrap_or(0) as u32
            + carry;
        digits.push((total % radix) as u8);
        carry = total / radix;
    }
    if carry > 0 {
        digits.push(carry as u8);
    }
    digits
}

/// `a - b` for `|a| >= |b|`, schoolbook borrow.
fn sub_magnitudes(a: &[u8], b: &[u8], radix: u32) -> Digits {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);

    let mut digits = Digits::with_capacity(a.len());
    let mut borrow = 0u32;
    for (i, &top) in a.iter().enumerate() {
        let bottom = b.get(i).copied().unwrap_or(0) as u32 + borrow;
        let top = top as u32;
        if top >= bottom {
            digits.push((top - bottom) as u8);
            borrow = 0;
        } else {
            digits.push((top + radix - bottom) as u8);
            borrow = 1;
        }
    }
    digits
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Integer {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Integer {}

impl PartialOrd for Integer {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    /// Sign first, then digit count, then digits most-significant first.
    /// Integers of different radices order by radix.
    fn cmp(&self, other: &Self) -> Ordering {
        let radix = self.radix().cmp(&other.radix());
        if radix != Ordering::Equal {
            return radix;
        }
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => cmp_magnitudes(&self.digits, &other.digits),
            (Sign::Negative, Sign::Negative) => cmp_magnitudes(&other.digits, &self.digits),
        }
    }
}

impl Hash for Integer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.radix().hash(state);
        self.sign.hash(state);
        self.digits.hash(state);
    }
}

impl Neg for &Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        Integer::from_digits(-self.sign, self.digits.clone(), self.base)
    }
}

impl Neg for Integer {
    type Output = Integer;

    #[inline]
    fn neg(self) -> Integer {
        Integer::from_digits(-self.sign, self.digits, self.base)
    }
}

// Infallible operators for ergonomics (panic on radix mismatch - use checked_* at boundaries)
impl Add for &Integer {
    type Output = Integer;

    #[inline]
    fn add(self, rhs: Self) -> Integer {
        self.checked_add(rhs).expect("Integer addition radix mismatch")
    }
}

impl Sub for &Integer {
    type Output = Integer;

    #[inline]
    fn sub(self, rhs: Self) -> Integer {
        self.checked_sub(rhs).expect("Integer subtraction radix mismatch")
    }
}

impl Mul for &Integer {
    type Output = Integer;

    #[inline]
    fn mul(self, rhs: Self) -> Integer {
        self.checked_mul(rhs).expect("Integer multiplication radix mismatch")
    }
}

impl Shl<usize> for &Integer {
    type Output = Integer;

    #[inline]
    fn shl(self, shift: usize) -> Integer {
        self.shifted_left(shift)
    }
}

impl Shr<usize> for &Integer {
    type Output = Integer;

    #[inline]
    fn shr(self, shift: usize) -> Integer {
        self.shifted_right(shift)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            let zero = self.base.digit_char(0).map_err(|_| fmt::Error)?;
            return fmt::Write::write_char(f, zero);
        }
        if self.is_negative() {
            f.write_str("-")?;
        }
        for digit in self.digits() {
            let ch = self.base.digit_char(digit as u32).map_err(|_| fmt::Error)?;
            fmt::Write::write_char(f, ch)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({}, radix={})", self, self.radix())
    }
}

#[cfg(feature = "serde")]
impl Serialize for Integer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
