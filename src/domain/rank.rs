// ============================================================================
// LexoRank
// Bucketed, fixed-shape rank key that sorts the same as text and as a number
// ============================================================================

use super::bucket::Bucket;
use super::config::{RankConfig, DEFAULT_STEP};
use super::errors::{RankError, RankResult};
use crate::numeric::{Base, Decimal, Integer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Serialize, Serializer};

/// A sortable, insertable rank key.
///
/// Textual form: `<bucket><separator><whole, zero-padded><point><fraction>`,
/// e.g. `0|i00000:` or `1|00001a:i`. Within one configuration, comparing the
/// strings byte-wise gives the same order as comparing the values.
///
/// # Example
/// ```
/// use lexorank::prelude::*;
///
/// let first = LexoRank::middle(Bucket::Bucket0, &RankConfig::default()).unwrap();
/// let last = first.next().unwrap();
/// let inserted = LexoRank::between(Some(&first), Some(&last)).unwrap();
///
/// assert!(first < inserted && inserted < last);
/// assert!(first.to_string() < inserted.to_string());
/// ```
#[derive(Clone)]
pub struct LexoRank {
    bucket: Bucket,
    rank: Decimal,
    separator: char,
    whole_width: usize,
}

impl LexoRank {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Assemble a rank from its parts. The radix point is taken from `rank`.
    pub fn new(bucket: Bucket, rank: Decimal, separator: char, whole_width: usize) -> Self {
        Self {
            bucket,
            rank,
            separator,
            whole_width,
        }
    }

    /// Assemble a rank using the formatting of `config`.
    pub fn from_config(bucket: Bucket, rank: Decimal, config: &RankConfig) -> Self {
        Self::new(
            bucket,
            rank.with_radix_point(config.point),
            config.separator,
            config.whole_width,
        )
    }

    /// Seed rank for an empty list: half of `radix^whole_width`.
    ///
    /// Not memoized; [`crate::engine::Ranker::middle`] caches it.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config` does not validate.
    pub fn middle(bucket: Bucket, config: &RankConfig) -> RankResult<Self> {
        config.validate()?;
        Ok(Self::middle_unchecked(bucket, config))
    }

    /// Middle rank for a configuration that already passed validation.
    pub(crate) fn middle_unchecked(bucket: Bucket, config: &RankConfig) -> Self {
        let upper = Decimal::with_point(ceiling(config.base, config.whole_width), 0, config.point);
        Self::from_config(bucket, &upper * &half(config.base, config.point), config)
    }

    /// Parse with the default configuration (base 36, `|`, `:`, width 6).
    pub fn parse(value: &str) -> RankResult<Self> {
        Self::parse_with(value, &RankConfig::default())
    }

    /// Parse a rank key.
    ///
    /// # Errors
    /// - `InvalidFormat` if the separator is not at index 1, the point is not
    ///   at index `2 + whole_width`, or the whole part carries a sign
    /// - `InvalidBucket` if the first character is not `0`, `1` or `2`
    /// - `Numeric` for invalid digits or a second point
    pub fn parse_with(value: &str, config: &RankConfig) -> RankResult<Self> {
        let mut chars = value.chars();
        let (Some(bucket), Some(separator)) = (chars.next(), chars.next()) else {
            return Err(RankError::InvalidFormat);
        };
        let body = chars.as_str();

        if separator != config.separator
            || body.chars().nth(config.whole_width) != Some(config.point)
            || body.starts_with(['-', '+'])
        {
            return Err(RankError::InvalidFormat);
        }

        let bucket = Bucket::from_digit(bucket)?;
        let rank = Decimal::parse(body, config.base, config.point)?;
        Ok(Self::from_config(bucket, rank, config))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    #[inline]
    pub fn rank(&self) -> &Decimal {
        &self.rank
    }

    #[inline]
    pub fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub fn whole_width(&self) -> usize {
        self.whole_width
    }

    #[inline]
    pub fn base(&self) -> &'static dyn Base {
        self.rank.base()
    }

    /// Same rank value moved into another bucket.
    pub fn with_bucket(&self, bucket: Bucket) -> Self {
        Self {
            bucket,
            ..self.clone()
        }
    }

    fn with_rank(&self, rank: Decimal) -> Self {
        Self {
            rank,
            ..self.clone()
        }
    }

    // ========================================================================
    // Stepping
    // ========================================================================

    /// Rank after this one, [`DEFAULT_STEP`] whole units further.
    #[inline]
    pub fn next(&self) -> RankResult<Self> {
        self.next_by(DEFAULT_STEP)
    }

    /// Rank before this one, [`DEFAULT_STEP`] whole units back.
    #[inline]
    pub fn prev(&self) -> RankResult<Self> {
        self.prev_by(DEFAULT_STEP)
    }

    /// Add `step` to the truncated whole part.
    ///
    /// Near the top of the whole-number range, falls back to the midpoint
    /// between this rank and `radix^whole_width`.
    pub fn next_by(&self, step: u32) -> RankResult<Self> {
        self.offset(&step_integer(step, self.base())?)
    }

    /// Subtract `step` from the truncated whole part.
    ///
    /// Near zero, falls back to the midpoint between zero and this rank.
    ///
    /// # Errors
    /// Returns `OutOfRange` when this rank is already zero.
    pub fn prev_by(&self, step: u32) -> RankResult<Self> {
        self.offset(&-step_integer(step, self.base())?)
    }

    /// Move the whole part by a non-zero `delta`, staying inside
    /// `[0, radix^whole_width)`.
    pub(crate) fn offset(&self, delta: &Integer) -> RankResult<Self> {
        let upper = ceiling(self.base(), self.whole_width);
        let whole = self.rank.whole().checked_add(delta)?;
        if !whole.is_negative() && whole < upper {
            return Ok(self.with_rank(Decimal::with_point(whole, 0, self.rank.point())));
        }

        let point = self.rank.point();
        let (low, high) = if delta.is_negative() {
            (Decimal::with_point(Integer::zero(self.base()), 0, point), self.rank.clone())
        } else {
            (self.rank.clone(), Decimal::with_point(upper, 0, point))
        };
        if low >= high {
            return Err(RankError::OutOfRange);
        }

        Ok(self.with_rank(midpoint(&low, &high)?))
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Rank strictly between two neighbours.
    ///
    /// - `(None, None)` fails with `InvalidRange`
    /// - `(None, Some(b))` returns `b.prev()`
    /// - `(Some(a), None)` returns `a.next()`
    /// - otherwise the midpoint, shortened to its whole part when that
    ///   already sorts strictly between the neighbours
    ///
    /// Keys still grow by about one digit per insertion when the same gap
    /// is split repeatedly; rotating into the next bucket resets them.
    pub fn between(a: Option<&Self>, b: Option<&Self>) -> RankResult<Self> {
        match (a, b) {
            (None, None) => Err(RankError::InvalidRange),
            (None, Some(b)) => b.prev(),
            (Some(a), None) => a.next(),
            (Some(a), Some(b)) => Self::between_pair(a, b),
        }
    }

    /// Sum of two ranks of the same bucket and whole width, keeping the
    /// formatting of `self`.
    ///
    /// # Errors
    /// - `InvalidRange` if the buckets or whole widths differ
    /// - `OutOfRange` if the sum leaves `[0, radix^whole_width)`
    /// - `Numeric` if the radices differ
    pub fn checked_add(&self, rhs: &Self) -> RankResult<Self> {
        if self.bucket != rhs.bucket || self.whole_width != rhs.whole_width {
            return Err(RankError::InvalidRange);
        }

        let sum = self.rank.checked_add(&rhs.rank)?;
        if sum.is_negative() || sum.whole() >= ceiling(self.base(), self.whole_width) {
            return Err(RankError::OutOfRange);
        }
        Ok(self.with_rank(sum))
    }

    /// Midpoint of two present neighbours, in either order.
    pub(crate) fn between_pair(a: &Self, b: &Self) -> RankResult<Self> {
        if a.bucket != b.bucket || a.whole_width != b.whole_width {
            return Err(RankError::InvalidRange);
        }

        let (low, high) = match a.rank.cmp(&b.rank) {
            Ordering::Less => (a, b),
            Ordering::Greater => (b, a),
            Ordering::Equal => return Err(RankError::InvalidRange),
        };

        Ok(low.with_rank(midpoint(&low.rank, &high.rank)?))
    }
}

// ============================================================================
// Rank Arithmetic Helpers
// ============================================================================

/// `radix^width`, the exclusive upper bound of the whole part.
fn ceiling(base: &'static dyn Base, width: usize) -> Integer {
    &Integer::from_i64(1, base) << width
}

/// One half as a single fractional digit.
fn half(base: &'static dyn Base, point: char) -> Decimal {
    Decimal::with_point(Integer::from_i64(base.radix() as i64 / 2, base), -1, point)
}

fn step_integer(step: u32, base: &'static dyn Base) -> RankResult<Integer> {
    if step == 0 {
        return Err(RankError::InvalidConfig("step must be positive"));
    }
    Ok(Integer::from_i64(step as i64, base))
}

/// Value strictly between `low < high`, both non-negative.
///
/// Returns the whole part of the exact midpoint when it lies strictly
/// between the whole parts of the bounds, the exact midpoint otherwise.
fn midpoint(low: &Decimal, high: &Decimal) -> RankResult<Decimal> {
    if low.radix() % 2 != 0 {
        return Err(RankError::InvalidConfig("radix must be even"));
    }

    let mid = low.checked_add(high)?.checked_mul(&half(low.base(), low.point()))?;
    let whole = mid.whole();
    if low.whole() < whole && whole < high.whole() {
        return Ok(Decimal::with_point(whole, 0, low.point()));
    }
    Ok(mid)
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for LexoRank {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bucket == other.bucket && self.rank == other.rank
    }
}

impl Eq for LexoRank {}

impl PartialOrd for LexoRank {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LexoRank {
    /// Bucket first, then rank value.
    fn cmp(&self, other: &Self) -> Ordering {
        self.bucket
            .cmp(&other.bucket)
            .then_with(|| self.rank.cmp(&other.rank))
    }
}

/// Compares the rendered key.
impl PartialEq<str> for LexoRank {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for LexoRank {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl Hash for LexoRank {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bucket.hash(state);
        self.rank.hash(state);
    }
}

impl FromStr for LexoRank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Panics when the checked form fails; use checked_add at boundaries
impl Add for &LexoRank {
    type Output = LexoRank;

    #[inline]
    fn add(self, rhs: Self) -> LexoRank {
        self.checked_add(rhs).expect("LexoRank addition out of range")
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for LexoRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let point = self.rank.point();
        let rendered = self.rank.to_string();
        let (whole, fraction) = rendered.split_once(point).ok_or(fmt::Error)?;
        let (sign, digits) = match whole.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", whole),
        };
        let zero = self.base().digit_char(0).map_err(|_| fmt::Error)?;
        let padding = self
            .whole_width
            .saturating_sub(sign.len() + digits.chars().count());

        write!(f, "{}{}{}", self.bucket, self.separator, sign)?;
        for _ in 0..padding {
            fmt::Write::write_char(f, zero)?;
        }
        write!(f, "{}{}{}", digits, point, fraction)
    }
}

impl fmt::Debug for LexoRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LexoRank({}, radix={})", self, self.rank.radix())
    }
}

#[cfg(feature = "serde")]
impl Serialize for LexoRank {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// Tests
// ============================================================================
