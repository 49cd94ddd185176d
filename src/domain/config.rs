// ============================================================================
// Rank Configuration
// Radix and formatting parameters for rank keys
// ============================================================================

use super::errors::{RankError, RankResult};
use crate::numeric::{Base, BASE10, BASE36, BASE64, DEFAULT_POINT};

/// Default bucket separator.
pub const DEFAULT_SEPARATOR: char = '|';

/// Default zero-padded width of the whole-number part.
pub const DEFAULT_WHOLE_WIDTH: usize = 6;

/// Default whole-number step used by next/prev.
///
/// Leaves 15 integer slots on either side of a key for later insertions.
pub const DEFAULT_STEP: u32 = 16;

/// Complete configuration for generating and parsing rank keys
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Digit alphabet of the rank decimal
    pub base: &'static dyn Base,

    /// Radix-point character between whole and fractional digits
    pub point: char,

    /// Character between the bucket digit and the whole part
    pub separator: char,

    /// Zero-padded width of the whole-number part
    pub whole_width: usize,

    /// Whole-number offset applied by next/prev
    pub step: u32,
}

impl RankConfig {
    /// Create a configuration with default formatting for `base`
    pub fn new(base: &'static dyn Base) -> Self {
        Self {
            base,
            point: DEFAULT_POINT,
            separator: DEFAULT_SEPARATOR,
            whole_width: DEFAULT_WHOLE_WIDTH,
            step: DEFAULT_STEP,
        }
    }

    /// Builder method: Set radix-point character
    pub fn with_point(mut self, point: char) -> Self {
        self.point = point;
        self
    }

    /// Builder method: Set bucket separator
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Builder method: Set whole-number width
    pub fn with_whole_width(mut self, whole_width: usize) -> Self {
        self.whole_width = whole_width;
        self
    }

    /// Builder method: Set next/prev step
    pub fn with_step(mut self, step: u32) -> Self {
        self.step = step;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RankResult<()> {
        if self.whole_width == 0 {
            return Err(RankError::InvalidConfig("whole width must be positive"));
        }

        if self.step == 0 {
            return Err(RankError::InvalidConfig("step must be positive"));
        }

        // Midpoints multiply by one half, which needs an even radix to be exact
        if self.base.radix() % 2 != 0 {
            return Err(RankError::InvalidConfig("radix must be even"));
        }

        // Keys compare byte-wise, so symbols must ascend with their digit values
        let symbols = self.base.alphabet().as_bytes();
        if !symbols.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(RankError::InvalidConfig("alphabet must ascend in byte order"));
        }

        if self.point == self.separator {
            return Err(RankError::InvalidConfig("point and separator must differ"));
        }

        for (ch, reason) in [
            (self.point, "point collides with a digit or sign"),
            (self.separator, "separator collides with a digit or sign"),
        ] {
            if ch == '-' || ch == '+' || self.base.digit_value(ch).is_ok() {
                return Err(RankError::InvalidConfig(reason));
            }
        }

        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self::base36()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl RankConfig {
    /// Decimal digits, `0|500000:` middle
    pub fn base10() -> Self {
        Self::new(&BASE10)
    }

    /// Lowercase alphanumerics, `0|i00000:` middle
    pub fn base36() -> Self {
        Self::new(&BASE36)
    }

    /// Mixed-case alphabet, `0|W00000:` middle
    pub fn base64() -> Self {
        Self::new(&BASE64)
    }
}
