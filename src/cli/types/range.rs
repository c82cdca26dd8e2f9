//! Inclusive numeric ranges for age and rating filters.

use crate::error::{Result, ScoutError};
use std::fmt;
use std::str::FromStr;

/// Accepted bounds for user-entered age ranges.
pub const AGE_BOUNDS: (u8, u8) = (15, 60);

/// Accepted bounds for user-entered potential and overall ranges.
pub const RATING_BOUNDS: (u8, u8) = (0, 100);

/// Inclusive `[lo, hi]` range over a small integer stat.
///
/// # Examples
///
/// ```rust
/// use fifa_scout::RatingRange;
///
/// let range: RatingRange = "85-90".parse().unwrap();
/// assert!(range.contains(85));
/// assert!(range.contains(90));
/// assert!(!range.contains(91));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatingRange {
    pub lo: u8,
    pub hi: u8,
}

impl RatingRange {
    pub fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Check `min <= lo <= hi <= max`, naming `field` in the error.
    pub fn validate(self, field: &str, bounds: (u8, u8)) -> Result<Self> {
        Self::within(field, i64::from(self.lo), i64::from(self.hi), bounds)
    }

    /// Build a range from raw user answers, which may be negative or larger
    /// than any rating.
    pub fn within(field: &str, lo: i64, hi: i64, (min, max): (u8, u8)) -> Result<Self> {
        let out_of_bounds = || ScoutError::InvalidRange {
            field: field.to_string(),
            lo,
            hi,
            min,
            max,
        };
        if !(i64::from(min) <= lo && lo <= hi && hi <= i64::from(max)) {
            return Err(out_of_bounds());
        }
        let lo = u8::try_from(lo).map_err(|_| out_of_bounds())?;
        let hi = u8::try_from(hi).map_err(|_| out_of_bounds())?;
        Ok(Self::new(lo, hi))
    }
}

impl fmt::Display for RatingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.lo, self.hi)
    }
}

impl FromStr for RatingRange {
    type Err = ScoutError;

    /// Accepts `N` (a single value) or `LO-HI`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || ScoutError::InvalidRangeSpec {
            spec: s.to_string(),
        };
        match s.split_once('-') {
            Some((lo, hi)) => {
                let lo: u8 = lo.trim().parse().map_err(|_| invalid())?;
                let hi: u8 = hi.trim().parse().map_err(|_| invalid())?;
                Ok(Self::new(lo, hi))
            }
            None => {
                let v: u8 = s.parse().map_err(|_| invalid())?;
                Ok(Self::new(v, v))
            }
        }
    }
}
