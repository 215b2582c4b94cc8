use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// A point on the media clock, measured from the start of the asset.
///
/// Backed by [`Duration`], so it can never be negative. Arithmetic that would
/// go below zero saturates at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MediaTime(Duration);

impl MediaTime {
    pub const ZERO: MediaTime = MediaTime(Duration::ZERO);

    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Negative and NaN inputs normalize to zero, overflow saturates.
    pub fn from_secs_f64(secs: f64) -> Self {
        if secs.is_nan() || secs <= 0.0 {
            return Self::ZERO;
        }
        Self(Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX))
    }

    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    pub fn from_duration(duration: Duration) -> Self {
        Self(duration)
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.0.as_secs_f64()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Shift by a signed number of seconds, stopping at zero.
    pub fn offset_by_secs(self, delta_secs: f64) -> Self {
        Self::from_secs_f64(self.as_secs_f64() + delta_secs)
    }

    /// Clamp into `[lo, hi]`. If the bounds are inverted, `lo` wins.
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        if self > hi {
            hi.max(lo)
        } else if self < lo {
            lo
        } else {
            self
        }
    }

    /// Render as `mm:ss.mmm`. Milliseconds are truncated, not rounded.
    pub fn display_string(&self) -> String {
        let total_secs = self.0.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        let millis = self.0.subsec_millis();
        format!("{minutes:02}:{seconds:02}.{millis:03}")
    }
}

impl fmt::Display for MediaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl From<Duration> for MediaTime {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

impl std::ops::Add for MediaTime {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl std::ops::Sub for MediaTime {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

/// A closed time range, `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: MediaTime,
    pub end: MediaTime,
}

impl TimeRange {
    pub fn new(start: MediaTime, end: MediaTime) -> Result<Self> {
        if start > end {
            return Err(CoreError::InvalidTimeRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The range covering a whole asset.
    pub fn full(duration: MediaTime) -> Self {
        Self {
            start: MediaTime::ZERO,
            end: duration,
        }
    }

    pub fn duration(&self) -> MediaTime {
        self.end.saturating_sub(self.start)
    }

    pub fn contains(&self, t: MediaTime) -> bool {
        t >= self.start && t <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_string_minutes_seconds_millis() {
        assert_eq!(MediaTime::from_secs_f64(65.25).display_string(), "01:05.250");
        assert_eq!(MediaTime::zero().display_string(), "00:00.000");
        assert_eq!(MediaTime::from_millis(59_999).display_string(), "00:59.999");
    }

    #[test]
    fn test_display_string_does_not_wrap_hours() {
        assert_eq!(MediaTime::from_millis(75 * 60_000 + 7).display_string(), "75:00.007");
    }

    #[test]
    fn test_display_truncates_sub_millisecond() {
        let t = MediaTime::from_duration(Duration::from_micros(1_999));
        assert_eq!(t.to_string(), "00:00.001");
    }

    #[test]
    fn test_negative_and_nan_normalize_to_zero() {
        assert_eq!(MediaTime::from_secs_f64(-3.0), MediaTime::ZERO);
        assert_eq!(MediaTime::from_secs_f64(f64::NAN), MediaTime::ZERO);
    }

    #[test]
    fn test_sub_saturates() {
        let a = MediaTime::from_secs_f64(1.0);
        let b = MediaTime::from_secs_f64(2.0);
        assert_eq!(a - b, MediaTime::ZERO);
        assert_eq!(b.offset_by_secs(-5.0), MediaTime::ZERO);
    }

    #[test]
    fn test_time_range_rejects_inverted() {
        let a = MediaTime::from_secs_f64(1.0);
        let b = MediaTime::from_secs_f64(2.0);
        assert!(TimeRange::new(b, a).is_err());
        assert!(TimeRange::new(a, a).is_ok());
    }
}
