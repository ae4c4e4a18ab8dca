use crate::error::InvalidInput;
use std::fmt;

/// Closed range `[low, high]` on one axis.
///
/// A rectangle projects onto one interval per axis; intervals with
/// `low == high` are allowed and describe a single coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    pub fn new(low: f64, high: f64) -> Result<Self, InvalidInput> {
        if low.is_nan() || high.is_nan() {
            return Err(InvalidInput::NotANumber);
        }
        if low > high {
            return Err(InvalidInput::MalformedInterval { low, high });
        }
        Ok(Self { low, high })
    }

    /// Caller guarantees `low <= high` and neither is NaN.
    pub(crate) fn from_validated(low: f64, high: f64) -> Self {
        debug_assert!(low <= high);
        Self { low, high }
    }

    /// Single-coordinate interval.
    pub fn point(at: f64) -> Result<Self, InvalidInput> {
        Self::new(at, at)
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn length(&self) -> f64 {
        self.high - self.low
    }

    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// True when `v` lies inside the interval and on neither endpoint.
    pub fn contains_strictly(&self, v: f64) -> bool {
        self.low < v && v < self.high
    }

    pub fn contains_interval(&self, other: &Interval) -> bool {
        self.low <= other.low && other.high <= self.high
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
