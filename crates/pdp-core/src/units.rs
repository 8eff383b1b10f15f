//! Units of measure for time, distance, and speed.
//!
//! Conversions happen once, when environment descriptors are assembled.
//! Everything downstream of that boundary stores canonical values:
//!
//! | Quantity | Canonical unit |
//! |----------|----------------|
//! | time     | millisecond    |
//! | distance | metre          |
//! | speed    | metre / second |

use std::fmt;

// ── TimeUnit ──────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Length of one unit in milliseconds.
    #[inline]
    pub const fn millis(self) -> u64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second      => 1_000,
            TimeUnit::Minute      => 60_000,
            TimeUnit::Hour        => 3_600_000,
        }
    }

    #[inline]
    pub fn seconds(self) -> f64 {
        self.millis() as f64 / 1_000.0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "ms",
            TimeUnit::Second      => "s",
            TimeUnit::Minute      => "min",
            TimeUnit::Hour        => "h",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DistanceUnit ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceUnit {
    Metre,
    Kilometre,
}

impl DistanceUnit {
    /// Length of one unit in metres.
    #[inline]
    pub const fn metres(self) -> f64 {
        match self {
            DistanceUnit::Metre     => 1.0,
            DistanceUnit::Kilometre => 1_000.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DistanceUnit::Metre     => "m",
            DistanceUnit::Kilometre => "km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── SpeedUnit ─────────────────────────────────────────────────────────────────

/// A distance unit divided by a time unit.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedUnit {
    pub distance: DistanceUnit,
    pub time:     TimeUnit,
}

impl SpeedUnit {
    pub const METRES_PER_SECOND: SpeedUnit =
        SpeedUnit { distance: DistanceUnit::Metre, time: TimeUnit::Second };
    pub const KILOMETRES_PER_HOUR: SpeedUnit =
        SpeedUnit { distance: DistanceUnit::Kilometre, time: TimeUnit::Hour };
    pub const KILOMETRES_PER_MINUTE: SpeedUnit =
        SpeedUnit { distance: DistanceUnit::Kilometre, time: TimeUnit::Minute };

    /// Convert `value` expressed in this unit to metres per second.
    #[inline]
    pub fn to_metres_per_second(self, value: f64) -> f64 {
        value * self.distance.metres() / self.time.seconds()
    }
}

impl fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.distance, self.time)
    }
}
