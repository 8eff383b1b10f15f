//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer `Tick` counter.  What one tick means in wall-clock
//! terms is decided once, by the time descriptor of a scenario (see
//! `pdp_scenario::TimeDescriptor`), and never re-derived afterwards:
//!
//!   elapsed_ms = tick * tick_length_ms
//!
//! Using an integer tick as the canonical time unit means event ordering is
//! exact (no floating-point drift) and comparisons are O(1).

use std::fmt;

use crate::{CoreError, CoreResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// Unsigned, so a negative event time is unrepresentable once a `Tick`
/// exists.  Signed sources go through `Tick::try_from(i64)`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);
    pub const MAX: Tick = Tick(u64::MAX);

    /// Return the tick `n` steps after `self`, saturating at `Tick::MAX`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0.saturating_add(n))
    }

    /// Ticks elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl TryFrom<i64> for Tick {
    type Error = CoreError;

    fn try_from(t: i64) -> CoreResult<Tick> {
        u64::try_from(t).map(Tick).map_err(|_| CoreError::NegativeTime(t))
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TimeWindow ───────────────────────────────────────────────────────────────

/// A closed interval `[begin, end]` of ticks.
///
/// `begin <= end` always holds; deserialization goes through
/// [`TimeWindow::new`] as well.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeWindow"))]
pub struct TimeWindow {
    begin: Tick,
    end:   Tick,
}

impl TimeWindow {
    /// The window that contains every tick.
    pub const ALWAYS: TimeWindow = TimeWindow { begin: Tick::ZERO, end: Tick::MAX };

    /// Create a window; fails if `begin > end`.
    pub fn new(begin: Tick, end: Tick) -> CoreResult<Self> {
        if begin > end {
            return Err(CoreError::InvertedTimeWindow { begin: begin.0, end: end.0 });
        }
        Ok(Self { begin, end })
    }

    #[inline]
    pub fn begin(self) -> Tick {
        self.begin
    }

    #[inline]
    pub fn end(self) -> Tick {
        self.end
    }

    /// `true` if `t` lies within `[begin, end]`.
    #[inline]
    pub fn is_in(self, t: Tick) -> bool {
        self.is_after_start(t) && self.is_before_end(t)
    }

    #[inline]
    pub fn is_after_start(self, t: Tick) -> bool {
        t >= self.begin
    }

    #[inline]
    pub fn is_before_end(self, t: Tick) -> bool {
        t <= self.end
    }

    /// `true` if `t` is strictly past the end of the window.
    #[inline]
    pub fn is_after_end(self, t: Tick) -> bool {
        t > self.end
    }

    /// Number of ticks spanned by the window.
    #[inline]
    pub fn length(self) -> u64 {
        self.end.since(self.begin)
    }
}

/// Unchecked wire shape of a [`TimeWindow`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeWindow {
    begin: Tick,
    end:   Tick,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeWindow> for TimeWindow {
    type Error = CoreError;

    fn try_from(raw: RawTimeWindow) -> CoreResult<TimeWindow> {
        TimeWindow::new(raw.begin, raw.end)
    }
}

impl Default for TimeWindow {
    fn default() -> Self {
        Self::ALWAYS
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.begin, self.end)
    }
}
