//! Lateness policies for the task-handling facet.

use std::fmt;

use pdp_core::{Tick, TimeWindow};

/// Decides whether a pickup or delivery may start at a given tick.
///
/// The engine's pickup-and-delivery model consults the policy carried by the
/// scenario's [`TaskDescriptor`][crate::TaskDescriptor]; the policy itself is
/// a pure function of its arguments.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeWindowPolicy {
    /// Service is allowed at any time, regardless of the window.
    Liberal,
    /// Service must start and finish inside the window.
    Strict,
    /// Service may not start early but may finish late.
    #[default]
    TardyAllowed,
}

impl TimeWindowPolicy {
    /// May a pickup with service time `duration` start at `time`?
    pub fn can_pickup(self, window: TimeWindow, time: Tick, duration: u64) -> bool {
        self.allows(window, time, duration)
    }

    /// May a delivery with service time `duration` start at `time`?
    pub fn can_deliver(self, window: TimeWindow, time: Tick, duration: u64) -> bool {
        self.allows(window, time, duration)
    }

    fn allows(self, window: TimeWindow, time: Tick, duration: u64) -> bool {
        match self {
            TimeWindowPolicy::Liberal      => true,
            TimeWindowPolicy::Strict       => window.is_in(time) && window.is_in(time.offset(duration)),
            TimeWindowPolicy::TardyAllowed => window.is_after_start(time),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindowPolicy::Liberal      => "liberal",
            TimeWindowPolicy::Strict       => "strict",
            TimeWindowPolicy::TardyAllowed => "tardy_allowed",
        }
    }
}

impl fmt::Display for TimeWindowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
