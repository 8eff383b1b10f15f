//! `StopCondition` — decides when the engine ends a run.
//!
//! The engine evaluates the scenario's stop condition once per tick against
//! a read-only [`RunView`] of its live state.  Conditions hold no state of
//! their own, so the verdict depends only on the view: replaying a run, or
//! testing against a synthetic [`RunSnapshot`], gives the same answers.
//!
//! Conditions compose like boolean expressions:
//!
//! ```rust,ignore
//! let stop = StopCondition::TimeOutEvent
//!     .or(StopCondition::TasksServedAndIdle)
//!     .and(!StopCondition::AnyTardiness);
//! ```

use std::fmt;

use pdp_core::Tick;

// ── RunView ───────────────────────────────────────────────────────────────────

/// Read-only view of a running simulation, provided by the engine.
pub trait RunView {
    /// The current tick.
    fn now(&self) -> Tick;

    /// `true` once the scenario's time-out event has been dispatched.
    fn time_out_seen(&self) -> bool;

    /// `true` if every announced parcel has been delivered.
    fn all_parcels_delivered(&self) -> bool;

    /// `true` if no vehicle is moving or servicing.
    fn vehicles_idle(&self) -> bool;

    /// `true` if every vehicle is back at the depot.
    fn vehicles_at_depot(&self) -> bool;

    /// `true` if any pickup or delivery has been late so far.
    fn any_tardiness(&self) -> bool;
}

/// A plain-data [`RunView`] — what an engine snapshot looks like, and what
/// tests construct directly.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunSnapshot {
    pub now:               Tick,
    pub time_out_seen:     bool,
    pub total_parcels:     u32,
    pub delivered_parcels: u32,
    pub total_vehicles:    u32,
    pub idle_vehicles:     u32,
    pub vehicles_at_depot: u32,
    /// Accumulated pickup + delivery tardiness, in ticks.
    pub tardiness:         u64,
}

impl RunView for RunSnapshot {
    fn now(&self) -> Tick {
        self.now
    }

    fn time_out_seen(&self) -> bool {
        self.time_out_seen
    }

    fn all_parcels_delivered(&self) -> bool {
        self.delivered_parcels >= self.total_parcels
    }

    fn vehicles_idle(&self) -> bool {
        self.idle_vehicles >= self.total_vehicles
    }

    fn vehicles_at_depot(&self) -> bool {
        self.vehicles_at_depot >= self.total_vehicles
    }

    fn any_tardiness(&self) -> bool {
        self.tardiness > 0
    }
}

// ── StopCondition ─────────────────────────────────────────────────────────────

/// A referentially transparent termination predicate.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCondition {
    /// Stop once the time-out event has been dispatched.
    TimeOutEvent,
    /// Stop at or after the given tick.
    AtTick(Tick),
    /// Stop when every parcel is delivered and every vehicle is idle.
    TasksServedAndIdle,
    /// Stop when every parcel is delivered and every vehicle is at the depot.
    VehiclesDoneAndBackAtDepot,
    /// Stop as soon as any task is late.
    AnyTardiness,
    /// Stop if any member says stop.  `Any(vec![])` never stops.
    Any(Vec<StopCondition>),
    /// Stop if every member says stop.  `All(vec![])` always stops.
    All(Vec<StopCondition>),
    /// Stop if the inner condition says continue.
    Not(Box<StopCondition>),
}

impl StopCondition {
    /// A condition that never fires.
    pub fn never() -> Self {
        StopCondition::Any(Vec::new())
    }

    /// Evaluate against the engine's current state.
    pub fn should_stop<V: RunView + ?Sized>(&self, run: &V) -> bool {
        match self {
            StopCondition::TimeOutEvent               => run.time_out_seen(),
            StopCondition::AtTick(t)                  => run.now() >= *t,
            StopCondition::TasksServedAndIdle         => run.all_parcels_delivered() && run.vehicles_idle(),
            StopCondition::VehiclesDoneAndBackAtDepot => run.all_parcels_delivered() && run.vehicles_at_depot(),
            StopCondition::AnyTardiness               => run.any_tardiness(),
            StopCondition::Any(cs)                    => cs.iter().any(|c| c.should_stop(run)),
            StopCondition::All(cs)                    => cs.iter().all(|c| c.should_stop(run)),
            StopCondition::Not(c)                     => !c.should_stop(run),
        }
    }

    /// Disjunction.  Nested `Any`s are flattened.
    pub fn or(self, other: StopCondition) -> StopCondition {
        match (self, other) {
            (StopCondition::Any(mut a), StopCondition::Any(b)) => {
                a.extend(b);
                StopCondition::Any(a)
            }
            (StopCondition::Any(mut a), c) => {
                a.push(c);
                StopCondition::Any(a)
            }
            (c, StopCondition::Any(mut b)) => {
                b.insert(0, c);
                StopCondition::Any(b)
            }
            (a, b) => StopCondition::Any(vec![a, b]),
        }
    }

    /// Conjunction.  Nested `All`s are flattened.
    pub fn and(self, other: StopCondition) -> StopCondition {
        match (self, other) {
            (StopCondition::All(mut a), StopCondition::All(b)) => {
                a.extend(b);
                StopCondition::All(a)
            }
            (StopCondition::All(mut a), c) => {
                a.push(c);
                StopCondition::All(a)
            }
            (c, StopCondition::All(mut b)) => {
                b.insert(0, c);
                StopCondition::All(b)
            }
            (a, b) => StopCondition::All(vec![a, b]),
        }
    }
}

impl std::ops::Not for StopCondition {
    type Output = StopCondition;

    fn not(self) -> StopCondition {
        match self {
            StopCondition::Not(inner) => *inner,
            c => StopCondition::Not(Box::new(c)),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, cs: &[StopCondition], op: &str) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in cs.iter().enumerate() {
        if i > 0 {
            write!(f, " {op} ")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str(")")
}

impl fmt::Display for StopCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopCondition::TimeOutEvent               => f.write_str("time_out_event"),
            StopCondition::AtTick(t)                  => write!(f, "at_tick({})", t.0),
            StopCondition::TasksServedAndIdle         => f.write_str("tasks_served_and_idle"),
            StopCondition::VehiclesDoneAndBackAtDepot => f.write_str("vehicles_done_and_back_at_depot"),
            StopCondition::AnyTardiness               => f.write_str("any_tardiness"),
            StopCondition::Any(cs)                    => write_joined(f, cs, "or"),
            StopCondition::All(cs)                    => write_joined(f, cs, "and"),
            StopCondition::Not(c)                     => write!(f, "not {c}"),
        }
    }
}
