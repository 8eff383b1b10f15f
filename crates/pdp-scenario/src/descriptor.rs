//! Environment descriptors — the bridge between a scenario and the engine.
//!
//! A scenario does not build or run any engine model.  It carries one
//! descriptor per environment [`Facet`]; the engine reads them and wires its
//! own time, road, task-handling, and statistics models accordingly.
//!
//! All unit conversions happen in the descriptor constructors.  After that
//! the descriptors hold canonical values only (see `pdp_core::units`).

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use pdp_core::geo::canonical_bits;
use pdp_core::{DistanceUnit, Point, SpeedUnit, Tick, TimeUnit};

use crate::{ScenarioError, ScenarioResult, TimeWindowPolicy};

// ── Facet ─────────────────────────────────────────────────────────────────────

/// One independently configurable aspect of the simulated environment.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Facet {
    Time,
    Road,
    TaskHandling,
    Statistics,
}

impl Facet {
    pub const ALL: [Facet; 4] = [Facet::Time, Facet::Road, Facet::TaskHandling, Facet::Statistics];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Time         => "time",
            Facet::Road         => "road",
            Facet::TaskHandling => "task_handling",
            Facet::Statistics   => "statistics",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TimeDescriptor ────────────────────────────────────────────────────────────

/// Time-advance granularity: how long one tick lasts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTimeDescriptor"))]
pub struct TimeDescriptor {
    tick_length_ms: u64,
}

impl TimeDescriptor {
    /// One tick lasts `tick_length` of `unit`.
    pub fn new(tick_length: u64, unit: TimeUnit) -> ScenarioResult<Self> {
        if tick_length == 0 {
            return Err(ScenarioError::ZeroTickLength);
        }
        Ok(Self { tick_length_ms: tick_length.saturating_mul(unit.millis()) })
    }

    #[inline]
    pub fn tick_length_ms(self) -> u64 {
        self.tick_length_ms
    }

    /// Elapsed milliseconds at `tick`.
    #[inline]
    pub fn elapsed_ms(self, tick: Tick) -> u64 {
        tick.0.saturating_mul(self.tick_length_ms)
    }
}

/// Unchecked wire shape of a [`TimeDescriptor`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTimeDescriptor {
    tick_length_ms: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTimeDescriptor> for TimeDescriptor {
    type Error = ScenarioError;

    fn try_from(raw: RawTimeDescriptor) -> ScenarioResult<TimeDescriptor> {
        TimeDescriptor::new(raw.tick_length_ms, TimeUnit::Millisecond)
    }
}

// ── RoadDescriptor ────────────────────────────────────────────────────────────

/// Spatial movement model: an unobstructed plane with a speed limit.
///
/// Coordinates stay in `distance_unit` (the unit the scenario's points are
/// written in); the speed limit is stored in metres per second.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRoadDescriptor"))]
pub struct RoadDescriptor {
    min:           Point,
    max:           Point,
    distance_unit: DistanceUnit,
    max_speed_mps: f64,
}

impl RoadDescriptor {
    /// A plane spanning `min..max`, with `max_speed` given in `speed_unit`.
    pub fn plane(
        min:           Point,
        max:           Point,
        distance_unit: DistanceUnit,
        max_speed:     f64,
        speed_unit:    SpeedUnit,
    ) -> ScenarioResult<Self> {
        if !(max_speed.is_finite() && max_speed > 0.0) {
            return Err(ScenarioError::NonPositiveMaxSpeed(max_speed));
        }
        Ok(Self {
            min,
            max,
            distance_unit,
            max_speed_mps: speed_unit.to_metres_per_second(max_speed),
        })
    }

    #[inline]
    pub fn min(&self) -> Point {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Point {
        self.max
    }

    #[inline]
    pub fn distance_unit(&self) -> DistanceUnit {
        self.distance_unit
    }

    #[inline]
    pub fn max_speed_mps(&self) -> f64 {
        self.max_speed_mps
    }
}

/// Unchecked wire shape of a [`RoadDescriptor`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRoadDescriptor {
    min:           Point,
    max:           Point,
    distance_unit: DistanceUnit,
    max_speed_mps: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawRoadDescriptor> for RoadDescriptor {
    type Error = ScenarioError;

    fn try_from(raw: RawRoadDescriptor) -> ScenarioResult<RoadDescriptor> {
        RoadDescriptor::plane(
            raw.min,
            raw.max,
            raw.distance_unit,
            raw.max_speed_mps,
            SpeedUnit::METRES_PER_SECOND,
        )
    }
}

impl PartialEq for RoadDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min
            && self.max == other.max
            && self.distance_unit == other.distance_unit
            && canonical_bits(self.max_speed_mps) == canonical_bits(other.max_speed_mps)
    }
}

impl Eq for RoadDescriptor {}

impl Hash for RoadDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.hash(state);
        self.max.hash(state);
        self.distance_unit.hash(state);
        canonical_bits(self.max_speed_mps).hash(state);
    }
}

// ── TaskDescriptor / StatsDescriptor ──────────────────────────────────────────

/// Task-handling (load/unload) policy.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TaskDescriptor {
    pub time_window_policy: TimeWindowPolicy,
}

/// Statistics collection: the engine must track the fields of a
/// `StatisticsDto` and emit one when the run halts.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsDescriptor;

// ── EnvironmentDescriptor ─────────────────────────────────────────────────────

/// Configuration for exactly one [`Facet`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnvironmentDescriptor {
    Time(TimeDescriptor),
    Road(RoadDescriptor),
    TaskHandling(TaskDescriptor),
    Statistics(StatsDescriptor),
}

impl EnvironmentDescriptor {
    pub fn facet(&self) -> Facet {
        match self {
            EnvironmentDescriptor::Time(_)         => Facet::Time,
            EnvironmentDescriptor::Road(_)         => Facet::Road,
            EnvironmentDescriptor::TaskHandling(_) => Facet::TaskHandling,
            EnvironmentDescriptor::Statistics(_)   => Facet::Statistics,
        }
    }
}

impl From<TimeDescriptor> for EnvironmentDescriptor {
    fn from(d: TimeDescriptor) -> Self {
        EnvironmentDescriptor::Time(d)
    }
}

impl From<RoadDescriptor> for EnvironmentDescriptor {
    fn from(d: RoadDescriptor) -> Self {
        EnvironmentDescriptor::Road(d)
    }
}

impl From<TaskDescriptor> for EnvironmentDescriptor {
    fn from(d: TaskDescriptor) -> Self {
        EnvironmentDescriptor::TaskHandling(d)
    }
}

impl From<StatsDescriptor> for EnvironmentDescriptor {
    fn from(d: StatsDescriptor) -> Self {
        EnvironmentDescriptor::Statistics(d)
    }
}

// ── EnvironmentDescriptors ────────────────────────────────────────────────────

/// A set of descriptors holding at most one entry per facet.
///
/// Keyed by `Facet` in a `BTreeMap`, so iteration order (and therefore
/// equality and hashing) does not depend on insertion order.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct EnvironmentDescriptors {
    by_facet: BTreeMap<Facet, EnvironmentDescriptor>,
}

impl EnvironmentDescriptors {
    /// Collect `descriptors`; fails on the first facet configured twice.
    pub fn new<I>(descriptors: I) -> ScenarioResult<Self>
    where
        I: IntoIterator<Item = EnvironmentDescriptor>,
    {
        let mut by_facet = BTreeMap::new();
        for d in descriptors {
            let facet = d.facet();
            if by_facet.insert(facet, d).is_some() {
                return Err(ScenarioError::DuplicateFacet(facet));
            }
        }
        Ok(Self { by_facet })
    }

    pub fn get(&self, facet: Facet) -> Option<&EnvironmentDescriptor> {
        self.by_facet.get(&facet)
    }

    pub fn time(&self) -> Option<TimeDescriptor> {
        match self.get(Facet::Time)? {
            EnvironmentDescriptor::Time(d) => Some(*d),
            _ => None,
        }
    }

    pub fn road(&self) -> Option<RoadDescriptor> {
        match self.get(Facet::Road)? {
            EnvironmentDescriptor::Road(d) => Some(*d),
            _ => None,
        }
    }

    pub fn task_handling(&self) -> Option<TaskDescriptor> {
        match self.get(Facet::TaskHandling)? {
            EnvironmentDescriptor::TaskHandling(d) => Some(*d),
            _ => None,
        }
    }

    pub fn statistics(&self) -> Option<StatsDescriptor> {
        match self.get(Facet::Statistics)? {
            EnvironmentDescriptor::Statistics(d) => Some(*d),
            _ => None,
        }
    }

    /// Descriptors in facet order.
    pub fn iter(&self) -> impl Iterator<Item = &EnvironmentDescriptor> {
        self.by_facet.values()
    }

    /// Facets with no descriptor.  The engine falls back to its own defaults
    /// for these.
    pub fn missing_facets(&self) -> Vec<Facet> {
        Facet::ALL
            .into_iter()
            .filter(|f| !self.by_facet.contains_key(f))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.by_facet.len() == Facet::ALL.len()
    }

    pub fn len(&self) -> usize {
        self.by_facet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_facet.is_empty()
    }
}
