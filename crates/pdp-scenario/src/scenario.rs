//! The immutable `Scenario` value and its validating builder.

use pdp_core::{CoreError, Point, TimeWindow, VehicleDto};
use tracing::debug;

use crate::{
    Axis, EnvironmentDescriptor, EnvironmentDescriptors, EventQueue, ProblemClass, ScenarioError,
    ScenarioResult, StopCondition, TimedEvent,
};

/// Instance id used when the caller does not supply one.
pub const DEFAULT_INSTANCE_ID: &str = "1";

// ── Scenario ──────────────────────────────────────────────────────────────────

/// One replayable PDPTW problem instance.
///
/// # Invariants
///
/// Upheld by [`ScenarioBuilder::build`] for the lifetime of the value:
///
/// - `spatial_min` ≤ `spatial_max` on both axes, all coordinates finite.
/// - The default vehicle's speed is finite and > 0.
/// - At most one environment descriptor per facet; a road descriptor, if
///   present, spans exactly the scenario bounds.
/// - `events` is ordered by non-decreasing time, ties in insertion order.
///
/// There are no mutators.  Equality and hashing are structural, so two
/// scenarios built from equal inputs are interchangeable.  A `Scenario` is
/// `Send + Sync` and is meant to be shared (e.g. in an `Arc`) by every run
/// that replays it; each run takes its own queue via [`Scenario::as_queue`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Scenario {
    events:          Vec<TimedEvent>,
    spatial_min:     Point,
    spatial_max:     Point,
    time_window:     TimeWindow,
    default_vehicle: VehicleDto,
    environment:     EnvironmentDescriptors,
    stop_condition:  StopCondition,
    problem_class:   ProblemClass,
    instance_id:     String,
}

impl Scenario {
    /// Start building a scenario of family `problem_class`.
    pub fn builder(
        problem_class:   ProblemClass,
        spatial_min:     Point,
        spatial_max:     Point,
        default_vehicle: VehicleDto,
    ) -> ScenarioBuilder {
        ScenarioBuilder::new(problem_class, spatial_min, spatial_max, default_vehicle)
    }

    /// A fresh queue over this scenario's events.
    ///
    /// Every call returns an independent queue; consuming it leaves the
    /// scenario and all other queues untouched.
    pub fn as_queue(&self) -> EventQueue {
        EventQueue::from_sorted(&self.events)
    }

    /// Events in dispatch order.
    pub fn events(&self) -> &[TimedEvent] {
        &self.events
    }

    pub fn spatial_min(&self) -> Point {
        self.spatial_min
    }

    pub fn spatial_max(&self) -> Point {
        self.spatial_max
    }

    pub fn time_window(&self) -> TimeWindow {
        self.time_window
    }

    pub fn default_vehicle(&self) -> &VehicleDto {
        &self.default_vehicle
    }

    pub fn environment_descriptors(&self) -> &EnvironmentDescriptors {
        &self.environment
    }

    pub fn stop_condition(&self) -> &StopCondition {
        &self.stop_condition
    }

    pub fn problem_class(&self) -> ProblemClass {
        self.problem_class
    }

    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }
}

// ── ScenarioBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Scenario`].
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                    |
/// |-----------------------|----------------------------|
/// | `.events(v)`          | no events                  |
/// | `.time_window(tw)`    | `TimeWindow::ALWAYS`       |
/// | `.descriptor(d)`      | no descriptors             |
/// | `.stop_condition(c)`  | `StopCondition::TimeOutEvent` |
/// | `.instance_id(s)`     | `"1"`                      |
///
/// Nothing is checked until [`build`][Self::build]; a failed build never
/// yields a partial scenario.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder {
    problem_class:   ProblemClass,
    spatial_min:     Point,
    spatial_max:     Point,
    default_vehicle: VehicleDto,
    events:          Vec<TimedEvent>,
    time_window:     TimeWindow,
    descriptors:     Vec<EnvironmentDescriptor>,
    stop_condition:  StopCondition,
    instance_id:     String,
}

impl ScenarioBuilder {
    pub fn new(
        problem_class:   ProblemClass,
        spatial_min:     Point,
        spatial_max:     Point,
        default_vehicle: VehicleDto,
    ) -> Self {
        Self {
            problem_class,
            spatial_min,
            spatial_max,
            default_vehicle,
            events:         Vec::new(),
            time_window:    TimeWindow::ALWAYS,
            descriptors:    Vec::new(),
            stop_condition: StopCondition::TimeOutEvent,
            instance_id:    DEFAULT_INSTANCE_ID.to_owned(),
        }
    }

    /// Append events.  Order among equal times is preserved.
    pub fn events<I: IntoIterator<Item = TimedEvent>>(mut self, events: I) -> Self {
        self.events.extend(events);
        self
    }

    pub fn event(mut self, event: TimedEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn time_window(mut self, time_window: TimeWindow) -> Self {
        self.time_window = time_window;
        self
    }

    /// Add one environment descriptor.  Supplying two for the same facet
    /// makes `build` fail.
    pub fn descriptor(mut self, descriptor: impl Into<EnvironmentDescriptor>) -> Self {
        self.descriptors.push(descriptor.into());
        self
    }

    pub fn stop_condition(mut self, stop_condition: StopCondition) -> Self {
        self.stop_condition = stop_condition;
        self
    }

    pub fn instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = instance_id.into();
        self
    }

    /// Validate every invariant and return the scenario.
    pub fn build(self) -> ScenarioResult<Scenario> {
        let (min, max) = (self.spatial_min, self.spatial_max);

        // ── Spatial bounds ────────────────────────────────────────────────
        for (what, p) in [("spatial_min", min), ("spatial_max", max)] {
            for v in [p.x, p.y] {
                if !v.is_finite() {
                    return Err(CoreError::NonFinite { what, value: v }.into());
                }
            }
        }
        if min.x > max.x {
            return Err(ScenarioError::InvertedBounds { axis: Axis::X, min: min.x, max: max.x });
        }
        if min.y > max.y {
            return Err(ScenarioError::InvertedBounds { axis: Axis::Y, min: min.y, max: max.y });
        }

        // ── Default vehicle ───────────────────────────────────────────────
        let speed = self.default_vehicle.speed;
        if !(speed.is_finite() && speed > 0.0) {
            return Err(ScenarioError::NonPositiveSpeed(speed));
        }

        // ── Environment descriptors ───────────────────────────────────────
        let environment = EnvironmentDescriptors::new(self.descriptors)?;
        if let Some(road) = environment.road() {
            if road.min() != min || road.max() != max {
                return Err(ScenarioError::RoadBoundsMismatch {
                    min,
                    max,
                    road_min: road.min(),
                    road_max: road.max(),
                });
            }
        }

        // ── Events (stable: ties keep insertion order) ────────────────────
        let mut events = self.events;
        events.sort_by_key(|e| e.time);

        debug!(
            problem_class = %self.problem_class,
            instance_id = %self.instance_id,
            events = events.len(),
            missing_facets = ?environment.missing_facets(),
            "scenario built"
        );

        Ok(Scenario {
            events,
            spatial_min: min,
            spatial_max: max,
            time_window: self.time_window,
            default_vehicle: self.default_vehicle,
            environment,
            stop_condition: self.stop_condition,
            problem_class: self.problem_class,
            instance_id: self.instance_id,
        })
    }
}
