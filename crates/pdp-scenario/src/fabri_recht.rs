//! Fabri & Recht problem family.
//!
//! Every instance of this family shares one environment: one-minute ticks,
//! an open plane measured in kilometres with a 100 km/min speed limit, late
//! service allowed, statistics tracked, and the run stopping on the time-out
//! event.  Only the events, bounds, horizon, and default vehicle vary.

use pdp_core::{DistanceUnit, Point, SpeedUnit, TimeUnit, TimeWindow, VehicleDto};

use crate::{
    ProblemClass, RoadDescriptor, Scenario, ScenarioResult, StatsDescriptor, StopCondition,
    TaskDescriptor, TimeDescriptor, TimeWindowPolicy, TimedEvent,
};

/// Road speed limit, in km/min.
pub const MAX_SPEED: f64 = 100.0;

/// Build a Fabri & Recht scenario.
pub fn fabri_recht<I>(
    events:          I,
    min:             Point,
    max:             Point,
    time_window:     TimeWindow,
    default_vehicle: VehicleDto,
) -> ScenarioResult<Scenario>
where
    I: IntoIterator<Item = TimedEvent>,
{
    let road = RoadDescriptor::plane(
        min,
        max,
        DistanceUnit::Kilometre,
        MAX_SPEED,
        SpeedUnit::KILOMETRES_PER_MINUTE,
    )?;

    Scenario::builder(ProblemClass::FABRI_RECHT, min, max, default_vehicle)
        .events(events)
        .time_window(time_window)
        .descriptor(TimeDescriptor::new(1, TimeUnit::Minute)?)
        .descriptor(road)
        .descriptor(TaskDescriptor { time_window_policy: TimeWindowPolicy::TardyAllowed })
        .descriptor(StatsDescriptor)
        .stop_condition(StopCondition::TimeOutEvent)
        .build()
}
