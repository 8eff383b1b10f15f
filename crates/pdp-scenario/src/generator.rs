//! Seeded random scenario generation.
//!
//! `generate(config, seed)` is a pure function of its arguments: the same
//! config and seed always give an equal `Scenario`.  Batch experiments call
//! it once per replication with `pdp_core::replication_seed(master, i)`.
//!
//! # Layout of a generated instance
//!
//! ```text
//! T0                depot at the centre of the bounds
//! T0                `vehicles` copies of the default vehicle, at the depot
//! [T0, horizon/2]   `parcels` announcements, uniform in time and space
//! horizon           time-out
//! ```
//!
//! Each parcel's pickup window opens at its announcement and stays open for
//! `window_length` ticks; its delivery window opens when the pickup window
//! closes and lasts as long.

use pdp_core::{DistanceUnit, ParcelDto, Point, SimRng, SpeedUnit, Tick, TimeUnit, TimeWindow, VehicleDto};
use tracing::debug;

use crate::{
    ProblemClass, RoadDescriptor, Scenario, ScenarioResult, StatsDescriptor, StopCondition,
    TaskDescriptor, TimeDescriptor, TimeWindowPolicy, TimedEvent,
};

/// Parameters for [`generate`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    pub min: Point,
    pub max: Point,
    /// Distance unit of `min`/`max` and of the generated locations.
    pub distance_unit: DistanceUnit,
    /// Length of one tick.
    pub tick_unit: TimeUnit,
    /// Tick at which the time-out event fires.
    pub horizon: Tick,
    pub parcels: usize,
    pub vehicles: usize,
    /// Vehicle speed, in `speed_unit`.
    pub vehicle_speed: f64,
    pub speed_unit: SpeedUnit,
    pub vehicle_capacity: u32,
    /// Length in ticks of each pickup and each delivery window.
    pub window_length: u64,
    /// Service time in ticks at both pickup and delivery.
    pub service_duration: u64,
    pub time_window_policy: TimeWindowPolicy,
}

impl Default for GeneratorConfig {
    /// A 10 km × 10 km plane, one-second ticks, an eight-hour horizon.
    fn default() -> Self {
        Self {
            min:                Point::new(0.0, 0.0),
            max:                Point::new(10.0, 10.0),
            distance_unit:      DistanceUnit::Kilometre,
            tick_unit:          TimeUnit::Second,
            horizon:            Tick(8 * 3_600),
            parcels:            20,
            vehicles:           4,
            vehicle_speed:      30.0,
            speed_unit:         SpeedUnit::KILOMETRES_PER_HOUR,
            vehicle_capacity:   4,
            window_length:      3_600,
            service_duration:   300,
            time_window_policy: TimeWindowPolicy::TardyAllowed,
        }
    }
}

/// Generate one scenario of the [`ProblemClass::GENERATED`] family.
pub fn generate(config: &GeneratorConfig, seed: u64) -> ScenarioResult<Scenario> {
    let mut rng = SimRng::new(seed);
    let (min, max) = (config.min, config.max);
    let depot = Point::new((min.x + max.x) * 0.5, (min.y + max.y) * 0.5);
    let time_window = TimeWindow::new(Tick::ZERO, config.horizon)?;

    let default_vehicle = VehicleDto::new(
        depot,
        config.vehicle_speed,
        config.vehicle_capacity,
        time_window,
    );

    let mut events = Vec::with_capacity(config.parcels + config.vehicles + 2);
    events.push(TimedEvent::depot(Tick::ZERO, depot));
    events.extend((0..config.vehicles).map(|_| TimedEvent::vehicle(Tick::ZERO, default_vehicle)));

    let last_announce = config.horizon.0 / 2;
    for _ in 0..config.parcels {
        let pickup = random_point(&mut rng, min, max);
        let delivery = random_point(&mut rng, min, max);
        let announce = Tick(rng.gen_range(0..=last_announce));
        let pickup_end = announce.offset(config.window_length);
        let pickup_window = TimeWindow::new(announce, pickup_end)?;
        let delivery_window = TimeWindow::new(pickup_end, pickup_end.offset(config.window_length))?;

        let parcel = ParcelDto::new(pickup, delivery)
            .with_windows(pickup_window, delivery_window)
            .with_announce_time(announce)
            .with_durations(config.service_duration, config.service_duration);
        events.push(TimedEvent::parcel(parcel));
    }
    events.push(TimedEvent::time_out(config.horizon));

    debug!(seed, parcels = config.parcels, vehicles = config.vehicles, "generated scenario events");

    Scenario::builder(ProblemClass::GENERATED, min, max, default_vehicle)
        .events(events)
        .time_window(time_window)
        .descriptor(TimeDescriptor::new(1, config.tick_unit)?)
        .descriptor(RoadDescriptor::plane(
            min,
            max,
            config.distance_unit,
            config.vehicle_speed,
            config.speed_unit,
        )?)
        .descriptor(TaskDescriptor { time_window_policy: config.time_window_policy })
        .descriptor(StatsDescriptor)
        .stop_condition(StopCondition::TimeOutEvent)
        .instance_id(format!("seed-{seed}"))
        .build()
}

/// Uniform point in `min..=max`.  Malformed bounds are reported later by
/// `build`; here they collapse to `min`.
fn random_point(rng: &mut SimRng, min: Point, max: Point) -> Point {
    let axis = |rng: &mut SimRng, lo: f64, hi: f64| {
        if lo < hi && (hi - lo).is_finite() { rng.gen_range(lo..=hi) } else { lo }
    };
    let x = axis(rng, min.x, max.x);
    let y = axis(rng, min.y, max.y);
    Point::new(x, y)
}
