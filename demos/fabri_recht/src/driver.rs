//! A toy dispatcher that plays a scenario's event queue tick by tick.
//!
//! Each announced parcel goes to the vehicle that frees up first; the vehicle
//! drives straight to the pickup, then to the delivery, then home to the
//! depot once it has nothing left to do.  Good enough to produce realistic
//! `StatisticsDto`s for the objective functions, nothing more.

use std::time::Instant;

use anyhow::{Result, bail};
use tracing::debug;

use pdp_core::{ParcelDto, Point, Tick, TimeUnit, VehicleDto};
use pdp_objective::StatisticsDto;
use pdp_scenario::{EventKind, RoadDescriptor, RunSnapshot, Scenario, TimeDescriptor, TimeWindowPolicy};

// ── Motion ────────────────────────────────────────────────────────────────────

/// Converts straight-line distances into whole ticks of travel.
struct Motion {
    metres_per_unit: f64,
    speed_mps:       f64,
    tick_ms:         u64,
}

impl Motion {
    fn new(time: TimeDescriptor, road: RoadDescriptor) -> Self {
        Self {
            metres_per_unit: road.distance_unit().metres(),
            speed_mps:       road.max_speed_mps(),
            tick_ms:         time.tick_length_ms(),
        }
    }

    fn ticks(&self, distance: f64) -> u64 {
        let ms = distance * self.metres_per_unit / self.speed_mps * 1_000.0;
        (ms / self.tick_ms as f64).ceil() as u64
    }
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

// ── Vehicle state ─────────────────────────────────────────────────────────────

struct Vehicle {
    dto:        VehicleDto,
    position:   Point,
    busy_until: Tick,
    moved:      bool,
}

// ── Driver ────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    parcels:            u32,
    accepted:           u32,
    /// Completion tick of every planned pickup and delivery.
    pickups:            Vec<Tick>,
    deliveries:         Vec<Tick>,
    /// In ticks.
    pickup_tardiness:   u64,
    delivery_tardiness: u64,
    distance:           f64,
}

/// Play `scenario` to completion and summarise the run.
pub fn run(scenario: &Scenario) -> Result<StatisticsDto> {
    let started = Instant::now();
    let env = scenario.environment_descriptors();
    let (Some(time), Some(road)) = (env.time(), env.road()) else {
        bail!("scenario lacks facets {:?}", env.missing_facets());
    };
    let policy = env.task_handling().map(|t| t.time_window_policy).unwrap_or_default();
    let motion = Motion::new(time, road);

    let mut queue = scenario.as_queue();
    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut depot = scenario.default_vehicle().start_position;
    let mut tally = Tally::default();
    let mut time_out_seen = false;

    let horizon = scenario.time_window();
    let mut now = horizon.begin();
    let finished = loop {
        for event in queue.pop_due(now) {
            match event.kind {
                EventKind::AddDepot(p) => depot = p,
                EventKind::AddVehicle(v) => vehicles.push(Vehicle {
                    dto:        v,
                    position:   v.start_position,
                    busy_until: now,
                    moved:      false,
                }),
                EventKind::AddParcel(p) => {
                    tally.parcels += 1;
                    assign(&p, now, policy, &motion, &mut vehicles, &mut tally);
                }
                EventKind::TimeOut => time_out_seen = true,
            }
        }

        for v in vehicles.iter_mut().filter(|v| v.busy_until <= now && v.position != depot) {
            let d = distance(v.position, depot);
            tally.distance += d;
            v.busy_until = now.offset(motion.ticks(d));
            v.position = depot;
        }

        let snapshot = RunSnapshot {
            now,
            time_out_seen,
            total_parcels:     tally.parcels,
            delivered_parcels: tally.deliveries.iter().filter(|t| **t <= now).count() as u32,
            total_vehicles:    vehicles.len() as u32,
            idle_vehicles:     vehicles.iter().filter(|v| v.busy_until <= now).count() as u32,
            vehicles_at_depot: vehicles
                .iter()
                .filter(|v| v.busy_until <= now && v.position == depot)
                .count() as u32,
            tardiness:         tally.pickup_tardiness + tally.delivery_tardiness,
        };
        if scenario.stop_condition().should_stop(&snapshot) {
            break true;
        }
        if now >= horizon.end() {
            break false;
        }
        now = now.offset(1);
    };

    debug!(%now, finished, parcels = tally.parcels, "run halted");

    let tick_ms = motion.tick_ms;
    let over_time = vehicles
        .iter()
        .map(|v| v.busy_until.since(v.dto.availability.end()))
        .sum::<u64>();

    Ok(StatisticsDto {
        total_distance:      tally.distance,
        total_pickups:       tally.pickups.iter().filter(|t| **t <= now).count() as u32,
        total_deliveries:    tally.deliveries.iter().filter(|t| **t <= now).count() as u32,
        total_parcels:       tally.parcels,
        accepted_parcels:    tally.accepted,
        pickup_tardiness:    tally.pickup_tardiness.saturating_mul(tick_ms),
        delivery_tardiness:  tally.delivery_tardiness.saturating_mul(tick_ms),
        computation_time_ms: started.elapsed().as_millis() as u64,
        simulation_time:     time.elapsed_ms(now),
        sim_finished:        finished,
        total_vehicles:      vehicles.len() as u32,
        moved_vehicles:      vehicles.iter().filter(|v| v.moved).count() as u32,
        vehicles_at_depot:   vehicles
            .iter()
            .filter(|v| v.busy_until <= now && v.position == depot)
            .count() as u32,
        over_time:           over_time.saturating_mul(tick_ms),
        distance_unit:       road.distance_unit(),
        time_unit:           TimeUnit::Millisecond,
    })
}

/// Give `parcel` to the vehicle that frees up first, if the time window
/// policy lets that vehicle serve it.
fn assign(
    parcel:   &ParcelDto,
    now:      Tick,
    policy:   TimeWindowPolicy,
    motion:   &Motion,
    vehicles: &mut [Vehicle],
    tally:    &mut Tally,
) {
    let Some(v) = vehicles.iter_mut().min_by_key(|v| v.busy_until) else {
        return;
    };

    let start = v.busy_until.max(now);
    let to_pickup = distance(v.position, parcel.pickup_location);
    let arrive = start.offset(motion.ticks(to_pickup));
    let pickup_at = arrive.max(parcel.pickup_window.begin());
    if !policy.can_pickup(parcel.pickup_window, pickup_at, parcel.pickup_duration) {
        return;
    }
    let picked = pickup_at.offset(parcel.pickup_duration);

    let to_delivery = distance(parcel.pickup_location, parcel.delivery_location);
    let arrive = picked.offset(motion.ticks(to_delivery));
    let deliver_at = arrive.max(parcel.delivery_window.begin());
    if !policy.can_deliver(parcel.delivery_window, deliver_at, parcel.delivery_duration) {
        return;
    }
    let delivered = deliver_at.offset(parcel.delivery_duration);

    tally.accepted += 1;
    tally.pickups.push(picked);
    tally.deliveries.push(delivered);
    tally.pickup_tardiness += picked.since(parcel.pickup_window.end());
    tally.delivery_tardiness += delivered.since(parcel.delivery_window.end());
    tally.distance += to_pickup + to_delivery;

    v.position = parcel.delivery_location;
    v.busy_until = delivered;
    v.moved = true;
}
