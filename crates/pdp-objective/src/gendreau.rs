//! Scoring for the Gendreau et al. (2006) family.
//!
//! Cost is expressed in minutes and has three parts:
//!
//! ```text
//! travel time = total_distance [km] / 30 km/h, in minutes
//! tardiness   = (pickup + delivery tardiness) [ms], in minutes
//! over time   = over_time [ms], in minutes
//! cost        = travel time + tardiness + over time
//! ```
//!
//! A run is only comparable with the published results if every parcel was
//! accepted, picked up, and delivered, every vehicle returned to the depot,
//! and the statistics were recorded in km and ms.

use pdp_core::{DistanceUnit, TimeUnit};

use crate::{ObjectiveFunction, ObjectiveResult, StatisticsDto};

/// Fixed vehicle speed of the family, in km/h.
pub const VEHICLE_SPEED_KMH: f64 = 30.0;

const MS_PER_MINUTE: f64 = 60_000.0;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Gendreau06Objective;

impl Gendreau06Objective {
    /// Minutes spent driving.
    pub fn travel_time(self, stats: &StatisticsDto) -> f64 {
        stats.total_distance / VEHICLE_SPEED_KMH * 60.0
    }

    /// Total lateness, in minutes.
    pub fn tardiness(self, stats: &StatisticsDto) -> f64 {
        stats.total_tardiness() as f64 / MS_PER_MINUTE
    }

    /// Overtime, in minutes.
    pub fn over_time(self, stats: &StatisticsDto) -> f64 {
        stats.over_time as f64 / MS_PER_MINUTE
    }
}

impl ObjectiveFunction for Gendreau06Objective {
    fn name(&self) -> &'static str {
        "gendreau06"
    }

    fn is_valid_result(&self, stats: &StatisticsDto) -> bool {
        stats.sim_finished
            && stats.total_parcels == stats.accepted_parcels
            && stats.total_parcels == stats.total_pickups
            && stats.total_parcels == stats.total_deliveries
            && stats.total_vehicles == stats.vehicles_at_depot
            && stats.distance_unit == DistanceUnit::Kilometre
            && stats.time_unit == TimeUnit::Millisecond
    }

    fn compute_cost(&self, stats: &StatisticsDto) -> ObjectiveResult<f64> {
        self.check(stats)?;
        Ok(self.travel_time(stats) + self.tardiness(stats) + self.over_time(stats))
    }

    fn human_readable_format(&self, stats: &StatisticsDto) -> String {
        let breakdown = format!(
            "travel time: {:.3}\ntardiness:   {:.3}\nover time:   {:.3}",
            self.travel_time(stats),
            self.tardiness(stats),
            self.over_time(stats),
        );
        match self.compute_cost(stats) {
            Ok(total) => format!("[{}]\n{breakdown}\ntotal:       {total:.3}", self.name()),
            Err(_) => format!("[{}] INVALID\n{breakdown}\n{stats}", self.name()),
        }
    }
}
