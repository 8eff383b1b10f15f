//! `StatisticsDto` — the aggregated summary of one run.
//!
//! Produced by the engine's statistics tracker when a run halts, whether by
//! its stop condition or abnormally.  An abnormal halt shows up here as
//! `sim_finished == false` or as counts that do not add up; objective
//! functions treat both the same way, through `is_valid_result`.

use std::fmt;

use pdp_core::{DistanceUnit, TimeUnit};

/// Aggregated statistics of a completed or halted run.
///
/// Distances are in `distance_unit`; tardiness, over time, and simulation
/// time are in `time_unit`.  Computation time is always wall-clock
/// milliseconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatisticsDto {
    pub total_distance:      f64,
    pub total_pickups:       u32,
    pub total_deliveries:    u32,
    pub total_parcels:       u32,
    pub accepted_parcels:    u32,
    pub pickup_tardiness:    u64,
    pub delivery_tardiness:  u64,
    pub computation_time_ms: u64,
    pub simulation_time:     u64,
    /// `true` if the run reached its stop condition.
    pub sim_finished:        bool,
    pub total_vehicles:      u32,
    pub moved_vehicles:      u32,
    pub vehicles_at_depot:   u32,
    /// Time vehicles spent working past the end of their availability.
    pub over_time:           u64,
    pub distance_unit:       DistanceUnit,
    pub time_unit:           TimeUnit,
}

impl StatisticsDto {
    /// Pickup plus delivery tardiness.
    #[inline]
    pub fn total_tardiness(&self) -> u64 {
        self.pickup_tardiness.saturating_add(self.delivery_tardiness)
    }

    /// Parcels that were never delivered.
    #[inline]
    pub fn unserved_parcels(&self) -> u32 {
        self.total_parcels.saturating_sub(self.total_deliveries)
    }
}

impl Default for StatisticsDto {
    /// An empty, unfinished run in km / ms.
    fn default() -> Self {
        Self {
            total_distance:      0.0,
            total_pickups:       0,
            total_deliveries:    0,
            total_parcels:       0,
            accepted_parcels:    0,
            pickup_tardiness:    0,
            delivery_tardiness:  0,
            computation_time_ms: 0,
            simulation_time:     0,
            sim_finished:        false,
            total_vehicles:      0,
            moved_vehicles:      0,
            vehicles_at_depot:   0,
            over_time:           0,
            distance_unit:       DistanceUnit::Kilometre,
            time_unit:           TimeUnit::Millisecond,
        }
    }
}

impl fmt::Display for StatisticsDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (du, tu) = (self.distance_unit, self.time_unit);
        writeln!(f, "finished:    {}", self.sim_finished)?;
        writeln!(f, "distance:    {:.3} {du}", self.total_distance)?;
        writeln!(
            f,
            "parcels:     {} total, {} accepted, {} picked up, {} delivered",
            self.total_parcels, self.accepted_parcels, self.total_pickups, self.total_deliveries
        )?;
        writeln!(
            f,
            "tardiness:   {} {tu} pickup, {} {tu} delivery",
            self.pickup_tardiness, self.delivery_tardiness
        )?;
        writeln!(f, "over time:   {} {tu}", self.over_time)?;
        writeln!(
            f,
            "vehicles:    {} total, {} moved, {} at depot",
            self.total_vehicles, self.moved_vehicles, self.vehicles_at_depot
        )?;
        writeln!(f, "sim time:    {} {tu}", self.simulation_time)?;
        write!(f, "computation: {} ms", self.computation_time_ms)
    }
}
