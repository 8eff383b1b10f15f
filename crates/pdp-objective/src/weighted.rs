//! Weighted-sum scoring.

use pdp_core::{DistanceUnit, TimeUnit};

use crate::{ObjectiveFunction, ObjectiveResult, StatisticsDto};

/// Per-term weights of a [`WeightedObjective`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostWeights {
    /// Per unit of distance.
    pub distance:  f64,
    /// Per unit of tardiness.
    pub tardiness: f64,
    /// Per undelivered parcel.
    pub unserved:  f64,
    /// Per unit of over time.
    pub over_time: f64,
}

/// Cost = Σ weight × term over distance, tardiness, unserved parcels, and
/// over time.
///
/// Terms are converted into the objective's own `distance_unit` and
/// `time_unit` before weighting, so a run scores the same whatever units its
/// statistics were reported in.
///
/// Valid iff the simulation ran to completion.  Weights are fixed when the
/// value is created; there is no way to change them afterwards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WeightedObjective {
    name:          &'static str,
    weights:       CostWeights,
    distance_unit: DistanceUnit,
    time_unit:     TimeUnit,
}

impl WeightedObjective {
    /// Fabri & Recht: kilometres plus minutes of tardiness.
    pub const FABRI_RECHT: WeightedObjective = WeightedObjective::new(
        "fabrirecht",
        CostWeights { distance: 1.0, tardiness: 1.0, unserved: 0.0, over_time: 0.0 },
        DistanceUnit::Kilometre,
        TimeUnit::Minute,
    );

    /// Weights apply per `distance_unit` of distance and per `time_unit` of
    /// tardiness and over time.
    pub const fn new(
        name:          &'static str,
        weights:       CostWeights,
        distance_unit: DistanceUnit,
        time_unit:     TimeUnit,
    ) -> Self {
        Self { name, weights, distance_unit, time_unit }
    }

    pub fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Total distance of `stats`, in this objective's distance unit.
    pub fn distance(&self, stats: &StatisticsDto) -> f64 {
        stats.total_distance * stats.distance_unit.metres() / self.distance_unit.metres()
    }

    /// `amount` of `stats.time_unit`, in this objective's time unit.
    fn time(&self, stats: &StatisticsDto, amount: u64) -> f64 {
        amount as f64 * stats.time_unit.millis() as f64 / self.time_unit.millis() as f64
    }
}

impl ObjectiveFunction for WeightedObjective {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_valid_result(&self, stats: &StatisticsDto) -> bool {
        stats.sim_finished
    }

    fn compute_cost(&self, stats: &StatisticsDto) -> ObjectiveResult<f64> {
        self.check(stats)?;
        let w = self.weights;
        Ok(w.distance * self.distance(stats)
            + w.tardiness * self.time(stats, stats.total_tardiness())
            + w.unserved * stats.unserved_parcels() as f64
            + w.over_time * self.time(stats, stats.over_time))
    }
}
