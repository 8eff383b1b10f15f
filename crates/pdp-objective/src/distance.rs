//! Distance-only scoring.

use pdp_core::DistanceUnit;

use crate::{ObjectiveFunction, ObjectiveResult, StatisticsDto};

/// Cost = total distance travelled, in kilometres whatever unit the run
/// reported.
///
/// Valid iff the simulation ran to completion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DistanceObjective;

impl ObjectiveFunction for DistanceObjective {
    fn name(&self) -> &'static str {
        "distance"
    }

    fn is_valid_result(&self, stats: &StatisticsDto) -> bool {
        stats.sim_finished
    }

    fn compute_cost(&self, stats: &StatisticsDto) -> ObjectiveResult<f64> {
        self.check(stats)?;
        Ok(stats.total_distance * stats.distance_unit.metres() / DistanceUnit::Kilometre.metres())
    }
}
