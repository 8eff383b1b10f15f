//! Built-in mapping from problem family to scoring policy.

use pdp_scenario::ProblemClass;

use crate::{DistanceObjective, Gendreau06Objective, ObjectiveFunction, WeightedObjective};

static DISTANCE: DistanceObjective = DistanceObjective;
static GENDREAU06: Gendreau06Objective = Gendreau06Objective;
static FABRI_RECHT: WeightedObjective = WeightedObjective::FABRI_RECHT;

/// The objective function of a built-in family, or `None` for families this
/// crate does not know.
pub fn objective_for(class: ProblemClass) -> Option<&'static dyn ObjectiveFunction> {
    match class {
        ProblemClass::FABRI_RECHT => Some(&FABRI_RECHT),
        ProblemClass::GENDREAU06  => Some(&GENDREAU06),
        ProblemClass::GENERATED   => Some(&DISTANCE),
        _ => None,
    }
}
