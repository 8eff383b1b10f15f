use std::fmt;

use pdp_core::{CoreError, Point};
use thiserror::Error;

use crate::Facet;

/// Spatial axis named by bound-validation errors.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Reasons a scenario (or one of its descriptors) could not be constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScenarioError {
    #[error("spatial bounds inverted on {axis} axis: min {min} > max {max}")]
    InvertedBounds { axis: Axis, min: f64, max: f64 },

    #[error("default vehicle speed must be positive and finite, got {0}")]
    NonPositiveSpeed(f64),

    #[error("duplicate environment descriptor for facet `{0}`")]
    DuplicateFacet(Facet),

    #[error("road descriptor bounds {road_min}..{road_max} contradict scenario bounds {min}..{max}")]
    RoadBoundsMismatch {
        min:      Point,
        max:      Point,
        road_min: Point,
        road_max: Point,
    },

    #[error("tick length must be positive")]
    ZeroTickLength,

    #[error("maximum road speed must be positive and finite, got {0}")]
    NonPositiveMaxSpeed(f64),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
