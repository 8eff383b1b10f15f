//! `pdp-objective` — deterministic scoring of completed simulation runs.
//!
//! The engine emits one [`StatisticsDto`] per run.  An [`ObjectiveFunction`]
//! turns it into a validity verdict, a cost, and a report.  Objective
//! functions take `&self`, are `Send + Sync`, and keep no mutable state, so a
//! single instance can score any number of runs from any number of threads.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`stats`]       | `StatisticsDto`                                           |
//! | [`objective`]   | `ObjectiveFunction` trait                                 |
//! | [`distance`]    | `DistanceObjective` — cost = total distance               |
//! | [`gendreau`]    | `Gendreau06Objective` — travel time + tardiness + overtime|
//! | [`weighted`]    | `WeightedObjective`, `CostWeights`                        |
//! | [`registry`]    | `objective_for(ProblemClass)`                             |
//! | [`batch`]       | `ExperimentConfig`, `Score`, `score_all`, `score_batch`   |
//! | [`results`]     | `ResultRow`, `CsvResultWriter`                            |
//! | [`error`]       | `ObjectiveError`, `ObjectiveResult<T>`                    |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | `score_all` runs on Rayon's thread pool.               |
//! | `serde`    | Serde derives on `StatisticsDto` and `ExperimentConfig`. |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdp_objective::{ObjectiveFunction, objective_for};
//!
//! let objective = objective_for(scenario.problem_class()).unwrap();
//! if objective.is_valid_result(&stats) {
//!     let cost = objective.compute_cost(&stats)?;
//! }
//! println!("{}", objective.human_readable_format(&stats));
//! ```

pub mod batch;
pub mod distance;
pub mod error;
pub mod gendreau;
pub mod objective;
pub mod registry;
pub mod results;
pub mod stats;
pub mod weighted;


pub use batch::{ExperimentConfig, Score, score_all, score_batch};
pub use distance::DistanceObjective;
pub use error::{ObjectiveError, ObjectiveResult};
pub use gendreau::Gendreau06Objective;
pub use objective::ObjectiveFunction;
pub use registry::objective_for;
pub use results::{CsvResultWriter, ResultRow};
pub use stats::StatisticsDto;
pub use weighted::{CostWeights, WeightedObjective};
