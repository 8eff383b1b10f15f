//! `pdp-scenario` — the canonical, replayable description of a PDPTW instance.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`event`]       | `TimedEvent`, `EventKind`                                 |
//! | [`queue`]       | `EventQueue` — run-local, FIFO-within-tick event queue    |
//! | [`descriptor`]  | `Facet`, `EnvironmentDescriptor`, `EnvironmentDescriptors`|
//! | [`policy`]      | `TimeWindowPolicy`                                        |
//! | [`stop`]        | `StopCondition`, `RunView`, `RunSnapshot`                 |
//! | [`problem`]     | `ProblemClass`                                            |
//! | [`scenario`]    | `Scenario`, `ScenarioBuilder`                             |
//! | [`fabri_recht`] | Fabri & Recht family factory                              |
//! | [`generator`]   | `GeneratorConfig`, `generate` — seeded random scenarios   |
//! | [`error`]       | `ScenarioError`, `ScenarioResult<T>`                      |
//!
//! # Lifecycle (summary)
//!
//! ```text
//! ScenarioBuilder ──build()──▶ Scenario (immutable, Send + Sync, Eq + Hash)
//!                                 │
//!                   as_queue() per run
//!                                 ▼
//!                            EventQueue ──pop_due(now)──▶ engine
//! ```
//!
//! A `Scenario` is never mutated after construction; every run derives its
//! own `EventQueue`, so one scenario can back any number of concurrent runs.

pub mod descriptor;
pub mod error;
pub mod event;
pub mod fabri_recht;
pub mod generator;
pub mod policy;
pub mod problem;
pub mod queue;
pub mod scenario;
pub mod stop;

#[cfg(test)]
mod tests;

pub use descriptor::{
    EnvironmentDescriptor, EnvironmentDescriptors, Facet, RoadDescriptor, StatsDescriptor,
    TaskDescriptor, TimeDescriptor,
};
pub use error::{Axis, ScenarioError, ScenarioResult};
pub use event::{EventKind, TimedEvent};
pub use fabri_recht::fabri_recht;
pub use generator::{GeneratorConfig, generate};
pub use policy::TimeWindowPolicy;
pub use problem::ProblemClass;
pub use queue::EventQueue;
pub use scenario::{Scenario, ScenarioBuilder};
pub use stop::{RunSnapshot, RunView, StopCondition};
