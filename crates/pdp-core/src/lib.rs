//! `pdp-core` — foundational value types for the `pdptw` framework.
//!
//! This crate is a dependency of every other `pdp-*` crate.  It has no
//! `pdp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`geo`]     | `Point` (planar coordinate with value equality)           |
//! | [`time`]    | `Tick`, `TimeWindow`                                      |
//! | [`units`]   | `TimeUnit`, `DistanceUnit`, `SpeedUnit`                   |
//! | [`dto`]     | `VehicleDto`, `ParcelDto` — immutable task/vehicle specs  |
//! | [`rng`]     | `SimRng`, `replication_seed`                              |
//! | [`error`]   | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod dto;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dto::{ParcelDto, VehicleDto};
pub use error::{CoreError, CoreResult};
pub use geo::Point;
pub use rng::{SimRng, replication_seed};
pub use time::{Tick, TimeWindow};
pub use units::{DistanceUnit, SpeedUnit, TimeUnit};
