//! `nasch-core` — foundational types for the `nasch` traffic simulation.
//!
//! This crate is a dependency of every other `nasch-*` crate.  It has no
//! `nasch-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                  |
//! |-------------|-------------------------------------------|
//! | [`ids`]     | `VehicleId`                               |
//! | [`time`]    | `Tick`                                    |
//! | [`rng`]     | `SimRng` (model-held, seeded)             |
//! | [`config`]  | `TrafficConfig` and its validation        |
//! | [`error`]   | `CoreError`, `CoreResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::TrafficConfig;
pub use error::{CoreError, CoreResult};
pub use ids::VehicleId;
pub use rng::SimRng;
pub use time::Tick;
