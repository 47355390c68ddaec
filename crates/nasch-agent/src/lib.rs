//! `nasch-agent` — vehicle state storage for the nasch traffic simulation.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`profile`] | `DriverProfile` — normal vs. cautious gap offset    |
//! | [`store`]   | `VehicleStore` — SoA speed/position/profile arrays  |
//! | [`builder`] | `VehicleStoreBuilder` — fluent class-based setup    |
//! | [`loader`]  | `VehicleSpec`, `load_fleet_csv`, `load_fleet_reader`|
//! | [`error`]   | `AgentError`, `AgentResult<T>`                      |
//!
//! Vehicles are plain data: all per-tick behavior lives as free functions in
//! `nasch-sim`, which reads and writes these arrays directly.  There are no
//! lifecycle hooks and no per-vehicle virtual dispatch — the two-variant
//! behavior difference is a tag consumed by one shared step function.

pub mod builder;
pub mod error;
pub mod loader;
pub mod profile;
pub mod store;


pub use builder::VehicleStoreBuilder;
pub use error::{AgentError, AgentResult};
pub use loader::{VehicleSpec, load_fleet_csv, load_fleet_reader};
pub use profile::DriverProfile;
pub use store::VehicleStore;
