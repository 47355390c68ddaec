//! `nasch-sim` — tick loop orchestrator for the nasch traffic simulation.
//!
//! # Two-phase tick
//!
//! ```text
//! for each tick:
//!   ① Activation — every vehicle runs the five-phase step rule exactly
//!                  once, in a freshly randomized order (later vehicles see
//!                  earlier same-tick moves; this ordering dependence is
//!                  part of the model).
//!   ② Events     — drain this tick's event bucket; actions observe the
//!                  post-move world and may mutate it (e.g. inject vehicles).
//!   ③ Advance    — tick += 1.
//! ```
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`state`]    | `TrafficState` — grid + vehicles + activation + RNG   |
//! | [`rule`]     | the Nagel–Schreckenberg per-vehicle step function     |
//! | [`sim`]      | `Sim` — tick loop, event scheduling                   |
//! | [`builder`]  | `SimBuilder` — fail-fast construction                 |
//! | [`observer`] | `SimObserver`, `NoopObserver`                         |
//! | [`stats`]    | mean speed, halted count                              |
//! | [`error`]    | `SimError`, `SimResult<T>`                            |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use nasch_core::TrafficConfig;
//! use nasch_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config).build()?;
//! sim.run(&mut NoopObserver);
//! println!("mean speed: {}", sim.average_speed()?);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod rule;
pub mod sim;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use state::TrafficState;
