//! `nasch-grid` — the circular single-lane road.
//!
//! # Crate layout
//!
//! | Module    | Contents                              |
//! |-----------|---------------------------------------|
//! | [`ring`]  | `RingGrid` — torus occupancy array    |
//! | [`error`] | `GridError`, `GridResult<T>`          |
//!
//! # Topology
//!
//! The road is a one-dimensional torus: cell `L - 1` is adjacent to cell 0
//! and all position arithmetic wraps modulo `L`.  Each cell holds at most one
//! vehicle; the grid maintains a bijection between occupied cells and live
//! vehicles and has no side effects beyond its own occupancy array.

pub mod error;
pub mod ring;


pub use error::{GridError, GridResult};
pub use ring::RingGrid;
