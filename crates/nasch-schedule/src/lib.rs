//! `nasch-schedule` — activation ordering and deferred events.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`activation`] | `RandomActivation` — per-step random permutation    |
//! | [`events`]     | `EventQueue<C>` (`BTreeMap<Tick, Vec<record>>`)     |
//!
//! # Ordering model
//!
//! Each step the activation set yields a *fresh* uniform random permutation
//! of all live vehicles; no ordering persists between steps.  This matters:
//! a vehicle may observe neighbors that have already moved this tick, so the
//! permutation is part of the model's semantics, not an implementation
//! detail.
//!
//! Events are bucketed by exact trigger tick and run after all vehicles have
//! moved, so an event always observes the post-move world state.

pub mod activation;
pub mod events;


pub use activation::RandomActivation;
pub use events::{EventAction, EventQueue};
