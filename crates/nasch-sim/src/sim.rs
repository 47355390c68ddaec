//! The `Sim` struct and its tick loop.

use nasch_core::{Tick, TrafficConfig};
use nasch_schedule::EventQueue;

use crate::{SimObserver, SimResult, TrafficState};

/// The main simulation runner.
///
/// Owns the world state, the event queue, and the tick counter, and drives
/// the per-tick sequence:
///
/// 1. **Activation pass** — all vehicles move exactly once in a fresh random
///    permutation ([`TrafficState::advance`]).
/// 2. **Event pass** — this tick's event bucket runs against the post-move
///    world ([`EventQueue::process`]).
/// 3. **Advance** — the tick counter increments by exactly 1; it never
///    decreases or resets.
///
/// The loop has no termination condition of its own: [`run_ticks`][Sim::run_ticks]
/// steps a caller-chosen count and [`run`][Sim::run] uses
/// `config.total_ticks`.  Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    /// Global configuration (population, probability, seed, …).
    pub config: TrafficConfig,

    /// The current tick.  Tick N's step happens while `now == N`.
    pub now: Tick,

    /// Grid + vehicles + activation + RNG: everything event actions may
    /// mutate.  Separate from the queue for the split borrow in `step`.
    pub state: TrafficState,

    /// Deferred actions bucketed by trigger tick.
    pub events: EventQueue<TrafficState>,
}

impl Sim {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the simulation by exactly one tick.
    ///
    /// Returns the number of vehicles that changed cell.
    pub fn step(&mut self) -> usize {
        let moved = self.state.advance();
        let fired = self.events.process(self.now, &mut self.state);
        if fired > 0 {
            log::trace!("{}: {moved} moved, {fired} events fired", self.now);
        }
        self.now = self.now + 1;
        moved
    }

    /// Run from the current tick to `config.end_tick()`, invoking observer
    /// hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        while self.now < self.config.end_tick() {
            self.observed_step(observer);
        }
        observer.on_sim_end(self.now);
    }

    /// Run exactly `n` ticks from the current position (ignores
    /// `config.total_ticks`).  Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.observed_step(observer);
        }
    }

    /// Schedule `action` on the event queue; sugar for `self.events.schedule`.
    pub fn schedule<F>(&mut self, tick: Tick, repeat_every: Option<u64>, action: F)
    where
        F: Fn(&mut TrafficState, Tick) + Send + Sync + 'static,
    {
        self.events.schedule(tick, repeat_every, action);
    }

    /// Mean of all live vehicles' current speeds.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptyPopulation`][crate::SimError::EmptyPopulation] when
    /// no vehicles exist.
    pub fn average_speed(&self) -> SimResult<f64> {
        self.state.average_speed()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now);
        let moved = self.step();
        observer.on_tick_end(now, moved, &self.state);
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.state);
        }
    }
}
