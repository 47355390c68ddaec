//! Simulation observer trait for progress reporting and data collection.

use nasch_core::Tick;

use crate::TrafficState;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::run_ticks`][crate::Sim::run_ticks] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, moved: usize, _state: &TrafficState) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: {moved} vehicles moved");
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick, after the event pass.
    ///
    /// `moved` is the number of vehicles that changed cell this tick; the
    /// state reference allows computing statistics without the sim knowing
    /// about any specific reporting surface.
    fn on_tick_end(&mut self, _tick: Tick, _moved: usize, _state: &TrafficState) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks; never if that is 0).
    fn on_snapshot(&mut self, _tick: Tick, _state: &TrafficState) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
