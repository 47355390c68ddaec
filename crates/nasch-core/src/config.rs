//! Top-level simulation configuration.
//!
//! Typically assembled by the driver binary (CLI flags, embedded constants)
//! and handed to `nasch-sim`'s builder, which calls [`TrafficConfig::validate`]
//! before constructing any state.

use crate::{CoreError, CoreResult, Tick};

/// Construction parameters for a single-lane ring-road simulation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficConfig {
    /// Number of cells on the circular road.  Must be ≥ 1.
    pub road_length: u32,

    /// Total vehicles placed at construction, cautious ones included.
    /// Must not exceed `road_length`.
    pub vehicle_count: u32,

    /// Speed ceiling for normal-profile vehicles, in cells per tick.
    pub max_speed: u32,

    /// Per-vehicle, per-tick probability of an extra unit of deceleration.
    /// Must lie in `[0, 1]`.
    pub slowdown_probability: f64,

    /// How many of `vehicle_count` use the cautious (enlarged braking
    /// distance) profile.
    pub cautious_count: u32,

    /// Speed ceiling for cautious vehicles.  `None` defaults to
    /// `max_speed / 2`.
    pub cautious_max_speed: Option<u32>,

    /// Master RNG seed.  The same seed always produces identical trajectories.
    pub seed: u64,

    /// Total ticks for `Sim::run`.  `Sim::run_ticks` ignores this.
    pub total_ticks: u64,

    /// Invoke the observer snapshot hook every N ticks.  0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl TrafficConfig {
    /// Effective speed ceiling for cautious vehicles.
    #[inline]
    pub fn cautious_max_speed(&self) -> u32 {
        self.cautious_max_speed.unwrap_or(self.max_speed / 2)
    }

    /// Number of normal-profile vehicles.
    #[inline]
    pub fn normal_count(&self) -> u32 {
        self.vehicle_count - self.cautious_count
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Fail-fast parameter validation.
    ///
    /// Checked before any grid or vehicle state is built, so a malformed
    /// configuration can never produce a partially-initialized simulation.
    pub fn validate(&self) -> CoreResult<()> {
        if self.road_length == 0 {
            return Err(CoreError::EmptyRoad);
        }
        if self.vehicle_count > self.road_length {
            return Err(CoreError::Capacity {
                requested: self.vehicle_count,
                cells:     self.road_length,
            });
        }
        if self.cautious_count > self.vehicle_count {
            return Err(CoreError::CautiousCount {
                cautious: self.cautious_count,
                total:    self.vehicle_count,
            });
        }
        if !(0.0..=1.0).contains(&self.slowdown_probability) {
            return Err(CoreError::Probability(self.slowdown_probability));
        }
        Ok(())
    }
}
