//! `TrafficState` — the mutable world the tick loop and events operate on.

use nasch_agent::{DriverProfile, VehicleStore};
use nasch_core::{SimRng, VehicleId};
use nasch_grid::RingGrid;
use nasch_schedule::RandomActivation;

use crate::{SimResult, rule, stats};

/// Grid, vehicles, activation set, RNG, and the shared model parameter.
///
/// Kept separate from [`Sim`][crate::Sim] so the event queue (which lives on
/// `Sim`) can hand `&mut TrafficState` to event actions without borrowing
/// itself — the split-borrow pattern.
pub struct TrafficState {
    /// The circular road.
    pub grid: RingGrid,

    /// SoA vehicle arrays, indexed by `VehicleId`.
    pub vehicles: VehicleStore,

    /// The live vehicle set and its per-step ordering.
    pub activation: RandomActivation,

    /// The single injected randomness source: drives both the activation
    /// shuffle and the slowdown draws.
    pub rng: SimRng,

    /// Model-wide per-vehicle, per-tick deceleration probability.
    pub slowdown_probability: f64,
}

impl TrafficState {
    /// Run the activation pass: every live vehicle steps exactly once, in a
    /// fresh random permutation.  Returns how many vehicles changed cell.
    ///
    /// Grid mutations are immediately visible to later vehicles in the same
    /// pass — deliberate, order-dependent cellular-automaton semantics.
    pub fn advance(&mut self) -> usize {
        let order = self.activation.shuffled(&mut self.rng);
        let mut moved = 0;
        for id in order {
            if rule::step_vehicle(
                id,
                &mut self.vehicles,
                &mut self.grid,
                self.slowdown_probability,
                &mut self.rng,
            ) {
                moved += 1;
            }
        }
        moved
    }

    /// Add a vehicle mid-run at `position` (wrapped onto the ring).
    ///
    /// The vehicle starts at `speed = 0` and is activated from the next step
    /// onward.  Fails if the cell is occupied; nothing is mutated on error.
    pub fn add_vehicle(
        &mut self,
        max_speed: u32,
        profile: DriverProfile,
        position: u32,
    ) -> SimResult<VehicleId> {
        let cell = self.grid.wrap(position);
        let id   = VehicleId(self.vehicles.count as u32);
        self.grid.place(id, cell)?;

        let pushed = self.vehicles.push_vehicle(max_speed, profile);
        debug_assert_eq!(pushed, id);
        self.vehicles.position[id.index()] = cell;
        self.activation.add(id);

        log::debug!("injected {id} at cell {cell} (max_speed {max_speed}, {profile})");
        Ok(id)
    }

    /// Mean of all live vehicles' current speeds.
    ///
    /// # Errors
    ///
    /// [`SimError::EmptyPopulation`][crate::SimError::EmptyPopulation] when
    /// no vehicles exist — the mean is undefined, not zero.
    pub fn average_speed(&self) -> SimResult<f64> {
        stats::mean_speed(&self.vehicles)
    }
}
