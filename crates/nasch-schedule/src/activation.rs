//! `RandomActivation` — the live vehicle set and its per-step ordering.

use nasch_core::{SimRng, VehicleId};

/// Holds every live vehicle and hands out a freshly shuffled visit order
/// each step.
///
/// Vehicles added mid-run are included from the next step onward.  A vehicle
/// appears exactly once per returned permutation; there is no removal — the
/// model never retires vehicles.
#[derive(Default)]
pub struct RandomActivation {
    vehicles: Vec<VehicleId>,
}

impl RandomActivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` for activation.  Duplicate registrations are ignored so
    /// no vehicle can be visited twice in one step.
    pub fn add(&mut self, id: VehicleId) {
        if !self.vehicles.contains(&id) {
            self.vehicles.push(id);
        }
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn contains(&self, id: VehicleId) -> bool {
        self.vehicles.contains(&id)
    }

    /// A uniform random permutation of the live set, drawn from `rng`.
    ///
    /// Called once per step; nothing of the returned ordering is retained,
    /// so consecutive steps re-randomize from scratch.
    pub fn shuffled(&self, rng: &mut SimRng) -> Vec<VehicleId> {
        let mut order = self.vehicles.clone();
        rng.shuffle(&mut order);
        order
    }
}
