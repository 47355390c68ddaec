//! Fluent builder for constructing a [`Sim`].

use nasch_agent::{DriverProfile, VehicleSpec, VehicleStore, VehicleStoreBuilder};
use nasch_core::{SimRng, Tick, TrafficConfig};
use nasch_grid::RingGrid;
use nasch_schedule::{EventQueue, RandomActivation};

use crate::{Sim, SimError, SimResult, TrafficState};

/// Fluent builder for [`Sim`].
///
/// # Required input
///
/// A [`TrafficConfig`]; everything else has defaults.
///
/// # Optional inputs
///
/// | Method           | Default                                              |
/// |------------------|------------------------------------------------------|
/// | `.positions(v)`  | vehicle `i` at cell `i` (normals first, then cautious)|
/// | `.fleet(specs)`  | population derived from the config's counts          |
///
/// A fleet supplies per-vehicle max speed, profile, *and* position, so it
/// cannot be combined with `.positions`.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .positions(vec![0, 3, 6])
///     .build()?;
/// sim.run_ticks(100, &mut NoopObserver);
/// ```
///
/// Validation is fail-fast: capacity, probability range, and placement
/// conflicts are all rejected before any state survives — a malformed
/// configuration never produces a partially-initialized simulation.
pub struct SimBuilder {
    config:    TrafficConfig,
    positions: Option<Vec<u32>>,
    fleet:     Option<Vec<VehicleSpec>>,
}

impl SimBuilder {
    pub fn new(config: TrafficConfig) -> Self {
        Self { config, positions: None, fleet: None }
    }

    /// Supply an explicit cell for each vehicle (must be length
    /// `vehicle_count`).  Duplicates are rejected at build time via the
    /// grid's occupancy check.
    pub fn positions(mut self, positions: Vec<u32>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply a fully described fleet (e.g. from
    /// [`nasch_agent::load_fleet_csv`]); overrides the config's
    /// `vehicle_count` / `cautious_count` derivation.
    pub fn fleet(mut self, specs: Vec<VehicleSpec>) -> Self {
        self.fleet = Some(specs);
        self
    }

    /// Validate all inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let mut grid = RingGrid::new(self.config.road_length)?;

        // ── Build the store and resolve per-vehicle cells ─────────────────
        let (vehicles, cells) = match (self.fleet, self.positions) {
            (Some(_), Some(_)) => return Err(SimError::FleetWithPositions),

            (Some(specs), None) => {
                if specs.len() as u32 > self.config.road_length {
                    return Err(nasch_core::CoreError::Capacity {
                        requested: specs.len() as u32,
                        cells:     self.config.road_length,
                    }
                    .into());
                }
                let mut store = VehicleStore::default();
                let mut cells = Vec::with_capacity(specs.len());
                for spec in &specs {
                    store.push_vehicle(spec.max_speed, spec.profile);
                    cells.push(spec.position);
                }
                (store, cells)
            }

            (None, positions) => {
                let store = VehicleStoreBuilder::new()
                    .with_class(
                        self.config.normal_count(),
                        self.config.max_speed,
                        DriverProfile::Normal,
                    )
                    .with_class(
                        self.config.cautious_count,
                        self.config.cautious_max_speed(),
                        DriverProfile::Cautious,
                    )
                    .build();

                let cells = match positions {
                    Some(p) => {
                        if p.len() != store.count {
                            return Err(SimError::PositionCount {
                                expected: store.count,
                                got:      p.len(),
                            });
                        }
                        p
                    }
                    // Default layout: vehicle i starts at cell i.
                    None => (0..store.count as u32).collect(),
                };
                (store, cells)
            }
        };

        // ── Place every vehicle; duplicates surface as Occupied ───────────
        let mut vehicles = vehicles;
        let mut activation = RandomActivation::new();
        for id in vehicles.vehicle_ids().collect::<Vec<_>>() {
            let cell = grid.wrap(cells[id.index()]);
            grid.place(id, cell)?;
            vehicles.position[id.index()] = cell;
            activation.add(id);
        }

        log::debug!(
            "built sim: {} cells, {} vehicles ({} cautious), p_slowdown {}",
            self.config.road_length,
            vehicles.count,
            vehicles.profile_count(DriverProfile::Cautious),
            self.config.slowdown_probability,
        );

        let state = TrafficState {
            grid,
            vehicles,
            activation,
            rng: SimRng::new(self.config.seed),
            slowdown_probability: self.config.slowdown_probability,
        };

        Ok(Sim {
            config: self.config,
            now:    Tick::ZERO,
            state,
            events: EventQueue::new(),
        })
    }
}
