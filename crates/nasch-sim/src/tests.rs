//! Integration tests for nasch-sim.

use std::sync::{Arc, Mutex};

use nasch_agent::{DriverProfile, VehicleSpec};
use nasch_core::{Tick, TrafficConfig, VehicleId};
use nasch_grid::RingGrid;

use crate::{NoopObserver, Sim, SimBuilder, SimError, SimObserver, TrafficState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(road_length: u32, vehicle_count: u32, max_speed: u32, p: f64) -> TrafficConfig {
    TrafficConfig {
        road_length,
        vehicle_count,
        max_speed,
        slowdown_probability:    p,
        cautious_count:          0,
        cautious_max_speed:      None,
        seed:                    42,
        total_ticks:             10,
        snapshot_interval_ticks: 0,
    }
}

fn build(config: TrafficConfig) -> Sim {
    SimBuilder::new(config).build().unwrap()
}

/// Assert the grid ↔ vehicle bijection: every vehicle sits on the cell it
/// claims, that cell holds it, and no cell holds two vehicles.
fn assert_bijection(state: &TrafficState) {
    assert_eq!(state.grid.occupied_count(), state.vehicles.count);
    let mut seen = std::collections::HashSet::new();
    for id in state.vehicles.vehicle_ids() {
        let pos = state.vehicles.position[id.index()];
        assert!(seen.insert(pos), "two vehicles share cell {pos}");
        assert_eq!(state.grid.occupant(pos), Some(id));
    }
}

fn assert_speed_bounds(state: &TrafficState) {
    for i in 0..state.vehicles.count {
        assert!(
            state.vehicles.speed[i] <= state.vehicles.max_speed[i],
            "vehicle {i} exceeds its max speed"
        );
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let sim = build(test_config(10, 3, 2, 0.0));
        assert_eq!(sim.state.vehicles.count, 3);
        assert_eq!(sim.state.activation.len(), 3);
        assert_eq!(sim.now, Tick::ZERO);
        // Default layout: vehicle i at cell i.
        assert_eq!(sim.state.vehicles.position, vec![0, 1, 2]);
        assert_bijection(&sim.state);
    }

    #[test]
    fn capacity_violation_fails_fast() {
        let result = SimBuilder::new(test_config(5, 6, 2, 0.0)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn probability_out_of_range_fails_fast() {
        let result = SimBuilder::new(test_config(10, 3, 2, 1.5)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn zero_road_length_fails_fast() {
        let result = SimBuilder::new(test_config(0, 0, 2, 0.0)).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = SimBuilder::new(test_config(10, 3, 2, 0.0))
            .positions(vec![0, 5]) // wrong length
            .build();
        assert!(matches!(
            result,
            Err(SimError::PositionCount { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn duplicate_positions_rejected() {
        let result = SimBuilder::new(test_config(10, 2, 2, 0.0))
            .positions(vec![4, 4])
            .build();
        assert!(matches!(result, Err(SimError::Grid(_))));
    }

    #[test]
    fn cautious_class_gets_reduced_ceiling() {
        let mut cfg = test_config(10, 4, 5, 0.0);
        cfg.cautious_count = 2;
        let sim = build(cfg);
        assert_eq!(sim.state.vehicles.max_speed, vec![5, 5, 2, 2]);
        assert_eq!(
            sim.state.vehicles.profile_count(DriverProfile::Cautious),
            2
        );
    }

    #[test]
    fn fleet_overrides_config_population() {
        let fleet = vec![
            VehicleSpec { max_speed: 3, profile: DriverProfile::Normal, position: 2 },
            VehicleSpec { max_speed: 1, profile: DriverProfile::Cautious, position: 7 },
        ];
        let sim = SimBuilder::new(test_config(10, 0, 5, 0.0))
            .fleet(fleet)
            .build()
            .unwrap();
        assert_eq!(sim.state.vehicles.count, 2);
        assert_eq!(sim.state.vehicles.position, vec![2, 7]);
        assert_eq!(sim.state.vehicles.max_speed, vec![3, 1]);
        assert_bijection(&sim.state);
    }

    #[test]
    fn fleet_over_capacity_rejected() {
        let fleet: Vec<VehicleSpec> = (0..4)
            .map(|i| VehicleSpec {
                max_speed: 1,
                profile:   DriverProfile::Normal,
                position:  i,
            })
            .collect();
        let result = SimBuilder::new(test_config(3, 0, 5, 0.0)).fleet(fleet).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn fleet_and_positions_conflict() {
        let fleet = vec![VehicleSpec {
            max_speed: 1,
            profile:   DriverProfile::Normal,
            position:  0,
        }];
        let result = SimBuilder::new(test_config(10, 0, 5, 0.0))
            .fleet(fleet)
            .positions(vec![0])
            .build();
        assert!(matches!(result, Err(SimError::FleetWithPositions)));
    }
}

// ── Step rule ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rule_tests {
    use super::*;
    use crate::rule::gap_ahead;

    #[test]
    fn gap_counts_empty_cells_to_next_vehicle() {
        let mut grid = RingGrid::new(10).unwrap();
        grid.place(VehicleId(0), 0).unwrap();
        grid.place(VehicleId(1), 3).unwrap();
        assert_eq!(gap_ahead(&grid, 0, 1), 2); // cells 1, 2
        assert_eq!(gap_ahead(&grid, 3, 1), 6); // cells 4..=9, then 0 occupied
    }

    #[test]
    fn gap_wraps_around_the_ring() {
        let mut grid = RingGrid::new(5).unwrap();
        grid.place(VehicleId(0), 4).unwrap();
        grid.place(VehicleId(1), 1).unwrap();
        assert_eq!(gap_ahead(&grid, 4, 1), 1); // cell 0 empty, cell 1 occupied
    }

    #[test]
    fn lone_vehicle_gap_terminates_on_own_cell() {
        let mut grid = RingGrid::new(8).unwrap();
        grid.place(VehicleId(0), 2).unwrap();
        assert_eq!(gap_ahead(&grid, 2, 1), 7);
        // A cautious scan starts one cell further, so it sees one less.
        assert_eq!(gap_ahead(&grid, 2, 2), 6);
    }

    #[test]
    fn adjacent_vehicle_gives_zero_gap() {
        let mut grid = RingGrid::new(10).unwrap();
        grid.place(VehicleId(0), 0).unwrap();
        grid.place(VehicleId(1), 1).unwrap();
        assert_eq!(gap_ahead(&grid, 0, 1), 0);
    }
}

// ── Scenarios from the model definition ───────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn spaced_vehicles_accelerate_uniformly() {
        // road 10, three vehicles at {0, 3, 6}, max_speed 2, p = 0:
        // gap ≥ 2 for everyone regardless of order, so after one step every
        // vehicle has speed exactly 1 and advanced exactly one cell.
        let mut sim = SimBuilder::new(test_config(10, 3, 2, 0.0))
            .positions(vec![0, 3, 6])
            .build()
            .unwrap();
        sim.step();
        assert_eq!(sim.state.vehicles.speed, vec![1, 1, 1]);
        assert_eq!(sim.state.vehicles.position, vec![1, 4, 7]);
        assert!((sim.average_speed().unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn trailing_vehicle_never_reaches_the_leader() {
        // Two adjacent vehicles; whatever the activation order, the trailing
        // vehicle's gap-limited speed keeps it strictly behind the leader.
        for seed in 0..20 {
            let mut cfg = test_config(10, 2, 5, 0.0);
            cfg.seed = seed;
            let mut sim = SimBuilder::new(cfg).positions(vec![0, 1]).build().unwrap();
            sim.step();
            assert_bijection(&sim.state);
            let trailing = sim.state.vehicles.position[0];
            let leader   = sim.state.vehicles.position[1];
            assert_ne!(trailing, leader);
            // The trailing vehicle moved at most one cell (gap was 0 or 1).
            assert!(trailing <= 1, "trailing vehicle overtook: {trailing}");
            assert!(leader >= 2, "leader did not move: {leader}");
        }
    }

    #[test]
    fn lone_vehicle_reaches_max_speed() {
        let mut sim = build(test_config(20, 1, 3, 0.0));
        let speeds: Vec<u32> = (0..5)
            .map(|_| {
                sim.step();
                sim.state.vehicles.speed[0]
            })
            .collect();
        assert_eq!(speeds, vec![1, 2, 3, 3, 3]);
        // Position is the running sum of speeds, mod 20.
        assert_eq!(sim.state.vehicles.position[0], (1 + 2 + 3 + 3 + 3) % 20);
    }

    #[test]
    fn gridlocked_road_never_moves() {
        // Every cell occupied: all gaps are 0, so nobody ever moves.
        let mut sim = build(test_config(5, 5, 3, 0.0));
        for _ in 0..10 {
            let moved = sim.step();
            assert_eq!(moved, 0);
            assert_eq!(sim.state.vehicles.speed, vec![0; 5]);
        }
        assert_eq!(sim.state.vehicles.position, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn cautious_vehicle_rests_with_a_cushion() {
        // A cautious vehicle approaching a parked one (max_speed 0) stops
        // two cells short: its gap scan starts at the braking distance.
        let fleet = vec![
            VehicleSpec { max_speed: 2, profile: DriverProfile::Cautious, position: 0 },
            VehicleSpec { max_speed: 0, profile: DriverProfile::Normal, position: 5 },
        ];
        let mut sim = SimBuilder::new(test_config(10, 0, 2, 0.0))
            .fleet(fleet)
            .build()
            .unwrap();
        sim.run_ticks(10, &mut NoopObserver);
        assert_eq!(sim.state.vehicles.position[0], 3);
        assert_eq!(sim.state.vehicles.speed[0], 0);
        assert_eq!(sim.state.vehicles.position[1], 5);
    }

    #[test]
    fn collision_fallback_zeroes_speed_without_moving() {
        // A cautious vehicle directly behind a parked one: its braking-offset
        // scan starts beyond the neighbor, reports a large gap, and the move
        // phase finds the target cell occupied — speed drops to 0, no move.
        let fleet = vec![
            VehicleSpec { max_speed: 2, profile: DriverProfile::Cautious, position: 0 },
            VehicleSpec { max_speed: 0, profile: DriverProfile::Normal, position: 1 },
        ];
        let mut sim = SimBuilder::new(test_config(10, 0, 2, 0.0))
            .fleet(fleet)
            .build()
            .unwrap();
        sim.step();
        assert_eq!(sim.state.vehicles.position[0], 0);
        assert_eq!(sim.state.vehicles.speed[0], 0);
        assert_bijection(&sim.state);
    }
}

// ── Invariants under randomized runs ──────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn bijection_and_speed_bounds_hold_every_tick() {
        let mut cfg = test_config(50, 20, 5, 0.3);
        cfg.cautious_count = 5;
        let mut sim = build(cfg);
        for _ in 0..200 {
            sim.step();
            assert_bijection(&sim.state);
            assert_speed_bounds(&sim.state);
        }
    }

    #[test]
    fn identical_seeds_give_identical_trajectories() {
        let mut cfg = test_config(40, 15, 5, 0.4);
        cfg.cautious_count = 3;
        let mut a = build(cfg.clone());
        let mut b = build(cfg);
        for tick in 0..100 {
            a.step();
            b.step();
            assert_eq!(
                a.state.vehicles.position, b.state.vehicles.position,
                "positions diverged at tick {tick}"
            );
            assert_eq!(
                a.state.vehicles.speed, b.state.vehicles.speed,
                "speeds diverged at tick {tick}"
            );
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let cfg_a = test_config(40, 15, 5, 0.4);
        let mut cfg_b = cfg_a.clone();
        cfg_b.seed = 43;
        let mut a = build(cfg_a);
        let mut b = build(cfg_b);
        a.run_ticks(50, &mut NoopObserver);
        b.run_ticks(50, &mut NoopObserver);
        assert_ne!(a.state.vehicles.position, b.state.vehicles.position);
    }

    #[test]
    fn tick_counter_is_monotonic() {
        let mut sim = build(test_config(10, 3, 2, 0.0));
        for expected in 1..=25u64 {
            sim.step();
            assert_eq!(sim.now, Tick(expected));
        }
    }
}

// ── Events ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod event_tests {
    use super::*;

    #[test]
    fn empty_event_ticks_change_no_state() {
        let mut with_events    = build(test_config(10, 3, 2, 0.0));
        let mut without_events = build(test_config(10, 3, 2, 0.0));
        // Schedule far beyond the run — every processed bucket is empty.
        with_events.schedule(Tick(10_000), None, |_, _| unreachable!());
        with_events.run_ticks(30, &mut NoopObserver);
        without_events.run_ticks(30, &mut NoopObserver);
        assert_eq!(
            with_events.state.vehicles.position,
            without_events.state.vehicles.position
        );
        assert_eq!(
            with_events.state.vehicles.speed,
            without_events.state.vehicles.speed
        );
    }

    #[test]
    fn repeating_event_fires_on_schedule() {
        let mut sim = build(test_config(10, 1, 2, 0.0));
        let fired = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&fired);
        sim.schedule(Tick(0), Some(5), move |_, tick| {
            log.lock().unwrap().push(tick.0);
        });
        sim.run_ticks(17, &mut NoopObserver);
        assert_eq!(*fired.lock().unwrap(), vec![0, 5, 10, 15]);
    }

    #[test]
    fn events_observe_the_post_move_world() {
        // Lone vehicle at cell 0, max_speed 2, p = 0: during tick 0 it moves
        // to cell 1.  The tick-0 event must see position 1, not 0.
        let mut sim = build(test_config(10, 1, 2, 0.0));
        let seen = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&seen);
        sim.schedule(Tick(0), None, move |state, _| {
            *slot.lock().unwrap() = Some(state.vehicles.position[0]);
        });
        sim.step();
        assert_eq!(*seen.lock().unwrap(), Some(1));
    }

    #[test]
    fn event_can_inject_a_vehicle_mid_run() {
        let mut sim = build(test_config(10, 1, 2, 0.0));
        sim.schedule(Tick(2), None, |state, _| {
            state
                .add_vehicle(2, DriverProfile::Normal, 8)
                .expect("cell 8 is free at tick 2");
        });
        sim.run_ticks(3, &mut NoopObserver);
        assert_eq!(sim.state.vehicles.count, 2);
        assert_eq!(sim.state.activation.len(), 2);
        assert_bijection(&sim.state);

        // The injected vehicle participates in subsequent steps.
        sim.run_ticks(2, &mut NoopObserver);
        assert!(sim.state.vehicles.position[1] != 8 || sim.state.vehicles.speed[1] > 0);
        assert_bijection(&sim.state);
    }

    #[test]
    fn injecting_into_an_occupied_cell_fails_without_mutation() {
        let mut sim = build(test_config(10, 1, 2, 0.0));
        let result = sim.state.add_vehicle(2, DriverProfile::Normal, 0);
        assert!(matches!(result, Err(SimError::Grid(_))));
        assert_eq!(sim.state.vehicles.count, 1);
        assert_eq!(sim.state.activation.len(), 1);
    }
}

// ── Statistics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stats_tests {
    use super::*;
    use crate::stats;

    #[test]
    fn average_speed_on_empty_population_is_an_error() {
        let sim = build(test_config(10, 0, 2, 0.0));
        assert!(matches!(
            sim.average_speed(),
            Err(SimError::EmptyPopulation)
        ));
    }

    #[test]
    fn average_speed_is_the_arithmetic_mean() {
        let mut sim = SimBuilder::new(test_config(10, 3, 2, 0.0))
            .positions(vec![0, 3, 6])
            .build()
            .unwrap();
        sim.step();
        assert!((sim.average_speed().unwrap() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn halted_count_tracks_standstills() {
        let sim = build(test_config(5, 5, 3, 0.0));
        assert_eq!(stats::halted_count(&sim.state.vehicles), 5);
    }
}

// ── Run loop and observers ────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[derive(Default)]
    struct CountingObserver {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        sim_ended: bool,
        last_tick: Option<Tick>,
    }

    impl SimObserver for CountingObserver {
        fn on_tick_start(&mut self, _tick: Tick) {
            self.starts += 1;
        }
        fn on_tick_end(&mut self, tick: Tick, _moved: usize, _state: &TrafficState) {
            self.ends += 1;
            self.last_tick = Some(tick);
        }
        fn on_snapshot(&mut self, _tick: Tick, _state: &TrafficState) {
            self.snapshots += 1;
        }
        fn on_sim_end(&mut self, _final_tick: Tick) {
            self.sim_ended = true;
        }
    }

    #[test]
    fn run_stops_at_total_ticks() {
        let mut sim = build(test_config(10, 3, 2, 0.0)); // total_ticks = 10
        let mut obs = CountingObserver::default();
        sim.run(&mut obs);
        assert_eq!(sim.now, Tick(10));
        assert_eq!(obs.starts, 10);
        assert_eq!(obs.ends, 10);
        assert_eq!(obs.last_tick, Some(Tick(9)));
        assert!(obs.sim_ended);
    }

    #[test]
    fn run_ticks_ignores_total_ticks() {
        let mut sim = build(test_config(10, 3, 2, 0.0));
        sim.run_ticks(25, &mut NoopObserver);
        assert_eq!(sim.now, Tick(25));
    }

    #[test]
    fn snapshot_interval_drives_snapshot_hook() {
        let mut cfg = test_config(10, 3, 2, 0.0);
        cfg.snapshot_interval_ticks = 4;
        let mut sim = build(cfg);
        let mut obs = CountingObserver::default();
        sim.run_ticks(10, &mut obs);
        // Ticks 0, 4, 8.
        assert_eq!(obs.snapshots, 3);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut sim = build(test_config(10, 3, 2, 0.0));
        let mut obs = CountingObserver::default();
        sim.run_ticks(10, &mut obs);
        assert_eq!(obs.snapshots, 0);
    }

    #[test]
    fn stepping_an_empty_population_is_harmless() {
        let mut sim = build(test_config(10, 0, 2, 0.0));
        sim.run_ticks(5, &mut NoopObserver);
        assert_eq!(sim.now, Tick(5));
        assert_eq!(sim.state.grid.occupied_count(), 0);
    }
}
