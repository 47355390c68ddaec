//! ring-road — command-line driver for the nasch traffic simulation.
//!
//! Runs a single-lane circular road and either prints an ASCII rendering of
//! the congestion wave to stdout or writes CSV output for offline analysis.
//!
//! ```text
//! $ ring-road --road-length 60 --vehicles 12 --slowdown 0.3 --ticks 50
//!     0  ..1..2.....1....0..1...  mean 1.25
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use nasch_agent::{DriverProfile, load_fleet_csv};
use nasch_core::{Tick, TrafficConfig};
use nasch_output::{CsvWriter, SimOutputObserver};
use nasch_sim::{Sim, SimBuilder, SimObserver, TrafficState, stats};

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "ring-road")]
#[command(about = "Single-lane cellular-automaton traffic simulation")]
struct Cli {
    /// Number of cells on the circular road
    #[arg(long, default_value = "100")]
    road_length: u32,

    /// Total vehicle count (normals plus cautious)
    #[arg(long, default_value = "20")]
    vehicles: u32,

    /// How many of the vehicles use the cautious profile
    #[arg(long, default_value = "0")]
    cautious: u32,

    /// Speed ceiling for normal vehicles, in cells per tick
    #[arg(long, default_value = "5")]
    max_speed: u32,

    /// Speed ceiling for cautious vehicles (default: half of --max-speed)
    #[arg(long)]
    cautious_max_speed: Option<u32>,

    /// Per-vehicle per-tick slowdown probability
    #[arg(long, default_value = "0.3")]
    slowdown: f64,

    /// Number of ticks to simulate
    #[arg(long, default_value = "200")]
    ticks: u64,

    /// Master RNG seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Snapshot interval in ticks (0 disables snapshots)
    #[arg(long, default_value = "10")]
    snapshot_every: u64,

    /// Print the road every N ticks (ignored when --output is set)
    #[arg(long, default_value = "10")]
    print_every: u64,

    /// Inject one extra vehicle at a random free cell every N ticks
    #[arg(long, default_value = "0")]
    inject_every: u64,

    /// Load the fleet from a CSV file (max_speed,profile,position) instead
    /// of deriving it from --vehicles / --cautious
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Write vehicle_snapshots.csv and tick_summaries.csv into this directory
    #[arg(long)]
    output: Option<PathBuf>,
}

// ── ASCII observer ────────────────────────────────────────────────────────────

/// Prints the road as one character per cell: `.` for empty, the occupant's
/// speed digit otherwise.
struct RoadPrinter {
    every: u64,
}

fn render_road(state: &TrafficState) -> String {
    (0..state.grid.len())
        .map(|cell| match state.grid.occupant(cell) {
            None => '.',
            Some(id) => {
                let speed = state.vehicles.speed[id.index()].min(9);
                char::from_digit(speed, 10).unwrap_or('9')
            }
        })
        .collect()
}

impl SimObserver for RoadPrinter {
    fn on_tick_end(&mut self, tick: Tick, _moved: usize, state: &TrafficState) {
        if self.every == 0 || tick.0 % self.every != 0 {
            return;
        }
        match state.average_speed() {
            Ok(mean) => println!("{:>6}  {}  mean {mean:.2}", tick.0, render_road(state)),
            Err(_)   => println!("{:>6}  {}  (no vehicles)", tick.0, render_road(state)),
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        log::info!("simulation finished at {final_tick}");
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = TrafficConfig {
        road_length:             cli.road_length,
        vehicle_count:           cli.vehicles,
        max_speed:               cli.max_speed,
        slowdown_probability:    cli.slowdown,
        cautious_count:          cli.cautious,
        cautious_max_speed:      cli.cautious_max_speed,
        seed:                    cli.seed,
        total_ticks:             cli.ticks,
        snapshot_interval_ticks: cli.snapshot_every,
    };

    let mut builder = SimBuilder::new(config);
    if let Some(path) = &cli.fleet {
        let fleet = load_fleet_csv(path)
            .with_context(|| format!("loading fleet from {}", path.display()))?;
        builder = builder.fleet(fleet);
    }
    let mut sim = builder.build().context("building simulation")?;

    if cli.inject_every > 0 {
        let max_speed = cli.max_speed;
        sim.schedule(Tick(cli.inject_every), Some(cli.inject_every), move |state, tick| {
            let free = state.grid.empty_cells();
            match state.rng.choose(&free) {
                None => log::warn!("{tick}: road is full, skipping injection"),
                Some(&cell) => {
                    // Cell was free a moment ago and nothing moves during
                    // the event pass, so this cannot fail.
                    if state.add_vehicle(max_speed, DriverProfile::Normal, cell).is_err() {
                        log::warn!("{tick}: injection at cell {cell} failed");
                    }
                }
            }
        });
    }

    match &cli.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir).context("opening CSV output")?;
            let mut observer = SimOutputObserver::new(writer);
            sim.run(&mut observer);
            if let Some(err) = observer.take_error() {
                return Err(err).context("writing CSV output");
            }
            println!("wrote CSV output to {}", dir.display());
        }
        None => {
            let mut observer = RoadPrinter { every: cli.print_every };
            sim.run(&mut observer);
        }
    }

    report(&sim);
    Ok(())
}

fn report(sim: &Sim) {
    let vehicles = &sim.state.vehicles;
    match sim.average_speed() {
        Ok(mean) => println!(
            "{} vehicles after {} ticks: mean speed {mean:.3}, {} halted",
            vehicles.count,
            sim.now.0,
            stats::halted_count(vehicles),
        ),
        Err(_) => println!("no vehicles on the road after {} ticks", sim.now.0),
    }
}
