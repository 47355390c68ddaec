//! CSV fleet loader.
//!
//! # CSV format
//!
//! One row per vehicle:
//!
//! ```csv
//! max_speed,profile,position
//! 5,normal,0
//! 5,normal,3
//! 2,cautious,6
//! ```
//!
//! **`profile`** field:
//!
//! | Value      | Meaning                   |
//! |------------|---------------------------|
//! | `normal`   | `DriverProfile::Normal`   |
//! | `cautious` | `DriverProfile::Cautious` |
//!
//! Positions are cell indices on the ring; the sim builder validates them
//! (bounds, duplicates) when the fleet is placed on the grid.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{AgentError, AgentResult, DriverProfile};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FleetRecord {
    max_speed: u32,
    profile:   String,
    position:  u32,
}

/// One vehicle to be placed at simulation construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VehicleSpec {
    pub max_speed: u32,
    pub profile:   DriverProfile,
    pub position:  u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fleet description from a CSV file.
pub fn load_fleet_csv(path: &Path) -> AgentResult<Vec<VehicleSpec>> {
    let file = std::fs::File::open(path).map_err(AgentError::Io)?;
    load_fleet_reader(file)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for fleets embedded in
/// a driver binary.
pub fn load_fleet_reader<R: Read>(reader: R) -> AgentResult<Vec<VehicleSpec>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut specs = Vec::new();

    for result in csv_reader.deserialize::<FleetRecord>() {
        let row = result.map_err(|e| AgentError::Parse(e.to_string()))?;
        specs.push(VehicleSpec {
            max_speed: row.max_speed,
            profile:   parse_profile(&row.profile)?,
            position:  row.position,
        });
    }

    Ok(specs)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_profile(s: &str) -> AgentResult<DriverProfile> {
    match s.trim() {
        "normal"   => Ok(DriverProfile::Normal),
        "cautious" => Ok(DriverProfile::Cautious),
        other => Err(AgentError::Parse(format!(
            "invalid profile {other:?}: expected \"normal\" or \"cautious\""
        ))),
    }
}
