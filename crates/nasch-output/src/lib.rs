//! `nasch-output` — simulation output writers for the nasch traffic simulation.
//!
//! The CSV backend creates two files:
//!
//! | File                    | One row per                         |
//! |-------------------------|-------------------------------------|
//! | `vehicle_snapshots.csv` | vehicle, at each snapshot tick      |
//! | `tick_summaries.csv`    | tick                                |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `nasch_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use nasch_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, VehicleSnapshotRow};
pub use writer::OutputWriter;
