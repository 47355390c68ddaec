//! Tests for nasch-output (CSV writer + observer bridge).

use std::fs;

use nasch_core::TrafficConfig;
use nasch_sim::SimBuilder;
use tempfile::TempDir;

use crate::{CsvWriter, OutputWriter, SimOutputObserver, TickSummaryRow, VehicleSnapshotRow};

fn test_config(vehicle_count: u32, snapshot_interval_ticks: u64) -> TrafficConfig {
    TrafficConfig {
        road_length: 20,
        vehicle_count,
        max_speed: 3,
        slowdown_probability: 0.0,
        cautious_count: 0,
        cautious_max_speed: None,
        seed: 42,
        total_ticks: 10,
        snapshot_interval_ticks,
    }
}

fn lines(dir: &TempDir, file: &str) -> Vec<String> {
    fs::read_to_string(dir.path().join(file))
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod csv_writer {
    use super::*;

    #[test]
    fn creates_both_files_with_headers() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();

        assert_eq!(
            lines(&dir, "vehicle_snapshots.csv"),
            vec!["vehicle_id,tick,position,speed,profile"]
        );
        assert_eq!(lines(&dir, "tick_summaries.csv"), vec!["tick,moved,mean_speed"]);
    }

    #[test]
    fn rows_round_trip_as_text() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_snapshots(&[VehicleSnapshotRow {
                vehicle_id: 3,
                tick:       7,
                position:   12,
                speed:      2,
                profile:    "cautious".to_owned(),
            }])
            .unwrap();
        writer
            .write_tick_summary(&TickSummaryRow { tick: 7, moved: 1, mean_speed: Some(2.0) })
            .unwrap();
        writer.finish().unwrap();

        assert_eq!(lines(&dir, "vehicle_snapshots.csv")[1], "3,7,12,2,cautious");
        assert_eq!(lines(&dir, "tick_summaries.csv")[1], "7,1,2");
    }

    #[test]
    fn undefined_mean_speed_is_an_empty_field() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer
            .write_tick_summary(&TickSummaryRow { tick: 0, moved: 0, mean_speed: None })
            .unwrap();
        writer.finish().unwrap();
        assert_eq!(lines(&dir, "tick_summaries.csv")[1], "0,0,");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut writer = CsvWriter::new(dir.path()).unwrap();
        writer.finish().unwrap();
        writer.finish().unwrap();
    }
}

#[cfg(test)]
mod observer {
    use super::*;

    #[test]
    fn run_writes_one_summary_per_tick_and_snapshots_on_interval() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let mut sim = SimBuilder::new(test_config(4, 5)).build().unwrap();
        sim.run(&mut obs); // 10 ticks, snapshots at ticks 0 and 5
        assert!(obs.take_error().is_none());

        let summaries = lines(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 1 + 10); // header + one row per tick
        assert!(summaries[1].starts_with("0,"));
        assert!(summaries[10].starts_with("9,"));

        let snapshots = lines(&dir, "vehicle_snapshots.csv");
        assert_eq!(snapshots.len(), 1 + 2 * 4); // header + 4 vehicles × 2 ticks
    }

    #[test]
    fn empty_population_writes_summaries_without_mean() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);

        let mut sim = SimBuilder::new(test_config(0, 1)).build().unwrap();
        sim.run(&mut obs);
        assert!(obs.take_error().is_none());

        let summaries = lines(&dir, "tick_summaries.csv");
        assert_eq!(summaries.len(), 1 + 10);
        // No vehicles → mean_speed field stays empty, no snapshot rows at all.
        assert_eq!(summaries[1], "0,0,");
        assert_eq!(lines(&dir, "vehicle_snapshots.csv").len(), 1);
    }

    #[test]
    fn into_writer_returns_the_backend() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let obs = SimOutputObserver::new(writer);
        let mut writer = obs.into_writer();
        writer.finish().unwrap();
    }
}
