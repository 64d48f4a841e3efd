//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `elevator_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub const SNAPSHOT_HEADERS: [&str; 10] = [
    "tick", "elapsed_ms", "elevator_id", "floor", "target_floor",
    "status", "direction", "doors_open", "passengers", "pending_pickups",
];

pub const SUMMARY_HEADERS: [&str; 9] = [
    "tick", "elapsed_ms", "moved", "serviced", "rerouted",
    "parked", "boarded", "alighted", "expired_requests",
];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    /// `dir` is created if missing.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join("elevator_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.elapsed_ms.to_string(),
                row.elevator_id.to_string(),
                row.floor.to_string(),
                row.target_floor.map(|f| f.to_string()).unwrap_or_default(),
                row.status.to_owned(),
                row.direction.to_owned(),
                (row.doors_open as u8).to_string(),
                row.passengers.to_string(),
                row.pending_pickups.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_ms.to_string(),
            row.moved.to_string(),
            row.serviced.to_string(),
            row.rerouted.to_string(),
            row.parked.to_string(),
            row.boarded.to_string(),
            row.alighted.to_string(),
            row.expired_requests.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
