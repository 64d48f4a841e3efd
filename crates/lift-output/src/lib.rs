//! `lift-output` — simulation output writers for the elevator simulator.
//!
//! | Backend | Files created                                     |
//! |---------|---------------------------------------------------|
//! | CSV     | `elevator_snapshots.csv`, `tick_summaries.csv`    |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer, sim.config());
//! sim.run_ticks(100, &mut obs)?;
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{ElevatorSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
