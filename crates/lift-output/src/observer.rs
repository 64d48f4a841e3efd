//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::{FleetConfig, Tick};
use lift_fleet::Elevator;
use lift_sim::{SimObserver, TickReport};

use crate::row::{ElevatorSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes car snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After the run, call [`finish`][Self::finish] and
/// check for errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:           W,
    tick_interval_ms: u64,
    last_error:       Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to turn ticks
    /// into elapsed milliseconds.
    pub fn new(writer: W, config: &FleetConfig) -> Self {
        Self {
            writer,
            tick_interval_ms: config.tick_interval_ms,
            last_error:       None,
        }
    }

    /// Flush the writer.  Safe to call more than once.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn elapsed_ms(&self, tick: Tick) -> u64 {
        tick.0.saturating_mul(self.tick_interval_ms)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow::from_report(self.elapsed_ms(tick), report);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, elevators: &[Elevator]) {
        let elapsed = self.elapsed_ms(tick);
        let rows: Vec<ElevatorSnapshotRow> = elevators
            .iter()
            .map(|car| ElevatorSnapshotRow::from_elevator(tick, elapsed, car))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }
}
