//! The `OutputWriter` trait implemented by backend writers.

use crate::{ElevatorSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for per-tick simulator output.
///
/// All methods are infallible from the observer's perspective; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one row per car.
    fn write_snapshots(&mut self, rows: &[ElevatorSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
