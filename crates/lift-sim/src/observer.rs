//! Simulation observer trait for progress reporting and data collection.

use lift_core::{ElevatorId, Tick};
use lift_fleet::Elevator;
use lift_motion::StepOutcome;

use crate::{CallOutcome, TickReport};

/// Callbacks invoked by [`Sim::tick_with`][crate::Sim::tick_with] and
/// [`Sim::submit_call_with`][crate::Sim::submit_call_with].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Hooks run after the fleet lock is
/// released, so they may take as long as they like.
///
/// # Example: dropped-call counter
///
/// ```rust
/// use lift_sim::{CallOutcome, SimObserver};
///
/// #[derive(Default)]
/// struct DropCounter { dropped: usize }
///
/// impl SimObserver for DropCounter {
///     fn on_call(&mut self, outcome: &CallOutcome) {
///         if !outcome.is_assigned() {
///             self.dropped += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per car per tick with what that car did.
    fn on_step(&mut self, _tick: Tick, _elevator: ElevatorId, _outcome: &StepOutcome) {}

    /// Called at the end of each tick with the tick's totals.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called after every tick with a copy of the whole fleet, so output
    /// writers can record it without the sim knowing the format.
    fn on_snapshot(&mut self, _tick: Tick, _elevators: &[Elevator]) {}

    /// Called after each hall call is handled, assigned or dropped.
    fn on_call(&mut self, _outcome: &CallOutcome) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
