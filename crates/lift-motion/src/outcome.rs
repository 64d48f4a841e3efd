//! What one car did during one tick.

use lift_core::{Floor, PassengerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Stopped for riders: `boarded` got on, `alighted` got off.  Either
    /// list may be empty when the other is not.
    Serviced {
        boarded:  Vec<PassengerId>,
        alighted: Vec<PassengerId>,
    },
    /// Was at (or had no) target, picked a new one and opened its doors.
    Rerouted { target: Floor },
    /// Nothing left to do; doors closed.
    Parked,
    /// Travelled one floor.
    Moved { from: Floor, to: Floor },
}

impl StepOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            StepOutcome::Serviced { .. } => "serviced",
            StepOutcome::Rerouted { .. } => "rerouted",
            StepOutcome::Parked          => "parked",
            StepOutcome::Moved { .. }    => "moved",
        }
    }

    pub fn boarded(&self) -> usize {
        match self {
            StepOutcome::Serviced { boarded, .. } => boarded.len(),
            _ => 0,
        }
    }

    pub fn alighted(&self) -> usize {
        match self {
            StepOutcome::Serviced { alighted, .. } => alighted.len(),
            _ => 0,
        }
    }

    pub fn is_move(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}
