//! Results handed back to callers: per-call and per-tick.

use lift_core::{ElevatorId, Tick};
use lift_dispatch::Score;
use lift_fleet::Passenger;
use lift_motion::StepOutcome;

/// What happened to one hall call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// `elevator` will pick `passenger` up; `score` is why it won.
    Assigned {
        passenger: Passenger,
        elevator:  ElevatorId,
        score:     Score,
    },
    /// No car qualified.  The rider is discarded; nothing retries.
    Dropped { passenger: Passenger },
}

impl CallOutcome {
    pub fn passenger(&self) -> &Passenger {
        match self {
            CallOutcome::Assigned { passenger, .. } | CallOutcome::Dropped { passenger } => passenger,
        }
    }

    pub fn elevator(&self) -> Option<ElevatorId> {
        match self {
            CallOutcome::Assigned { elevator, .. } => Some(*elevator),
            CallOutcome::Dropped { .. }            => None,
        }
    }

    pub fn is_assigned(&self) -> bool {
        matches!(self, CallOutcome::Assigned { .. })
    }
}

/// Totals for one tick, plus each car's outcome in fleet order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub tick:             Tick,
    pub moved:            usize,
    pub serviced:         usize,
    pub rerouted:         usize,
    pub parked:           usize,
    pub boarded:          usize,
    pub alighted:         usize,
    pub expired_requests: usize,
    pub steps:            Vec<(ElevatorId, StepOutcome)>,
}

impl TickReport {
    pub fn new(tick: Tick, steps: Vec<(ElevatorId, StepOutcome)>, expired_requests: usize) -> Self {
        let mut report = Self { tick, expired_requests, ..Self::default() };
        for (_, outcome) in &steps {
            match outcome {
                StepOutcome::Moved { .. }    => report.moved += 1,
                StepOutcome::Serviced { .. } => report.serviced += 1,
                StepOutcome::Rerouted { .. } => report.rerouted += 1,
                StepOutcome::Parked          => report.parked += 1,
            }
            report.boarded  += outcome.boarded();
            report.alighted += outcome.alighted();
        }
        report.steps = steps;
        report
    }

    /// Outcome for one car, if it was stepped this tick.
    pub fn outcome(&self, id: ElevatorId) -> Option<&StepOutcome> {
        self.steps.iter().find(|(car, _)| *car == id).map(|(_, outcome)| outcome)
    }
}
