//! Plain data row types written by output backends.

use lift_core::Tick;
use lift_fleet::Elevator;
use lift_sim::TickReport;

/// One car's state at the end of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorSnapshotRow {
    pub tick:            u64,
    pub elapsed_ms:      u64,
    pub elevator_id:     u32,
    pub floor:           u32,
    /// `None` when the car has nowhere to go.
    pub target_floor:    Option<u32>,
    pub status:          &'static str,
    pub direction:       &'static str,
    pub doors_open:      bool,
    pub passengers:      u32,
    pub pending_pickups: u32,
}

impl ElevatorSnapshotRow {
    pub fn from_elevator(tick: Tick, elapsed_ms: u64, car: &Elevator) -> Self {
        Self {
            tick:            tick.0,
            elapsed_ms,
            elevator_id:     car.id().0,
            floor:           car.current_floor().0,
            target_floor:    car.target_floor().map(|f| f.0),
            status:          car.status().as_str(),
            direction:       car.direction().as_str(),
            doors_open:      car.doors_open(),
            passengers:      car.passenger_count(),
            pending_pickups: car.pending_pickups().len() as u32,
        }
    }
}

/// Fleet-wide totals for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub elapsed_ms:       u64,
    pub moved:            u32,
    pub serviced:         u32,
    pub rerouted:         u32,
    pub parked:           u32,
    pub boarded:          u32,
    pub alighted:         u32,
    pub expired_requests: u32,
}

impl TickSummaryRow {
    pub fn from_report(elapsed_ms: u64, report: &TickReport) -> Self {
        Self {
            tick:             report.tick.0,
            elapsed_ms,
            moved:            report.moved as u32,
            serviced:         report.serviced as u32,
            rerouted:         report.rerouted as u32,
            parked:           report.parked as u32,
            boarded:          report.boarded as u32,
            alighted:         report.alighted as u32,
            expired_requests: report.expired_requests as u32,
        }
    }
}
