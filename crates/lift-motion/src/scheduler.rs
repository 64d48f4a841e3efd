//! `MotionScheduler` — one transition per car per tick.

use lift_core::{ElevatorId, LiftResult};
use lift_fleet::{Elevator, FleetState};
use lift_route::TargetSelector;
use tracing::debug;

use crate::StepOutcome;

/// Applies the per-tick transition to each car.
///
/// For one car, in priority order:
///
/// 1. **Service stop**: someone aboard wants this floor, or someone is
///    waiting here and the car has room: board (up to capacity), alight,
///    retarget, open doors.
/// 2. **Recalculation**: no target, or already on it: retarget.  Park with
///    doors closed if there is still nothing to do, otherwise open doors.
/// 3. **Travel**: move one floor toward the target.
pub struct MotionScheduler<S: TargetSelector> {
    selector: S,
}

impl<S: TargetSelector> MotionScheduler<S> {
    pub fn new(selector: S) -> Self {
        Self { selector }
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Advance `car` by one step.
    pub fn step(&self, car: &mut Elevator) -> StepOutcome {
        if car.should_stop() {
            let boarded  = car.board_at_current_floor();
            let alighted = car.alight_at_current_floor();
            car.set_target(self.selector.next_target(car));
            car.open_doors();
            return StepOutcome::Serviced {
                boarded:  boarded.iter().map(|p| p.id).collect(),
                alighted: alighted.iter().map(|p| p.id).collect(),
            };
        }

        let arrived = car.target_floor().is_none_or(|t| t == car.current_floor());
        if arrived {
            let next = self.selector.next_target(car);
            car.set_target(next);
            return match next {
                None => {
                    car.park();
                    StepOutcome::Parked
                }
                Some(target) => {
                    car.open_doors();
                    StepOutcome::Rerouted { target }
                }
            };
        }

        match car.move_toward_target() {
            Some((from, to)) => StepOutcome::Moved { from, to },
            None => {
                car.park();
                StepOutcome::Parked
            }
        }
    }

    /// Step every car in fleet order.  Returns each car's outcome in the
    /// same order.
    pub fn tick(&self, state: &mut FleetState) -> LiftResult<Vec<(ElevatorId, StepOutcome)>> {
        let ids: Vec<ElevatorId> = state.elevators().iter().map(Elevator::id).collect();
        let mut outcomes = Vec::with_capacity(ids.len());
        for id in ids {
            let outcome = state.update(id, |car| self.step(car))?;
            debug!(car = %id, step = outcome.label(), "step");
            outcomes.push((id, outcome));
        }
        Ok(outcomes)
    }
}
