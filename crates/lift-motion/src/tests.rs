//! Unit tests for lift-motion.

use lift_core::{Direction, ElevatorId, Floor, PassengerId};
use lift_fleet::{Elevator, ElevatorStatus, FleetState, Passenger};
use lift_route::SweepSelector;

use crate::{MotionScheduler, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rider(id: u64, pickup: u32, target: u32) -> Passenger {
    Passenger::new(PassengerId(id), Floor(pickup), Floor(target))
}

fn car_at(floor: u32) -> Elevator {
    Elevator::new(ElevatorId(0), Floor(floor), 8)
}

fn scheduler() -> MotionScheduler<SweepSelector> {
    MotionScheduler::new(SweepSelector)
}

// ── Single-car transitions ────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn empty_car_parks_in_place() {
        let mut car = car_at(4).with_motion(ElevatorStatus::Loading, Direction::Idle, None);
        assert_eq!(scheduler().step(&mut car), StepOutcome::Parked);
        assert_eq!(car.current_floor(), Floor(4));
        assert_eq!(car.status(), ElevatorStatus::Stopped);
        assert_eq!(car.direction(), Direction::Idle);
        assert!(!car.doors_open());
    }

    #[test]
    fn two_to_five_takes_three_ticks() {
        let mut car = car_at(2)
            .with_passengers([rider(1, 2, 5)])
            .with_motion(ElevatorStatus::Loading, Direction::Idle, Some(Floor(5)));
        let s = scheduler();

        for expected in [3, 4, 5] {
            assert_eq!(
                s.step(&mut car),
                StepOutcome::Moved { from: Floor(expected - 1), to: Floor(expected) },
            );
            assert_eq!(car.current_floor(), Floor(expected));
            assert_eq!(car.status(), ElevatorStatus::Moving);
            assert_eq!(car.direction(), Direction::Up);
            assert!(!car.doors_open());
        }

        let outcome = s.step(&mut car);
        assert_eq!(outcome, StepOutcome::Serviced { boarded: vec![], alighted: vec![PassengerId(1)] });
        assert_eq!(car.current_floor(), Floor(5));
        assert_eq!(car.status(), ElevatorStatus::Loading);
        assert!(car.doors_open());
        assert_eq!(car.target_floor(), None);
    }

    #[test]
    fn bare_target_parks_on_arrival() {
        let mut car = car_at(2).with_motion(ElevatorStatus::Stopped, Direction::Idle, Some(Floor(3)));
        let s = scheduler();
        assert!(s.step(&mut car).is_move());
        assert_eq!(s.step(&mut car), StepOutcome::Parked);
        assert_eq!(car.target_floor(), None);
        assert_eq!(car.current_floor(), Floor(3));
    }

    #[test]
    fn moves_down() {
        let mut car = car_at(6).with_pending([rider(1, 2, 1)]).with_motion(
            ElevatorStatus::Stopped,
            Direction::Idle,
            Some(Floor(2)),
        );
        assert_eq!(scheduler().step(&mut car), StepOutcome::Moved { from: Floor(6), to: Floor(5) });
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn boards_waiting_rider_and_heads_for_destination() {
        let mut car = car_at(3).with_pending([rider(1, 3, 7)]);
        let outcome = scheduler().step(&mut car);
        assert_eq!(outcome, StepOutcome::Serviced { boarded: vec![PassengerId(1)], alighted: vec![] });
        assert_eq!(car.passenger_ids(), vec![PassengerId(1)]);
        assert!(car.pending_pickups().is_empty());
        assert_eq!(car.target_floor(), Some(Floor(7)));
        assert_eq!(car.status(), ElevatorStatus::Loading);
        assert_eq!(car.direction(), Direction::Idle);
    }

    #[test]
    fn boarding_stops_at_capacity() {
        let mut car = Elevator::new(ElevatorId(0), Floor(3), 2)
            .with_passengers([rider(1, 1, 9)])
            .with_pending([rider(2, 3, 8), rider(3, 3, 6), rider(4, 3, 5)]);
        let outcome = scheduler().step(&mut car);
        assert_eq!(outcome.boarded(), 1);
        assert_eq!(car.passenger_count(), 2);
        assert_eq!(car.passenger_ids(), vec![PassengerId(1), PassengerId(2)]);
        assert_eq!(car.pending_pickups().len(), 2);
        assert_eq!(car.pending_pickup_floors(), &[Floor(3)]);
    }

    #[test]
    fn full_car_does_not_stall_at_a_pickup_floor() {
        let mut car = Elevator::new(ElevatorId(0), Floor(2), 1)
            .with_passengers([rider(1, 1, 4)])
            .with_pending([rider(2, 2, 6)])
            .with_motion(ElevatorStatus::Loading, Direction::Idle, Some(Floor(4)));
        assert_eq!(scheduler().step(&mut car), StepOutcome::Moved { from: Floor(2), to: Floor(3) });
        assert_eq!(car.pending_pickups().len(), 1);
    }

    #[test]
    fn alights_everyone_bound_here() {
        let mut car = car_at(5)
            .with_passengers([rider(1, 1, 5), rider(2, 2, 8), rider(3, 1, 5)])
            .with_motion(ElevatorStatus::Moving, Direction::Up, Some(Floor(5)));
        let outcome = scheduler().step(&mut car);
        assert_eq!(outcome, StepOutcome::Serviced { boarded: vec![], alighted: vec![PassengerId(1), PassengerId(3)] });
        assert_eq!(car.passenger_ids(), vec![PassengerId(2)]);
        assert_eq!(car.target_floor(), Some(Floor(8)));
    }

    #[test]
    fn arrival_with_more_work_reroutes() {
        // At its target with nobody to serve here, but a pickup elsewhere.
        let mut car = car_at(4)
            .with_pending([rider(1, 8, 1)])
            .with_motion(ElevatorStatus::Moving, Direction::Up, Some(Floor(4)));
        assert_eq!(scheduler().step(&mut car), StepOutcome::Rerouted { target: Floor(8) });
        assert_eq!(car.status(), ElevatorStatus::Loading);
        assert!(car.doors_open());
        assert_eq!(car.direction(), Direction::Idle);
    }

    #[test]
    fn passes_floors_nobody_wants() {
        let mut car = car_at(2)
            .with_passengers([rider(1, 1, 6)])
            .with_motion(ElevatorStatus::Moving, Direction::Up, Some(Floor(6)));
        let s = scheduler();
        for _ in 0..3 {
            assert!(s.step(&mut car).is_move());
        }
        assert_eq!(car.current_floor(), Floor(5));
    }
}

// ── Fleet sweep ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick {
    use super::*;

    #[test]
    fn every_car_steps_once_in_fleet_order() {
        let mut state = FleetState::new(vec![
            Elevator::new(ElevatorId(0), Floor(1), 8),
            Elevator::new(ElevatorId(1), Floor(5), 8).with_motion(ElevatorStatus::Stopped, Direction::Idle, Some(Floor(9))),
            Elevator::new(ElevatorId(2), Floor(3), 8).with_pending([rider(1, 3, 1)]),
        ]);
        let outcomes = scheduler().tick(&mut state).unwrap();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0], (ElevatorId(0), StepOutcome::Parked));
        assert_eq!(outcomes[1], (ElevatorId(1), StepOutcome::Moved { from: Floor(5), to: Floor(6) }));
        assert_eq!(outcomes[2].1.boarded(), 1);
        assert_eq!(state.elevators()[1].current_floor(), Floor(6));
        assert_eq!(state.elevators()[2].target_floor(), Some(Floor(1)));
    }

    #[test]
    fn cars_do_not_affect_each_other() {
        let lone = Elevator::new(ElevatorId(0), Floor(2), 8).with_pending([rider(1, 7, 1)]);
        let mut alone = FleetState::new(vec![lone.clone()]);
        let mut crowd = FleetState::new(vec![
            lone,
            Elevator::new(ElevatorId(1), Floor(7), 8).with_pending([rider(2, 7, 1)]),
        ]);
        let s = scheduler();
        for _ in 0..6 {
            s.tick(&mut alone).unwrap();
            s.tick(&mut crowd).unwrap();
            assert_eq!(alone.elevators()[0], crowd.elevators()[0]);
        }
    }

    #[test]
    fn ids_survive_boarding_and_alighting() {
        let mut state = FleetState::new(vec![
            Elevator::new(ElevatorId(0), Floor(1), 3)
                .with_pending([rider(1, 1, 4), rider(2, 1, 3), rider(3, 2, 4), rider(4, 2, 5)]),
        ]);
        let s = scheduler();
        let mut seen = Vec::new();
        for _ in 0..20 {
            for (_, outcome) in s.tick(&mut state).unwrap() {
                if let StepOutcome::Serviced { boarded, .. } = outcome {
                    seen.extend(boarded);
                }
            }
            let car = &state.elevators()[0];
            assert!(car.passenger_count() <= car.capacity());
        }
        seen.sort();
        assert_eq!(seen, vec![PassengerId(1), PassengerId(2), PassengerId(3), PassengerId(4)]);
        assert_eq!(state.elevators()[0].passenger_count(), 0);
    }
}
