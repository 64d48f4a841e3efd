//! Unit tests for lift-dispatch.

use lift_core::{Building, CallDirection, Direction, ElevatorId, FleetConfig, Floor, PassengerId, SimRng};
use lift_fleet::{Elevator, ElevatorStatus, FleetState, Passenger};
use lift_route::SweepSelector;

use crate::{
    Detour, DispatchPlanner, EnRoute, HallCall, IdleCar, LastResort, Score, ScoringRule,
    generate_target_floor,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rider(id: u64, pickup: u32, target: u32) -> Passenger {
    Passenger::new(PassengerId(id), Floor(pickup), Floor(target))
}

fn up(floor: u32) -> HallCall {
    HallCall::new(Floor(floor), CallDirection::Up)
}

fn down(floor: u32) -> HallCall {
    HallCall::new(Floor(floor), CallDirection::Down)
}

fn parked(id: u32, floor: u32) -> Elevator {
    Elevator::new(ElevatorId(id), Floor(floor), 8)
}

fn moving(id: u32, floor: u32, direction: Direction, target: Option<u32>) -> Elevator {
    parked(id, floor).with_motion(ElevatorStatus::Moving, direction, target.map(Floor))
}

fn loading(id: u32, floor: u32, target: Option<u32>) -> Elevator {
    parked(id, floor).with_motion(ElevatorStatus::Loading, Direction::Idle, target.map(Floor))
}

/// `n` riders aboard, all bound for `target`.
fn carrying(car: Elevator, n: u64, target: u32) -> Elevator {
    let pickup = car.current_floor().0;
    car.with_passengers((0..n).map(|i| rider(1_000 + i, pickup, target)))
}

fn planner() -> DispatchPlanner<SweepSelector> {
    DispatchPlanner::new(&FleetConfig::default(), SweepSelector)
}

// ── Score ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod score {
    use super::*;

    #[test]
    fn priority_dominates_cost() {
        assert!(Score::new(90, 9).beats(&Score::new(70, 0)));
        assert!(!Score::new(70, 0).beats(&Score::new(90, 9)));
    }

    #[test]
    fn lower_cost_wins_within_priority() {
        assert!(Score::new(90, 1).beats(&Score::new(90, 2)));
    }

    #[test]
    fn equal_scores_do_not_beat() {
        assert!(!Score::new(50, 12).beats(&Score::new(50, 12)));
    }
}

// ── Tiers ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod en_route {
    use super::*;

    #[test]
    fn pickup_between_current_and_target_up() {
        let car = moving(0, 2, Direction::Up, Some(8));
        assert_eq!(EnRoute.cost(&car, &up(5)), Some(3));
        assert_eq!(EnRoute.cost(&car, &up(2)), Some(0));
        assert_eq!(EnRoute.cost(&car, &up(8)), Some(6));
    }

    #[test]
    fn pickup_between_current_and_target_down() {
        let car = moving(0, 8, Direction::Down, Some(3));
        assert_eq!(EnRoute.cost(&car, &down(5)), Some(3));
        assert_eq!(EnRoute.cost(&car, &down(2)), None);
        assert_eq!(EnRoute.cost(&car, &down(9)), None);
    }

    #[test]
    fn pickup_behind_the_car_is_rejected() {
        let car = moving(0, 5, Direction::Up, Some(8));
        assert_eq!(EnRoute.cost(&car, &up(4)), None);
    }

    #[test]
    fn opposite_direction_is_rejected() {
        let car = moving(0, 2, Direction::Up, Some(8));
        assert_eq!(EnRoute.cost(&car, &down(5)), None);
    }

    #[test]
    fn stationary_car_is_rejected() {
        let car = loading(0, 2, Some(8));
        assert_eq!(EnRoute.cost(&car, &up(5)), None);
    }

    #[test]
    fn moving_without_target_is_open_ended() {
        let car = moving(0, 4, Direction::Down, None);
        assert_eq!(EnRoute.cost(&car, &down(1)), Some(3));
        assert_eq!(EnRoute.cost(&car, &down(6)), None);
    }
}

#[cfg(test)]
mod idle_car {
    use super::*;

    #[test]
    fn accepts_only_cars_without_target() {
        assert_eq!(IdleCar.cost(&parked(0, 7), &down(3)), Some(4));
        assert_eq!(IdleCar.cost(&loading(0, 7, Some(9)), &down(3)), None);
    }
}

#[cfg(test)]
mod detour {
    use super::*;

    #[test]
    fn extra_floors_on_the_way_is_zero() {
        assert_eq!(Detour::extra_floors(Floor(2), Floor(4), Some(Floor(7))), 0);
    }

    #[test]
    fn extra_floors_past_the_target() {
        // 5 → 9 → 7 is 6 floors instead of 2.
        assert_eq!(Detour::extra_floors(Floor(5), Floor(9), Some(Floor(7))), 4);
    }

    #[test]
    fn without_target_is_plain_distance() {
        assert_eq!(Detour::extra_floors(Floor(5), Floor(3), None), 2);
    }

    #[test]
    fn rejects_detours_over_the_ceiling() {
        let rule = Detour { max_extra: 3 };
        let car = loading(0, 4, Some(6));
        // 4 → 7 → 6 is 4 floors instead of 2.
        assert_eq!(rule.cost(&car, &down(7)), Some(2));
        // 4 → 8 → 6 is 6 floors instead of 2.
        assert_eq!(rule.cost(&car, &down(8)), None);
        // 4 → 1 → 6 is 8 floors instead of 2.
        assert_eq!(rule.cost(&car, &up(1)), None);
    }

    #[test]
    fn ceiling_is_inclusive() {
        let rule = Detour { max_extra: 3 };
        assert_eq!(rule.cost(&parked(0, 5), &up(8)), Some(3));
        assert_eq!(rule.cost(&parked(0, 5), &up(9)), None);
    }

    #[test]
    fn moving_car_is_rejected() {
        let rule = Detour { max_extra: 3 };
        let car = moving(0, 4, Direction::Up, Some(6));
        assert_eq!(rule.cost(&car, &down(5)), None);
    }
}

#[cfg(test)]
mod last_resort {
    use super::*;

    #[test]
    fn adds_penalty_to_distance() {
        let rule = LastResort { crowding_limit: 6, penalty: 10 };
        assert_eq!(rule.cost(&moving(0, 3, Direction::Up, Some(9)), &down(1)), Some(12));
    }

    #[test]
    fn crowded_car_is_rejected() {
        let rule = LastResort { crowding_limit: 6, penalty: 10 };
        let five = carrying(moving(0, 3, Direction::Up, Some(9)), 5, 9);
        let six  = carrying(moving(0, 3, Direction::Up, Some(9)), 6, 9);
        assert!(rule.cost(&five, &down(1)).is_some());
        assert_eq!(rule.cost(&six, &down(1)), None);
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::*;

    #[test]
    fn first_matching_tier_wins() {
        // Moving up past 5 toward 8: qualifies at 100 even though 50 would too.
        let car = moving(0, 2, Direction::Up, Some(8));
        assert_eq!(planner().evaluate(&car, &up(5)), Some(Score::new(100, 3)));
    }

    #[test]
    fn idle_outranks_busy_cars() {
        let cars = vec![
            loading(0, 5, Some(6)),                     // detour 0 → (70, 0)
            moving(1, 9, Direction::Down, Some(7)),     // last resort → (50, 14)
            parked(2, 1),                               // idle, far → (90, 4)
        ];
        let (id, score) = planner().select(&cars, &up(5)).unwrap();
        assert_eq!(id, ElevatorId(2));
        assert_eq!(score, Score::new(90, 4));
    }

    #[test]
    fn cost_breaks_priority_ties() {
        let cars = vec![parked(0, 1), parked(1, 6), parked(2, 9)];
        assert_eq!(planner().select(&cars, &down(7)), Some((ElevatorId(1), Score::new(90, 1))));
    }

    #[test]
    fn fleet_order_breaks_full_ties() {
        let cars = vec![parked(0, 3), parked(1, 7), parked(2, 3)];
        assert_eq!(planner().select(&cars, &up(5)), Some((ElevatorId(0), Score::new(90, 2))));
    }

    #[test]
    fn full_car_is_never_selected() {
        let full = carrying(parked(0, 5), 8, 9).with_motion(ElevatorStatus::Stopped, Direction::Idle, None);
        assert!(full.is_full());
        assert_eq!(planner().evaluate(&full, &up(5)), None);
        let cars = vec![full, moving(1, 9, Direction::Up, Some(10))];
        assert_eq!(planner().select(&cars, &up(5)), Some((ElevatorId(1), Score::new(50, 14))));
    }

    #[test]
    fn nobody_qualifies() {
        let crowded = carrying(moving(0, 9, Direction::Up, Some(10)), 6, 10);
        assert_eq!(planner().select(&[crowded], &down(2)), None);
        assert_eq!(planner().select(&[], &down(2)), None);
    }

    #[test]
    fn custom_rules_replace_the_stock_tiers() {
        let p = DispatchPlanner::with_rules(vec![Box::new(LastResort { crowding_limit: 8, penalty: 0 })], SweepSelector);
        assert_eq!(p.rules().len(), 1);
        assert_eq!(p.evaluate(&parked(0, 2), &up(5)), Some(Score::new(50, 3)));
    }

    #[test]
    fn assign_queues_rider_and_retargets() {
        let mut car = parked(0, 1);
        assert!(planner().assign(&mut car, rider(1, 6, 9)));
        assert_eq!(car.pending_pickup_floors(), &[Floor(6)]);
        assert_eq!(car.target_floor(), Some(Floor(6)));
        assert!(!planner().assign(&mut car, rider(1, 6, 9)));
    }

    #[test]
    fn assign_at_current_floor_leaves_no_target() {
        let mut car = parked(0, 4);
        assert!(planner().assign(&mut car, rider(1, 4, 9)));
        assert_eq!(car.target_floor(), None);
        assert!(car.should_stop());
    }

    #[test]
    fn dispatch_updates_the_winner_only() {
        let mut state = FleetState::new(vec![parked(0, 1), parked(1, 8)]);
        let result = planner().dispatch(&mut state, rider(1, 7, 2), &down(7)).unwrap();
        assert_eq!(result, Some((ElevatorId(1), Score::new(90, 1))));
        assert_eq!(state.elevators()[1].target_floor(), Some(Floor(7)));
        assert_eq!(state.elevators()[0].target_floor(), None);
        assert!(state.elevators()[0].pending_pickups().is_empty());
    }

    #[test]
    fn dispatch_with_no_winner_changes_nothing() {
        let crowded = carrying(moving(0, 9, Direction::Up, Some(10)), 6, 10);
        let mut state = FleetState::new(vec![crowded.clone()]);
        assert_eq!(planner().dispatch(&mut state, rider(1, 2, 1), &down(2)).unwrap(), None);
        assert_eq!(state.elevators()[0], crowded);
    }
}

// ── Target generation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod target {
    use super::*;

    #[test]
    fn up_from_top_floor_wraps_to_any_other_floor() {
        let b = Building::new(10).unwrap();
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let t = generate_target_floor(&b, Floor(10), CallDirection::Up, &mut rng);
            assert!(b.contains(t));
            assert_ne!(t, Floor(10));
        }
    }

    #[test]
    fn down_from_ground_floor_wraps_to_any_other_floor() {
        let b = Building::new(10).unwrap();
        let mut rng = SimRng::new(7);
        for _ in 0..200 {
            let t = generate_target_floor(&b, Floor(1), CallDirection::Down, &mut rng);
            assert!(b.contains(t));
            assert_ne!(t, Floor(1));
        }
    }

    #[test]
    fn wrap_covers_every_other_floor() {
        let b = Building::new(4).unwrap();
        let mut rng = SimRng::new(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[generate_target_floor(&b, Floor(4), CallDirection::Up, &mut rng).0 as usize] = true;
        }
        assert_eq!(seen, [false, true, true, true, false]);
    }

    #[test]
    fn two_floor_building() {
        let b = Building::new(2).unwrap();
        let mut rng = SimRng::new(1);
        assert_eq!(generate_target_floor(&b, Floor(1), CallDirection::Up, &mut rng), Floor(2));
        assert_eq!(generate_target_floor(&b, Floor(1), CallDirection::Down, &mut rng), Floor(2));
        assert_eq!(generate_target_floor(&b, Floor(2), CallDirection::Up, &mut rng), Floor(1));
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn arb_car(id: u32) -> impl Strategy<Value = Elevator> {
        (1u32..=10, 0u8..3, proptest::option::of(1u32..=10), 0u64..=8).prop_map(move |(floor, kind, target, load)| {
            let target = target.filter(|&t| t != floor);
            let car = match (kind, target) {
                (0, Some(t)) => moving(id, floor, if t > floor { Direction::Up } else { Direction::Down }, Some(t)),
                (1, t)       => loading(id, floor, t),
                _            => parked(id, floor).with_motion(ElevatorStatus::Stopped, Direction::Idle, target.map(Floor)),
            };
            let dest = if floor == 10 { 1 } else { 10 };
            carrying(car, load, dest)
        })
    }

    fn arb_fleet() -> impl Strategy<Value = Vec<Elevator>> {
        (arb_car(0), arb_car(1), arb_car(2), arb_car(3)).prop_map(|(a, b, c, d)| vec![a, b, c, d])
    }

    fn arb_call() -> impl Strategy<Value = HallCall> {
        (1u32..=10, any::<bool>()).prop_map(|(f, is_up)| {
            HallCall::new(Floor(f), if is_up { CallDirection::Up } else { CallDirection::Down })
        })
    }

    proptest! {
        #[test]
        fn selection_is_deterministic(cars in arb_fleet(), call in arb_call()) {
            let p = planner();
            prop_assert_eq!(p.select(&cars, &call), p.select(&cars.clone(), &call));
        }

        #[test]
        fn full_cars_never_win(cars in arb_fleet(), call in arb_call()) {
            if let Some((id, _)) = planner().select(&cars, &call) {
                prop_assert!(!cars[id.index()].is_full());
            }
        }

        #[test]
        fn winner_is_at_least_as_good_as_everyone(cars in arb_fleet(), call in arb_call()) {
            let p = planner();
            if let Some((_, best)) = p.select(&cars, &call) {
                for car in &cars {
                    if let Some(score) = p.evaluate(car, &call) {
                        prop_assert!(!score.beats(&best));
                    }
                }
            }
        }

        #[test]
        fn generated_target_is_in_range(floors in 2u32..40, seed in any::<u64>(), pick in any::<u32>(), is_up in any::<bool>()) {
            let b = Building::new(floors).unwrap();
            let floor = Floor(1 + pick % floors);
            let dir = if is_up { CallDirection::Up } else { CallDirection::Down };
            let t = generate_target_floor(&b, floor, dir, &mut SimRng::new(seed));
            prop_assert!(b.contains(t));
            prop_assert_ne!(t, floor);
            match dir {
                CallDirection::Up   if floor < b.highest() => prop_assert!(t > floor),
                CallDirection::Down if floor > b.lowest()  => prop_assert!(t < floor),
                _ => {}
            }
        }
    }
}
