//! Directional sweep: keep going the way you are going.

use lift_core::{Direction, Floor};
use lift_fleet::Elevator;

use crate::selector::{candidate_stops, sweep_down, sweep_up};
use crate::TargetSelector;

/// The default route policy.
///
/// - Travelling up: the nearest stop above; if there is none, the lowest
///   stop anywhere.
/// - Travelling down: the nearest stop below; if there is none, the highest
///   stop anywhere.
/// - Idle: up if the mean of all stops lies above the current floor,
///   otherwise down.
///
/// A car therefore only reverses once its current side is exhausted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepSelector;

impl TargetSelector for SweepSelector {
    fn next_target(&self, car: &Elevator) -> Option<Floor> {
        let stops = candidate_stops(car);
        if stops.is_empty() {
            return None;
        }
        let here = car.current_floor();
        let heading_up = match car.direction() {
            Direction::Up   => true,
            Direction::Down => false,
            Direction::Idle => mean_is_above(&stops, here),
        };
        if heading_up { sweep_up(&stops, here) } else { sweep_down(&stops, here) }
    }
}

/// `mean(stops) > here`, compared exactly as `sum > here * len`.
fn mean_is_above(stops: &[Floor], here: Floor) -> bool {
    let sum: u64 = stops.iter().map(|f| f.0 as u64).sum();
    sum > here.0 as u64 * stops.len() as u64
}
