//! Sweep while travelling, closest stop when idle.

use lift_core::{Direction, Floor};
use lift_fleet::Elevator;

use crate::selector::{candidate_stops, sweep_down, sweep_up};
use crate::TargetSelector;

/// Same as [`SweepSelector`][crate::SweepSelector] for a moving car, but an
/// idle car heads for the closest stop instead of the side with the higher
/// mean.  Equidistant stops resolve to the lower floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestSelector;

impl TargetSelector for NearestSelector {
    fn next_target(&self, car: &Elevator) -> Option<Floor> {
        let stops = candidate_stops(car);
        let here  = car.current_floor();
        match car.direction() {
            _ if stops.is_empty() => None,
            Direction::Up   => sweep_up(&stops, here),
            Direction::Down => sweep_down(&stops, here),
            Direction::Idle => stops.iter().copied().min_by_key(|f| f.distance(here)),
        }
    }
}
