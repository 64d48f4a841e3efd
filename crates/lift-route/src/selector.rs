//! The `TargetSelector` trait and the candidate set it works from.

use lift_core::Floor;
use lift_fleet::Elevator;

/// Pluggable next-stop policy.
///
/// Implementations look only at the car they are given: its position,
/// direction, pending pickups and the destinations of riders aboard.  They
/// never see the rest of the fleet.
///
/// # Thread safety
///
/// Selectors are shared between the call-handling path and the tick path,
/// so they must be `Send + Sync`.  Keep them stateless.
pub trait TargetSelector: Send + Sync {
    /// The floor `car` should head to next, or `None` when it has nothing to
    /// serve.  Never returns the car's current floor.
    fn next_target(&self, car: &Elevator) -> Option<Floor>;
}

/// Floors `car` still has to visit: pending pickup floors plus destinations
/// of riders aboard, without the current floor, sorted and deduplicated.
pub fn candidate_stops(car: &Elevator) -> Vec<Floor> {
    let here = car.current_floor();
    let mut stops: Vec<Floor> = car
        .pending_pickup_floors()
        .iter()
        .copied()
        .chain(car.passengers().iter().map(|p| p.target_floor))
        .filter(|&f| f != here)
        .collect();
    stops.sort_unstable();
    stops.dedup();
    stops
}

/// Nearest stop above `here`, wrapping to the lowest stop when nothing is
/// above.  `stops` must be sorted ascending and non-empty.
pub(crate) fn sweep_up(stops: &[Floor], here: Floor) -> Option<Floor> {
    stops.iter().copied().find(|&f| f > here).or_else(|| stops.first().copied())
}

/// Nearest stop below `here`, wrapping to the highest stop when nothing is
/// below.  `stops` must be sorted ascending and non-empty.
pub(crate) fn sweep_down(stops: &[Floor], here: Floor) -> Option<Floor> {
    stops.iter().rev().copied().find(|&f| f < here).or_else(|| stops.last().copied())
}
