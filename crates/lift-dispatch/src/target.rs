//! Destination floors for newly created riders.

use lift_core::{Building, CallDirection, Floor, SimRng};

/// Draw a destination for a rider calling from `floor` in `direction`.
///
/// Up draws uniformly from `(floor, top]`, down from `[1, floor)`.  When the
/// directional range is empty (up at the top, down at the bottom) the draw
/// is uniform over every floor except `floor`.  The result never equals
/// `floor`.
pub fn generate_target_floor(
    building:  &Building,
    floor:     Floor,
    direction: CallDirection,
    rng:       &mut SimRng,
) -> Floor {
    let lowest  = building.lowest().0;
    let highest = building.highest().0;
    match direction {
        CallDirection::Up   if floor.0 < highest => Floor(rng.gen_range(floor.0 + 1..=highest)),
        CallDirection::Down if floor.0 > lowest  => Floor(rng.gen_range(lowest..floor.0)),
        _ => {
            // One fewer slot than floors; skip over the caller's own floor.
            let r = rng.gen_range(lowest..highest);
            Floor(if r >= floor.0 { r + 1 } else { r })
        }
    }
}
