//! The `ScoringRule` trait — one dispatch tier.

use lift_fleet::Elevator;

use crate::{HallCall, Score};

/// One tier of the dispatch heuristic.
///
/// A rule either accepts a car for a call and returns its cost, or declines
/// with `None`.  Rules are consulted in order and the first acceptance
/// decides the car's [`Score`].
///
/// Rules only read the car they are given, so they must be `Send + Sync`
/// and free of interior state.
///
/// # Example
///
/// ```rust
/// use lift_dispatch::{HallCall, ScoringRule};
/// use lift_fleet::Elevator;
///
/// /// Prefer empty cars regardless of distance.
/// struct EmptyCar;
///
/// impl ScoringRule for EmptyCar {
///     fn name(&self) -> &'static str { "empty" }
///     fn priority(&self) -> u32 { 95 }
///     fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32> {
///         (car.passenger_count() == 0).then(|| car.current_floor().distance(call.floor))
///     }
/// }
/// ```
pub trait ScoringRule: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// Priority given to every car this rule accepts.
    fn priority(&self) -> u32;

    /// Cost of sending `car` to `call`, or `None` if this tier does not
    /// apply.
    fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32>;

    /// The full score, when the rule applies.
    fn evaluate(&self, car: &Elevator, call: &HallCall) -> Option<Score> {
        self.cost(car, call).map(|cost| Score::new(self.priority(), cost))
    }
}
