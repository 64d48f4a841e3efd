//! `DispatchPlanner` — scores the fleet for one call and assigns the winner.

use lift_core::{ElevatorId, FleetConfig, LiftResult};
use lift_fleet::{Elevator, FleetState, Passenger};
use lift_route::TargetSelector;
use tracing::{debug, trace};

use crate::{HallCall, Score, ScoringRule, default_rules};

/// Runs a call through the ordered tier list and hands the rider to the
/// best car.
///
/// The selector `S` is used to recompute the winning car's target after
/// the rider is queued.
pub struct DispatchPlanner<S: TargetSelector> {
    rules:    Vec<Box<dyn ScoringRule>>,
    selector: S,
}

impl<S: TargetSelector> DispatchPlanner<S> {
    /// Planner with the stock tiers configured from `config`.
    pub fn new(config: &FleetConfig, selector: S) -> Self {
        Self::with_rules(default_rules(config), selector)
    }

    /// Planner with a custom tier list, consulted in the given order.
    pub fn with_rules(rules: Vec<Box<dyn ScoringRule>>, selector: S) -> Self {
        Self { rules, selector }
    }

    pub fn rules(&self) -> &[Box<dyn ScoringRule>] {
        &self.rules
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    /// Score of `car` for `call`: the first tier that accepts it.  Full cars
    /// are never scored.
    pub fn evaluate(&self, car: &Elevator, call: &HallCall) -> Option<Score> {
        if car.is_full() {
            return None;
        }
        self.rules.iter().find_map(|rule| {
            let score = rule.evaluate(car, call)?;
            trace!(car = %car.id(), rule = rule.name(), %score, "tier matched");
            Some(score)
        })
    }

    /// The best car in `cars` for `call`.  Ties go to the car that appears
    /// first.
    pub fn select(&self, cars: &[Elevator], call: &HallCall) -> Option<(ElevatorId, Score)> {
        let mut best: Option<(ElevatorId, Score)> = None;
        for car in cars {
            let Some(score) = self.evaluate(car, call) else { continue };
            match best {
                Some((_, leader)) if !score.beats(&leader) => {}
                _ => best = Some((car.id(), score)),
            }
        }
        best
    }

    /// Queue `rider` on `car` and point the car at its next stop.  Returns
    /// `false` if the rider was already queued there.
    pub fn assign(&self, car: &mut Elevator, rider: Passenger) -> bool {
        if !car.add_pending_pickup(rider) {
            return false;
        }
        car.set_target(self.selector.next_target(car));
        true
    }

    /// Select and assign in one pass over `state`.  Call this inside
    /// [`FleetStore::transact`][lift_fleet::FleetStore::transact] so nobody
    /// can observe the fleet between the choice and the assignment.
    ///
    /// Returns `Ok(None)` when no car qualifies; the rider is then dropped.
    pub fn dispatch(
        &self,
        state: &mut FleetState,
        rider: Passenger,
        call:  &HallCall,
    ) -> LiftResult<Option<(ElevatorId, Score)>> {
        let Some((id, score)) = self.select(state.elevators(), call) else {
            debug!(%call, passenger = %rider.id, "no car qualifies");
            return Ok(None);
        };
        state.update(id, |car| self.assign(car, rider))?;
        debug!(%call, passenger = %rider.id, car = %id, %score, "call assigned");
        Ok(Some((id, score)))
    }
}
