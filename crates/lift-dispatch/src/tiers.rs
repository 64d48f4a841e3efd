//! The stock dispatch tiers, best first.

use lift_core::{CallDirection, FleetConfig, Floor};
use lift_fleet::Elevator;

use crate::{HallCall, ScoringRule};

/// Extra cost added by [`LastResort`] so it never undercuts a real fit.
pub const LAST_RESORT_PENALTY: u32 = 10;

/// The default tier list for `config`.
pub fn default_rules(config: &FleetConfig) -> Vec<Box<dyn ScoringRule>> {
    vec![
        Box::new(EnRoute),
        Box::new(IdleCar),
        Box::new(Detour { max_extra: config.max_detour_floors }),
        Box::new(LastResort {
            crowding_limit: config.crowding_limit,
            penalty:        LAST_RESORT_PENALTY,
        }),
    ]
}

// ── 100: en route ─────────────────────────────────────────────────────────────

/// A moving car already heading the caller's way that will pass the pickup
/// floor before reaching its target.  A moving car without a target counts
/// as heading on indefinitely.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnRoute;

impl ScoringRule for EnRoute {
    fn name(&self) -> &'static str { "en-route" }
    fn priority(&self) -> u32 { 100 }

    fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32> {
        if !car.is_moving() || car.direction() != call.direction.travel() {
            return None;
        }
        let here = car.current_floor();
        let on_the_way = match (call.direction, car.target_floor()) {
            (CallDirection::Up,   Some(t)) => here <= call.floor && call.floor <= t,
            (CallDirection::Down, Some(t)) => t <= call.floor && call.floor <= here,
            (CallDirection::Up,   None)    => here <= call.floor,
            (CallDirection::Down, None)    => call.floor <= here,
        };
        on_the_way.then(|| here.distance(call.floor))
    }
}

// ── 90: idle ──────────────────────────────────────────────────────────────────

/// A car with nothing to do.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleCar;

impl ScoringRule for IdleCar {
    fn name(&self) -> &'static str { "idle" }
    fn priority(&self) -> u32 { 90 }

    fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32> {
        car.target_floor()
            .is_none()
            .then(|| car.current_floor().distance(call.floor))
    }
}

// ── 70: detour ────────────────────────────────────────────────────────────────

/// A stationary car whose trip to its current target grows by at most
/// `max_extra` floors if it stops for the caller first.
#[derive(Debug, Clone, Copy)]
pub struct Detour {
    pub max_extra: u32,
}

impl Detour {
    /// Extra floors travelled going `here → pickup → target` instead of
    /// `here → target`.  Without a target this is the distance to the pickup.
    pub fn extra_floors(here: Floor, pickup: Floor, target: Option<Floor>) -> u32 {
        match target {
            Some(t) => (here.distance(pickup) + pickup.distance(t)).saturating_sub(here.distance(t)),
            None    => here.distance(pickup),
        }
    }
}

impl ScoringRule for Detour {
    fn name(&self) -> &'static str { "detour" }
    fn priority(&self) -> u32 { 70 }

    fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32> {
        if car.is_moving() {
            return None;
        }
        let extra = Self::extra_floors(car.current_floor(), call.floor, car.target_floor());
        (extra <= self.max_extra).then_some(extra)
    }
}

// ── 50: last resort ───────────────────────────────────────────────────────────

/// Any car that is not crowded, at a flat penalty on top of the distance.
#[derive(Debug, Clone, Copy)]
pub struct LastResort {
    pub crowding_limit: u32,
    pub penalty:        u32,
}

impl ScoringRule for LastResort {
    fn name(&self) -> &'static str { "last-resort" }
    fn priority(&self) -> u32 { 50 }

    fn cost(&self, car: &Elevator, call: &HallCall) -> Option<u32> {
        (car.passenger_count() < self.crowding_limit)
            .then(|| car.current_floor().distance(call.floor) + self.penalty)
    }
}
