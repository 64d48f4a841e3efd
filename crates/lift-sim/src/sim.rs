//! The `Sim` struct: call handling and the tick loop.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use lift_core::{
    Building, CallDirection, ElevatorId, FleetConfig, Floor, LiftResult, SimClock, SimRng, Tick,
};
use lift_dispatch::{DispatchPlanner, HallCall, generate_target_floor};
use lift_fleet::{Elevator, FleetStore, FloorRequest, Passenger};
use lift_motion::MotionScheduler;
use lift_route::{SweepSelector, TargetSelector};
use tracing::{info, warn};

use crate::{CallOutcome, NoopObserver, SimObserver, TickReport};

/// The elevator fleet simulator.
///
/// `Sim` is `Send + Sync`; share it behind an `Arc` between whatever accepts
/// calls and whatever drives the clock (a [`Ticker`][crate::Ticker] or your
/// own loop).  All fleet state lives in one [`FleetStore`]; the RNG and the
/// clock each sit behind their own small mutex and are never acquired
/// while the fleet lock is held.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<S: TargetSelector + Clone = SweepSelector> {
    pub(crate) config:   FleetConfig,
    pub(crate) building: Building,
    pub(crate) fleet:    FleetStore,
    pub(crate) planner:  DispatchPlanner<S>,
    pub(crate) motion:   MotionScheduler<S>,
    pub(crate) rng:      Mutex<SimRng>,
    pub(crate) clock:    Mutex<SimClock>,
}

impl<S: TargetSelector + Clone> Sim<S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig {
        &self.config
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    /// The underlying store, for callers that need a custom transaction.
    pub fn fleet(&self) -> &FleetStore {
        &self.fleet
    }

    pub fn planner(&self) -> &DispatchPlanner<S> {
        &self.planner
    }

    /// The tick that the next call to [`tick`][Self::tick] will process.
    pub fn current_tick(&self) -> Tick {
        lock_or_recover(&self.clock, "clock").current_tick
    }

    pub fn clock(&self) -> SimClock {
        lock_or_recover(&self.clock, "clock").clone()
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    /// Snapshot of every car, in fleet order.
    pub fn list_elevators(&self) -> Vec<Elevator> {
        self.fleet.elevators()
    }

    /// Snapshot of one car.
    ///
    /// # Errors
    /// `LiftError::ElevatorNotFound` for an unknown id.
    pub fn get_elevator(&self, id: ElevatorId) -> LiftResult<Elevator> {
        self.fleet.elevator(id)
    }

    /// Floor requests that have not yet lapsed.
    pub fn list_floor_requests(&self) -> Vec<FloorRequest> {
        self.fleet.floor_requests(Instant::now())
    }

    // ── Calls ─────────────────────────────────────────────────────────────

    /// Handle a hall call from raw input.
    ///
    /// # Errors
    /// `LiftError::InvalidFloor` or `LiftError::InvalidDirection`.  A call
    /// no car can take is not an error; it comes back as
    /// [`CallOutcome::Dropped`].
    pub fn submit_call(&self, floor: i64, direction: &str) -> LiftResult<CallOutcome> {
        self.submit_call_with(floor, direction, &mut NoopObserver)
    }

    /// [`submit_call`][Self::submit_call], reporting the outcome to `observer`.
    pub fn submit_call_with<O: SimObserver>(
        &self,
        floor:     i64,
        direction: &str,
        observer:  &mut O,
    ) -> LiftResult<CallOutcome> {
        let floor     = self.building.floor(floor)?;
        let direction = direction.parse::<CallDirection>()?;
        let outcome   = self.dispatch_call(HallCall::new(floor, direction))?;
        observer.on_call(&outcome);
        Ok(outcome)
    }

    /// A call from a random floor in a direction that floor allows.
    pub fn submit_random_call(&self) -> LiftResult<CallOutcome> {
        let call = {
            let mut rng = lock_or_recover(&self.rng, "rng");
            let floor = Floor(rng.gen_range(self.building.range()));
            let direction = if floor == self.building.lowest() {
                CallDirection::Up
            } else if floor == self.building.highest() {
                CallDirection::Down
            } else if rng.gen_bool(0.5) {
                CallDirection::Up
            } else {
                CallDirection::Down
            };
            HallCall::new(floor, direction)
        };
        self.dispatch_call(call)
    }

    fn dispatch_call(&self, call: HallCall) -> LiftResult<CallOutcome> {
        let destination = {
            let mut rng = lock_or_recover(&self.rng, "rng");
            generate_target_floor(&self.building, call.floor, call.direction, &mut rng)
        };
        let now = Instant::now();
        let ttl = self.config.floor_request_ttl();

        let outcome = self.fleet.transact(|state| -> LiftResult<CallOutcome> {
            let passenger = Passenger::new(state.allocate_passenger_id(), call.floor, destination);
            state
                .floor_requests_mut()
                .register(FloorRequest::new(call.floor, call.direction), now, ttl);
            Ok(match self.planner.dispatch(state, passenger, &call)? {
                Some((elevator, score)) => CallOutcome::Assigned { passenger, elevator, score },
                None                    => CallOutcome::Dropped { passenger },
            })
        })?;

        match &outcome {
            CallOutcome::Assigned { passenger, elevator, score } => info!(
                %call, passenger = %passenger.id, destination = %passenger.target_floor,
                car = %elevator, %score, "call assigned"
            ),
            CallOutcome::Dropped { passenger } => warn!(
                %call, passenger = %passenger.id, "no car can take the call; dropped"
            ),
        }
        Ok(outcome)
    }

    // ── Manual override ───────────────────────────────────────────────────

    /// Send a car to `floor`.
    ///
    /// Riders aboard whose destination is `floor` are removed from the car
    /// immediately, then the car's target becomes `floor`.  The floor is
    /// checked before the id.
    ///
    /// # Errors
    /// `LiftError::InvalidFloor`, or `LiftError::ElevatorNotFound` (nothing
    /// changes).
    pub fn send_to_floor(&self, id: ElevatorId, floor: i64) -> LiftResult<()> {
        let floor = self.building.floor(floor)?;
        let removed = self.fleet.transact(|state| {
            state.update(id, |car| {
                let removed = car.remove_passengers_bound_for(floor);
                car.set_target(Some(floor));
                removed.len()
            })
        })?;
        info!(car = %id, %floor, removed, "manual override");
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance every car by one step.
    pub fn tick(&self) -> LiftResult<TickReport> {
        self.tick_with(&mut NoopObserver)
    }

    /// [`tick`][Self::tick] with observer hooks.
    ///
    /// Expiry and all car steps happen in one fleet transaction.  Observer
    /// hooks run afterwards, then the clock advances.  On error the clock
    /// stays where it was.
    pub fn tick_with<O: SimObserver>(&self, observer: &mut O) -> LiftResult<TickReport> {
        let mut clock = lock_or_recover(&self.clock, "clock");
        let tick = clock.current_tick;
        observer.on_tick_start(tick);

        let now = Instant::now();
        let (steps, expired, snapshot) = self.fleet.transact(|state| -> LiftResult<_> {
            let expired = state.floor_requests_mut().expire(now);
            let steps   = self.motion.tick(state)?;
            Ok((steps, expired, state.elevators().to_vec()))
        })?;

        for (id, outcome) in &steps {
            observer.on_step(tick, *id, outcome);
        }
        let report = TickReport::new(tick, steps, expired);
        observer.on_tick_end(tick, &report);
        observer.on_snapshot(tick, &snapshot);

        clock.advance();
        Ok(report)
    }

    /// Run exactly `n` ticks.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&self, n: u64, observer: &mut O) -> LiftResult<()> {
        for _ in 0..n {
            self.tick_with(observer)?;
        }
        Ok(())
    }
}

/// Lock a side mutex, recovering from poisoning.  Neither the RNG nor the
/// clock can be left inconsistent by a panic.
fn lock_or_recover<'a, T>(mutex: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
        warn!(lock = what, "lock was poisoned by a panicking holder; recovering");
        mutex.clear_poison();
        poisoned.into_inner()
    })
}
