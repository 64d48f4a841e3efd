//! Core fleet storage: `FleetState` (the data) and `FleetStore` (the lock).
//!
//! # Why two structs?
//!
//! `FleetState` is plain data with `&mut self` methods and no locking, so a
//! caller that already holds the lock can run an entire read-modify-write
//! sequence against it.  `FleetStore` owns the single mutex and exposes the
//! per-call operations (each one critical section) plus [`FleetStore::transact`]
//! for sequences that must not interleave with anything else:
//!
//! ```ignore
//! // dispatch (simplified):
//! store.transact(|fleet| {
//!     let winner = planner.select(fleet.elevators(), &call)?;
//!     fleet.update(winner, |car| planner.assign(car, rider))
//! })
//! ```
//!
//! Nothing inside the critical section performs I/O or sleeps.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use lift_core::{ElevatorId, LiftError, LiftResult, PassengerId};

use crate::{Elevator, FloorRequest, FloorRequestBoard};

// ── FleetState ────────────────────────────────────────────────────────────────

/// Everything the fleet store guards.
///
/// `elevators[i].id() == ElevatorId(i)` for every car; the vector never grows
/// or shrinks after construction.
#[derive(Debug, Clone)]
pub struct FleetState {
    elevators:      Vec<Elevator>,
    next_passenger: PassengerId,
    floor_requests: FloorRequestBoard,
}

impl FleetState {
    /// Wrap a fleet.  Cars are re-indexed only by position, so `elevators`
    /// must already be in id order.
    ///
    /// # Panics
    /// If any car's id does not match its position.
    pub fn new(elevators: Vec<Elevator>) -> Self {
        for (i, car) in elevators.iter().enumerate() {
            assert_eq!(car.id().index(), i, "elevator ids must match fleet order");
        }
        Self {
            elevators,
            next_passenger: PassengerId::FIRST,
            floor_requests: FloorRequestBoard::new(),
        }
    }

    /// Read-only view of every car in fleet order.
    #[inline]
    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    pub fn elevator(&self, id: ElevatorId) -> LiftResult<&Elevator> {
        self.elevators.get(id.index()).ok_or(LiftError::ElevatorNotFound(id))
    }

    /// Swap in a whole new state for the car with `elevator.id()`.
    pub fn replace(&mut self, elevator: Elevator) -> LiftResult<()> {
        let id   = elevator.id();
        let slot = self.elevators.get_mut(id.index()).ok_or(LiftError::ElevatorNotFound(id))?;
        *slot = elevator;
        Ok(())
    }

    /// Apply `f` to a copy of car `id` and swap the copy in afterwards.
    ///
    /// The stored car is untouched until `f` returns, so a panic inside `f`
    /// leaves the previous state intact.
    pub fn update<T>(&mut self, id: ElevatorId, f: impl FnOnce(&mut Elevator) -> T) -> LiftResult<T> {
        let mut draft = self.elevator(id)?.clone();
        let out = f(&mut draft);
        self.replace(draft)?;
        Ok(out)
    }

    // ── Passenger-id counter ──────────────────────────────────────────────

    /// The id the next allocation will return.
    #[inline]
    pub fn peek_next_passenger_id(&self) -> PassengerId {
        self.next_passenger
    }

    #[inline]
    pub fn increment_passenger_id(&mut self) {
        self.next_passenger = self.next_passenger.next();
    }

    /// Return the next id and advance the counter.  Ids are never reused.
    pub fn allocate_passenger_id(&mut self) -> PassengerId {
        let id = self.next_passenger;
        self.increment_passenger_id();
        id
    }

    // ── Floor requests ────────────────────────────────────────────────────

    #[inline]
    pub fn floor_requests(&self) -> &FloorRequestBoard {
        &self.floor_requests
    }

    #[inline]
    pub fn floor_requests_mut(&mut self) -> &mut FloorRequestBoard {
        &mut self.floor_requests
    }
}

// ── FleetStore ────────────────────────────────────────────────────────────────

/// Concurrency-safe fleet registry.  Share it behind an `Arc`.
#[derive(Debug)]
pub struct FleetStore {
    inner: Mutex<FleetState>,
}

impl FleetStore {
    pub fn new(elevators: Vec<Elevator>) -> Self {
        Self { inner: Mutex::new(FleetState::new(elevators)) }
    }

    /// Run `f` with exclusive access to the whole fleet.
    ///
    /// This is the only way to perform a read-modify-write sequence that
    /// must appear atomic to other callers.  `f` must not block.
    pub fn transact<T>(&self, f: impl FnOnce(&mut FleetState) -> T) -> T {
        let mut guard = self.lock();
        f(&mut guard)
    }

    /// Deep copies of every car, in fleet order.
    pub fn elevators(&self) -> Vec<Elevator> {
        self.lock().elevators.clone()
    }

    /// Deep copy of one car.
    pub fn elevator(&self, id: ElevatorId) -> LiftResult<Elevator> {
        self.lock().elevator(id).cloned()
    }

    /// Atomically replace the stored state of `elevator.id()`.
    pub fn replace(&self, elevator: Elevator) -> LiftResult<()> {
        self.lock().replace(elevator)
    }

    pub fn elevator_count(&self) -> usize {
        self.lock().elevators.len()
    }

    pub fn peek_next_passenger_id(&self) -> PassengerId {
        self.lock().peek_next_passenger_id()
    }

    pub fn increment_passenger_id(&self) {
        self.lock().increment_passenger_id();
    }

    pub fn allocate_passenger_id(&self) -> PassengerId {
        self.lock().allocate_passenger_id()
    }

    pub fn register_floor_request(&self, request: FloorRequest, now: Instant, ttl: Duration) {
        self.lock().floor_requests.register(request, now, ttl);
    }

    /// Prune lapsed requests and return the ones still live at `now`.
    pub fn floor_requests(&self, now: Instant) -> Vec<FloorRequest> {
        let mut guard = self.lock();
        guard.floor_requests.expire(now);
        guard.floor_requests.active(now)
    }

    pub fn expire_floor_requests(&self, now: Instant) -> usize {
        self.lock().floor_requests.expire(now)
    }

    fn lock(&self) -> MutexGuard<'_, FleetState> {
        // Cars are only ever written by whole-value swaps, so a writer that
        // panicked cannot have left a half-updated car behind.
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("fleet store lock was poisoned by a panicking writer; recovering");
            self.inner.clear_poison();
            poisoned.into_inner()
        })
    }
}
