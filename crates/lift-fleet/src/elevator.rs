//! One car of the fleet.

use std::fmt;

use lift_core::{Direction, ElevatorId, Floor, PassengerId};

use crate::Passenger;

/// What a car is doing right now.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElevatorStatus {
    /// Travelling between floors.
    Moving,
    /// Parked with doors closed and nothing to do.
    #[default]
    Stopped,
    /// Doors open: boarding, alighting, or a brief recalculation stop.
    Loading,
}

impl ElevatorStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ElevatorStatus::Moving  => "moving",
            ElevatorStatus::Stopped => "stopped",
            ElevatorStatus::Loading => "loading",
        }
    }
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single elevator car.
///
/// # Invariants
///
/// - `passengers.len() <= capacity`, and passenger ids are unique.
/// - `pending_pickup_floors` is always the sorted, deduplicated list of the
///   `pickup_floor`s in `pending_pickups`.  Every method that touches
///   `pending_pickups` refreshes it before returning.
///
/// Fields are private so the invariants cannot be broken from outside; use
/// the accessor and transition methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Elevator {
    id:                    ElevatorId,
    current_floor:         Floor,
    target_floor:          Option<Floor>,
    doors_open:            bool,
    direction:             Direction,
    status:                ElevatorStatus,
    capacity:              u32,
    passengers:            Vec<Passenger>,
    pending_pickups:       Vec<Passenger>,
    pending_pickup_floors: Vec<Floor>,
}

impl Elevator {
    /// A car parked at `floor`: no target, doors closed, idle, empty.
    pub fn new(id: ElevatorId, floor: Floor, capacity: u32) -> Self {
        Self {
            id,
            current_floor:         floor,
            target_floor:          None,
            doors_open:            false,
            direction:             Direction::Idle,
            status:                ElevatorStatus::Stopped,
            capacity,
            passengers:            Vec::new(),
            pending_pickups:       Vec::new(),
            pending_pickup_floors: Vec::new(),
        }
    }

    /// Place the car mid-journey.  Used when seeding a fleet from a snapshot
    /// and in tests.
    pub fn with_motion(
        mut self,
        status:    ElevatorStatus,
        direction: Direction,
        target:    Option<Floor>,
    ) -> Self {
        self.status     = status;
        self.direction  = direction;
        self.target_floor = target;
        self.doors_open = status == ElevatorStatus::Loading;
        self
    }

    /// Put riders aboard, skipping any beyond capacity or with a duplicate id.
    pub fn with_passengers(mut self, riders: impl IntoIterator<Item = Passenger>) -> Self {
        for rider in riders {
            self.add_passenger(rider);
        }
        self
    }

    /// Queue riders for pickup.
    pub fn with_pending(mut self, riders: impl IntoIterator<Item = Passenger>) -> Self {
        for rider in riders {
            self.add_pending_pickup(rider);
        }
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline] pub fn id(&self) -> ElevatorId { self.id }
    #[inline] pub fn current_floor(&self) -> Floor { self.current_floor }
    #[inline] pub fn target_floor(&self) -> Option<Floor> { self.target_floor }
    #[inline] pub fn doors_open(&self) -> bool { self.doors_open }
    #[inline] pub fn direction(&self) -> Direction { self.direction }
    #[inline] pub fn status(&self) -> ElevatorStatus { self.status }
    #[inline] pub fn capacity(&self) -> u32 { self.capacity }

    /// Riders currently aboard.
    #[inline]
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Riders assigned to this car but not yet boarded.
    #[inline]
    pub fn pending_pickups(&self) -> &[Passenger] {
        &self.pending_pickups
    }

    /// Sorted distinct pickup floors of `pending_pickups`.
    #[inline]
    pub fn pending_pickup_floors(&self) -> &[Floor] {
        &self.pending_pickup_floors
    }

    #[inline]
    pub fn passenger_count(&self) -> u32 {
        self.passengers.len() as u32
    }

    #[inline]
    pub fn remaining_capacity(&self) -> u32 {
        self.capacity.saturating_sub(self.passenger_count())
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.remaining_capacity() == 0
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.status == ElevatorStatus::Moving
    }

    /// `true` if a rider aboard wants to get off here, or someone is waiting
    /// here for this car and there is room to board them.  A full car with
    /// nobody getting off passes a waiting rider by.
    pub fn should_stop(&self) -> bool {
        let floor = self.current_floor;
        self.passengers.iter().any(|p| p.target_floor == floor)
            || (!self.is_full() && self.pending_pickup_floors.binary_search(&floor).is_ok())
    }

    // ── Rider bookkeeping ─────────────────────────────────────────────────

    /// Put `rider` directly aboard.  Returns `false` (and changes nothing)
    /// if the car is full or the id is already aboard.
    pub fn add_passenger(&mut self, rider: Passenger) -> bool {
        if self.is_full() || self.passengers.iter().any(|p| p.id == rider.id) {
            return false;
        }
        self.passengers.push(rider);
        true
    }

    /// Queue `rider` for pickup.  Returns `false` if the id is already queued.
    pub fn add_pending_pickup(&mut self, rider: Passenger) -> bool {
        if self.pending_pickups.iter().any(|p| p.id == rider.id) {
            return false;
        }
        self.pending_pickups.push(rider);
        self.refresh_pickup_floors();
        true
    }

    /// Board riders waiting at the current floor, in assignment order, until
    /// the car is full.  Riders who do not fit stay pending.
    pub fn board_at_current_floor(&mut self) -> Vec<Passenger> {
        let floor    = self.current_floor;
        let mut room = self.remaining_capacity() as usize;
        let mut boarded = Vec::new();

        self.pending_pickups.retain(|p| {
            if p.pickup_floor == floor && room > 0 {
                room -= 1;
                boarded.push(*p);
                false
            } else {
                true
            }
        });
        self.passengers.extend_from_slice(&boarded);
        self.refresh_pickup_floors();
        boarded
    }

    /// Remove every rider whose destination is the current floor.
    pub fn alight_at_current_floor(&mut self) -> Vec<Passenger> {
        self.remove_passengers_bound_for(self.current_floor)
    }

    /// Remove every rider aboard whose destination is `floor`.
    pub fn remove_passengers_bound_for(&mut self, floor: Floor) -> Vec<Passenger> {
        let (leaving, staying): (Vec<Passenger>, Vec<Passenger>) =
            self.passengers.iter().copied().partition(|p| p.target_floor == floor);
        self.passengers = staying;
        leaving
    }

    /// Ids of everyone aboard, in boarding order.
    pub fn passenger_ids(&self) -> Vec<PassengerId> {
        self.passengers.iter().map(|p| p.id).collect()
    }

    fn refresh_pickup_floors(&mut self) {
        let mut floors: Vec<Floor> = self.pending_pickups.iter().map(|p| p.pickup_floor).collect();
        floors.sort_unstable();
        floors.dedup();
        self.pending_pickup_floors = floors;
    }

    // ── Motion transitions ────────────────────────────────────────────────

    pub fn set_target(&mut self, target: Option<Floor>) {
        self.target_floor = target;
    }

    /// Move one floor toward the target.  Returns `(from, to)`, or `None`
    /// (no change) when there is no target or the car is already on it.
    pub fn move_toward_target(&mut self) -> Option<(Floor, Floor)> {
        let target = self.target_floor?;
        let from   = self.current_floor;
        if target == from {
            return None;
        }
        self.current_floor = from.step_toward(target);
        self.direction     = if target > from { Direction::Up } else { Direction::Down };
        self.status        = ElevatorStatus::Moving;
        self.doors_open    = false;
        Some((from, self.current_floor))
    }

    /// Doors open, direction cleared: boarding, alighting or a recalculation
    /// stop.
    pub fn open_doors(&mut self) {
        self.status     = ElevatorStatus::Loading;
        self.doors_open = true;
        self.direction  = Direction::Idle;
    }

    /// Doors closed and idle with nothing to do.
    pub fn park(&mut self) {
        self.status     = ElevatorStatus::Stopped;
        self.doors_open = false;
        self.direction  = Direction::Idle;
    }
}
