//! A single rider.

use lift_core::{Floor, PassengerId};

/// One rider, from the hall call that created it until it alights.
///
/// A passenger belongs to exactly one elevator at a time: first in its
/// `pending_pickups`, then in its `passengers` once boarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Passenger {
    pub id:           PassengerId,
    pub pickup_floor: Floor,
    pub target_floor: Floor,
}

impl Passenger {
    /// # Panics
    /// In debug builds, if `pickup_floor == target_floor`.
    pub fn new(id: PassengerId, pickup_floor: Floor, target_floor: Floor) -> Self {
        debug_assert_ne!(pickup_floor, target_floor, "rider {id} would not travel");
        Self { id, pickup_floor, target_floor }
    }

    /// `true` when the rider is heading up from the pickup floor.
    #[inline]
    pub fn is_going_up(&self) -> bool {
        self.target_floor > self.pickup_floor
    }
}
