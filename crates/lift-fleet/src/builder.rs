//! Fluent builder for constructing a [`FleetStore`].
//!
//! # Usage
//!
//! ```rust
//! use lift_core::Floor;
//! use lift_fleet::FleetBuilder;
//!
//! let store = FleetBuilder::new(4, /*capacity=*/ 8).build();
//! let cars = store.elevators();
//!
//! assert_eq!(cars.len(), 4);
//! assert!(cars.iter().all(|c| c.current_floor() == Floor::LOBBY));
//! ```

use lift_core::{ElevatorId, Floor};

use crate::{Elevator, FleetStore};

/// Fluent builder for [`FleetStore`].
///
/// Every car starts parked at the same floor (the lobby unless overridden),
/// idle, with doors closed and nobody aboard.
pub struct FleetBuilder {
    count:          u32,
    capacity:       u32,
    starting_floor: Floor,
}

impl FleetBuilder {
    /// A fleet of `count` cars holding at most `capacity` riders each.
    pub fn new(count: u32, capacity: u32) -> Self {
        Self { count, capacity, starting_floor: Floor::LOBBY }
    }

    /// Park every car on `floor` instead of the lobby.
    pub fn starting_floor(mut self, floor: Floor) -> Self {
        self.starting_floor = floor;
        self
    }

    /// The cars this builder would create, in fleet order.
    pub fn elevators(&self) -> Vec<Elevator> {
        (0..self.count)
            .map(|i| Elevator::new(ElevatorId(i), self.starting_floor, self.capacity))
            .collect()
    }

    pub fn build(self) -> FleetStore {
        FleetStore::new(self.elevators())
    }
}
