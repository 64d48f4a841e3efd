//! `lift-fleet` — fleet entities and the shared fleet store.
//!
//! # Crate layout
//!
//! | Module            | Contents                                                   |
//! |-------------------|------------------------------------------------------------|
//! | [`passenger`]     | `Passenger` — one rider's pickup and destination           |
//! | [`elevator`]      | `Elevator`, `ElevatorStatus` — one car and its riders      |
//! | [`floor_request`] | `FloorRequest`, `FloorRequestBoard` — expiring call lamps  |
//! | [`store`]         | `FleetStore`, `FleetState` — the single-lock registry      |
//! | [`builder`]       | `FleetBuilder` (fluent construction)                       |
//!
//! # Isolation model
//!
//! Every store operation takes the one mutex guarding [`FleetState`].  Reads
//! hand out deep copies, so nothing a reader holds can change underneath it.
//! Writers either swap a whole elevator (`replace`) or run a read-modify-write
//! sequence inside [`FleetStore::transact`], during which no other operation
//! can interleave.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `Elevator`, `Passenger`, `FloorRequest`. |

pub mod builder;
pub mod elevator;
pub mod floor_request;
pub mod passenger;
pub mod store;


pub use builder::FleetBuilder;
pub use elevator::{Elevator, ElevatorStatus};
pub use floor_request::{FloorRequest, FloorRequestBoard};
pub use passenger::Passenger;
pub use store::{FleetState, FleetStore};
