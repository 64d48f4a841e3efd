//! `lift-core` — foundational types for the lift fleet simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and only a handful of external ones (`rand`,
//! `thiserror`, `serde`, `toml`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ElevatorId`, `PassengerId`                           |
//! | [`floor`]       | `Floor`, `Building` (floor bounds + validation)       |
//! | [`direction`]   | `Direction` (Up/Down/Idle), `CallDirection` (Up/Down) |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `FleetConfig` + TOML loading                          |
//! | [`error`]       | `LiftError`, `LiftResult`                             |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use direction::{CallDirection, Direction};
pub use error::{LiftError, LiftResult};
pub use floor::{Building, Floor};
pub use ids::{ElevatorId, PassengerId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
