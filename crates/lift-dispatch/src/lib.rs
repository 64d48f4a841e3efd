//! `lift-dispatch` — decides which car answers a hall call.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`call`]    | `HallCall` — a floor plus the requested travel direction         |
//! | [`score`]   | `Score` — `(priority, cost)` and the comparison between them     |
//! | [`rule`]    | `ScoringRule` trait                                              |
//! | [`tiers`]   | The four stock tiers: en route, idle, detour, last resort        |
//! | [`planner`] | `DispatchPlanner` — scores the fleet, picks a winner, assigns    |
//! | [`target`]  | `generate_target_floor` — random destination for a new rider     |
//!
//! # Design notes
//!
//! Scoring is a pure read of fleet snapshots.  Every car is run through the
//! ordered tier list and yields at most one [`Score`] (the first tier that
//! accepts it).  The winner is the highest priority, then the lowest cost,
//! then the earliest car in fleet order.  Only the assignment step mutates,
//! and it does so through [`lift_fleet::FleetState::update`] so a failure
//! leaves the car untouched.

pub mod call;
pub mod planner;
pub mod rule;
pub mod score;
pub mod target;
pub mod tiers;

#[cfg(test)]
mod tests;

pub use call::HallCall;
pub use planner::DispatchPlanner;
pub use rule::ScoringRule;
pub use score::Score;
pub use target::generate_target_floor;
pub use tiers::{Detour, EnRoute, IdleCar, LastResort, default_rules};
