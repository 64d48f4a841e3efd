//! `lift-motion` — advances each car by one step per tick.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`outcome`]   | `StepOutcome` — what one car did during one tick           |
//! | [`scheduler`] | `MotionScheduler` — the per-car transition and fleet sweep |
//!
//! # Design notes
//!
//! Cars never interact.  Each step reads and writes only the car it is
//! given, so the fleet sweep is a plain loop in fleet order and every car
//! goes through [`lift_fleet::FleetState::update`] (clone, step, swap).

pub mod outcome;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use outcome::StepOutcome;
pub use scheduler::MotionScheduler;
