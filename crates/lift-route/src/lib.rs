//! `lift-route` — picks the next stop for one car.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`selector`] | `TargetSelector` trait, `candidate_stops`                     |
//! | [`sweep`]    | `SweepSelector` — finish the current side before reversing    |
//! | [`nearest`]  | `NearestSelector` — sweep while moving, closest stop when idle |
//!
//! Both the dispatch planner and the motion scheduler call the selector
//! through the trait, so the route policy can be swapped without touching
//! either of them.

pub mod nearest;
pub mod selector;
pub mod sweep;


pub use nearest::NearestSelector;
pub use selector::{TargetSelector, candidate_stops};
pub use sweep::SweepSelector;
