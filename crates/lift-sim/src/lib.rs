//! `lift-sim` — the elevator fleet simulator facade.
//!
//! # Two entry points, one lock
//!
//! ```text
//! submit_call(floor, dir)                tick()
//!   validate floor + direction             ① expire lapsed floor requests
//!   draw a destination (SimRng)            ② step every car in fleet order
//!   ┌── FleetStore::transact ──┐              (board, alight, retarget, move)
//!   │ allocate passenger id    │           ③ observer hooks, clock advance
//!   │ register floor request   │
//!   │ score fleet, pick winner │           ①–② run inside one
//!   │ queue rider, retarget    │           FleetStore::transact
//!   └──────────────────────────┘
//! ```
//!
//! Calls and ticks interleave only between whole critical sections, so a
//! caller never sees a half-dispatched call or a half-applied tick.
//!
//! # Quick-start
//!
//! ```rust
//! use lift_core::FleetConfig;
//! use lift_sim::{CallOutcome, SimBuilder};
//!
//! let sim = SimBuilder::new(FleetConfig::default()).seed(7).build()?;
//! let outcome = sim.submit_call(5, "up")?;
//! assert!(matches!(outcome, CallOutcome::Assigned { .. }));
//!
//! for _ in 0..4 {
//!     sim.tick()?;
//! }
//! # Ok::<(), lift_core::LiftError>(())
//! ```

pub mod builder;
pub mod observer;
pub mod report;
pub mod sim;
pub mod ticker;


pub use builder::SimBuilder;
pub use observer::{NoopObserver, SimObserver};
pub use report::{CallOutcome, TickReport};
pub use sim::Sim;
pub use ticker::Ticker;
