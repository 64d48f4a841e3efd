//! Simulator error type.
//!
//! The three domain kinds (`InvalidFloor`, `InvalidDirection`,
//! `ElevatorNotFound`) are reported synchronously to whoever made the
//! offending call.  The remaining variants cover configuration loading.

use thiserror::Error;

use crate::ElevatorId;

/// The error type shared by every `lift-*` crate.
#[derive(Debug, Error)]
pub enum LiftError {
    #[error("invalid floor {floor}: expected a floor in 1..={highest}")]
    InvalidFloor { floor: i64, highest: u32 },

    #[error("invalid direction {0:?}: expected \"up\" or \"down\"")]
    InvalidDirection(String),

    #[error("elevator {0} not found")]
    ElevatorNotFound(ElevatorId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lift-*` crates.
pub type LiftResult<T> = Result<T, LiftError>;
