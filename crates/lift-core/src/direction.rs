//! Travel and call directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LiftError;

/// Direction a car is currently travelling.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction requested by a hall call.  Only `up` and `down` are valid.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CallDirection {
    Up,
    Down,
}

impl CallDirection {
    /// The travel direction a car must have to serve this call en route.
    #[inline]
    pub fn travel(self) -> Direction {
        match self {
            CallDirection::Up   => Direction::Up,
            CallDirection::Down => Direction::Down,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallDirection::Up   => "up",
            CallDirection::Down => "down",
        }
    }
}

impl FromStr for CallDirection {
    type Err = LiftError;

    /// Accepts `up`/`down` in any case, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("up") {
            Ok(CallDirection::Up)
        } else if trimmed.eq_ignore_ascii_case("down") {
            Ok(CallDirection::Down)
        } else {
            Err(LiftError::InvalidDirection(s.to_owned()))
        }
    }
}

impl fmt::Display for CallDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
