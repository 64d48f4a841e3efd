//! Floors and building bounds.
//!
//! Floors are numbered from 1 (the lobby) to `Building::highest()`
//! inclusive.  Every externally supplied floor number passes through
//! [`Building::floor`] before it reaches the fleet, regardless of what the
//! caller validated upstream.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::{LiftError, LiftResult};

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A floor number.  Construct through [`Building::floor`] when the value
/// comes from outside the simulator.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor every car starts on.
    pub const LOBBY: Floor = Floor(1);

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The floor one step from `self` toward `target`.  Returns `self` when
    /// already there.
    #[inline]
    pub fn step_toward(self, target: Floor) -> Floor {
        match target.cmp(&self) {
            std::cmp::Ordering::Greater => Floor(self.0 + 1),
            std::cmp::Ordering::Less    => Floor(self.0 - 1),
            std::cmp::Ordering::Equal   => self,
        }
    }

    /// `true` if `self` lies in the closed interval spanned by `a` and `b`,
    /// in either order.
    #[inline]
    pub fn is_between(self, a: Floor, b: Floor) -> bool {
        a.min(b) <= self && self <= a.max(b)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Building ──────────────────────────────────────────────────────────────────

/// The floor range served by the fleet.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Building {
    floors: u32,
}

impl Building {
    /// A building with floors `1..=floors`.
    ///
    /// # Errors
    /// `LiftError::Config` if fewer than two floors are requested; a single
    /// floor leaves no valid destination for any rider.
    pub fn new(floors: u32) -> LiftResult<Self> {
        if floors < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {floors}"
            )));
        }
        Ok(Self { floors })
    }

    /// Number of floors (N).
    #[inline]
    pub fn floors(&self) -> u32 {
        self.floors
    }

    #[inline]
    pub fn lowest(&self) -> Floor {
        Floor::LOBBY
    }

    #[inline]
    pub fn highest(&self) -> Floor {
        Floor(self.floors)
    }

    /// All floors from lobby to top.
    pub fn range(&self) -> RangeInclusive<u32> {
        1..=self.floors
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        self.range().contains(&floor.0)
    }

    /// Validate a raw floor number.
    ///
    /// # Errors
    /// `LiftError::InvalidFloor` when `n` is outside `1..=N`.
    pub fn floor(&self, n: i64) -> LiftResult<Floor> {
        if n >= 1 && n <= self.floors as i64 {
            Ok(Floor(n as u32))
        } else {
            Err(LiftError::InvalidFloor { floor: n, highest: self.floors })
        }
    }
}
