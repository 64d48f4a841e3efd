//! A hall call: someone on a floor pressed up or down.

use std::fmt;

use lift_core::{CallDirection, Floor};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HallCall {
    pub floor:     Floor,
    pub direction: CallDirection,
}

impl HallCall {
    pub fn new(floor: Floor, direction: CallDirection) -> Self {
        Self { floor, direction }
    }
}

impl fmt::Display for HallCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.floor, self.direction.as_str())
    }
}
