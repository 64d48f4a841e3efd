//! Dispatch scores.

use std::fmt;

/// How well one car fits one call.  Higher `priority` wins; within a
/// priority, lower `cost` wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Score {
    pub priority: u32,
    pub cost:     u32,
}

impl Score {
    pub fn new(priority: u32, cost: u32) -> Self {
        Self { priority, cost }
    }

    /// `true` if `self` is strictly better than `other`.  Equal scores do not
    /// beat each other, which keeps the earlier car on a tie.
    pub fn beats(&self, other: &Score) -> bool {
        self.priority > other.priority
            || (self.priority == other.priority && self.cost < other.cost)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}/c{}", self.priority, self.cost)
    }
}
