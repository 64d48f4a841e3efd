//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  `ElevatorId` doubles as the index
//! of the car in fleet order; `PassengerId` is allocated by the fleet store's
//! monotonic counter and never reused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Position of a car in fleet order.  Assigned once when the fleet is
    /// built and stable for the life of the process.
    pub struct ElevatorId(u32);
}

typed_id! {
    /// Globally unique rider identifier.  The first allocated id is 1.
    pub struct PassengerId(u64);
}

impl PassengerId {
    /// The id handed out by a freshly created fleet store.
    pub const FIRST: PassengerId = PassengerId(1);

    /// The id allocated immediately after `self`.
    #[inline]
    pub fn next(self) -> PassengerId {
        PassengerId(self.0 + 1)
    }
}
