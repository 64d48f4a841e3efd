//! `FloorRequestBoard` — expiring "a call is active here" markers.
//!
//! A floor request exists purely so observers can see that somebody pressed
//! a hall button.  It never influences dispatch and expires on a fixed TTL
//! whether or not the rider has been picked up.
//!
//! Expiry is a deadline queue rather than a timer per request: entries are
//! keyed by the instant they lapse and pruned whenever the board is read or
//! the fleet ticks.  Pruning an entry that is already gone is a no-op.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use lift_core::{CallDirection, Floor};

/// A hall call marker: somebody at `floor` asked to go `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FloorRequest {
    pub floor:     Floor,
    pub direction: CallDirection,
}

impl FloorRequest {
    pub fn new(floor: Floor, direction: CallDirection) -> Self {
        Self { floor, direction }
    }
}

/// Deadline-ordered set of live floor requests.
#[derive(Debug, Default, Clone)]
pub struct FloorRequestBoard {
    inner: BTreeMap<Instant, Vec<FloorRequest>>,
    /// Cached total request count for O(1) `len()`.
    total: usize,
}

impl FloorRequestBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `request` as active from `now` until `now + ttl`.
    ///
    /// Duplicate `(floor, direction)` pairs are kept as separate entries,
    /// each with its own deadline.
    pub fn register(&mut self, request: FloorRequest, now: Instant, ttl: Duration) {
        self.inner.entry(now + ttl).or_default().push(request);
        self.total += 1;
    }

    /// Drop every request whose deadline is at or before `now`.
    /// Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        // Keys strictly after `now` survive.
        let live = match now.checked_add(Duration::from_nanos(1)) {
            Some(cutoff) => self.inner.split_off(&cutoff),
            None         => BTreeMap::new(),
        };
        let expired = std::mem::replace(&mut self.inner, live);
        let removed: usize = expired.values().map(Vec::len).sum();
        self.total -= removed;
        removed
    }

    /// Requests still live at `now`, oldest first.
    pub fn active(&self, now: Instant) -> Vec<FloorRequest> {
        self.inner
            .iter()
            .filter(|(deadline, _)| **deadline > now)
            .flat_map(|(_, requests)| requests.iter().copied())
            .collect()
    }

    /// The earliest pending deadline, or `None` if the board is empty.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.keys().next().copied()
    }

    /// Total number of registered, not yet pruned requests.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
