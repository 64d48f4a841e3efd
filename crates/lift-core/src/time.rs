//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick moves every
//! car by at most one floor or one boarding/alighting event.  `SimClock`
//! maps ticks to elapsed driver time using the configured tick interval; the
//! mapping is informational only (output rows, log lines) because the
//! cadence itself belongs to whoever calls `tick()`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts tick counts to elapsed milliseconds.
#[derive(Clone, Debug)]
pub struct SimClock {
    /// Nominal milliseconds between ticks.
    pub tick_interval_ms: u64,
    /// The tick about to be processed.  Advanced after each completed tick.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(tick_interval_ms: u64) -> Self {
        Self { tick_interval_ms, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Nominal elapsed milliseconds at `tick`.
    #[inline]
    pub fn elapsed_ms_at(&self, tick: Tick) -> u64 {
        tick.0.saturating_mul(self.tick_interval_ms)
    }

    /// Nominal elapsed milliseconds at the current tick.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms_at(self.current_tick)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed_ms() / 1_000;
        write!(f, "{} ({:02}:{:02})", self.current_tick, secs / 60, secs % 60)
    }
}
