//! Fleet configuration.
//!
//! Typically loaded from a TOML file by the application and handed to
//! `lift_sim::SimBuilder`.  Every key is optional; missing keys take the
//! reference-building defaults (10 floors, 4 cars of 8 riders).
//!
//! ```toml
//! floors               = 10
//! elevators            = 4
//! capacity             = 8
//! crowding_limit       = 6
//! max_detour_floors    = 3
//! floor_request_ttl_ms = 1000
//! tick_interval_ms     = 1000
//! seed                 = 42
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Building, LiftError, LiftResult};

/// Top-level simulator configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FleetConfig {
    /// Number of floors N; floors are `1..=N`.
    pub floors: u32,

    /// Number of cars in the fleet.
    pub elevators: u32,

    /// Maximum riders aboard one car.
    pub capacity: u32,

    /// The last-resort dispatch tier only considers cars carrying fewer than
    /// this many riders.
    pub crowding_limit: u32,

    /// The detour dispatch tier only considers cars whose reroute costs at
    /// most this many extra floors.
    pub max_detour_floors: u32,

    /// How long a floor request stays visible after the call.
    pub floor_request_ttl_ms: u64,

    /// Nominal time between ticks, used by `Ticker` and for output timestamps.
    pub tick_interval_ms: u64,

    /// Master RNG seed.  `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            floors:               10,
            elevators:            4,
            capacity:             8,
            crowding_limit:       6,
            max_detour_floors:    3,
            floor_request_ttl_ms: 1_000,
            tick_interval_ms:     1_000,
            seed:                 None,
        }
    }
}

impl FleetConfig {
    /// Parse a TOML document and validate it.
    pub fn from_toml_str(s: &str) -> LiftResult<Self> {
        let config: FleetConfig = toml::from_str(s).map_err(|e| LiftError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> LiftResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> LiftResult<()> {
        Building::new(self.floors)?;
        if self.elevators == 0 {
            return Err(LiftError::Config("fleet needs at least one elevator".into()));
        }
        if self.capacity == 0 {
            return Err(LiftError::Config("elevator capacity must be at least 1".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(LiftError::Config("tick_interval_ms must be positive".into()));
        }
        Ok(())
    }

    /// The validated floor range.
    pub fn building(&self) -> LiftResult<Building> {
        Building::new(self.floors)
    }

    #[inline]
    pub fn floor_request_ttl(&self) -> Duration {
        Duration::from_millis(self.floor_request_ttl_ms)
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
