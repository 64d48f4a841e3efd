//! Fluent builder for constructing a [`Sim`].

use std::sync::Mutex;

use lift_core::{FleetConfig, Floor, LiftError, LiftResult, SimClock, SimRng};
use lift_dispatch::{DispatchPlanner, ScoringRule};
use lift_fleet::FleetBuilder;
use lift_motion::MotionScheduler;
use lift_route::{SweepSelector, TargetSelector};
use tracing::info;

use crate::Sim;

/// Fluent builder for [`Sim<S>`].
///
/// # Required inputs
///
/// - [`FleetConfig`]: floors, fleet size, capacity, dispatch thresholds, …
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                   |
/// |------------------------|-------------------------------------------|
/// | `.selector(s)`         | [`SweepSelector`]                         |
/// | `.rules(v)`            | the stock tiers from `config`             |
/// | `.seed(n)`             | `config.seed`, else OS entropy            |
/// | `.starting_floor(f)`   | the lowest floor                          |
///
/// # Example
///
/// ```rust
/// use lift_core::{FleetConfig, Floor};
/// use lift_route::NearestSelector;
/// use lift_sim::SimBuilder;
///
/// let sim = SimBuilder::new(FleetConfig { elevators: 2, ..FleetConfig::default() })
///     .selector(NearestSelector)
///     .seed(42)
///     .starting_floor(Floor(3))
///     .build()?;
/// assert_eq!(sim.list_elevators().len(), 2);
/// # Ok::<(), lift_core::LiftError>(())
/// ```
pub struct SimBuilder<S: TargetSelector + Clone = SweepSelector> {
    config:         FleetConfig,
    selector:       S,
    rules:          Option<Vec<Box<dyn ScoringRule>>>,
    seed:           Option<u64>,
    starting_floor: Option<Floor>,
}

impl SimBuilder<SweepSelector> {
    /// Create a builder with the required config and default policies.
    pub fn new(config: FleetConfig) -> Self {
        Self {
            config,
            selector:       SweepSelector,
            rules:          None,
            seed:           None,
            starting_floor: None,
        }
    }
}

impl<S: TargetSelector + Clone> SimBuilder<S> {
    /// Use a different next-stop policy for both dispatch and motion.
    pub fn selector<T: TargetSelector + Clone>(self, selector: T) -> SimBuilder<T> {
        SimBuilder {
            config:         self.config,
            selector,
            rules:          self.rules,
            seed:           self.seed,
            starting_floor: self.starting_floor,
        }
    }

    /// Replace the stock dispatch tiers.  Consulted in the given order.
    pub fn rules(mut self, rules: Vec<Box<dyn ScoringRule>>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Seed the RNG, overriding `config.seed`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Park every car on `floor` at start.
    pub fn starting_floor(mut self, floor: Floor) -> Self {
        self.starting_floor = Some(floor);
        self
    }

    /// Validate the config and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    /// `LiftError::Config` for an invalid config or a starting floor outside
    /// the building.
    pub fn build(self) -> LiftResult<Sim<S>> {
        self.config.validate()?;
        let building = self.config.building()?;

        let start = self.starting_floor.unwrap_or(building.lowest());
        if !building.contains(start) {
            return Err(LiftError::Config(format!(
                "starting floor {start} is outside 1..={}",
                building.floors()
            )));
        }

        let fleet = FleetBuilder::new(self.config.elevators, self.config.capacity)
            .starting_floor(start)
            .build();

        let planner = match self.rules {
            Some(rules) => DispatchPlanner::with_rules(rules, self.selector.clone()),
            None        => DispatchPlanner::new(&self.config, self.selector.clone()),
        };
        let rng = SimRng::from_seed_opt(self.seed.or(self.config.seed));

        info!(
            floors = building.floors(),
            elevators = self.config.elevators,
            capacity = self.config.capacity,
            tiers = planner.rules().len(),
            "simulator ready"
        );

        Ok(Sim {
            clock:    Mutex::new(SimClock::new(self.config.tick_interval_ms)),
            motion:   MotionScheduler::new(self.selector),
            rng:      Mutex::new(rng),
            planner,
            fleet,
            building,
            config:   self.config,
        })
    }
}

impl Sim<SweepSelector> {
    /// A simulator with default policies for `config`.
    pub fn new(config: FleetConfig) -> LiftResult<Self> {
        SimBuilder::new(config).build()
    }
}
