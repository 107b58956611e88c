//! The solver module contains guided local search logic: neighborhood operators, the move
//! arbiter, penalty injection and the search loop.
//!
//! The search repeatedly applies the best improving move found by four operators
//! (relocate, exchange, 2-opt and cross) with respect to the augmented cost, which is the
//! raw cost plus penalties of used edges scaled by lambda. When no operator can improve
//! the augmented cost, the edges with maximum utility are penalized. The best solution
//! with respect to the raw cost is tracked and reported via `SolutionObserver`.
//!
//! # Examples
//!
//! ```
//! # use cvrp_core::prelude::*;
//! # use std::sync::Arc;
//! let customers = vec![
//!     Customer::new(0, 0., 0.),
//!     Customer::new(1, 0., 1.),
//!     Customer::new(1, 1., 1.),
//!     Customer::new(1, 1., 0.),
//! ];
//! let problem = Arc::new(Problem::new(customers, 1, 10)?);
//!
//! let (fleet, cost, metrics) = Builder::new(problem)
//!     .with_environment(Environment::silent())
//!     .with_max_iterations(Some(100))
//!     .build()?
//!     .solve()?;
//!
//! assert_eq!(fleet.len(), 1);
//! assert!((cost - 4.).abs() < 1E-6);
//! assert_eq!(metrics.iterations, 100);
//! # Ok::<(), GenericError>(())
//! ```

pub mod operators;

mod arbiter;
pub use self::arbiter::*;

mod builder;
pub use self::builder::Builder;

mod config;
pub use self::config::GlsConfig;

mod injector;
pub use self::injector::*;

mod search;
pub use self::search::*;

mod telemetry;
pub use self::telemetry::*;

mod tracker;
pub use self::tracker::*;

use crate::models::Fleet;
use crate::utils::{Environment, Float, GenericResult};
use std::sync::Arc;

/// A guided local search solver. Use `Builder` to create it.
pub struct Solver {
    search: GuidedLocalSearch,
    config: GlsConfig,
    fleet: Fleet,
    observer: Option<Arc<dyn SolutionObserver + Send + Sync>>,
    environment: Environment,
}

impl Solver {
    fn new(
        search: GuidedLocalSearch,
        config: GlsConfig,
        fleet: Fleet,
        observer: Option<Arc<dyn SolutionObserver + Send + Sync>>,
        environment: Environment,
    ) -> Self {
        Self { search, config, fleet, observer, environment }
    }

    /// Runs the search until iteration limit or quota is reached. Returns the best found
    /// solution, its raw cost and search metrics.
    pub fn solve(self) -> GenericResult<(Fleet, Float, Metrics)> {
        let Self { search, config, fleet, observer, environment } = self;
        let problem = search.problem();

        let mut state = SearchState::new(problem, fleet);
        let mut tracker = BestTracker::new(state.fleet(), state.raw_cost(), observer)?;
        let mut telemetry = Telemetry::new(
            Some(environment.logger.clone()),
            config.log_best,
            config.max_iterations,
            search.arbiter().operators().iter().map(|op| op.name()).collect(),
        );

        telemetry.on_start(&state, problem.vehicles(), problem.size() - 1);

        let mut is_interrupted = false;
        for iteration in 0..config.max_iterations {
            if environment.is_quota_reached() {
                is_interrupted = true;
                break;
            }

            let outcome = search.step(&mut state);

            if matches!(outcome, StepOutcome::Moved { .. })
                && tracker.consider_update(state.fleet(), state.raw_cost())?
            {
                telemetry.on_best(iteration, tracker.cost());
            }

            telemetry.on_step(iteration, &outcome, &state, tracker.cost());
        }

        let metrics = telemetry.on_result(&state, tracker.cost(), is_interrupted);
        let (fleet, _) = tracker.into_best();
        let cost = fleet.raw_cost(problem);

        Ok((fleet, cost, metrics))
    }
}
