#[cfg(test)]
#[path = "../../tests/unit/solver/builder_test.rs"]
mod builder_test;

use crate::models::solution::check_fleet;
use crate::models::{Fleet, Problem};
use crate::solver::arbiter::MoveArbiter;
use crate::solver::operators::create_default_operators;
use crate::solver::search::GuidedLocalSearch;
use crate::solver::{GlsConfig, SolutionObserver, Solver};
use crate::utils::{CompositeQuota, Environment, Float, GenericResult, Quota, TimeQuota};
use std::sync::Arc;

/// Provides configurable way to build the solver.
pub struct Builder {
    problem: Arc<Problem>,
    config: GlsConfig,
    max_time: Option<usize>,
    initial_fleet: Option<Fleet>,
    observer: Option<Arc<dyn SolutionObserver + Send + Sync>>,
    environment: Environment,
}

impl Builder {
    /// Creates a new instance of `Builder` for the given problem.
    pub fn new(problem: Arc<Problem>) -> Self {
        Self {
            problem,
            config: GlsConfig::default(),
            max_time: None,
            initial_fleet: None,
            observer: None,
            environment: Environment::default(),
        }
    }

    /// Sets max iterations to be run.
    /// Default is 10000000.
    pub fn with_max_iterations(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.log(format!("configured to use max-iterations: {limit}").as_str());
            self.config.max_iterations = limit;
        }
        self
    }

    /// Sets max running time limit in seconds.
    /// Default is none.
    pub fn with_max_time(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.log(format!("configured to use max-time: {limit}s").as_str());
            self.max_time = Some(limit);
        }
        self
    }

    /// Sets a scale factor for penalty weight.
    /// Default is 0.1.
    pub fn with_alpha(mut self, alpha: Float) -> Self {
        self.log(format!("configured to use alpha: {alpha}").as_str());
        self.config.alpha = alpha;
        self
    }

    /// Sets a minimum augmented gain for a move to be accepted.
    /// Default is 1E-6.
    pub fn with_epsilon(mut self, epsilon: Float) -> Self {
        self.log(format!("configured to use epsilon: {epsilon}").as_str());
        self.config.epsilon = epsilon;
        self
    }

    /// Sets how often the search progress is logged. None disables progress logging.
    /// Default is 1000.
    pub fn with_log_best(mut self, log_best: Option<usize>) -> Self {
        self.config.log_best = log_best;
        self
    }

    /// Sets an initial solution. When it is not set, the solution is built greedily.
    pub fn with_initial_fleet(mut self, fleet: Fleet) -> Self {
        self.log("configured to use provided initial solution");
        self.initial_fleet = Some(fleet);
        self
    }

    /// Sets an observer which is notified about every new best solution.
    pub fn with_observer(mut self, observer: Arc<dyn SolutionObserver + Send + Sync>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Sets an environment. Default is an environment without quota which logs into stdout.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Builds the solver with parameters specified.
    pub fn build(self) -> GenericResult<Solver> {
        let Self { problem, config, max_time, initial_fleet, observer, mut environment } = self;

        if !config.alpha.is_finite() || config.alpha < 0. {
            return Err(format!("alpha should be a non-negative number, got: {}", config.alpha).into());
        }

        if !config.epsilon.is_finite() || config.epsilon < 0. {
            return Err(format!("epsilon should be a non-negative number, got: {}", config.epsilon).into());
        }

        let fleet = match initial_fleet {
            Some(fleet) => {
                check_fleet(problem.as_ref(), &fleet).map_err(|err| format!("invalid initial solution: {err}"))?;
                fleet
            }
            None => Fleet::greedy(problem.as_ref())?,
        };

        environment.quota = match (environment.quota.take(), max_time) {
            (Some(quota), Some(limit)) => {
                let quota: Arc<dyn Quota + Send + Sync> =
                    Arc::new(CompositeQuota::new(vec![quota, create_time_quota(limit)]));
                Some(quota)
            }
            (None, Some(limit)) => Some(create_time_quota(limit)),
            (quota, None) => quota,
        };

        let search = GuidedLocalSearch::new(problem, MoveArbiter::new(create_default_operators()), &config);

        Ok(Solver::new(search, config, fleet, observer, environment))
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

fn create_time_quota(limit: usize) -> Arc<dyn Quota + Send + Sync> {
    Arc::new(TimeQuota::new(limit as Float))
}
