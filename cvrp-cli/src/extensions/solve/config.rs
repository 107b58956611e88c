//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

extern crate serde_json;

use cvrp_core::prelude::*;
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// An algorithm configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies guided local search parameters.
    pub search: Option<SearchConfig>,
    /// Specifies algorithm termination configuration.
    pub termination: Option<TerminationConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
}

/// A guided local search configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct SearchConfig {
    /// A scale factor for penalty weight. Default is 0.1.
    pub alpha: Option<Float>,
    /// A minimum augmented gain of an accepted move. Default is 1E-6.
    pub epsilon: Option<Float>,
}

/// A termination configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TerminationConfig {
    /// Max amount of search iterations.
    pub max_iterations: Option<usize>,
    /// Max running time in seconds.
    pub max_time: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often search progress is logged. Default is 1000 (iterations).
    pub log_best: Option<usize>,
}

impl Config {
    /// Turns logging on keeping the rest of logging settings.
    pub fn with_logging_enabled(mut self) -> Self {
        let telemetry = self.telemetry.get_or_insert(TelemetryConfig { logging: None });
        let logging = telemetry.logging.get_or_insert(LoggingConfig { enabled: true, log_best: None });
        logging.enabled = true;

        self
    }
}

fn configure_from_telemetry(
    builder: Builder,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
    telemetry_config: &Option<TelemetryConfig>,
) -> GenericResult<Builder> {
    const LOG_BEST: usize = 1000;

    let logging = telemetry_config.as_ref().and_then(|config| config.logging.as_ref());

    let log_best = match logging {
        Some(LoggingConfig { enabled: true, log_best: Some(0) }) => {
            return Err("logBest should be a positive number, got: 0".into());
        }
        Some(LoggingConfig { enabled: true, log_best }) => Some(log_best.unwrap_or(LOG_BEST)),
        _ => None,
    };

    let logger: InfoLogger =
        if log_best.is_some() { Arc::new(|msg: &str| println!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Ok(builder.with_environment(Environment::new(quota, logger)).with_log_best(log_best))
}

fn configure_from_search(mut builder: Builder, search_config: &Option<SearchConfig>) -> Builder {
    if let Some(config) = search_config {
        if let Some(alpha) = config.alpha {
            builder = builder.with_alpha(alpha);
        }

        if let Some(epsilon) = config.epsilon {
            builder = builder.with_epsilon(epsilon);
        }
    }

    builder
}

fn configure_from_termination(mut builder: Builder, termination_config: &Option<TerminationConfig>) -> Builder {
    if let Some(config) = termination_config {
        builder = builder.with_max_time(config.max_time);
        builder = builder.with_max_iterations(config.max_iterations);
    }

    builder
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

/// Creates a solver `Builder` from config. The quota is checked by the search once per iteration.
pub fn create_builder_from_config(
    problem: Arc<Problem>,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
    config: &Config,
) -> GenericResult<Builder> {
    let mut builder = Builder::new(problem);

    builder = configure_from_telemetry(builder, quota, &config.telemetry)?;
    builder = configure_from_search(builder, &config.search);
    builder = configure_from_termination(builder, &config.termination);

    Ok(builder)
}
