use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::RelayerError;

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, RelayerError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => parse_filter(&directives),
        _ => parse_filter(&config.filter),
    }
}

fn parse_filter(directives: &str) -> Result<EnvFilter, RelayerError> {
    EnvFilter::try_new(directives)
        .map_err(|e| RelayerError::Config(format!("invalid log filter {directives:?}: {e}")))
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Fails instead of panicking if a subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), RelayerError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(config)?)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };

    installed.map_err(|e| RelayerError::Config(format!("logger already installed: {e}")))
}
