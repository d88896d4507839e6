use std::fs;
use std::path::Path;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer};

use crate::error::RelayerError;
use crate::quote::FeeRateAdjustment;

/// Default value for `filter` in [`LoggingConfig`].
const DEFAULT_LOG_FILTER: &str = "info";

/// Relayer settings read from a TOML file.
#[derive(Debug, Deserialize)]
pub struct RelayerConfig {
    /// Node wallet the fee quote is requested for.
    pub wallet_name: String,

    /// Signed sat/kB offset applied to every node quote.
    #[serde(default)]
    pub fee_rate_adjustment: FeeRateAdjustment,

    /// Connection settings for the node RPC transport.
    #[serde(default)]
    pub node: Option<NodeConfig>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct NodeConfig {
    pub host: String,
    pub user: String,
    #[serde(deserialize_with = "deserialize_secret")]
    pub pass: SecretString,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives. `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Emit JSON lines instead of compact text.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

fn deserialize_secret<'de, D: Deserializer<'de>>(deserializer: D) -> Result<SecretString, D::Error> {
    String::deserialize(deserializer).map(SecretString::from)
}

impl RelayerConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, RelayerError> {
        let config: RelayerConfig =
            toml::from_str(s).map_err(|e| RelayerError::Config(e.to_string()))?;

        if config.wallet_name.trim().is_empty() {
            return Err(RelayerError::Config("wallet_name must not be empty".into()));
        }

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RelayerError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| RelayerError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_toml_str(&contents)
    }

    pub fn fee_adjustment(&self) -> FeeRateAdjustment {
        self.fee_rate_adjustment
    }
}
