//! Configuration loading and validation.

use std::path::{Path, PathBuf};

mod error;
mod gateway_config;

pub use error::ConfigError;
pub use gateway_config::{GatewayConfig, NodeConfig, ServerConfig, VersionConfig};

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG_PATH";

/// Configuration file used when neither the CLI nor the environment name one
pub const DEFAULT_CONFIG_PATH: &str = "config/gateway.json";

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	fn validate(&self) -> Result<(), ConfigError>;

	/// Picks the configuration file: explicit path, then environment, then default
	fn resolve_path(explicit: Option<&str>) -> PathBuf {
		explicit
			.map(PathBuf::from)
			.or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from))
			.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
	}

	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
