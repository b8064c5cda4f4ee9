//! Gateway configuration loading and validation.
//!
//! The configuration is read once at startup into an immutable [`GatewayConfig`]
//! that is shared read-only by every request handler.

use serde::{Deserialize, Serialize};
use std::{fmt, path::Path};

use crate::models::{config::error::ConfigError, ConfigLoader, CurrencySpec, NetworkIdentity, RpcUrl};

/// Largest number of decimal places an amount can be scaled by
const MAX_CURRENCY_DECIMALS: u32 = 18;

fn default_host() -> String {
	"0.0.0.0".to_string()
}

/// HTTP listener of the canonical API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
	#[serde(default = "default_host")]
	pub host: String,
	pub port: u16,
}

impl ServerConfig {
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}
}

/// Connection details of the backing node
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeConfig {
	pub rpc_urls: Vec<RpcUrl>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub username: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub password: Option<String>,
}

impl fmt::Debug for NodeConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("NodeConfig")
			.field("rpc_urls", &self.rpc_urls)
			.field("username", &self.username)
			.field("password", &self.password.as_ref().map(|_| "<redacted>"))
			.finish()
	}
}

/// Versions advertised by the options endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VersionConfig {
	pub rosetta_version: String,
	pub node_version: String,
}

/// Complete gateway configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GatewayConfig {
	pub network_identifier: NetworkIdentity,
	pub currency: CurrencySpec,
	pub server: ServerConfig,
	pub node: NodeConfig,
	pub version: VersionConfig,
}

impl ConfigLoader for GatewayConfig {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::not_json(path));
		}

		let file = std::fs::File::open(path).map_err(|e| ConfigError::unreadable(path, e))?;
		let config: GatewayConfig =
			serde_json::from_reader(file).map_err(|e| ConfigError::malformed(path, e))?;

		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if self.network_identifier.blockchain.trim().is_empty() {
			return Err(ConfigError::invalid_field(
				"network_identifier.blockchain",
				"must not be empty",
			));
		}

		if self.network_identifier.network.trim().is_empty() {
			return Err(ConfigError::invalid_field(
				"network_identifier.network",
				"must not be empty",
			));
		}

		if self.currency.symbol.trim().is_empty() {
			return Err(ConfigError::invalid_field("currency.symbol", "must not be empty"));
		}

		if self.currency.decimals > MAX_CURRENCY_DECIMALS {
			return Err(ConfigError::invalid_field(
				"currency.decimals",
				format!("must be at most {}", MAX_CURRENCY_DECIMALS),
			));
		}

		if self.server.port == 0 {
			return Err(ConfigError::invalid_field("server.port", "must be greater than 0"));
		}

		let supported_types = ["rpc"];
		if !self
			.node
			.rpc_urls
			.iter()
			.all(|rpc_url| supported_types.contains(&rpc_url.type_.as_str()))
		{
			return Err(ConfigError::invalid_field(
				"node.rpc_urls.type_",
				format!("must be one of: {}", supported_types.join(", ")),
			));
		}

		if !self.node.rpc_urls.iter().all(|rpc_url| {
			rpc_url.url.starts_with("http://") || rpc_url.url.starts_with("https://")
		}) {
			return Err(ConfigError::invalid_field(
				"node.rpc_urls.url",
				"must start with http:// or https://",
			));
		}

		if !self.node.rpc_urls.iter().all(|rpc_url| rpc_url.weight <= 100) {
			return Err(ConfigError::invalid_field(
				"node.rpc_urls.weight",
				"must be between 0 and 100",
			));
		}

		if !self.node.rpc_urls.iter().any(|rpc_url| rpc_url.weight > 0) {
			return Err(ConfigError::invalid_field(
				"node.rpc_urls",
				"at least one URL with a weight above 0 is required",
			));
		}

		if self.node.password.is_some() && self.node.username.is_none() {
			return Err(ConfigError::invalid_field(
				"node.password",
				"requires node.username",
			));
		}

		Ok(())
	}
}
