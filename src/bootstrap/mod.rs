//! Bootstrap module for loading configuration and wiring the gateway.
//!
//! - `load_config`: Reads and validates the gateway configuration
//! - `initialize_gateway`: Connects to the node and builds the canonical services

use std::{error::Error, path::Path, sync::Arc};

use crate::{
	models::{ConfigLoader, GatewayConfig},
	services::{
		blockchain::{HttpTransportClient, NodeClient, UtxoClient},
		gateway::Gateway,
	},
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Gateway backed by the JSON-RPC node client
pub type NodeGateway = Gateway<UtxoClient<HttpTransportClient>>;

/// Loads the gateway configuration from `path`
///
/// # Errors
/// Returns an error if the file is missing, malformed or fails validation
pub fn load_config(path: &Path) -> Result<GatewayConfig> {
	let config = GatewayConfig::load_from_path(path)?;
	tracing::info!(
		path = %path.display(),
		blockchain = %config.network_identifier.blockchain,
		network = %config.network_identifier.network,
		"Loaded gateway configuration"
	);
	Ok(config)
}

/// Connects to the configured node and builds the gateway
///
/// # Errors
/// Returns an error if none of the configured RPC URLs answers
pub async fn initialize_gateway(config: Arc<GatewayConfig>) -> Result<NodeGateway> {
	let client = UtxoClient::new(&config.node).await?;
	Ok(build_gateway(config, Arc::new(client)))
}

/// Builds the gateway over an existing node client
pub fn build_gateway<C: NodeClient>(config: Arc<GatewayConfig>, client: Arc<C>) -> Gateway<C> {
	Gateway::new(config, client)
}
