//! HTTP transport implementation for node interactions.
//!
//! This module provides the JSON-RPC over HTTP client used to reach Bitcoin Core
//! compatible nodes, supporting:
//! - Multiple RPC endpoints with weighted selection and automatic failover
//! - Transient retry with exponential backoff
//! - HTTP basic authentication (rpcuser / rpcpassword)
//! - Connection pooling and reuse across requests

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::{
	header::{HeaderMap, HeaderValue, AUTHORIZATION},
	Client,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::{sync::Arc, time::Duration};
use url::Url;

use crate::{
	models::NodeConfig,
	services::blockchain::transports::{
		BlockchainTransport, EndpointManager, RotatingTransport, TransientErrorRetryStrategy,
		TransportError, JSON_RPC_REQUEST_ID,
	},
	utils::http::{create_retryable_http_client, HttpRetryConfig},
};

/// Method used to probe an endpoint before it is put in service
const CONNECTION_TEST_METHOD: &str = "getblockcount";

/// HTTP transport client for node JSON-RPC calls
///
/// The client is thread-safe and can be shared across multiple tasks.
#[derive(Clone, Debug)]
pub struct HttpTransportClient {
	/// HTTP client used for connection probes
	pub client: Arc<Client>,
	/// Manages RPC endpoint rotation and request handling for high availability
	endpoint_manager: EndpointManager,
}

impl HttpTransportClient {
	/// Creates a new HTTP transport client with automatic endpoint management
	///
	/// Endpoints are probed in order of their weight until one answers; the others
	/// become fallbacks.
	///
	/// # Arguments
	/// * `node` - Node connection details (RPC URLs, weights and credentials)
	///
	/// # Returns
	/// * `Result<Self, TransportError>` - New client instance or connection error
	pub async fn new(node: &NodeConfig) -> Result<Self, TransportError> {
		let mut rpc_urls: Vec<_> = node
			.rpc_urls
			.iter()
			.filter(|rpc_url| rpc_url.type_ == "rpc" && rpc_url.weight > 0)
			.collect();

		rpc_urls.sort_by(|a, b| b.weight.cmp(&a.weight));

		let http_client = reqwest::ClientBuilder::new()
			.default_headers(auth_headers(node)?)
			.pool_idle_timeout(Duration::from_secs(90))
			.pool_max_idle_per_host(32)
			.timeout(Duration::from_secs(30))
			.connect_timeout(Duration::from_secs(20))
			.build()
			.map_err(|e| TransportError::network(format!("Failed to create HTTP client: {}", e)))?;

		let retryable_client = create_retryable_http_client(
			&HttpRetryConfig::default(),
			http_client.clone(),
			Some(TransientErrorRetryStrategy),
		);

		for rpc_url in rpc_urls.iter() {
			let url = match Url::parse(&rpc_url.url) {
				Ok(url) => url,
				Err(_) => continue,
			};

			if probe(&http_client, url.as_str()).await.is_err() {
				continue;
			}

			let fallback_urls: Vec<String> = rpc_urls
				.iter()
				.filter(|url| url.url != rpc_url.url)
				.map(|url| url.url.clone())
				.collect();

			tracing::info!(url = %rpc_url.url, "Connected to node RPC endpoint");

			return Ok(Self {
				client: Arc::new(http_client),
				endpoint_manager: EndpointManager::new(
					retryable_client,
					rpc_url.url.as_ref(),
					fallback_urls,
				),
			});
		}

		Err(TransportError::network("All RPC URLs failed to connect"))
	}
}

/// Builds the basic authentication header from the node credentials
fn auth_headers(node: &NodeConfig) -> Result<HeaderMap, TransportError> {
	let mut headers = HeaderMap::new();
	if let Some(username) = &node.username {
		let credentials = format!("{}:{}", username, node.password.as_deref().unwrap_or_default());
		let mut value = HeaderValue::from_str(&format!("Basic {}", STANDARD.encode(credentials)))
			.map_err(|e| {
				TransportError::request_serialization(format!("Invalid RPC credentials: {}", e))
			})?;
		value.set_sensitive(true);
		headers.insert(AUTHORIZATION, value);
	}
	Ok(headers)
}

/// Sends a cheap JSON-RPC call and checks for a successful status
async fn probe(client: &Client, url: &str) -> Result<(), TransportError> {
	let test_request = json!({
		"jsonrpc": "1.0",
		"id": JSON_RPC_REQUEST_ID,
		"method": CONNECTION_TEST_METHOD,
		"params": []
	});

	match client.post(url).json(&test_request).send().await {
		Ok(response) if response.status().is_success() => Ok(()),
		Ok(response) => Err(TransportError::network(format!(
			"Failed to connect to {}: {}",
			url,
			response.status().as_u16()
		))),
		Err(e) => Err(TransportError::network(format!(
			"Failed to connect to {}: {}",
			url, e
		))),
	}
}

#[async_trait]
impl BlockchainTransport for HttpTransportClient {
	async fn get_current_url(&self) -> String {
		self.endpoint_manager.active_url.read().await.clone()
	}

	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		self.endpoint_manager
			.send_raw_request(self, method, params)
			.await
	}
}

#[async_trait]
impl RotatingTransport for HttpTransportClient {
	async fn try_connect(&self, url: &str) -> Result<(), TransportError> {
		let url = Url::parse(url)
			.map_err(|_| TransportError::network(format!("Invalid URL: {}", url)))?;
		probe(&self.client, url.as_str()).await
	}

	async fn update_client(&self, url: &str) -> Result<(), TransportError> {
		let parsed_url = Url::parse(url)
			.map_err(|_| TransportError::network(format!("Invalid URL: {}", url)))?;
		// Normalize the URL by trimming trailing slash if present
		let normalized_url = parsed_url.as_str().trim_end_matches('/');

		let mut active_url = self.endpoint_manager.active_url.write().await;
		*active_url = normalized_url.to_string();
		Ok(())
	}
}
