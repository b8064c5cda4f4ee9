//! Network transport implementations for the node client.
//!
//! Provides the JSON-RPC over HTTP transport used to reach Bitcoin Core
//! compatible nodes, with endpoint rotation and transient retry.

mod endpoint_manager;
mod error;
mod http;

pub use endpoint_manager::EndpointManager;
pub use error::TransportError;
pub use http::HttpTransportClient;

use reqwest_middleware::Error as MiddlewareError;
use reqwest_retry::{
	default_on_request_failure, default_on_request_success, Retryable, RetryableStrategy,
};
use serde::Serialize;
use serde_json::{json, Value};

/// HTTP status codes that trigger RPC endpoint rotation
/// - 429: Too Many Requests - indicates rate limiting from the current endpoint
pub const ROTATE_ON_ERROR_CODES: [u16; 1] = [429];

/// JSON-RPC request id sent with every call
pub const JSON_RPC_REQUEST_ID: &str = "utxo-rosetta-gateway";

/// Base trait for all blockchain transport clients
#[async_trait::async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the current URL being used by the transport
	async fn get_current_url(&self) -> String;

	/// Send a raw request to the blockchain
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;

	/// Customizes the request for specific blockchain requirements
	async fn customize_request<P>(&self, method: &str, params: Option<P>) -> Value
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		// Bitcoin Core speaks JSON-RPC 1.0 and expects a params array
		json!({
			"jsonrpc": "1.0",
			"id": JSON_RPC_REQUEST_ID,
			"method": method,
			"params": params.map(|p| p.into()).unwrap_or_else(|| json!([]))
		})
	}
}

/// Extension trait for transports that support URL rotation
#[async_trait::async_trait]
pub trait RotatingTransport: BlockchainTransport {
	/// Attempts to establish a connection with a new URL
	async fn try_connect(&self, url: &str) -> Result<(), TransportError>;

	/// Updates the client with a new URL
	async fn update_client(&self, url: &str) -> Result<(), TransportError>;
}

/// Retry strategy for node JSON-RPC calls
///
/// Behaves like the default transient strategy, except that HTTP 500 is final:
/// Bitcoin Core answers application errors (unknown block, height out of range)
/// with status 500 and a JSON-RPC error body.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransientErrorRetryStrategy;

impl RetryableStrategy for TransientErrorRetryStrategy {
	fn handle(&self, res: &Result<reqwest::Response, MiddlewareError>) -> Option<Retryable> {
		match res {
			Ok(response) if response.status() == reqwest::StatusCode::INTERNAL_SERVER_ERROR => None,
			Ok(response) => default_on_request_success(response),
			Err(error) => default_on_request_failure(error),
		}
	}
}
