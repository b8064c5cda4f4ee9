//! Manages the rotation of node RPC endpoints
//!
//! Provides methods for rotating between multiple URLs and sending requests to the active endpoint
//! with automatic fallback to other URLs on failure.
use reqwest_middleware::ClientWithMiddleware;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::services::blockchain::transports::{
	RotatingTransport, TransportError, ROTATE_ON_ERROR_CODES,
};

/// Manages the rotation of node RPC endpoints
///
/// # Fields
/// * `active_url` - The current active URL
/// * `fallback_urls` - A list of fallback URLs to rotate to
/// * `client` - The client to use for the endpoint manager
/// * `rotation_lock` - A lock for managing the rotation process
#[derive(Clone, Debug)]
pub struct EndpointManager {
	pub active_url: Arc<RwLock<String>>,
	pub fallback_urls: Arc<RwLock<Vec<String>>>,
	client: ClientWithMiddleware,
	rotation_lock: Arc<tokio::sync::Mutex<()>>,
}

/// Outcome of a single request attempt against one URL
#[derive(Debug)]
enum SingleRequestAttemptOutcome {
	/// Successfully got a response (status might still be error)
	Success(reqwest::Response),
	/// Error during send (e.g., connection, timeout)
	NetworkError(reqwest_middleware::Error),
	/// Error serializing the request body
	SerializationError(TransportError),
}

impl EndpointManager {
	/// Creates a new rotating URL client
	///
	/// # Arguments
	/// * `client` - The client to use for the endpoint manager
	/// * `active_url` - The initial active URL
	/// * `fallback_urls` - A list of fallback URLs to rotate to
	pub fn new(client: ClientWithMiddleware, active_url: &str, fallback_urls: Vec<String>) -> Self {
		Self {
			active_url: Arc::new(RwLock::new(active_url.to_string())),
			fallback_urls: Arc::new(RwLock::new(fallback_urls)),
			rotation_lock: Arc::new(tokio::sync::Mutex::new(())),
			client,
		}
	}

	/// Rotates to the next available URL
	///
	/// The previously active URL is pushed to the back of the fallback list.
	pub async fn rotate_url<T: RotatingTransport>(
		&self,
		transport: &T,
	) -> Result<(), TransportError> {
		// Acquire rotation lock first
		let _guard = self.rotation_lock.lock().await;

		let current_active = self.active_url.read().await.clone();

		// Get a different URL from fallbacks
		let new_url = {
			let mut fallback_urls = self.fallback_urls.write().await;
			if fallback_urls.is_empty() {
				return Err(TransportError::url_rotation(format!(
					"No fallback URLs available for rotation. Current active URL: {}",
					current_active
				)));
			}

			match fallback_urls.iter().position(|url| url != &current_active) {
				Some(pos) => fallback_urls.remove(pos),
				None => {
					return Err(TransportError::url_rotation(format!(
						"All fallback URLs are the same as the current active URL: {}",
						current_active
					)));
				}
			}
		};

		if transport.try_connect(&new_url).await.is_ok() {
			transport.update_client(&new_url).await?;

			let mut active_url = self.active_url.write().await;
			let mut fallback_urls = self.fallback_urls.write().await;
			tracing::debug!(
				"Successful rotation - from: {}, to: {}",
				current_active,
				new_url
			);
			fallback_urls.push(current_active);
			*active_url = new_url;
			Ok(())
		} else {
			// Re-acquire lock to push back the failed URL
			let mut fallback_urls = self.fallback_urls.write().await;
			fallback_urls.push(new_url.clone());
			Err(TransportError::url_rotation(format!(
				"Failed to connect to new URL: {}. Retaining it in fallback list.",
				new_url
			)))
		}
	}

	/// Determines if rotation should be attempted and executes it if needed
	///
	/// # Returns
	/// * `Ok(true)` - Rotation was needed and succeeded, caller should retry the request
	/// * `Ok(false)` - No rotation was needed or possible
	/// * `TransportError` - Rotation was attempted but failed
	async fn should_attempt_rotation<T: RotatingTransport>(
		&self,
		transport: &T,
		should_check_status: bool,
		status: Option<u16>,
	) -> Result<bool, TransportError> {
		let should_rotate = {
			let fallback_urls = self.fallback_urls.read().await;
			!fallback_urls.is_empty()
				&& (!should_check_status
					|| status.is_some_and(|s| ROTATE_ON_ERROR_CODES.contains(&s)))
		};

		if should_rotate {
			self.rotate_url(transport).await?;
			Ok(true)
		} else {
			Ok(false)
		}
	}

	async fn attempt_request_on_url<P>(
		&self,
		url: &str,
		transport: &impl RotatingTransport,
		method: &str,
		params: Option<P>,
	) -> SingleRequestAttemptOutcome
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let request_body = transport.customize_request(method, params).await;

		let request_body_str = match serde_json::to_string(&request_body) {
			Ok(body) => body,
			Err(e) => {
				return SingleRequestAttemptOutcome::SerializationError(
					TransportError::request_serialization(e.to_string()),
				);
			}
		};

		let response_result = self
			.client
			.post(url)
			.header("Content-Type", "application/json")
			.body(request_body_str)
			.send()
			.await;

		match response_result {
			Ok(response) => SingleRequestAttemptOutcome::Success(response),
			Err(network_error) => SingleRequestAttemptOutcome::NetworkError(network_error),
		}
	}

	/// Sends a raw request to the node RPC endpoint with automatic URL rotation on failure
	///
	/// # Behavior
	/// - Rotates to fallback URLs on network errors and on rate limiting (429)
	/// - Returns the JSON-RPC envelope of an HTTP 500 answer as a regular response, since
	///   that is how the node reports application errors
	/// - Returns the first successful response or an error if all attempts fail
	pub async fn send_raw_request<
		T: RotatingTransport,
		P: Into<Value> + Send + Clone + Serialize,
	>(
		&self,
		transport: &T,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError> {
		loop {
			let current_url = self.active_url.read().await.clone();

			let attempt_result = self
				.attempt_request_on_url(&current_url, transport, method, params.clone())
				.await;

			match attempt_result {
				SingleRequestAttemptOutcome::Success(response) => {
					let status = response.status();
					if status.is_success() {
						return response
							.json()
							.await
							.map_err(|e| TransportError::response_parse(e.to_string()));
					}

					let error_body = response.text().await.unwrap_or_default();

					if status == reqwest::StatusCode::INTERNAL_SERVER_ERROR {
						if let Ok(envelope) = serde_json::from_str::<Value>(&error_body) {
							if envelope.get("error").is_some_and(|e| !e.is_null()) {
								return Ok(envelope);
							}
						}
					}

					tracing::warn!(
						"Request to {} failed with status {}: {}",
						current_url,
						status,
						error_body
					);

					if self
						.should_attempt_rotation(transport, true, Some(status.as_u16()))
						.await?
					{
						tracing::debug!(
							"Rotation successful after HTTP error status {}, retrying request.",
							status
						);
						continue;
					}

					return Err(TransportError::http(
						status.as_u16(),
						current_url,
						error_body,
					));
				}
				SingleRequestAttemptOutcome::NetworkError(network_error) => {
					tracing::warn!(
						"Network error while sending request to {}: {}",
						current_url,
						network_error
					);

					if self.should_attempt_rotation(transport, false, None).await? {
						tracing::debug!("Rotation successful after network error, retrying request.");
						continue;
					}

					return Err(TransportError::network(format!(
						"Failed to send request to {}: {}",
						current_url, network_error
					)));
				}
				SingleRequestAttemptOutcome::SerializationError(serialization_error) => {
					return Err(serialization_error);
				}
			}
		}
	}
}
