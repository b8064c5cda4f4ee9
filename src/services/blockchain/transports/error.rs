//! Transport error types.
//!
//! Errors raised while talking to a node endpoint. They never reach API
//! clients: the gateway collapses them into its fixed error catalog.

use log::error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
	/// The endpoint answered with a non-success status
	#[error("HTTP error: status {status_code} for URL {url}: {body}")]
	Http {
		status_code: u16,
		url: String,
		body: String,
	},

	/// The request never produced a response (connection, timeout)
	#[error("Network error: {0}")]
	Network(String),

	/// The response body is not valid JSON
	#[error("Failed to parse response: {0}")]
	ResponseParse(String),

	#[error("Failed to serialize request: {0}")]
	RequestSerialization(String),

	/// No fallback endpoint could take over
	#[error("URL rotation failed: {0}")]
	UrlRotation(String),
}

impl TransportError {
	pub fn http(status_code: u16, url: impl Into<String>, body: impl Into<String>) -> Self {
		let error = Self::Http {
			status_code,
			url: url.into(),
			body: body.into(),
		};
		error!("{}", error);
		error
	}

	pub fn network(msg: impl Into<String>) -> Self {
		let error = Self::Network(msg.into());
		error!("{}", error);
		error
	}

	pub fn response_parse(msg: impl Into<String>) -> Self {
		let error = Self::ResponseParse(msg.into());
		error!("{}", error);
		error
	}

	pub fn request_serialization(msg: impl Into<String>) -> Self {
		let error = Self::RequestSerialization(msg.into());
		error!("{}", error);
		error
	}

	pub fn url_rotation(msg: impl Into<String>) -> Self {
		let error = Self::UrlRotation(msg.into());
		error!("{}", error);
		error
	}
}
