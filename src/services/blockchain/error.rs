//! Blockchain error types and handling.
//!
//! Errors produced by node clients: transport failures, JSON-RPC error replies,
//! missing blocks and undecodable payloads.

use log::error;
use thiserror::Error;

use crate::services::blockchain::transports::TransportError;

/// Represents possible errors that can occur during node operations
#[derive(Debug, Error)]
pub enum BlockChainError {
	/// Errors related to network connectivity issues
	#[error("Connection error: {0}")]
	ConnectionError(String),

	/// Errors related to malformed requests or invalid responses
	#[error("Request error: {0}")]
	RequestError(String),

	/// The node has no block for the given height or hash
	#[error("Block not found: {0}")]
	BlockNotFound(String),

	/// Internal errors within the blockchain client
	#[error("Internal error: {0}")]
	InternalError(String),
}

impl BlockChainError {
	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		error!("{}", error);
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		error!("{}", error);
		error
	}

	/// Creates a new block not found error with logging
	pub fn block_not_found(selector: impl Into<String>) -> Self {
		let error = Self::BlockNotFound(selector.into());
		error!("{}", error);
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		error!("{}", error);
		error
	}
}

impl From<TransportError> for BlockChainError {
	fn from(err: TransportError) -> Self {
		match err {
			TransportError::ResponseParse(_) | TransportError::RequestSerialization(_) => {
				Self::request_error(err.to_string())
			}
			_ => Self::connection_error(err.to_string()),
		}
	}
}
