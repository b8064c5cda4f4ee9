//! Caller-visible error catalog.
//!
//! Every failure of a canonical endpoint is one of these kinds. The catalog is
//! advertised verbatim by the options endpoint, so codes and messages are
//! stable.

use thiserror::Error;

use crate::models::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GatewayError {
	#[error("Network identifier is missing")]
	MissingIdentifier,

	#[error("Sub-network identifiers are not supported")]
	SubnetworkUnsupported,

	#[error("Invalid blockchain specified in network identifier")]
	BlockchainMismatch,

	#[error("Invalid network specified in network identifier")]
	NetworkMismatch,

	#[error("Unable to get block")]
	BlockUnavailable,

	#[error("Unable to get transaction")]
	TransactionUnavailable,

	#[error("Unable to get node status")]
	NodeStatusUnavailable,
}

impl GatewayError {
	/// Every error kind, in catalog order
	pub const ALL: [GatewayError; 7] = [
		Self::MissingIdentifier,
		Self::SubnetworkUnsupported,
		Self::BlockchainMismatch,
		Self::NetworkMismatch,
		Self::BlockUnavailable,
		Self::TransactionUnavailable,
		Self::NodeStatusUnavailable,
	];

	pub fn code(&self) -> i32 {
		match self {
			Self::MissingIdentifier => 1,
			Self::SubnetworkUnsupported => 2,
			Self::BlockchainMismatch => 3,
			Self::NetworkMismatch => 4,
			Self::BlockUnavailable => 5,
			Self::TransactionUnavailable => 6,
			Self::NodeStatusUnavailable => 7,
		}
	}

	/// Whether the same request may succeed later
	pub fn retriable(&self) -> bool {
		matches!(self, Self::BlockUnavailable | Self::NodeStatusUnavailable)
	}

	/// The full catalog as advertised to clients
	pub fn catalog() -> Vec<ApiError> {
		Self::ALL.iter().map(ApiError::from).collect()
	}
}

impl From<&GatewayError> for ApiError {
	fn from(error: &GatewayError) -> Self {
		ApiError {
			code: error.code(),
			message: error.to_string(),
			retriable: error.retriable(),
		}
	}
}

impl From<GatewayError> for ApiError {
	fn from(error: GatewayError) -> Self {
		ApiError::from(&error)
	}
}
