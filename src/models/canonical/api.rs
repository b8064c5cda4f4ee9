//! Request and response envelopes of the canonical endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
	Block, BlockIdentifier, NetworkIdentifier, PartialBlockIdentifier, Transaction,
	TransactionIdentifier,
};

/// Error body returned by every endpoint and advertised in the options catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
	pub code: i32,
	pub message: String,
	pub retriable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataRequest {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkRequest {
	#[serde(default)]
	pub network_identifier: Option<NetworkIdentifier>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockRequest {
	#[serde(default)]
	pub network_identifier: Option<NetworkIdentifier>,
	#[serde(default)]
	pub block_identifier: PartialBlockIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockTransactionRequest {
	#[serde(default)]
	pub network_identifier: Option<NetworkIdentifier>,
	#[serde(default)]
	pub block_identifier: PartialBlockIdentifier,
	pub transaction_identifier: TransactionIdentifier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkListResponse {
	pub network_identifiers: Vec<NetworkIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
	pub rosetta_version: String,
	pub node_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationStatus {
	pub status: String,
	pub successful: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allow {
	pub operation_statuses: Vec<OperationStatus>,
	pub operation_types: Vec<String>,
	pub errors: Vec<ApiError>,
	pub historical_balance_lookup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOptionsResponse {
	pub version: Version,
	pub allow: Allow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peer {
	pub peer_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatusResponse {
	pub current_block_identifier: BlockIdentifier,
	/// Milliseconds since the UNIX epoch
	pub current_block_timestamp: i64,
	pub genesis_block_identifier: BlockIdentifier,
	pub peers: Vec<Peer>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockResponse {
	pub block: Block,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub other_transactions: Vec<TransactionIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockTransactionResponse {
	pub transaction: Transaction,
}
