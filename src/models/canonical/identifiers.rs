//! Identifier objects of the canonical model.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::NetworkIdentity;

/// Network identifier supplied by clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkIdentifier {
	pub blockchain: String,
	pub network: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sub_network_identifier: Option<SubNetworkIdentifier>,
}

impl From<&NetworkIdentity> for NetworkIdentifier {
	fn from(identity: &NetworkIdentity) -> Self {
		Self {
			blockchain: identity.blockchain.clone(),
			network: identity.network.clone(),
			sub_network_identifier: None,
		}
	}
}

/// Sub-network component of a network identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubNetworkIdentifier {
	#[serde(default)]
	pub network: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub metadata: Option<Value>,
}

/// Fully qualified block identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockIdentifier {
	pub index: i64,
	pub hash: String,
}

/// Block selector: by index, by hash, or neither for the chain tip
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialBlockIdentifier {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub index: Option<i64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,
}

impl PartialBlockIdentifier {
	pub fn by_index(index: i64) -> Self {
		Self {
			index: Some(index),
			hash: None,
		}
	}

	pub fn by_hash(hash: impl Into<String>) -> Self {
		Self {
			index: None,
			hash: Some(hash.into()),
		}
	}

	pub fn latest() -> Self {
		Self::default()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionIdentifier {
	pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationIdentifier {
	pub index: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub network_index: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountIdentifier {
	pub address: String,
}
