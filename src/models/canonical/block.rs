//! Block, transaction and operation objects of the canonical model.

use serde::{Deserialize, Serialize};

use crate::models::{
	AccountIdentifier, BlockIdentifier, CurrencySpec, OperationIdentifier, TransactionIdentifier,
};

/// Amount in minor units of a currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
	/// Signed integer string
	pub value: String,
	pub currency: CurrencySpec,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
	pub operation_identifier: OperationIdentifier,
	#[serde(rename = "type")]
	pub type_: String,
	pub status: String,
	pub account: AccountIdentifier,
	pub amount: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
	/// Serialized size in bytes
	pub size: u64,
	#[serde(rename = "lockTime")]
	pub lock_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
	pub transaction_identifier: TransactionIdentifier,
	pub operations: Vec<Operation>,
	pub metadata: TransactionMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
	pub block_identifier: BlockIdentifier,
	pub parent_block_identifier: BlockIdentifier,
	/// Milliseconds since the UNIX epoch
	pub timestamp: i64,
	#[serde(default)]
	pub transactions: Vec<Transaction>,
}
