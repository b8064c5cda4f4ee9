//! UTXO block data structures.

use serde::{Deserialize, Serialize};

use crate::models::{blockchain::utxo::UtxoTransaction, BlockIdentifier};

/// Block header and transaction ids as returned by `getblock <hash> 1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
	/// Block hash (hex)
	pub hash: String,

	/// Block height
	pub height: i64,

	/// Block time in seconds since the UNIX epoch
	pub time: i64,

	/// Hash of the previous block, absent for the genesis block
	#[serde(
		rename = "previousblockhash",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub previous_hash: Option<String>,

	/// Transaction ids in block order
	#[serde(default)]
	pub tx: Vec<String>,
}

impl Block {
	/// Identifier of this block in the canonical model
	pub fn identifier(&self) -> BlockIdentifier {
		BlockIdentifier {
			index: self.height,
			hash: self.hash.clone(),
		}
	}

	/// Block time converted to milliseconds
	pub fn timestamp_millis(&self) -> i64 {
		self.time.saturating_mul(1000)
	}

	/// Whether this is the first block of the chain
	pub fn is_genesis(&self) -> bool {
		self.height == 0
	}
}

/// Block with fully decoded transactions as returned by `getblock <hash> 2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockWithTransactions {
	pub hash: String,

	pub height: i64,

	pub time: i64,

	#[serde(
		rename = "previousblockhash",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub previous_hash: Option<String>,

	#[serde(default)]
	pub tx: Vec<UtxoTransaction>,
}

impl BlockWithTransactions {
	/// Finds a transaction of this block by its id
	pub fn find_transaction(&self, txid: &str) -> Option<&UtxoTransaction> {
		self.tx.iter().find(|tx| tx.txid == txid)
	}
}
