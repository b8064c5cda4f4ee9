//! UTXO transaction data structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decoded transaction as embedded in `getblock <hash> 2`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
	/// Transaction id, the identifier listed by `getblock <hash> 1`
	pub txid: String,

	/// Serialized size in bytes
	#[serde(default)]
	pub size: u64,

	#[serde(default)]
	pub locktime: u32,

	/// Outputs in on-chain order
	#[serde(default)]
	pub vout: Vec<Output>,
}

/// A single transaction output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
	/// Value in whole coins, as printed by the node
	#[serde(with = "rust_decimal::serde::arbitrary_precision")]
	pub value: Decimal,

	/// Position of the output inside its transaction
	pub n: u32,

	#[serde(rename = "scriptPubKey")]
	pub script_pub_key: ScriptPubKey,
}

/// Locking script summary of an output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptPubKey {
	/// Script classification (pubkeyhash, witness_v0_keyhash, nulldata, ...)
	#[serde(rename = "type")]
	pub script_type: String,

	/// Addresses reported by nodes that predate the single `address` field
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub addresses: Vec<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub address: Option<String>,
}

impl ScriptPubKey {
	/// All addresses the script pays to, legacy list first, without duplicates
	pub fn payment_addresses(&self) -> Vec<&str> {
		let mut addresses: Vec<&str> = self.addresses.iter().map(String::as_str).collect();
		if let Some(address) = self.address.as_deref() {
			if !addresses.contains(&address) {
				addresses.push(address);
			}
		}
		addresses
	}
}
