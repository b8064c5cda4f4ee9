use serde::{Deserialize, Serialize};

/// Chain summary as returned by `getblockchaininfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStatus {
	/// Chain name reported by the node (main, test, regtest)
	#[serde(default)]
	pub chain: String,

	/// Height of the most-work fully validated chain tip
	pub blocks: i64,

	/// Hash of the chain tip
	#[serde(rename = "bestblockhash", default)]
	pub best_block_hash: String,
}
