//! UTXO (Bitcoin Core compatible) blockchain specific data structures.
//!
//! These types mirror the JSON documents returned by `getblockchaininfo` and the
//! verbose forms of `getblock`.

mod block;
mod status;
mod transaction;

pub use block::{Block as UtxoBlock, BlockWithTransactions as UtxoBlockWithTransactions};
pub use status::ChainStatus;
pub use transaction::{
	Output as UtxoOutput, ScriptPubKey as UtxoScriptPubKey, Transaction as UtxoTransaction,
};
