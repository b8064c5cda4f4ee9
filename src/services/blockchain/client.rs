//! Node client contract.
//!
//! This module defines the capability interface the gateway consumes. The
//! translation layer depends only on this trait, never on a concrete transport.

use async_trait::async_trait;

use crate::{
	models::{ChainStatus, UtxoBlock, UtxoBlockWithTransactions},
	services::blockchain::BlockChainError,
};

/// Read access to a UTXO node
///
/// Implementations must be safe to share across concurrently running requests.
#[async_trait]
pub trait NodeClient: Send + Sync {
	/// Retrieves the chain summary, most importantly the tip height
	async fn get_chain_status(&self) -> Result<ChainStatus, BlockChainError>;

	/// Retrieves the block at the given height of the active chain
	async fn get_block_by_height(&self, height: i64) -> Result<UtxoBlock, BlockChainError>;

	/// Retrieves the block with the given hash
	async fn get_block_by_hash(&self, hash: &str) -> Result<UtxoBlock, BlockChainError>;

	/// Retrieves the block with the given hash including decoded transactions
	async fn get_block_with_transactions(
		&self,
		hash: &str,
	) -> Result<UtxoBlockWithTransactions, BlockChainError>;

	/// Retrieves the block at the tip of the active chain
	async fn get_tip_block(&self) -> Result<UtxoBlock, BlockChainError>;
}
