//! Mock implementation of the node client.
//!
//! Lets the gateway services run against scripted node answers without a
//! network connection.

use async_trait::async_trait;
use mockall::mock;

use utxo_rosetta_gateway::{
	models::{ChainStatus, UtxoBlock, UtxoBlockWithTransactions},
	services::blockchain::{BlockChainError, NodeClient},
};

mock! {
	/// Mock implementation of the node client contract.
	pub NodeClient {}

	#[async_trait]
	impl NodeClient for NodeClient {
		async fn get_chain_status(&self) -> Result<ChainStatus, BlockChainError>;
		async fn get_block_by_height(&self, height: i64) -> Result<UtxoBlock, BlockChainError>;
		async fn get_block_by_hash(&self, hash: &str) -> Result<UtxoBlock, BlockChainError>;
		async fn get_block_with_transactions(
			&self,
			hash: &str,
		) -> Result<UtxoBlockWithTransactions, BlockChainError>;
		async fn get_tip_block(&self) -> Result<UtxoBlock, BlockChainError>;
	}
}
