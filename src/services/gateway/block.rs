//! Block endpoints: block and block transaction.

use std::sync::Arc;
use tracing::instrument;

use crate::{
	models::{
		BlockRequest, BlockResponse, BlockTransactionRequest, BlockTransactionResponse,
		GatewayConfig, PartialBlockIdentifier,
	},
	services::{
		blockchain::NodeClient,
		gateway::{
			map_transaction, to_block_response, validate_network_identifier, BlockResolver,
			GatewayError,
		},
	},
};

/// Serves the block-level queries of the canonical API
#[derive(Debug)]
pub struct BlockService<C: NodeClient> {
	config: Arc<GatewayConfig>,
	client: Arc<C>,
	resolver: BlockResolver<C>,
}

impl<C: NodeClient> Clone for BlockService<C> {
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			client: self.client.clone(),
			resolver: self.resolver.clone(),
		}
	}
}

impl<C: NodeClient> BlockService<C> {
	pub fn new(config: Arc<GatewayConfig>, client: Arc<C>) -> Self {
		Self {
			resolver: BlockResolver::new(client.clone()),
			config,
			client,
		}
	}

	/// Returns the selected block with its parent identifier and transaction ids
	#[instrument(skip_all, fields(index = ?request.block_identifier.index, hash = ?request.block_identifier.hash))]
	pub async fn block(&self, request: &BlockRequest) -> Result<BlockResponse, GatewayError> {
		validate_network_identifier(
			&self.config.network_identifier,
			request.network_identifier.as_ref(),
		)?;

		let (block, parent) = self.resolver.resolve(&request.block_identifier).await?;
		Ok(to_block_response(&block, &parent))
	}

	/// Returns one transaction of a block with its operations
	#[instrument(skip_all, fields(transaction = %request.transaction_identifier.hash))]
	pub async fn block_transaction(
		&self,
		request: &BlockTransactionRequest,
	) -> Result<BlockTransactionResponse, GatewayError> {
		validate_network_identifier(
			&self.config.network_identifier,
			request.network_identifier.as_ref(),
		)?;

		let hash = self.block_hash(&request.block_identifier).await?;

		let block = self
			.client
			.get_block_with_transactions(&hash)
			.await
			.map_err(|e| {
				tracing::warn!(hash = %hash, error = %e, "Failed to fetch block with transactions");
				GatewayError::BlockUnavailable
			})?;

		if let Some(index) = request.block_identifier.index {
			if block.height != index {
				tracing::warn!(
					hash = %hash,
					requested = index,
					actual = block.height,
					"Block index does not match block hash"
				);
				return Err(GatewayError::BlockUnavailable);
			}
		}

		let transaction = block
			.find_transaction(&request.transaction_identifier.hash)
			.ok_or(GatewayError::TransactionUnavailable)?;

		Ok(BlockTransactionResponse {
			transaction: map_transaction(transaction, &self.config.currency)?,
		})
	}

	/// Hash of the selected block: given directly, or looked up by index
	async fn block_hash(&self, selector: &PartialBlockIdentifier) -> Result<String, GatewayError> {
		match (&selector.hash, selector.index) {
			(Some(hash), _) => Ok(hash.clone()),
			(None, Some(index)) => self
				.client
				.get_block_by_height(index)
				.await
				.map(|block| block.hash)
				.map_err(|e| {
					tracing::warn!(index, error = %e, "Failed to fetch block by index");
					GatewayError::BlockUnavailable
				}),
			(None, None) => Err(GatewayError::BlockUnavailable),
		}
	}
}
