//! Block resolution.
//!
//! Turns a block selector into the target block and its logical parent. Any
//! node failure collapses into [`GatewayError::BlockUnavailable`].

use std::sync::Arc;

use crate::{
	models::{Block, BlockResponse, PartialBlockIdentifier, TransactionIdentifier, UtxoBlock},
	services::{
		blockchain::{BlockChainError, NodeClient},
		gateway::GatewayError,
	},
};

/// How the parent of a resolved block is looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParentLookup {
	/// Follow the recorded previous hash, fall back to height - 1 when absent
	PreferPreviousHash,
	/// Follow the recorded previous hash only
	PreviousHashOnly,
}

/// Resolves block selectors against a node
#[derive(Debug)]
pub struct BlockResolver<C: NodeClient> {
	client: Arc<C>,
}

impl<C: NodeClient> Clone for BlockResolver<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
		}
	}
}

impl<C: NodeClient> BlockResolver<C> {
	pub fn new(client: Arc<C>) -> Self {
		Self { client }
	}

	/// Resolves a selector into `(block, parent)`
	///
	/// Selector precedence: index, then hash, then the chain tip when neither is
	/// given. The genesis block is its own parent.
	pub async fn resolve(
		&self,
		selector: &PartialBlockIdentifier,
	) -> Result<(UtxoBlock, UtxoBlock), GatewayError> {
		self.try_resolve(selector).await.map_err(|e| {
			tracing::warn!(selector = ?selector, error = %e, "Block resolution failed");
			GatewayError::BlockUnavailable
		})
	}

	async fn try_resolve(
		&self,
		selector: &PartialBlockIdentifier,
	) -> Result<(UtxoBlock, UtxoBlock), BlockChainError> {
		let (block, lookup) = match (selector.index, selector.hash.as_deref()) {
			(Some(index), _) => (
				self.client.get_block_by_height(index).await?,
				ParentLookup::PreferPreviousHash,
			),
			(None, Some(hash)) => (
				self.client.get_block_by_hash(hash).await?,
				ParentLookup::PreviousHashOnly,
			),
			(None, None) => (
				self.client.get_tip_block().await?,
				ParentLookup::PreviousHashOnly,
			),
		};

		let parent = self.parent_of(&block, lookup).await?;
		Ok((block, parent))
	}

	async fn parent_of(
		&self,
		block: &UtxoBlock,
		lookup: ParentLookup,
	) -> Result<UtxoBlock, BlockChainError> {
		if block.is_genesis() {
			return Ok(block.clone());
		}

		match (block.previous_hash.as_deref(), lookup) {
			(Some(previous_hash), _) => self.client.get_block_by_hash(previous_hash).await,
			(None, ParentLookup::PreferPreviousHash) => {
				self.client.get_block_by_height(block.height - 1).await
			}
			(None, ParentLookup::PreviousHashOnly) => Err(BlockChainError::internal_error(
				format!("block {} carries no previous block hash", block.hash),
			)),
		}
	}
}

/// Builds the canonical block response from a resolved block and its parent
pub fn to_block_response(block: &UtxoBlock, parent: &UtxoBlock) -> BlockResponse {
	BlockResponse {
		block: Block {
			block_identifier: block.identifier(),
			parent_block_identifier: parent.identifier(),
			timestamp: block.timestamp_millis(),
			transactions: Vec::new(),
		},
		other_transactions: block
			.tx
			.iter()
			.map(|hash| TransactionIdentifier { hash: hash.clone() })
			.collect(),
	}
}
