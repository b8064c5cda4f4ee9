//! Network status aggregation.

use std::sync::Arc;

use crate::{
	models::NetworkStatusResponse,
	services::{
		blockchain::{BlockChainError, NodeClient},
		gateway::GatewayError,
	},
};

/// Composes chain status, tip block and genesis block into a network status
///
/// The aggregation is all or nothing: any failed lookup yields
/// [`GatewayError::NodeStatusUnavailable`] and no partial status.
#[derive(Debug)]
pub struct StatusAggregator<C: NodeClient> {
	client: Arc<C>,
}

impl<C: NodeClient> Clone for StatusAggregator<C> {
	fn clone(&self) -> Self {
		Self {
			client: self.client.clone(),
		}
	}
}

impl<C: NodeClient> StatusAggregator<C> {
	pub fn new(client: Arc<C>) -> Self {
		Self { client }
	}

	pub async fn status(&self) -> Result<NetworkStatusResponse, GatewayError> {
		self.try_status().await.map_err(|e| {
			tracing::warn!(error = %e, "Network status aggregation failed");
			GatewayError::NodeStatusUnavailable
		})
	}

	async fn try_status(&self) -> Result<NetworkStatusResponse, BlockChainError> {
		let chain_status = self.client.get_chain_status().await?;
		let tip = self.client.get_block_by_height(chain_status.blocks).await?;
		let genesis = self.client.get_block_by_height(0).await?;

		Ok(NetworkStatusResponse {
			current_block_identifier: tip.identifier(),
			current_block_timestamp: tip.timestamp_millis(),
			genesis_block_identifier: genesis.identifier(),
			peers: Vec::new(),
		})
	}
}
