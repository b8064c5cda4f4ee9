//! Network endpoints: list, options and status.

use std::sync::Arc;
use tracing::instrument;

use crate::{
	models::{
		Allow, GatewayConfig, MetadataRequest, NetworkIdentifier, NetworkListResponse,
		NetworkOptionsResponse, NetworkRequest, NetworkStatusResponse, OperationStatus, Version,
	},
	services::{
		blockchain::NodeClient,
		gateway::{
			validate_network_identifier, GatewayError, StatusAggregator, OPERATION_STATUS_FAIL,
			OPERATION_STATUS_SUCCESS, OPERATION_TYPE_TRANSFER,
		},
	},
};

/// Serves the network-level queries of the canonical API
#[derive(Debug)]
pub struct NetworkService<C: NodeClient> {
	config: Arc<GatewayConfig>,
	status_aggregator: StatusAggregator<C>,
}

impl<C: NodeClient> Clone for NetworkService<C> {
	fn clone(&self) -> Self {
		Self {
			config: self.config.clone(),
			status_aggregator: self.status_aggregator.clone(),
		}
	}
}

impl<C: NodeClient> NetworkService<C> {
	pub fn new(config: Arc<GatewayConfig>, client: Arc<C>) -> Self {
		Self {
			config,
			status_aggregator: StatusAggregator::new(client),
		}
	}

	/// Lists the single network this gateway serves
	pub fn list(&self, _request: &MetadataRequest) -> NetworkListResponse {
		NetworkListResponse {
			network_identifiers: vec![NetworkIdentifier::from(&self.config.network_identifier)],
		}
	}

	/// Advertises versions, operation statuses and types, and the error catalog
	pub fn options(&self, request: &NetworkRequest) -> Result<NetworkOptionsResponse, GatewayError> {
		validate_network_identifier(
			&self.config.network_identifier,
			request.network_identifier.as_ref(),
		)?;

		Ok(NetworkOptionsResponse {
			version: Version {
				rosetta_version: self.config.version.rosetta_version.clone(),
				node_version: self.config.version.node_version.clone(),
			},
			allow: Allow {
				operation_statuses: vec![
					OperationStatus {
						status: OPERATION_STATUS_SUCCESS.to_string(),
						successful: true,
					},
					OperationStatus {
						status: OPERATION_STATUS_FAIL.to_string(),
						successful: false,
					},
				],
				operation_types: vec![OPERATION_TYPE_TRANSFER.to_string()],
				errors: GatewayError::catalog(),
				historical_balance_lookup: false,
			},
		})
	}

	/// Reports the chain tip and genesis block
	#[instrument(skip_all)]
	pub async fn status(
		&self,
		request: &NetworkRequest,
	) -> Result<NetworkStatusResponse, GatewayError> {
		validate_network_identifier(
			&self.config.network_identifier,
			request.network_identifier.as_ref(),
		)?;

		self.status_aggregator.status().await
	}
}
