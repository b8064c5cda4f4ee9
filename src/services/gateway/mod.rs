//! Translation and resolution layer.
//!
//! Sits between the canonical endpoints and the node client:
//!
//! - Network validation of every request (fail fast)
//! - Block resolution by index, hash or chain tip, with parent lookup
//! - Mapping of transaction outputs to operations with minor-unit amounts
//! - Aggregation of the network status
//! - The fixed error catalog returned to callers

mod block;
mod error;
mod network;
mod operations;
mod resolver;
mod status;
mod validation;

use std::sync::Arc;

pub use block::BlockService;
pub use error::GatewayError;
pub use network::NetworkService;
pub use operations::{
	is_valid_payment_type, map_operations, map_transaction, to_minor_units, PaymentType,
	OPERATION_STATUS_FAIL, OPERATION_STATUS_SUCCESS, OPERATION_TYPE_TRANSFER,
};
pub use resolver::{to_block_response, BlockResolver};
pub use status::StatusAggregator;
pub use validation::validate_network_identifier;

use crate::{models::GatewayConfig, services::blockchain::NodeClient};

/// All canonical services sharing one configuration and one node client
#[derive(Debug)]
pub struct Gateway<C: NodeClient> {
	pub network: NetworkService<C>,
	pub block: BlockService<C>,
}

impl<C: NodeClient> Clone for Gateway<C> {
	fn clone(&self) -> Self {
		Self {
			network: self.network.clone(),
			block: self.block.clone(),
		}
	}
}

impl<C: NodeClient> Gateway<C> {
	pub fn new(config: Arc<GatewayConfig>, client: Arc<C>) -> Self {
		Self {
			network: NetworkService::new(config.clone(), client.clone()),
			block: BlockService::new(config, client),
		}
	}
}
