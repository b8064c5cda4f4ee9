//! UTXO (Bitcoin Core compatible) node client implementation.
//!
//! Implements the [`NodeClient`] contract on top of the node's JSON-RPC methods:
//! `getblockchaininfo`, `getblockhash`, `getblock` and `getbestblockhash`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::{
	models::{ChainStatus, NodeConfig, UtxoBlock, UtxoBlockWithTransactions},
	services::blockchain::{
		transports::{BlockchainTransport, HttpTransportClient},
		BlockChainError, NodeClient,
	},
	utils::metrics::NODE_RPC_DURATION_SECONDS,
};

/// `getblock` verbosity returning transaction ids only
const VERBOSITY_TXIDS: u8 = 1;

/// `getblock` verbosity returning decoded transactions
const VERBOSITY_TRANSACTIONS: u8 = 2;

/// JSON-RPC error codes the node uses for unknown blocks
/// - -5: RPC_INVALID_ADDRESS_OR_KEY ("Block not found")
/// - -8: RPC_INVALID_PARAMETER ("Block height out of range")
const BLOCK_NOT_FOUND_CODES: [i64; 2] = [-5, -8];

/// Client for Bitcoin Core compatible nodes
#[derive(Clone, Debug)]
pub struct UtxoClient<T: Send + Sync + Clone> {
	/// The underlying transport for RPC communication
	transport: T,
}

impl<T: Send + Sync + Clone> UtxoClient<T> {
	/// Creates a new client instance with a specific transport client
	pub fn new_with_transport(transport: T) -> Self {
		Self { transport }
	}
}

impl UtxoClient<HttpTransportClient> {
	/// Creates a new client connected to the configured node
	///
	/// # Arguments
	/// * `node` - Node configuration containing RPC endpoints and credentials
	pub async fn new(node: &NodeConfig) -> Result<Self, BlockChainError> {
		let transport = HttpTransportClient::new(node).await?;
		Ok(Self::new_with_transport(transport))
	}
}

impl<T: Send + Sync + Clone + BlockchainTransport> UtxoClient<T> {
	/// Calls a JSON-RPC method and decodes its `result`
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name
	/// * `params` - Positional parameters
	/// * `selector` - Human readable description of the requested object, used in
	///   not-found errors
	async fn call<R: DeserializeOwned>(
		&self,
		method: &str,
		params: Value,
		selector: &str,
	) -> Result<R, BlockChainError> {
		let timer = NODE_RPC_DURATION_SECONDS
			.with_label_values(&[method])
			.start_timer();
		let response = self.transport.send_raw_request(method, Some(params)).await;
		timer.observe_duration();
		let response = response?;

		if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
			let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
			let message = error
				.get("message")
				.and_then(Value::as_str)
				.unwrap_or("unknown error");

			if BLOCK_NOT_FOUND_CODES.contains(&code) {
				return Err(BlockChainError::block_not_found(selector));
			}

			return Err(BlockChainError::request_error(format!(
				"{} failed with code {}: {}",
				method, code, message
			)));
		}

		let result = response.get("result").ok_or_else(|| {
			BlockChainError::request_error(format!("Missing 'result' field in {} response", method))
		})?;

		if result.is_null() {
			return Err(BlockChainError::block_not_found(selector));
		}

		serde_json::from_value(result.clone()).map_err(|e| {
			BlockChainError::request_error(format!("Failed to parse {} response: {}", method, e))
		})
	}
}

#[async_trait]
impl<T: Send + Sync + Clone + BlockchainTransport> NodeClient for UtxoClient<T> {
	async fn get_chain_status(&self) -> Result<ChainStatus, BlockChainError> {
		self.call("getblockchaininfo", json!([]), "chain status")
			.await
	}

	/// Resolves the hash at the given height, then fetches the block
	async fn get_block_by_height(&self, height: i64) -> Result<UtxoBlock, BlockChainError> {
		if height < 0 {
			return Err(BlockChainError::block_not_found(format!("height {}", height)));
		}

		let hash: String = self
			.call("getblockhash", json!([height]), &format!("height {}", height))
			.await?;
		self.get_block_by_hash(&hash).await
	}

	async fn get_block_by_hash(&self, hash: &str) -> Result<UtxoBlock, BlockChainError> {
		self.call(
			"getblock",
			json!([hash, VERBOSITY_TXIDS]),
			&format!("hash {}", hash),
		)
		.await
	}

	async fn get_block_with_transactions(
		&self,
		hash: &str,
	) -> Result<UtxoBlockWithTransactions, BlockChainError> {
		self.call(
			"getblock",
			json!([hash, VERBOSITY_TRANSACTIONS]),
			&format!("hash {}", hash),
		)
		.await
	}

	async fn get_tip_block(&self) -> Result<UtxoBlock, BlockChainError> {
		let hash: String = self
			.call("getbestblockhash", json!([]), "chain tip")
			.await?;
		self.get_block_by_hash(&hash).await
	}
}
