//! Node client interfaces and implementations.
//!
//! Provides abstractions and concrete implementations for reading from UTXO
//! nodes. Includes:
//!
//! - The node client contract consumed by the gateway
//! - The JSON-RPC client for Bitcoin Core compatible nodes
//! - Network transport implementations
//! - Error handling for node operations

mod client;
mod clients;
mod error;
mod transports;

pub use client::NodeClient;
pub use clients::UtxoClient;
pub use error::BlockChainError;
pub use transports::{
	BlockchainTransport, EndpointManager, HttpTransportClient, RotatingTransport,
	TransientErrorRetryStrategy, TransportError, JSON_RPC_REQUEST_ID, ROTATE_ON_ERROR_CODES,
};
