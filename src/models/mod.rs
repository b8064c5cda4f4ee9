//! Domain models and data structures of the gateway.
//!
//! - `blockchain`: Shapes returned by the node RPC interface
//! - `canonical`: Chain-agnostic objects exposed to clients
//! - `config`: Configuration loading and validation
//! - `core`: Network identity, currency and endpoint definitions

mod blockchain;
mod canonical;
mod config;
mod core;

// Re-export node RPC types
pub use blockchain::utxo::{
	ChainStatus, UtxoBlock, UtxoBlockWithTransactions, UtxoOutput, UtxoScriptPubKey,
	UtxoTransaction,
};

// Re-export canonical types
pub use canonical::{
	AccountIdentifier, Allow, Amount, ApiError, Block, BlockIdentifier, BlockRequest,
	BlockResponse, BlockTransactionRequest, BlockTransactionResponse, MetadataRequest,
	NetworkIdentifier, NetworkListResponse, NetworkOptionsResponse, NetworkRequest,
	NetworkStatusResponse, Operation, OperationIdentifier, OperationStatus,
	PartialBlockIdentifier, Peer, SubNetworkIdentifier, Transaction, TransactionIdentifier,
	TransactionMetadata, Version,
};

// Re-export core types
pub use core::{CurrencySpec, NetworkIdentity, RpcUrl};

// Re-export config types
pub use config::{
	ConfigError, ConfigLoader, GatewayConfig, NodeConfig, ServerConfig, VersionConfig,
	CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH,
};
