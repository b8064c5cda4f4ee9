//! Chain-agnostic (Rosetta Data API) objects exposed to clients.
//!
//! Every response tree is built fresh per request from node RPC responses
//! and is never mutated afterwards.

mod api;
mod block;
mod identifiers;

pub use api::{
	Allow, ApiError, BlockRequest, BlockResponse, BlockTransactionRequest,
	BlockTransactionResponse, MetadataRequest, NetworkListResponse, NetworkOptionsResponse,
	NetworkRequest, NetworkStatusResponse, OperationStatus, Peer, Version,
};
pub use block::{Amount, Block, Operation, Transaction, TransactionMetadata};
pub use identifiers::{
	AccountIdentifier, BlockIdentifier, NetworkIdentifier, OperationIdentifier,
	PartialBlockIdentifier, SubNetworkIdentifier, TransactionIdentifier,
};
