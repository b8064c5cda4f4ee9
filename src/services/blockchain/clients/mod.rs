//! Node client implementations.
//!
//! Exactly one implementation of the node client contract exists: the JSON-RPC
//! client for Bitcoin Core compatible nodes.

mod utxo;

pub use utxo::UtxoClient;
