//! Blockchain-specific model implementations.
//!
//! This module contains the shapes returned by the node RPC interface. Only
//! Bitcoin Core compatible (UTXO) nodes are supported.

pub mod utxo;
