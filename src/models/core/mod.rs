//! Core domain models of the gateway.
//!
//! This module contains the immutable values established once at startup:
//! - Network identity: which blockchain and network the gateway serves
//! - Currency specification: symbol and minor-unit scaling of every amount
//! - RPC endpoints of the backing node

mod network;

pub use network::{CurrencySpec, NetworkIdentity, RpcUrl};
