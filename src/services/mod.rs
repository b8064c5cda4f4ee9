//! Services of the gateway.
//!
//! - `blockchain`: Node client contract, JSON-RPC client and transports
//! - `gateway`: Translation and resolution layer behind the canonical endpoints

pub mod blockchain;
pub mod gateway;
