//! Rosetta Data API gateway for UTXO-style blockchain nodes.
//!
//! Exposes a Bitcoin Core compatible node (DigiByte, Zcoin, Bitcoin, ...) through the
//! chain-agnostic block and network query surface of the Rosetta Data API.
//!
//! # Architecture
//! - `models`: Configuration, node RPC shapes and canonical Rosetta shapes
//! - `services::blockchain`: Node client contract, JSON-RPC client and transports
//! - `services::gateway`: Request validation, block resolution, operation mapping and status
//! - `api`: HTTP server exposing the canonical endpoints
//! - `utils`: Logging, metrics and HTTP helpers

pub mod api;
pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
