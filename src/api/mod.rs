//! HTTP surface of the canonical API.
//!
//! Every endpoint is a `POST` with a JSON body. Failures are rendered as
//! HTTP 500 carrying the catalog entry of the [`GatewayError`] kind.
//!
//! [`GatewayError`]: crate::services::gateway::GatewayError

mod error;
mod handlers;
mod server;

pub use server::{configure_routes, create_api_server};

pub const NETWORK_LIST_PATH: &str = "/network/list";
pub const NETWORK_OPTIONS_PATH: &str = "/network/options";
pub const NETWORK_STATUS_PATH: &str = "/network/status";
pub const BLOCK_PATH: &str = "/block";
pub const BLOCK_TRANSACTION_PATH: &str = "/block/transaction";
