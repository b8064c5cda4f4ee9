//! Utility modules for common functionality.
//!
//! - constants: Constants for the application
//! - http: Retryable HTTP client construction
//! - logging: Logging utilities
//! - metrics: Metrics utilities

pub mod constants;
pub mod http;
pub mod logging;
pub mod metrics;

pub use constants::*;
