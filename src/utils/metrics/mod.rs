//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines the request, error and node latency metrics.

pub mod server;
use lazy_static::lazy_static;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

lazy_static! {
	// Global Prometheus registry.
	pub static ref REGISTRY: Registry = Registry::new();

	// Requests served, per canonical endpoint.
	pub static ref API_REQUESTS_TOTAL: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("api_requests_total", "Total number of requests per endpoint"),
			&["endpoint"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Error responses, per endpoint and catalog code.
	pub static ref API_ERRORS_TOTAL: IntCounterVec = {
		let counter = IntCounterVec::new(
			Opts::new("api_errors_total", "Total number of error responses per endpoint and code"),
			&["endpoint", "code"]
		).unwrap();
		REGISTRY.register(Box::new(counter.clone())).unwrap();
		counter
	};

	// Node JSON-RPC latency, per method.
	pub static ref NODE_RPC_DURATION_SECONDS: HistogramVec = {
		let histogram = HistogramVec::new(
			HistogramOpts::new("node_rpc_duration_seconds", "Latency of node RPC calls in seconds"),
			&["method"]
		).unwrap();
		REGISTRY.register(Box::new(histogram.clone())).unwrap();
		histogram
	};
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
	let encoder = TextEncoder::new();
	let metric_families = REGISTRY.gather();
	let mut buffer = Vec::new();
	encoder.encode(&metric_families, &mut buffer)?;
	Ok(buffer)
}

/// Counts one request to `endpoint`
pub fn record_request(endpoint: &str) {
	API_REQUESTS_TOTAL.with_label_values(&[endpoint]).inc();
}

/// Counts one error response from `endpoint`
pub fn record_error(endpoint: &str, code: i32) {
	let code = code.to_string();
	API_ERRORS_TOTAL
		.with_label_values(&[endpoint, code.as_str()])
		.inc();
}
