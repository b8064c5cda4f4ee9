//! Rosetta gateway entry point.
//!
//! # Flow
//! 1. Parses the CLI and loads `.env`
//! 2. Sets up logging
//! 3. Loads and validates the gateway configuration
//! 4. Connects to the node and builds the canonical services
//! 5. Serves the canonical API, plus metrics when enabled
//! 6. Handles graceful shutdown on Ctrl+C

use std::{
	env::{set_var, var},
	sync::Arc,
};

use clap::{Arg, ArgAction, Command};
use dotenvy::dotenv;
use tracing::{error, info};

use utxo_rosetta_gateway::{
	api::create_api_server,
	bootstrap::{initialize_gateway, load_config},
	models::{ConfigLoader, GatewayConfig},
	utils::{
		constants::DEFAULT_METRICS_ADDRESS, logging::setup_logging,
		metrics::server::create_metrics_server,
	},
};

fn cli() -> Command {
	Command::new("utxo-rosetta-gateway")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Exposes a Bitcoin Core compatible node through the block and network endpoints \
			 of the Rosetta Data API.",
		)
		.arg(
			Arg::new("config")
				.long("config")
				.help("Path to the gateway configuration file (default: config/gateway.json)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("log-file")
				.long("log-file")
				.help("Write logs to file instead of stdout")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("log-path")
				.long("log-path")
				.help("Path to store log files (default: logs/)")
				.value_name("PATH"),
		)
		.arg(
			Arg::new("metrics")
				.long("metrics")
				.help("Enable metrics server")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("metrics-address")
				.long("metrics-address")
				.help("Address to start the metrics server on (default: 127.0.0.1:8081)")
				.value_name("HOST:PORT"),
		)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let matches = cli().get_matches();

	dotenv().ok();

	// CLI options only apply when the environment does not already set them
	if matches.get_flag("log-file") && var("LOG_MODE").is_err() {
		set_var("LOG_MODE", "file");
	}

	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(path) = matches.get_one::<String>("log-path") {
		if var("LOG_DATA_DIR").is_err() {
			set_var("LOG_DATA_DIR", path);
		}
	}

	setup_logging().unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config_path = GatewayConfig::resolve_path(
		matches.get_one::<String>("config").map(String::as_str),
	);
	let config = load_config(&config_path).map_err(|e| {
		anyhow::anyhow!(
			"Failed to load configuration from {}: {}",
			config_path.display(),
			e
		)
	})?;
	let config = Arc::new(config);

	let gateway = initialize_gateway(config.clone())
		.await
		.map_err(|e| anyhow::anyhow!("Failed to connect to node: {}", e))?;

	let metrics_enabled =
		matches.get_flag("metrics") || var("METRICS_ENABLED").map(|v| v == "true").unwrap_or(false);

	let metrics_server = if metrics_enabled {
		let metrics_address = matches
			.get_one::<String>("metrics-address")
			.cloned()
			.unwrap_or_else(|| DEFAULT_METRICS_ADDRESS.to_string());

		match create_metrics_server(metrics_address) {
			Ok(server) => Some(server),
			Err(e) => {
				error!("Failed to create metrics server: {}", e);
				None
			}
		}
	} else {
		info!("Metrics server disabled. Use --metrics flag or METRICS_ENABLED=true to enable");
		None
	};

	let api_server = create_api_server(config.server.bind_address(), gateway)?;
	let api_handle = api_server.handle();

	info!("Gateway started. Press Ctrl+C to shutdown");

	let ctrl_c = tokio::signal::ctrl_c();

	match metrics_server {
		Some(metrics_future) => {
			let metrics_handle = metrics_future.handle();
			tokio::select! {
				result = ctrl_c => {
					if let Err(e) = result {
						error!("Error waiting for Ctrl+C: {}", e);
					}
					info!("Shutdown signal received, stopping servers...");
				}
				result = api_server => {
					if let Err(e) = result {
						error!("API server error: {}", e);
					}
					info!("API server stopped, shutting down...");
				}
				result = metrics_future => {
					if let Err(e) = result {
						error!("Metrics server error: {}", e);
					}
					info!("Metrics server stopped, shutting down...");
				}
			}
			metrics_handle.stop(true).await;
		}
		None => {
			tokio::select! {
				result = ctrl_c => {
					if let Err(e) = result {
						error!("Error waiting for Ctrl+C: {}", e);
					}
					info!("Shutdown signal received, stopping servers...");
				}
				result = api_server => {
					if let Err(e) = result {
						error!("API server error: {}", e);
					}
					info!("API server stopped, shutting down...");
				}
			}
		}
	}

	api_handle.stop(true).await;

	info!("Shutdown complete");
	Ok(())
}
