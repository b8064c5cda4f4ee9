//! API server construction.

use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use tracing::info;

use crate::{
	api::{
		handlers, BLOCK_PATH, BLOCK_TRANSACTION_PATH, NETWORK_LIST_PATH, NETWORK_OPTIONS_PATH,
		NETWORK_STATUS_PATH,
	},
	services::{blockchain::NodeClient, gateway::Gateway},
};

/// Registers the canonical routes for a gateway over node client `C`
pub fn configure_routes<C: NodeClient + 'static>(cfg: &mut web::ServiceConfig) {
	cfg.route(NETWORK_LIST_PATH, web::post().to(handlers::network_list::<C>))
		.route(
			NETWORK_OPTIONS_PATH,
			web::post().to(handlers::network_options::<C>),
		)
		.route(
			NETWORK_STATUS_PATH,
			web::post().to(handlers::network_status::<C>),
		)
		.route(BLOCK_PATH, web::post().to(handlers::block::<C>))
		.route(
			BLOCK_TRANSACTION_PATH,
			web::post().to(handlers::block_transaction::<C>),
		);
}

/// Binds the API server; the returned future runs it until stopped
pub fn create_api_server<C: NodeClient + 'static>(
	bind_address: String,
	gateway: Gateway<C>,
) -> std::io::Result<actix_web::dev::Server> {
	info!("Starting API server on {}", bind_address);

	let gateway = web::Data::new(gateway);
	Ok(HttpServer::new(move || {
		App::new()
			.wrap(NormalizePath::trim())
			.app_data(gateway.clone())
			.configure(configure_routes::<C>)
	})
	.bind(bind_address)?
	.shutdown_timeout(5)
	.run())
}
