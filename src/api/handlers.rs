//! Endpoint handlers.
//!
//! Handlers are generic over the node client. Each one counts the request and
//! any error it returns.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::{
	api::{
		BLOCK_PATH, BLOCK_TRANSACTION_PATH, NETWORK_LIST_PATH, NETWORK_OPTIONS_PATH,
		NETWORK_STATUS_PATH,
	},
	models::{BlockRequest, BlockTransactionRequest, MetadataRequest, NetworkRequest},
	services::{
		blockchain::NodeClient,
		gateway::{Gateway, GatewayError},
	},
	utils::metrics::{record_error, record_request},
};

type HandlerResult = Result<HttpResponse, GatewayError>;

fn respond<T: Serialize>(endpoint: &str, result: Result<T, GatewayError>) -> HandlerResult {
	match result {
		Ok(body) => Ok(HttpResponse::Ok().json(body)),
		Err(e) => {
			record_error(endpoint, e.code());
			tracing::debug!(endpoint, code = e.code(), error = %e, "Request failed");
			Err(e)
		}
	}
}

pub async fn network_list<C: NodeClient + 'static>(
	gateway: web::Data<Gateway<C>>,
	request: web::Json<MetadataRequest>,
) -> HandlerResult {
	record_request(NETWORK_LIST_PATH);
	respond(NETWORK_LIST_PATH, Ok(gateway.network.list(&request)))
}

pub async fn network_options<C: NodeClient + 'static>(
	gateway: web::Data<Gateway<C>>,
	request: web::Json<NetworkRequest>,
) -> HandlerResult {
	record_request(NETWORK_OPTIONS_PATH);
	respond(NETWORK_OPTIONS_PATH, gateway.network.options(&request))
}

pub async fn network_status<C: NodeClient + 'static>(
	gateway: web::Data<Gateway<C>>,
	request: web::Json<NetworkRequest>,
) -> HandlerResult {
	record_request(NETWORK_STATUS_PATH);
	respond(NETWORK_STATUS_PATH, gateway.network.status(&request).await)
}

pub async fn block<C: NodeClient + 'static>(
	gateway: web::Data<Gateway<C>>,
	request: web::Json<BlockRequest>,
) -> HandlerResult {
	record_request(BLOCK_PATH);
	respond(BLOCK_PATH, gateway.block.block(&request).await)
}

pub async fn block_transaction<C: NodeClient + 'static>(
	gateway: web::Data<Gateway<C>>,
	request: web::Json<BlockTransactionRequest>,
) -> HandlerResult {
	record_request(BLOCK_TRANSACTION_PATH);
	respond(
		BLOCK_TRANSACTION_PATH,
		gateway.block.block_transaction(&request).await,
	)
}
