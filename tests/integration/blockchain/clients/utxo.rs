use mockito::{Matcher, Mock, Server, ServerGuard};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use std::str::FromStr;

use utxo_rosetta_gateway::{
	models::{CurrencySpec, NodeConfig, RpcUrl},
	services::{
		blockchain::{BlockChainError, HttpTransportClient, NodeClient, UtxoClient},
		gateway::map_operations,
	},
};

fn node_config(url: &str) -> NodeConfig {
	NodeConfig {
		rpc_urls: vec![RpcUrl {
			type_: "rpc".to_string(),
			url: url.to_string(),
			weight: 100,
		}],
		username: Some("user".to_string()),
		password: Some("pass".to_string()),
	}
}

fn rpc_result(result: Value) -> String {
	json!({ "result": result, "error": null, "id": "utxo-rosetta-gateway" }).to_string()
}

fn rpc_error(code: i64, message: &str) -> String {
	json!({
		"result": null,
		"error": { "code": code, "message": message },
		"id": "utxo-rosetta-gateway"
	})
	.to_string()
}

async fn mock_method(
	server: &mut ServerGuard,
	body: Value,
	status: usize,
	response: String,
) -> Mock {
	server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(body))
		.with_status(status)
		.with_header("content-type", "application/json")
		.with_body(response)
		.create_async()
		.await
}

/// Mocks the connection probe and builds a client for the server
///
/// The returned probe mock must stay alive for the duration of the test.
async fn connected_client(server: &mut ServerGuard) -> (UtxoClient<HttpTransportClient>, Mock) {
	let probe = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getblockcount" })))
		.with_status(200)
		.with_body(rpc_result(json!(100)))
		.expect_at_least(1)
		.create_async()
		.await;

	let client = UtxoClient::new(&node_config(&server.url())).await.unwrap();
	(client, probe)
}

fn verbose_block(hash: &str, height: i64, previous: Option<&str>) -> Value {
	let mut block = json!({
		"hash": hash,
		"confirmations": 3,
		"height": height,
		"time": 1_600_000_000 + height,
		"tx": [format!("{}-coinbase", hash)]
	});
	if let Some(previous) = previous {
		block["previousblockhash"] = json!(previous);
	}
	block
}

#[tokio::test]
async fn test_get_chain_status() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mock = mock_method(
		&mut server,
		json!({ "method": "getblockchaininfo" }),
		200,
		rpc_result(json!({
			"chain": "main",
			"blocks": 15000000,
			"headers": 15000000,
			"bestblockhash": "abc"
		})),
	)
	.await;

	let status = client.get_chain_status().await.unwrap();
	assert_eq!(status.chain, "main");
	assert_eq!(status.blocks, 15_000_000);
	assert_eq!(status.best_block_hash, "abc");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_block_by_height_resolves_hash_first() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let hash_mock = mock_method(
		&mut server,
		json!({ "method": "getblockhash", "params": [42] }),
		200,
		rpc_result(json!("h42")),
	)
	.await;
	let block_mock = mock_method(
		&mut server,
		json!({ "method": "getblock", "params": ["h42", 1] }),
		200,
		rpc_result(verbose_block("h42", 42, Some("h41"))),
	)
	.await;

	let block = client.get_block_by_height(42).await.unwrap();
	assert_eq!(block.hash, "h42");
	assert_eq!(block.height, 42);
	assert_eq!(block.previous_hash.as_deref(), Some("h41"));
	assert_eq!(block.tx, vec!["h42-coinbase".to_string()]);

	hash_mock.assert_async().await;
	block_mock.assert_async().await;
}

#[tokio::test]
async fn test_get_block_by_height_out_of_range() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mock = mock_method(
		&mut server,
		json!({ "method": "getblockhash" }),
		500,
		rpc_error(-8, "Block height out of range"),
	)
	.await;

	let result = client.get_block_by_height(99_999_999).await;
	assert!(matches!(result, Err(BlockChainError::BlockNotFound(_))));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_block_by_height_negative_makes_no_call() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getblockhash" })))
		.expect(0)
		.create_async()
		.await;

	let result = client.get_block_by_height(-1).await;
	assert!(matches!(result, Err(BlockChainError::BlockNotFound(_))));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_get_block_by_hash_not_found_is_not_retried() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mock = server
		.mock("POST", "/")
		.match_body(Matcher::PartialJson(json!({ "method": "getblock" })))
		.with_status(500)
		.with_body(rpc_error(-5, "Block not found"))
		.expect(1)
		.create_async()
		.await;

	let result = client.get_block_by_hash("unknown").await;
	assert!(matches!(result, Err(BlockChainError::BlockNotFound(_))));
	mock.assert_async().await;
}

#[tokio::test]
async fn test_other_rpc_errors_are_request_errors() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblockchaininfo" }),
		500,
		rpc_error(-28, "Loading block index..."),
	)
	.await;

	let result = client.get_chain_status().await;
	match result {
		Err(BlockChainError::RequestError(message)) => {
			assert!(message.contains("-28"));
			assert!(message.contains("Loading block index"));
		}
		other => panic!("unexpected result: {:?}", other),
	}
}

#[tokio::test]
async fn test_get_block_with_transactions_keeps_exact_values() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mut block = verbose_block("h7", 7, Some("h6"));
	block["tx"] = json!([{
		"txid": "t1",
		"size": 225,
		"locktime": 0,
		"vout": [
			{
				"value": 0.29,
				"n": 0,
				"scriptPubKey": { "type": "pubkeyhash", "addresses": ["DLegacy"] }
			},
			{
				"value": 12.5,
				"n": 1,
				"scriptPubKey": { "type": "witness_v0_keyhash", "address": "dgb1modern" }
			}
		]
	}]);

	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblock", "params": ["h7", 2] }),
		200,
		rpc_result(block),
	)
	.await;

	let block = client.get_block_with_transactions("h7").await.unwrap();
	let tx = block.find_transaction("t1").unwrap();
	assert_eq!(tx.size, 225);
	assert_eq!(tx.vout[0].value, Decimal::from_str("0.29").unwrap());
	assert_eq!(tx.vout[0].script_pub_key.payment_addresses(), vec!["DLegacy"]);
	assert_eq!(
		tx.vout[1].script_pub_key.payment_addresses(),
		vec!["dgb1modern"]
	);
}

#[tokio::test]
async fn test_get_block_with_transactions_keeps_large_values_exact() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mut block = verbose_block("h8", 8, Some("h7"));
	block["tx"] = serde_json::from_str(
		r#"[{
			"txid": "t1",
			"size": 225,
			"locktime": 0,
			"vout": [{
				"value": 12345678901.23456789,
				"n": 0,
				"scriptPubKey": { "type": "pubkeyhash", "address": "DWhale" }
			}]
		}]"#,
	)
	.unwrap();

	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblock", "params": ["h8", 2] }),
		200,
		rpc_result(block),
	)
	.await;

	let block = client.get_block_with_transactions("h8").await.unwrap();
	let tx = block.find_transaction("t1").unwrap();
	assert_eq!(
		tx.vout[0].value,
		Decimal::from_str("12345678901.23456789").unwrap()
	);

	let currency = CurrencySpec {
		symbol: "DGB".to_string(),
		decimals: 8,
	};
	let operations = map_operations(tx, &currency).unwrap();
	assert_eq!(operations[0].amount.value, "1234567890123456789");
}

#[tokio::test]
async fn test_get_tip_block() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getbestblockhash" }),
		200,
		rpc_result(json!("tip")),
	)
	.await;
	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblock", "params": ["tip", 1] }),
		200,
		rpc_result(verbose_block("tip", 500, Some("h499"))),
	)
	.await;

	let block = client.get_tip_block().await.unwrap();
	assert_eq!(block.hash, "tip");
	assert_eq!(block.height, 500);
}

#[tokio::test]
async fn test_requests_carry_basic_auth() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let mock = server
		.mock("POST", "/")
		.match_header("authorization", "Basic dXNlcjpwYXNz")
		.match_body(Matcher::PartialJson(json!({
			"jsonrpc": "1.0",
			"method": "getbestblockhash",
			"params": []
		})))
		.with_status(200)
		.with_body(rpc_result(json!("tip")))
		.create_async()
		.await;
	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblock" }),
		200,
		rpc_result(verbose_block("tip", 1, Some("g"))),
	)
	.await;

	client.get_tip_block().await.unwrap();
	mock.assert_async().await;
}

#[tokio::test]
async fn test_malformed_result_is_request_error() {
	let mut server = Server::new_async().await;
	let (client, _probe) = connected_client(&mut server).await;

	let _rpc = mock_method(
		&mut server,
		json!({ "method": "getblockchaininfo" }),
		200,
		rpc_result(json!({ "unexpected": true })),
	)
	.await;

	let result = client.get_chain_status().await;
	assert!(matches!(result, Err(BlockChainError::RequestError(_))));
}
