use std::sync::Arc;

use mockall::predicate;
use utxo_rosetta_gateway::{
	models::{
		BlockRequest, BlockTransactionRequest, NetworkIdentifier, PartialBlockIdentifier,
		TransactionIdentifier, UtxoBlockWithTransactions,
	},
	services::{
		blockchain::BlockChainError,
		gateway::{BlockService, GatewayError},
	},
};

use crate::integration::mocks::{
	create_block_with_transactions, create_test_block, create_test_config_arc,
	create_test_output, create_test_transaction, valid_network_identifier, MockNodeClient,
};

fn service(client: MockNodeClient) -> BlockService<MockNodeClient> {
	BlockService::new(create_test_config_arc(), Arc::new(client))
}

fn block_request(selector: PartialBlockIdentifier) -> BlockRequest {
	BlockRequest {
		network_identifier: Some(valid_network_identifier()),
		block_identifier: selector,
	}
}

fn transaction_request(selector: PartialBlockIdentifier, txid: &str) -> BlockTransactionRequest {
	BlockTransactionRequest {
		network_identifier: Some(valid_network_identifier()),
		block_identifier: selector,
		transaction_identifier: TransactionIdentifier {
			hash: txid.to_string(),
		},
	}
}

/// Block holding one transaction with a payment, a data carrier and a witness payment
fn mixed_outputs_block(height: i64, hash: &str) -> UtxoBlockWithTransactions {
	create_block_with_transactions(
		height,
		hash,
		vec![create_test_transaction(
			"tx-mixed",
			vec![
				create_test_output("1.5", 0, "pubkeyhash", "DAddrA"),
				create_test_output("0", 1, "nulldata", "unused"),
				create_test_output("0.00000001", 2, "witness_v0_keyhash", "dgb1addrB"),
			],
		)],
	)
}

#[tokio::test]
async fn test_block_genesis_parent_is_itself() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_by_height()
		.with(predicate::eq(0))
		.times(1)
		.returning(|_| Ok(create_test_block(0, "genesis", None)));

	let response = service(client)
		.block(&block_request(PartialBlockIdentifier::by_index(0)))
		.await
		.unwrap();

	assert_eq!(
		response.block.block_identifier,
		response.block.parent_block_identifier
	);
	assert_eq!(response.block.parent_block_identifier.hash, "genesis");
}

#[tokio::test]
async fn test_block_lists_transaction_ids() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_by_hash()
		.with(predicate::eq("h8"))
		.returning(|hash| Ok(create_test_block(8, hash, Some("h7"))));
	client
		.expect_get_block_by_hash()
		.with(predicate::eq("h7"))
		.returning(|hash| Ok(create_test_block(7, hash, Some("h6"))));

	let response = service(client)
		.block(&block_request(PartialBlockIdentifier::by_hash("h8")))
		.await
		.unwrap();

	assert!(response.block.transactions.is_empty());
	let ids: Vec<&str> = response
		.other_transactions
		.iter()
		.map(|tx| tx.hash.as_str())
		.collect();
	assert_eq!(ids, vec!["h8-tx0", "h8-tx1"]);
}

#[tokio::test]
async fn test_block_rejects_wrong_blockchain_before_node_calls() {
	let mut client = MockNodeClient::new();
	client.expect_get_tip_block().times(0);

	let request = BlockRequest {
		network_identifier: Some(NetworkIdentifier {
			blockchain: "Bitcoin".to_string(),
			..valid_network_identifier()
		}),
		block_identifier: PartialBlockIdentifier::latest(),
	};

	let result = service(client).block(&request).await;
	assert_eq!(result.unwrap_err(), GatewayError::BlockchainMismatch);
}

#[tokio::test]
async fn test_block_transaction_maps_recognized_outputs() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_with_transactions()
		.with(predicate::eq("h20"))
		.times(1)
		.returning(|hash| Ok(mixed_outputs_block(20, hash)));
	client.expect_get_block_by_height().times(0);

	let response = service(client)
		.block_transaction(&transaction_request(
			PartialBlockIdentifier::by_hash("h20"),
			"tx-mixed",
		))
		.await
		.unwrap();

	let transaction = response.transaction;
	assert_eq!(transaction.transaction_identifier.hash, "tx-mixed");
	assert_eq!(transaction.metadata.size, 225);
	assert_eq!(transaction.metadata.lock_time, 0);

	let operations = transaction.operations;
	assert_eq!(operations.len(), 2);
	assert_eq!(operations[0].operation_identifier.index, 0);
	assert_eq!(operations[0].account.address, "DAddrA");
	assert_eq!(operations[0].amount.value, "150000000");
	assert_eq!(operations[0].amount.currency.symbol, "DGB");
	assert_eq!(operations[1].operation_identifier.index, 2);
	assert_eq!(operations[1].account.address, "dgb1addrB");
	assert_eq!(operations[1].amount.value, "1");
	assert!(operations
		.iter()
		.all(|op| op.type_ == "transfer" && op.status == "success"));
}

#[tokio::test]
async fn test_block_transaction_by_index_looks_up_hash() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_by_height()
		.with(predicate::eq(20))
		.times(1)
		.returning(|_| Ok(create_test_block(20, "h20", Some("h19"))));
	client
		.expect_get_block_with_transactions()
		.with(predicate::eq("h20"))
		.times(1)
		.returning(|hash| Ok(mixed_outputs_block(20, hash)));

	let response = service(client)
		.block_transaction(&transaction_request(
			PartialBlockIdentifier::by_index(20),
			"tx-mixed",
		))
		.await
		.unwrap();

	assert_eq!(response.transaction.operations.len(), 2);
}

#[tokio::test]
async fn test_block_transaction_unknown_txid() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_with_transactions()
		.returning(|hash| Ok(mixed_outputs_block(20, hash)));

	let result = service(client)
		.block_transaction(&transaction_request(
			PartialBlockIdentifier::by_hash("h20"),
			"not-in-block",
		))
		.await;

	assert_eq!(result.unwrap_err(), GatewayError::TransactionUnavailable);
}

#[tokio::test]
async fn test_block_transaction_block_fetch_failure() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_with_transactions()
		.returning(|hash| Err(BlockChainError::block_not_found(hash)));

	let result = service(client)
		.block_transaction(&transaction_request(
			PartialBlockIdentifier::by_hash("missing"),
			"tx",
		))
		.await;

	assert_eq!(result.unwrap_err(), GatewayError::BlockUnavailable);
}

#[tokio::test]
async fn test_block_transaction_without_block_selector() {
	let mut client = MockNodeClient::new();
	client.expect_get_block_with_transactions().times(0);

	let result = service(client)
		.block_transaction(&transaction_request(PartialBlockIdentifier::latest(), "tx"))
		.await;

	assert_eq!(result.unwrap_err(), GatewayError::BlockUnavailable);
}

#[tokio::test]
async fn test_block_transaction_index_hash_mismatch() {
	let mut client = MockNodeClient::new();
	client
		.expect_get_block_with_transactions()
		.returning(|hash| Ok(mixed_outputs_block(21, hash)));

	let selector = PartialBlockIdentifier {
		index: Some(20),
		hash: Some("h21".to_string()),
	};
	let result = service(client)
		.block_transaction(&transaction_request(selector, "tx-mixed"))
		.await;

	assert_eq!(result.unwrap_err(), GatewayError::BlockUnavailable);
}
