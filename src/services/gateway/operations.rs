//! Conversion of node transactions into canonical operations.
//!
//! Only outputs paying to a recognized script type are attributable to an
//! account; every other output (data carriers, bare multisig, script hashes the
//! node cannot attribute) contributes no operation.

use rust_decimal::{prelude::ToPrimitive, Decimal};

use crate::{
	models::{
		AccountIdentifier, Amount, CurrencySpec, Operation, OperationIdentifier, Transaction,
		TransactionIdentifier, TransactionMetadata, UtxoTransaction,
	},
	services::gateway::GatewayError,
};

/// The only operation type this gateway emits
pub const OPERATION_TYPE_TRANSFER: &str = "transfer";

/// Status of every operation read from a confirmed block
pub const OPERATION_STATUS_SUCCESS: &str = "success";

/// Advertised for completeness; never emitted
pub const OPERATION_STATUS_FAIL: &str = "fail";

/// Network index of every operation
const NETWORK_INDEX: i64 = 0;

/// Output script classifications attributable to a spendable address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentType {
	/// Pay-to-public-key-hash
	PubKeyHash,
	/// Pay-to-witness-public-key-hash (segwit v0)
	WitnessV0KeyHash,
	/// Pay-to-public-key
	PubKey,
}

impl PaymentType {
	/// Parses the node's `scriptPubKey.type` value
	pub fn from_script_type(script_type: &str) -> Option<Self> {
		match script_type {
			"pubkeyhash" => Some(Self::PubKeyHash),
			"witness_v0_keyhash" => Some(Self::WitnessV0KeyHash),
			"pubkey" => Some(Self::PubKey),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Self::PubKeyHash => "pubkeyhash",
			Self::WitnessV0KeyHash => "witness_v0_keyhash",
			Self::PubKey => "pubkey",
		}
	}
}

/// Whether an output with this script type produces operations
pub fn is_valid_payment_type(script_type: &str) -> bool {
	PaymentType::from_script_type(script_type).is_some()
}

/// Converts a whole-coin value into minor units: floor(value * 10^decimals)
///
/// Returns `None` if the scaled value does not fit.
pub fn to_minor_units(value: Decimal, currency: &CurrencySpec) -> Option<i128> {
	let multiplier = currency.minor_unit_multiplier()?;
	value.checked_mul(multiplier)?.floor().to_i128()
}

/// Maps the outputs of a transaction to operations
///
/// Outputs are visited in on-chain order. The operation index is the position of
/// the originating output, so indices stay stable when outputs are skipped. An
/// output paying to several addresses yields one operation per address.
pub fn map_operations(
	transaction: &UtxoTransaction,
	currency: &CurrencySpec,
) -> Result<Vec<Operation>, GatewayError> {
	let mut operations = Vec::new();

	for output in &transaction.vout {
		if !is_valid_payment_type(&output.script_pub_key.script_type) {
			tracing::trace!(
				txid = %transaction.txid,
				n = output.n,
				script_type = %output.script_pub_key.script_type,
				"Skipping output with unrecognized script type"
			);
			continue;
		}

		let value = to_minor_units(output.value, currency).ok_or_else(|| {
			tracing::error!(
				txid = %transaction.txid,
				n = output.n,
				value = %output.value,
				"Output value does not fit in minor units"
			);
			GatewayError::TransactionUnavailable
		})?;

		for address in output.script_pub_key.payment_addresses() {
			operations.push(Operation {
				operation_identifier: OperationIdentifier {
					index: i64::from(output.n),
					network_index: Some(NETWORK_INDEX),
				},
				type_: OPERATION_TYPE_TRANSFER.to_string(),
				status: OPERATION_STATUS_SUCCESS.to_string(),
				account: AccountIdentifier {
					address: address.to_string(),
				},
				amount: Amount {
					value: value.to_string(),
					currency: currency.clone(),
				},
			});
		}
	}

	Ok(operations)
}

/// Builds the canonical transaction with its metadata and operations
pub fn map_transaction(
	transaction: &UtxoTransaction,
	currency: &CurrencySpec,
) -> Result<Transaction, GatewayError> {
	Ok(Transaction {
		transaction_identifier: TransactionIdentifier {
			hash: transaction.txid.clone(),
		},
		operations: map_operations(transaction, currency)?,
		metadata: TransactionMetadata {
			size: transaction.size,
			lock_time: transaction.locktime,
		},
	})
}
