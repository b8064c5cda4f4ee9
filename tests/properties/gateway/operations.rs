use proptest::{prelude::*, test_runner::Config};
use rust_decimal::Decimal;

use utxo_rosetta_gateway::{
	models::CurrencySpec,
	services::gateway::{is_valid_payment_type, map_operations, to_minor_units},
};

use crate::properties::strategies::{coin_value_strategy, transaction_strategy};

fn currency(decimals: u32) -> CurrencySpec {
	CurrencySpec {
		symbol: "DGB".to_string(),
		decimals,
	}
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn minor_units_are_floored(value in coin_value_strategy(), decimals in 0u32..=8) {
		let units = to_minor_units(value, &currency(decimals)).unwrap();
		let scaled = value * Decimal::from(10u64.pow(decimals));

		let floored = Decimal::from_i128_with_scale(units, 0);
		prop_assert!(floored <= scaled);
		prop_assert!(scaled - floored < Decimal::ONE);
	}

	#[test]
	fn minor_units_are_monotonic(
		a in coin_value_strategy(),
		b in coin_value_strategy(),
		decimals in 0u32..=12,
	) {
		let spec = currency(decimals);
		let (low, high) = if a <= b { (a, b) } else { (b, a) };

		let low_units = to_minor_units(low, &spec).unwrap();
		let high_units = to_minor_units(high, &spec).unwrap();
		prop_assert!(low_units <= high_units);
		prop_assert_eq!(to_minor_units(low, &spec), Some(low_units));
	}

	// One operation per recognized output, indexed by output position
	#[test]
	fn operation_indices_follow_output_positions(tx in transaction_strategy()) {
		let operations = map_operations(&tx, &currency(8)).unwrap();

		let recognized: Vec<i64> = tx
			.vout
			.iter()
			.filter(|output| is_valid_payment_type(&output.script_pub_key.script_type))
			.map(|output| i64::from(output.n))
			.collect();
		let indices: Vec<i64> = operations
			.iter()
			.map(|op| op.operation_identifier.index)
			.collect();

		prop_assert_eq!(indices, recognized);
	}

	#[test]
	fn operation_amounts_match_outputs(tx in transaction_strategy()) {
		let spec = currency(8);
		let operations = map_operations(&tx, &spec).unwrap();

		for operation in &operations {
			let output = &tx.vout[operation.operation_identifier.index as usize];
			let expected = to_minor_units(output.value, &spec).unwrap();
			prop_assert_eq!(&operation.amount.value, &expected.to_string());
			prop_assert_eq!(
				Some(operation.account.address.as_str()),
				output.script_pub_key.address.as_deref()
			);
		}
	}

	#[test]
	fn unrecognized_outputs_yield_no_operations(tx in transaction_strategy()) {
		let mut tx = tx;
		for output in &mut tx.vout {
			output.script_pub_key.script_type = "nulldata".to_string();
		}

		prop_assert!(map_operations(&tx, &currency(8)).unwrap().is_empty());
	}
}
