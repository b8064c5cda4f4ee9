use proptest::{prelude::*, test_runner::Config};

use utxo_rosetta_gateway::services::gateway::{validate_network_identifier, GatewayError};

use crate::properties::strategies::{identity_strategy, requested_identifier_strategy};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Exactly one outcome, chosen by fixed precedence
	#[test]
	fn validation_follows_precedence(
		(configured, requested) in identity_strategy()
			.prop_flat_map(|configured| {
				(Just(configured.clone()), requested_identifier_strategy(configured))
			})
	) {
		let result = validate_network_identifier(&configured, requested.as_ref());

		let expected = match &requested {
			None => Err(GatewayError::MissingIdentifier),
			Some(r) if r.sub_network_identifier.is_some() => Err(GatewayError::SubnetworkUnsupported),
			Some(r) if r.blockchain != configured.blockchain => Err(GatewayError::BlockchainMismatch),
			Some(r) if r.network != configured.network => Err(GatewayError::NetworkMismatch),
			Some(_) => Ok(()),
		};

		prop_assert_eq!(result, expected);
	}

	// Validation is a pure check: repeating it gives the same answer
	#[test]
	fn validation_is_deterministic(
		(configured, requested) in identity_strategy()
			.prop_flat_map(|configured| {
				(Just(configured.clone()), requested_identifier_strategy(configured))
			})
	) {
		prop_assert_eq!(
			validate_network_identifier(&configured, requested.as_ref()),
			validate_network_identifier(&configured, requested.as_ref())
		);
	}
}
