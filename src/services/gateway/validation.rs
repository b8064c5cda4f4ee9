//! Network identifier validation.

use crate::{
	models::{NetworkIdentifier, NetworkIdentity},
	services::gateway::GatewayError,
};

/// Checks a requested network identifier against the configured identity
///
/// Checks run in a fixed order and the first failing one is reported:
/// missing identifier, sub-network present, blockchain mismatch, network mismatch.
pub fn validate_network_identifier(
	configured: &NetworkIdentity,
	requested: Option<&NetworkIdentifier>,
) -> Result<(), GatewayError> {
	let requested = requested.ok_or(GatewayError::MissingIdentifier)?;

	if requested.sub_network_identifier.is_some() {
		return Err(GatewayError::SubnetworkUnsupported);
	}

	if requested.blockchain != configured.blockchain {
		return Err(GatewayError::BlockchainMismatch);
	}

	if requested.network != configured.network {
		return Err(GatewayError::NetworkMismatch);
	}

	Ok(())
}
