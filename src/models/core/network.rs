use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Blockchain and network served by this gateway
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NetworkIdentity {
	pub blockchain: String,
	pub network: String,
}

/// Currency emitted in every amount, with its minor-unit scaling
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencySpec {
	pub symbol: String,
	pub decimals: u32,
}

impl CurrencySpec {
	/// Multiplier turning a whole-coin value into minor units (10^decimals)
	///
	/// Returns `None` when the multiplier does not fit a decimal.
	pub fn minor_unit_multiplier(&self) -> Option<Decimal> {
		10u64.checked_pow(self.decimals).map(Decimal::from)
	}
}

/// Node JSON-RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RpcUrl {
	pub type_: String,
	pub url: String,
	pub weight: u32,
}
