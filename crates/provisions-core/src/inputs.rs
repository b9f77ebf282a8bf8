//! Validation of the operator-supplied inputs.
//!
//! Runs before any network access; a rejected input never reaches the node.

use crate::error::ClaimError;
use alloy::primitives::U256;
use provisions_types::{parse_felt, FeltError};
use std::fmt;

/// Environment variable holding the signing key.
pub const PRIVATE_KEY_ENV: &str = "PRIVATE_KEY";

/// Validated inputs of a claim run.
#[derive(Clone)]
pub struct ClaimInputs {
	node_url: String,
	starknet_address: U256,
	private_key: String,
}

impl fmt::Debug for ClaimInputs {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClaimInputs")
			.field("node_url", &self.node_url)
			.field("starknet_address", &format!("0x{:x}", self.starknet_address))
			.field("private_key", &"<redacted>")
			.finish()
	}
}

impl ClaimInputs {
	pub fn new(
		node_url: &str,
		starknet_address: &str,
		private_key: Option<String>,
	) -> Result<Self, ClaimError> {
		let private_key = private_key.ok_or_else(|| {
			ClaimError::InvalidInput(format!(
				"You must set {} environment variable",
				PRIVATE_KEY_ENV
			))
		})?;
		if !private_key.starts_with("0x") {
			return Err(ClaimError::InvalidInput(
				"Private key must start with 0x hex prefix".to_string(),
			));
		}

		if !starknet_address.starts_with("0x") {
			return Err(ClaimError::InvalidInput(
				"Starknet address must start with 0x hex prefix".to_string(),
			));
		}
		let starknet_address = parse_felt(starknet_address).map_err(|e| match e {
			FeltError::OutOfRange(_) => ClaimError::InvalidInput(format!(
				"Starknet address is not a valid field element: {}",
				starknet_address
			)),
			_ => ClaimError::InvalidInput(format!("Invalid Starknet address: {}", e)),
		})?;

		if !(node_url.starts_with("http://") || node_url.starts_with("https://")) {
			return Err(ClaimError::InvalidInput(
				"Ethereum node URL must start with http:// or https://".to_string(),
			));
		}

		Ok(Self {
			node_url: node_url.to_string(),
			starknet_address,
			private_key,
		})
	}

	pub fn node_url(&self) -> &str {
		&self.node_url
	}

	/// Claim recipient on Starknet.
	pub fn starknet_address(&self) -> U256 {
		self.starknet_address
	}

	pub fn private_key(&self) -> &str {
		&self.private_key
	}
}
