//! Starknet field element helpers.
//!
//! Every value carried in an L1 to L2 message payload, and the L2 addresses
//! themselves, must fit into a Starknet field element.

use alloy::primitives::U256;
use thiserror::Error;

/// Modulus of the Starknet field, `2^251 + 17 * 2^192 + 1`.
pub const STARK_PRIME: U256 = U256::from_limbs([1, 0, 0, 0x0800_0000_0000_0011]);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeltError {
	#[error("value must start with 0x hex prefix: {0}")]
	MissingPrefix(String),
	#[error("invalid hex value: {0}")]
	InvalidHex(String),
	#[error("value exceeds the Starknet field modulus: {0}")]
	OutOfRange(String),
}

/// Parses a `0x`-prefixed hex string of at most 32 bytes.
pub fn parse_hex_u256(value: &str) -> Result<U256, FeltError> {
	let digits = value
		.strip_prefix("0x")
		.or_else(|| value.strip_prefix("0X"))
		.ok_or_else(|| FeltError::MissingPrefix(value.to_string()))?;

	if digits.is_empty() {
		return Err(FeltError::InvalidHex(value.to_string()));
	}

	U256::from_str_radix(digits, 16).map_err(|_| FeltError::InvalidHex(value.to_string()))
}

/// Parses a `0x`-prefixed hex string and checks it is a valid field element.
pub fn parse_felt(value: &str) -> Result<U256, FeltError> {
	let felt = parse_hex_u256(value)?;
	if !is_felt(felt) {
		return Err(FeltError::OutOfRange(value.to_string()));
	}
	Ok(felt)
}

pub fn is_felt(value: U256) -> bool {
	value < STARK_PRIME
}
