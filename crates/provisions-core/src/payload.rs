//! Claim payload assembly.
//!
//! The L1 handler on the provisions contract decodes the payload
//! positionally, so the element order below must not change:
//!
//! `[sender, amount in fri, 0, merkle index, path length, path..., recipient]`

use crate::error::ClaimError;
use alloy::primitives::{uint, Address, U256};
use provisions_types::{is_felt, EligibilityRecord};

/// Fractional units per token (10^18).
pub const FRI_PER_TOKEN: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Number of payload elements that are not Merkle path entries.
pub const FIXED_PAYLOAD_FIELDS: usize = 6;

/// Converts a whole-token allocation to fri.
pub fn scale_amount(amount: U256) -> Result<U256, ClaimError> {
	amount
		.checked_mul(FRI_PER_TOKEN)
		.ok_or_else(|| ClaimError::Payload(format!("Amount {} overflows when scaled", amount)))
}

/// Builds the message payload claiming `record` to `starknet_address`.
pub fn build_payload(
	sender: Address,
	record: &EligibilityRecord,
	starknet_address: U256,
) -> Result<Vec<U256>, ClaimError> {
	let mut payload = Vec::with_capacity(FIXED_PAYLOAD_FIELDS + record.merkle_path.len());

	payload.push(U256::from_be_slice(sender.as_slice()));
	payload.push(scale_amount(record.amount)?);
	payload.push(U256::ZERO);
	payload.push(record.merkle_index);
	payload.push(U256::from(record.merkle_path.len()));
	payload.extend(record.merkle_path.iter().copied());
	payload.push(starknet_address);

	if let Some(position) = payload.iter().position(|value| !is_felt(*value)) {
		return Err(ClaimError::Payload(format!(
			"Payload element {} is not a valid Starknet field element",
			position
		)));
	}

	Ok(payload)
}
