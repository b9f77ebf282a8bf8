//! Fee heuristic for the claim transaction.

use crate::error::ClaimError;
use alloy::primitives::U256;
use provisions_config::FeeConfig;
use std::fmt;

/// Fee values derived from the latest base fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeParams {
	pub base_fee_per_gas: u128,
	pub max_priority_fee_per_gas: u128,
	/// `2 * base + priority`.
	pub max_fee_per_gas: u128,
	/// Value attached to the call, paying for the L1 handler on Starknet.
	pub message_value: U256,
}

impl fmt::Display for FeeParams {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"base fee: {}, priority fee: {}, max fee: {}, message value: {}",
			self.base_fee_per_gas,
			self.max_priority_fee_per_gas,
			self.max_fee_per_gas,
			self.message_value
		)
	}
}

/// Applies the fee heuristic to `base_fee_per_gas`.
pub fn compute_fees(
	base_fee_per_gas: u128,
	max_priority_fee_per_gas: u128,
	message_gas_estimate: u128,
) -> Result<FeeParams, ClaimError> {
	let max_fee_per_gas = base_fee_per_gas
		.checked_mul(2)
		.and_then(|doubled| doubled.checked_add(max_priority_fee_per_gas))
		.ok_or_else(|| {
			ClaimError::Fees(format!(
				"Max fee overflows for base fee {}",
				base_fee_per_gas
			))
		})?;

	let message_value = U256::from(base_fee_per_gas)
		.checked_mul(U256::from(message_gas_estimate))
		.ok_or_else(|| ClaimError::Fees("Message value overflows".to_string()))?;

	Ok(FeeParams {
		base_fee_per_gas,
		max_priority_fee_per_gas,
		max_fee_per_gas,
		message_value,
	})
}

/// [`compute_fees`] with the configured priority fee and message gas.
pub fn compute_fees_with(
	config: &FeeConfig,
	base_fee_per_gas: u128,
) -> Result<FeeParams, ClaimError> {
	compute_fees(
		base_fee_per_gas,
		config.priority_fee_wei as u128,
		config.message_gas_estimate as u128,
	)
}
