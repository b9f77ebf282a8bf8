//! Configuration types for the claim tool.

use alloy::primitives::{address, uint, Address, U256};
use provisions_types::serde_helpers::{deserialize_u256, serialize_u256_hex};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// StarkGate messaging contract on Ethereum mainnet.
pub const MAINNET_BRIDGE_ADDRESS: Address = address!("c662c410C0ECf747543f5bA90660f6ABeBD9C8c4");

/// Provisions contract on Starknet mainnet.
pub const MAINNET_L2_RECIPIENT: U256 =
	uint!(0x071808540ed1139bcc8bb55eb975e8168758f2a342ce3f22c512a1c8da1b84dc_U256);

/// Selector of the provisions contract's L1 handler.
pub const MAINNET_L2_SELECTOR: U256 =
	uint!(0x00828430c65c40cba334d4723a4c5c02a62f612d73d564a1c7dc146f1d0053f9_U256);

/// Complete claim configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClaimConfig {
	/// Eligibility dataset location
	pub data_file: PathBuf,
	/// Delay between receipt polls
	pub receipt_poll_interval_secs: u64,
	/// Bridge contract and L2 message target
	pub bridge: BridgeConfig,
	/// Fee heuristics
	pub fees: FeeConfig,
}

/// Bridge contract and L2 message target
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BridgeConfig {
	/// L1 messaging contract exposing `sendMessageToL2`
	pub address: Address,
	/// L2 contract consuming the claim message
	#[serde(
		deserialize_with = "deserialize_u256",
		serialize_with = "serialize_u256_hex"
	)]
	pub l2_recipient: U256,
	/// L1 handler selector on the L2 contract
	#[serde(
		deserialize_with = "deserialize_u256",
		serialize_with = "serialize_u256_hex"
	)]
	pub l2_selector: U256,
}

/// Fee heuristics applied on top of the latest base fee
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeeConfig {
	/// Tip paid to the block proposer, in wei
	pub priority_fee_wei: u64,
	/// Approximate gas consumed by the L1 handler, priced at the base fee
	pub message_gas_estimate: u64,
	/// Reward percentiles requested with `eth_feeHistory`
	pub fee_history_percentiles: Vec<f64>,
}

impl ClaimConfig {
	pub fn receipt_poll_interval(&self) -> Duration {
		Duration::from_secs(self.receipt_poll_interval_secs)
	}
}

impl Default for ClaimConfig {
	fn default() -> Self {
		Self {
			data_file: PathBuf::from("data.json"),
			receipt_poll_interval_secs: 5,
			bridge: BridgeConfig::default(),
			fees: FeeConfig::default(),
		}
	}
}

impl Default for BridgeConfig {
	fn default() -> Self {
		Self {
			address: MAINNET_BRIDGE_ADDRESS,
			l2_recipient: MAINNET_L2_RECIPIENT,
			l2_selector: MAINNET_L2_SELECTOR,
		}
	}
}

impl Default for FeeConfig {
	fn default() -> Self {
		Self {
			priority_fee_wei: 1_000_000_000,
			message_gas_estimate: 3000,
			fee_history_percentiles: vec![10.0, 90.0],
		}
	}
}
