//! Node access for the claim tool.
//!
//! Everything the claim needs from the Ethereum node goes through
//! [`DeliveryInterface`], so the claim flow can be exercised against an
//! in-memory node in tests.

use alloy::primitives::{Address, B256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use provisions_types::ClaimReceipt;
use std::time::Duration;
use thiserror::Error;

pub mod implementations;

pub use implementations::alloy::AlloyDelivery;

#[derive(Debug, Error)]
pub enum DeliveryError {
	#[error("Network error: {0}")]
	Network(String),
	#[error("Invalid RPC URL: {0}")]
	InvalidUrl(String),
	#[error("Malformed response: {0}")]
	MalformedResponse(String),
}

/// Utility function to truncate a transaction hash for display.
pub fn truncate_hash(hash: &B256) -> String {
	let hash_str = hex::encode(hash.0);
	format!("0x{}..{}", &hash_str[..8], &hash_str[hash_str.len() - 4..])
}

#[async_trait]
pub trait DeliveryInterface: Send + Sync {
	/// Checks the node answers; returns its client version.
	async fn check_connection(&self) -> Result<String, DeliveryError>;

	async fn chain_id(&self) -> Result<u64, DeliveryError>;

	/// Base fee per gas of the latest block, from `eth_feeHistory`.
	async fn latest_base_fee(&self, reward_percentiles: &[f64]) -> Result<u128, DeliveryError>;

	/// Transaction count of `address` at the latest block.
	async fn transaction_count(&self, address: Address) -> Result<u64, DeliveryError>;

	async fn estimate_gas(&self, request: TransactionRequest) -> Result<u64, DeliveryError>;

	/// Submits an EIP-2718 encoded signed transaction and returns its hash.
	async fn submit_raw(&self, raw: &[u8]) -> Result<B256, DeliveryError>;

	/// Returns the receipt if the transaction has been mined.
	async fn get_receipt(&self, hash: B256) -> Result<Option<ClaimReceipt>, DeliveryError>;

	/// Polls for the receipt until it shows up.
	///
	/// There is no timeout: a transaction that never gets mined keeps the
	/// caller waiting until the process is interrupted.
	async fn wait_for_receipt(
		&self,
		hash: B256,
		poll_interval: Duration,
	) -> Result<ClaimReceipt, DeliveryError> {
		tracing::info!(tx_hash = %truncate_hash(&hash), "Waiting for transaction receipt");

		loop {
			if let Some(receipt) = self.get_receipt(hash).await? {
				return Ok(receipt);
			}

			tracing::debug!(
				"Transaction not mined yet, polling again in {}s",
				poll_interval.as_secs()
			);
			tokio::time::sleep(poll_interval).await;
		}
	}
}
