//! Alloy-based node access.
//!
//! Talks JSON-RPC over HTTP(S) to an Ethereum node. Every call is a single
//! request; failures are surfaced to the caller and never retried.

use crate::{truncate_hash, DeliveryError, DeliveryInterface};
use alloy::eips::BlockNumberOrTag;
use alloy::network::{Ethereum, ReceiptResponse};
use alloy::primitives::{Address, B256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use provisions_types::ClaimReceipt;
use std::fmt;
use tracing::{debug, info};

/// Node client backed by an Alloy HTTP provider.
pub struct AlloyDelivery {
	/// The Alloy provider for blockchain interaction.
	provider: Box<dyn Provider<Ethereum>>,
	/// Endpoint, kept for diagnostics.
	rpc_url: String,
}

impl fmt::Debug for AlloyDelivery {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AlloyDelivery")
			.field("rpc_url", &self.rpc_url)
			.field("provider", &"<Provider>")
			.finish()
	}
}

impl AlloyDelivery {
	/// Creates a provider for `rpc_url`. No request is made until the first call.
	pub fn new(rpc_url: &str) -> Result<Self, DeliveryError> {
		let url = rpc_url
			.parse()
			.map_err(|e| DeliveryError::InvalidUrl(format!("{}: {}", rpc_url, e)))?;

		let provider = ProviderBuilder::new().connect_http(url);

		Ok(Self {
			provider: Box::new(provider),
			rpc_url: rpc_url.to_string(),
		})
	}

	pub fn rpc_url(&self) -> &str {
		&self.rpc_url
	}
}

// Convert alloy receipt to claim receipt
fn alloy_receipt_to_claim_receipt(receipt: &TransactionReceipt) -> ClaimReceipt {
	ClaimReceipt {
		transaction_hash: receipt.transaction_hash,
		block_number: receipt.block_number.unwrap_or(0),
		gas_used: receipt.gas_used,
		effective_gas_price: receipt.effective_gas_price,
		success: receipt.status(),
	}
}

#[async_trait]
impl DeliveryInterface for AlloyDelivery {
	async fn check_connection(&self) -> Result<String, DeliveryError> {
		debug!("Querying client version from {}", self.rpc_url);
		self.provider
			.get_client_version()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to reach node: {}", e)))
	}

	async fn chain_id(&self) -> Result<u64, DeliveryError> {
		self.provider
			.get_chain_id()
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get chain ID: {}", e)))
	}

	async fn latest_base_fee(&self, reward_percentiles: &[f64]) -> Result<u128, DeliveryError> {
		let history = self
			.provider
			.get_fee_history(1, BlockNumberOrTag::Latest, reward_percentiles)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get fee history: {}", e)))?;

		debug!(
			oldest_block = history.oldest_block,
			"Fee history base fees: {:?}", history.base_fee_per_gas
		);

		history.base_fee_per_gas.first().copied().ok_or_else(|| {
			DeliveryError::MalformedResponse("Fee history has no base fee entries".to_string())
		})
	}

	async fn transaction_count(&self, address: Address) -> Result<u64, DeliveryError> {
		self.provider
			.get_transaction_count(address)
			.latest()
			.await
			.map_err(|e| {
				DeliveryError::Network(format!("Failed to get transaction count: {}", e))
			})
	}

	async fn estimate_gas(&self, request: TransactionRequest) -> Result<u64, DeliveryError> {
		self.provider
			.estimate_gas(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("Gas estimation failed: {}", e)))
	}

	async fn submit_raw(&self, raw: &[u8]) -> Result<B256, DeliveryError> {
		let pending_tx = self
			.provider
			.send_raw_transaction(raw)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to send transaction: {}", e)))?;

		let tx_hash = *pending_tx.tx_hash();
		info!(tx_hash = %truncate_hash(&tx_hash), "Submitted transaction");

		Ok(tx_hash)
	}

	async fn get_receipt(&self, hash: B256) -> Result<Option<ClaimReceipt>, DeliveryError> {
		let receipt = self
			.provider
			.get_transaction_receipt(hash)
			.await
			.map_err(|e| DeliveryError::Network(format!("Failed to get receipt: {}", e)))?;

		Ok(receipt.as_ref().map(alloy_receipt_to_claim_receipt))
	}
}
