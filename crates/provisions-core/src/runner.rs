//! The claim procedure.
//!
//! [`ClaimRunner`] walks the claim through its stages strictly in order:
//! connect, derive the sender, look it up in the eligibility dataset, price
//! the transaction, assemble and sign it, ask the operator, submit and wait
//! for the receipt. Any failing stage aborts the run; nothing is retried.

use crate::calldata::claim_message;
use crate::confirm::{Confirmation, CONFIRM_PROMPT};
use crate::error::ClaimError;
use crate::fees::{compute_fees_with, FeeParams};
use crate::inputs::ClaimInputs;
use crate::payload::build_payload;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use provisions_account::AccountInterface;
use provisions_config::ClaimConfig;
use provisions_delivery::{truncate_hash, DeliveryInterface};
use provisions_types::{
	ClaimReceipt, ClaimTransaction, EligibilityDataset, EligibilityRecord, SignedClaim,
};
use tracing::{info, warn};

/// How a claim run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
	/// Submitted and mined. The receipt may still report a revert.
	Confirmed(ClaimReceipt),
	/// The operator did not approve; nothing was sent.
	Declined,
	/// Signed but intentionally not sent.
	DryRun(SignedClaim),
}

pub struct ClaimRunner<'a> {
	config: &'a ClaimConfig,
	delivery: &'a dyn DeliveryInterface,
	account: &'a dyn AccountInterface,
}

impl<'a> ClaimRunner<'a> {
	pub fn new(
		config: &'a ClaimConfig,
		delivery: &'a dyn DeliveryInterface,
		account: &'a dyn AccountInterface,
	) -> Self {
		Self {
			config,
			delivery,
			account,
		}
	}

	pub async fn run(
		&self,
		inputs: &ClaimInputs,
		dry_run: bool,
		confirmation: &mut dyn Confirmation,
	) -> Result<ClaimOutcome, ClaimError> {
		self.connect().await?;
		let sender = self.sender().await?;
		let dataset = self.load_dataset().await?;
		let record = Self::find_record(&dataset, sender)?;

		let chain_id = self.delivery.chain_id().await?;
		info!("Chain ID: {}", chain_id);

		let fees = self.fees().await?;
		let payload = build_payload(sender, &record, inputs.starknet_address())?;
		info!("Payload: {:?}", payload);

		let tx = self.build_transaction(sender, chain_id, &fees, payload).await?;
		info!("Transaction: {}", tx);

		let signed = self.account.sign_transaction(&tx).await?;
		info!(tx_hash = %signed.hash, "Signed transaction: {}", signed.raw);

		// Written regardless of the log filter
		confirmation.review(&review_text(&fees, &tx, &signed))?;

		if dry_run {
			info!("Dry run, transaction not sent");
			return Ok(ClaimOutcome::DryRun(signed));
		}

		if !confirmation.confirm(CONFIRM_PROMPT)? {
			info!("Transaction not sent");
			return Ok(ClaimOutcome::Declined);
		}

		let receipt = self.submit(&signed).await?;
		Ok(ClaimOutcome::Confirmed(receipt))
	}

	async fn connect(&self) -> Result<(), ClaimError> {
		let version = self
			.delivery
			.check_connection()
			.await
			.map_err(|e| ClaimError::NodeUnreachable(e.to_string()))?;
		info!("Connected to Ethereum node: {}", version);
		Ok(())
	}

	async fn sender(&self) -> Result<Address, ClaimError> {
		let sender = self.account.address().await?;
		info!("Ethereum address: {}", sender);
		Ok(sender)
	}

	async fn load_dataset(&self) -> Result<EligibilityDataset, ClaimError> {
		let dataset = EligibilityDataset::load(&self.config.data_file).await?;
		info!(
			"Loaded {} eligible addresses from {}",
			dataset.len(),
			self.config.data_file.display()
		);
		Ok(dataset)
	}

	fn find_record(
		dataset: &EligibilityDataset,
		sender: Address,
	) -> Result<EligibilityRecord, ClaimError> {
		let record = dataset
			.find(&sender)?
			.ok_or(ClaimError::NotEligible(sender))?;
		info!(
			"Eligible for {} tokens, merkle index {}, path length {}",
			record.amount,
			record.merkle_index,
			record.merkle_path.len()
		);
		Ok(record)
	}

	async fn fees(&self) -> Result<FeeParams, ClaimError> {
		let base_fee = self
			.delivery
			.latest_base_fee(&self.config.fees.fee_history_percentiles)
			.await?;
		let fees = compute_fees_with(&self.config.fees, base_fee)?;
		info!("Fees: {}", fees);
		Ok(fees)
	}

	async fn build_transaction(
		&self,
		sender: Address,
		chain_id: u64,
		fees: &FeeParams,
		payload: Vec<U256>,
	) -> Result<ClaimTransaction, ClaimError> {
		let nonce = self.delivery.transaction_count(sender).await?;

		let mut tx = ClaimTransaction {
			to: self.config.bridge.address,
			message: claim_message(&self.config.bridge, payload),
			chain_id,
			from: sender,
			nonce,
			value: fees.message_value,
			max_fee_per_gas: fees.max_fee_per_gas,
			max_priority_fee_per_gas: fees.max_priority_fee_per_gas,
			gas_limit: None,
		};

		let gas_limit = self
			.delivery
			.estimate_gas(<TransactionRequest as From<&ClaimTransaction>>::from(&tx))
			.await?;
		tx.gas_limit = Some(gas_limit);

		Ok(tx)
	}

	async fn submit(&self, signed: &SignedClaim) -> Result<ClaimReceipt, ClaimError> {
		let hash = self.delivery.submit_raw(&signed.raw).await?;
		if hash != signed.hash {
			warn!(
				"Node reported hash {} for transaction {}",
				hash, signed.hash
			);
		}

		let receipt = self
			.delivery
			.wait_for_receipt(hash, self.config.receipt_poll_interval())
			.await?;

		let tx_hash = truncate_hash(&hash);
		if receipt.success {
			info!(%tx_hash, "Transaction mined in block {}", receipt.block_number);
		} else {
			warn!(%tx_hash, "Transaction reverted in block {}", receipt.block_number);
		}
		info!("Receipt: {}", receipt);

		Ok(receipt)
	}
}

/// Values shown to the operator before the confirmation prompt.
fn review_text(fees: &FeeParams, tx: &ClaimTransaction, signed: &SignedClaim) -> String {
	let payload = tx
		.message
		.payload
		.iter()
		.map(|value| format!("0x{:x}", value))
		.collect::<Vec<_>>()
		.join(", ");

	format!(
		"Fees: {}\nPayload: [{}]\nTransaction: {}\nSigned transaction: {}\n",
		fees, payload, tx, signed.raw
	)
}
