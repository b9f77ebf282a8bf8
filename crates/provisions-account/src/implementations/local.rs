//! Account provider implementations for the claim tool.
//!
//! This module provides a local private key wallet backed by Alloy's signer.

use crate::{AccountError, AccountInterface};
use alloy::eips::eip2718::Encodable2718;
use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Address;
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use provisions_types::{ClaimTransaction, SignedClaim};
use tracing::debug;

/// Local wallet implementation using Alloy's signer.
///
/// Keeps the private key in memory for the lifetime of the run and signs
/// EIP-1559 transactions with it.
pub struct LocalWallet {
	/// The underlying Alloy signer that handles cryptographic operations.
	signer: PrivateKeySigner,
	/// Network wallet wrapping the signer for transaction building.
	wallet: EthereumWallet,
}

impl LocalWallet {
	/// Creates a new LocalWallet from a hex-encoded private key.
	///
	/// The private key should be provided as a hex string (with or without 0x prefix).
	pub fn new(private_key_hex: &str) -> Result<Self, AccountError> {
		let signer = private_key_hex
			.parse::<PrivateKeySigner>()
			.map_err(|e| AccountError::InvalidKey(format!("Invalid private key: {}", e)))?;

		let wallet = EthereumWallet::from(signer.clone());

		Ok(Self { signer, wallet })
	}
}

#[async_trait]
impl AccountInterface for LocalWallet {
	async fn address(&self) -> Result<Address, AccountError> {
		Ok(self.signer.address())
	}

	async fn sign_transaction(&self, tx: &ClaimTransaction) -> Result<SignedClaim, AccountError> {
		if tx.from != self.signer.address() {
			return Err(AccountError::SigningFailed(format!(
				"Transaction sender {} does not match wallet address {}",
				tx.from,
				self.signer.address()
			)));
		}

		let request = <TransactionRequest as From<&ClaimTransaction>>::from(tx);
		let envelope = request.build(&self.wallet).await.map_err(|e| {
			AccountError::SigningFailed(format!("Failed to sign transaction: {}", e))
		})?;

		let hash = *envelope.tx_hash();
		debug!(tx_hash = %hash, "Signed claim transaction");

		Ok(SignedClaim {
			hash,
			raw: envelope.encoded_2718().into(),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy::consensus::TxEnvelope;
	use alloy::eips::eip2718::Decodable2718;
	use alloy::primitives::{keccak256, U256};
	use provisions_types::L2Message;
	use std::str::FromStr;

	// First default anvil account
	const TEST_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
	const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

	fn create_test_transaction() -> ClaimTransaction {
		ClaimTransaction {
			to: Address::from_str("0xc662c410C0ECf747543f5bA90660f6ABeBD9C8c4").unwrap(),
			message: L2Message {
				to_address: U256::from(1u8),
				selector: U256::from(2u8),
				payload: vec![U256::from(3u8), U256::from(4u8)],
			},
			chain_id: 1,
			from: Address::from_str(TEST_ADDRESS).unwrap(),
			nonce: 9,
			value: U256::from(300_000u32),
			max_fee_per_gas: 1_000_000_200,
			max_priority_fee_per_gas: 1_000_000_000,
			gas_limit: Some(100_000),
		}
	}

	#[tokio::test]
	async fn test_address_derivation() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		assert_eq!(
			wallet.address().await.unwrap(),
			Address::from_str(TEST_ADDRESS).unwrap()
		);
	}

	#[test]
	fn test_invalid_key() {
		assert!(matches!(
			LocalWallet::new("0x1234"),
			Err(AccountError::InvalidKey(_))
		));
		assert!(matches!(
			LocalWallet::new("not-a-key"),
			Err(AccountError::InvalidKey(_))
		));
	}

	#[tokio::test]
	async fn test_sign_eip1559() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		let tx = create_test_transaction();

		let signed = wallet.sign_transaction(&tx).await.unwrap();
		assert_eq!(keccak256(&signed.raw), signed.hash);

		let envelope = TxEnvelope::decode_2718(&mut signed.raw.as_ref()).unwrap();
		let inner = envelope.as_eip1559().expect("should be an EIP-1559 transaction");
		assert_eq!(inner.tx().chain_id, 1);
		assert_eq!(inner.tx().nonce, 9);
		assert_eq!(inner.tx().gas_limit, 100_000);
		assert_eq!(inner.tx().max_fee_per_gas, 1_000_000_200);
		assert_eq!(inner.tx().max_priority_fee_per_gas, 1_000_000_000);
		assert_eq!(inner.tx().value, U256::from(300_000u32));
		assert_eq!(
			L2Message::decode_call(&inner.tx().input).unwrap(),
			tx.message
		);
	}

	#[tokio::test]
	async fn test_sign_rejects_foreign_sender() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		let mut tx = create_test_transaction();
		tx.from = Address::from_str("0x1111111111111111111111111111111111111111").unwrap();

		assert!(matches!(
			wallet.sign_transaction(&tx).await,
			Err(AccountError::SigningFailed(_))
		));
	}

	#[tokio::test]
	async fn test_sign_requires_gas_limit() {
		let wallet = LocalWallet::new(TEST_KEY).unwrap();
		let mut tx = create_test_transaction();
		tx.gas_limit = None;

		assert!(matches!(
			wallet.sign_transaction(&tx).await,
			Err(AccountError::SigningFailed(_))
		));
	}
}
