use alloy::primitives::Address;
use async_trait::async_trait;
use provisions_types::{ClaimTransaction, SignedClaim};
use thiserror::Error;

pub mod implementations;

pub use implementations::local::LocalWallet;

#[derive(Debug, Error)]
pub enum AccountError {
	#[error("Signing failed: {0}")]
	SigningFailed(String),
	#[error("Invalid key: {0}")]
	InvalidKey(String),
}

/// Holder of the claimant's signing key.
#[async_trait]
pub trait AccountInterface: Send + Sync {
	/// L1 address derived from the signing key.
	async fn address(&self) -> Result<Address, AccountError>;
	/// Signs the claim transaction and returns its EIP-2718 encoding.
	async fn sign_transaction(&self, tx: &ClaimTransaction) -> Result<SignedClaim, AccountError>;
}
