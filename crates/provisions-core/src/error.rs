// provisions-core/src/error.rs

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClaimError {
	#[error("Invalid input: {0}")]
	InvalidInput(String),

	#[error("Node unreachable: {0}")]
	NodeUnreachable(String),

	#[error("Ethereum address {0} not found in list of eligibles")]
	NotEligible(Address),

	#[error("Dataset error: {0}")]
	Dataset(#[from] provisions_types::DatasetError),

	#[error("Payload error: {0}")]
	Payload(String),

	#[error("Fee computation error: {0}")]
	Fees(String),

	#[error("Account error: {0}")]
	Account(#[from] provisions_account::AccountError),

	#[error("Delivery error: {0}")]
	Delivery(#[from] provisions_delivery::DeliveryError),

	#[error("Prompt error: {0}")]
	Prompt(#[from] std::io::Error),
}
