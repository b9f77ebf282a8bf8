//! Claim transaction types.
//!
//! This module defines the unsigned claim transaction, its signed form, and
//! the receipt summary reported once the transaction is mined.

use crate::message::L2Message;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::rpc::types::TransactionRequest;
use std::fmt;

/// Unsigned EIP-1559 transaction calling the bridge's `sendMessageToL2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimTransaction {
	/// Bridge contract receiving the call.
	pub to: Address,
	/// Message forwarded to L2.
	pub message: L2Message,
	/// Chain ID for replay protection.
	pub chain_id: u64,
	/// Sender, derived from the signing key.
	pub from: Address,
	/// Sender nonce at the latest block.
	pub nonce: u64,
	/// Fee paid to the bridge for the L1 handler execution.
	pub value: U256,
	/// Maximum fee per gas (EIP-1559).
	pub max_fee_per_gas: u128,
	/// Maximum priority fee per gas (EIP-1559).
	pub max_priority_fee_per_gas: u128,
	/// Gas limit, filled in from the node's estimate.
	pub gas_limit: Option<u64>,
}

/// Conversion from our ClaimTransaction type to Alloy's TransactionRequest.
impl From<&ClaimTransaction> for TransactionRequest {
	fn from(tx: &ClaimTransaction) -> Self {
		let request = TransactionRequest::default()
			.with_from(tx.from)
			.with_to(tx.to)
			.with_input(tx.message.encode_call())
			.with_chain_id(tx.chain_id)
			.with_nonce(tx.nonce)
			.with_value(tx.value)
			.with_max_fee_per_gas(tx.max_fee_per_gas)
			.with_max_priority_fee_per_gas(tx.max_priority_fee_per_gas);

		match tx.gas_limit {
			Some(gas_limit) => request.with_gas_limit(gas_limit),
			None => request,
		}
	}
}

impl fmt::Display for ClaimTransaction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{{ from: {}, to: {}, chainId: {}, nonce: {}, value: {}, maxFeePerGas: {}, maxPriorityFeePerGas: {}, gas: {}, data: {} }}",
			self.from,
			self.to,
			self.chain_id,
			self.nonce,
			self.value,
			self.max_fee_per_gas,
			self.max_priority_fee_per_gas,
			self.gas_limit
				.map(|gas| gas.to_string())
				.unwrap_or_else(|| "unset".to_string()),
			self.message.encode_call(),
		)
	}
}

/// EIP-2718 encoded signed transaction, ready for `eth_sendRawTransaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedClaim {
	pub hash: B256,
	pub raw: Bytes,
}

/// Summary of a mined claim transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimReceipt {
	pub transaction_hash: B256,
	pub block_number: u64,
	pub gas_used: u64,
	pub effective_gas_price: u128,
	pub success: bool,
}

impl fmt::Display for ClaimReceipt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{{ transactionHash: {}, blockNumber: {}, gasUsed: {}, effectiveGasPrice: {}, status: {} }}",
			self.transaction_hash,
			self.block_number,
			self.gas_used,
			self.effective_gas_price,
			if self.success { 1 } else { 0 },
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	fn create_test_transaction() -> ClaimTransaction {
		ClaimTransaction {
			to: Address::from_str("0xc662c410C0ECf747543f5bA90660f6ABeBD9C8c4").unwrap(),
			message: L2Message {
				to_address: U256::from(10u8),
				selector: U256::from(20u8),
				payload: vec![U256::from(1u8), U256::from(2u8)],
			},
			chain_id: 1,
			from: Address::from_str("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266").unwrap(),
			nonce: 4,
			value: U256::from(300_000u32),
			max_fee_per_gas: 1_000_000_200,
			max_priority_fee_per_gas: 1_000_000_000,
			gas_limit: None,
		}
	}

	#[test]
	fn test_into_request() {
		let tx = create_test_transaction();
		let request = <TransactionRequest as From<&ClaimTransaction>>::from(&tx);

		assert_eq!(request.from, Some(tx.from));
		assert_eq!(request.to, Some(alloy::primitives::TxKind::Call(tx.to)));
		assert_eq!(request.chain_id, Some(1));
		assert_eq!(request.nonce, Some(4));
		assert_eq!(request.value, Some(U256::from(300_000u32)));
		assert_eq!(request.max_fee_per_gas, Some(1_000_000_200));
		assert_eq!(request.max_priority_fee_per_gas, Some(1_000_000_000));
		assert_eq!(request.gas, None);

		let input = request.input.input().cloned().unwrap();
		assert_eq!(L2Message::decode_call(&input).unwrap(), tx.message);
	}

	#[test]
	fn test_gas_limit_is_carried() {
		let mut tx = create_test_transaction();
		tx.gas_limit = Some(95_000);
		let request = <TransactionRequest as From<&ClaimTransaction>>::from(&tx);
		assert_eq!(request.gas, Some(95_000));
	}
}
