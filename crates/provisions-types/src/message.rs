//! L1 to L2 message types.
//!
//! Defines the bridge's `sendMessageToL2` entry point and the message it
//! carries to the Starknet recipient contract.

use alloy::primitives::{Bytes, U256};
use alloy::{sol, sol_types::SolCall};

// Solidity interface of the Starknet core messaging contract.
sol! {
	/// Sends a message to an L2 contract, paying the L1 handler fee with msg.value.
	function sendMessageToL2(
		uint256 toAddress,
		uint256 selector,
		uint256[] payload
	) external payable returns (bytes32, uint256);
}

/// Message consumed by an L1 handler on Starknet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct L2Message {
	/// L2 contract receiving the message.
	pub to_address: U256,
	/// Selector of the L1 handler on the L2 contract.
	pub selector: U256,
	/// Handler arguments, in the order the handler decodes them.
	pub payload: Vec<U256>,
}

impl L2Message {
	/// ABI-encodes the `sendMessageToL2` call carrying this message.
	pub fn encode_call(&self) -> Bytes {
		sendMessageToL2Call {
			toAddress: self.to_address,
			selector: self.selector,
			payload: self.payload.clone(),
		}
		.abi_encode()
		.into()
	}

	/// Decodes calldata produced by [`L2Message::encode_call`].
	pub fn decode_call(data: &[u8]) -> Result<Self, alloy::sol_types::Error> {
		let call = sendMessageToL2Call::abi_decode(data)?;
		Ok(Self {
			to_address: call.toAddress,
			selector: call.selector,
			payload: call.payload,
		})
	}
}
