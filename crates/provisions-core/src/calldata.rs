//! Bridge call construction.

use alloy::primitives::{Bytes, U256};
use provisions_config::BridgeConfig;
use provisions_types::L2Message;

/// The cross-layer message carrying `payload` to the configured L2 handler.
pub fn claim_message(bridge: &BridgeConfig, payload: Vec<U256>) -> L2Message {
	L2Message {
		to_address: bridge.l2_recipient,
		selector: bridge.l2_selector,
		payload,
	}
}

/// ABI-encoded `sendMessageToL2` calldata for `payload`.
pub fn encode_claim_call(bridge: &BridgeConfig, payload: Vec<U256>) -> Bytes {
	claim_message(bridge, payload).encode_call()
}
