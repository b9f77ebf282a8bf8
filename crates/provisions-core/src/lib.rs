//! Claim logic for Starknet provisions.
//!
//! The pure stages (payload assembly, fee computation, calldata encoding)
//! are free functions; [`ClaimRunner`] sequences them together with the
//! node and wallet calls.

pub mod calldata;
pub mod confirm;
pub mod error;
pub mod fees;
pub mod inputs;
pub mod payload;
pub mod runner;

pub use calldata::{claim_message, encode_claim_call};
pub use confirm::{Confirmation, PromptConfirmation, CONFIRM_PROMPT};
pub use error::ClaimError;
pub use fees::{compute_fees, compute_fees_with, FeeParams};
pub use inputs::{ClaimInputs, PRIVATE_KEY_ENV};
pub use payload::{build_payload, scale_amount, FRI_PER_TOKEN};
pub use runner::{ClaimOutcome, ClaimRunner};
