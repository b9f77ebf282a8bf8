//! Eligibility dataset types.
//!
//! The dataset is produced by an external process and lists, for every
//! eligible L1 address, the allocated amount together with the Merkle proof
//! the L2 contract checks the claim against.

use crate::serde_helpers::{deserialize_address, deserialize_hex_u256_vec, deserialize_u256};
use alloy::primitives::{Address, U256};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
	#[error("Failed to read dataset {path}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("Failed to parse dataset: {0}")]
	Parse(#[from] serde_json::Error),
}

/// One eligible address with its allocation and Merkle proof.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EligibilityRecord {
	/// L1 address the allocation belongs to.
	#[serde(deserialize_with = "deserialize_address")]
	pub identity: Address,
	/// Allocation in whole tokens, before scaling to fri.
	#[serde(deserialize_with = "deserialize_u256")]
	pub amount: U256,
	/// Position of the leaf in the Merkle tree.
	#[serde(deserialize_with = "deserialize_u256")]
	pub merkle_index: U256,
	/// Sibling hashes from the leaf up to the root.
	#[serde(deserialize_with = "deserialize_hex_u256_vec")]
	pub merkle_path: Vec<U256>,
}

/// The full eligibility list as shipped in `data.json`.
///
/// Entries stay undecoded until a lookup matches their identity, so a
/// malformed entry only fails the claim of the address it belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EligibilityDataset {
	eligibles: Vec<serde_json::Value>,
}

impl EligibilityDataset {
	pub fn from_json(contents: &str) -> Result<Self, DatasetError> {
		Ok(serde_json::from_str(contents)?)
	}

	pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
		let path = path.as_ref();
		let contents = tokio::fs::read_to_string(path)
			.await
			.map_err(|source| DatasetError::Io {
				path: path.display().to_string(),
				source,
			})?;

		Self::from_json(&contents)
	}

	/// Returns the first record whose identity equals `address`.
	///
	/// Addresses are compared as bytes, so the hex casing used in the
	/// dataset does not matter. Entries without a parseable identity never
	/// match and are skipped.
	pub fn find(&self, address: &Address) -> Result<Option<EligibilityRecord>, DatasetError> {
		for entry in &self.eligibles {
			let identity = entry
				.get("identity")
				.and_then(|identity| identity.as_str())
				.and_then(|identity| Address::from_str(identity).ok());

			if identity.as_ref() == Some(address) {
				return Ok(Some(serde_json::from_value(entry.clone())?));
			}
		}

		Ok(None)
	}

	pub fn len(&self) -> usize {
		self.eligibles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.eligibles.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DATASET: &str = r#"{
		"eligibles": [
			{
				"identity": "0x00000000219ab540356cbb839cbe05303d7705fa",
				"amount": "1500",
				"merkle_index": "0",
				"merkle_path": ["0x1", "0x2"],
				"merkle_path_len": 2
			},
			{
				"identity": "0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266",
				"amount": 25,
				"merkle_index": 7,
				"merkle_path": [
					"0x05a0c5a0a2d1a8b1e3d2f1c0b9a8d7e6f5c4b3a2918273645566778899aabbcc",
					"0x0123",
					"0x04"
				]
			}
		]
	}"#;

	fn address(raw: &str) -> Address {
		Address::from_str(raw).unwrap()
	}

	#[test]
	fn test_parse_dataset() {
		let dataset = EligibilityDataset::from_json(DATASET).unwrap();
		assert_eq!(dataset.len(), 2);

		let first = dataset
			.find(&address("0x00000000219ab540356cbb839cbe05303d7705fa"))
			.unwrap()
			.unwrap();
		assert_eq!(first.amount, U256::from(1500u16));
		assert_eq!(first.merkle_index, U256::ZERO);
		assert_eq!(first.merkle_path, vec![U256::from(1u8), U256::from(2u8)]);

		let second = dataset
			.find(&address("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"))
			.unwrap()
			.unwrap();
		assert_eq!(second.amount, U256::from(25u8));
		assert_eq!(second.merkle_index, U256::from(7u8));
		assert_eq!(second.merkle_path.len(), 3);
	}

	#[test]
	fn test_find_is_case_insensitive() {
		let dataset = EligibilityDataset::from_json(DATASET).unwrap();

		for raw in [
			"0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
			"0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266",
			"0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
		] {
			let record = dataset
				.find(&address(raw))
				.unwrap()
				.expect("record should be found");
			assert_eq!(record.identity, address(raw));
			assert_eq!(record.merkle_index, U256::from(7u8));
		}
	}

	#[test]
	fn test_find_absent_address() {
		let dataset = EligibilityDataset::from_json(DATASET).unwrap();
		let absent = address("0x1111111111111111111111111111111111111111");
		assert!(dataset.find(&absent).unwrap().is_none());
	}

	#[test]
	fn test_malformed_entries_of_other_addresses_are_skipped() {
		let raw = r#"{"eligibles": [
			{"identity": "0x1234", "amount": 1, "merkle_index": 0, "merkle_path": []},
			{"amount": 1},
			{"identity": "0x1111111111111111111111111111111111111111", "amount": "lots"},
			{
				"identity": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
				"amount": 3,
				"merkle_index": 1,
				"merkle_path": ["0x05"]
			}
		]}"#;
		let dataset = EligibilityDataset::from_json(raw).unwrap();
		assert_eq!(dataset.len(), 4);

		let record = dataset
			.find(&address("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"))
			.unwrap()
			.unwrap();
		assert_eq!(record.amount, U256::from(3u8));
		assert_eq!(record.merkle_path, vec![U256::from(5u8)]);
	}

	#[test]
	fn test_malformed_matching_entry_is_an_error() {
		let raw = r#"{"eligibles": [
			{"identity": "0x1111111111111111111111111111111111111111", "amount": "lots"}
		]}"#;
		let dataset = EligibilityDataset::from_json(raw).unwrap();
		assert!(matches!(
			dataset.find(&address("0x1111111111111111111111111111111111111111")),
			Err(DatasetError::Parse(_))
		));
	}

	#[test]
	fn test_rejects_malformed_document() {
		assert!(matches!(
			EligibilityDataset::from_json(r#"{"eligibles": 5}"#),
			Err(DatasetError::Parse(_))
		));
	}

	#[tokio::test]
	async fn test_load_from_file() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("data.json");
		std::fs::write(&path, DATASET).unwrap();

		let dataset = EligibilityDataset::load(&path).await.unwrap();
		assert_eq!(dataset.len(), 2);

		let missing = EligibilityDataset::load(dir.path().join("missing.json")).await;
		assert!(matches!(missing, Err(DatasetError::Io { .. })));
	}
}
