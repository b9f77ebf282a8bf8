//! Serde helpers for dataset and configuration deserialization

use crate::felt::parse_hex_u256;
use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serializer};
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
	Number(u64),
	String(String),
}

/// Parses a decimal or `0x`-prefixed hex integer.
pub fn parse_u256(value: &str) -> Result<U256, String> {
	let value = value.trim();
	if value.starts_with("0x") || value.starts_with("0X") {
		parse_hex_u256(value).map_err(|e| e.to_string())
	} else {
		U256::from_str_radix(value, 10).map_err(|_| format!("invalid integer: {}", value))
	}
}

/// Custom deserializer for U256 that accepts JSON numbers, decimal strings and hex strings
pub fn deserialize_u256<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
	D: Deserializer<'de>,
{
	match NumberOrString::deserialize(deserializer)? {
		NumberOrString::Number(n) => Ok(U256::from(n)),
		NumberOrString::String(s) => parse_u256(&s).map_err(serde::de::Error::custom),
	}
}

/// Custom deserializer for a list of `0x`-prefixed hashes
pub fn deserialize_hex_u256_vec<'de, D>(deserializer: D) -> Result<Vec<U256>, D::Error>
where
	D: Deserializer<'de>,
{
	Vec::<String>::deserialize(deserializer)?
		.iter()
		.map(|s| parse_hex_u256(s).map_err(serde::de::Error::custom))
		.collect()
}

/// Custom deserializer for addresses that ignores the EIP-55 checksum casing
pub fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
	D: Deserializer<'de>,
{
	let s = String::deserialize(deserializer)?;
	Address::from_str(s.trim())
		.map_err(|e| serde::de::Error::custom(format!("Invalid address {}: {}", s, e)))
}

/// Custom serializer for U256 as a `0x`-prefixed hex string
pub fn serialize_u256_hex<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&format!("0x{:x}", value))
}
