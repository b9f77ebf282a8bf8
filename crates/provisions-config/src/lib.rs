//! Configuration loading for the claim tool.
//!
//! The configuration is built once at startup from the mainnet defaults, an
//! optional TOML file, and `PROVISIONS_*` environment overrides, then handed
//! around by reference.

use alloy::primitives::Address;
use provisions_types::is_felt;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};

pub mod types;

pub use types::*;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("File not found: {0}")]
	FileNotFound(String),

	#[error("Parse error: {0}")]
	ParseError(String),

	#[error("Validation error: {0}")]
	ValidationError(String),

	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),
}

/// Configuration loader with environment variable overrides
pub struct ConfigLoader {
	file_path: Option<PathBuf>,
	data_file: Option<PathBuf>,
	env_prefix: String,
}

impl Default for ConfigLoader {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigLoader {
	pub fn new() -> Self {
		Self {
			file_path: None,
			data_file: None,
			env_prefix: "PROVISIONS_".to_string(),
		}
	}

	pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.file_path = Some(path.as_ref().to_path_buf());
		self
	}

	/// Overrides the dataset location; takes precedence over file and environment.
	pub fn with_data_file<P: AsRef<Path>>(mut self, path: P) -> Self {
		self.data_file = Some(path.as_ref().to_path_buf());
		self
	}

	#[cfg(test)]
	pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
		self.env_prefix = prefix.into();
		self
	}

	pub async fn load(&self) -> Result<ClaimConfig, ConfigError> {
		// Start from mainnet defaults unless a file is given
		let mut config = match &self.file_path {
			Some(file_path) => self.load_from_file(file_path).await?,
			None => ClaimConfig::default(),
		};

		self.apply_env_overrides(&mut config)?;

		if let Some(data_file) = &self.data_file {
			config.data_file = data_file.clone();
		}

		self.validate_config(&config)?;

		Ok(config)
	}

	async fn load_from_file(&self, file_path: &Path) -> Result<ClaimConfig, ConfigError> {
		if !file_path.exists() {
			return Err(ConfigError::FileNotFound(file_path.display().to_string()));
		}

		info!("Loading configuration from {:?}", file_path);
		let content = tokio::fs::read_to_string(file_path).await?;

		toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
	}

	fn env_var(&self, name: &str) -> Option<String> {
		env::var(format!("{}{}", self.env_prefix, name)).ok()
	}

	fn apply_env_overrides(&self, config: &mut ClaimConfig) -> Result<(), ConfigError> {
		if let Some(data_file) = self.env_var("DATA_FILE") {
			debug!("Overriding data file from environment");
			config.data_file = PathBuf::from(data_file);
		}

		if let Some(priority_fee) = self.env_var("PRIORITY_FEE_WEI") {
			debug!("Overriding priority fee from environment");
			config.fees.priority_fee_wei = priority_fee.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid priority fee: {}", e))
			})?;
		}

		if let Some(bridge_address) = self.env_var("BRIDGE_ADDRESS") {
			debug!("Overriding bridge address from environment");
			config.bridge.address = Address::from_str(&bridge_address).map_err(|e| {
				ConfigError::ValidationError(format!("Invalid bridge address: {}", e))
			})?;
		}

		if let Some(interval) = self.env_var("RECEIPT_POLL_INTERVAL_SECS") {
			debug!("Overriding receipt poll interval from environment");
			config.receipt_poll_interval_secs = interval.parse().map_err(|e| {
				ConfigError::ValidationError(format!("Invalid receipt poll interval: {}", e))
			})?;
		}

		Ok(())
	}

	fn validate_config(&self, config: &ClaimConfig) -> Result<(), ConfigError> {
		if config.bridge.address == Address::ZERO {
			return Err(ConfigError::ValidationError(
				"Bridge address must not be zero".to_string(),
			));
		}

		if !is_felt(config.bridge.l2_recipient) {
			return Err(ConfigError::ValidationError(
				"L2 recipient is not a valid Starknet field element".to_string(),
			));
		}

		if !is_felt(config.bridge.l2_selector) {
			return Err(ConfigError::ValidationError(
				"L2 selector is not a valid Starknet field element".to_string(),
			));
		}

		if config
			.fees
			.fee_history_percentiles
			.iter()
			.any(|p| !(0.0..=100.0).contains(p))
		{
			return Err(ConfigError::ValidationError(
				"Fee history percentiles must be within 0..=100".to_string(),
			));
		}

		if config.receipt_poll_interval_secs == 0 {
			return Err(ConfigError::ValidationError(
				"Receipt poll interval must be at least one second".to_string(),
			));
		}

		Ok(())
	}
}
