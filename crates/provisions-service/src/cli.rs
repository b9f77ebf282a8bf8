//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "provisions-claim")]
#[command(about = "Claim Starknet provisions through the L1 bridge", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Ethereum node JSON-RPC endpoint (http or https)
	#[arg(long = "eth_node_url", value_name = "URL")]
	pub eth_node_url: String,

	/// Starknet account receiving the provisions
	#[arg(long = "starknet_address", value_name = "HEX")]
	pub starknet_address: String,

	/// Eligibility dataset, overrides the configured location
	#[arg(long, value_name = "FILE")]
	pub data_file: Option<PathBuf>,

	/// Optional TOML configuration file
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, env = "PROVISIONS_LOG_LEVEL", default_value = "info")]
	pub log_level: String,

	/// Sign the transaction but do not send it
	#[arg(long)]
	pub dry_run: bool,
}
