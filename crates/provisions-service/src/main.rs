use anyhow::{Context, Result};
use clap::Parser;
use provisions_account::LocalWallet;
use provisions_config::ConfigLoader;
use provisions_core::{ClaimInputs, ClaimOutcome, ClaimRunner, PromptConfirmation, PRIVATE_KEY_ENV};
use provisions_delivery::AlloyDelivery;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let args = Args::parse();

	// Initialize tracing
	setup_tracing(&args.log_level)?;

	// Inputs are checked before anything touches the network
	let inputs = ClaimInputs::new(
		&args.eth_node_url,
		&args.starknet_address,
		std::env::var(PRIVATE_KEY_ENV).ok(),
	)
	.context("Invalid input")?;

	let mut loader = ConfigLoader::new();
	if let Some(config_file) = &args.config {
		info!("Loading configuration from: {:?}", config_file);
		loader = loader.with_file(config_file);
	}
	if let Some(data_file) = &args.data_file {
		loader = loader.with_data_file(data_file);
	}
	let config = loader
		.load()
		.await
		.context("Failed to load configuration")?;

	let wallet = LocalWallet::new(inputs.private_key()).context("Failed to load private key")?;
	let delivery =
		AlloyDelivery::new(inputs.node_url()).context("Failed to create node client")?;
	info!("Using Ethereum node at {}", delivery.rpc_url());

	let runner = ClaimRunner::new(&config, &delivery, &wallet);
	let mut confirmation = PromptConfirmation::stdin();

	match runner
		.run(&inputs, args.dry_run, &mut confirmation)
		.await
		.context("Claim failed")?
	{
		ClaimOutcome::Confirmed(receipt) => {
			info!("Claim transaction {} mined", receipt.transaction_hash)
		}
		ClaimOutcome::Declined => info!("Claim cancelled by operator"),
		ClaimOutcome::DryRun(signed) => {
			info!("Dry run complete, transaction {} was not sent", signed.hash)
		}
	}

	Ok(())
}

fn setup_tracing(log_level: &str) -> Result<()> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	tracing_subscriber::registry()
		.with(env_filter)
		.with(tracing_subscriber::fmt::layer())
		.init();

	Ok(())
}
