//! Bridge funder CLI
//!
//! Seeds the accounts and members listed in a network config with native funds:
//!
//! ```text
//! bridge-funder <network> <amount>
//! ```
//!
//! Transfers run one at a time; each is confirmed before the next starts.

mod config;
mod error;
mod funding;
mod lcd;
mod ledger;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use config::NetworkConfig;
use funding::{fund_accounts, PollConfig};
use lcd::LcdLedger;

#[derive(Parser)]
#[command(name = "bridge-funder")]
#[command(about = "Fund bridge operator and test accounts", long_about = None)]
struct Cli {
    /// Network name; reads `<network>conf.json`
    network: String,

    /// Amount per account in the smallest unit of the configured denom
    amount: u128,

    /// Directory holding the network config files
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async_main())
}

async fn async_main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    init_logging();
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded .env from {:?}", path);
    }

    let cli = Cli::parse();

    let config = NetworkConfig::load(&cli.config_dir, &cli.network)?;
    tracing::info!(
        network = %cli.network,
        chain_id = %config.chain_id,
        lcd_url = %config.lcd_url,
        "Configuration loaded"
    );

    let plan = config.funding_plan()?;
    let ledger = LcdLedger::new(&config, &plan.source_mnemonic)?;
    let poll = PollConfig {
        interval: Duration::from_millis(config.poll_interval_ms),
        max_attempts: config.max_poll_attempts,
    };

    let receipts = fund_accounts(&ledger, &plan.targets, cli.amount, &poll).await?;
    for receipt in &receipts {
        tracing::debug!(
            recipient = %receipt.recipient,
            tx_hash = %receipt.tx_hash,
            height = receipt.height,
            "Funded"
        );
    }

    tracing::info!(
        funded = receipts.len(),
        amount = %cli.amount,
        denom = %config.denom,
        "Funding complete"
    );
    Ok(())
}

/// Initialize tracing/logging with structured output
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bridge_funder=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
