//! Sequential funding loop
//!
//! Each transfer is broadcast and then polled until the ledger reports it,
//! before the next account is touched.

use std::time::Duration;

use eyre::Result;
use tracing::{debug, info, warn};

use crate::error::FundingError;
use crate::ledger::{Ledger, TxStatus};

/// Polling settings for confirmation
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
    pub max_attempts: u32,
}

/// A confirmed transfer
#[derive(Debug, Clone, PartialEq)]
pub struct FundingReceipt {
    pub recipient: String,
    pub tx_hash: String,
    pub height: u64,
}

/// Fund every target with `amount`, one confirmed transfer at a time.
///
/// Stops at the first transfer that fails or cannot be confirmed.
pub async fn fund_accounts<L: Ledger + ?Sized>(
    ledger: &L,
    targets: &[String],
    amount: u128,
    poll: &PollConfig,
) -> Result<Vec<FundingReceipt>> {
    let source = ledger.source_address();
    let mut receipts = Vec::with_capacity(targets.len());

    for recipient in targets {
        info!(amount, from = %source, to = %recipient, "Transferring");

        let tx_hash = ledger.transfer(recipient, amount).await?;
        info!(tx_hash = %tx_hash, "Transfer broadcast");

        let height = wait_for_confirmation(ledger, &tx_hash, poll).await?;
        info!(tx_hash = %tx_hash, height, to = %recipient, "Transfer confirmed");

        receipts.push(FundingReceipt {
            recipient: recipient.clone(),
            tx_hash,
            height,
        });
    }

    Ok(receipts)
}

/// Poll until the transaction is visible. Pending results and lookup errors
/// are retried; a failed transaction or exhausted attempts end the wait.
pub async fn wait_for_confirmation<L: Ledger + ?Sized>(
    ledger: &L,
    tx_hash: &str,
    poll: &PollConfig,
) -> Result<u64> {
    for attempt in 1..=poll.max_attempts {
        match ledger.tx_status(tx_hash).await {
            Ok(TxStatus::Confirmed { height }) => return Ok(height),
            Ok(TxStatus::Failed { code, raw_log }) => {
                return Err(FundingError::TxFailed {
                    tx_hash: tx_hash.to_string(),
                    code,
                    raw_log,
                }
                .into());
            }
            Ok(TxStatus::Pending) => {
                debug!(tx_hash = %tx_hash, attempt, "Transaction not yet visible");
            }
            Err(e) => {
                warn!(tx_hash = %tx_hash, attempt, error = %e, "Transaction lookup failed, retrying");
            }
        }

        if attempt < poll.max_attempts {
            tokio::time::sleep(poll.interval).await;
        }
    }

    Err(FundingError::ConfirmationTimeout {
        tx_hash: tx_hash.to_string(),
        attempts: poll.max_attempts,
    }
    .into())
}
