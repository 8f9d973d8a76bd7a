//! Funding failures that callers distinguish from transient errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundingError {
    #[error("No funding source: set FUNDER_MNEMONIC or give the first account a mnemonic")]
    MissingFundingSource,

    #[error("Transaction {tx_hash} failed (code {code}): {raw_log}")]
    TxFailed {
        tx_hash: String,
        code: u32,
        raw_log: String,
    },

    #[error("Transaction {tx_hash} not confirmed after {attempts} polls")]
    ConfirmationTimeout { tx_hash: String, attempts: u32 },
}
