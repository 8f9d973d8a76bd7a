//! Ledger access used by the funding loop.

use async_trait::async_trait;
use eyre::Result;

/// Status of a broadcast transaction as seen by the ledger
#[derive(Debug, Clone, PartialEq)]
pub enum TxStatus {
    /// Not yet visible (not in a block or not indexed yet)
    Pending,
    /// Included in a block with a zero result code
    Confirmed { height: u64 },
    /// Included in a block with a non-zero result code
    Failed { code: u32, raw_log: String },
}

#[async_trait]
pub trait Ledger: Send + Sync {
    /// Address the transfers are paid from
    fn source_address(&self) -> String;

    /// Sign and broadcast a native transfer, returning the tx hash
    async fn transfer(&self, recipient: &str, amount: u128) -> Result<String>;

    /// Look up a broadcast transaction
    async fn tx_status(&self, tx_hash: &str) -> Result<TxStatus>;
}
