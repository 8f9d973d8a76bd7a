//! Network configuration for the funder
//!
//! Each network has a `<network>conf.json` file listing the LCD endpoint and
//! the accounts to fund. The funding source comes from `FUNDER_MNEMONIC` or,
//! failing that, from the first configured account.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::error::FundingError;

/// Environment variable naming the funding source mnemonic
pub const FUNDER_MNEMONIC_VAR: &str = "FUNDER_MNEMONIC";

/// Terra derivation path (same as Cosmos, coin type 330)
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/330'/0'/0/0";

/// Network configuration as stored in `<network>conf.json`
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub lcd_url: String,
    pub chain_id: String,
    #[serde(default = "default_denom")]
    pub denom: String,
    #[serde(default = "default_account_prefix")]
    pub account_prefix: String,
    #[serde(default = "default_derivation_path")]
    pub derivation_path: String,
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
    #[serde(default = "default_gas_price")]
    pub gas_price: f64,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_max_poll_attempts")]
    pub max_poll_attempts: u32,
    #[serde(default)]
    pub accounts: Vec<AccountEntry>,
    #[serde(default)]
    pub members: Vec<AccountEntry>,
}

/// An account is either a bare address or an object that may carry a mnemonic.
#[derive(Clone, Deserialize)]
#[serde(untagged)]
pub enum AccountEntry {
    Address(String),
    Keyed {
        address: String,
        #[serde(default)]
        mnemonic: Option<String>,
    },
}

/// Custom Debug that redacts mnemonics to prevent accidental log leakage.
impl fmt::Debug for AccountEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountEntry::Address(address) => f.debug_tuple("Address").field(address).finish(),
            AccountEntry::Keyed { address, mnemonic } => f
                .debug_struct("Keyed")
                .field("address", address)
                .field("mnemonic", &mnemonic.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

impl AccountEntry {
    pub fn address(&self) -> &str {
        match self {
            AccountEntry::Address(address) => address,
            AccountEntry::Keyed { address, .. } => address,
        }
    }

    pub fn mnemonic(&self) -> Option<&str> {
        match self {
            AccountEntry::Address(_) => None,
            AccountEntry::Keyed { mnemonic, .. } => mnemonic.as_deref(),
        }
    }
}

/// Who pays and who gets paid, in order
pub struct FundingPlan {
    pub source_mnemonic: String,
    pub targets: Vec<String>,
}

impl fmt::Debug for FundingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FundingPlan")
            .field("source_mnemonic", &"<redacted>")
            .field("targets", &self.targets)
            .finish()
    }
}

fn default_denom() -> String {
    "uluna".to_string()
}

fn default_account_prefix() -> String {
    "terra".to_string()
}

fn default_derivation_path() -> String {
    DEFAULT_DERIVATION_PATH.to_string()
}

fn default_gas_limit() -> u64 {
    200_000
}

fn default_gas_price() -> f64 {
    0.015
}

fn default_poll_interval() -> u64 {
    1000
}

fn default_max_poll_attempts() -> u32 {
    60
}

impl NetworkConfig {
    /// Path of the config file for `network` inside `dir`
    pub fn path_for(dir: &Path, network: &str) -> PathBuf {
        dir.join(format!("{}conf.json", network))
    }

    /// Load `<network>conf.json` from `dir`
    pub fn load(dir: &Path, network: &str) -> Result<Self> {
        let path = Self::path_for(dir, network);
        let raw = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read network config {}", path.display()))?;
        Self::from_json(&raw).wrap_err_with(|| format!("Invalid network config {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: NetworkConfig = serde_json::from_str(raw)?;
        Ok(config)
    }

    /// Resolve the funding plan using `FUNDER_MNEMONIC` from the environment.
    pub fn funding_plan(&self) -> Result<FundingPlan> {
        self.funding_plan_with(env::var(FUNDER_MNEMONIC_VAR).ok())
    }

    /// Resolve the funding plan.
    ///
    /// With an explicit source every account and then every member is funded.
    /// Otherwise the first account must carry a mnemonic; it pays and is skipped.
    pub fn funding_plan_with(&self, source_mnemonic: Option<String>) -> Result<FundingPlan> {
        let (source_mnemonic, skip) = match source_mnemonic.filter(|m| !m.trim().is_empty()) {
            Some(mnemonic) => (mnemonic, 0),
            None => {
                let mnemonic = self
                    .accounts
                    .first()
                    .and_then(AccountEntry::mnemonic)
                    .ok_or(FundingError::MissingFundingSource)?;
                (mnemonic.to_string(), 1)
            }
        };

        let targets = self
            .accounts
            .iter()
            .skip(skip)
            .chain(self.members.iter())
            .map(|entry| entry.address().to_string())
            .collect();

        Ok(FundingPlan {
            source_mnemonic,
            targets,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MNEMONIC: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    fn sample() -> NetworkConfig {
        NetworkConfig::from_json(&format!(
            r#"{{
                "lcd_url": "http://localhost:1317",
                "chain_id": "localterra",
                "accounts": [
                    {{ "address": "terra1source", "mnemonic": "{}" }},
                    "terra1alice",
                    {{ "address": "terra1bob" }}
                ],
                "members": ["terra1member"]
            }}"#,
            MNEMONIC
        ))
        .unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = sample();
        assert_eq!(config.denom, "uluna");
        assert_eq!(config.account_prefix, "terra");
        assert_eq!(config.derivation_path, DEFAULT_DERIVATION_PATH);
        assert_eq!(config.poll_interval_ms, 1000);
        assert_eq!(config.max_poll_attempts, 60);
    }

    #[test]
    fn test_first_account_funds_the_rest() {
        let plan = sample().funding_plan_with(None).unwrap();
        assert_eq!(plan.source_mnemonic, MNEMONIC);
        assert_eq!(
            plan.targets,
            vec!["terra1alice", "terra1bob", "terra1member"]
        );
    }

    #[test]
    fn test_explicit_source_funds_every_account() {
        let plan = sample()
            .funding_plan_with(Some("other words".to_string()))
            .unwrap();
        assert_eq!(plan.source_mnemonic, "other words");
        assert_eq!(
            plan.targets,
            vec!["terra1source", "terra1alice", "terra1bob", "terra1member"]
        );
    }

    #[test]
    fn test_missing_source_is_an_error() {
        let config = NetworkConfig::from_json(
            r#"{ "lcd_url": "http://x", "chain_id": "c", "accounts": ["terra1alice"] }"#,
        )
        .unwrap();

        let err = config.funding_plan_with(None).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FundingError>(),
            Some(FundingError::MissingFundingSource)
        ));

        // Blank env value does not count as a source
        assert!(config.funding_plan_with(Some("  ".to_string())).is_err());
    }

    #[test]
    fn test_debug_redacts_mnemonic() {
        let config = sample();
        let rendered = format!("{:?}", config.accounts[0]);
        assert!(rendered.contains("<redacted>"));
        assert!(!rendered.contains("abandon"));
    }

    #[test]
    fn test_bundled_localterra_config() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("networks");
        let config = NetworkConfig::load(&dir, "localterra").unwrap();
        assert_eq!(config.chain_id, "localterra");

        // Bare addresses only: the source must come from the environment
        assert!(config.funding_plan_with(None).is_err());
        let plan = config
            .funding_plan_with(Some(MNEMONIC.to_string()))
            .unwrap();
        assert_eq!(plan.targets.len(), 3);
    }

    #[test]
    fn test_path_for_network() {
        let path = NetworkConfig::path_for(Path::new("/etc/bridge"), "testnet");
        assert_eq!(path, PathBuf::from("/etc/bridge/testnetconf.json"));
    }
}
