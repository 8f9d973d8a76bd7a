//! LCD-backed ledger
//!
//! Signs bank sends with cosmrs and talks to the chain through the LCD REST API.

use std::time::Duration;

use async_trait::async_trait;
use bip39::Mnemonic;
use cosmrs::{
    bank::MsgSend,
    bip32::DerivationPath,
    crypto::secp256k1::SigningKey,
    tx::{self, Fee, Msg, SignDoc, SignerInfo},
    AccountId, Coin, Denom,
};
use eyre::{eyre, Result, WrapErr};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::NetworkConfig;
use crate::ledger::{Ledger, TxStatus};

/// Account info from LCD
#[derive(Debug, Clone, PartialEq)]
pub struct AccountInfo {
    pub sequence: u64,
    pub account_number: u64,
}

/// Transaction lookup response from LCD
#[derive(Debug, Deserialize)]
struct TxLookupResponse {
    tx_response: Option<TxResponseInner>,
}

#[derive(Debug, Deserialize)]
struct TxResponseInner {
    height: String,
    #[serde(default)]
    code: u32,
    #[serde(default)]
    raw_log: Option<String>,
}

/// Ledger client that signs with a mnemonic-derived key
pub struct LcdLedger {
    lcd_url: String,
    chain_id: String,
    denom: Denom,
    gas_limit: u64,
    gas_price: f64,
    signing_key: SigningKey,
    address: AccountId,
    client: Client,
}

impl LcdLedger {
    pub fn new(config: &NetworkConfig, mnemonic: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .wrap_err("Failed to create HTTP client")?;

        let mnemonic = Mnemonic::parse(mnemonic).map_err(|e| eyre!("Invalid mnemonic: {}", e))?;
        let seed = mnemonic.to_seed("");
        let path: DerivationPath = config
            .derivation_path
            .parse()
            .map_err(|e| eyre!("Invalid derivation path: {:?}", e))?;

        let signing_key = SigningKey::derive_from_path(seed, &path)
            .map_err(|e| eyre!("Failed to derive signing key: {}", e))?;
        let address = signing_key
            .public_key()
            .account_id(&config.account_prefix)
            .map_err(|e| eyre!("Failed to get account ID: {}", e))?;

        let denom: Denom = config
            .denom
            .parse()
            .map_err(|e| eyre!("Invalid denom {}: {}", config.denom, e))?;

        info!(address = %address, chain_id = %config.chain_id, "Funding source loaded");

        Ok(Self {
            lcd_url: config.lcd_url.trim_end_matches('/').to_string(),
            chain_id: config.chain_id.clone(),
            denom,
            gas_limit: config.gas_limit,
            gas_price: config.gas_price,
            signing_key,
            address,
            client,
        })
    }

    /// Get account info (sequence and account number)
    pub async fn get_account_info(&self) -> Result<AccountInfo> {
        let url = format!(
            "{}/cosmos/auth/v1beta1/accounts/{}",
            self.lcd_url, self.address
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .wrap_err("Failed to query account info")?;

        if !response.status().is_success() {
            return Err(eyre!(
                "Account query failed: {} - {}",
                response.status(),
                response.text().await.unwrap_or_default()
            ));
        }

        let data: serde_json::Value = response.json().await?;
        parse_account_info(&data)
    }

    fn fee(&self) -> Fee {
        let amount = ((self.gas_limit as f64) * self.gas_price).ceil() as u128;
        Fee::from_amount_and_gas(
            Coin {
                denom: self.denom.clone(),
                amount,
            },
            self.gas_limit,
        )
    }

    /// Broadcast a signed transaction, returning its hash
    async fn broadcast_tx(&self, tx_bytes: &[u8]) -> Result<String> {
        let tx_b64 = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, tx_bytes);
        let request = serde_json::json!({
            "tx_bytes": tx_b64,
            "mode": "BROADCAST_MODE_SYNC"
        });

        let url = format!("{}/cosmos/tx/v1beta1/txs", self.lcd_url);
        debug!(url = %url, "Broadcasting transaction");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .wrap_err("Failed to broadcast transaction")?;
        let status = response.status();
        let body: serde_json::Value = response.json().await?;

        if !status.is_success() {
            return Err(eyre!("Broadcast failed: {} - {}", status, body));
        }
        parse_broadcast_response(&body)
    }
}

#[async_trait]
impl Ledger for LcdLedger {
    fn source_address(&self) -> String {
        self.address.to_string()
    }

    async fn transfer(&self, recipient: &str, amount: u128) -> Result<String> {
        let account_info = self.get_account_info().await?;

        let to_address: AccountId = recipient
            .parse()
            .map_err(|e| eyre!("Invalid recipient {}: {}", recipient, e))?;

        let msg = MsgSend {
            from_address: self.address.clone(),
            to_address,
            amount: vec![Coin {
                denom: self.denom.clone(),
                amount,
            }],
        };

        let body = tx::Body::new(
            vec![msg
                .to_any()
                .map_err(|e| eyre!("Failed to convert message: {}", e))?],
            "",
            0u32,
        );

        let signer_info =
            SignerInfo::single_direct(Some(self.signing_key.public_key()), account_info.sequence);
        let auth_info = signer_info.auth_info(self.fee());

        let chain_id = self
            .chain_id
            .parse()
            .map_err(|_| eyre!("Invalid chain ID"))?;
        let sign_doc = SignDoc::new(&body, &auth_info, &chain_id, account_info.account_number)
            .map_err(|e| eyre!("Failed to create sign doc: {}", e))?;
        let tx_raw = sign_doc
            .sign(&self.signing_key)
            .map_err(|e| eyre!("Failed to sign transaction: {}", e))?;
        let tx_bytes = tx_raw
            .to_bytes()
            .map_err(|e| eyre!("Failed to serialize transaction: {}", e))?;

        self.broadcast_tx(&tx_bytes).await
    }

    async fn tx_status(&self, tx_hash: &str) -> Result<TxStatus> {
        let url = format!("{}/cosmos/tx/v1beta1/txs/{}", self.lcd_url, tx_hash);
        let response = self.client.get(&url).send().await?;

        // Not indexed yet
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(TxStatus::Pending);
        }
        if !response.status().is_success() {
            return Err(eyre!("Transaction lookup failed: {}", response.status()));
        }

        let lookup: TxLookupResponse = response.json().await?;
        tx_status_from(lookup)
    }
}

fn tx_status_from(lookup: TxLookupResponse) -> Result<TxStatus> {
    let Some(tx) = lookup.tx_response else {
        return Ok(TxStatus::Pending);
    };

    if tx.code != 0 {
        return Ok(TxStatus::Failed {
            code: tx.code,
            raw_log: tx.raw_log.unwrap_or_default(),
        });
    }

    let height: u64 = tx.height.parse().wrap_err("Invalid tx height")?;
    if height == 0 {
        return Ok(TxStatus::Pending);
    }
    Ok(TxStatus::Confirmed { height })
}

/// Accepts both plain and vesting (`base_account`) account layouts.
fn parse_account_info(data: &serde_json::Value) -> Result<AccountInfo> {
    let account = data
        .get("account")
        .ok_or_else(|| eyre!("Missing 'account' field in response"))?;

    let field = |name: &str| -> Result<u64> {
        account
            .get(name)
            .or_else(|| account.get("base_account").and_then(|b| b.get(name)))
            .and_then(|v| v.as_str())
            .unwrap_or("0")
            .parse()
            .wrap_err_with(|| format!("Invalid account field {}", name))
    };

    Ok(AccountInfo {
        sequence: field("sequence")?,
        account_number: field("account_number")?,
    })
}

fn parse_broadcast_response(body: &serde_json::Value) -> Result<String> {
    let tx_response = body
        .get("tx_response")
        .ok_or_else(|| eyre!("Broadcast failed: {}", body))?;

    let code = tx_response.get("code").and_then(|v| v.as_u64()).unwrap_or(0);
    if code != 0 {
        let raw_log = tx_response
            .get("raw_log")
            .and_then(|v| v.as_str())
            .unwrap_or("Unknown error");
        return Err(eyre!("Transaction rejected (code {}): {}", code, raw_log));
    }

    tx_response
        .get("txhash")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| eyre!("Missing txhash in broadcast response"))
}
