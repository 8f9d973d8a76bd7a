//! State definitions for the custody bridge contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract roles and the custody token
#[cw_serde]
pub struct Config {
    /// Instantiator; controls event suppression
    pub owner: Addr,
    /// Releases custody funds; rotated only by itself
    pub manager: Addr,
    /// CW20 contract holding the custody balance
    pub token: Addr,
}

/// Accepted deposit, appended to the audit log
#[cw_serde]
pub struct DepositRecord {
    /// Payout address on the counter-ledger (depositor's mapped address)
    pub receiver: Addr,
    /// Deposited amount in the token's smallest unit
    pub amount: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:custody-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Event type of the deposit audit notification
pub const TRANSFER_TO_EVENT: &str = "transfer_to";

// ============================================================================
// State Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Deposits still to be accepted without a record or event
pub const SUPPRESSED_EVENTS: Item<u64> = Item::new("suppressed_events");

/// Number of deposit records; also the next record index
pub const DEPOSIT_COUNT: Item<u64> = Item::new("deposit_count");

/// Deposit audit log
/// Key: sequence number starting at 0, Value: DepositRecord
pub const DEPOSITS: Map<u64, DepositRecord> = Map::new("deposits");

/// Self-service payout mappings. Absent entries map to the address itself.
/// Key: source address, Value: designated address
pub const ADDRESS_MAP: Map<&Addr, Addr> = Map::new("address_map");
