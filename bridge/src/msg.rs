//! Message types for the custody bridge contract

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial manager address
    pub manager: String,
    /// CW20 token contract held in custody
    pub token: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Roles & Configuration
    // ========================================================================
    /// Replace the manager
    ///
    /// Authorization: Manager only
    ChangeManager { new_manager: String },

    /// Set how many upcoming deposits are accepted without a record or event
    ///
    /// Authorization: Owner only
    SetNoEvents { count: u64 },

    // ========================================================================
    // Release
    // ========================================================================
    /// Release custody funds to a recipient
    ///
    /// Authorization: Manager only
    AcceptTransfer { recipient: String, amount: Uint128 },

    // ========================================================================
    // Deposits
    // ========================================================================
    /// Token fallback: deposit notification pushed by the custody token when
    /// tokens are sent to the bridge (CW20 `Send`). The hook payload is ignored.
    ///
    /// Authorization: Custody token only
    Receive(cw20::Cw20ReceiveMsg),

    /// Pull a pre-approved amount from the sender into custody
    ///
    /// Authorization: Anyone holding an allowance for the bridge
    ReceiveTokens { amount: Uint128 },

    // ========================================================================
    // Address Mapping
    // ========================================================================
    /// Set the sender's payout address on the counter-ledger
    MapAddress { address: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner, manager and token in one response
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnerResponse)]
    Owner {},

    #[returns(ManagerResponse)]
    Manager {},

    #[returns(TokenResponse)]
    Token {},

    /// Mapped payout address, or the address itself when never mapped
    #[returns(MappedAddressResponse)]
    MappedAddress { address: String },

    /// Number of deposit records
    #[returns(NoEventsResponse)]
    NoEvents {},

    /// Deposit record by index; fails with not found past the end of the log
    #[returns(DepositResponse)]
    Deposit { index: u64 },

    /// Page through deposit records
    #[returns(DepositsResponse)]
    Deposits {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Remaining count of deposits to be accepted silently
    #[returns(SuppressedEventsResponse)]
    SuppressedEvents {},

    /// Bridge balance in the custody token
    #[returns(CustodyBalanceResponse)]
    CustodyBalance {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub manager: Addr,
    pub token: Addr,
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct ManagerResponse {
    pub manager: Addr,
}

#[cw_serde]
pub struct TokenResponse {
    pub token: Addr,
}

#[cw_serde]
pub struct MappedAddressResponse {
    pub address: Addr,
    pub mapped: Addr,
}

#[cw_serde]
pub struct NoEventsResponse {
    pub count: u64,
}

#[cw_serde]
pub struct DepositResponse {
    pub index: u64,
    pub receiver: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct DepositsResponse {
    pub deposits: Vec<DepositResponse>,
}

#[cw_serde]
pub struct SuppressedEventsResponse {
    pub remaining: u64,
}

#[cw_serde]
pub struct CustodyBalanceResponse {
    pub token: Addr,
    pub balance: Uint128,
}
