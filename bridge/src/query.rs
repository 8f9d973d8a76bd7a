//! Query handlers for the custody bridge contract.

use cosmwasm_std::{Deps, Env, Order, StdError, StdResult};
use cw_storage_plus::Bound;

use crate::custody::query_balance;
use crate::execute::load_mapped_address;
use crate::msg::{
    ConfigResponse, CustodyBalanceResponse, DepositResponse, DepositsResponse, ManagerResponse,
    MappedAddressResponse, NoEventsResponse, OwnerResponse, SuppressedEventsResponse,
    TokenResponse,
};
use crate::state::{CONFIG, DEPOSITS, DEPOSIT_COUNT, SUPPRESSED_EVENTS};

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Role Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        manager: config.manager,
        token: config.token,
    })
}

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: config.owner,
    })
}

pub fn query_manager(deps: Deps) -> StdResult<ManagerResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ManagerResponse {
        manager: config.manager,
    })
}

pub fn query_token(deps: Deps) -> StdResult<TokenResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(TokenResponse {
        token: config.token,
    })
}

// ============================================================================
// Address Mapping
// ============================================================================

pub fn query_mapped_address(deps: Deps, address: String) -> StdResult<MappedAddressResponse> {
    let address = deps.api.addr_validate(&address)?;
    let mapped = load_mapped_address(deps.storage, &address)?;
    Ok(MappedAddressResponse { address, mapped })
}

// ============================================================================
// Deposit Log
// ============================================================================

pub fn query_no_events(deps: Deps) -> StdResult<NoEventsResponse> {
    let count = DEPOSIT_COUNT.may_load(deps.storage)?.unwrap_or_default();
    Ok(NoEventsResponse { count })
}

/// Deposit record by index. Missing indices are an error, never a zeroed record.
pub fn query_deposit(deps: Deps, index: u64) -> StdResult<DepositResponse> {
    let record = DEPOSITS
        .may_load(deps.storage, index)?
        .ok_or_else(|| StdError::not_found(format!("deposit record {}", index)))?;
    Ok(DepositResponse {
        index,
        receiver: record.receiver,
        amount: record.amount,
    })
}

pub fn query_deposits(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<DepositsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let deposits = DEPOSITS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (index, record) = item?;
            Ok(DepositResponse {
                index,
                receiver: record.receiver,
                amount: record.amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(DepositsResponse { deposits })
}

pub fn query_suppressed_events(deps: Deps) -> StdResult<SuppressedEventsResponse> {
    let remaining = SUPPRESSED_EVENTS.may_load(deps.storage)?.unwrap_or_default();
    Ok(SuppressedEventsResponse { remaining })
}

// ============================================================================
// Custody
// ============================================================================

pub fn query_custody_balance(deps: Deps, env: Env) -> StdResult<CustodyBalanceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = query_balance(&deps.querier, &config.token, &env.contract.address)?;
    Ok(CustodyBalanceResponse {
        token: config.token,
        balance,
    })
}
