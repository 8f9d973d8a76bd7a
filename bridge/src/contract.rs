//! Custody Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_transfer, execute_change_manager, execute_map_address,
    execute_receive_tokens, execute_set_no_events, execute_token_fallback,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_config, query_custody_balance, query_deposit, query_deposits, query_manager,
    query_mapped_address, query_no_events, query_owner, query_suppressed_events, query_token,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_COUNT, SUPPRESSED_EVENTS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let manager = deps.api.addr_validate(&msg.manager)?;
    let token = deps.api.addr_validate(&msg.token)?;

    let config = Config {
        owner: info.sender,
        manager,
        token,
    };
    CONFIG.save(deps.storage, &config)?;

    DEPOSIT_COUNT.save(deps.storage, &0u64)?;
    SUPPRESSED_EVENTS.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("manager", config.manager)
        .add_attribute("token", config.token))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Roles & configuration
        ExecuteMsg::ChangeManager { new_manager } => {
            execute_change_manager(deps, info, new_manager)
        }
        ExecuteMsg::SetNoEvents { count } => execute_set_no_events(deps, info, count),

        // Release
        ExecuteMsg::AcceptTransfer { recipient, amount } => {
            execute_accept_transfer(deps, env, info, recipient, amount)
        }

        // Deposits
        ExecuteMsg::Receive(cw20_msg) => execute_token_fallback(deps, info, cw20_msg),
        ExecuteMsg::ReceiveTokens { amount } => execute_receive_tokens(deps, env, info, amount),

        // Address mapping
        ExecuteMsg::MapAddress { address } => execute_map_address(deps, info, address),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::Manager {} => to_json_binary(&query_manager(deps)?),
        QueryMsg::Token {} => to_json_binary(&query_token(deps)?),
        QueryMsg::MappedAddress { address } => {
            to_json_binary(&query_mapped_address(deps, address)?)
        }
        QueryMsg::NoEvents {} => to_json_binary(&query_no_events(deps)?),
        QueryMsg::Deposit { index } => to_json_binary(&query_deposit(deps, index)?),
        QueryMsg::Deposits { start_after, limit } => {
            to_json_binary(&query_deposits(deps, start_after, limit)?)
        }
        QueryMsg::SuppressedEvents {} => to_json_binary(&query_suppressed_events(deps)?),
        QueryMsg::CustodyBalance {} => to_json_binary(&query_custody_balance(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if SUPPRESSED_EVENTS.may_load(deps.storage)?.is_none() {
        SUPPRESSED_EVENTS.save(deps.storage, &0u64)?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
