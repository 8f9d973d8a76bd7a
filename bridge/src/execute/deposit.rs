//! Deposit handlers.
//!
//! Two entry points accept deposits into custody:
//! - `Receive` (token fallback): pushed by the custody token after a CW20 `Send`
//! - `ReceiveTokens`: the depositor asks the bridge to pull a pre-approved amount
//!
//! Each guards its own caller; both finish in `record_or_suppress`.

use cosmwasm_std::{Addr, DepsMut, Env, Event, MessageInfo, Response, Storage, Uint128};
use cw20::Cw20ReceiveMsg;

use super::mapping::load_mapped_address;
use crate::custody::{query_allowance, query_balance, transfer_from_msg};
use crate::error::{ContractError, Role};
use crate::state::{
    DepositRecord, CONFIG, DEPOSITS, DEPOSIT_COUNT, SUPPRESSED_EVENTS, TRANSFER_TO_EVENT,
};

/// Token fallback: the custody token notifies the bridge of tokens it already moved in.
pub fn execute_token_fallback(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.token {
        return Err(ContractError::Unauthorized {
            role: Role::CustodyToken,
        });
    }

    if cw20_msg.amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be positive".to_string(),
        });
    }

    let from = deps.api.addr_validate(&cw20_msg.sender)?;
    let receiver = load_mapped_address(deps.storage, &from)?;

    let response = Response::new()
        .add_attribute("action", "token_fallback")
        .add_attribute("from", from)
        .add_attribute("amount", cw20_msg.amount)
        .add_attribute("data_len", cw20_msg.msg.len().to_string());

    record_or_suppress(deps.storage, response, receiver, cw20_msg.amount)
}

/// Pull `amount` from the sender into custody through the token allowance.
pub fn execute_receive_tokens(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "deposit amount must be positive".to_string(),
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let bridge = env.contract.address;

    let allowance = query_allowance(
        &deps.querier,
        &env.block,
        &config.token,
        &info.sender,
        &bridge,
    )?;
    if allowance < amount {
        return Err(ContractError::InsufficientFunds {
            available: allowance,
            required: amount,
        });
    }

    let balance = query_balance(&deps.querier, &config.token, &info.sender)?;
    if balance < amount {
        return Err(ContractError::InsufficientFunds {
            available: balance,
            required: amount,
        });
    }

    let receiver = load_mapped_address(deps.storage, &info.sender)?;

    let response = Response::new()
        .add_message(transfer_from_msg(&config.token, &info.sender, &bridge, amount)?)
        .add_attribute("action", "receive_tokens")
        .add_attribute("from", info.sender)
        .add_attribute("amount", amount);

    record_or_suppress(deps.storage, response, receiver, amount)
}

/// Append a deposit record and `transfer_to` event, or consume one unit of
/// event suppression instead. The counter saturates at zero.
fn record_or_suppress(
    storage: &mut dyn Storage,
    response: Response,
    receiver: Addr,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let suppressed = SUPPRESSED_EVENTS.may_load(storage)?.unwrap_or_default();
    if suppressed > 0 {
        let remaining = suppressed.saturating_sub(1);
        SUPPRESSED_EVENTS.save(storage, &remaining)?;
        return Ok(response.add_attribute("events_suppressed_remaining", remaining.to_string()));
    }

    let index = DEPOSIT_COUNT.may_load(storage)?.unwrap_or_default();
    DEPOSITS.save(
        storage,
        index,
        &DepositRecord {
            receiver: receiver.clone(),
            amount,
        },
    )?;
    DEPOSIT_COUNT.save(storage, &(index + 1))?;

    Ok(response.add_event(
        Event::new(TRANSFER_TO_EVENT)
            .add_attribute("index", index.to_string())
            .add_attribute("receiver", receiver)
            .add_attribute("amount", amount),
    ))
}
