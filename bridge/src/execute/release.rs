//! Release handler: pays out custody funds for transfers observed on the
//! counter-ledger.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Uint128};

use crate::custody::{query_balance, transfer_msg};
use crate::error::{ContractError, Role};
use crate::state::CONFIG;

/// Release `amount` from the bridge's custody balance to `recipient`.
///
/// Manager only. Fails without dispatching anything if custody holds less
/// than `amount`; a failing token transfer reverts the whole transaction.
pub fn execute_accept_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            role: Role::Manager,
        });
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "release amount must be positive".to_string(),
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;

    let custody = query_balance(&deps.querier, &config.token, &env.contract.address)?;
    if custody < amount {
        return Err(ContractError::InsufficientFunds {
            available: custody,
            required: amount,
        });
    }

    Ok(Response::new()
        .add_message(transfer_msg(&config.token, &recipient, amount)?)
        .add_attribute("action", "accept_transfer")
        .add_attribute("recipient", recipient)
        .add_attribute("amount", amount)
        .add_attribute("custody_remaining", custody - amount))
}
