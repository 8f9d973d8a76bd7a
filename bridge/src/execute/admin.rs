//! Role administration handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::{ContractError, Role};
use crate::state::{CONFIG, SUPPRESSED_EVENTS};

/// Replace the manager. Only the current manager may rotate itself.
pub fn execute_change_manager(
    deps: DepsMut,
    info: MessageInfo,
    new_manager: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::Unauthorized {
            role: Role::Manager,
        });
    }

    let new_manager = deps.api.addr_validate(&new_manager)?;
    let previous = std::mem::replace(&mut config.manager, new_manager);
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "change_manager")
        .add_attribute("previous_manager", previous)
        .add_attribute("new_manager", config.manager))
}

/// Set the number of upcoming deposits accepted without a record or event.
pub fn execute_set_no_events(
    deps: DepsMut,
    info: MessageInfo,
    count: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized { role: Role::Owner });
    }

    SUPPRESSED_EVENTS.save(deps.storage, &count)?;

    Ok(Response::new()
        .add_attribute("action", "set_no_events")
        .add_attribute("count", count.to_string()))
}
