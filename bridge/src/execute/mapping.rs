//! Address mapping handlers.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, StdResult, Storage};

use crate::error::ContractError;
use crate::state::ADDRESS_MAP;

/// Set the sender's payout address. Last write wins; mapping to oneself is allowed.
pub fn execute_map_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mapped = deps.api.addr_validate(&address)?;
    ADDRESS_MAP.save(deps.storage, &info.sender, &mapped)?;

    Ok(Response::new()
        .add_attribute("action", "map_address")
        .add_attribute("address", info.sender)
        .add_attribute("mapped", mapped))
}

/// Resolve the payout address for `address`; unmapped addresses resolve to themselves.
pub fn load_mapped_address(storage: &dyn Storage, address: &Addr) -> StdResult<Addr> {
    match ADDRESS_MAP.may_load(storage, address)? {
        Some(mapped) => Ok(mapped),
        None => Ok(address.clone()),
    }
}
