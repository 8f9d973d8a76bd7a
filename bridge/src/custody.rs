//! Custody token boundary.
//!
//! The custody token is an external CW20 contract. The bridge only reads
//! balances/allowances from it and dispatches transfers to it; the token's
//! own failures revert the whole transaction.

use cosmwasm_std::{
    to_json_binary, Addr, BlockInfo, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

/// Query a CW20 balance
pub fn query_balance(querier: &QuerierWrapper, token: &Addr, account: &Addr) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Query the allowance `owner` granted to `spender`. Expired allowances count as zero.
pub fn query_allowance(
    querier: &QuerierWrapper,
    block: &BlockInfo,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> StdResult<Uint128> {
    let response: AllowanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
    )?;

    if response.expires.is_expired(block) {
        return Ok(Uint128::zero());
    }
    Ok(response.allowance)
}

/// Transfer from the bridge's own custody balance
pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

/// Pull an approved amount from `owner` into `recipient`
pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_transfer_msg_targets_token() {
        let token = Addr::unchecked("token");
        let msg = transfer_msg(&token, &Addr::unchecked("alice"), Uint128::new(42)).unwrap();

        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "token");
                assert!(funds.is_empty());
                let parsed: Cw20ExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    parsed,
                    Cw20ExecuteMsg::Transfer {
                        recipient: "alice".to_string(),
                        amount: Uint128::new(42),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_transfer_from_msg_pulls_from_owner() {
        let token = Addr::unchecked("token");
        let msg = transfer_from_msg(
            &token,
            &Addr::unchecked("depositor"),
            &Addr::unchecked("bridge"),
            Uint128::new(7),
        )
        .unwrap();

        let CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) = msg else {
            panic!("expected wasm execute");
        };
        let parsed: Cw20ExecuteMsg = from_json(msg).unwrap();
        assert_eq!(
            parsed,
            Cw20ExecuteMsg::TransferFrom {
                owner: "depositor".to_string(),
                recipient: "bridge".to_string(),
                amount: Uint128::new(7),
            }
        );
    }
}
