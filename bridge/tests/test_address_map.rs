//! Integration tests for the self-service address mapping.

use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, ContractWrapper, Executor};

use custody_bridge::msg::{ExecuteMsg, InstantiateMsg, MappedAddressResponse, QueryMsg};

const OWNER: &str = "terra1owner";
const MANAGER: &str = "terra1manager";
const ALICE: &str = "terra1alice";
const BOB: &str = "terra1bob";
const PAYOUT_A: &str = "terra1payouta";
const PAYOUT_B: &str = "terra1payoutb";

fn setup() -> (App, Addr) {
    let mut app = App::default();
    let code_id = app.store_code(Box::new(ContractWrapper::new(
        custody_bridge::contract::execute,
        custody_bridge::contract::instantiate,
        custody_bridge::contract::query,
    )) as Box<dyn cw_multi_test::Contract<Empty>>);

    let bridge = app
        .instantiate_contract(
            code_id,
            Addr::unchecked(OWNER),
            &InstantiateMsg {
                manager: MANAGER.to_string(),
                token: "terra1token".to_string(),
            },
            &[],
            "custody-bridge",
            None,
        )
        .unwrap();

    (app, bridge)
}

fn map_address(app: &mut App, bridge: &Addr, sender: &str, address: &str) {
    app.execute_contract(
        Addr::unchecked(sender),
        bridge.clone(),
        &ExecuteMsg::MapAddress {
            address: address.to_string(),
        },
        &[],
    )
    .unwrap();
}

fn mapped(app: &App, bridge: &Addr, address: &str) -> Addr {
    let res: MappedAddressResponse = app
        .wrap()
        .query_wasm_smart(
            bridge,
            &QueryMsg::MappedAddress {
                address: address.to_string(),
            },
        )
        .unwrap();
    assert_eq!(res.address, Addr::unchecked(address));
    res.mapped
}

#[test]
fn test_not_mapped_address() {
    let (app, bridge) = setup();
    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(ALICE));
}

#[test]
fn test_map_address() {
    let (mut app, bridge) = setup();

    map_address(&mut app, &bridge, ALICE, PAYOUT_A);
    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(PAYOUT_A));
}

#[test]
fn test_remap_last_write_wins() {
    let (mut app, bridge) = setup();

    map_address(&mut app, &bridge, ALICE, PAYOUT_A);
    map_address(&mut app, &bridge, ALICE, PAYOUT_B);
    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(PAYOUT_B));

    // Mapping back to oneself is allowed
    map_address(&mut app, &bridge, ALICE, ALICE);
    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(ALICE));
}

#[test]
fn test_mapping_only_affects_sender() {
    let (mut app, bridge) = setup();

    map_address(&mut app, &bridge, ALICE, PAYOUT_A);
    map_address(&mut app, &bridge, BOB, PAYOUT_B);

    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(PAYOUT_A));
    assert_eq!(mapped(&app, &bridge, BOB), Addr::unchecked(PAYOUT_B));
    assert_eq!(mapped(&app, &bridge, PAYOUT_A), Addr::unchecked(PAYOUT_A));
}

#[test]
fn test_many_to_one_mapping() {
    let (mut app, bridge) = setup();

    map_address(&mut app, &bridge, ALICE, PAYOUT_A);
    map_address(&mut app, &bridge, BOB, PAYOUT_A);

    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(PAYOUT_A));
    assert_eq!(mapped(&app, &bridge, BOB), Addr::unchecked(PAYOUT_A));
}

#[test]
fn test_map_address_rejects_invalid_address() {
    let (mut app, bridge) = setup();

    let res = app.execute_contract(
        Addr::unchecked(ALICE),
        bridge.clone(),
        &ExecuteMsg::MapAddress {
            address: "X".to_string(),
        },
        &[],
    );
    assert!(res.is_err());
    assert_eq!(mapped(&app, &bridge, ALICE), Addr::unchecked(ALICE));
}
