extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::Address as _,
    Address, Env, IntoVal, TryIntoVal,
};

use crate::{events, ContractError, StakingPoolContract, StakingPoolContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingPoolContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let staking_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(StakingPoolContract, ());
    let client = StakingPoolContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &staking_token.address(), &5, &5, &1_000_000);

    (env, client, admin)
}

// ── Two-step hand-over ───────────────────────────────────────────────────────

#[test]
fn test_propose_and_accept_admin() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    assert_eq!(client.get_pending_admin(), Some(successor.clone()));
    // Nothing changes until the successor accepts.
    assert_eq!(client.get_admin(), admin);

    client.accept_admin(&successor);
    assert_eq!(client.get_admin(), successor);
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_new_admin_can_start_staking() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    client.accept_admin(&successor);

    let result = client.try_start_staking(&admin);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccessDenied),
        _ => unreachable!("Expected AccessDenied error"),
    }

    client.start_staking(&successor);
    assert!(client.is_started());
}

#[test]
fn test_propose_by_non_admin_fails() {
    let (env, client, _admin) = setup();
    let intruder = Address::generate(&env);

    let result = client.try_propose_admin(&intruder, &intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccessDenied),
        _ => unreachable!("Expected AccessDenied error"),
    }
    assert_eq!(client.get_pending_admin(), None);
}

#[test]
fn test_accept_by_wrong_address_fails() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);
    let intruder = Address::generate(&env);

    client.propose_admin(&admin, &successor);

    let result = client.try_accept_admin(&intruder);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::AccessDenied),
        _ => unreachable!("Expected AccessDenied error"),
    }
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_accept_without_proposal_fails() {
    let (env, client, _admin) = setup();
    let someone = Address::generate(&env);

    let result = client.try_accept_admin(&someone);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_cancel_admin_transfer() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    client.cancel_admin_transfer(&admin);
    assert_eq!(client.get_pending_admin(), None);

    let result = client.try_accept_admin(&successor);
    assert!(result.is_err());
    assert_eq!(client.get_admin(), admin);
}

#[test]
fn test_cancel_without_proposal_fails() {
    let (_env, client, admin) = setup();

    let result = client.try_cancel_admin_transfer(&admin);
    match result {
        Err(Ok(e)) => assert_eq!(e, ContractError::InvalidInput),
        _ => unreachable!("Expected InvalidInput error"),
    }
}

#[test]
fn test_handover_events_track_pending_successor() {
    let (env, client, admin) = setup();
    let successor = Address::generate(&env);

    client.propose_admin(&admin, &successor);
    let event = crate::test::all_events(&env).last().unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("ADMIN"), admin.clone()).into_val(&env)
    );
    let payload: events::AdminHandoverEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.admin, admin);
    assert_eq!(payload.pending, Some(successor.clone()));

    client.accept_admin(&successor);
    let event = crate::test::all_events(&env).last().unwrap();
    assert_eq!(
        event.1,
        (symbol_short!("ADMIN"), successor.clone()).into_val(&env)
    );
    let payload: events::AdminHandoverEvent = event.2.try_into_val(&env).unwrap();
    assert_eq!(payload.admin, successor);
    assert_eq!(payload.pending, None);
}

// ── Error codes ──────────────────────────────────────────────────────────────

#[test]
fn test_error_discriminants_are_stable() {
    assert_eq!(ContractError::NotInitialized as u32, 1);
    assert_eq!(ContractError::AlreadyInitialized as u32, 2);
    assert_eq!(ContractError::AccessDenied as u32, 3);
    assert_eq!(ContractError::InvalidInput as u32, 4);
    assert_eq!(ContractError::AlreadyStarted as u32, 10);
    assert_eq!(ContractError::PoolNotStarted as u32, 11);
    assert_eq!(ContractError::ZeroAmount as u32, 20);
    assert_eq!(ContractError::CapExceeded as u32, 21);
    assert_eq!(ContractError::NoActiveStake as u32, 22);
    assert_eq!(ContractError::LockupNotOver as u32, 23);
    assert_eq!(ContractError::InsufficientAllowance as u32, 30);
    assert_eq!(ContractError::InsufficientBalance as u32, 31);
    assert_eq!(ContractError::PoolInsufficientFunds as u32, 32);
    assert_eq!(ContractError::Overflow as u32, 40);
}
