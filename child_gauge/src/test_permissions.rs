#![cfg(test)]
extern crate std;

use crate::testutils::{create_token, Setup};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use utils::constant::WEEK;

#[test]
fn test_add_reward_by_factory_owner() {
    let setup = Setup::default();
    let (reward_token, _) = create_token(&setup.env, &Address::generate(&setup.env));
    setup
        .gauge
        .add_reward(&setup.owner, &reward_token.address, &setup.owner);
    assert_eq!(setup.gauge.reward_count(), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_add_reward_by_stranger() {
    let setup = Setup::default();
    let (reward_token, _) = create_token(&setup.env, &Address::generate(&setup.env));
    let stranger = Address::generate(&setup.env);
    setup
        .gauge
        .add_reward(&stranger, &reward_token.address, &stranger);
}

#[test]
fn test_set_reward_distributor_by_distributor() {
    let setup = Setup::default();
    let (reward_token, _) = create_token(&setup.env, &Address::generate(&setup.env));
    let distributor = Address::generate(&setup.env);
    let new_distributor = Address::generate(&setup.env);
    setup
        .gauge
        .add_reward(&setup.manager, &reward_token.address, &distributor);

    setup
        .gauge
        .set_reward_distributor(&distributor, &reward_token.address, &new_distributor);
    assert_eq!(
        setup.gauge.reward_data(&reward_token.address).distributor,
        new_distributor
    );

    // the previous distributor lost its rights
    assert!(setup
        .gauge
        .try_set_reward_distributor(&distributor, &reward_token.address, &distributor)
        .is_err());
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_deposit_reward_by_stranger() {
    let setup = Setup::default();
    let (reward_token, reward_admin) = create_token(&setup.env, &Address::generate(&setup.env));
    let stranger = Address::generate(&setup.env);
    reward_admin.mint(&stranger, &1_000_0000000);
    setup
        .gauge
        .add_reward(&setup.manager, &reward_token.address, &Address::generate(&setup.env));
    setup.gauge.deposit_reward_token(
        &stranger,
        &reward_token.address,
        &1_000_0000000,
        &Some(WEEK),
    );
}

#[test]
fn test_deposit_reward_by_manager() {
    let setup = Setup::default();
    let (reward_token, reward_admin) = create_token(&setup.env, &Address::generate(&setup.env));
    reward_admin.mint(&setup.manager, &1_000_0000000);
    setup
        .gauge
        .add_reward(&setup.manager, &reward_token.address, &Address::generate(&setup.env));
    setup.gauge.deposit_reward_token(
        &setup.manager,
        &reward_token.address,
        &1_000_0000000,
        &Some(WEEK),
    );
    assert_eq!(
        setup.gauge.reward_remaining(&reward_token.address),
        1_000_0000000
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_recover_remaining_by_stranger() {
    let setup = Setup::default();
    let (reward_token, _) = create_token(&setup.env, &Address::generate(&setup.env));
    setup
        .gauge
        .add_reward(&setup.manager, &reward_token.address, &setup.manager);
    setup
        .gauge
        .recover_remaining(&Address::generate(&setup.env), &reward_token.address);
}

#[test]
fn test_set_manager() {
    let setup = Setup::default();
    let new_manager = Address::generate(&setup.env);
    setup.gauge.set_manager(&setup.manager, &new_manager);
    assert_eq!(setup.gauge.manager(), new_manager);

    // the factory owner can always take it back
    setup.gauge.set_manager(&setup.owner, &setup.manager);
    assert_eq!(setup.gauge.manager(), setup.manager);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_manager_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.gauge.set_manager(&stranger, &stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_mint_checkpoint_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.gauge.mint_checkpoint(&stranger, &stranger, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_killed_by_stranger() {
    let setup = Setup::default();
    setup
        .gauge
        .set_killed(&Address::generate(&setup.env), &true);
}
