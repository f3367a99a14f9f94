#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, ROOT_CHAIN};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN};

#[test]
fn test_set_messenger_by_manager() {
    let setup = Setup::default();
    let manager = Address::generate(&setup.env);
    let messenger = Address::generate(&setup.env);
    setup.factory.set_manager(&setup.owner, &manager);

    setup
        .factory
        .set_messenger(&manager, &Some(messenger.clone()));
    assert_eq!(setup.factory.messenger(), Some(messenger));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_messenger_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.factory.set_messenger(&stranger, &Some(stranger.clone()));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_root_factory_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup
        .factory
        .set_root_factory(&stranger, &ROOT_CHAIN, &stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_voting_escrow_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup
        .factory
        .set_voting_escrow(&stranger, &Some(stranger.clone()));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_implementation_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup
        .factory
        .set_implementation(&stranger, &BytesN::from_array(&setup.env, &[1; 32]));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_mirrored_by_stranger() {
    let setup = Setup::default();
    let gauge = setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &None,
        &None,
    );
    let stranger = Address::generate(&setup.env);
    setup.factory.set_mirrored(&stranger, &gauge, &true);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_killed_by_manager() {
    let setup = Setup::default();
    let gauge = setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &None,
        &None,
    );
    let manager = Address::generate(&setup.env);
    setup.factory.set_manager(&setup.owner, &manager);
    setup.factory.set_killed(&manager, &gauge, &true);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_manager_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.factory.set_manager(&stranger, &stranger);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);

    setup
        .factory
        .commit_transfer_ownership(&setup.owner, &new_owner);
    assert_eq!(setup.factory.future_owner(), Some(new_owner.clone()));
    assert_eq!(setup.factory.owner(), setup.owner);

    setup.factory.accept_transfer_ownership(&new_owner);
    assert_eq!(setup.factory.owner(), new_owner);
    assert_eq!(setup.factory.future_owner(), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_accept_transfer_ownership_by_stranger() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .factory
        .commit_transfer_ownership(&setup.owner, &new_owner);
    setup
        .factory
        .accept_transfer_ownership(&Address::generate(&setup.env));
}
