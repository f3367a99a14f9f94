#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, CHILD_CHAIN};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN};

#[test]
fn test_set_bridger_by_manager() {
    let setup = Setup::default();
    let manager = Address::generate(&setup.env);
    let bridger = Address::generate(&setup.env);
    setup.factory.set_manager(&setup.owner, &manager);

    setup
        .factory
        .set_bridger(&manager, &CHILD_CHAIN, &bridger);
    assert_eq!(setup.factory.get_bridger(&CHILD_CHAIN), Some(bridger));
    assert_eq!(
        setup.factory.get_child_factory(&CHILD_CHAIN),
        Some(setup.child_factory.clone())
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_set_bridger_unknown_chain() {
    let setup = Setup::default();
    setup.factory.set_bridger(
        &setup.owner,
        &(CHILD_CHAIN + 1),
        &Address::generate(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_bridger_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.factory.set_bridger(&stranger, &CHILD_CHAIN, &stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_child_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.factory.set_child(
        &stranger,
        &CHILD_CHAIN,
        &stranger,
        &stranger,
        &BytesN::from_array(&setup.env, &[1; 32]),
    );
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
fn test_set_messenger_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup.factory.set_messenger(&stranger, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_killed_by_manager() {
    let setup = Setup::default();
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));
    let manager = Address::generate(&setup.env);
    setup.factory.set_manager(&setup.owner, &manager);
    setup.factory.set_killed(&manager, &gauge, &true);
}

#[test]
fn test_transfer_ownership() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);

    setup
        .factory
        .commit_transfer_ownership(&setup.owner, &new_owner);
    setup.factory.accept_transfer_ownership(&new_owner);
    assert_eq!(setup.factory.owner(), new_owner);

    // the manager role is not part of the transfer
    assert_eq!(setup.factory.manager(), setup.owner);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_commit_transfer_ownership_by_manager() {
    let setup = Setup::default();
    let manager = Address::generate(&setup.env);
    setup.factory.set_manager(&setup.owner, &manager);
    setup.factory.commit_transfer_ownership(&manager, &manager);
}
