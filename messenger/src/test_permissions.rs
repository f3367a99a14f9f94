#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, ROOT_CHAIN};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_set_relayer_owner() {
    let setup = Setup::default();
    let relayer = Address::generate(&setup.env);
    setup
        .child
        .set_relayer(&setup.owner, &ROOT_CHAIN, &Some(relayer.clone()));
    assert_eq!(setup.child.relayer(&ROOT_CHAIN), Some(relayer));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_relayer_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup
        .child
        .set_relayer(&stranger, &ROOT_CHAIN, &Some(stranger.clone()));
}

#[test]
fn test_ownership_transfer() {
    let setup = Setup::default();
    let new_owner = Address::generate(&setup.env);
    setup
        .child
        .commit_transfer_ownership(&setup.owner, &new_owner);
    assert_eq!(setup.child.owner(), setup.owner);
    assert_eq!(setup.child.future_owner(), Some(new_owner.clone()));

    setup.child.accept_transfer_ownership(&new_owner);
    assert_eq!(setup.child.owner(), new_owner);
    assert_eq!(setup.child.future_owner(), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_ownership_accept_stranger() {
    let setup = Setup::default();
    setup
        .child
        .commit_transfer_ownership(&setup.owner, &Address::generate(&setup.env));
    setup
        .child
        .accept_transfer_ownership(&Address::generate(&setup.env));
}
