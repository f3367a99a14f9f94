#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, CHAIN_ID};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
fn test_constructor() {
    let setup = Setup::default();
    assert_eq!(setup.proxy.ownership_admin(), setup.ownership_admin);
    assert_eq!(setup.proxy.emergency_admin(), setup.emergency_admin);
    assert_eq!(setup.proxy.manager(), setup.manager);
    assert_eq!(setup.proxy.future_ownership_admin(), None);
    assert_eq!(setup.proxy.future_emergency_admin(), None);
}

#[test]
fn test_install_proxy() {
    let setup = Setup::default();
    setup
        .factory
        .commit_transfer_ownership(&setup.factory_owner, &setup.proxy.address);
    assert_eq!(setup.factory.future_owner(), Some(setup.proxy.address.clone()));
    assert_eq!(setup.factory.owner(), setup.factory_owner);

    // no role needed to complete the handover
    setup.proxy.accept_transfer_ownership(&setup.factory.address);
    assert_eq!(setup.factory.owner(), setup.proxy.address);
    assert_eq!(setup.factory.future_owner(), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_accept_without_commit() {
    let setup = Setup::default();
    setup.proxy.accept_transfer_ownership(&setup.factory.address);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_not_installed() {
    let setup = Setup::default();
    setup.proxy.set_killed(
        &setup.ownership_admin,
        &setup.factory.address,
        &Address::generate(&setup.env),
        &true,
    );
}

#[test]
fn test_factory_calls() {
    let setup = Setup::default();
    setup.install_proxy();
    let gauge = Address::generate(&setup.env);
    let bridger = Address::generate(&setup.env);
    let child_factory = Address::generate(&setup.env);
    let messenger = Address::generate(&setup.env);

    setup
        .proxy
        .set_killed(&setup.emergency_admin, &setup.factory.address, &gauge, &true);
    assert!(setup.factory.is_killed(&gauge));
    setup
        .proxy
        .set_killed(&setup.ownership_admin, &setup.factory.address, &gauge, &false);
    assert!(!setup.factory.is_killed(&gauge));

    setup.proxy.set_child(
        &setup.manager,
        &setup.factory.address,
        &CHAIN_ID,
        &bridger,
        &child_factory,
        &setup.hash(1),
    );
    assert_eq!(setup.factory.get_bridger(&CHAIN_ID), Some(bridger));
    assert_eq!(setup.factory.get_child_factory(&CHAIN_ID), Some(child_factory));

    setup
        .proxy
        .set_implementation(&setup.manager, &setup.factory.address, &setup.hash(2));
    assert_eq!(setup.factory.implementation(), Some(setup.hash(2)));

    setup.proxy.set_messenger(
        &setup.ownership_admin,
        &setup.factory.address,
        &Some(messenger.clone()),
    );
    assert_eq!(setup.factory.messenger(), Some(messenger));
    setup
        .proxy
        .set_messenger(&setup.manager, &setup.factory.address, &None);
    assert_eq!(setup.factory.messenger(), None);
}

#[test]
fn test_transfer_factory_away() {
    let setup = Setup::default();
    setup.install_proxy();
    let new_owner = Address::generate(&setup.env);

    setup.proxy.commit_transfer_ownership(
        &setup.ownership_admin,
        &setup.factory.address,
        &new_owner,
    );
    assert_eq!(setup.factory.future_owner(), Some(new_owner.clone()));

    setup.factory.accept_transfer_ownership(&new_owner);
    assert_eq!(setup.factory.owner(), new_owner);
}

#[test]
fn test_set_admins() {
    let setup = Setup::default();
    let ownership_admin = Address::generate(&setup.env);
    let emergency_admin = Address::generate(&setup.env);

    setup
        .proxy
        .commit_set_admins(&setup.ownership_admin, &ownership_admin, &emergency_admin);
    assert_eq!(setup.proxy.ownership_admin(), setup.ownership_admin);
    assert_eq!(setup.proxy.emergency_admin(), setup.emergency_admin);
    assert_eq!(
        setup.proxy.future_ownership_admin(),
        Some(ownership_admin.clone())
    );
    assert_eq!(
        setup.proxy.future_emergency_admin(),
        Some(emergency_admin.clone())
    );

    setup.proxy.accept_set_admins(&ownership_admin);
    assert_eq!(setup.proxy.ownership_admin(), ownership_admin);
    assert_eq!(setup.proxy.emergency_admin(), emergency_admin);
    assert_eq!(setup.proxy.future_ownership_admin(), None);
    assert_eq!(setup.proxy.future_emergency_admin(), None);
}

#[test]
#[should_panic(expected = "Error(Contract, #104)")]
fn test_accept_set_admins_without_commit() {
    let setup = Setup::default();
    setup.proxy.accept_set_admins(&setup.ownership_admin);
}

#[test]
fn test_set_manager() {
    let setup = Setup::default();
    let manager = Address::generate(&setup.env);

    for caller in [
        setup.ownership_admin.clone(),
        setup.emergency_admin.clone(),
        setup.manager.clone(),
    ] {
        setup
            .proxy
            .set_manager(&setup.ownership_admin, &setup.manager);
        setup.proxy.set_manager(&caller, &manager);
        assert_eq!(setup.proxy.manager(), manager);
    }

    // admins may appoint themselves
    setup
        .proxy
        .set_manager(&setup.emergency_admin, &setup.emergency_admin);
    assert_eq!(setup.proxy.manager(), setup.emergency_admin);
}
