#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, CHAIN_ID};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_killed_by_manager() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.set_killed(
        &setup.manager,
        &setup.factory.address,
        &Address::generate(&setup.env),
        &true,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_killed_by_stranger() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.set_killed(
        &setup.stranger,
        &setup.factory.address,
        &Address::generate(&setup.env),
        &true,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_factory_owner_bypass() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.factory.set_killed(
        &setup.factory_owner,
        &Address::generate(&setup.env),
        &true,
    );
}

#[test]
fn test_set_bridger_by_manager_and_ownership_admin() {
    let setup = Setup::default();
    setup.install_proxy();

    for caller in [setup.manager.clone(), setup.ownership_admin.clone()] {
        let bridger = Address::generate(&setup.env);
        setup
            .proxy
            .set_bridger(&caller, &setup.factory.address, &CHAIN_ID, &bridger);
        assert_eq!(setup.factory.get_bridger(&CHAIN_ID), Some(bridger));
    }
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_bridger_by_emergency_admin() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.set_bridger(
        &setup.emergency_admin,
        &setup.factory.address,
        &CHAIN_ID,
        &Address::generate(&setup.env),
    );
}

#[test]
fn test_emergency_admin_acts_as_manager() {
    let setup = Setup::default();
    setup.install_proxy();
    let bridger = Address::generate(&setup.env);

    setup
        .proxy
        .set_manager(&setup.emergency_admin, &setup.emergency_admin);
    setup.proxy.set_bridger(
        &setup.emergency_admin,
        &setup.factory.address,
        &CHAIN_ID,
        &bridger,
    );
    assert_eq!(setup.factory.get_bridger(&CHAIN_ID), Some(bridger));
    setup.proxy.set_implementation(
        &setup.emergency_admin,
        &setup.factory.address,
        &setup.hash(3),
    );
    assert_eq!(setup.factory.implementation(), Some(setup.hash(3)));
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_implementation_by_emergency_admin() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.set_implementation(
        &setup.emergency_admin,
        &setup.factory.address,
        &setup.hash(1),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_messenger_by_stranger() {
    let setup = Setup::default();
    setup.install_proxy();
    setup
        .proxy
        .set_messenger(&setup.stranger, &setup.factory.address, &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_child_by_emergency_admin() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.set_child(
        &setup.emergency_admin,
        &setup.factory.address,
        &CHAIN_ID,
        &setup.stranger,
        &setup.stranger,
        &setup.hash(1),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_manager_by_stranger() {
    let setup = Setup::default();
    setup.proxy.set_manager(&setup.stranger, &setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_commit_transfer_ownership_by_emergency_admin() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.commit_transfer_ownership(
        &setup.emergency_admin,
        &setup.factory.address,
        &setup.emergency_admin,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_commit_transfer_ownership_by_manager() {
    let setup = Setup::default();
    setup.install_proxy();
    setup.proxy.commit_transfer_ownership(
        &setup.manager,
        &setup.factory.address,
        &setup.manager,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_commit_set_admins_by_manager() {
    let setup = Setup::default();
    setup
        .proxy
        .commit_set_admins(&setup.manager, &setup.stranger, &setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_commit_set_admins_by_emergency_admin() {
    let setup = Setup::default();
    setup.proxy.commit_set_admins(
        &setup.emergency_admin,
        &setup.stranger,
        &setup.stranger,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_accept_set_admins_by_future_emergency_admin() {
    let setup = Setup::default();
    let ownership_admin = Address::generate(&setup.env);
    setup
        .proxy
        .commit_set_admins(&setup.ownership_admin, &ownership_admin, &setup.stranger);
    setup.proxy.accept_set_admins(&setup.stranger);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_accept_set_admins_by_current_admin() {
    let setup = Setup::default();
    let ownership_admin = Address::generate(&setup.env);
    setup
        .proxy
        .commit_set_admins(&setup.ownership_admin, &ownership_admin, &setup.stranger);
    setup.proxy.accept_set_admins(&setup.ownership_admin);
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_old_admin_loses_rights() {
    let setup = Setup::default();
    let ownership_admin = Address::generate(&setup.env);
    let emergency_admin = Address::generate(&setup.env);
    setup
        .proxy
        .commit_set_admins(&setup.ownership_admin, &ownership_admin, &emergency_admin);
    setup.proxy.accept_set_admins(&ownership_admin);

    setup.install_proxy();
    setup.proxy.set_killed(
        &setup.emergency_admin,
        &setup.factory.address,
        &setup.stranger,
        &true,
    );
}
