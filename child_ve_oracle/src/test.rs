#![cfg(test)]
extern crate std;

use crate::testutils::{global_point, user_point, Setup, ROOT_CHAIN, START};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use utils::test_utils::jump;

#[test]
fn test_receive_and_decay() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);

    setup.receive(
        &user,
        &user_point(1_000_000, 10, START, START + 100_000),
        &global_point(4_000_000, 30, START),
    );
    assert_eq!(setup.oracle.balance_of(&user), 1_000_000);
    assert_eq!(setup.oracle.total_supply(), 4_000_000);

    jump(&setup.env, 1000);
    assert_eq!(setup.oracle.balance_of(&user), 990_000);
    assert_eq!(setup.oracle.total_supply(), 3_970_000);

    // lock expired
    jump(&setup.env, 99_000);
    assert_eq!(setup.oracle.balance_of(&user), 0);
    assert_eq!(setup.oracle.total_supply(), 1_000_000);

    // global supply never goes negative
    jump(&setup.env, 1_000_000);
    assert_eq!(setup.oracle.total_supply(), 0);
}

#[test]
fn test_unknown_user() {
    let setup = Setup::default();
    assert_eq!(setup.oracle.balance_of(&Address::generate(&setup.env)), 0);
    assert_eq!(setup.oracle.total_supply(), 0);
    assert_eq!(setup.oracle.global_point(), None);
}

#[test]
fn test_stale_snapshot_ignored() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    let fresh_user = user_point(2_000_000, 10, START, START + 200_000);
    let fresh_global = global_point(5_000_000, 20, START);

    setup.receive(&user, &fresh_user, &fresh_global);
    setup.receive(
        &user,
        &user_point(1_000_000, 10, START - 100, START + 100_000),
        &global_point(1_000_000, 10, START - 100),
    );
    assert_eq!(setup.oracle.user_point(&user), Some(fresh_user.clone()));
    assert_eq!(setup.oracle.global_point(), Some(fresh_global.clone()));

    // replays change nothing
    setup.receive(&user, &fresh_user, &fresh_global);
    assert_eq!(setup.oracle.balance_of(&user), 2_000_000);
}

#[test]
fn test_points_updated_independently() {
    let setup = Setup::default();
    let alice = Address::generate(&setup.env);
    let bob = Address::generate(&setup.env);

    setup.receive(
        &alice,
        &user_point(1_000_000, 0, START, START + 10),
        &global_point(1_000_000, 0, START),
    );
    jump(&setup.env, 5);
    // bob's snapshot carries a newer global point
    setup.receive(
        &bob,
        &user_point(3_000_000, 0, START + 5, START + 10),
        &global_point(4_000_000, 0, START + 5),
    );
    assert_eq!(setup.oracle.total_supply(), 4_000_000);
    assert_eq!(setup.oracle.balance_of(&alice), 1_000_000);
    assert_eq!(setup.oracle.balance_of(&bob), 3_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_receive_unknown_sender() {
    let setup = Setup::default();
    setup.oracle.receive(
        &setup.messenger,
        &ROOT_CHAIN,
        &Address::generate(&setup.env),
        &user_point(1, 0, START, START + 1),
        &global_point(1, 0, START),
        &Address::generate(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_receive_wrong_origin_chain() {
    let setup = Setup::default();
    setup.oracle.receive(
        &setup.messenger,
        &(ROOT_CHAIN + 1),
        &setup.root_oracle,
        &user_point(1, 0, START, START + 1),
        &global_point(1, 0, START),
        &Address::generate(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_receive_unknown_messenger() {
    let setup = Setup::default();
    setup.oracle.receive(
        &Address::generate(&setup.env),
        &ROOT_CHAIN,
        &setup.root_oracle,
        &user_point(1, 0, START, START + 1),
        &global_point(1, 0, START),
        &Address::generate(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #805)")]
fn test_receive_without_messenger() {
    let setup = Setup::default();
    setup.oracle.set_messenger(&setup.owner, &None);
    setup.receive(
        &Address::generate(&setup.env),
        &user_point(1, 0, START, START + 1),
        &global_point(1, 0, START),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #102)")]
fn test_set_root_oracle_by_stranger() {
    let setup = Setup::default();
    let stranger = Address::generate(&setup.env);
    setup
        .oracle
        .set_root_oracle(&stranger, &ROOT_CHAIN, &stranger);
}
