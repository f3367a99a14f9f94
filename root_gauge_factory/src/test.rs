#![cfg(test)]
extern crate std;

use crate::storage::ChildConfig;
use crate::testutils::{Setup, CHILD_CHAIN, RATE};
use gauge_deployer::predict_address;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, IntoVal, Symbol, Vec};
use utils::constant::WEEK;
use utils::test_utils::jump;

#[test]
fn test_deploy_gauge() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[1; 32]);

    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &salt);
    assert_eq!(
        gauge,
        setup
            .factory
            .predict_gauge_address(&CHILD_CHAIN, &setup.deployer, &salt)
    );
    assert_eq!(setup.factory.get_gauge_count(&CHILD_CHAIN), 1);
    assert_eq!(setup.factory.get_gauge(&CHILD_CHAIN, &0), gauge);
    assert!(setup.factory.is_valid_gauge(&gauge));
    assert_eq!(setup.factory.nonces(&setup.deployer), 1);

    let record = setup.factory.gauge_record(&gauge).unwrap();
    assert_eq!(record.chain_id, CHILD_CHAIN);
    assert_eq!(record.underlying_asset, None);

    let gauge = setup.gauge_client(&gauge);
    assert_eq!(gauge.factory(), setup.factory.address);
    assert_eq!(gauge.chain_id(), CHILD_CHAIN);
    assert_eq!(gauge.inflation_params().rate, RATE);
}

#[test]
fn test_pairs_follow_salt_not_deployment_order() {
    let setup = Setup::default();
    let first = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));
    let second = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(2));

    // children requested in reverse order consume different nonces
    let second_child = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(2),
        &None,
    );
    let first_child = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(1),
        &None,
    );
    assert_eq!(setup.factory.nonces(&setup.deployer), 4);
    assert_eq!(setup.gauge_client(&first).child_gauge(), Some(first_child.clone()));
    assert_eq!(setup.gauge_client(&second).child_gauge(), Some(second_child));

    jump(&setup.env, WEEK);
    setup.factory.transmit_emissions(&first);
    assert_eq!(
        setup.bridger.last_bridged(),
        Some((first_child, RATE * WEEK as u128))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1101)")]
fn test_deploy_gauge_unknown_chain() {
    let setup = Setup::default();
    setup
        .factory
        .deploy_gauge(&setup.deployer, &(CHILD_CHAIN + 1), &setup.salt(1));
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_deploy_gauge_same_salt() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[1; 32]);
    setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &salt);
    setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &salt);
}

#[test]
fn test_deploy_child_gauge() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[2; 32]);
    let lp_token = Address::generate(&setup.env);

    let gauge = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &lp_token,
        &salt,
        &None,
    );
    assert_eq!(
        gauge,
        predict_address(
            &setup.env,
            &setup.child_factory,
            CHILD_CHAIN,
            &setup.deployer,
            &salt
        )
    );
    assert_eq!(
        gauge,
        setup
            .factory
            .predict_child_gauge_address(&CHILD_CHAIN, &setup.deployer, &salt)
    );
    assert_eq!(setup.factory.get_child_gauge_count(&CHILD_CHAIN), 1);
    assert_eq!(setup.factory.get_child_gauge(&CHILD_CHAIN, &0), gauge);
    assert!(!setup.factory.is_mirrored(&gauge));
    assert_eq!(setup.factory.get_gauge_count(&CHILD_CHAIN), 0);

    let sent = setup.messenger.sent();
    assert_eq!(sent.len(), 1);
    let message = sent.get_unchecked(0);
    assert_eq!(message.to_chain_id, CHILD_CHAIN);
    assert_eq!(message.sender, setup.factory.address);
    assert_eq!(
        message.targets,
        Vec::from_array(&setup.env, [setup.child_factory.clone()])
    );
    assert_eq!(
        message.callbacks,
        Vec::from_array(&setup.env, [setup.factory.address.clone()])
    );
    assert_eq!(message.nonces, Vec::from_array(&setup.env, [0u64]));

    let payload = message.payloads.get_unchecked(0);
    assert_eq!(
        payload.function,
        Symbol::new(&setup.env, "deploy_gauge_from_root")
    );
    assert_eq!(payload.args.len(), 4);
    let requested_lp: Address = payload.args.get_unchecked(0).into_val(&setup.env);
    let requested_salt: BytesN<32> = payload.args.get_unchecked(1).into_val(&setup.env);
    let requested_manager: Address = payload.args.get_unchecked(3).into_val(&setup.env);
    assert_eq!(requested_lp, lp_token);
    assert_eq!(requested_salt, salt);
    assert_eq!(requested_manager, setup.deployer);
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_deploy_child_gauge_same_lp_token() {
    let setup = Setup::default();
    let lp_token = Address::generate(&setup.env);
    setup
        .factory
        .deploy_child_gauge(&setup.deployer, &CHILD_CHAIN, &lp_token, &setup.salt(1), &None);
    setup
        .factory
        .deploy_child_gauge(&setup.deployer, &CHILD_CHAIN, &lp_token, &setup.salt(2), &None);
}

#[test]
#[should_panic(expected = "Error(Contract, #805)")]
fn test_deploy_child_gauge_without_messenger() {
    let setup = Setup::default();
    setup.factory.set_messenger(&setup.owner, &None);
    setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(1),
        &None,
    );
}

#[test]
fn test_callback_marks_mirrored() {
    let setup = Setup::default();
    let gauge = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(1),
        &None,
    );

    setup.factory.messenger_callback(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &setup.child_factory,
        &0,
        &gauge,
    );
    assert!(setup.factory.is_mirrored(&gauge));

    // confirmations may arrive more than once
    setup.factory.messenger_callback(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &setup.child_factory,
        &0,
        &gauge,
    );
    assert!(setup.factory.is_mirrored(&gauge));
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_callback_unknown_sender() {
    let setup = Setup::default();
    let gauge = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(1),
        &None,
    );
    setup.factory.messenger_callback(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &0,
        &gauge,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_callback_wrong_nonce() {
    let setup = Setup::default();
    let gauge = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &setup.salt(1),
        &None,
    );
    setup.factory.messenger_callback(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &setup.child_factory,
        &5,
        &gauge,
    );
}

#[test]
fn test_root_and_child_gauges_pair() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[3; 32]);

    let root_gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &salt);
    let child_gauge = setup.factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &salt,
        &None,
    );
    assert_eq!(
        setup.gauge_client(&root_gauge).child_gauge(),
        Some(child_gauge)
    );
    assert_eq!(setup.factory.nonces(&setup.deployer), 2);
}

#[test]
fn test_transmit_emissions() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[3; 32]);
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &salt);

    jump(&setup.env, WEEK);
    let weekly = RATE * WEEK as u128;
    assert_eq!(setup.factory.transmit_emissions(&gauge), weekly);
    assert_eq!(
        setup.token.balance(&setup.bridger.address),
        weekly as i128
    );
    assert_eq!(
        setup.bridger.last_bridged(),
        Some((
            predict_address(
                &setup.env,
                &setup.child_factory,
                CHILD_CHAIN,
                &setup.deployer,
                &salt
            ),
            weekly
        ))
    );

    // repeated kickstart transmits nothing new
    assert_eq!(setup.factory.transmit_emissions(&gauge), 0);
}

#[test]
fn test_transmit_emissions_from_child() {
    let setup = Setup::default();
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));

    jump(&setup.env, WEEK);
    let amount = setup.factory.transmit_emissions_from_child(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &setup.child_factory,
        &gauge,
    );
    assert_eq!(amount, RATE * WEEK as u128);
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_transmit_emissions_from_child_unknown_sender() {
    let setup = Setup::default();
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));
    setup.factory.transmit_emissions_from_child(
        &setup.messenger.address,
        &CHILD_CHAIN,
        &Address::generate(&setup.env),
        &gauge,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_transmit_emissions_from_other_chain() {
    let setup = Setup::default();
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));

    let other_factory = Address::generate(&setup.env);
    setup.factory.set_child(
        &setup.owner,
        &(CHILD_CHAIN + 1),
        &setup.bridger.address,
        &other_factory,
        &setup.child_implementation,
    );
    setup.factory.transmit_emissions_from_child(
        &setup.messenger.address,
        &(CHILD_CHAIN + 1),
        &other_factory,
        &gauge,
    );
}

#[test]
fn test_set_killed() {
    let setup = Setup::default();
    let gauge = setup
        .factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &setup.salt(1));

    setup.factory.set_killed(&setup.owner, &gauge, &true);
    assert!(setup.gauge_client(&gauge).is_killed());
    assert!(setup.factory.gauge_record(&gauge).unwrap().killed);

    jump(&setup.env, WEEK);
    assert_eq!(setup.factory.transmit_emissions(&gauge), 0);
}

#[test]
fn test_child_config() {
    let setup = Setup::default();
    assert_eq!(
        setup.factory.get_child(&CHILD_CHAIN),
        Some(ChildConfig {
            bridger: setup.bridger.address.clone(),
            factory: setup.child_factory.clone(),
            implementation: setup.child_implementation.clone(),
        })
    );
    assert_eq!(
        setup.factory.get_child_factory(&CHILD_CHAIN),
        Some(setup.child_factory.clone())
    );
    assert_eq!(
        setup.factory.get_bridger(&CHILD_CHAIN),
        Some(setup.bridger.address.clone())
    );
    assert_eq!(setup.factory.get_bridge_cost(&CHILD_CHAIN), 150);
    assert_eq!(setup.factory.get_child(&(CHILD_CHAIN + 1)), None);
}
