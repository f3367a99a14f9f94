#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, CHAIN_ID, ROOT_CHAIN};
use gauge_deployer::{default_salt, predict_address};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, IntoVal, Symbol, Vec};
use utils::constant::WEEK;
use utils::test_utils::{jump, jump_to_next_week};

#[test]
fn test_deploy_gauge() {
    let setup = Setup::default();
    let factory = &setup.factory;

    let predicted = factory.predict_gauge_address(
        &setup.deployer,
        &default_salt(&setup.env, &setup.deployer, 0),
    );
    let gauge = factory.deploy_gauge(&setup.deployer, &setup.lp_token.address, &None, &None);
    assert_eq!(gauge, predicted);

    assert_eq!(factory.get_gauge_count(), 1);
    assert_eq!(factory.get_gauge(&0), gauge);
    assert_eq!(
        factory.get_gauge_from_lp_token(&setup.lp_token.address),
        Some(gauge.clone())
    );
    assert!(factory.is_valid_gauge(&gauge));
    assert!(!factory.is_mirrored(&gauge));
    assert_eq!(factory.nonces(&setup.deployer), 1);

    let record = factory.gauge_record(&gauge).unwrap();
    assert_eq!(record.chain_id, CHAIN_ID);
    assert_eq!(record.creation_nonce, 0);
    assert_eq!(record.underlying_asset, Some(setup.lp_token.address.clone()));

    let gauge = setup.gauge_client(&gauge);
    assert_eq!(gauge.factory(), factory.address);
    assert_eq!(gauge.token(), setup.token.address);
    assert_eq!(gauge.lp_token(), setup.lp_token.address);
    assert_eq!(gauge.manager(), setup.deployer);
}

#[test]
fn test_deploy_gauge_with_salt_and_manager() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[5; 32]);
    let manager = Address::generate(&setup.env);

    let gauge = setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &Some(salt.clone()),
        &Some(manager.clone()),
    );
    assert_eq!(
        gauge,
        setup.factory.predict_gauge_address(&setup.deployer, &salt)
    );
    assert_eq!(setup.gauge_client(&gauge).manager(), manager);
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_deploy_gauge_same_lp_token() {
    let setup = Setup::default();
    setup
        .factory
        .deploy_gauge(&setup.deployer, &setup.lp_token.address, &None, &None);
    setup
        .factory
        .deploy_gauge(&setup.deployer, &setup.lp_token.address, &None, &None);
}

#[test]
fn test_deploy_from_root() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[7; 32]);

    let gauge = setup.deploy_from_root(&salt);
    assert_eq!(
        gauge,
        setup.factory.predict_gauge_address(&setup.deployer, &salt)
    );
    assert!(setup.factory.is_mirrored(&gauge));
    assert_eq!(setup.factory.nonces(&setup.deployer), 1);

    // the gauge resolves its root counterpart through the factory
    assert_eq!(
        setup.gauge_client(&gauge).root_gauge(),
        Some(predict_address(
            &setup.env,
            &setup.root_factory,
            CHAIN_ID,
            &setup.deployer,
            &salt
        ))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_deploy_from_root_replayed() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[7; 32]);
    setup.deploy_from_root(&salt);
    setup.deploy_from_root(&salt);
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_deploy_from_root_unknown_sender() {
    let setup = Setup::default();
    setup.factory.deploy_gauge_from_root(
        &setup.messenger.address,
        &ROOT_CHAIN,
        &Address::generate(&setup.env),
        &setup.lp_token.address,
        &BytesN::from_array(&setup.env, &[7; 32]),
        &setup.deployer,
        &setup.deployer,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_deploy_from_root_wrong_origin_chain() {
    let setup = Setup::default();
    setup.factory.deploy_gauge_from_root(
        &setup.messenger.address,
        &(ROOT_CHAIN + 1),
        &setup.root_factory,
        &setup.lp_token.address,
        &BytesN::from_array(&setup.env, &[7; 32]),
        &setup.deployer,
        &setup.deployer,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_deploy_from_root_unknown_messenger() {
    let setup = Setup::default();
    setup.factory.deploy_gauge_from_root(
        &Address::generate(&setup.env),
        &ROOT_CHAIN,
        &setup.root_factory,
        &setup.lp_token.address,
        &BytesN::from_array(&setup.env, &[7; 32]),
        &setup.deployer,
        &setup.deployer,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #805)")]
fn test_deploy_from_root_without_messenger() {
    let setup = Setup::default();
    setup.factory.set_messenger(&setup.owner, &None);
    setup.deploy_from_root(&BytesN::from_array(&setup.env, &[7; 32]));
}

#[test]
fn test_request_emissions_weekly() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[7; 32]);
    let gauge = setup.gauge_client(&setup.deploy_from_root(&salt));
    let user = setup.generate_user(1000);

    gauge.deposit(&user, &100, &false);
    let sent = setup.messenger.sent();
    assert_eq!(sent.len(), 1);

    let message = sent.get_unchecked(0);
    let root_gauge = predict_address(
        &setup.env,
        &setup.root_factory,
        CHAIN_ID,
        &setup.deployer,
        &salt,
    );
    assert_eq!(message.to_chain_id, ROOT_CHAIN);
    assert_eq!(message.sender, setup.factory.address);
    assert_eq!(message.targets, Vec::from_array(&setup.env, [setup.root_factory.clone()]));
    let payload = message.payloads.get_unchecked(0);
    assert_eq!(
        payload.function,
        Symbol::new(&setup.env, "transmit_emissions_from_child")
    );
    assert_eq!(payload.args.len(), 1);
    let requested: Address = payload.args.get_unchecked(0).into_val(&setup.env);
    assert_eq!(requested, root_gauge);
    assert_eq!(setup.factory.last_request(&gauge.address), setup.env.ledger().timestamp());

    // throttled for the rest of the week
    jump(&setup.env, 3600);
    gauge.deposit(&user, &100, &false);
    gauge.withdraw(&user, &50, &false);
    assert_eq!(setup.messenger.sent().len(), 1);

    jump_to_next_week(&setup.env, 10);
    gauge.deposit(&user, &100, &false);
    assert_eq!(setup.messenger.sent().len(), 2);
}

#[test]
fn test_request_emissions_unmirrored_gauge() {
    let setup = Setup::default();
    let gauge = setup.gauge_client(&setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &None,
        &None,
    ));
    let user = setup.generate_user(1000);

    gauge.deposit(&user, &100, &false);
    assert_eq!(setup.messenger.sent().len(), 0);
    assert_eq!(setup.factory.last_request(&gauge.address), 0);

    setup
        .factory
        .set_mirrored(&setup.owner, &gauge.address, &true);
    gauge.deposit(&user, &100, &false);
    assert_eq!(setup.messenger.sent().len(), 1);
}

#[test]
fn test_request_emissions_root_not_configured() {
    let setup = Setup::default();
    let gauge = setup.gauge_client(&setup.deploy_from_root(&BytesN::from_array(&setup.env, &[7; 32])));
    setup.factory.set_messenger(&setup.owner, &None);

    let user = setup.generate_user(1000);
    gauge.deposit(&user, &100, &false);
    assert!(!setup.factory.request_emissions(&gauge.address));
    assert_eq!(setup.messenger.sent().len(), 0);
}

#[test]
fn test_request_emissions_unknown_gauge() {
    let setup = Setup::default();
    assert!(!setup
        .factory
        .request_emissions(&Address::generate(&setup.env)));
}

#[test]
fn test_mint() {
    let setup = Setup::default();
    let gauge = setup.gauge_client(&setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &None,
        &None,
    ));
    let user = setup.generate_user(1000);
    gauge.deposit(&user, &1000, &false);

    // bridged emissions land on the gauge and are booked for the rest of the week
    let emissions = (WEEK * 1000) as i128;
    setup.token_admin.mint(&gauge.address, &emissions);
    gauge.user_checkpoint(&user);
    assert_eq!(gauge.inflation_rate(&(setup.env.ledger().timestamp() / WEEK)), 1000);
    assert_eq!(setup.token.balance(&setup.factory.address), emissions);

    jump(&setup.env, WEEK);
    assert_eq!(setup.factory.mint(&setup.deployer, &gauge.address), 0);
    assert_eq!(setup.factory.mint(&user, &gauge.address), emissions as u128);
    assert_eq!(setup.token.balance(&user), emissions);
    assert_eq!(setup.token.balance(&setup.factory.address), 0);
    assert_eq!(
        setup.factory.minted(&user, &gauge.address),
        emissions as u128
    );

    // nothing new accrued
    assert_eq!(setup.factory.mint(&user, &gauge.address), 0);
}

#[test]
fn test_mint_many() {
    let setup = Setup::default();
    let gauge = setup.gauge_client(&setup.factory.deploy_gauge(
        &setup.deployer,
        &setup.lp_token.address,
        &None,
        &None,
    ));
    let user = setup.generate_user(1000);
    gauge.deposit(&user, &1000, &false);

    let emissions = (WEEK * 10) as i128;
    setup.token_admin.mint(&gauge.address, &emissions);
    gauge.user_checkpoint(&user);

    jump(&setup.env, WEEK);
    let minted = setup
        .factory
        .mint_many(&user, &Vec::from_array(&setup.env, [gauge.address.clone()]));
    assert_eq!(minted, emissions as u128);
    assert_eq!(setup.token.balance(&user), emissions);
}

#[test]
#[should_panic(expected = "Error(Contract, #702)")]
fn test_mint_unknown_gauge() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.factory.mint(&user, &Address::generate(&setup.env));
}

#[test]
fn test_set_killed() {
    let setup = Setup::default();
    let gauge = setup.gauge_client(&setup.deploy_from_root(&BytesN::from_array(&setup.env, &[7; 32])));

    setup
        .factory
        .set_killed(&setup.owner, &gauge.address, &true);
    assert!(gauge.is_killed());
    assert!(setup.factory.gauge_record(&gauge.address).unwrap().killed);

    // killed gauges never reach the messenger
    let user = setup.generate_user(1000);
    gauge.deposit(&user, &100, &false);
    assert_eq!(setup.messenger.sent().len(), 0);

    setup
        .factory
        .set_killed(&setup.owner, &gauge.address, &false);
    assert!(!gauge.is_killed());
    gauge.deposit(&user, &100, &false);
    assert_eq!(setup.messenger.sent().len(), 1);
}

#[test]
fn test_views() {
    let setup = Setup::default();
    assert_eq!(setup.factory.token(), setup.token.address);
    assert_eq!(setup.factory.chain_id(), CHAIN_ID);
    assert_eq!(setup.factory.root_factory(), Some(setup.root_factory.clone()));
    assert_eq!(setup.factory.root_chain_id(), Some(ROOT_CHAIN));
    assert_eq!(
        setup.factory.messenger(),
        Some(setup.messenger.address.clone())
    );
    assert_eq!(setup.factory.voting_escrow(), None);
    assert_eq!(setup.factory.owner(), setup.owner);
    assert_eq!(setup.factory.manager(), setup.owner);
}
