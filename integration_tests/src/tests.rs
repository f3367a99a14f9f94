#![cfg(test)]
extern crate std;

use crate::contracts;
use crate::testutils::{
    create_token_contract, deploy_proxy, get_token_admin_client, Setup, CHILD_CHAIN, RATE,
    ROOT_CHAIN,
};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, BytesN, IntoVal};
use utils::constant::WEEK;
use utils::test_utils::jump;

#[test]
fn test_deploy_child_gauge_through_messenger() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[1; 32]);

    let predicted = setup.root_factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &setup.lp_token.address,
        &salt,
        &None,
    );
    assert_eq!(
        predicted,
        setup
            .child_factory
            .predict_gauge_address(&setup.deployer, &salt)
    );
    assert!(!setup.root_factory.is_mirrored(&predicted));

    let results = setup.relay_to_child(setup.last_root_message());
    let deployed: Address = results.get_unchecked(0).into_val(&setup.env);
    assert_eq!(deployed, predicted);
    assert_eq!(
        setup
            .child_factory
            .get_gauge_from_lp_token(&setup.lp_token.address),
        Some(predicted.clone())
    );
    assert!(setup.child_factory.is_mirrored(&predicted));

    // delivery confirmation travels back through the child outbox
    setup.relay_to_root(setup.last_child_message());
    assert!(setup.root_factory.is_mirrored(&predicted));

    // a duplicated confirmation changes nothing
    setup.relay_to_root(setup.last_child_message());
    assert!(setup.root_factory.is_mirrored(&predicted));
    assert_eq!(
        setup
            .root_messenger
            .delivery_receipts(&CHILD_CHAIN, &setup.last_child_message()),
        2
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #701)")]
fn test_deploy_message_replay() {
    let setup = Setup::default();
    setup.root_factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &setup.lp_token.address,
        &BytesN::from_array(&setup.env, &[1; 32]),
        &None,
    );
    let id = setup.last_root_message();
    setup.relay_to_child(id);
    setup.relay_to_child(id);
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_unknown_relayer() {
    let setup = Setup::default();
    setup.root_factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &setup.lp_token.address,
        &BytesN::from_array(&setup.env, &[1; 32]),
        &None,
    );
    let message = setup
        .root_messenger
        .get_message(&setup.last_root_message());
    setup
        .child_messenger
        .deliver(&Address::generate(&setup.env), &message);
}

#[test]
fn test_root_child_pairing() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[2; 32]);
    let (root_gauge, child_gauge) = setup.deploy_pair(&salt);

    assert_eq!(root_gauge.child_gauge(), Some(child_gauge.address.clone()));
    assert_eq!(child_gauge.root_gauge(), Some(root_gauge.address.clone()));
    assert_eq!(root_gauge.chain_id(), CHILD_CHAIN);
    assert_eq!(child_gauge.factory(), setup.child_factory.address);
    assert_eq!(setup.root_factory.get_gauge_count(&CHILD_CHAIN), 1);
    assert_eq!(setup.root_factory.get_child_gauge_count(&CHILD_CHAIN), 1);
    assert!(setup.root_factory.is_mirrored(&child_gauge.address));
}

#[test]
fn test_pairs_deployed_out_of_order() {
    let setup = Setup::default();
    let first_salt = BytesN::from_array(&setup.env, &[4; 32]);
    let second_salt = BytesN::from_array(&setup.env, &[5; 32]);
    let second_lp = create_token_contract(&setup.env, &setup.owner);

    let first_root = setup
        .root_factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &first_salt);
    let second_root = setup
        .root_factory
        .deploy_gauge(&setup.deployer, &CHILD_CHAIN, &second_salt);

    let second_child = setup.root_factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &second_lp.address,
        &second_salt,
        &None,
    );
    setup.relay_to_child(setup.last_root_message());
    setup.relay_to_root(setup.last_child_message());

    let first_child = setup.root_factory.deploy_child_gauge(
        &setup.deployer,
        &CHILD_CHAIN,
        &setup.lp_token.address,
        &first_salt,
        &None,
    );
    setup.relay_to_child(setup.last_root_message());
    setup.relay_to_root(setup.last_child_message());

    let first_child = contracts::child_gauge::Client::new(&setup.env, &first_child);
    let second_child = contracts::child_gauge::Client::new(&setup.env, &second_child);
    assert_eq!(first_child.root_gauge(), Some(first_root.clone()));
    assert_eq!(second_child.root_gauge(), Some(second_root.clone()));
    assert_eq!(
        contracts::root_gauge::Client::new(&setup.env, &first_root).child_gauge(),
        Some(first_child.address.clone())
    );

    // the emission request resolves to a registered root gauge
    let user = setup.generate_user(1000);
    first_child.deposit(&user, &1000, &false);
    let results = setup.relay_to_root(setup.last_child_message());
    let transmitted: u128 = results.get_unchecked(0).into_val(&setup.env);
    assert_eq!(transmitted, 0);
}

#[test]
fn test_emissions_end_to_end() {
    let setup = Setup::default();
    let salt = BytesN::from_array(&setup.env, &[3; 32]);
    let (root_gauge, child_gauge) = setup.deploy_pair(&salt);
    let user = setup.generate_user(1000);

    // first request of the week, nothing booked on the root side yet
    child_gauge.deposit(&user, &1000, &false);
    let results = setup.relay_to_root(setup.last_child_message());
    let transmitted: u128 = results.get_unchecked(0).into_val(&setup.env);
    assert_eq!(transmitted, 0);

    // same week: throttled
    let messages = setup.child_messenger.message_count();
    child_gauge.user_checkpoint(&user);
    assert_eq!(setup.child_messenger.message_count(), messages);

    jump(&setup.env, WEEK);
    child_gauge.user_checkpoint(&user);
    assert_eq!(setup.child_messenger.message_count(), messages + 1);
    let results = setup.relay_to_root(setup.last_child_message());
    let transmitted: u128 = results.get_unchecked(0).into_val(&setup.env);
    assert_eq!(transmitted, RATE * WEEK as u128);
    assert_eq!(root_gauge.transmitted(), RATE * WEEK as u128);
    assert_eq!(
        setup.token.balance(&child_gauge.address),
        (RATE * WEEK as u128) as i128
    );

    // bridged tokens become next week's inflation rate
    child_gauge.user_checkpoint(&user);
    assert_eq!(child_gauge.inflation_rate(&101), RATE);
    assert_eq!(child_gauge.total_emissions(), RATE * WEEK as u128);
    assert_eq!(setup.token.balance(&child_gauge.address), 0);

    jump(&setup.env, WEEK);
    let minted = setup.child_factory.mint(&user, &child_gauge.address);
    assert_eq!(minted, RATE * WEEK as u128);
    assert_eq!(setup.token.balance(&user), (RATE * WEEK as u128) as i128);
    assert_eq!(
        setup.child_factory.minted(&user, &child_gauge.address),
        RATE * WEEK as u128
    );

    // the root side refuses to pay twice
    assert_eq!(
        setup.root_factory.transmit_emissions(&root_gauge.address),
        RATE * WEEK as u128
    );
    assert_eq!(setup.root_factory.transmit_emissions(&root_gauge.address), 0);
}

#[test]
fn test_voting_escrow_boost() {
    let setup = Setup::default();
    let now = setup.env.ledger().timestamp();
    let boosted = setup.generate_user(1000);
    let plain = setup.generate_user(1000);

    setup.voting_escrow.set_user_point(
        &boosted,
        &contracts::child_ve_oracle::UserPoint {
            bias: 1_000_000,
            slope: 0,
            ts: now,
            end: now + 100 * WEEK,
        },
    );
    setup
        .voting_escrow
        .set_global_point(&contracts::child_ve_oracle::GlobalPoint {
            bias: 1_000_000,
            slope: 0,
            ts: now,
        });

    let id = setup.root_oracle.push(&CHILD_CHAIN, &boosted);
    setup.relay_to_child(id);
    assert_eq!(setup.child_oracle.balance_of(&boosted), 1_000_000);
    assert_eq!(setup.child_oracle.total_supply(), 1_000_000);

    // late replay of the same snapshot is ignored
    setup.relay_to_child(id);
    assert_eq!(setup.child_oracle.balance_of(&boosted), 1_000_000);

    setup
        .child_factory
        .set_voting_escrow(&setup.owner, &Some(setup.child_oracle.address.clone()));
    let gauge = setup.deploy_local_gauge();
    gauge.deposit(&boosted, &1000, &false);
    gauge.deposit(&plain, &1000, &false);

    assert_eq!(gauge.working_balance(&boosted), 1000);
    assert_eq!(gauge.working_balance(&plain), 400);
    assert_eq!(gauge.working_supply(), 1400);
}

#[test]
fn test_reward_streaming() {
    let setup = Setup::default();
    let gauge = setup.deploy_local_gauge();
    let user = setup.generate_user(1000);
    let distributor = Address::generate(&setup.env);
    let reward_token = create_token_contract(&setup.env, &setup.owner);
    let amount: u128 = 6048_0000000;
    get_token_admin_client(&setup.env, &reward_token.address)
        .mint(&distributor, &(amount as i128));

    gauge.add_reward(&setup.deployer, &reward_token.address, &distributor);
    gauge.deposit(&user, &1000, &false);
    gauge.deposit_reward_token(&distributor, &reward_token.address, &amount, &None);

    jump(&setup.env, WEEK);
    let claimed = gauge.claim_rewards(&user, &None);
    assert_eq!(claimed.get_unchecked(0), amount);
    assert_eq!(reward_token.balance(&user), amount as i128);
    assert_eq!(gauge.reward_remaining(&reward_token.address), 0);
}

#[test]
fn test_proxy_owns_root_factory() {
    let setup = Setup::default();
    let ownership_admin = Address::generate(&setup.env);
    let emergency_admin = Address::generate(&setup.env);
    let manager = Address::generate(&setup.env);
    let proxy = deploy_proxy(&setup.env, &ownership_admin, &emergency_admin, &manager);

    let root_gauge = contracts::root_gauge::Client::new(
        &setup.env,
        &setup.root_factory.deploy_gauge(
            &setup.deployer,
            &CHILD_CHAIN,
            &BytesN::from_array(&setup.env, &[1; 32]),
        ),
    );

    setup
        .root_factory
        .commit_transfer_ownership(&setup.owner, &proxy.address);
    proxy.accept_transfer_ownership(&setup.root_factory.address);
    assert_eq!(setup.root_factory.owner(), proxy.address);

    proxy.set_killed(
        &emergency_admin,
        &setup.root_factory.address,
        &root_gauge.address,
        &true,
    );
    assert!(root_gauge.is_killed());
    assert_eq!(root_gauge.inflation_params().rate, 0);

    let bridger = Address::generate(&setup.env);
    proxy.set_bridger(&manager, &setup.root_factory.address, &CHILD_CHAIN, &bridger);
    assert_eq!(setup.root_factory.get_bridger(&CHILD_CHAIN), Some(bridger));

    // the previous owner is locked out
    assert!(setup
        .root_factory
        .try_set_killed(&setup.owner, &root_gauge.address, &false)
        .is_err());
}

#[test]
fn test_child_oracle_rejects_other_chains() {
    let setup = Setup::default();
    // a root oracle pushing from an unexpected chain
    setup
        .child_oracle
        .set_root_oracle(&setup.owner, &(ROOT_CHAIN + 1), &setup.root_oracle.address);
    let user = Address::generate(&setup.env);
    let id = setup.root_oracle.push(&CHILD_CHAIN, &user);
    let message = setup.root_messenger.get_message(&id);
    assert!(setup
        .child_messenger
        .try_deliver(&setup.relayer, &message)
        .is_err());
}
