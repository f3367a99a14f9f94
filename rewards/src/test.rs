#![cfg(test)]
extern crate std;

use crate::constants::{MAX_REWARDS, MAX_REWARD_DURATION, MIN_REWARD_DURATION};
use crate::testutils::{create_18_decimals_token, create_token, Setup};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use utils::constant::WEEK;
use utils::test_utils::{assert_approx_eq_abs, jump, time_warp};

// one 7-decimal token per second over a week
const REWARD: u128 = WEEK as u128 * 1_0000000;

#[test]
fn test_add_reward() {
    let setup = Setup::default();
    assert_eq!(setup.host.reward_count(), 1);
    assert_eq!(
        setup.host.reward_tokens().get_unchecked(0),
        setup.reward_token.address
    );

    let data = setup.host.reward_data(&setup.reward_token.address);
    assert_eq!(data.distributor, setup.distributor);
    assert_eq!(data.rate, 0);
    assert_eq!(data.period_finish, 0);
    // stellar assets carry 7 decimals
    assert_eq!(data.precision, 100_000_000_000);
}

#[test]
#[should_panic(expected = "Error(Contract, #902)")]
fn test_add_reward_twice() {
    let setup = Setup::default();
    setup
        .host
        .add_reward(&setup.reward_token.address, &setup.distributor);
}

#[test]
#[should_panic(expected = "Error(Contract, #904)")]
fn test_max_rewards() {
    let setup = Setup::default();
    let admin = Address::generate(&setup.env);
    for _ in 1..MAX_REWARDS {
        let (token, _) = create_token(&setup.env, &admin);
        setup.host.add_reward(&token.address, &setup.distributor);
    }
    assert_eq!(setup.host.reward_count(), MAX_REWARDS);

    let (token, _) = create_token(&setup.env, &admin);
    setup.host.add_reward(&token.address, &setup.distributor);
}

#[test]
#[should_panic(expected = "Error(Contract, #903)")]
fn test_deposit_unknown_token() {
    let setup = Setup::default();
    let (token, token_admin) = create_token(&setup.env, &Address::generate(&setup.env));
    token_admin.mint(&setup.distributor, &(REWARD as i128));
    setup
        .host
        .deposit_reward_token(&setup.distributor, &token.address, &REWARD, &WEEK);
}

#[test]
#[should_panic(expected = "Error(Contract, #901)")]
fn test_deposit_duration_too_short() {
    let setup = Setup::default();
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &(MIN_REWARD_DURATION - 1),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #901)")]
fn test_deposit_duration_too_long() {
    let setup = Setup::default();
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &(MAX_REWARD_DURATION + 1),
    );
}

#[test]
fn test_deposit_duration_bounds_inclusive() {
    let setup = Setup::default();
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &MIN_REWARD_DURATION,
    );
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &MAX_REWARD_DURATION,
    );
    assert_eq!(
        setup.host.reward_data(&setup.reward_token.address).period_finish,
        MAX_REWARD_DURATION
    );
}

#[test]
fn test_stream_single_staker() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.host.stake(&user, &100_0000000);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    assert_eq!(setup.host.reward_remaining(&setup.reward_token.address), REWARD);

    jump(&setup.env, WEEK / 2);
    assert_approx_eq_abs(
        setup.host.claimable(&user, &setup.reward_token.address),
        REWARD / 2,
        1,
    );

    // nothing accrues after the period ends
    jump(&setup.env, WEEK);
    let paid = setup.host.claim(&user, &None);
    assert_approx_eq_abs(paid.get_unchecked(0), REWARD, 1);

    let received = setup.reward_token.balance(&user) as u128;
    assert_eq!(received, paid.get_unchecked(0));
    assert_eq!(
        setup.host.reward_remaining(&setup.reward_token.address) + received,
        REWARD
    );
    assert_eq!(setup.host.claimed(&user, &setup.reward_token.address), received);
    assert_eq!(setup.host.claimable(&user, &setup.reward_token.address), 0);
}

#[test]
fn test_stream_18_decimals_token_to_large_supply() {
    let setup = Setup::default();
    let token = create_18_decimals_token(&setup.env);
    let amount: u128 = 1_000_000_000_000_000_000_000;
    token.mint(&setup.distributor, &(amount as i128));
    setup.host.add_reward(&token.address, &setup.distributor);
    assert_eq!(setup.host.reward_data(&token.address).precision, 1);

    let whale = Address::generate(&setup.env);
    let other = Address::generate(&setup.env);
    setup
        .host
        .stake(&whale, &1_000_000_000_000_000_000_000_000);
    setup
        .host
        .deposit_reward_token(&setup.distributor, &token.address, &amount, &WEEK);

    // hourly checkpoints must not round the stream away
    for _ in 0..WEEK / 3600 {
        jump(&setup.env, 3600);
        setup.host.stake(&other, &0);
    }
    jump(&setup.env, 1);

    let paid = setup.host.claim(&whale, &None).get_unchecked(1);
    assert_approx_eq_abs(paid, amount, 1_000_000_000);
    assert_eq!(token.balance(&whale) as u128, paid);

    // accrual dust stays counted and is not recoverable
    assert_eq!(setup.host.recover_remaining(&token.address), 0);
    assert_eq!(setup.host.reward_remaining(&token.address), amount - paid);
    assert_eq!(token.balance(&setup.host.address) as u128, amount - paid);
}

#[test]
fn test_stream_split_by_balance() {
    let setup = Setup::default();
    let alice = Address::generate(&setup.env);
    let bob = Address::generate(&setup.env);
    setup.host.stake(&alice, &100);
    setup.host.stake(&bob, &300);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );

    jump(&setup.env, WEEK);
    setup.host.claim(&alice, &None);
    setup.host.claim(&bob, &None);
    assert_approx_eq_abs(setup.reward_token.balance(&alice) as u128, REWARD / 4, 1);
    assert_approx_eq_abs(setup.reward_token.balance(&bob) as u128, REWARD * 3 / 4, 1);
}

#[test]
fn test_zero_supply_is_not_backdated() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );

    // first half streams to nobody
    jump(&setup.env, WEEK / 2);
    setup.host.stake(&user, &1_0000000);
    assert_eq!(setup.host.claimable(&user, &setup.reward_token.address), 0);
    assert_eq!(
        setup.host.reward_totals(&setup.reward_token.address).unstreamed,
        REWARD / 2
    );

    time_warp(&setup.env, WEEK);
    setup.host.claim(&user, &None);
    assert_approx_eq_abs(setup.reward_token.balance(&user) as u128, REWARD / 2, 1);
}

#[test]
fn test_recover_remaining() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    let distributor_before = setup.reward_token.balance(&setup.distributor);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    jump(&setup.env, WEEK / 2);
    setup.host.stake(&user, &1_0000000);

    time_warp(&setup.env, WEEK);
    assert_eq!(
        setup.host.recover_remaining(&setup.reward_token.address),
        REWARD / 2
    );
    assert_eq!(
        setup.reward_token.balance(&setup.distributor),
        distributor_before - (REWARD / 2) as i128
    );
    // what the staker earned stays claimable
    assert_approx_eq_abs(
        setup.host.reward_remaining(&setup.reward_token.address),
        REWARD / 2,
        1,
    );
    setup.host.claim(&user, &None);
    assert_approx_eq_abs(setup.reward_token.balance(&user) as u128, REWARD / 2, 1);

    // nothing left to recover
    assert_eq!(setup.host.recover_remaining(&setup.reward_token.address), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #906)")]
fn test_recover_remaining_running_period() {
    let setup = Setup::default();
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    jump(&setup.env, WEEK / 2);
    setup.host.recover_remaining(&setup.reward_token.address);
}

#[test]
fn test_deposit_rolls_over_leftover() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    setup.host.stake(&user, &1_0000000);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    let first_rate = setup.host.reward_data(&setup.reward_token.address).rate;

    jump(&setup.env, WEEK / 2);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    let data = setup.host.reward_data(&setup.reward_token.address);
    assert_eq!(data.rate, first_rate * 3 / 2);
    assert_eq!(data.period_finish, WEEK / 2 + WEEK);

    time_warp(&setup.env, data.period_finish);
    setup.host.claim(&user, &None);
    assert_approx_eq_abs(setup.reward_token.balance(&user) as u128, REWARD * 2, 2);
}

#[test]
fn test_unstaked_user_stops_accruing() {
    let setup = Setup::default();
    let alice = Address::generate(&setup.env);
    let bob = Address::generate(&setup.env);
    setup.host.stake(&alice, &100);
    setup.host.stake(&bob, &100);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );

    jump(&setup.env, WEEK / 2);
    setup.host.unstake(&alice, &100);
    jump(&setup.env, WEEK / 2);

    setup.host.claim(&alice, &None);
    setup.host.claim(&bob, &None);
    assert_approx_eq_abs(setup.reward_token.balance(&alice) as u128, REWARD / 4, 1);
    assert_approx_eq_abs(setup.reward_token.balance(&bob) as u128, REWARD * 3 / 4, 1);
}

#[test]
fn test_rewards_receiver() {
    let setup = Setup::default();
    let user = Address::generate(&setup.env);
    let receiver = Address::generate(&setup.env);
    let explicit = Address::generate(&setup.env);
    setup.host.stake(&user, &1);
    setup.host.deposit_reward_token(
        &setup.distributor,
        &setup.reward_token.address,
        &REWARD,
        &WEEK,
    );
    setup.host.set_rewards_receiver(&user, &Some(receiver.clone()));

    jump(&setup.env, WEEK / 2);
    setup.host.claim(&user, &None);
    assert_eq!(setup.reward_token.balance(&user), 0);
    assert_approx_eq_abs(setup.reward_token.balance(&receiver) as u128, REWARD / 2, 1);

    // an explicit receiver wins over the stored one
    jump(&setup.env, WEEK / 2);
    setup.host.claim(&user, &Some(explicit.clone()));
    assert_approx_eq_abs(setup.reward_token.balance(&explicit) as u128, REWARD / 2, 1);
}
