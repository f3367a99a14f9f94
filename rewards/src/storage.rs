use crate::errors::RewardsError;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};

// ------------------------------------
// Data Structures
// ------------------------------------

// Streaming state of a single reward token.
// `rate` and `integral` are normalized to 18 decimals through `precision`.
// `integral` is reward per staked unit, scaled by `INTEGRAL_PRECISION`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct RewardData {
    pub token: Address,
    pub distributor: Address,
    pub period_finish: u64,
    pub rate: u128,
    pub last_update: u64,
    pub integral: u128,
    pub precision: u128,
}

// Token amounts in native units.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct RewardTotals {
    pub deposited: u128,
    pub claimed: u128,
    // streamed while nobody was staked
    pub unstreamed: u128,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct UserRewardData {
    pub integral_for: u128,
    pub claimable: u128,
    pub claimed: u128,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    RewardCount,
    RewardToken(u32),
    RewardData(Address),
    RewardTotals(Address),
    UserRewardData(Address, Address),
    RewardsReceiver(Address),
}

// ------------------------------------
// Reward tokens
// ------------------------------------

pub(crate) fn get_reward_count(env: &Env) -> u32 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RewardCount)
        .unwrap_or(0)
}

pub(crate) fn set_reward_count(env: &Env, value: u32) {
    bump_instance(env);
    env.storage().instance().set(&DataKey::RewardCount, &value);
}

pub(crate) fn get_reward_token(env: &Env, index: u32) -> Address {
    let key = DataKey::RewardToken(index);
    match env.storage().persistent().get(&key) {
        Some(token) => {
            bump_persistent(env, &key);
            token
        }
        None => panic_with_error!(env, RewardsError::RewardNotFound),
    }
}

pub(crate) fn set_reward_token(env: &Env, index: u32, token: &Address) {
    let key = DataKey::RewardToken(index);
    env.storage().persistent().set(&key, token);
    bump_persistent(env, &key);
}

pub(crate) fn get_reward_data(env: &Env, token: &Address) -> Option<RewardData> {
    let key = DataKey::RewardData(token.clone());
    let data = env.storage().persistent().get(&key);
    if data.is_some() {
        bump_persistent(env, &key);
    }
    data
}

pub(crate) fn set_reward_data(env: &Env, data: &RewardData) {
    let key = DataKey::RewardData(data.token.clone());
    env.storage().persistent().set(&key, data);
    bump_persistent(env, &key);
}

pub(crate) fn get_reward_totals(env: &Env, token: &Address) -> RewardTotals {
    let key = DataKey::RewardTotals(token.clone());
    match env.storage().persistent().get(&key) {
        Some(totals) => {
            bump_persistent(env, &key);
            totals
        }
        None => RewardTotals::default(),
    }
}

pub(crate) fn set_reward_totals(env: &Env, token: &Address, totals: &RewardTotals) {
    let key = DataKey::RewardTotals(token.clone());
    env.storage().persistent().set(&key, totals);
    bump_persistent(env, &key);
}

// ------------------------------------
// Users
// ------------------------------------

pub(crate) fn get_user_reward_data(env: &Env, token: &Address, user: &Address) -> UserRewardData {
    let key = DataKey::UserRewardData(token.clone(), user.clone());
    match env.storage().persistent().get(&key) {
        Some(data) => {
            bump_persistent(env, &key);
            data
        }
        None => UserRewardData::default(),
    }
}

pub(crate) fn set_user_reward_data(
    env: &Env,
    token: &Address,
    user: &Address,
    data: &UserRewardData,
) {
    let key = DataKey::UserRewardData(token.clone(), user.clone());
    env.storage().persistent().set(&key, data);
    bump_persistent(env, &key);
}

pub(crate) fn get_rewards_receiver(env: &Env, user: &Address) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::RewardsReceiver(user.clone()))
}

pub(crate) fn set_rewards_receiver(env: &Env, user: &Address, receiver: &Option<Address>) {
    let key = DataKey::RewardsReceiver(user.clone());
    match receiver {
        Some(receiver) => {
            env.storage().persistent().set(&key, receiver);
            bump_persistent(env, &key);
        }
        None => env.storage().persistent().remove(&key),
    }
}
