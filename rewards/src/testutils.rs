#![cfg(test)]

use crate::storage::{RewardData, RewardTotals};
use crate::Rewards;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

#[contracttype]
enum MockedTokenKey {
    Balance(Address),
}

// Token with 18 decimals, unlike stellar assets.
#[contract]
pub struct MockedToken;

#[contractimpl]
impl MockedToken {
    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone());
        e.storage()
            .instance()
            .set(&MockedTokenKey::Balance(to), &(balance + amount));
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        e.storage()
            .instance()
            .get(&MockedTokenKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_balance = Self::balance(e.clone(), from.clone());
        assert!(from_balance >= amount);
        e.storage()
            .instance()
            .set(&MockedTokenKey::Balance(from), &(from_balance - amount));
        Self::mint(e, to, amount);
    }

    pub fn decimals(_e: Env) -> u32 {
        18
    }
}

#[contracttype]
enum HostKey {
    Balance(Address),
    Supply,
}

fn balance_of(e: &Env, user: &Address) -> u128 {
    e.storage()
        .instance()
        .get(&HostKey::Balance(user.clone()))
        .unwrap_or(0)
}

fn total_supply(e: &Env) -> u128 {
    e.storage().instance().get(&HostKey::Supply).unwrap_or(0)
}

// Minimal staking contract driving the rewards manager.
#[contract]
pub struct RewardsHost;

#[contractimpl]
impl RewardsHost {
    pub fn add_reward(e: Env, token: Address, distributor: Address) {
        Rewards::new(&e).manager().add_reward(&token, &distributor);
    }

    pub fn deposit_reward_token(e: Env, from: Address, token: Address, amount: u128, duration: u64) {
        from.require_auth();
        Rewards::new(&e)
            .manager()
            .deposit_reward_token(&from, &token, amount, duration, total_supply(&e));
    }

    pub fn stake(e: Env, user: Address, amount: u128) {
        let balance = balance_of(&e, &user);
        let supply = total_supply(&e);
        Rewards::new(&e).manager().checkpoint_user(&user, balance, supply);
        e.storage()
            .instance()
            .set(&HostKey::Balance(user), &(balance + amount));
        e.storage().instance().set(&HostKey::Supply, &(supply + amount));
    }

    pub fn unstake(e: Env, user: Address, amount: u128) {
        let balance = balance_of(&e, &user);
        let supply = total_supply(&e);
        Rewards::new(&e).manager().checkpoint_user(&user, balance, supply);
        e.storage()
            .instance()
            .set(&HostKey::Balance(user), &(balance - amount));
        e.storage().instance().set(&HostKey::Supply, &(supply - amount));
    }

    pub fn claim(e: Env, user: Address, receiver: Option<Address>) -> Vec<u128> {
        Rewards::new(&e)
            .manager()
            .claim(&user, balance_of(&e, &user), total_supply(&e), receiver)
    }

    pub fn set_rewards_receiver(e: Env, user: Address, receiver: Option<Address>) {
        Rewards::new(&e).manager().set_rewards_receiver(&user, &receiver);
    }

    pub fn claimable(e: Env, user: Address, token: Address) -> u128 {
        Rewards::new(&e).manager().claimable_reward(
            &user,
            balance_of(&e, &user),
            total_supply(&e),
            &token,
        )
    }

    pub fn claimed(e: Env, user: Address, token: Address) -> u128 {
        Rewards::new(&e).manager().claimed_reward(&user, &token)
    }

    pub fn reward_data(e: Env, token: Address) -> RewardData {
        Rewards::new(&e).manager().reward_data(&token)
    }

    pub fn reward_totals(e: Env, token: Address) -> RewardTotals {
        Rewards::new(&e).manager().reward_totals(&token)
    }

    pub fn reward_count(e: Env) -> u32 {
        Rewards::new(&e).manager().reward_count()
    }

    pub fn reward_tokens(e: Env) -> Vec<Address> {
        Rewards::new(&e).manager().reward_tokens()
    }

    pub fn reward_remaining(e: Env, token: Address) -> u128 {
        Rewards::new(&e).manager().reward_remaining(&token)
    }

    pub fn recover_remaining(e: Env, token: Address) -> u128 {
        Rewards::new(&e)
            .manager()
            .recover_remaining(&token, total_supply(&e))
    }
}

pub(crate) fn create_token<'a>(e: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let address = e.register_stellar_asset_contract_v2(admin.clone()).address();
    (
        TokenClient::new(e, &address),
        StellarAssetClient::new(e, &address),
    )
}

pub(crate) fn create_18_decimals_token<'a>(e: &Env) -> MockedTokenClient<'a> {
    MockedTokenClient::new(e, &e.register(MockedToken, ()))
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) distributor: Address,
    pub(crate) host: RewardsHostClient<'a>,
    pub(crate) reward_token: TokenClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let distributor = Address::generate(&env);
        let (reward_token, reward_admin) = create_token(&env, &admin);
        reward_admin.mint(&distributor, &1_000_000_000_0000000);

        let host = RewardsHostClient::new(&env, &env.register(RewardsHost, ()));
        host.add_reward(&reward_token.address, &distributor);

        Setup {
            env,
            distributor,
            host,
            reward_token,
        }
    }
}
