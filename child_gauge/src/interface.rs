use rewards::RewardData;
use soroban_sdk::{Address, Env, String, Vec};

pub trait ChildGaugeTrait {
    // Deposit LP tokens and receive the same amount of gauge receipt tokens.
    fn deposit(e: Env, user: Address, amount: u128, claim_rewards: bool);

    // Burn receipt tokens and get the LP tokens back.
    fn withdraw(e: Env, user: Address, amount: u128, claim_rewards: bool);

    // Record a checkpoint for `user` and request emissions from the root chain
    // if none were requested this week.
    fn user_checkpoint(e: Env, user: Address) -> bool;

    // Checkpoint used by the factory before minting. Returns the user's
    // integrate fraction. `voting_escrow` is passed in by the factory.
    fn mint_checkpoint(
        e: Env,
        factory: Address,
        user: Address,
        voting_escrow: Option<Address>,
    ) -> u128;

    fn set_killed(e: Env, factory: Address, is_killed: bool);
    fn is_killed(e: Env) -> bool;

    // Inflation checkpoint views
    fn inflation_rate(e: Env, week: u64) -> u128;
    fn period(e: Env) -> u64;
    fn period_timestamp(e: Env, period: u64) -> u64;
    fn integrate_inv_supply(e: Env, period: u64) -> u128;
    fn integrate_inv_supply_of(e: Env, user: Address) -> u128;
    fn integrate_checkpoint_of(e: Env, user: Address) -> u64;
    fn integrate_fraction(e: Env, user: Address) -> u128;
    fn working_balance(e: Env, user: Address) -> u128;
    fn working_supply(e: Env) -> u128;
    fn total_emissions(e: Env) -> u128;

    fn factory(e: Env) -> Address;
    fn token(e: Env) -> Address;
    fn lp_token(e: Env) -> Address;

    // Root chain counterpart, derived from the root factory address known to the factory.
    fn root_gauge(e: Env) -> Option<Address>;
}

pub trait RewardsTrait {
    // Register a reward token and the address allowed to deposit it.
    fn add_reward(e: Env, caller: Address, reward_token: Address, distributor: Address);

    fn set_reward_distributor(
        e: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
    );

    // Start a new streaming period. `duration` defaults to one week.
    fn deposit_reward_token(
        e: Env,
        caller: Address,
        reward_token: Address,
        amount: u128,
        duration: Option<u64>,
    );

    // Claim every pending reward. Returns amounts in `reward_tokens` order.
    fn claim_rewards(e: Env, user: Address, receiver: Option<Address>) -> Vec<u128>;

    // Default receiver for claims made without an explicit receiver.
    fn set_rewards_receiver(e: Env, user: Address, receiver: Option<Address>);
    fn rewards_receiver(e: Env, user: Address) -> Option<Address>;

    fn claimable_reward(e: Env, user: Address, reward_token: Address) -> u128;
    fn claimed_reward(e: Env, user: Address, reward_token: Address) -> u128;
    fn reward_data(e: Env, reward_token: Address) -> RewardData;
    fn reward_count(e: Env) -> u32;
    fn reward_tokens(e: Env, index: u32) -> Address;

    // Deposited and not yet claimed.
    fn reward_remaining(e: Env, reward_token: Address) -> u128;

    // Send tokens streamed while nobody was staked back to the distributor.
    fn recover_remaining(e: Env, caller: Address, reward_token: Address) -> u128;
}

pub trait ReceiptTokenTrait {
    fn allowance(e: Env, from: Address, spender: Address) -> i128;
    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);
    fn balance(e: Env, id: Address) -> i128;
    fn transfer(e: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn total_supply(e: Env) -> i128;
    fn decimals(e: Env) -> u32;
    fn name(e: Env) -> String;
    fn symbol(e: Env) -> String;
}
