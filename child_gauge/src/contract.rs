use crate::allowance::{read_allowance, spend_allowance, write_allowance};
use crate::balance::{burn, check_nonnegative_amount, mint, read_balance, receive_balance, spend_balance};
use crate::events::Events;
use crate::external::{factory_owner, factory_root_factory, factory_voting_escrow, request_emissions};
use crate::inflation::{checkpoint, update_liquidity_limit};
use crate::interface::{ChildGaugeTrait, ReceiptTokenTrait, RewardsTrait};
use crate::storage::{
    get_chain_id, get_decimals, get_deployer, get_factory, get_inflation_rate,
    get_integrate_checkpoint_of, get_integrate_fraction, get_integrate_inv_supply,
    get_integrate_inv_supply_of, get_is_killed, get_lp_token, get_name, get_period,
    get_period_timestamp, get_salt, get_symbol, get_token, get_total_emissions, get_total_supply,
    get_working_balance, get_working_supply, set_chain_id, set_decimals, set_deployer, set_factory,
    set_is_killed, set_lp_token, set_name, set_period_timestamp, set_salt, set_symbol, set_token,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::errors::AccessControlError;
use access_control::events::Events as AccessControlEvents;
use access_control::interface::ManagedContract;
use access_control::role::Role;
use gauge_deployer::predict_address;
use rewards::{RewardData, Rewards};
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env, String, Vec};
use soroban_token_sdk::TokenUtils;
use utils::bump::bump_instance;
use utils::constant::WEEK;

#[contract]
pub struct ChildGauge;

#[contractimpl]
impl ChildGauge {
    // Initializes a gauge deployed by the child factory.
    //
    // # Arguments
    //
    // * `factory` - The child gauge factory.
    // * `token` - The emission token bridged from the root chain.
    // * `lp_token` - The LP token staked in this gauge.
    // * `manager` - The gauge manager, allowed to configure rewards.
    // * `chain_id` - Chain the gauge lives on.
    // * `deployer` - Account that requested the deployment.
    // * `salt` - Salt the deployment was requested with.
    pub fn __constructor(
        e: Env,
        factory: Address,
        token: Address,
        lp_token: Address,
        manager: Address,
        chain_id: u32,
        deployer: Address,
        salt: BytesN<32>,
    ) {
        set_factory(&e, &factory);
        set_token(&e, &token);
        set_lp_token(&e, &lp_token);
        set_chain_id(&e, &chain_id);
        set_deployer(&e, &deployer);
        set_salt(&e, &salt);
        AccessControl::new(&e).set_role_address(&Role::Manager, &manager);

        let lp = Client::new(&e, &lp_token);
        let lp_symbol = lp.symbol();
        set_decimals(&e, &lp.decimals());
        set_name(&e, &with_suffix(&e, &lp_symbol, " Gauge Deposit"));
        set_symbol(&e, &with_suffix(&e, &lp_symbol, "-gauge"));

        set_period_timestamp(&e, 0, &e.ledger().timestamp());
    }
}

fn with_suffix(e: &Env, base: &String, suffix: &str) -> String {
    let mut buffer = [0u8; 64];
    let base_len = base.len() as usize;
    let total_len = base_len + suffix.len();
    if total_len > buffer.len() {
        return base.clone();
    }
    base.copy_into_slice(&mut buffer[..base_len]);
    buffer[base_len..total_len].copy_from_slice(suffix.as_bytes());
    String::from_bytes(e, &buffer[..total_len])
}

fn require_factory(e: &Env, factory: &Address) {
    factory.require_auth();
    if get_factory(e) != *factory {
        panic_with_error!(e, AccessControlError::Unauthorized);
    }
}

fn require_manager_or_factory_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    let _ = AccessControl::new(e).address_has_role(caller, &Role::Manager)
        || *caller == factory_owner(e, &get_factory(e))
        || panic_with_error!(e, AccessControlError::Unauthorized);
}

fn require_distributor_or_admin(e: &Env, caller: &Address, distributor: &Address) {
    caller.require_auth();
    let _ = caller == distributor
        || AccessControl::new(e).address_has_role(caller, &Role::Manager)
        || *caller == factory_owner(e, &get_factory(e))
        || panic_with_error!(e, AccessControlError::Unauthorized);
}

fn transfer_shares(e: &Env, from: &Address, to: &Address, amount: u128) {
    let voting_escrow = factory_voting_escrow(e, &get_factory(e));
    checkpoint(e, from);
    checkpoint(e, to);

    let supply = get_total_supply(e);
    if amount > 0 {
        let rewards = Rewards::new(e).manager();
        rewards.checkpoint_user(from, read_balance(e, from.clone()), supply);
        rewards.checkpoint_user(to, read_balance(e, to.clone()), supply);

        spend_balance(e, from.clone(), amount);
        receive_balance(e, to.clone(), amount);
    }

    update_liquidity_limit(e, from, read_balance(e, from.clone()), supply, &voting_escrow);
    update_liquidity_limit(e, to, read_balance(e, to.clone()), supply, &voting_escrow);
    TokenUtils::new(e)
        .events()
        .transfer(from.clone(), to.clone(), amount as i128);
}

#[contractimpl]
impl ChildGaugeTrait for ChildGauge {
    // Deposits LP tokens and mints the same amount of receipt tokens.
    //
    // # Arguments
    //
    // * `user` - The depositor.
    // * `amount` - Amount of LP tokens.
    // * `claim_rewards` - Claim pending rewards before the balance changes.
    fn deposit(e: Env, user: Address, amount: u128, claim_rewards: bool) {
        user.require_auth();
        bump_instance(&e);

        let factory = get_factory(&e);
        let voting_escrow = factory_voting_escrow(&e, &factory);
        checkpoint(&e, &user);

        let mut balance = read_balance(&e, user.clone());
        let mut supply = get_total_supply(&e);
        if amount > 0 {
            let rewards = Rewards::new(&e).manager();
            if claim_rewards {
                rewards.claim(&user, balance, supply, None);
            } else {
                rewards.checkpoint_user(&user, balance, supply);
            }

            Client::new(&e, &get_lp_token(&e)).transfer(
                &user,
                &e.current_contract_address(),
                &(amount as i128),
            );
            mint(&e, user.clone(), amount);
            balance += amount;
            supply += amount;
            TokenUtils::new(&e).events().mint(
                e.current_contract_address(),
                user.clone(),
                amount as i128,
            );
        }

        update_liquidity_limit(&e, &user, balance, supply, &voting_escrow);
        request_emissions(&e, &factory);
        Events::new(&e).deposit(user, amount);
    }

    // Burns receipt tokens and returns the LP tokens.
    //
    // # Arguments
    //
    // * `user` - The holder.
    // * `amount` - Amount of receipt tokens.
    // * `claim_rewards` - Claim pending rewards before the balance changes.
    fn withdraw(e: Env, user: Address, amount: u128, claim_rewards: bool) {
        user.require_auth();
        bump_instance(&e);

        let factory = get_factory(&e);
        let voting_escrow = factory_voting_escrow(&e, &factory);
        checkpoint(&e, &user);

        let mut balance = read_balance(&e, user.clone());
        let mut supply = get_total_supply(&e);
        if amount > 0 {
            let rewards = Rewards::new(&e).manager();
            if claim_rewards {
                rewards.claim(&user, balance, supply, None);
            } else {
                rewards.checkpoint_user(&user, balance, supply);
            }

            burn(&e, user.clone(), amount);
            balance -= amount;
            supply -= amount;
            Client::new(&e, &get_lp_token(&e)).transfer(
                &e.current_contract_address(),
                &user,
                &(amount as i128),
            );
            TokenUtils::new(&e).events().burn(user.clone(), amount as i128);
        }

        update_liquidity_limit(&e, &user, balance, supply, &voting_escrow);
        request_emissions(&e, &factory);
        Events::new(&e).withdraw(user, amount);
    }

    fn user_checkpoint(e: Env, user: Address) -> bool {
        user.require_auth();
        bump_instance(&e);

        let factory = get_factory(&e);
        let voting_escrow = factory_voting_escrow(&e, &factory);
        checkpoint(&e, &user);
        update_liquidity_limit(
            &e,
            &user,
            read_balance(&e, user.clone()),
            get_total_supply(&e),
            &voting_escrow,
        );
        request_emissions(&e, &factory);
        true
    }

    fn mint_checkpoint(
        e: Env,
        factory: Address,
        user: Address,
        voting_escrow: Option<Address>,
    ) -> u128 {
        require_factory(&e, &factory);
        bump_instance(&e);

        checkpoint(&e, &user);
        update_liquidity_limit(
            &e,
            &user,
            read_balance(&e, user.clone()),
            get_total_supply(&e),
            &voting_escrow,
        );
        get_integrate_fraction(&e, user)
    }

    fn set_killed(e: Env, factory: Address, is_killed: bool) {
        require_factory(&e, &factory);
        set_is_killed(&e, &is_killed);
        Events::new(&e).set_killed(is_killed);
    }

    fn is_killed(e: Env) -> bool {
        get_is_killed(&e)
    }

    fn inflation_rate(e: Env, week: u64) -> u128 {
        get_inflation_rate(&e, week)
    }

    fn period(e: Env) -> u64 {
        get_period(&e)
    }

    fn period_timestamp(e: Env, period: u64) -> u64 {
        get_period_timestamp(&e, period)
    }

    fn integrate_inv_supply(e: Env, period: u64) -> u128 {
        get_integrate_inv_supply(&e, period)
    }

    fn integrate_inv_supply_of(e: Env, user: Address) -> u128 {
        get_integrate_inv_supply_of(&e, user)
    }

    fn integrate_checkpoint_of(e: Env, user: Address) -> u64 {
        get_integrate_checkpoint_of(&e, user)
    }

    fn integrate_fraction(e: Env, user: Address) -> u128 {
        get_integrate_fraction(&e, user)
    }

    fn working_balance(e: Env, user: Address) -> u128 {
        get_working_balance(&e, user)
    }

    fn working_supply(e: Env) -> u128 {
        get_working_supply(&e)
    }

    fn total_emissions(e: Env) -> u128 {
        get_total_emissions(&e)
    }

    fn factory(e: Env) -> Address {
        get_factory(&e)
    }

    fn token(e: Env) -> Address {
        get_token(&e)
    }

    fn lp_token(e: Env) -> Address {
        get_lp_token(&e)
    }

    fn root_gauge(e: Env) -> Option<Address> {
        factory_root_factory(&e, &get_factory(&e)).map(|root_factory| {
            predict_address(
                &e,
                &root_factory,
                get_chain_id(&e),
                &get_deployer(&e),
                &get_salt(&e),
            )
        })
    }
}

#[contractimpl]
impl RewardsTrait for ChildGauge {
    fn add_reward(e: Env, caller: Address, reward_token: Address, distributor: Address) {
        require_manager_or_factory_owner(&e, &caller);
        Rewards::new(&e)
            .manager()
            .add_reward(&reward_token, &distributor);
    }

    fn set_reward_distributor(
        e: Env,
        caller: Address,
        reward_token: Address,
        distributor: Address,
    ) {
        let rewards = Rewards::new(&e).manager();
        let current = rewards.reward_data(&reward_token).distributor;
        require_distributor_or_admin(&e, &caller, &current);
        rewards.set_reward_distributor(&reward_token, &distributor);
    }

    fn deposit_reward_token(
        e: Env,
        caller: Address,
        reward_token: Address,
        amount: u128,
        duration: Option<u64>,
    ) {
        let rewards = Rewards::new(&e).manager();
        let distributor = rewards.reward_data(&reward_token).distributor;
        require_distributor_or_admin(&e, &caller, &distributor);
        rewards.deposit_reward_token(
            &caller,
            &reward_token,
            amount,
            duration.unwrap_or(WEEK),
            get_total_supply(&e),
        );
    }

    fn claim_rewards(e: Env, user: Address, receiver: Option<Address>) -> Vec<u128> {
        user.require_auth();
        Rewards::new(&e).manager().claim(
            &user,
            read_balance(&e, user.clone()),
            get_total_supply(&e),
            receiver,
        )
    }

    fn set_rewards_receiver(e: Env, user: Address, receiver: Option<Address>) {
        user.require_auth();
        Rewards::new(&e)
            .manager()
            .set_rewards_receiver(&user, &receiver);
    }

    fn rewards_receiver(e: Env, user: Address) -> Option<Address> {
        Rewards::new(&e).manager().rewards_receiver(&user)
    }

    fn claimable_reward(e: Env, user: Address, reward_token: Address) -> u128 {
        Rewards::new(&e).manager().claimable_reward(
            &user,
            read_balance(&e, user.clone()),
            get_total_supply(&e),
            &reward_token,
        )
    }

    fn claimed_reward(e: Env, user: Address, reward_token: Address) -> u128 {
        Rewards::new(&e)
            .manager()
            .claimed_reward(&user, &reward_token)
    }

    fn reward_data(e: Env, reward_token: Address) -> RewardData {
        Rewards::new(&e).manager().reward_data(&reward_token)
    }

    fn reward_count(e: Env) -> u32 {
        Rewards::new(&e).manager().reward_count()
    }

    fn reward_tokens(e: Env, index: u32) -> Address {
        Rewards::new(&e).manager().reward_token(index)
    }

    fn reward_remaining(e: Env, reward_token: Address) -> u128 {
        Rewards::new(&e).manager().reward_remaining(&reward_token)
    }

    fn recover_remaining(e: Env, caller: Address, reward_token: Address) -> u128 {
        require_manager_or_factory_owner(&e, &caller);
        Rewards::new(&e)
            .manager()
            .recover_remaining(&reward_token, get_total_supply(&e))
    }
}

#[contractimpl]
impl ReceiptTokenTrait for ChildGauge {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, from, spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        write_allowance(&e, from.clone(), spender.clone(), amount, expiration_ledger);
        TokenUtils::new(&e)
            .events()
            .approve(from, spender, amount, expiration_ledger);
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, id) as i128
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let amount = check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        transfer_shares(&e, &from, &to, amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);
        bump_instance(&e);

        spend_allowance(&e, from.clone(), spender, amount);
        transfer_shares(&e, &from, &to, amount as u128);
    }

    fn total_supply(e: Env) -> i128 {
        get_total_supply(&e) as i128
    }

    fn decimals(e: Env) -> u32 {
        get_decimals(&e)
    }

    fn name(e: Env) -> String {
        get_name(&e)
    }

    fn symbol(e: Env) -> String {
        get_symbol(&e)
    }
}

#[contractimpl]
impl ManagedContract for ChildGauge {
    fn set_manager(e: Env, caller: Address, manager: Address) {
        require_manager_or_factory_owner(&e, &caller);
        AccessControl::new(&e).set_role_address(&Role::Manager, &manager);
        AccessControlEvents::new(&e).set_manager(manager);
    }

    fn manager(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Manager)
    }
}
