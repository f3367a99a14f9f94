use crate::constants::{
    INTEGRAL_PRECISION, MAX_DECIMALS, MAX_REWARDS, MAX_REWARD_DURATION, MIN_REWARD_DURATION,
};
use crate::errors::RewardsError;
use crate::events::Events;
use crate::storage::{
    get_reward_count, get_reward_data, get_reward_token, get_reward_totals, get_rewards_receiver,
    get_user_reward_data, set_reward_count, set_reward_data, set_reward_token, set_reward_totals,
    set_rewards_receiver, set_user_reward_data, RewardData, RewardTotals, UserRewardData,
};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{log, panic_with_error, Address, Env, Vec};

// Streams up to `MAX_REWARDS` tokens to stakers of the host contract.
// The host owns the staked balances and passes them in on every call,
// checkpointing before any balance or supply change.
pub struct Manager {
    env: Env,
}

impl Manager {
    pub fn new(e: &Env) -> Manager {
        Manager { env: e.clone() }
    }

    // Registers a new reward token.
    //
    // # Arguments
    //
    // * `token` - The reward token contract.
    // * `distributor` - The address allowed to deposit the token.
    //
    // # Panics
    //
    // If the token is already registered, the token limit is reached
    // or the token has more than 18 decimals.
    pub fn add_reward(&self, token: &Address, distributor: &Address) {
        let count = get_reward_count(&self.env);
        if get_reward_data(&self.env, token).is_some() {
            panic_with_error!(&self.env, RewardsError::RewardAlreadyExists);
        }
        if count >= MAX_REWARDS {
            panic_with_error!(&self.env, RewardsError::MaxRewardsReached);
        }
        let decimals = Client::new(&self.env, token).decimals();
        if decimals > MAX_DECIMALS {
            panic_with_error!(&self.env, RewardsError::DecimalsTooLarge);
        }

        set_reward_data(
            &self.env,
            &RewardData {
                token: token.clone(),
                distributor: distributor.clone(),
                period_finish: 0,
                rate: 0,
                last_update: 0,
                integral: 0,
                precision: 10u128.pow(MAX_DECIMALS - decimals),
            },
        );
        set_reward_token(&self.env, count, token);
        set_reward_count(&self.env, count + 1);
        Events::new(&self.env).add_reward(token.clone(), distributor.clone());
    }

    pub fn set_reward_distributor(&self, token: &Address, distributor: &Address) {
        let mut data = self.reward_data(token);
        data.distributor = distributor.clone();
        set_reward_data(&self.env, &data);
        Events::new(&self.env).set_reward_distributor(token.clone(), distributor.clone());
    }

    pub fn reward_data(&self, token: &Address) -> RewardData {
        match get_reward_data(&self.env, token) {
            Some(data) => data,
            None => panic_with_error!(&self.env, RewardsError::RewardNotFound),
        }
    }

    pub fn reward_totals(&self, token: &Address) -> RewardTotals {
        self.reward_data(token);
        get_reward_totals(&self.env, token)
    }

    pub fn reward_count(&self) -> u32 {
        get_reward_count(&self.env)
    }

    pub fn reward_token(&self, index: u32) -> Address {
        get_reward_token(&self.env, index)
    }

    pub fn reward_tokens(&self) -> Vec<Address> {
        let mut result = Vec::new(&self.env);
        for index in 0..get_reward_count(&self.env) {
            result.push_back(get_reward_token(&self.env, index));
        }
        result
    }

    // Tokens deposited and not yet claimed, in native units.
    // Includes rounding dust left behind by accrual, which stays in the
    // contract: `recover_remaining` only returns what streamed with nobody staked.
    pub fn reward_remaining(&self, token: &Address) -> u128 {
        let totals = self.reward_totals(token);
        totals.deposited - totals.claimed
    }

    // Starts a new streaming period for `token`, rolling any unstreamed
    // amount of the running period into the new rate.
    //
    // # Arguments
    //
    // * `from` - The account the tokens are pulled from.
    // * `token` - A registered reward token.
    // * `amount` - Amount in native token units.
    // * `duration` - Length of the new period in seconds.
    // * `total_supply` - Current staked supply of the host.
    pub fn deposit_reward_token(
        &self,
        from: &Address,
        token: &Address,
        amount: u128,
        duration: u64,
        total_supply: u128,
    ) {
        if !(MIN_REWARD_DURATION..=MAX_REWARD_DURATION).contains(&duration) {
            panic_with_error!(&self.env, RewardsError::PeriodBounds);
        }
        self.reward_data(token);
        self.checkpoint(total_supply);

        let mut data = self.reward_data(token);
        let now = self.env.ledger().timestamp();

        Client::new(&self.env, token).transfer(
            from,
            &self.env.current_contract_address(),
            &(amount as i128),
        );

        let leftover = if now < data.period_finish {
            (data.period_finish - now) as u128 * data.rate
        } else {
            0
        };
        data.rate = (amount * data.precision + leftover) / duration as u128;
        data.period_finish = now + duration;
        data.last_update = now;
        set_reward_data(&self.env, &data);

        let mut totals = get_reward_totals(&self.env, token);
        totals.deposited += amount;
        set_reward_totals(&self.env, token, &totals);

        Events::new(&self.env).deposit_reward(token.clone(), amount, data.rate, data.period_finish);
    }

    // Brings every reward integral up to date.
    pub fn checkpoint(&self, total_supply: u128) {
        for index in 0..get_reward_count(&self.env) {
            let token = get_reward_token(&self.env, index);
            self.checkpoint_token(&token, total_supply);
        }
    }

    // Brings every reward integral up to date and accrues the user's share.
    //
    // # Arguments
    //
    // * `user` - The staker.
    // * `balance` - The user's staked balance before the pending change.
    // * `total_supply` - The staked supply before the pending change.
    pub fn checkpoint_user(&self, user: &Address, balance: u128, total_supply: u128) {
        for index in 0..get_reward_count(&self.env) {
            let token = get_reward_token(&self.env, index);
            let data = self.checkpoint_token(&token, total_supply);
            let user_data = self.accrue_user(
                &data,
                get_user_reward_data(&self.env, &token, user),
                balance,
            );
            set_user_reward_data(&self.env, &token, user, &user_data);
        }
    }

    // Pays out everything accrued for `user`. Returns the amount paid per
    // reward token, in registration order.
    pub fn claim(
        &self,
        user: &Address,
        balance: u128,
        total_supply: u128,
        receiver: Option<Address>,
    ) -> Vec<u128> {
        let receiver = match receiver {
            Some(receiver) => receiver,
            None => get_rewards_receiver(&self.env, user).unwrap_or(user.clone()),
        };

        let mut result = Vec::new(&self.env);
        for index in 0..get_reward_count(&self.env) {
            let token = get_reward_token(&self.env, index);
            let data = self.checkpoint_token(&token, total_supply);
            let mut user_data = self.accrue_user(
                &data,
                get_user_reward_data(&self.env, &token, user),
                balance,
            );

            let amount = user_data.claimable;
            if amount > 0 {
                user_data.claimable = 0;
                user_data.claimed += amount;

                let mut totals = get_reward_totals(&self.env, &token);
                totals.claimed += amount;
                set_reward_totals(&self.env, &token, &totals);

                Client::new(&self.env, &token).transfer(
                    &self.env.current_contract_address(),
                    &receiver,
                    &(amount as i128),
                );
                Events::new(&self.env).claim_reward(
                    token.clone(),
                    user.clone(),
                    receiver.clone(),
                    amount,
                );
            }
            set_user_reward_data(&self.env, &token, user, &user_data);
            result.push_back(amount);
        }
        result
    }

    // Amount `user` could claim right now. Read-only.
    pub fn claimable_reward(
        &self,
        user: &Address,
        balance: u128,
        total_supply: u128,
        token: &Address,
    ) -> u128 {
        let (data, _) = self.stream(self.reward_data(token), total_supply);
        self.accrue_user(&data, get_user_reward_data(&self.env, token, user), balance)
            .claimable
    }

    pub fn claimed_reward(&self, user: &Address, token: &Address) -> u128 {
        get_user_reward_data(&self.env, token, user).claimed
    }

    pub fn user_reward_data(&self, user: &Address, token: &Address) -> UserRewardData {
        get_user_reward_data(&self.env, token, user)
    }

    pub fn rewards_receiver(&self, user: &Address) -> Option<Address> {
        get_rewards_receiver(&self.env, user)
    }

    pub fn set_rewards_receiver(&self, user: &Address, receiver: &Option<Address>) {
        set_rewards_receiver(&self.env, user, receiver);
    }

    // Returns the tokens that were streamed while nothing was staked to the
    // distributor. Only allowed once the current period is over.
    pub fn recover_remaining(&self, token: &Address, total_supply: u128) -> u128 {
        let data = self.checkpoint_token(token, total_supply);
        if self.env.ledger().timestamp() < data.period_finish {
            panic_with_error!(&self.env, RewardsError::PeriodNotFinished);
        }

        let mut totals = get_reward_totals(&self.env, token);
        let amount = totals.unstreamed;
        if amount == 0 {
            return 0;
        }
        totals.unstreamed = 0;
        totals.deposited -= amount;
        set_reward_totals(&self.env, token, &totals);

        Client::new(&self.env, token).transfer(
            &self.env.current_contract_address(),
            &data.distributor,
            &(amount as i128),
        );
        Events::new(&self.env).recover_remaining(token.clone(), data.distributor, amount);
        amount
    }

    fn checkpoint_token(&self, token: &Address, total_supply: u128) -> RewardData {
        let (data, unstreamed) = self.stream(self.reward_data(token), total_supply);
        if unstreamed > 0 {
            let mut totals = get_reward_totals(&self.env, token);
            totals.unstreamed += unstreamed;
            set_reward_totals(&self.env, token, &totals);
        }
        set_reward_data(&self.env, &data);
        data
    }

    // Advances `data` to now. Returns the updated data and the native amount
    // streamed with nobody staked.
    fn stream(&self, mut data: RewardData, total_supply: u128) -> (RewardData, u128) {
        let now = self.env.ledger().timestamp();
        let last = now.min(data.period_finish);
        if last <= data.last_update {
            return (data, 0);
        }

        let duration = (last - data.last_update) as u128;
        let mut unstreamed = 0;
        if total_supply > 0 {
            data.integral += (data.rate * duration).fixed_mul_floor(
                &self.env,
                &INTEGRAL_PRECISION,
                &total_supply,
            );
            log!(&self.env, "reward integral", data.token, data.integral);
        } else {
            unstreamed = data
                .rate
                .fixed_mul_floor(&self.env, &duration, &data.precision);
        }
        data.last_update = last;
        (data, unstreamed)
    }

    fn accrue_user(
        &self,
        data: &RewardData,
        mut user_data: UserRewardData,
        balance: u128,
    ) -> UserRewardData {
        if data.integral > user_data.integral_for {
            user_data.claimable += balance.fixed_mul_floor(
                &self.env,
                &(data.integral - user_data.integral_for),
                &(data.precision * INTEGRAL_PRECISION),
            );
        }
        user_data.integral_for = data.integral;
        user_data
    }
}
