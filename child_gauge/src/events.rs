use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    pub fn deposit(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "deposit"), user), (amount,))
    }

    pub fn withdraw(&self, user: Address, amount: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "withdraw"), user), (amount,))
    }

    pub fn update_liquidity_limit(
        &self,
        user: Address,
        balance: u128,
        supply: u128,
        working_balance: u128,
        working_supply: u128,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_liquidity_limit"), user),
            (balance, supply, working_balance, working_supply),
        )
    }

    pub fn inflation(&self, week: u64, rate: u128, received: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "inflation"), week),
            (rate, received),
        )
    }

    pub fn set_killed(&self, is_killed: bool) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_killed"),), (is_killed,))
    }
}
