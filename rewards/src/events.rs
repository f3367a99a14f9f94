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

    pub fn add_reward(&self, token: Address, distributor: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "add_reward"), token), (distributor,))
    }

    pub fn set_reward_distributor(&self, token: Address, distributor: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_reward_distributor"), token),
            (distributor,),
        )
    }

    pub fn deposit_reward(&self, token: Address, amount: u128, rate: u128, period_finish: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deposit_reward"), token),
            (amount, rate, period_finish),
        )
    }

    pub fn claim_reward(&self, token: Address, user: Address, receiver: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "claim_reward"), token, user),
            (receiver, amount),
        )
    }

    pub fn recover_remaining(&self, token: Address, distributor: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "recover_remaining"), token),
            (distributor, amount),
        )
    }
}
