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

    pub fn checkpoint(&self, period: u64, emissions: u128, total_emissions: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "checkpoint"), period),
            (emissions, total_emissions),
        )
    }

    pub fn transmit_emissions(&self, child_gauge: Address, bridger: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "transmit_emissions"), child_gauge),
            (bridger, amount),
        )
    }

    pub fn set_killed(&self, is_killed: bool) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_killed"),), (is_killed,))
    }
}
