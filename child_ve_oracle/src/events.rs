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

    pub fn user_point_updated(&self, user: Address, bias: i128, slope: i128, ts: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "user_point_updated"), user),
            (bias, slope, ts),
        )
    }

    pub fn global_point_updated(&self, bias: i128, slope: i128, ts: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "global_point_updated"),),
            (bias, slope, ts),
        )
    }

    pub fn update_root_oracle(&self, root_chain_id: u32, root_oracle: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_root_oracle"), root_chain_id),
            (root_oracle,),
        )
    }

    pub fn update_messenger(&self, messenger: Option<Address>) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "update_messenger"),), (messenger,))
    }
}
