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

    pub fn push(&self, chain_id: u32, user: Address, message_id: u64) {
        self.env().events().publish(
            (Symbol::new(self.env(), "push"), chain_id, user),
            (message_id,),
        )
    }

    pub fn update_child_oracle(&self, chain_id: u32, child_oracle: Option<Address>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_child_oracle"), chain_id),
            (child_oracle,),
        )
    }

    pub fn update_messenger(&self, messenger: Option<Address>) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "update_messenger"),), (messenger,))
    }
}
