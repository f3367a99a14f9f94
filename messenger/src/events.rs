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

    pub fn send(&self, id: u64, to_chain_id: u32, sender: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "send"), to_chain_id), (id, sender))
    }

    pub fn deliver(&self, origin_chain_id: u32, id: u64, relayer: Address, receipts: u32) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deliver"), origin_chain_id),
            (id, relayer, receipts),
        )
    }

    pub fn set_relayer(&self, origin_chain_id: u32, relayer: Option<Address>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "set_relayer"), origin_chain_id),
            (relayer,),
        )
    }
}
