use soroban_sdk::{Address, BytesN, Env, Symbol};

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

    pub fn deploy_child_gauge(
        &self,
        chain_id: u32,
        lp_token: Address,
        gauge: Address,
        message_id: u64,
    ) {
        self.env().events().publish(
            (Symbol::new(self.env(), "deploy_child_gauge"), chain_id, lp_token),
            (gauge, message_id),
        )
    }

    pub fn set_mirrored(&self, gauge: Address) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_mirrored"), gauge), ())
    }

    pub fn transmit_emissions(&self, gauge: Address, amount: u128) {
        self.env().events().publish(
            (Symbol::new(self.env(), "transmit_emissions"), gauge),
            (amount,),
        )
    }

    pub fn update_child(&self, chain_id: u32, bridger: Address, factory: Address, implementation: BytesN<32>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_child"), chain_id),
            (bridger, factory, implementation),
        )
    }

    pub fn update_implementation(&self, implementation: BytesN<32>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_implementation"),),
            (implementation,),
        )
    }

    pub fn update_messenger(&self, messenger: Option<Address>) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "update_messenger"),), (messenger,))
    }
}
