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

    pub fn minted(&self, user: Address, gauge: Address, total: u128) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "minted"), user, gauge), (total,))
    }

    pub fn request_emissions(&self, gauge: Address, root_gauge: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "request_emissions"), gauge),
            (root_gauge,),
        )
    }

    pub fn set_mirrored(&self, gauge: Address, mirrored: bool) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_mirrored"), gauge), (mirrored,))
    }

    pub fn update_messenger(&self, messenger: Option<Address>) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "update_messenger"),), (messenger,))
    }

    pub fn update_voting_escrow(&self, voting_escrow: Option<Address>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_voting_escrow"),),
            (voting_escrow,),
        )
    }

    pub fn update_implementation(&self, implementation: BytesN<32>) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_implementation"),),
            (implementation,),
        )
    }

    pub fn update_root_factory(&self, root_chain_id: u32, root_factory: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "update_root_factory"), root_chain_id),
            (root_factory,),
        )
    }
}
