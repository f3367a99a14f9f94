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

    pub fn commit_set_admins(&self, ownership_admin: Address, emergency_admin: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "commit_set_admins"),),
            (ownership_admin, emergency_admin),
        )
    }

    pub fn accept_set_admins(&self, ownership_admin: Address, emergency_admin: Address) {
        self.env().events().publish(
            (Symbol::new(self.env(), "accept_set_admins"),),
            (ownership_admin, emergency_admin),
        )
    }

    pub fn factory_call(&self, factory: Address, function: &str, caller: Address) {
        self.env().events().publish(
            (
                Symbol::new(self.env(), "factory_call"),
                factory,
                Symbol::new(self.env(), function),
            ),
            (caller,),
        )
    }
}
