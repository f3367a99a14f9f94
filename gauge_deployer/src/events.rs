use crate::registry::{GaugeRecord, RegistryKind};
use soroban_sdk::{Address, Env, Symbol};

#[derive(Clone)]
pub struct DeployerEvents(Env);

impl DeployerEvents {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> DeployerEvents {
        DeployerEvents(env.clone())
    }

    pub fn register(&self, kind: RegistryKind, record: &GaugeRecord) {
        let name = match kind {
            RegistryKind::Local => "deployed_gauge",
            RegistryKind::Remote => "requested_gauge",
        };
        self.env().events().publish(
            (Symbol::new(self.env(), name), record.chain_id),
            (
                record.address.clone(),
                record.underlying_asset.clone(),
                record.deployer.clone(),
                record.salt.clone(),
                record.creation_nonce,
            ),
        )
    }

    pub fn set_killed(&self, gauge: Address, killed: bool) {
        self.env()
            .events()
            .publish((Symbol::new(self.env(), "set_killed"), gauge), (killed,))
    }
}
