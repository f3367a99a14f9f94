use crate::errors::DeployerError;
use crate::events::DeployerEvents;
use crate::salt::default_salt;
use crate::storage::{
    get_address, get_count, get_nonce, get_record, set_address, set_count, set_nonce, set_record,
    DataKey,
};
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env, Vec};

// Local: gauges deployed by this factory. Remote: predicted addresses of gauges
// this factory asked another chain to deploy.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum RegistryKind {
    Local,
    Remote,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GaugeRecord {
    pub address: Address,
    pub chain_id: u32,
    pub underlying_asset: Option<Address>,
    pub deployer: Address,
    pub salt: BytesN<32>,
    pub creation_nonce: u64,
    pub killed: bool,
}

// Append-only arena of gauge records, indexed by chain id and position.
// Every mutation goes through an explicit handle.
#[derive(Clone)]
pub struct GaugeRegistry {
    env: Env,
    kind: RegistryKind,
}

impl GaugeRegistry {
    pub fn new(e: &Env, kind: RegistryKind) -> Self {
        GaugeRegistry {
            env: e.clone(),
            kind,
        }
    }

    pub fn local(e: &Env) -> Self {
        Self::new(e, RegistryKind::Local)
    }

    pub fn remote(e: &Env) -> Self {
        Self::new(e, RegistryKind::Remote)
    }

    pub fn count(&self, chain_id: u32) -> u32 {
        get_count(&self.env, self.kind, chain_id)
    }

    pub fn get(&self, chain_id: u32, index: u32) -> Address {
        match get_address(&self.env, &DataKey::Gauge(self.kind, chain_id, index)) {
            Some(address) => address,
            None => panic_with_error!(&self.env, DeployerError::GaugeNotFound),
        }
    }

    pub fn list(&self, chain_id: u32) -> Vec<Address> {
        let mut result = Vec::new(&self.env);
        for index in 0..self.count(chain_id) {
            result.push_back(self.get(chain_id, index));
        }
        result
    }

    pub fn by_asset(&self, chain_id: u32, asset: &Address) -> Option<Address> {
        get_address(
            &self.env,
            &DataKey::ByAsset(self.kind, chain_id, asset.clone()),
        )
    }

    pub fn by_salt(&self, chain_id: u32, salt: &BytesN<32>) -> Option<Address> {
        get_address(
            &self.env,
            &DataKey::BySalt(self.kind, chain_id, salt.clone()),
        )
    }

    pub fn record(&self, gauge: &Address) -> Option<GaugeRecord> {
        get_record(&self.env, self.kind, gauge.clone())
    }

    pub fn require_record(&self, gauge: &Address) -> GaugeRecord {
        match self.record(gauge) {
            Some(record) => record,
            None => panic_with_error!(&self.env, DeployerError::GaugeNotFound),
        }
    }

    pub fn contains(&self, gauge: &Address) -> bool {
        self.record(gauge).is_some()
    }

    // salt and asset must both be fresh on the chain
    pub fn require_unique(&self, chain_id: u32, salt: &BytesN<32>, asset: Option<&Address>) {
        if self.by_salt(chain_id, salt).is_some() {
            panic_with_error!(&self.env, DeployerError::DuplicateDeployment);
        }
        if let Some(asset) = asset {
            if self.by_asset(chain_id, asset).is_some() {
                panic_with_error!(&self.env, DeployerError::DuplicateDeployment);
            }
        }
    }

    pub fn register(&self, record: &GaugeRecord) {
        self.require_unique(record.chain_id, &record.salt, record.underlying_asset.as_ref());
        if self.contains(&record.address) {
            panic_with_error!(&self.env, DeployerError::DuplicateDeployment);
        }

        let index = self.count(record.chain_id);
        set_address(
            &self.env,
            &DataKey::Gauge(self.kind, record.chain_id, index),
            &record.address,
        );
        set_count(&self.env, self.kind, record.chain_id, index + 1);
        set_address(
            &self.env,
            &DataKey::BySalt(self.kind, record.chain_id, record.salt.clone()),
            &record.address,
        );
        if let Some(asset) = &record.underlying_asset {
            set_address(
                &self.env,
                &DataKey::ByAsset(self.kind, record.chain_id, asset.clone()),
                &record.address,
            );
        }
        set_record(&self.env, self.kind, record);

        DeployerEvents::new(&self.env).register(self.kind, record);
    }

    pub fn set_killed(&self, gauge: &Address, killed: bool) -> GaugeRecord {
        let mut record = self.require_record(gauge);
        record.killed = killed;
        set_record(&self.env, self.kind, &record);
        DeployerEvents::new(&self.env).set_killed(gauge.clone(), killed);
        record
    }

    // Nonces are shared by both registry kinds of a factory.
    pub fn nonce(&self, deployer: &Address) -> u64 {
        get_nonce(&self.env, deployer.clone())
    }

    // Returns the current nonce and advances it.
    pub fn next_nonce(&self, deployer: &Address) -> u64 {
        let nonce = self.nonce(deployer);
        set_nonce(&self.env, deployer.clone(), nonce + 1);
        nonce
    }

    // Explicit salt wins; otherwise one is derived from the nonce being consumed.
    pub fn resolve_salt(&self, deployer: &Address, salt: Option<BytesN<32>>) -> (BytesN<32>, u64) {
        let nonce = self.next_nonce(deployer);
        let salt = match salt {
            Some(salt) => salt,
            None => default_salt(&self.env, deployer, nonce),
        };
        (salt, nonce)
    }
}
