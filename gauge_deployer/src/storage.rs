use crate::registry::{GaugeRecord, RegistryKind};
use soroban_sdk::{contracttype, Address, BytesN, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Count(RegistryKind, u32),
    Gauge(RegistryKind, u32, u32),
    ByAsset(RegistryKind, u32, Address),
    BySalt(RegistryKind, u32, BytesN<32>),
    Record(RegistryKind, Address),
    Nonce(Address),
}

pub(crate) fn get_count(e: &Env, kind: RegistryKind, chain_id: u32) -> u32 {
    let key = DataKey::Count(kind, chain_id);
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub(crate) fn set_count(e: &Env, kind: RegistryKind, chain_id: u32, value: u32) {
    let key = DataKey::Count(kind, chain_id);
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}

pub(crate) fn get_address(e: &Env, key: &DataKey) -> Option<Address> {
    let value = e.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(e, key);
    }
    value
}

pub(crate) fn set_address(e: &Env, key: &DataKey, value: &Address) {
    e.storage().persistent().set(key, value);
    bump_persistent(e, key);
}

pub(crate) fn get_record(e: &Env, kind: RegistryKind, gauge: Address) -> Option<GaugeRecord> {
    let key = DataKey::Record(kind, gauge);
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn set_record(e: &Env, kind: RegistryKind, record: &GaugeRecord) {
    let key = DataKey::Record(kind, record.address.clone());
    e.storage().persistent().set(&key, record);
    bump_persistent(e, &key);
}

pub(crate) fn get_nonce(e: &Env, deployer: Address) -> u64 {
    let key = DataKey::Nonce(deployer);
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub(crate) fn set_nonce(e: &Env, deployer: Address, value: u64) {
    let key = DataKey::Nonce(deployer);
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
