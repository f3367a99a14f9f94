use crate::errors::RootFactoryError;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter, generate_persistent_map_accessors,
};

// Everything the root side needs to know about a child chain.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct ChildConfig {
    pub bridger: Address,
    pub factory: Address,
    pub implementation: BytesN<32>,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Token,
    Controller,
    Minter,
    ChainId,
    Implementation,
    Messenger,

    Child(u32),
    Mirrored(Address),
}

generate_instance_storage_getter_and_setter!(token, DataKey::Token, Address);
generate_instance_storage_getter_and_setter!(controller, DataKey::Controller, Address);
generate_instance_storage_getter_and_setter!(minter, DataKey::Minter, Address);
generate_instance_storage_getter_and_setter!(chain_id, DataKey::ChainId, u32);
generate_instance_storage_getter_and_setter!(implementation, DataKey::Implementation, BytesN<32>);

generate_persistent_map_accessors!(mirrored, DataKey::Mirrored, Address, bool, false);

pub(crate) fn get_messenger(e: &Env) -> Option<Address> {
    bump_instance(e);
    e.storage().instance().get(&DataKey::Messenger)
}

pub(crate) fn set_messenger(e: &Env, messenger: &Option<Address>) {
    bump_instance(e);
    match messenger {
        Some(messenger) => e.storage().instance().set(&DataKey::Messenger, messenger),
        None => e.storage().instance().remove(&DataKey::Messenger),
    }
}

pub(crate) fn get_child(e: &Env, chain_id: u32) -> Option<ChildConfig> {
    let key = DataKey::Child(chain_id);
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn require_child(e: &Env, chain_id: u32) -> ChildConfig {
    match get_child(e, chain_id) {
        Some(config) => config,
        None => panic_with_error!(e, RootFactoryError::ChildNotConfigured),
    }
}

pub(crate) fn set_child(e: &Env, chain_id: u32, config: &ChildConfig) {
    let key = DataKey::Child(chain_id);
    e.storage().persistent().set(&key, config);
    bump_persistent(e, &key);
}
