use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter, generate_persistent_map_accessors,
};

#[derive(Clone)]
#[contracttype]
pub(crate) struct MintKey {
    pub user: Address,
    pub gauge: Address,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Token,
    ChainId,
    Implementation,
    Messenger,
    VotingEscrow,
    RootFactory,
    RootChainId,

    Minted(MintKey),
    LastRequest(Address),
    Mirrored(Address),
}

generate_instance_storage_getter_and_setter!(token, DataKey::Token, Address);
generate_instance_storage_getter_and_setter!(chain_id, DataKey::ChainId, u32);
generate_instance_storage_getter_and_setter!(implementation, DataKey::Implementation, BytesN<32>);

generate_persistent_map_accessors!(minted, DataKey::Minted, MintKey, u128, 0);
generate_persistent_map_accessors!(mirrored, DataKey::Mirrored, Address, bool, false);

pub(crate) fn get_last_request(e: &Env, gauge: &Address) -> Option<u64> {
    let key = DataKey::LastRequest(gauge.clone());
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn set_last_request(e: &Env, gauge: &Address, timestamp: u64) {
    let key = DataKey::LastRequest(gauge.clone());
    e.storage().persistent().set(&key, &timestamp);
    bump_persistent(e, &key);
}

// Optional collaborators. Unset until configured by the owner.

pub(crate) fn get_messenger(e: &Env) -> Option<Address> {
    bump_instance(e);
    e.storage().instance().get(&DataKey::Messenger)
}

pub(crate) fn set_messenger(e: &Env, messenger: &Option<Address>) {
    set_optional(e, &DataKey::Messenger, messenger);
}

pub(crate) fn get_voting_escrow(e: &Env) -> Option<Address> {
    bump_instance(e);
    e.storage().instance().get(&DataKey::VotingEscrow)
}

pub(crate) fn set_voting_escrow(e: &Env, voting_escrow: &Option<Address>) {
    set_optional(e, &DataKey::VotingEscrow, voting_escrow);
}

pub(crate) fn get_root_factory(e: &Env) -> Option<(u32, Address)> {
    bump_instance(e);
    let chain_id: Option<u32> = e.storage().instance().get(&DataKey::RootChainId);
    let factory: Option<Address> = e.storage().instance().get(&DataKey::RootFactory);
    match (chain_id, factory) {
        (Some(chain_id), Some(factory)) => Some((chain_id, factory)),
        _ => None,
    }
}

pub(crate) fn set_root_factory(e: &Env, root_chain_id: u32, root_factory: &Address) {
    bump_instance(e);
    e.storage()
        .instance()
        .set(&DataKey::RootChainId, &root_chain_id);
    e.storage()
        .instance()
        .set(&DataKey::RootFactory, root_factory);
}

fn set_optional(e: &Env, key: &DataKey, value: &Option<Address>) {
    bump_instance(e);
    match value {
        Some(value) => e.storage().instance().set(key, value),
        None => e.storage().instance().remove(key),
    }
}
