use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    VotingEscrow,
    Messenger,
    ChildOracle(u32),
}

generate_instance_storage_getter_and_setter!(voting_escrow, DataKey::VotingEscrow, Address);

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

pub(crate) fn get_child_oracle(e: &Env, chain_id: u32) -> Option<Address> {
    let key = DataKey::ChildOracle(chain_id);
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn set_child_oracle(e: &Env, chain_id: u32, child_oracle: &Option<Address>) {
    let key = DataKey::ChildOracle(chain_id);
    match child_oracle {
        Some(child_oracle) => {
            e.storage().persistent().set(&key, child_oracle);
            bump_persistent(e, &key);
        }
        None => e.storage().persistent().remove(&key),
    }
}
