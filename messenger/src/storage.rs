use cross_chain::errors::CrossChainError;
use cross_chain::Message;
use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

#[derive(Clone)]
#[contracttype]
pub(crate) struct MessageKey {
    pub origin_chain_id: u32,
    pub id: u64,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    ChainId,
    MessageCount,
    Outbox(u64),
    Relayer(u32),
    Receipts(MessageKey),
}

generate_instance_storage_getter_and_setter!(chain_id, DataKey::ChainId, u32);
generate_instance_storage_getter_and_setter_with_default!(
    message_count,
    DataKey::MessageCount,
    u64,
    0
);

pub(crate) fn get_message(e: &Env, id: u64) -> Message {
    let key = DataKey::Outbox(id);
    match e.storage().persistent().get(&key) {
        Some(message) => {
            bump_persistent(e, &key);
            message
        }
        None => panic_with_error!(e, CrossChainError::MessageNotFound),
    }
}

pub(crate) fn set_message(e: &Env, message: &Message) {
    let key = DataKey::Outbox(message.id);
    e.storage().persistent().set(&key, message);
    bump_persistent(e, &key);
}

pub(crate) fn get_relayer(e: &Env, origin_chain_id: u32) -> Option<Address> {
    let key = DataKey::Relayer(origin_chain_id);
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn set_relayer(e: &Env, origin_chain_id: u32, relayer: &Option<Address>) {
    let key = DataKey::Relayer(origin_chain_id);
    match relayer {
        Some(relayer) => {
            e.storage().persistent().set(&key, relayer);
            bump_persistent(e, &key);
        }
        None => e.storage().persistent().remove(&key),
    }
}

pub(crate) fn get_receipts(e: &Env, key: MessageKey) -> u32 {
    let key = DataKey::Receipts(key);
    match e.storage().persistent().get(&key) {
        Some(value) => {
            bump_persistent(e, &key);
            value
        }
        None => 0,
    }
}

pub(crate) fn set_receipts(e: &Env, key: MessageKey, value: u32) {
    let key = DataKey::Receipts(key);
    e.storage().persistent().set(&key, &value);
    bump_persistent(e, &key);
}
