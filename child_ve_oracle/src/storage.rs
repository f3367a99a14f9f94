use cross_chain::{GlobalPoint, UserPoint};
use soroban_sdk::{contracttype, Address, Env};
use utils::bump::{bump_instance, bump_persistent};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Messenger,
    RootChainId,
    RootOracle,
    GlobalPoint,
    UserPoint(Address),
}

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

pub(crate) fn get_root_oracle(e: &Env) -> Option<(u32, Address)> {
    bump_instance(e);
    let chain_id: Option<u32> = e.storage().instance().get(&DataKey::RootChainId);
    let oracle: Option<Address> = e.storage().instance().get(&DataKey::RootOracle);
    match (chain_id, oracle) {
        (Some(chain_id), Some(oracle)) => Some((chain_id, oracle)),
        _ => None,
    }
}

pub(crate) fn set_root_oracle(e: &Env, root_chain_id: u32, root_oracle: &Address) {
    bump_instance(e);
    e.storage()
        .instance()
        .set(&DataKey::RootChainId, &root_chain_id);
    e.storage().instance().set(&DataKey::RootOracle, root_oracle);
}

pub(crate) fn get_global_point(e: &Env) -> Option<GlobalPoint> {
    bump_instance(e);
    e.storage().instance().get(&DataKey::GlobalPoint)
}

pub(crate) fn set_global_point(e: &Env, point: &GlobalPoint) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::GlobalPoint, point);
}

pub(crate) fn get_user_point(e: &Env, user: &Address) -> Option<UserPoint> {
    let key = DataKey::UserPoint(user.clone());
    let value = e.storage().persistent().get(&key);
    if value.is_some() {
        bump_persistent(e, &key);
    }
    value
}

pub(crate) fn set_user_point(e: &Env, user: &Address, point: &UserPoint) {
    let key = DataKey::UserPoint(user.clone());
    e.storage().persistent().set(&key, point);
    bump_persistent(e, &key);
}
