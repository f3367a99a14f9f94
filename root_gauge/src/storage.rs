use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env};
use utils::bump::bump_instance;
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
};

// Emission schedule copied from the minter. `rate` is in tokens per second.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct InflationParams {
    pub rate: u128,
    pub finish_time: u64,
}

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Factory,
    Token,
    Controller,
    Minter,
    ChainId,
    Deployer,
    Salt,

    InflationParams,
    LastPeriod,
    TotalEmissions,
    Transmitted,
    IsKilled,
}

generate_instance_storage_getter_and_setter!(factory, DataKey::Factory, Address);
generate_instance_storage_getter_and_setter!(token, DataKey::Token, Address);
generate_instance_storage_getter_and_setter!(controller, DataKey::Controller, Address);
generate_instance_storage_getter_and_setter!(minter, DataKey::Minter, Address);
generate_instance_storage_getter_and_setter!(chain_id, DataKey::ChainId, u32);
generate_instance_storage_getter_and_setter!(deployer, DataKey::Deployer, Address);
generate_instance_storage_getter_and_setter!(salt, DataKey::Salt, BytesN<32>);

generate_instance_storage_getter_and_setter!(
    inflation_params,
    DataKey::InflationParams,
    InflationParams
);
generate_instance_storage_getter_and_setter!(last_period, DataKey::LastPeriod, u64);
generate_instance_storage_getter_and_setter_with_default!(
    total_emissions,
    DataKey::TotalEmissions,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    transmitted,
    DataKey::Transmitted,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    is_killed,
    DataKey::IsKilled,
    bool,
    false
);
