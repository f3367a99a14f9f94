use paste::paste;
use soroban_sdk::{contracttype, panic_with_error, Address, BytesN, Env, String};
use utils::bump::{bump_instance, bump_persistent};
use utils::storage_errors::StorageError;
use utils::{
    generate_instance_storage_getter, generate_instance_storage_getter_and_setter,
    generate_instance_storage_getter_and_setter_with_default,
    generate_instance_storage_getter_with_default, generate_instance_storage_setter,
    generate_persistent_map_accessors,
};

#[derive(Clone)]
#[contracttype]
enum DataKey {
    // configuration
    Factory,
    Token,
    LpToken,
    ChainId,
    Deployer,
    Salt,
    IsKilled,

    // receipt token
    Name,
    Symbol,
    Decimals,
    TotalSupply,

    // inflation checkpoints
    Period,
    TotalEmissions,
    WorkingSupply,
    InflationRate(u64),
    PeriodTimestamp(u64),
    IntegrateInvSupply(u64),

    // per user
    WorkingBalance(Address),
    IntegrateInvSupplyOf(Address),
    IntegrateCheckpointOf(Address),
    IntegrateFraction(Address),
}

generate_instance_storage_getter_and_setter!(factory, DataKey::Factory, Address);
generate_instance_storage_getter_and_setter!(token, DataKey::Token, Address);
generate_instance_storage_getter_and_setter!(lp_token, DataKey::LpToken, Address);
generate_instance_storage_getter_and_setter!(chain_id, DataKey::ChainId, u32);
generate_instance_storage_getter_and_setter!(deployer, DataKey::Deployer, Address);
generate_instance_storage_getter_and_setter!(salt, DataKey::Salt, BytesN<32>);
generate_instance_storage_getter_and_setter_with_default!(
    is_killed,
    DataKey::IsKilled,
    bool,
    false
);

generate_instance_storage_getter_and_setter!(name, DataKey::Name, String);
generate_instance_storage_getter_and_setter!(symbol, DataKey::Symbol, String);
generate_instance_storage_getter_and_setter!(decimals, DataKey::Decimals, u32);
generate_instance_storage_getter_and_setter_with_default!(
    total_supply,
    DataKey::TotalSupply,
    u128,
    0
);

generate_instance_storage_getter_and_setter_with_default!(period, DataKey::Period, u64, 0);
generate_instance_storage_getter_and_setter_with_default!(
    total_emissions,
    DataKey::TotalEmissions,
    u128,
    0
);
generate_instance_storage_getter_and_setter_with_default!(
    working_supply,
    DataKey::WorkingSupply,
    u128,
    0
);

// inflation rate is keyed by week number, checkpoint arrays by period index
generate_persistent_map_accessors!(inflation_rate, DataKey::InflationRate, u64, u128, 0);
generate_persistent_map_accessors!(period_timestamp, DataKey::PeriodTimestamp, u64, u64, 0);
generate_persistent_map_accessors!(
    integrate_inv_supply,
    DataKey::IntegrateInvSupply,
    u64,
    u128,
    0
);

generate_persistent_map_accessors!(working_balance, DataKey::WorkingBalance, Address, u128, 0);
generate_persistent_map_accessors!(
    integrate_inv_supply_of,
    DataKey::IntegrateInvSupplyOf,
    Address,
    u128,
    0
);
generate_persistent_map_accessors!(
    integrate_checkpoint_of,
    DataKey::IntegrateCheckpointOf,
    Address,
    u64,
    0
);
generate_persistent_map_accessors!(
    integrate_fraction,
    DataKey::IntegrateFraction,
    Address,
    u128,
    0
);
