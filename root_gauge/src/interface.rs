use crate::storage::InflationParams;
use soroban_sdk::{Address, Env};

pub trait RootGaugeTrait {
    // Books emissions of the weeks elapsed since the last checkpoint.
    fn user_checkpoint(e: Env, user: Address) -> bool;

    // Mints what was booked and not yet sent and bridges it to the child gauge.
    // Returns the amount bridged.
    fn transmit_emissions(e: Env, factory: Address, bridger: Address, child_factory: Address) -> u128;

    fn set_killed(e: Env, factory: Address, is_killed: bool);

    fn total_emissions(e: Env) -> u128;
    fn transmitted(e: Env) -> u128;
    fn inflation_params(e: Env) -> InflationParams;
    fn last_period(e: Env) -> u64;
    fn is_killed(e: Env) -> bool;
    fn factory(e: Env) -> Address;
    fn token(e: Env) -> Address;
    fn chain_id(e: Env) -> u32;

    // Child gauge paired with this gauge, once the child chain is configured on the factory.
    fn child_gauge(e: Env) -> Option<Address>;
}
