use crate::storage::ChildConfig;
use gauge_deployer::GaugeRecord;
use soroban_sdk::{Address, BytesN, Env};

pub trait RootGaugeFactoryTrait {
    // Deploy the root gauge streaming emissions to `chain_id`.
    // Pair it with a child gauge by using the same deployer and salt on both sides.
    fn deploy_gauge(e: Env, deployer: Address, chain_id: u32, salt: BytesN<32>) -> Address;

    // Ask the child factory of `chain_id` to deploy a gauge for `lp_token`.
    // Returns the predicted child gauge address, recorded without waiting for confirmation.
    fn deploy_child_gauge(
        e: Env,
        deployer: Address,
        chain_id: u32,
        lp_token: Address,
        salt: BytesN<32>,
        manager: Option<Address>,
    ) -> Address;

    // Delivery confirmation of a child deployment.
    fn messenger_callback(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        nonce: u64,
        result: Address,
    );

    // Bridge whatever `gauge` has accumulated. Permissionless, safe to repeat.
    fn transmit_emissions(e: Env, gauge: Address) -> u128;

    // Emission request of a child gauge, relayed by the messenger.
    fn transmit_emissions_from_child(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        gauge: Address,
    ) -> u128;

    fn get_child(e: Env, chain_id: u32) -> Option<ChildConfig>;
    fn get_child_factory(e: Env, chain_id: u32) -> Option<Address>;
    fn get_bridger(e: Env, chain_id: u32) -> Option<Address>;
    fn get_bridge_cost(e: Env, chain_id: u32) -> i128;

    fn get_gauge(e: Env, chain_id: u32, index: u32) -> Address;
    fn get_gauge_count(e: Env, chain_id: u32) -> u32;
    fn is_valid_gauge(e: Env, gauge: Address) -> bool;
    fn gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord>;

    fn get_child_gauge(e: Env, chain_id: u32, index: u32) -> Address;
    fn get_child_gauge_count(e: Env, chain_id: u32) -> u32;
    fn child_gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord>;
    fn is_mirrored(e: Env, gauge: Address) -> bool;

    fn nonces(e: Env, deployer: Address) -> u64;
    fn predict_gauge_address(e: Env, chain_id: u32, deployer: Address, salt: BytesN<32>) -> Address;
    fn predict_child_gauge_address(
        e: Env,
        chain_id: u32,
        deployer: Address,
        salt: BytesN<32>,
    ) -> Address;

    fn token(e: Env) -> Address;
    fn controller(e: Env) -> Address;
    fn minter(e: Env) -> Address;
    fn chain_id(e: Env) -> u32;
    fn implementation(e: Env) -> BytesN<32>;
    fn messenger(e: Env) -> Option<Address>;
}

pub trait AdminInterface {
    fn set_child(
        e: Env,
        caller: Address,
        chain_id: u32,
        bridger: Address,
        child_factory: Address,
        child_implementation: BytesN<32>,
    );
    fn set_bridger(e: Env, caller: Address, chain_id: u32, bridger: Address);
    fn set_implementation(e: Env, caller: Address, implementation: BytesN<32>);
    fn set_messenger(e: Env, caller: Address, messenger: Option<Address>);

    // Kill or revive a root gauge. Killed gauges stop booking emissions.
    fn set_killed(e: Env, caller: Address, gauge: Address, is_killed: bool);
}
