use crate::events::Events;
use crate::interface::{AdminInterface, RootGaugeFactoryTrait};
use crate::storage::{
    get_chain_id, get_child, get_controller, get_implementation, get_messenger, get_minter,
    get_mirrored, get_token, require_child, set_chain_id, set_child, set_controller,
    set_implementation, set_messenger, set_minter, set_mirrored, set_token, ChildConfig,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::{ManagedContract, TransferableContract};
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::{require_owner, require_owner_or_manager};
use cross_chain::errors::CrossChainError;
use cross_chain::gate::require_sender;
use cross_chain::messenger::send;
use cross_chain::{require_messenger, Payload};
use gauge_deployer::errors::DeployerError;
use gauge_deployer::{effective_salt, predict_address, GaugeRecord, GaugeRegistry};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, Address, BytesN, Env, IntoVal, Symbol, Vec,
};
use utils::bump::bump_instance;

#[contract]
pub struct RootGaugeFactory;

#[contractimpl]
impl RootGaugeFactory {
    // Initializes the root chain factory.
    //
    // # Arguments
    //
    // * `owner` - The factory owner. Also the initial manager.
    // * `chain_id` - Chain the factory lives on.
    // * `token` - The emission token.
    // * `controller` - Gauge controller handed to every root gauge.
    // * `minter` - Minter handed to every root gauge.
    // * `gauge_wasm_hash` - Wasm hash of the root gauge implementation.
    pub fn __constructor(
        e: Env,
        owner: Address,
        chain_id: u32,
        token: Address,
        controller: Address,
        minter: Address,
        gauge_wasm_hash: BytesN<32>,
    ) {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::Owner, &owner);
        access_control.set_role_address(&Role::Manager, &owner);
        set_chain_id(&e, &chain_id);
        set_token(&e, &token);
        set_controller(&e, &controller);
        set_minter(&e, &minter);
        set_implementation(&e, &gauge_wasm_hash);
    }
}

fn require_child_messenger(e: &Env, messenger: &Address, origin_chain_id: u32, sender: &Address) {
    require_messenger(e, messenger, get_messenger(e));
    require_sender(
        e,
        sender,
        get_child(e, origin_chain_id).map(|config| config.factory),
    );
}

fn transmit(e: &Env, gauge: &Address, config: &ChildConfig) -> u128 {
    let amount: u128 = e.invoke_contract(
        gauge,
        &Symbol::new(e, "transmit_emissions"),
        Vec::from_array(
            e,
            [
                e.current_contract_address().to_val(),
                config.bridger.to_val(),
                config.factory.to_val(),
            ],
        ),
    );
    Events::new(e).transmit_emissions(gauge.clone(), amount);
    amount
}

#[contractimpl]
impl RootGaugeFactoryTrait for RootGaugeFactory {
    fn deploy_gauge(e: Env, deployer: Address, chain_id: u32, salt: BytesN<32>) -> Address {
        deployer.require_auth();
        bump_instance(&e);
        require_child(&e, chain_id);

        // both halves of a pair derive each other from the salt, never from the nonce
        let registry = GaugeRegistry::local(&e);
        let nonce = registry.next_nonce(&deployer);
        registry.require_unique(chain_id, &salt, None);

        let gauge = e
            .deployer()
            .with_current_contract(effective_salt(&e, chain_id, &deployer, &salt))
            .deploy_v2(
                get_implementation(&e),
                (
                    e.current_contract_address(),
                    get_token(&e),
                    get_controller(&e),
                    get_minter(&e),
                    chain_id,
                    deployer.clone(),
                    salt.clone(),
                ),
            );

        registry.register(&GaugeRecord {
            address: gauge.clone(),
            chain_id,
            underlying_asset: None,
            deployer,
            salt,
            creation_nonce: nonce,
            killed: false,
        });
        gauge
    }

    fn deploy_child_gauge(
        e: Env,
        deployer: Address,
        chain_id: u32,
        lp_token: Address,
        salt: BytesN<32>,
        manager: Option<Address>,
    ) -> Address {
        deployer.require_auth();
        bump_instance(&e);

        let config = require_child(&e, chain_id);
        let messenger = match get_messenger(&e) {
            Some(messenger) => messenger,
            None => panic_with_error!(&e, CrossChainError::MessengerNotConfigured),
        };

        let registry = GaugeRegistry::remote(&e);
        let nonce = registry.next_nonce(&deployer);
        let gauge = predict_address(&e, &config.factory, chain_id, &deployer, &salt);
        registry.register(&GaugeRecord {
            address: gauge.clone(),
            chain_id,
            underlying_asset: Some(lp_token.clone()),
            deployer: deployer.clone(),
            salt: salt.clone(),
            creation_nonce: nonce,
            killed: false,
        });

        let manager = manager.unwrap_or(deployer.clone());
        let message_id = send(
            &e,
            &messenger,
            chain_id,
            Vec::from_array(&e, [config.factory]),
            Vec::from_array(
                &e,
                [Payload {
                    function: Symbol::new(&e, "deploy_gauge_from_root"),
                    args: Vec::from_array(
                        &e,
                        [
                            lp_token.to_val(),
                            salt.into_val(&e),
                            deployer.to_val(),
                            manager.to_val(),
                        ],
                    ),
                }],
            ),
            Vec::from_array(&e, [e.current_contract_address()]),
            Vec::from_array(&e, [nonce]),
        );

        Events::new(&e).deploy_child_gauge(chain_id, lp_token, gauge.clone(), message_id);
        gauge
    }

    fn messenger_callback(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        nonce: u64,
        result: Address,
    ) {
        require_child_messenger(&e, &messenger, origin_chain_id, &sender);

        let record = GaugeRegistry::remote(&e).require_record(&result);
        if record.chain_id != origin_chain_id || record.creation_nonce != nonce {
            panic_with_error!(&e, DeployerError::GaugeNotFound);
        }
        if !get_mirrored(&e, result.clone()) {
            set_mirrored(&e, result.clone(), &true);
            Events::new(&e).set_mirrored(result);
        }
    }

    fn transmit_emissions(e: Env, gauge: Address) -> u128 {
        bump_instance(&e);
        let record = GaugeRegistry::local(&e).require_record(&gauge);
        transmit(&e, &gauge, &require_child(&e, record.chain_id))
    }

    fn transmit_emissions_from_child(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        gauge: Address,
    ) -> u128 {
        require_child_messenger(&e, &messenger, origin_chain_id, &sender);
        bump_instance(&e);

        // the request names the root gauge; it must be paired with the sending chain
        let record = GaugeRegistry::local(&e).require_record(&gauge);
        if record.chain_id != origin_chain_id {
            panic_with_error!(&e, DeployerError::GaugeNotFound);
        }
        transmit(&e, &gauge, &require_child(&e, origin_chain_id))
    }

    fn get_child(e: Env, chain_id: u32) -> Option<ChildConfig> {
        get_child(&e, chain_id)
    }

    fn get_child_factory(e: Env, chain_id: u32) -> Option<Address> {
        get_child(&e, chain_id).map(|config| config.factory)
    }

    fn get_bridger(e: Env, chain_id: u32) -> Option<Address> {
        get_child(&e, chain_id).map(|config| config.bridger)
    }

    fn get_bridge_cost(e: Env, chain_id: u32) -> i128 {
        e.invoke_contract(
            &require_child(&e, chain_id).bridger,
            &Symbol::new(&e, "cost"),
            Vec::new(&e),
        )
    }

    fn get_gauge(e: Env, chain_id: u32, index: u32) -> Address {
        GaugeRegistry::local(&e).get(chain_id, index)
    }

    fn get_gauge_count(e: Env, chain_id: u32) -> u32 {
        GaugeRegistry::local(&e).count(chain_id)
    }

    fn is_valid_gauge(e: Env, gauge: Address) -> bool {
        GaugeRegistry::local(&e).contains(&gauge)
    }

    fn gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord> {
        GaugeRegistry::local(&e).record(&gauge)
    }

    fn get_child_gauge(e: Env, chain_id: u32, index: u32) -> Address {
        GaugeRegistry::remote(&e).get(chain_id, index)
    }

    fn get_child_gauge_count(e: Env, chain_id: u32) -> u32 {
        GaugeRegistry::remote(&e).count(chain_id)
    }

    fn child_gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord> {
        GaugeRegistry::remote(&e).record(&gauge)
    }

    fn is_mirrored(e: Env, gauge: Address) -> bool {
        get_mirrored(&e, gauge)
    }

    fn nonces(e: Env, deployer: Address) -> u64 {
        GaugeRegistry::local(&e).nonce(&deployer)
    }

    fn predict_gauge_address(e: Env, chain_id: u32, deployer: Address, salt: BytesN<32>) -> Address {
        predict_address(&e, &e.current_contract_address(), chain_id, &deployer, &salt)
    }

    fn predict_child_gauge_address(
        e: Env,
        chain_id: u32,
        deployer: Address,
        salt: BytesN<32>,
    ) -> Address {
        let config = require_child(&e, chain_id);
        predict_address(&e, &config.factory, chain_id, &deployer, &salt)
    }

    fn token(e: Env) -> Address {
        get_token(&e)
    }

    fn controller(e: Env) -> Address {
        get_controller(&e)
    }

    fn minter(e: Env) -> Address {
        get_minter(&e)
    }

    fn chain_id(e: Env) -> u32 {
        get_chain_id(&e)
    }

    fn implementation(e: Env) -> BytesN<32> {
        get_implementation(&e)
    }

    fn messenger(e: Env) -> Option<Address> {
        get_messenger(&e)
    }
}

#[contractimpl]
impl AdminInterface for RootGaugeFactory {
    fn set_child(
        e: Env,
        caller: Address,
        chain_id: u32,
        bridger: Address,
        child_factory: Address,
        child_implementation: BytesN<32>,
    ) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_child(
            &e,
            chain_id,
            &ChildConfig {
                bridger: bridger.clone(),
                factory: child_factory.clone(),
                implementation: child_implementation.clone(),
            },
        );
        Events::new(&e).update_child(chain_id, bridger, child_factory, child_implementation);
    }

    fn set_bridger(e: Env, caller: Address, chain_id: u32, bridger: Address) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        let mut config = require_child(&e, chain_id);
        config.bridger = bridger;
        set_child(&e, chain_id, &config);
        Events::new(&e).update_child(chain_id, config.bridger, config.factory, config.implementation);
    }

    fn set_implementation(e: Env, caller: Address, implementation: BytesN<32>) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_implementation(&e, &implementation);
        Events::new(&e).update_implementation(implementation);
    }

    fn set_messenger(e: Env, caller: Address, messenger: Option<Address>) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_messenger(&e, &messenger);
        Events::new(&e).update_messenger(messenger);
    }

    fn set_killed(e: Env, caller: Address, gauge: Address, is_killed: bool) {
        caller.require_auth();
        require_owner(&e, &caller);

        GaugeRegistry::local(&e).set_killed(&gauge, is_killed);
        e.invoke_contract::<()>(
            &gauge,
            &Symbol::new(&e, "set_killed"),
            Vec::from_array(
                &e,
                [
                    e.current_contract_address().to_val(),
                    is_killed.into_val(&e),
                ],
            ),
        );
    }
}

#[contractimpl]
impl TransferableContract for RootGaugeFactory {
    fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);
        AccessControl::new(&e).commit_transfer_ownership(&Role::Owner, &new_owner);
        AccessControlEvents::new(&e).commit_transfer_ownership(Role::Owner, new_owner);
    }

    fn accept_transfer_ownership(e: Env, new_owner: Address) {
        new_owner.require_auth();
        let owner =
            AccessControl::new(&e).accept_transfer_ownership(&Role::Owner, &new_owner);
        AccessControlEvents::new(&e).accept_transfer_ownership(Role::Owner, owner);
    }

    fn owner(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Owner)
    }

    fn future_owner(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_address(&Role::Owner)
    }
}

#[contractimpl]
impl ManagedContract for RootGaugeFactory {
    fn set_manager(e: Env, caller: Address, manager: Address) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);
        AccessControl::new(&e).set_role_address(&Role::Manager, &manager);
        AccessControlEvents::new(&e).set_manager(manager);
    }

    fn manager(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Manager)
    }
}
