use crate::events::Events;
use crate::interface::{AdminInterface, ChildGaugeFactoryTrait};
use crate::storage::{
    get_chain_id, get_implementation, get_last_request, get_messenger, get_minted, get_mirrored,
    get_root_factory, get_token, get_voting_escrow, set_chain_id, set_implementation,
    set_last_request, set_messenger, set_minted, set_mirrored, set_root_factory, set_token,
    set_voting_escrow, MintKey,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::{ManagedContract, TransferableContract};
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::{require_owner, require_owner_or_manager};
use cross_chain::gate::require_sender;
use cross_chain::messenger::send_call;
use cross_chain::require_messenger;
use gauge_deployer::errors::DeployerError;
use gauge_deployer::{effective_salt, predict_address, GaugeRecord, GaugeRegistry};
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{
    contract, contractimpl, log, panic_with_error, Address, BytesN, Env, IntoVal, Symbol, Vec,
};
use utils::bump::bump_instance;
use utils::constant::WEEK;

#[contract]
pub struct ChildGaugeFactory;

#[contractimpl]
impl ChildGaugeFactory {
    // Initializes the child chain factory.
    //
    // # Arguments
    //
    // * `owner` - The factory owner. Also the initial manager.
    // * `token` - The bridged emission token paid out by `mint`.
    // * `chain_id` - Chain the factory lives on.
    // * `gauge_wasm_hash` - Wasm hash of the child gauge implementation.
    pub fn __constructor(
        e: Env,
        owner: Address,
        token: Address,
        chain_id: u32,
        gauge_wasm_hash: BytesN<32>,
    ) {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::Owner, &owner);
        access_control.set_role_address(&Role::Manager, &owner);
        set_token(&e, &token);
        set_chain_id(&e, &chain_id);
        set_implementation(&e, &gauge_wasm_hash);
    }
}

fn deploy(
    e: &Env,
    deployer: &Address,
    lp_token: Address,
    salt: BytesN<32>,
    creation_nonce: u64,
    manager: Address,
) -> Address {
    let chain_id = get_chain_id(e);
    let registry = GaugeRegistry::local(e);
    registry.require_unique(chain_id, &salt, Some(&lp_token));

    let gauge = e
        .deployer()
        .with_current_contract(effective_salt(e, chain_id, deployer, &salt))
        .deploy_v2(
            get_implementation(e),
            (
                e.current_contract_address(),
                get_token(e),
                lp_token.clone(),
                manager,
                chain_id,
                deployer.clone(),
                salt.clone(),
            ),
        );

    registry.register(&GaugeRecord {
        address: gauge.clone(),
        chain_id,
        underlying_asset: Some(lp_token),
        deployer: deployer.clone(),
        salt,
        creation_nonce,
        killed: false,
    });
    gauge
}

// Sends a transmit request for `gauge` to the root factory. No-op for gauges
// the root chain does not know about, and throttled to once per week.
fn request(e: &Env, gauge: &Address) -> bool {
    let record = match GaugeRegistry::local(e).record(gauge) {
        Some(record) => record,
        None => return false,
    };
    if record.killed || !get_mirrored(e, gauge.clone()) {
        return false;
    }

    let now = e.ledger().timestamp();
    if let Some(last_request) = get_last_request(e, gauge) {
        if last_request / WEEK >= now / WEEK {
            return false;
        }
    }

    let (messenger, (root_chain_id, root_factory)) = match (get_messenger(e), get_root_factory(e))
    {
        (Some(messenger), Some(root)) => (messenger, root),
        _ => {
            log!(e, "emissions request skipped, root not configured");
            return false;
        }
    };

    let root_gauge = predict_address(e, &root_factory, record.chain_id, &record.deployer, &record.salt);
    send_call(
        e,
        &messenger,
        root_chain_id,
        &root_factory,
        "transmit_emissions_from_child",
        Vec::from_array(e, [root_gauge.to_val()]),
    );
    set_last_request(e, gauge, now);
    Events::new(e).request_emissions(gauge.clone(), root_gauge);
    true
}

fn mint_for(e: &Env, user: &Address, gauge: &Address) -> u128 {
    if !GaugeRegistry::local(e).contains(gauge) {
        panic_with_error!(e, DeployerError::GaugeNotFound);
    }

    let total: u128 = e.invoke_contract(
        gauge,
        &Symbol::new(e, "mint_checkpoint"),
        Vec::from_array(
            e,
            [
                e.current_contract_address().to_val(),
                user.to_val(),
                get_voting_escrow(e).into_val(e),
            ],
        ),
    );

    let key = MintKey {
        user: user.clone(),
        gauge: gauge.clone(),
    };
    let to_mint = total - get_minted(e, key.clone());
    if to_mint > 0 {
        Client::new(e, &get_token(e)).transfer(
            &e.current_contract_address(),
            user,
            &(to_mint as i128),
        );
        set_minted(e, key, &total);
        Events::new(e).minted(user.clone(), gauge.clone(), total);
    }
    to_mint
}

#[contractimpl]
impl ChildGaugeFactoryTrait for ChildGaugeFactory {
    fn deploy_gauge(
        e: Env,
        deployer: Address,
        lp_token: Address,
        salt: Option<BytesN<32>>,
        manager: Option<Address>,
    ) -> Address {
        deployer.require_auth();
        bump_instance(&e);

        let (salt, nonce) = GaugeRegistry::local(&e).resolve_salt(&deployer, salt);
        let manager = manager.unwrap_or(deployer.clone());
        deploy(&e, &deployer, lp_token, salt, nonce, manager)
    }

    fn deploy_gauge_from_root(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        lp_token: Address,
        salt: BytesN<32>,
        deployer: Address,
        manager: Address,
    ) -> Address {
        require_messenger(&e, &messenger, get_messenger(&e));
        require_sender(
            &e,
            &sender,
            get_root_factory(&e)
                .filter(|(root_chain_id, _)| *root_chain_id == origin_chain_id)
                .map(|(_, root_factory)| root_factory),
        );
        bump_instance(&e);

        let nonce = GaugeRegistry::local(&e).next_nonce(&deployer);
        let gauge = deploy(&e, &deployer, lp_token, salt, nonce, manager);
        set_mirrored(&e, gauge.clone(), &true);
        Events::new(&e).set_mirrored(gauge.clone(), true);
        gauge
    }

    fn request_emissions(e: Env, gauge: Address) -> bool {
        gauge.require_auth();
        request(&e, &gauge)
    }

    fn mint(e: Env, user: Address, gauge: Address) -> u128 {
        user.require_auth();
        bump_instance(&e);

        let minted = mint_for(&e, &user, &gauge);
        request(&e, &gauge);
        minted
    }

    fn mint_many(e: Env, user: Address, gauges: Vec<Address>) -> u128 {
        user.require_auth();
        bump_instance(&e);

        let mut minted = 0;
        for gauge in gauges.iter() {
            minted += mint_for(&e, &user, &gauge);
            request(&e, &gauge);
        }
        minted
    }

    fn minted(e: Env, user: Address, gauge: Address) -> u128 {
        get_minted(&e, MintKey { user, gauge })
    }

    fn last_request(e: Env, gauge: Address) -> u64 {
        get_last_request(&e, &gauge).unwrap_or(0)
    }

    fn is_mirrored(e: Env, gauge: Address) -> bool {
        get_mirrored(&e, gauge)
    }

    fn is_valid_gauge(e: Env, gauge: Address) -> bool {
        GaugeRegistry::local(&e).contains(&gauge)
    }

    fn get_gauge(e: Env, index: u32) -> Address {
        GaugeRegistry::local(&e).get(get_chain_id(&e), index)
    }

    fn get_gauge_count(e: Env) -> u32 {
        GaugeRegistry::local(&e).count(get_chain_id(&e))
    }

    fn get_gauge_from_lp_token(e: Env, lp_token: Address) -> Option<Address> {
        GaugeRegistry::local(&e).by_asset(get_chain_id(&e), &lp_token)
    }

    fn gauge_record(e: Env, gauge: Address) -> Option<GaugeRecord> {
        GaugeRegistry::local(&e).record(&gauge)
    }

    fn nonces(e: Env, deployer: Address) -> u64 {
        GaugeRegistry::local(&e).nonce(&deployer)
    }

    fn predict_gauge_address(e: Env, deployer: Address, salt: BytesN<32>) -> Address {
        predict_address(
            &e,
            &e.current_contract_address(),
            get_chain_id(&e),
            &deployer,
            &salt,
        )
    }

    fn token(e: Env) -> Address {
        get_token(&e)
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

    fn voting_escrow(e: Env) -> Option<Address> {
        get_voting_escrow(&e)
    }

    fn root_factory(e: Env) -> Option<Address> {
        get_root_factory(&e).map(|(_, root_factory)| root_factory)
    }

    fn root_chain_id(e: Env) -> Option<u32> {
        get_root_factory(&e).map(|(root_chain_id, _)| root_chain_id)
    }
}

#[contractimpl]
impl AdminInterface for ChildGaugeFactory {
    fn set_mirrored(e: Env, caller: Address, gauge: Address, mirrored: bool) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);
        GaugeRegistry::local(&e).require_record(&gauge);

        set_mirrored(&e, gauge.clone(), &mirrored);
        Events::new(&e).set_mirrored(gauge, mirrored);
    }

    fn set_messenger(e: Env, caller: Address, messenger: Option<Address>) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_messenger(&e, &messenger);
        Events::new(&e).update_messenger(messenger);
    }

    fn set_voting_escrow(e: Env, caller: Address, voting_escrow: Option<Address>) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_voting_escrow(&e, &voting_escrow);
        Events::new(&e).update_voting_escrow(voting_escrow);
    }

    fn set_implementation(e: Env, caller: Address, implementation: BytesN<32>) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_implementation(&e, &implementation);
        Events::new(&e).update_implementation(implementation);
    }

    fn set_root_factory(e: Env, caller: Address, root_chain_id: u32, root_factory: Address) {
        caller.require_auth();
        require_owner_or_manager(&e, &caller);

        set_root_factory(&e, root_chain_id, &root_factory);
        Events::new(&e).update_root_factory(root_chain_id, root_factory);
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
impl TransferableContract for ChildGaugeFactory {
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
impl ManagedContract for ChildGaugeFactory {
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
