use crate::emissions::checkpoint;
use crate::errors::RootGaugeError;
use crate::events::Events;
use crate::external::{
    bridger_bridge, bridger_check, factory_child_factory, minter_future_epoch_time, minter_mint,
    minter_rate,
};
use crate::interface::RootGaugeTrait;
use crate::storage::{
    get_chain_id, get_deployer, get_factory, get_inflation_params, get_is_killed,
    get_last_period, get_minter, get_salt, get_token, get_total_emissions, get_transmitted,
    set_chain_id, set_controller, set_deployer, set_factory, set_inflation_params,
    set_is_killed, set_last_period, set_minter, set_salt, set_token, set_transmitted,
    InflationParams,
};
use access_control::errors::AccessControlError;
use gauge_deployer::predict_address;
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, BytesN, Env};
use utils::bump::bump_instance;
use utils::constant::WEEK;

#[contract]
pub struct RootGauge;

#[contractimpl]
impl RootGauge {
    // Initializes a gauge deployed by the root factory.
    //
    // # Arguments
    //
    // * `factory` - The root gauge factory.
    // * `token` - The emission token.
    // * `controller` - Gauge controller holding the voting weights.
    // * `minter` - Source of the emission rate and of minted tokens.
    // * `chain_id` - Child chain the emissions are bridged to.
    // * `deployer` - Account that requested the deployment.
    // * `salt` - Salt the deployment was requested with.
    pub fn __constructor(
        e: Env,
        factory: Address,
        token: Address,
        controller: Address,
        minter: Address,
        chain_id: u32,
        deployer: Address,
        salt: BytesN<32>,
    ) {
        set_factory(&e, &factory);
        set_token(&e, &token);
        set_controller(&e, &controller);
        set_minter(&e, &minter);
        set_chain_id(&e, &chain_id);
        set_deployer(&e, &deployer);
        set_salt(&e, &salt);

        set_inflation_params(&e, &current_params(&e, &minter));
        set_last_period(&e, &(e.ledger().timestamp() / WEEK));
    }
}

fn current_params(e: &Env, minter: &Address) -> InflationParams {
    InflationParams {
        rate: minter_rate(e, minter),
        finish_time: minter_future_epoch_time(e, minter),
    }
}

fn require_factory(e: &Env, factory: &Address) {
    factory.require_auth();
    if get_factory(e) != *factory {
        panic_with_error!(e, AccessControlError::Unauthorized);
    }
}

#[contractimpl]
impl RootGaugeTrait for RootGauge {
    fn user_checkpoint(e: Env, _user: Address) -> bool {
        bump_instance(&e);
        checkpoint(&e);
        true
    }

    fn transmit_emissions(
        e: Env,
        factory: Address,
        bridger: Address,
        child_factory: Address,
    ) -> u128 {
        require_factory(&e, &factory);
        bump_instance(&e);
        if !bridger_check(&e, &bridger) {
            panic_with_error!(&e, RootGaugeError::BridgeUnavailable);
        }

        checkpoint(&e);
        let total_emissions = get_total_emissions(&e);
        let amount = total_emissions - get_transmitted(&e);
        if amount == 0 {
            return 0;
        }

        let token = get_token(&e);
        minter_mint(&e, &get_minter(&e), amount);
        Client::new(&e, &token).transfer(
            &e.current_contract_address(),
            &bridger,
            &(amount as i128),
        );
        set_transmitted(&e, &total_emissions);

        let child_gauge = predict_address(
            &e,
            &child_factory,
            get_chain_id(&e),
            &get_deployer(&e),
            &get_salt(&e),
        );
        bridger_bridge(&e, &bridger, &token, &child_gauge, amount);
        Events::new(&e).transmit_emissions(child_gauge, bridger, amount);
        amount
    }

    fn set_killed(e: Env, factory: Address, is_killed: bool) {
        require_factory(&e, &factory);
        bump_instance(&e);

        if is_killed {
            set_inflation_params(
                &e,
                &InflationParams {
                    rate: 0,
                    finish_time: u64::MAX,
                },
            );
        } else {
            set_inflation_params(&e, &current_params(&e, &get_minter(&e)));
            set_last_period(&e, &(e.ledger().timestamp() / WEEK));
        }
        set_is_killed(&e, &is_killed);
        Events::new(&e).set_killed(is_killed);
    }

    fn total_emissions(e: Env) -> u128 {
        get_total_emissions(&e)
    }

    fn transmitted(e: Env) -> u128 {
        get_transmitted(&e)
    }

    fn inflation_params(e: Env) -> InflationParams {
        get_inflation_params(&e)
    }

    fn last_period(e: Env) -> u64 {
        get_last_period(&e)
    }

    fn is_killed(e: Env) -> bool {
        get_is_killed(&e)
    }

    fn factory(e: Env) -> Address {
        get_factory(&e)
    }

    fn token(e: Env) -> Address {
        get_token(&e)
    }

    fn chain_id(e: Env) -> u32 {
        get_chain_id(&e)
    }

    fn child_gauge(e: Env) -> Option<Address> {
        let chain_id = get_chain_id(&e);
        factory_child_factory(&e, &get_factory(&e), chain_id).map(|child_factory| {
            predict_address(&e, &child_factory, chain_id, &get_deployer(&e), &get_salt(&e))
        })
    }
}
