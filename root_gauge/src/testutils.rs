#![cfg(test)]

use crate::contract::RootGaugeArgs;
use crate::{RootGauge, RootGaugeClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};
use utils::constant::WEEK;
use utils::test_utils::time_warp;

pub(crate) const CHAIN_ID: u32 = 10;
pub(crate) const RATE: u128 = 1_000_000;
pub(crate) const HALF: u128 = 500_000_000_000_000_000;

#[contracttype]
enum MockKey {
    Weight,
    Checkpoints,
    Rate,
    FutureEpochTime,
    Token,
    Enabled,
    Bridged,
    ChildFactory(u32),
}

// Same relative weight for every gauge at every time.
#[contract]
pub struct MockedController;

#[contractimpl]
impl MockedController {
    pub fn set_weight(e: Env, weight: u128) {
        e.storage().instance().set(&MockKey::Weight, &weight);
    }

    pub fn checkpoint_gauge(e: Env, _gauge: Address) {
        let checkpoints = Self::checkpoints(e.clone());
        e.storage()
            .instance()
            .set(&MockKey::Checkpoints, &(checkpoints + 1));
    }

    pub fn checkpoints(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&MockKey::Checkpoints)
            .unwrap_or(0)
    }

    pub fn gauge_relative_weight(e: Env, _gauge: Address, _time: u64) -> u128 {
        e.storage().instance().get(&MockKey::Weight).unwrap_or(0)
    }
}

// Token admin. Mints whatever a gauge asks for.
#[contract]
pub struct MockedMinter;

#[contractimpl]
impl MockedMinter {
    pub fn __constructor(e: Env, rate: u128, future_epoch_time: u64) {
        e.storage().instance().set(&MockKey::Rate, &rate);
        e.storage()
            .instance()
            .set(&MockKey::FutureEpochTime, &future_epoch_time);
    }

    pub fn set_token(e: Env, token: Address) {
        e.storage().instance().set(&MockKey::Token, &token);
    }

    pub fn set_rate(e: Env, rate: u128) {
        e.storage().instance().set(&MockKey::Rate, &rate);
    }

    pub fn rate(e: Env) -> u128 {
        e.storage().instance().get(&MockKey::Rate).unwrap()
    }

    pub fn future_epoch_time(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&MockKey::FutureEpochTime)
            .unwrap()
    }

    pub fn mint(e: Env, to: Address, amount: u128) {
        let token: Address = e.storage().instance().get(&MockKey::Token).unwrap();
        StellarAssetClient::new(&e, &token).mint(&to, &(amount as i128));
    }
}

// Keeps what it is asked to bridge.
#[contract]
pub struct MockedBridger;

#[contractimpl]
impl MockedBridger {
    pub fn set_enabled(e: Env, enabled: bool) {
        e.storage().instance().set(&MockKey::Enabled, &enabled);
    }

    pub fn cost(_e: Env) -> i128 {
        0
    }

    pub fn check(e: Env, _sender: Address) -> bool {
        e.storage()
            .instance()
            .get(&MockKey::Enabled)
            .unwrap_or(true)
    }

    pub fn bridge(e: Env, _token: Address, recipient: Address, amount: u128) {
        e.storage()
            .instance()
            .set(&MockKey::Bridged, &(recipient, amount));
    }

    pub fn last_bridged(e: Env) -> Option<(Address, u128)> {
        e.storage().instance().get(&MockKey::Bridged)
    }
}

#[contract]
pub struct MockedFactory;

#[contractimpl]
impl MockedFactory {
    pub fn set_child_factory(e: Env, chain_id: u32, child_factory: Address) {
        e.storage()
            .instance()
            .set(&MockKey::ChildFactory(chain_id), &child_factory);
    }

    pub fn get_child_factory(e: Env, chain_id: u32) -> Option<Address> {
        e.storage().instance().get(&MockKey::ChildFactory(chain_id))
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) deployer: Address,
    pub(crate) salt: BytesN<32>,
    pub(crate) child_factory: Address,

    pub(crate) token: TokenClient<'a>,
    pub(crate) controller: MockedControllerClient<'a>,
    pub(crate) minter: MockedMinterClient<'a>,
    pub(crate) bridger: MockedBridgerClient<'a>,
    pub(crate) factory: MockedFactoryClient<'a>,
    pub(crate) gauge: RootGaugeClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::with_epoch_end(1000 * WEEK)
    }
}

impl Setup<'_> {
    pub(crate) fn with_epoch_end(future_epoch_time: u64) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        time_warp(&env, 100 * WEEK);

        let deployer = Address::generate(&env);
        let salt = BytesN::from_array(&env, &[4; 32]);
        let child_factory = Address::generate(&env);

        let minter = MockedMinterClient::new(
            &env,
            &env.register(
                MockedMinter,
                MockedMinterArgs::__constructor(&RATE, &future_epoch_time),
            ),
        );
        let token_address = env
            .register_stellar_asset_contract_v2(minter.address.clone())
            .address();
        minter.set_token(&token_address);
        let token = TokenClient::new(&env, &token_address);

        let controller = MockedControllerClient::new(&env, &env.register(MockedController, ()));
        controller.set_weight(&HALF);
        let bridger = MockedBridgerClient::new(&env, &env.register(MockedBridger, ()));
        let factory = MockedFactoryClient::new(&env, &env.register(MockedFactory, ()));

        let gauge = RootGaugeClient::new(
            &env,
            &env.register(
                RootGauge,
                RootGaugeArgs::__constructor(
                    &factory.address,
                    &token.address,
                    &controller.address,
                    &minter.address,
                    &CHAIN_ID,
                    &deployer,
                    &salt,
                ),
            ),
        );

        Setup {
            env,
            deployer,
            salt,
            child_factory,
            token,
            controller,
            minter,
            bridger,
            factory,
            gauge,
        }
    }

    pub(crate) fn transmit(&self) -> u128 {
        self.gauge.transmit_emissions(
            &self.factory.address,
            &self.bridger.address,
            &self.child_factory,
        )
    }
}
