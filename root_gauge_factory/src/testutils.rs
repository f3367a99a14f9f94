#![cfg(test)]

use crate::contract::RootGaugeFactoryArgs;
use crate::{RootGaugeFactory, RootGaugeFactoryClient};
use cross_chain::{Message, Payload};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Vec};
use utils::constant::WEEK;
use utils::test_utils::time_warp;

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const CHILD_CHAIN: u32 = 10;
pub(crate) const RATE: u128 = 1_000_000;
pub(crate) const WEIGHT: u128 = 1_000_000_000_000_000_000;

pub(crate) mod root_gauge {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_root_gauge_contract.wasm"
    );
}

pub(crate) fn install_gauge_wasm(e: &Env) -> BytesN<32> {
    e.deployer().upload_contract_wasm(root_gauge::WASM)
}

#[contracttype]
enum MockKey {
    Sent,
    Token,
    Bridged,
}

#[contract]
pub struct MockedMessenger;

#[contractimpl]
impl MockedMessenger {
    pub fn send(
        e: Env,
        sender: Address,
        to_chain_id: u32,
        targets: Vec<Address>,
        payloads: Vec<Payload>,
        callbacks: Vec<Address>,
        nonces: Vec<u64>,
    ) -> u64 {
        sender.require_auth();
        let mut sent = Self::sent(e.clone());
        let id = sent.len() as u64;
        sent.push_back(Message {
            id,
            origin_chain_id: ROOT_CHAIN,
            to_chain_id,
            sender,
            targets,
            payloads,
            callbacks,
            nonces,
        });
        e.storage().instance().set(&MockKey::Sent, &sent);
        id
    }

    pub fn sent(e: Env) -> Vec<Message> {
        e.storage()
            .instance()
            .get(&MockKey::Sent)
            .unwrap_or(Vec::new(&e))
    }
}

#[contract]
pub struct MockedController;

#[contractimpl]
impl MockedController {
    pub fn checkpoint_gauge(_e: Env, _gauge: Address) {}

    pub fn gauge_relative_weight(_e: Env, _gauge: Address, _time: u64) -> u128 {
        WEIGHT
    }
}

#[contract]
pub struct MockedMinter;

#[contractimpl]
impl MockedMinter {
    pub fn set_token(e: Env, token: Address) {
        e.storage().instance().set(&MockKey::Token, &token);
    }

    pub fn rate(_e: Env) -> u128 {
        RATE
    }

    pub fn future_epoch_time(_e: Env) -> u64 {
        1000 * WEEK
    }

    pub fn mint(e: Env, to: Address, amount: u128) {
        let token: Address = e.storage().instance().get(&MockKey::Token).unwrap();
        StellarAssetClient::new(&e, &token).mint(&to, &(amount as i128));
    }
}

#[contract]
pub struct MockedBridger;

#[contractimpl]
impl MockedBridger {
    pub fn cost(_e: Env) -> i128 {
        150
    }

    pub fn check(_e: Env, _sender: Address) -> bool {
        true
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

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) deployer: Address,
    pub(crate) child_factory: Address,
    pub(crate) child_implementation: BytesN<32>,

    pub(crate) token: TokenClient<'a>,
    pub(crate) bridger: MockedBridgerClient<'a>,
    pub(crate) messenger: MockedMessengerClient<'a>,
    pub(crate) factory: RootGaugeFactoryClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        time_warp(&env, 100 * WEEK);

        let owner = Address::generate(&env);
        let deployer = Address::generate(&env);
        let child_factory = Address::generate(&env);
        let child_implementation = BytesN::from_array(&env, &[8; 32]);

        let minter = MockedMinterClient::new(&env, &env.register(MockedMinter, ()));
        let token = TokenClient::new(
            &env,
            &env.register_stellar_asset_contract_v2(minter.address.clone())
                .address(),
        );
        minter.set_token(&token.address);
        let controller = env.register(MockedController, ());
        let bridger = MockedBridgerClient::new(&env, &env.register(MockedBridger, ()));
        let messenger = MockedMessengerClient::new(&env, &env.register(MockedMessenger, ()));

        let factory = RootGaugeFactoryClient::new(
            &env,
            &env.register(
                RootGaugeFactory,
                RootGaugeFactoryArgs::__constructor(
                    &owner,
                    &ROOT_CHAIN,
                    &token.address,
                    &controller,
                    &minter.address,
                    &install_gauge_wasm(&env),
                ),
            ),
        );
        factory.set_messenger(&owner, &Some(messenger.address.clone()));
        factory.set_child(
            &owner,
            &CHILD_CHAIN,
            &bridger.address,
            &child_factory,
            &child_implementation,
        );

        Setup {
            env,
            owner,
            deployer,
            child_factory,
            child_implementation,
            token,
            bridger,
            messenger,
            factory,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn gauge_client(&self, gauge: &Address) -> root_gauge::Client<'_> {
        root_gauge::Client::new(&self.env, gauge)
    }

    pub(crate) fn salt(&self, seed: u8) -> BytesN<32> {
        BytesN::from_array(&self.env, &[seed; 32])
    }
}
