#![cfg(test)]

use crate::contract::ChildGaugeFactoryArgs;
use crate::{ChildGaugeFactory, ChildGaugeFactoryClient};
use cross_chain::{Message, Payload};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, BytesN, Env, Vec};
use utils::test_utils::time_warp;
use utils::constant::WEEK;

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const CHAIN_ID: u32 = 10;

pub(crate) mod child_gauge {
    soroban_sdk::contractimport!(
        file = "../target/wasm32-unknown-unknown/release/soroban_child_gauge_contract.wasm"
    );
}

pub(crate) fn install_gauge_wasm(e: &Env) -> BytesN<32> {
    e.deployer().upload_contract_wasm(child_gauge::WASM)
}

// Outbox only: stores whatever the factory sends, never delivers.
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
            origin_chain_id: CHAIN_ID,
            to_chain_id,
            sender,
            targets,
            payloads,
            callbacks,
            nonces,
        });
        e.storage().instance().set(&symbol_short!("sent"), &sent);
        id
    }

    pub fn sent(e: Env) -> Vec<Message> {
        e.storage()
            .instance()
            .get(&symbol_short!("sent"))
            .unwrap_or(Vec::new(&e))
    }
}

pub(crate) fn create_token<'a>(e: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let address = e.register_stellar_asset_contract_v2(admin.clone()).address();
    (
        TokenClient::new(e, &address),
        StellarAssetClient::new(e, &address),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) deployer: Address,
    pub(crate) root_factory: Address,

    pub(crate) token: TokenClient<'a>,
    pub(crate) token_admin: StellarAssetClient<'a>,
    pub(crate) lp_token: TokenClient<'a>,
    pub(crate) lp_token_admin: StellarAssetClient<'a>,
    pub(crate) messenger: MockedMessengerClient<'a>,
    pub(crate) factory: ChildGaugeFactoryClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        time_warp(&env, 100 * WEEK);

        let owner = Address::generate(&env);
        let deployer = Address::generate(&env);
        let root_factory = Address::generate(&env);

        let admin = Address::generate(&env);
        let (token, token_admin) = create_token(&env, &admin);
        let (lp_token, lp_token_admin) = create_token(&env, &admin);

        let factory = ChildGaugeFactoryClient::new(
            &env,
            &env.register(
                ChildGaugeFactory,
                ChildGaugeFactoryArgs::__constructor(
                    &owner,
                    &token.address,
                    &CHAIN_ID,
                    &install_gauge_wasm(&env),
                ),
            ),
        );
        let messenger = MockedMessengerClient::new(&env, &env.register(MockedMessenger, ()));
        factory.set_messenger(&owner, &Some(messenger.address.clone()));
        factory.set_root_factory(&owner, &ROOT_CHAIN, &root_factory);

        Setup {
            env,
            owner,
            deployer,
            root_factory,
            token,
            token_admin,
            lp_token,
            lp_token_admin,
            messenger,
            factory,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn gauge_client(&self, gauge: &Address) -> child_gauge::Client<'_> {
        child_gauge::Client::new(&self.env, gauge)
    }

    // Deployment as relayed from the root factory.
    pub(crate) fn deploy_from_root(&self, salt: &BytesN<32>) -> Address {
        self.factory.deploy_gauge_from_root(
            &self.messenger.address,
            &ROOT_CHAIN,
            &self.root_factory,
            &self.lp_token.address,
            salt,
            &self.deployer,
            &self.deployer,
        )
    }

    pub(crate) fn generate_user(&self, lp_amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.lp_token_admin.mint(&user, &lp_amount);
        user
    }
}
