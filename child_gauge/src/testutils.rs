#![cfg(test)]

use crate::contract::ChildGaugeArgs;
use crate::{ChildGauge, ChildGaugeClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

pub(crate) const CHAIN_ID: u32 = 10;

#[contracttype]
enum MockKey {
    Owner,
    VotingEscrow,
    RootFactory,
    Requests,
    Balance(Address),
    Supply,
}

// Child factory stand-in: answers the gauge's queries and records emission requests.
#[contract]
pub struct MockedFactory;

#[contractimpl]
impl MockedFactory {
    pub fn __constructor(e: Env, owner: Address) {
        e.storage().instance().set(&MockKey::Owner, &owner);
    }

    pub fn owner(e: Env) -> Address {
        e.storage().instance().get(&MockKey::Owner).unwrap()
    }

    pub fn voting_escrow(e: Env) -> Option<Address> {
        e.storage().instance().get(&MockKey::VotingEscrow)
    }

    pub fn set_voting_escrow(e: Env, voting_escrow: Address) {
        e.storage()
            .instance()
            .set(&MockKey::VotingEscrow, &voting_escrow);
    }

    pub fn root_factory(e: Env) -> Option<Address> {
        e.storage().instance().get(&MockKey::RootFactory)
    }

    pub fn set_root_factory(e: Env, root_factory: Address) {
        e.storage()
            .instance()
            .set(&MockKey::RootFactory, &root_factory);
    }

    pub fn request_emissions(e: Env, gauge: Address) -> bool {
        gauge.require_auth();
        let requests: u32 = e
            .storage()
            .instance()
            .get(&MockKey::Requests)
            .unwrap_or(0);
        e.storage()
            .instance()
            .set(&MockKey::Requests, &(requests + 1));
        true
    }

    pub fn requests(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&MockKey::Requests)
            .unwrap_or(0)
    }

    pub fn mint_checkpoint(e: Env, gauge: Address, user: Address) -> u128 {
        ChildGaugeClient::new(&e, &gauge).mint_checkpoint(
            &e.current_contract_address(),
            &user,
            &Self::voting_escrow(e.clone()),
        )
    }

    pub fn set_killed(e: Env, gauge: Address, is_killed: bool) {
        ChildGaugeClient::new(&e, &gauge).set_killed(&e.current_contract_address(), &is_killed);
    }
}

#[contract]
pub struct MockedVotingEscrow;

#[contractimpl]
impl MockedVotingEscrow {
    pub fn set_balance(e: Env, user: Address, balance: u128) {
        let supply = Self::total_supply(e.clone()) + balance - Self::balance_of(e.clone(), user.clone());
        e.storage().instance().set(&MockKey::Balance(user), &balance);
        e.storage().instance().set(&MockKey::Supply, &supply);
    }

    pub fn balance_of(e: Env, user: Address) -> u128 {
        e.storage()
            .instance()
            .get(&MockKey::Balance(user))
            .unwrap_or(0)
    }

    pub fn total_supply(e: Env) -> u128 {
        e.storage().instance().get(&MockKey::Supply).unwrap_or(0)
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
    pub(crate) manager: Address,
    pub(crate) deployer: Address,
    pub(crate) salt: BytesN<32>,

    pub(crate) factory: MockedFactoryClient<'a>,
    pub(crate) token: TokenClient<'a>,
    pub(crate) token_admin: StellarAssetClient<'a>,
    pub(crate) lp_token: TokenClient<'a>,
    pub(crate) lp_token_admin: StellarAssetClient<'a>,
    pub(crate) gauge: ChildGaugeClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let manager = Address::generate(&env);
        let deployer = Address::generate(&env);
        let salt = BytesN::from_array(&env, &[3; 32]);

        let admin = Address::generate(&env);
        let (token, token_admin) = create_token(&env, &admin);
        let (lp_token, lp_token_admin) = create_token(&env, &admin);

        let factory = MockedFactoryClient::new(
            &env,
            &env.register(MockedFactory, MockedFactoryArgs::__constructor(&owner)),
        );
        let gauge = ChildGaugeClient::new(
            &env,
            &env.register(
                ChildGauge,
                ChildGaugeArgs::__constructor(
                    &factory.address,
                    &token.address,
                    &lp_token.address,
                    &manager,
                    &CHAIN_ID,
                    &deployer,
                    &salt,
                ),
            ),
        );

        Setup {
            env,
            owner,
            manager,
            deployer,
            salt,
            factory,
            token,
            token_admin,
            lp_token,
            lp_token_admin,
            gauge,
        }
    }
}

impl Setup<'_> {
    pub(crate) fn generate_user(&self, lp_amount: i128) -> Address {
        let user = Address::generate(&self.env);
        self.lp_token_admin.mint(&user, &lp_amount);
        user
    }

    pub(crate) fn create_voting_escrow(&self) -> MockedVotingEscrowClient<'_> {
        let voting_escrow =
            MockedVotingEscrowClient::new(&self.env, &self.env.register(MockedVotingEscrow, ()));
        self.factory.set_voting_escrow(&voting_escrow.address);
        voting_escrow
    }
}
