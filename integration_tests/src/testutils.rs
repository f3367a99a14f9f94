#![cfg(test)]
extern crate std;
use crate::contracts;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{
    StellarAssetClient as SorobanTokenAdminClient, TokenClient as SorobanTokenClient,
};
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env, Val, Vec};
use utils::constant::WEEK;
use utils::test_utils::time_warp;

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const CHILD_CHAIN: u32 = 10;
pub(crate) const RATE: u128 = 1_000_000;
pub(crate) const FULL_WEIGHT: u128 = 1_000_000_000_000_000_000;

#[contracttype]
enum MockKey {
    Weight,
    Rate,
    Token,
    UserPoint(Address),
    GlobalPoint,
}

#[contract]
pub struct MockedController;

#[contractimpl]
impl MockedController {
    pub fn set_weight(e: Env, weight: u128) {
        e.storage().instance().set(&MockKey::Weight, &weight);
    }

    pub fn checkpoint_gauge(_e: Env, _gauge: Address) {}

    pub fn gauge_relative_weight(e: Env, _gauge: Address, _time: u64) -> u128 {
        e.storage().instance().get(&MockKey::Weight).unwrap_or(0)
    }
}

// Admin of the emission token.
#[contract]
pub struct MockedMinter;

#[contractimpl]
impl MockedMinter {
    pub fn __constructor(e: Env, rate: u128) {
        e.storage().instance().set(&MockKey::Rate, &rate);
    }

    pub fn set_token(e: Env, token: Address) {
        e.storage().instance().set(&MockKey::Token, &token);
    }

    pub fn rate(e: Env) -> u128 {
        e.storage().instance().get(&MockKey::Rate).unwrap()
    }

    pub fn future_epoch_time(_e: Env) -> u64 {
        u64::MAX
    }

    pub fn mint(e: Env, to: Address, amount: u128) {
        let token: Address = e.storage().instance().get(&MockKey::Token).unwrap();
        SorobanTokenAdminClient::new(&e, &token).mint(&to, &(amount as i128));
    }
}

// Both chains share one ledger here, so bridging is a plain transfer.
#[contract]
pub struct MockedBridger;

#[contractimpl]
impl MockedBridger {
    pub fn cost(_e: Env) -> i128 {
        0
    }

    pub fn check(_e: Env, _sender: Address) -> bool {
        true
    }

    pub fn bridge(e: Env, token: Address, recipient: Address, amount: u128) {
        SorobanTokenClient::new(&e, &token).transfer(
            &e.current_contract_address(),
            &recipient,
            &(amount as i128),
        );
    }
}

#[contract]
pub struct MockedVotingEscrow;

#[contractimpl]
impl MockedVotingEscrow {
    pub fn set_user_point(e: Env, user: Address, point: contracts::child_ve_oracle::UserPoint) {
        e.storage().instance().set(&MockKey::UserPoint(user), &point);
    }

    pub fn set_global_point(e: Env, point: contracts::child_ve_oracle::GlobalPoint) {
        e.storage().instance().set(&MockKey::GlobalPoint, &point);
    }

    pub fn get_last_user_point(e: Env, user: Address) -> contracts::child_ve_oracle::UserPoint {
        e.storage()
            .instance()
            .get(&MockKey::UserPoint(user))
            .unwrap_or(contracts::child_ve_oracle::UserPoint {
                bias: 0,
                slope: 0,
                ts: 0,
                end: 0,
            })
    }

    pub fn get_last_global_point(e: Env) -> contracts::child_ve_oracle::GlobalPoint {
        e.storage()
            .instance()
            .get(&MockKey::GlobalPoint)
            .unwrap_or(contracts::child_ve_oracle::GlobalPoint {
                bias: 0,
                slope: 0,
                ts: 0,
            })
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,
    pub(crate) owner: Address,
    pub(crate) relayer: Address,
    pub(crate) deployer: Address,

    pub(crate) token: SorobanTokenClient<'a>,
    pub(crate) lp_token: SorobanTokenClient<'a>,
    pub(crate) controller: MockedControllerClient<'a>,
    pub(crate) minter: MockedMinterClient<'a>,
    pub(crate) bridger: MockedBridgerClient<'a>,
    pub(crate) voting_escrow: MockedVotingEscrowClient<'a>,

    pub(crate) root_messenger: contracts::messenger::Client<'a>,
    pub(crate) child_messenger: contracts::messenger::Client<'a>,
    pub(crate) root_factory: contracts::root_gauge_factory::Client<'a>,
    pub(crate) child_factory: contracts::child_gauge_factory::Client<'a>,
    pub(crate) root_oracle: contracts::root_ve_oracle::Client<'a>,
    pub(crate) child_oracle: contracts::child_ve_oracle::Client<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        Self::setup()
    }
}

impl Setup<'_> {
    pub(crate) fn setup() -> Self {
        let e: Env = Env::default();
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();
        time_warp(&e, 100 * WEEK);

        let owner = Address::generate(&e);
        let relayer = Address::generate(&e);
        let deployer = Address::generate(&e);

        // root chain collaborators
        let controller = MockedControllerClient::new(&e, &e.register(MockedController, ()));
        controller.set_weight(&FULL_WEIGHT);
        let minter = MockedMinterClient::new(
            &e,
            &e.register(MockedMinter, MockedMinterArgs::__constructor(&RATE)),
        );
        let token = create_token_contract(&e, &minter.address);
        minter.set_token(&token.address);
        let bridger = MockedBridgerClient::new(&e, &e.register(MockedBridger, ()));
        let voting_escrow =
            MockedVotingEscrowClient::new(&e, &e.register(MockedVotingEscrow, ()));
        let lp_token = create_token_contract(&e, &owner);

        // one messenger endpoint per chain, one relayer both ways
        let root_messenger = deploy_messenger(&e, &owner, ROOT_CHAIN);
        let child_messenger = deploy_messenger(&e, &owner, CHILD_CHAIN);
        root_messenger.set_relayer(&owner, &CHILD_CHAIN, &Some(relayer.clone()));
        child_messenger.set_relayer(&owner, &ROOT_CHAIN, &Some(relayer.clone()));

        let root_gauge_hash = e
            .deployer()
            .upload_contract_wasm(contracts::root_gauge::WASM);
        let child_gauge_hash = e
            .deployer()
            .upload_contract_wasm(contracts::child_gauge::WASM);

        let root_factory = contracts::root_gauge_factory::Client::new(
            &e,
            &e.register(
                contracts::root_gauge_factory::WASM,
                contracts::root_gauge_factory::Args::__constructor(
                    &owner,
                    &ROOT_CHAIN,
                    &token.address,
                    &controller.address,
                    &minter.address,
                    &root_gauge_hash,
                ),
            ),
        );
        let child_factory = contracts::child_gauge_factory::Client::new(
            &e,
            &e.register(
                contracts::child_gauge_factory::WASM,
                contracts::child_gauge_factory::Args::__constructor(
                    &owner,
                    &token.address,
                    &CHILD_CHAIN,
                    &child_gauge_hash,
                ),
            ),
        );
        root_factory.set_child(
            &owner,
            &CHILD_CHAIN,
            &bridger.address,
            &child_factory.address,
            &child_gauge_hash,
        );
        root_factory.set_messenger(&owner, &Some(root_messenger.address.clone()));
        child_factory.set_messenger(&owner, &Some(child_messenger.address.clone()));
        child_factory.set_root_factory(&owner, &ROOT_CHAIN, &root_factory.address);

        let root_oracle = contracts::root_ve_oracle::Client::new(
            &e,
            &e.register(
                contracts::root_ve_oracle::WASM,
                contracts::root_ve_oracle::Args::__constructor(&owner, &voting_escrow.address),
            ),
        );
        let child_oracle = contracts::child_ve_oracle::Client::new(
            &e,
            &e.register(
                contracts::child_ve_oracle::WASM,
                contracts::child_ve_oracle::Args::__constructor(&owner),
            ),
        );
        root_oracle.set_messenger(&owner, &Some(root_messenger.address.clone()));
        root_oracle.set_child_oracle(&owner, &CHILD_CHAIN, &Some(child_oracle.address.clone()));
        child_oracle.set_messenger(&owner, &Some(child_messenger.address.clone()));
        child_oracle.set_root_oracle(&owner, &ROOT_CHAIN, &root_oracle.address);

        Self {
            env: e,
            owner,
            relayer,
            deployer,
            token,
            lp_token,
            controller,
            minter,
            bridger,
            voting_escrow,
            root_messenger,
            child_messenger,
            root_factory,
            child_factory,
            root_oracle,
            child_oracle,
        }
    }

    // Delivers message `id` of the root outbox on the child chain.
    pub(crate) fn relay_to_child(&self, id: u64) -> Vec<Val> {
        let message = self.root_messenger.get_message(&id);
        self.child_messenger.deliver(&self.relayer, &message)
    }

    // Delivers message `id` of the child outbox on the root chain.
    pub(crate) fn relay_to_root(&self, id: u64) -> Vec<Val> {
        let message = self.child_messenger.get_message(&id);
        self.root_messenger.deliver(&self.relayer, &message)
    }

    pub(crate) fn last_root_message(&self) -> u64 {
        self.root_messenger.message_count() - 1
    }

    pub(crate) fn last_child_message(&self) -> u64 {
        self.child_messenger.message_count() - 1
    }

    // Root gauge plus its child gauge, deployed through the messenger and confirmed.
    pub(crate) fn deploy_pair(
        &self,
        salt: &BytesN<32>,
    ) -> (
        contracts::root_gauge::Client,
        contracts::child_gauge::Client,
    ) {
        let root_gauge = self
            .root_factory
            .deploy_gauge(&self.deployer, &CHILD_CHAIN, salt);
        let child_gauge = self.root_factory.deploy_child_gauge(
            &self.deployer,
            &CHILD_CHAIN,
            &self.lp_token.address,
            salt,
            &None,
        );
        self.relay_to_child(self.last_root_message());
        self.relay_to_root(self.last_child_message());
        (
            contracts::root_gauge::Client::new(&self.env, &root_gauge),
            contracts::child_gauge::Client::new(&self.env, &child_gauge),
        )
    }

    pub(crate) fn deploy_local_gauge(&self) -> contracts::child_gauge::Client {
        let gauge = self.child_factory.deploy_gauge(
            &self.deployer,
            &self.lp_token.address,
            &None,
            &None,
        );
        contracts::child_gauge::Client::new(&self.env, &gauge)
    }

    pub(crate) fn generate_user(&self, lp_amount: i128) -> Address {
        let user = Address::generate(&self.env);
        get_token_admin_client(&self.env, &self.lp_token.address).mint(&user, &lp_amount);
        user
    }
}

pub(crate) fn create_token_contract<'a>(e: &Env, admin: &Address) -> SorobanTokenClient<'a> {
    SorobanTokenClient::new(
        e,
        &e.register_stellar_asset_contract_v2(admin.clone())
            .address(),
    )
}

pub(crate) fn get_token_admin_client<'a>(
    e: &Env,
    address: &Address,
) -> SorobanTokenAdminClient<'a> {
    SorobanTokenAdminClient::new(e, address)
}

fn deploy_messenger<'a>(e: &Env, owner: &Address, chain_id: u32) -> contracts::messenger::Client<'a> {
    contracts::messenger::Client::new(
        e,
        &e.register(
            contracts::messenger::WASM,
            contracts::messenger::Args::__constructor(owner, &chain_id),
        ),
    )
}

pub(crate) fn deploy_proxy<'a>(
    e: &Env,
    ownership_admin: &Address,
    emergency_admin: &Address,
    manager: &Address,
) -> contracts::gauge_factory_proxy::Client<'a> {
    contracts::gauge_factory_proxy::Client::new(
        e,
        &e.register(
            contracts::gauge_factory_proxy::WASM,
            contracts::gauge_factory_proxy::Args::__constructor(
                ownership_admin,
                emergency_admin,
                manager,
            ),
        ),
    )
}
