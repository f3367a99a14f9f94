#![cfg(test)]

use crate::contract::GaugeFactoryProxyArgs;
use crate::{GaugeFactoryProxy, GaugeFactoryProxyClient};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_owner;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, Address, BytesN, Env};

pub(crate) const CHAIN_ID: u32 = 10;

#[contracttype]
enum MockKey {
    Killed(Address),
    Bridger(u32),
    ChildFactory(u32),
    Implementation,
    Messenger,
}

// Owner-gated surface shared by both gauge factories.
#[contract]
pub struct MockedFactory;

#[contractimpl]
impl MockedFactory {
    pub fn __constructor(e: Env, owner: Address) {
        AccessControl::new(&e).set_role_address(&Role::Owner, &owner);
    }

    pub fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);
        AccessControl::new(&e).commit_transfer_ownership(&Role::Owner, &new_owner);
    }

    pub fn accept_transfer_ownership(e: Env, new_owner: Address) {
        new_owner.require_auth();
        AccessControl::new(&e).accept_transfer_ownership(&Role::Owner, &new_owner);
    }

    pub fn owner(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Owner)
    }

    pub fn future_owner(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_address(&Role::Owner)
    }

    pub fn set_killed(e: Env, caller: Address, gauge: Address, is_killed: bool) {
        caller.require_auth();
        require_owner(&e, &caller);
        e.storage().instance().set(&MockKey::Killed(gauge), &is_killed);
    }

    pub fn is_killed(e: Env, gauge: Address) -> bool {
        e.storage()
            .instance()
            .get(&MockKey::Killed(gauge))
            .unwrap_or(false)
    }

    pub fn set_bridger(e: Env, caller: Address, chain_id: u32, bridger: Address) {
        caller.require_auth();
        require_owner(&e, &caller);
        e.storage().instance().set(&MockKey::Bridger(chain_id), &bridger);
    }

    pub fn get_bridger(e: Env, chain_id: u32) -> Option<Address> {
        e.storage().instance().get(&MockKey::Bridger(chain_id))
    }

    pub fn set_implementation(e: Env, caller: Address, implementation: BytesN<32>) {
        caller.require_auth();
        require_owner(&e, &caller);
        e.storage()
            .instance()
            .set(&MockKey::Implementation, &implementation);
    }

    pub fn implementation(e: Env) -> Option<BytesN<32>> {
        e.storage().instance().get(&MockKey::Implementation)
    }

    pub fn set_messenger(e: Env, caller: Address, messenger: Option<Address>) {
        caller.require_auth();
        require_owner(&e, &caller);
        e.storage().instance().set(&MockKey::Messenger, &messenger);
    }

    pub fn messenger(e: Env) -> Option<Address> {
        e.storage()
            .instance()
            .get(&MockKey::Messenger)
            .unwrap_or(None)
    }

    pub fn set_child(
        e: Env,
        caller: Address,
        chain_id: u32,
        bridger: Address,
        child_factory: Address,
        child_implementation: BytesN<32>,
    ) {
        caller.require_auth();
        require_owner(&e, &caller);
        e.storage().instance().set(&MockKey::Bridger(chain_id), &bridger);
        e.storage()
            .instance()
            .set(&MockKey::ChildFactory(chain_id), &child_factory);
        e.storage()
            .instance()
            .set(&MockKey::Implementation, &child_implementation);
    }

    pub fn get_child_factory(e: Env, chain_id: u32) -> Option<Address> {
        e.storage().instance().get(&MockKey::ChildFactory(chain_id))
    }
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) ownership_admin: Address,
    pub(crate) emergency_admin: Address,
    pub(crate) manager: Address,
    pub(crate) factory_owner: Address,
    pub(crate) stranger: Address,

    pub(crate) factory: MockedFactoryClient<'a>,
    pub(crate) proxy: GaugeFactoryProxyClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let ownership_admin = Address::generate(&env);
        let emergency_admin = Address::generate(&env);
        let manager = Address::generate(&env);
        let factory_owner = Address::generate(&env);
        let stranger = Address::generate(&env);

        let factory = MockedFactoryClient::new(
            &env,
            &env.register(MockedFactory, MockedFactoryArgs::__constructor(&factory_owner)),
        );
        let proxy = GaugeFactoryProxyClient::new(
            &env,
            &env.register(
                GaugeFactoryProxy,
                GaugeFactoryProxyArgs::__constructor(&ownership_admin, &emergency_admin, &manager),
            ),
        );

        Setup {
            env,
            ownership_admin,
            emergency_admin,
            manager,
            factory_owner,
            stranger,
            factory,
            proxy,
        }
    }
}

impl Setup<'_> {
    // Hands the factory over to the proxy.
    pub(crate) fn install_proxy(&self) {
        self.factory
            .commit_transfer_ownership(&self.factory_owner, &self.proxy.address);
        self.proxy.accept_transfer_ownership(&self.factory.address);
    }

    pub(crate) fn hash(&self, value: u8) -> BytesN<32> {
        BytesN::from_array(&self.env, &[value; 32])
    }
}
