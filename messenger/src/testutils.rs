#![cfg(test)]

use crate::contract::MessengerArgs;
use crate::{Messenger, MessengerClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const CHILD_CHAIN: u32 = 10;

// Records every inbound call so tests can check what a delivery executed.
#[contract]
pub struct MockedReceiver;

#[contractimpl]
impl MockedReceiver {
    pub fn ping(e: Env, messenger: Address, origin_chain_id: u32, sender: Address, value: u32) -> u32 {
        let calls: u32 = e
            .storage()
            .instance()
            .get(&symbol_short!("calls"))
            .unwrap_or(0);
        e.storage().instance().set(&symbol_short!("calls"), &(calls + 1));
        e.storage()
            .instance()
            .set(&symbol_short!("last"), &(messenger, origin_chain_id, sender));
        value * 2
    }

    pub fn calls(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&symbol_short!("calls"))
            .unwrap_or(0)
    }

    pub fn last(e: Env) -> (Address, u32, Address) {
        e.storage()
            .instance()
            .get(&symbol_short!("last"))
            .unwrap()
    }
}

pub fn create_contract<'a>(e: &Env, owner: &Address, chain_id: u32) -> MessengerClient<'a> {
    MessengerClient::new(
        e,
        &e.register(Messenger {}, MessengerArgs::__constructor(owner, &chain_id)),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) relayer: Address,
    pub(crate) root: MessengerClient<'a>,
    pub(crate) child: MessengerClient<'a>,
    pub(crate) receiver: MockedReceiverClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let relayer = Address::generate(&env);
        let root = create_contract(&env, &owner, ROOT_CHAIN);
        let child = create_contract(&env, &owner, CHILD_CHAIN);
        root.set_relayer(&owner, &CHILD_CHAIN, &Some(relayer.clone()));
        child.set_relayer(&owner, &ROOT_CHAIN, &Some(relayer.clone()));
        let receiver = MockedReceiverClient::new(&env, &env.register(MockedReceiver, ()));

        Setup {
            env,
            owner,
            relayer,
            root,
            child,
            receiver,
        }
    }
}
