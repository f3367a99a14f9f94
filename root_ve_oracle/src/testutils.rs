#![cfg(test)]

use crate::contract::RootVotingEscrowOracleArgs;
use crate::{RootVotingEscrowOracle, RootVotingEscrowOracleClient};
use cross_chain::{GlobalPoint, Message, Payload, UserPoint};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Vec};

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const CHILD_CHAIN: u32 = 10;

#[contracttype]
enum MockKey {
    Sent,
    UserPoint(Address),
    GlobalPoint,
}

#[contract]
pub struct MockedVotingEscrow;

#[contractimpl]
impl MockedVotingEscrow {
    pub fn set_user_point(e: Env, user: Address, point: UserPoint) {
        e.storage().instance().set(&MockKey::UserPoint(user), &point);
    }

    pub fn set_global_point(e: Env, point: GlobalPoint) {
        e.storage().instance().set(&MockKey::GlobalPoint, &point);
    }

    pub fn get_last_user_point(e: Env, user: Address) -> UserPoint {
        e.storage()
            .instance()
            .get(&MockKey::UserPoint(user))
            .unwrap_or(UserPoint {
                bias: 0,
                slope: 0,
                ts: 0,
                end: 0,
            })
    }

    pub fn get_last_global_point(e: Env) -> GlobalPoint {
        e.storage()
            .instance()
            .get(&MockKey::GlobalPoint)
            .unwrap_or(GlobalPoint {
                bias: 0,
                slope: 0,
                ts: 0,
            })
    }
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

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) child_oracle: Address,

    pub(crate) voting_escrow: MockedVotingEscrowClient<'a>,
    pub(crate) messenger: MockedMessengerClient<'a>,
    pub(crate) oracle: RootVotingEscrowOracleClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&env);
        let child_oracle = Address::generate(&env);
        let voting_escrow =
            MockedVotingEscrowClient::new(&env, &env.register(MockedVotingEscrow, ()));
        let messenger = MockedMessengerClient::new(&env, &env.register(MockedMessenger, ()));

        let oracle = RootVotingEscrowOracleClient::new(
            &env,
            &env.register(
                RootVotingEscrowOracle,
                RootVotingEscrowOracleArgs::__constructor(&owner, &voting_escrow.address),
            ),
        );
        oracle.set_messenger(&owner, &Some(messenger.address.clone()));
        oracle.set_child_oracle(&owner, &CHILD_CHAIN, &Some(child_oracle.clone()));

        Setup {
            env,
            owner,
            child_oracle,
            voting_escrow,
            messenger,
            oracle,
        }
    }
}
