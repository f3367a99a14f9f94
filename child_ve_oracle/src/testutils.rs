#![cfg(test)]

use crate::contract::ChildVotingEscrowOracleArgs;
use crate::{ChildVotingEscrowOracle, ChildVotingEscrowOracleClient};
use cross_chain::{GlobalPoint, UserPoint};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use utils::test_utils::time_warp;

pub(crate) const ROOT_CHAIN: u32 = 1;
pub(crate) const START: u64 = 1_000_000;

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) owner: Address,
    pub(crate) messenger: Address,
    pub(crate) root_oracle: Address,
    pub(crate) oracle: ChildVotingEscrowOracleClient<'a>,
}

impl Default for Setup<'_> {
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();
        time_warp(&env, START);

        let owner = Address::generate(&env);
        let messenger = Address::generate(&env);
        let root_oracle = Address::generate(&env);
        let oracle = ChildVotingEscrowOracleClient::new(
            &env,
            &env.register(
                ChildVotingEscrowOracle,
                ChildVotingEscrowOracleArgs::__constructor(&owner),
            ),
        );
        oracle.set_messenger(&owner, &Some(messenger.clone()));
        oracle.set_root_oracle(&owner, &ROOT_CHAIN, &root_oracle);

        Setup {
            env,
            owner,
            messenger,
            root_oracle,
            oracle,
        }
    }
}

impl Setup<'_> {
    // Delivery of a push from the root oracle.
    pub(crate) fn receive(&self, user: &Address, user_point: &UserPoint, global_point: &GlobalPoint) {
        self.oracle.receive(
            &self.messenger,
            &ROOT_CHAIN,
            &self.root_oracle,
            user_point,
            global_point,
            user,
        );
    }
}

pub(crate) fn user_point(bias: i128, slope: i128, ts: u64, end: u64) -> UserPoint {
    UserPoint {
        bias,
        slope,
        ts,
        end,
    }
}

pub(crate) fn global_point(bias: i128, slope: i128, ts: u64) -> GlobalPoint {
    GlobalPoint { bias, slope, ts }
}
