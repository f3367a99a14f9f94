#![no_std]

mod contract;
mod events;
mod storage;
mod test;
mod testutils;

pub use crate::contract::{ChildVotingEscrowOracle, ChildVotingEscrowOracleClient};
