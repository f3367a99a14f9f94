#![no_std]

mod contract;
mod errors;
mod events;
mod storage;
mod testutils;

pub use crate::contract::{RootVotingEscrowOracle, RootVotingEscrowOracleClient};
