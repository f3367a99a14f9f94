#![no_std]

mod allowance;
mod balance;
mod contract;
mod errors;
mod events;
mod external;
mod inflation;
mod interface;
mod storage;
mod test_permissions;
mod testutils;

pub use crate::contract::{ChildGauge, ChildGaugeClient};
