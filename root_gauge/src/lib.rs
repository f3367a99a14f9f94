#![no_std]

mod constants;
mod contract;
mod emissions;
mod errors;
mod events;
mod external;
mod interface;
mod storage;
mod testutils;

pub use crate::contract::{RootGauge, RootGaugeClient};
pub use crate::storage::InflationParams;
