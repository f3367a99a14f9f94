#![no_std]

mod contract;
mod events;
mod external;
mod interface;
mod test;
mod test_permissions;
mod testutils;

pub use crate::contract::{GaugeFactoryProxy, GaugeFactoryProxyClient};
