#![no_std]

mod contract;
mod events;
mod storage;
mod test;
mod test_permissions;
mod testutils;

pub use crate::contract::{Messenger, MessengerClient};
