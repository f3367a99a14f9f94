#![no_std]

pub mod constants;
pub mod errors;
pub mod events;
pub mod manager;
pub mod storage;
mod test;
mod testutils;

pub use manager::Manager;
pub use storage::{RewardData, RewardTotals, UserRewardData};

use soroban_sdk::Env;

#[derive(Clone)]
pub struct Rewards(Env);

impl Rewards {
    #[inline(always)]
    pub fn new(env: &Env) -> Rewards {
        Rewards(env.clone())
    }

    pub fn manager(&self) -> Manager {
        Manager::new(&self.0)
    }
}
