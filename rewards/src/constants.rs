use utils::constant::WEEK;

pub const MAX_REWARDS: u32 = 8;
pub const MAX_DECIMALS: u32 = 18;
pub const INTEGRAL_PRECISION: u128 = 1_000_000_000_000_000_000;

pub const MIN_REWARD_DURATION: u64 = 3 * WEEK / 7;
pub const MAX_REWARD_DURATION: u64 = 48 * WEEK;
