use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone)]
#[repr(u32)]
pub enum RewardsError {
    PeriodBounds = 901,
    RewardAlreadyExists = 902,
    RewardNotFound = 903,
    MaxRewardsReached = 904,
    DecimalsTooLarge = 905,
    PeriodNotFinished = 906,
}
