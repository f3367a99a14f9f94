pub(crate) const PRECISION: u128 = 1_000_000_000_000_000_000;

// minter rate is divided by 2 ** (1/4) every year
pub(crate) const RATE_REDUCTION_COEFFICIENT: u128 = 1_189_207_115_002_721_024;
pub(crate) const RATE_REDUCTION_TIME: u64 = 365 * 86400;

pub(crate) const MAX_CHECKPOINT_WEEKS: u64 = 255;
