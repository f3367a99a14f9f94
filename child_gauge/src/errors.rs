use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone)]
#[repr(u32)]
pub enum GaugeError {
    InsufficientBalance = 1001,
    InsufficientAllowance = 1002,
    NegativeNotAllowed = 1003,
    PastTimeNotAllowed = 1004,
}
