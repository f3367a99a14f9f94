use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone)]
#[repr(u32)]
pub enum RootGaugeError {
    BridgeUnavailable = 1201,
}
