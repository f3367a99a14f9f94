use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone)]
#[repr(u32)]
pub enum DeployerError {
    DuplicateDeployment = 701,
    GaugeNotFound = 702,
}
