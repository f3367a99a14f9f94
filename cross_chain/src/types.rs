use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

// Function call executed on the destination chain. Arguments are appended
// after the `(messenger, origin_chain_id, sender)` prefix added on delivery.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Payload {
    pub function: Symbol,
    pub args: Vec<Val>,
}

// Envelope relayed between chains. `(origin_chain_id, id)` identifies it uniquely.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Message {
    pub id: u64,
    pub origin_chain_id: u32,
    pub to_chain_id: u32,
    pub sender: Address,
    pub targets: Vec<Address>,
    pub payloads: Vec<Payload>,
    pub callbacks: Vec<Address>,
    pub nonces: Vec<u64>,
}

impl Message {
    // callbacks and nonces are optional but, when present, pair with every target
    pub fn is_well_formed(&self) -> bool {
        let targets = self.targets.len();
        targets > 0
            && self.payloads.len() == targets
            && (self.callbacks.is_empty() || self.callbacks.len() == targets)
            && (self.nonces.is_empty() || self.nonces.len() == targets)
    }
}

// Voting-escrow snapshots pushed from the root chain. Balances decay linearly:
// `bias - slope * (t - ts)`, never below zero.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserPoint {
    pub bias: i128,
    pub slope: i128,
    pub ts: u64,
    pub end: u64,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GlobalPoint {
    pub bias: i128,
    pub slope: i128,
    pub ts: u64,
}
