use crate::errors::CrossChainError;
use soroban_sdk::{panic_with_error, Address, Env};

// Inbound gate for adapter-originated calls: the claimed messenger must be the
// configured one and must have authorized the invocation.
pub fn require_messenger(e: &Env, messenger: &Address, configured: Option<Address>) {
    match configured {
        Some(configured) if &configured == messenger => messenger.require_auth(),
        Some(_) => panic_with_error!(e, CrossChainError::OriginNotAllowed),
        None => panic_with_error!(e, CrossChainError::MessengerNotConfigured),
    }
}

// Origin check performed after the gate: the message must come from `expected`.
pub fn require_sender(e: &Env, sender: &Address, expected: Option<Address>) {
    match expected {
        Some(expected) if &expected == sender => {}
        _ => panic_with_error!(e, CrossChainError::OriginNotAllowed),
    }
}
