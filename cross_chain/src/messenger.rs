use crate::types::Payload;
use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

// Thin client over the messenger `send` entrypoint.
pub fn send(
    e: &Env,
    messenger: &Address,
    to_chain_id: u32,
    targets: Vec<Address>,
    payloads: Vec<Payload>,
    callbacks: Vec<Address>,
    nonces: Vec<u64>,
) -> u64 {
    e.invoke_contract(
        messenger,
        &Symbol::new(e, "send"),
        Vec::from_array(
            e,
            [
                e.current_contract_address().to_val(),
                to_chain_id.into_val(e),
                targets.into_val(e),
                payloads.into_val(e),
                callbacks.into_val(e),
                nonces.into_val(e),
            ],
        ),
    )
}

// Single call, no confirmation requested.
pub fn send_call(
    e: &Env,
    messenger: &Address,
    to_chain_id: u32,
    target: &Address,
    function: &str,
    args: Vec<Val>,
) -> u64 {
    send(
        e,
        messenger,
        to_chain_id,
        Vec::from_array(e, [target.clone()]),
        Vec::from_array(
            e,
            [Payload {
                function: Symbol::new(e, function),
                args,
            }],
        ),
        Vec::new(e),
        Vec::new(e),
    )
}
