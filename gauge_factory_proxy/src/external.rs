use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

// Calls an owner-gated factory entrypoint with the proxy as the caller.
pub(crate) fn factory_call(e: &Env, factory: &Address, function: &str, args: Vec<Val>) {
    let mut call_args = Vec::from_array(e, [e.current_contract_address().to_val()]);
    call_args.append(&args);
    e.invoke_contract::<()>(factory, &Symbol::new(e, function), call_args);
}

pub(crate) fn factory_accept_transfer_ownership(e: &Env, factory: &Address) {
    e.invoke_contract::<()>(
        factory,
        &Symbol::new(e, "accept_transfer_ownership"),
        Vec::from_array(e, [e.current_contract_address().into_val(e)]),
    );
}
