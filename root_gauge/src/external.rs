use soroban_sdk::{Address, Env, IntoVal, Symbol, Vec};

// Gauge controller

pub(crate) fn checkpoint_gauge(e: &Env, controller: &Address) {
    e.invoke_contract::<()>(
        controller,
        &Symbol::new(e, "checkpoint_gauge"),
        Vec::from_array(e, [e.current_contract_address().to_val()]),
    )
}

pub(crate) fn gauge_relative_weight(e: &Env, controller: &Address, time: u64) -> u128 {
    e.invoke_contract(
        controller,
        &Symbol::new(e, "gauge_relative_weight"),
        Vec::from_array(
            e,
            [e.current_contract_address().to_val(), time.into_val(e)],
        ),
    )
}

// Minter

pub(crate) fn minter_rate(e: &Env, minter: &Address) -> u128 {
    e.invoke_contract(minter, &Symbol::new(e, "rate"), Vec::new(e))
}

pub(crate) fn minter_future_epoch_time(e: &Env, minter: &Address) -> u64 {
    e.invoke_contract(minter, &Symbol::new(e, "future_epoch_time"), Vec::new(e))
}

pub(crate) fn minter_mint(e: &Env, minter: &Address, amount: u128) {
    e.invoke_contract::<()>(
        minter,
        &Symbol::new(e, "mint"),
        Vec::from_array(
            e,
            [e.current_contract_address().to_val(), amount.into_val(e)],
        ),
    )
}

// Bridger

pub(crate) fn bridger_check(e: &Env, bridger: &Address) -> bool {
    e.invoke_contract(
        bridger,
        &Symbol::new(e, "check"),
        Vec::from_array(e, [e.current_contract_address().to_val()]),
    )
}

pub(crate) fn bridger_bridge(
    e: &Env,
    bridger: &Address,
    token: &Address,
    recipient: &Address,
    amount: u128,
) {
    e.invoke_contract::<()>(
        bridger,
        &Symbol::new(e, "bridge"),
        Vec::from_array(
            e,
            [token.to_val(), recipient.to_val(), amount.into_val(e)],
        ),
    )
}

// Root factory

pub(crate) fn factory_child_factory(e: &Env, factory: &Address, chain_id: u32) -> Option<Address> {
    e.invoke_contract(
        factory,
        &Symbol::new(e, "get_child_factory"),
        Vec::from_array(e, [chain_id.into_val(e)]),
    )
}
