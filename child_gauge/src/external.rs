use soroban_sdk::{Address, Env, IntoVal, Symbol, Vec};

// Calls into the factory and the voting escrow mirror.

pub(crate) fn factory_owner(e: &Env, factory: &Address) -> Address {
    e.invoke_contract(factory, &Symbol::new(e, "owner"), Vec::new(e))
}

pub(crate) fn factory_voting_escrow(e: &Env, factory: &Address) -> Option<Address> {
    e.invoke_contract(factory, &Symbol::new(e, "voting_escrow"), Vec::new(e))
}

pub(crate) fn factory_root_factory(e: &Env, factory: &Address) -> Option<Address> {
    e.invoke_contract(factory, &Symbol::new(e, "root_factory"), Vec::new(e))
}

pub(crate) fn request_emissions(e: &Env, factory: &Address) -> bool {
    e.invoke_contract(
        factory,
        &Symbol::new(e, "request_emissions"),
        Vec::from_array(e, [e.current_contract_address().to_val()]),
    )
}

pub(crate) fn voting_balance(e: &Env, voting_escrow: &Address, user: &Address) -> u128 {
    e.invoke_contract(
        voting_escrow,
        &Symbol::new(e, "balance_of"),
        Vec::from_array(e, [user.into_val(e)]),
    )
}

pub(crate) fn voting_supply(e: &Env, voting_escrow: &Address) -> u128 {
    e.invoke_contract(voting_escrow, &Symbol::new(e, "total_supply"), Vec::new(e))
}
