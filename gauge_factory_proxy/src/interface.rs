use soroban_sdk::{Address, BytesN, Env};

pub trait AdminsInterface {
    // Stage a new pair of proxy admins. Ownership admin only.
    fn commit_set_admins(e: Env, caller: Address, ownership_admin: Address, emergency_admin: Address);

    // Apply the staged admins, callable by the future ownership admin only
    fn accept_set_admins(e: Env, caller: Address);

    fn ownership_admin(e: Env) -> Address;
    fn emergency_admin(e: Env) -> Address;
    fn future_ownership_admin(e: Env) -> Option<Address>;
    fn future_emergency_admin(e: Env) -> Option<Address>;
}

pub trait FactoryProxyInterface {
    // Stage `new_owner` as the future owner of `factory`
    fn commit_transfer_ownership(e: Env, caller: Address, factory: Address, new_owner: Address);

    // Complete a transfer of `factory` to this proxy. Callable by anyone.
    fn accept_transfer_ownership(e: Env, factory: Address);

    fn set_killed(e: Env, caller: Address, factory: Address, gauge: Address, is_killed: bool);

    fn set_bridger(e: Env, caller: Address, factory: Address, chain_id: u32, bridger: Address);

    fn set_implementation(
        e: Env,
        caller: Address,
        factory: Address,
        implementation: BytesN<32>,
    );

    fn set_messenger(e: Env, caller: Address, factory: Address, messenger: Option<Address>);

    fn set_child(
        e: Env,
        caller: Address,
        factory: Address,
        chain_id: u32,
        bridger: Address,
        child_factory: Address,
        child_implementation: BytesN<32>,
    );
}
