use soroban_sdk::{Address, Env};

pub trait TransferableContract {
    // Commit ownership transfer
    fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address);

    // Accept committed ownership transfer, callable by the pending owner only
    fn accept_transfer_ownership(e: Env, new_owner: Address);

    // Current owner
    fn owner(e: Env) -> Address;

    // Pending owner if a transfer is committed
    fn future_owner(e: Env) -> Option<Address>;
}

pub trait ManagedContract {
    // Reassign operational control
    fn set_manager(e: Env, caller: Address, manager: Address);

    // Current manager
    fn manager(e: Env) -> Address;
}
