use crate::access::AccessControl;
use crate::errors::AccessControlError;
use crate::role::Role;
use crate::storage::StorageTrait;
use soroban_sdk::{panic_with_error, Address};
use utils::bump::bump_instance;

// Two-step transfer: the current holder commits a future address,
// only that future address can accept.
pub trait TransferOwnershipTrait {
    fn get_future_address(&self, role: &Role) -> Option<Address>;
    fn commit_transfer_ownership(&self, role: &Role, future_address: &Address);
    fn accept_transfer_ownership(&self, role: &Role, caller: &Address) -> Address;
    fn apply_transfer_ownership(&self, role: &Role) -> Address;
}

impl TransferOwnershipTrait for AccessControl {
    fn get_future_address(&self, role: &Role) -> Option<Address> {
        if !role.is_transferable() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        bump_instance(&self.0);
        self.0.storage().instance().get(&self.get_future_key(role))
    }

    fn commit_transfer_ownership(&self, role: &Role, future_address: &Address) {
        if !role.is_transferable() {
            panic_with_error!(&self.0, AccessControlError::BadRoleUsage);
        }

        bump_instance(&self.0);
        self.0
            .storage()
            .instance()
            .set(&self.get_future_key(role), future_address);
    }

    fn accept_transfer_ownership(&self, role: &Role, caller: &Address) -> Address {
        match self.get_future_address(role) {
            Some(future_address) if &future_address == caller => {}
            Some(_) => panic_with_error!(&self.0, AccessControlError::Unauthorized),
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        }
        self.apply_transfer_ownership(role)
    }

    // moves the pending address into the role without checking the caller.
    // used when one acceptance completes several committed roles at once.
    fn apply_transfer_ownership(&self, role: &Role) -> Address {
        let future_address = match self.get_future_address(role) {
            Some(v) => v,
            None => panic_with_error!(&self.0, AccessControlError::NoActionActive),
        };

        let storage = self.0.storage().instance();
        bump_instance(&self.0);
        storage.set(&self.get_key(role), &future_address);
        storage.remove(&self.get_future_key(role));

        future_address
    }
}
