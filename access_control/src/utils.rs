use crate::access::{AccessControl, AccessControlTrait};
use crate::errors::AccessControlError;
use crate::role::Role;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn require_owner(e: &Env, address: &Address) {
    AccessControl::new(e).assert_address_has_role(address, &Role::Owner);
}

pub fn require_owner_or_manager(e: &Env, address: &Address) {
    let access_control = AccessControl::new(e);
    let _ = access_control.address_has_role(address, &Role::Owner)
        || access_control.address_has_role(address, &Role::Manager)
        || panic_with_error!(e, AccessControlError::Unauthorized);
}

pub fn require_ownership_admin(e: &Env, address: &Address) {
    AccessControl::new(e).assert_address_has_role(address, &Role::OwnershipAdmin);
}

pub fn require_ownership_admin_or_manager(e: &Env, address: &Address) {
    let access_control = AccessControl::new(e);
    let _ = access_control.address_has_role(address, &Role::OwnershipAdmin)
        || access_control.address_has_role(address, &Role::Manager)
        || panic_with_error!(e, AccessControlError::Unauthorized);
}

pub fn require_ownership_or_emergency_admin(e: &Env, address: &Address) {
    let access_control = AccessControl::new(e);
    let _ = access_control.address_has_role(address, &Role::OwnershipAdmin)
        || access_control.address_has_role(address, &Role::EmergencyAdmin)
        || panic_with_error!(e, AccessControlError::Unauthorized);
}

pub fn require_any_admin_or_manager(e: &Env, address: &Address) {
    let access_control = AccessControl::new(e);
    let _ = access_control.address_has_role(address, &Role::Manager)
        || access_control.address_has_role(address, &Role::OwnershipAdmin)
        || access_control.address_has_role(address, &Role::EmergencyAdmin)
        || panic_with_error!(e, AccessControlError::Unauthorized);
}
