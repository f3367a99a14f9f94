use crate::access::AccessControl;
use crate::errors::AccessControlError;
use crate::role::Role;
use soroban_sdk::{contracttype, panic_with_error};

#[derive(Clone)]
#[contracttype]
pub(crate) enum DataKey {
    Owner,
    FutureOwner,
    Manager,
    OwnershipAdmin,
    FutureOwnershipAdmin,
    EmergencyAdmin,
    FutureEmergencyAdmin,
}

pub(crate) trait StorageTrait {
    fn get_key(&self, role: &Role) -> DataKey;
    fn get_future_key(&self, role: &Role) -> DataKey;
}

impl StorageTrait for AccessControl {
    fn get_key(&self, role: &Role) -> DataKey {
        match role {
            Role::Owner => DataKey::Owner,
            Role::Manager => DataKey::Manager,
            Role::OwnershipAdmin => DataKey::OwnershipAdmin,
            Role::EmergencyAdmin => DataKey::EmergencyAdmin,
        }
    }

    fn get_future_key(&self, role: &Role) -> DataKey {
        match role {
            Role::Owner => DataKey::FutureOwner,
            Role::OwnershipAdmin => DataKey::FutureOwnershipAdmin,
            Role::EmergencyAdmin => DataKey::FutureEmergencyAdmin,
            Role::Manager => panic_with_error!(&self.0, AccessControlError::BadRoleUsage),
        }
    }
}
