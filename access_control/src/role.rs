use crate::errors::AccessControlError;
use soroban_sdk::{panic_with_error, Env, Symbol};

#[derive(Clone)]
pub enum Role {
    // factory owner
    Owner,
    // delegated operational control
    Manager,
    // governance proxy tiers
    OwnershipAdmin,
    EmergencyAdmin,
}

impl Role {
    // transferable roles change hands through commit + accept only
    pub(crate) fn is_transferable(&self) -> bool {
        match self {
            Role::Owner => true,
            Role::Manager => false,
            Role::OwnershipAdmin => true,
            Role::EmergencyAdmin => true,
        }
    }
}

pub trait SymbolRepresentation {
    fn as_symbol(&self, e: &Env) -> Symbol;
    fn from_symbol(e: &Env, value: Symbol) -> Self;
}

impl SymbolRepresentation for Role {
    fn as_symbol(&self, e: &Env) -> Symbol {
        match self {
            Role::Owner => Symbol::new(e, "Owner"),
            Role::Manager => Symbol::new(e, "Manager"),
            Role::OwnershipAdmin => Symbol::new(e, "OwnershipAdmin"),
            Role::EmergencyAdmin => Symbol::new(e, "EmergencyAdmin"),
        }
    }

    fn from_symbol(e: &Env, value: Symbol) -> Self {
        if value == Symbol::new(e, "Owner") {
            return Role::Owner;
        } else if value == Symbol::new(e, "Manager") {
            return Role::Manager;
        } else if value == Symbol::new(e, "OwnershipAdmin") {
            return Role::OwnershipAdmin;
        } else if value == Symbol::new(e, "EmergencyAdmin") {
            return Role::EmergencyAdmin;
        }
        panic_with_error!(e, AccessControlError::BadRoleUsage);
    }
}
