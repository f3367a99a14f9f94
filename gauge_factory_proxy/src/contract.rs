use crate::events::Events;
use crate::external::{factory_accept_transfer_ownership, factory_call};
use crate::interface::{AdminsInterface, FactoryProxyInterface};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::ManagedContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::{
    require_any_admin_or_manager, require_ownership_admin, require_ownership_admin_or_manager,
    require_ownership_or_emergency_admin,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, IntoVal, Vec};

// Layered admin in front of gauge factories. Once installed as a factory
// owner, every owner-only factory call goes through the role checks below.
#[contract]
pub struct GaugeFactoryProxy;

#[contractimpl]
impl GaugeFactoryProxy {
    // # Arguments
    //
    // * `ownership_admin` - Full control, including factory ownership transfers.
    // * `emergency_admin` - May kill gauges and reassign the manager.
    // * `manager` - Day to day factory configuration.
    pub fn __constructor(
        e: Env,
        ownership_admin: Address,
        emergency_admin: Address,
        manager: Address,
    ) {
        let access_control = AccessControl::new(&e);
        access_control.set_role_address(&Role::OwnershipAdmin, &ownership_admin);
        access_control.set_role_address(&Role::EmergencyAdmin, &emergency_admin);
        access_control.set_role_address(&Role::Manager, &manager);
    }
}

#[contractimpl]
impl AdminsInterface for GaugeFactoryProxy {
    fn commit_set_admins(
        e: Env,
        caller: Address,
        ownership_admin: Address,
        emergency_admin: Address,
    ) {
        caller.require_auth();
        require_ownership_admin(&e, &caller);

        let access_control = AccessControl::new(&e);
        access_control.commit_transfer_ownership(&Role::OwnershipAdmin, &ownership_admin);
        access_control.commit_transfer_ownership(&Role::EmergencyAdmin, &emergency_admin);
        Events::new(&e).commit_set_admins(ownership_admin, emergency_admin);
    }

    fn accept_set_admins(e: Env, caller: Address) {
        caller.require_auth();

        let access_control = AccessControl::new(&e);
        let ownership_admin =
            access_control.accept_transfer_ownership(&Role::OwnershipAdmin, &caller);
        let emergency_admin = access_control.apply_transfer_ownership(&Role::EmergencyAdmin);
        Events::new(&e).accept_set_admins(ownership_admin, emergency_admin);
    }

    fn ownership_admin(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::OwnershipAdmin)
    }

    fn emergency_admin(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::EmergencyAdmin)
    }

    fn future_ownership_admin(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_address(&Role::OwnershipAdmin)
    }

    fn future_emergency_admin(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_address(&Role::EmergencyAdmin)
    }
}

#[contractimpl]
impl FactoryProxyInterface for GaugeFactoryProxy {
    fn commit_transfer_ownership(e: Env, caller: Address, factory: Address, new_owner: Address) {
        caller.require_auth();
        require_ownership_admin(&e, &caller);

        factory_call(
            &e,
            &factory,
            "commit_transfer_ownership",
            Vec::from_array(&e, [new_owner.into_val(&e)]),
        );
        Events::new(&e).factory_call(factory, "commit_transfer_ownership", caller);
    }

    fn accept_transfer_ownership(e: Env, factory: Address) {
        factory_accept_transfer_ownership(&e, &factory);
    }

    fn set_killed(e: Env, caller: Address, factory: Address, gauge: Address, is_killed: bool) {
        caller.require_auth();
        require_ownership_or_emergency_admin(&e, &caller);

        factory_call(
            &e,
            &factory,
            "set_killed",
            Vec::from_array(&e, [gauge.into_val(&e), is_killed.into_val(&e)]),
        );
        Events::new(&e).factory_call(factory, "set_killed", caller);
    }

    fn set_bridger(e: Env, caller: Address, factory: Address, chain_id: u32, bridger: Address) {
        caller.require_auth();
        require_ownership_admin_or_manager(&e, &caller);

        factory_call(
            &e,
            &factory,
            "set_bridger",
            Vec::from_array(&e, [chain_id.into_val(&e), bridger.into_val(&e)]),
        );
        Events::new(&e).factory_call(factory, "set_bridger", caller);
    }

    fn set_implementation(
        e: Env,
        caller: Address,
        factory: Address,
        implementation: BytesN<32>,
    ) {
        caller.require_auth();
        require_ownership_admin_or_manager(&e, &caller);

        factory_call(
            &e,
            &factory,
            "set_implementation",
            Vec::from_array(&e, [implementation.into_val(&e)]),
        );
        Events::new(&e).factory_call(factory, "set_implementation", caller);
    }

    fn set_messenger(e: Env, caller: Address, factory: Address, messenger: Option<Address>) {
        caller.require_auth();
        require_ownership_admin_or_manager(&e, &caller);

        factory_call(
            &e,
            &factory,
            "set_messenger",
            Vec::from_array(&e, [messenger.into_val(&e)]),
        );
        Events::new(&e).factory_call(factory, "set_messenger", caller);
    }

    fn set_child(
        e: Env,
        caller: Address,
        factory: Address,
        chain_id: u32,
        bridger: Address,
        child_factory: Address,
        child_implementation: BytesN<32>,
    ) {
        caller.require_auth();
        require_ownership_admin_or_manager(&e, &caller);

        factory_call(
            &e,
            &factory,
            "set_child",
            Vec::from_array(
                &e,
                [
                    chain_id.into_val(&e),
                    bridger.into_val(&e),
                    child_factory.into_val(&e),
                    child_implementation.into_val(&e),
                ],
            ),
        );
        Events::new(&e).factory_call(factory, "set_child", caller);
    }
}

#[contractimpl]
impl ManagedContract for GaugeFactoryProxy {
    // Any admin may reassign the manager, including to itself.
    fn set_manager(e: Env, caller: Address, manager: Address) {
        caller.require_auth();
        require_any_admin_or_manager(&e, &caller);
        AccessControl::new(&e).set_role_address(&Role::Manager, &manager);
        AccessControlEvents::new(&e).set_manager(manager);
    }

    fn manager(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Manager)
    }
}
