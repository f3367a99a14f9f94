use crate::events::Events;
use crate::storage::{
    get_global_point, get_messenger, get_root_oracle, get_user_point, set_global_point,
    set_messenger, set_root_oracle, set_user_point,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_owner;
use cross_chain::gate::require_sender;
use cross_chain::{require_messenger, GlobalPoint, UserPoint};
use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env};
use utils::math_errors::MathError;

#[contract]
pub struct ChildVotingEscrowOracle;

// Voting power left at `now` on a linearly decaying point, never negative.
fn decay(e: &Env, bias: i128, slope: i128, ts: u64, now: u64) -> u128 {
    if now <= ts {
        return bias.max(0) as u128;
    }
    let decayed = match slope
        .checked_mul((now - ts) as i128)
        .and_then(|lost| bias.checked_sub(lost))
    {
        Some(value) => value,
        None => panic_with_error!(e, MathError::NumberOverflow),
    };
    decayed.max(0) as u128
}

#[contractimpl]
impl ChildVotingEscrowOracle {
    pub fn __constructor(e: Env, owner: Address) {
        AccessControl::new(&e).set_role_address(&Role::Owner, &owner);
    }

    // Stores a snapshot pushed by the root oracle. Snapshots older than the
    // stored ones are dropped, so replays and late deliveries are harmless.
    pub fn receive(
        e: Env,
        messenger: Address,
        origin_chain_id: u32,
        sender: Address,
        user_point: UserPoint,
        global_point: GlobalPoint,
        user: Address,
    ) {
        require_messenger(&e, &messenger, get_messenger(&e));
        require_sender(
            &e,
            &sender,
            get_root_oracle(&e)
                .filter(|(root_chain_id, _)| *root_chain_id == origin_chain_id)
                .map(|(_, root_oracle)| root_oracle),
        );

        let newer_user_point = match get_user_point(&e, &user) {
            Some(stored) => user_point.ts > stored.ts,
            None => true,
        };
        if newer_user_point {
            set_user_point(&e, &user, &user_point);
            Events::new(&e).user_point_updated(
                user,
                user_point.bias,
                user_point.slope,
                user_point.ts,
            );
        }

        let newer_global_point = match get_global_point(&e) {
            Some(stored) => global_point.ts > stored.ts,
            None => true,
        };
        if newer_global_point {
            set_global_point(&e, &global_point);
            Events::new(&e).global_point_updated(
                global_point.bias,
                global_point.slope,
                global_point.ts,
            );
        }
    }

    pub fn balance_of(e: Env, user: Address) -> u128 {
        let now = e.ledger().timestamp();
        match get_user_point(&e, &user) {
            Some(point) if now < point.end => decay(&e, point.bias, point.slope, point.ts, now),
            _ => 0,
        }
    }

    pub fn total_supply(e: Env) -> u128 {
        match get_global_point(&e) {
            Some(point) => decay(
                &e,
                point.bias,
                point.slope,
                point.ts,
                e.ledger().timestamp(),
            ),
            None => 0,
        }
    }

    pub fn user_point(e: Env, user: Address) -> Option<UserPoint> {
        get_user_point(&e, &user)
    }

    pub fn global_point(e: Env) -> Option<GlobalPoint> {
        get_global_point(&e)
    }

    pub fn set_messenger(e: Env, owner: Address, messenger: Option<Address>) {
        owner.require_auth();
        require_owner(&e, &owner);
        set_messenger(&e, &messenger);
        Events::new(&e).update_messenger(messenger);
    }

    pub fn set_root_oracle(e: Env, owner: Address, root_chain_id: u32, root_oracle: Address) {
        owner.require_auth();
        require_owner(&e, &owner);
        set_root_oracle(&e, root_chain_id, &root_oracle);
        Events::new(&e).update_root_oracle(root_chain_id, root_oracle);
    }

    pub fn messenger(e: Env) -> Option<Address> {
        get_messenger(&e)
    }

    pub fn root_oracle(e: Env) -> Option<Address> {
        get_root_oracle(&e).map(|(_, root_oracle)| root_oracle)
    }
}

#[contractimpl]
impl TransferableContract for ChildVotingEscrowOracle {
    fn commit_transfer_ownership(e: Env, owner: Address, new_owner: Address) {
        owner.require_auth();
        require_owner(&e, &owner);
        AccessControl::new(&e).commit_transfer_ownership(&Role::Owner, &new_owner);
        AccessControlEvents::new(&e).commit_transfer_ownership(Role::Owner, new_owner);
    }

    fn accept_transfer_ownership(e: Env, new_owner: Address) {
        new_owner.require_auth();
        let owner =
            AccessControl::new(&e).accept_transfer_ownership(&Role::Owner, &new_owner);
        AccessControlEvents::new(&e).accept_transfer_ownership(Role::Owner, owner);
    }

    fn owner(e: Env) -> Address {
        AccessControl::new(&e).get_role(&Role::Owner)
    }

    fn future_owner(e: Env) -> Option<Address> {
        AccessControl::new(&e).get_future_address(&Role::Owner)
    }
}
