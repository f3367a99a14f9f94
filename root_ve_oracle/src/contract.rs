use crate::errors::OracleError;
use crate::events::Events;
use crate::storage::{
    get_child_oracle, get_messenger, get_voting_escrow, set_child_oracle, set_messenger,
    set_voting_escrow,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_owner;
use cross_chain::errors::CrossChainError;
use cross_chain::messenger::send_call;
use cross_chain::{GlobalPoint, UserPoint};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, Address, Env, IntoVal, Symbol, Vec,
};

#[contract]
pub struct RootVotingEscrowOracle;

#[contractimpl]
impl RootVotingEscrowOracle {
    pub fn __constructor(e: Env, owner: Address, voting_escrow: Address) {
        AccessControl::new(&e).set_role_address(&Role::Owner, &owner);
        set_voting_escrow(&e, &voting_escrow);
    }

    // Sends the latest voting-escrow points of `user` to the child oracle of `chain_id`.
    // Permissionless: the data is public and the child keeps only the newest snapshot.
    // Returns the messenger id of the outgoing message.
    pub fn push(e: Env, chain_id: u32, user: Address) -> u64 {
        let child_oracle = match get_child_oracle(&e, chain_id) {
            Some(child_oracle) => child_oracle,
            None => panic_with_error!(&e, OracleError::ChildOracleNotConfigured),
        };
        let messenger = match get_messenger(&e) {
            Some(messenger) => messenger,
            None => panic_with_error!(&e, CrossChainError::MessengerNotConfigured),
        };

        let voting_escrow = get_voting_escrow(&e);
        let user_point: UserPoint = e.invoke_contract(
            &voting_escrow,
            &Symbol::new(&e, "get_last_user_point"),
            Vec::from_array(&e, [user.to_val()]),
        );
        let global_point: GlobalPoint = e.invoke_contract(
            &voting_escrow,
            &Symbol::new(&e, "get_last_global_point"),
            Vec::new(&e),
        );

        let message_id = send_call(
            &e,
            &messenger,
            chain_id,
            &child_oracle,
            "receive",
            Vec::from_array(
                &e,
                [
                    user_point.into_val(&e),
                    global_point.into_val(&e),
                    user.to_val(),
                ],
            ),
        );
        Events::new(&e).push(chain_id, user, message_id);
        message_id
    }

    pub fn set_child_oracle(e: Env, owner: Address, chain_id: u32, child_oracle: Option<Address>) {
        owner.require_auth();
        require_owner(&e, &owner);
        set_child_oracle(&e, chain_id, &child_oracle);
        Events::new(&e).update_child_oracle(chain_id, child_oracle);
    }

    pub fn set_messenger(e: Env, owner: Address, messenger: Option<Address>) {
        owner.require_auth();
        require_owner(&e, &owner);
        set_messenger(&e, &messenger);
        Events::new(&e).update_messenger(messenger);
    }

    pub fn child_oracle(e: Env, chain_id: u32) -> Option<Address> {
        get_child_oracle(&e, chain_id)
    }

    pub fn messenger(e: Env) -> Option<Address> {
        get_messenger(&e)
    }

    pub fn voting_escrow(e: Env) -> Address {
        get_voting_escrow(&e)
    }
}

#[contractimpl]
impl TransferableContract for RootVotingEscrowOracle {
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
