use crate::events::Events;
use crate::storage::{
    get_chain_id, get_message, get_message_count, get_receipts, get_relayer, set_chain_id,
    set_message, set_message_count, set_receipts, set_relayer, MessageKey,
};
use access_control::access::{AccessControl, AccessControlTrait};
use access_control::events::Events as AccessControlEvents;
use access_control::interface::TransferableContract;
use access_control::role::Role;
use access_control::transfer::TransferOwnershipTrait;
use access_control::utils::require_owner;
use cross_chain::errors::CrossChainError;
use cross_chain::{Message, Payload};
use soroban_sdk::{
    contract, contractimpl, panic_with_error, Address, Env, IntoVal, Symbol, Val, Vec,
};

#[contract]
pub struct Messenger;

#[contractimpl]
impl Messenger {
    // Initializes the messenger endpoint of a chain.
    //
    // # Arguments
    //
    // * `owner` - The address allowed to manage relayers.
    // * `chain_id` - Identifier of the chain this endpoint lives on.
    pub fn __constructor(e: Env, owner: Address, chain_id: u32) {
        AccessControl::new(&e).set_role_address(&Role::Owner, &owner);
        set_chain_id(&e, &chain_id);
    }

    pub fn chain_id(e: Env) -> u32 {
        get_chain_id(&e)
    }

    // Queues a message for delivery to another chain and returns its id.
    // Delivery is at-least-once and unordered; receivers must tolerate replays.
    //
    // # Arguments
    //
    // * `sender` - The account or contract dispatching the message.
    // * `to_chain_id` - Destination chain.
    // * `targets` - Contracts to call on the destination chain.
    // * `payloads` - One call per target.
    // * `callbacks` - Empty, or one origin-chain contract per target to confirm delivery to.
    // * `nonces` - Empty, or one value per target echoed back in the confirmation.
    pub fn send(
        e: Env,
        sender: Address,
        to_chain_id: u32,
        targets: Vec<Address>,
        payloads: Vec<Payload>,
        callbacks: Vec<Address>,
        nonces: Vec<u64>,
    ) -> u64 {
        sender.require_auth();
        let id = get_message_count(&e);
        let message = Message {
            id,
            origin_chain_id: get_chain_id(&e),
            to_chain_id,
            sender: sender.clone(),
            targets,
            payloads,
            callbacks,
            nonces,
        };
        if !message.is_well_formed() {
            panic_with_error!(&e, CrossChainError::MalformedMessage);
        }

        enqueue(&e, &message);
        id
    }

    // Executes a message relayed from its origin chain.
    // Each payload is invoked with `(messenger, origin_chain_id, sender)` prepended
    // to its arguments. Returns the result of every call.
    //
    // # Arguments
    //
    // * `relayer` - Whitelisted relayer for the message's origin chain.
    // * `message` - The message as stored in the origin chain outbox.
    pub fn deliver(e: Env, relayer: Address, message: Message) -> Vec<Val> {
        relayer.require_auth();
        match get_relayer(&e, message.origin_chain_id) {
            Some(allowed) if allowed == relayer => {}
            _ => panic_with_error!(&e, CrossChainError::OriginNotAllowed),
        }
        let chain_id = get_chain_id(&e);
        if message.to_chain_id != chain_id {
            panic_with_error!(&e, CrossChainError::WrongDestination);
        }
        if !message.is_well_formed() {
            panic_with_error!(&e, CrossChainError::MalformedMessage);
        }

        let mut results = Vec::new(&e);
        for index in 0..message.targets.len() {
            let target = message.targets.get_unchecked(index);
            let payload = message.payloads.get_unchecked(index);

            let mut args = Vec::from_array(
                &e,
                [
                    e.current_contract_address().to_val(),
                    message.origin_chain_id.into_val(&e),
                    message.sender.to_val(),
                ],
            );
            args.append(&payload.args);
            let result: Val = e.invoke_contract(&target, &payload.function, args);
            results.push_back(result);

            if !message.callbacks.is_empty() {
                let nonce = match message.nonces.is_empty() {
                    true => 0,
                    false => message.nonces.get_unchecked(index),
                };
                enqueue(
                    &e,
                    &Message {
                        id: get_message_count(&e),
                        origin_chain_id: chain_id,
                        to_chain_id: message.origin_chain_id,
                        sender: target,
                        targets: Vec::from_array(&e, [message.callbacks.get_unchecked(index)]),
                        payloads: Vec::from_array(
                            &e,
                            [Payload {
                                function: Symbol::new(&e, "messenger_callback"),
                                args: Vec::from_array(&e, [nonce.into_val(&e), result]),
                            }],
                        ),
                        callbacks: Vec::new(&e),
                        nonces: Vec::new(&e),
                    },
                );
            }
        }

        // receipts are recorded, never used to drop a message
        let key = MessageKey {
            origin_chain_id: message.origin_chain_id,
            id: message.id,
        };
        let receipts = get_receipts(&e, key.clone()) + 1;
        set_receipts(&e, key, receipts);
        Events::new(&e).deliver(message.origin_chain_id, message.id, relayer, receipts);

        results
    }

    pub fn get_message(e: Env, id: u64) -> Message {
        get_message(&e, id)
    }

    pub fn message_count(e: Env) -> u64 {
        get_message_count(&e)
    }

    // Number of times the message `(origin_chain_id, id)` was delivered here.
    pub fn delivery_receipts(e: Env, origin_chain_id: u32, id: u64) -> u32 {
        get_receipts(
            &e,
            MessageKey {
                origin_chain_id,
                id,
            },
        )
    }

    // Whitelists the relayer trusted to deliver messages from `origin_chain_id`.
    // `None` closes the route.
    //
    // # Arguments
    //
    // * `owner` - The messenger owner.
    // * `origin_chain_id` - Chain the relayer delivers from.
    // * `relayer` - The relayer address, or `None`.
    pub fn set_relayer(e: Env, owner: Address, origin_chain_id: u32, relayer: Option<Address>) {
        owner.require_auth();
        require_owner(&e, &owner);
        set_relayer(&e, origin_chain_id, &relayer);
        Events::new(&e).set_relayer(origin_chain_id, relayer);
    }

    pub fn relayer(e: Env, origin_chain_id: u32) -> Option<Address> {
        get_relayer(&e, origin_chain_id)
    }
}

fn enqueue(e: &Env, message: &Message) {
    set_message(e, message);
    set_message_count(e, &(message.id + 1));
    Events::new(e).send(message.id, message.to_chain_id, message.sender.clone());
}

#[contractimpl]
impl TransferableContract for Messenger {
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
