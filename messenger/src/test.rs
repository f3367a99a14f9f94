#![cfg(test)]
extern crate std;

use crate::testutils::{Setup, CHILD_CHAIN, ROOT_CHAIN};
use cross_chain::Payload;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, IntoVal, Symbol, Val, Vec};

fn ping(setup: &Setup, value: u32) -> Payload {
    Payload {
        function: Symbol::new(&setup.env, "ping"),
        args: Vec::from_array(&setup.env, [value.into_val(&setup.env)]),
    }
}

#[test]
fn test_send_stores_message() {
    let setup = Setup::default();
    let sender = Address::generate(&setup.env);

    assert_eq!(setup.root.message_count(), 0);
    let id = setup.root.send(
        &sender,
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 21)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    assert_eq!(id, 0);
    assert_eq!(setup.root.message_count(), 1);

    let message = setup.root.get_message(&id);
    assert_eq!(message.origin_chain_id, ROOT_CHAIN);
    assert_eq!(message.to_chain_id, CHILD_CHAIN);
    assert_eq!(message.sender, sender);
    assert_eq!(message.payloads.get_unchecked(0), ping(&setup, 21));
}

#[test]
#[should_panic(expected = "Error(Contract, #803)")]
fn test_send_malformed() {
    let setup = Setup::default();
    setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #804)")]
fn test_unknown_message() {
    let setup = Setup::default();
    setup.root.get_message(&3);
}

#[test]
fn test_deliver_prefixes_origin() {
    let setup = Setup::default();
    let sender = Address::generate(&setup.env);
    let id = setup.root.send(
        &sender,
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 21)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );

    let results = setup
        .child
        .deliver(&setup.relayer, &setup.root.get_message(&id));
    assert_eq!(results.len(), 1);
    let result: u32 = results.get_unchecked(0).into_val(&setup.env);
    assert_eq!(result, 42);

    assert_eq!(setup.receiver.calls(), 1);
    assert_eq!(
        setup.receiver.last(),
        (setup.child.address.clone(), ROOT_CHAIN, sender)
    );
    assert_eq!(setup.child.delivery_receipts(&ROOT_CHAIN, &id), 1);
    // nothing queued back without callbacks
    assert_eq!(setup.child.message_count(), 0);
}

#[test]
fn test_redelivery_is_not_deduplicated() {
    let setup = Setup::default();
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 1)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    let message = setup.root.get_message(&id);
    setup.child.deliver(&setup.relayer, &message);
    setup.child.deliver(&setup.relayer, &message);

    // at-least-once: the receiver is responsible for idempotency
    assert_eq!(setup.receiver.calls(), 2);
    assert_eq!(setup.child.delivery_receipts(&ROOT_CHAIN, &id), 2);
}

#[test]
fn test_callback_is_queued_to_origin() {
    let setup = Setup::default();
    let callback = Address::generate(&setup.env);
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 5)]),
        &Vec::from_array(&setup.env, [callback.clone()]),
        &Vec::from_array(&setup.env, [77u64]),
    );
    setup
        .child
        .deliver(&setup.relayer, &setup.root.get_message(&id));

    assert_eq!(setup.child.message_count(), 1);
    let confirmation = setup.child.get_message(&0);
    assert_eq!(confirmation.origin_chain_id, CHILD_CHAIN);
    assert_eq!(confirmation.to_chain_id, ROOT_CHAIN);
    assert_eq!(confirmation.sender, setup.receiver.address);
    assert_eq!(confirmation.targets.get_unchecked(0), callback);

    let payload = confirmation.payloads.get_unchecked(0);
    assert_eq!(payload.function, Symbol::new(&setup.env, "messenger_callback"));
    let nonce: u64 = payload.args.get_unchecked(0).into_val(&setup.env);
    let result: u32 = payload.args.get_unchecked(1).into_val(&setup.env);
    assert_eq!(nonce, 77);
    assert_eq!(result, 10);
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_deliver_unknown_relayer() {
    let setup = Setup::default();
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 1)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    setup
        .child
        .deliver(&Address::generate(&setup.env), &setup.root.get_message(&id));
}

#[test]
#[should_panic(expected = "Error(Contract, #801)")]
fn test_deliver_closed_route() {
    let setup = Setup::default();
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 1)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    setup.child.set_relayer(&setup.owner, &ROOT_CHAIN, &None);
    setup
        .child
        .deliver(&setup.relayer, &setup.root.get_message(&id));
}

#[test]
#[should_panic(expected = "Error(Contract, #802)")]
fn test_deliver_wrong_destination() {
    let setup = Setup::default();
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &(CHILD_CHAIN + 1),
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(&setup.env, [ping(&setup, 1)]),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    setup
        .child
        .deliver(&setup.relayer, &setup.root.get_message(&id));
}

#[test]
fn test_failed_call_reverts_delivery() {
    let setup = Setup::default();
    let id = setup.root.send(
        &Address::generate(&setup.env),
        &CHILD_CHAIN,
        &Vec::from_array(&setup.env, [setup.receiver.address.clone()]),
        &Vec::from_array(
            &setup.env,
            [Payload {
                function: Symbol::new(&setup.env, "missing"),
                args: Vec::<Val>::new(&setup.env),
            }],
        ),
        &Vec::new(&setup.env),
        &Vec::new(&setup.env),
    );
    assert!(setup
        .child
        .try_deliver(&setup.relayer, &setup.root.get_message(&id))
        .is_err());
    assert_eq!(setup.child.delivery_receipts(&ROOT_CHAIN, &id), 0);
}
