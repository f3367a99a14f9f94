#![cfg(any(test, feature = "testutils"))]

use crate::constant::WEEK;
use soroban_sdk::testutils::{Ledger, LedgerInfo};
use soroban_sdk::Env;

pub fn assert_approx_eq_abs(a: u128, b: u128, delta: u128) {
    assert!(
        a + delta >= b && a <= b + delta,
        "assertion failed: `(left != right)` \
         (left: `{:?}`, right: `{:?}`, epsilon: `{:?}`)",
        a,
        b,
        delta
    );
}

pub fn time_warp(e: &Env, timestamp: u64) {
    e.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: e.ledger().protocol_version(),
        sequence_number: e.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 999999,
        min_persistent_entry_ttl: 999999,
        max_entry_ttl: u32::MAX,
    });
}

pub fn jump(e: &Env, time: u64) {
    time_warp(e, e.ledger().timestamp().saturating_add(time));
}

// moves to `offset` seconds past the start of the next week
pub fn jump_to_next_week(e: &Env, offset: u64) {
    let next_week = (e.ledger().timestamp() / WEEK + 1) * WEEK;
    time_warp(e, next_week + offset);
}
