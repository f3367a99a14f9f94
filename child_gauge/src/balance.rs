use crate::errors::GaugeError;
use crate::storage::{get_total_supply, set_total_supply};
use soroban_sdk::{contracttype, panic_with_error, Address, Env};
use utils::bump::bump_persistent;

#[derive(Clone)]
#[contracttype]
enum DataKey {
    Balance(Address),
}

fn write_balance(e: &Env, addr: Address, amount: u128) {
    let key = DataKey::Balance(addr);
    e.storage().persistent().set(&key, &amount);
    bump_persistent(e, &key);
}

pub fn read_balance(e: &Env, addr: Address) -> u128 {
    let key = DataKey::Balance(addr);
    match e.storage().persistent().get::<DataKey, u128>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => 0,
    }
}

pub fn receive_balance(e: &Env, addr: Address, amount: u128) {
    let balance = read_balance(e, addr.clone());
    write_balance(e, addr, balance + amount);
}

pub fn spend_balance(e: &Env, addr: Address, amount: u128) {
    let balance = read_balance(e, addr.clone());
    if balance < amount {
        panic_with_error!(e, GaugeError::InsufficientBalance);
    }
    write_balance(e, addr, balance - amount);
}

pub fn mint(e: &Env, to: Address, amount: u128) {
    receive_balance(e, to, amount);
    set_total_supply(e, &(get_total_supply(e) + amount));
}

pub fn burn(e: &Env, from: Address, amount: u128) {
    spend_balance(e, from, amount);
    set_total_supply(e, &(get_total_supply(e) - amount));
}

pub fn check_nonnegative_amount(e: &Env, amount: i128) -> u128 {
    if amount < 0 {
        panic_with_error!(e, GaugeError::NegativeNotAllowed);
    }
    amount as u128
}
