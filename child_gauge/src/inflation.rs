use crate::events::Events;
use crate::external::{voting_balance, voting_supply};
use crate::storage::{
    get_factory, get_inflation_rate, get_integrate_fraction, get_integrate_inv_supply,
    get_integrate_inv_supply_of, get_is_killed, get_period, get_period_timestamp, get_token,
    get_total_emissions, get_working_balance, get_working_supply, set_inflation_rate,
    set_integrate_checkpoint_of, set_integrate_fraction, set_integrate_inv_supply,
    set_integrate_inv_supply_of, set_period, set_period_timestamp, set_total_emissions,
    set_working_balance, set_working_supply,
};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient as Client;
use soroban_sdk::{log, Address, Env};
use utils::constant::WEEK;

pub(crate) const INTEGRAL_PRECISION: u128 = 1_000_000_000_000_000_000;
pub(crate) const MAX_CHECKPOINT_WEEKS: u32 = 256;
pub(crate) const TOKENLESS_PRODUCTION: u128 = 40;

// Integrates the inflation rate over working supply since the last period,
// books any freshly bridged emissions into the current week and accrues
// `user`'s integrate fraction.
pub(crate) fn checkpoint(e: &Env, user: &Address) {
    let now = e.ledger().timestamp();
    let mut period = get_period(e);
    let period_time = get_period_timestamp(e, period);
    let mut integrate_inv_supply = get_integrate_inv_supply(e, period);

    if now > period_time {
        let working_supply = get_working_supply(e);
        let is_killed = get_is_killed(e);
        let mut prev_week_time = period_time;
        let mut week_time = ((period_time + WEEK) / WEEK * WEEK).min(now);

        for _ in 0..MAX_CHECKPOINT_WEEKS {
            let dt = (week_time - prev_week_time) as u128;
            if working_supply > 0 && !is_killed {
                let rate = get_inflation_rate(e, prev_week_time / WEEK);
                integrate_inv_supply +=
                    (rate * dt).fixed_mul_floor(e, &INTEGRAL_PRECISION, &working_supply);
            }
            if week_time == now {
                break;
            }
            prev_week_time = week_time;
            week_time = (week_time + WEEK).min(now);
        }
    }

    // emissions land on the gauge as plain token balance
    let token = Client::new(e, &get_token(e));
    let received = token.balance(&e.current_contract_address());
    if received > 0 {
        let current_week = now / WEEK;
        let week_end = (current_week + 1) * WEEK;
        let rate =
            get_inflation_rate(e, current_week) + received as u128 / (week_end - now) as u128;
        set_inflation_rate(e, current_week, &rate);
        set_total_emissions(e, &(get_total_emissions(e) + received as u128));

        token.transfer(&e.current_contract_address(), &get_factory(e), &received);
        Events::new(e).inflation(current_week, rate, received as u128);
    }

    period += 1;
    set_period(e, &period);
    set_period_timestamp(e, period, &now);
    set_integrate_inv_supply(e, period, &integrate_inv_supply);
    log!(e, "integrate_inv_supply", period, integrate_inv_supply);

    let working_balance = get_working_balance(e, user.clone());
    let integrate_inv_supply_of = get_integrate_inv_supply_of(e, user.clone());
    let fraction = get_integrate_fraction(e, user.clone())
        + working_balance.fixed_mul_floor(
            e,
            &(integrate_inv_supply - integrate_inv_supply_of),
            &INTEGRAL_PRECISION,
        );
    set_integrate_fraction(e, user.clone(), &fraction);
    set_integrate_inv_supply_of(e, user.clone(), &integrate_inv_supply);
    set_integrate_checkpoint_of(e, user.clone(), &now);
}

// Recomputes the boosted balance of `user`:
// min(0.4 * balance + 0.6 * supply * voting_balance / voting_supply, balance).
pub(crate) fn update_liquidity_limit(
    e: &Env,
    user: &Address,
    balance: u128,
    supply: u128,
    voting_escrow: &Option<Address>,
) {
    let limit = match voting_escrow {
        None => balance,
        Some(voting_escrow) => {
            let mut limit = balance * TOKENLESS_PRODUCTION / 100;
            let voting_total = voting_supply(e, voting_escrow);
            if voting_total > 0 {
                let voting_balance = voting_balance(e, voting_escrow, user);
                limit += supply.fixed_mul_floor(e, &voting_balance, &voting_total)
                    * (100 - TOKENLESS_PRODUCTION)
                    / 100;
            }
            limit.min(balance)
        }
    };

    let old_balance = get_working_balance(e, user.clone());
    set_working_balance(e, user.clone(), &limit);
    let working_supply = get_working_supply(e) + limit - old_balance;
    set_working_supply(e, &working_supply);

    Events::new(e).update_liquidity_limit(user.clone(), balance, supply, limit, working_supply);
}
