use crate::constants::{
    MAX_CHECKPOINT_WEEKS, PRECISION, RATE_REDUCTION_COEFFICIENT, RATE_REDUCTION_TIME,
};
use crate::events::Events;
use crate::external::{checkpoint_gauge, gauge_relative_weight};
use crate::storage::{
    get_controller, get_inflation_params, get_last_period, get_total_emissions,
    set_inflation_params, set_last_period, set_total_emissions,
};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{log, Env};
use utils::constant::WEEK;

// Books emissions for every full week since the last checkpoint. Each week
// pays `weight * rate * WEEK`, the rate being reduced mid-week when the
// minter epoch ends inside it. The current week is only paid once it is over.
pub(crate) fn checkpoint(e: &Env) -> u128 {
    let last_period = get_last_period(e);
    let current_period = e.ledger().timestamp() / WEEK;
    if last_period >= current_period {
        return 0;
    }

    let controller = get_controller(e);
    checkpoint_gauge(e, &controller);

    let mut params = get_inflation_params(e);
    let mut emissions: u128 = 0;
    let last = current_period.min(last_period + MAX_CHECKPOINT_WEEKS);
    for period in last_period..last {
        let period_time = period * WEEK;
        let weight = gauge_relative_weight(e, &controller, period_time);

        if period_time <= params.finish_time && params.finish_time < period_time + WEEK {
            emissions += weight.fixed_mul_floor(
                e,
                &(params.rate * (params.finish_time - period_time) as u128),
                &PRECISION,
            );
            params.rate = params
                .rate
                .fixed_mul_floor(e, &PRECISION, &RATE_REDUCTION_COEFFICIENT);
            emissions += weight.fixed_mul_floor(
                e,
                &(params.rate * (period_time + WEEK - params.finish_time) as u128),
                &PRECISION,
            );
            params.finish_time += RATE_REDUCTION_TIME;
        } else {
            emissions += weight.fixed_mul_floor(e, &(params.rate * WEEK as u128), &PRECISION);
        }
    }

    let total_emissions = get_total_emissions(e) + emissions;
    set_last_period(e, &last);
    set_inflation_params(e, &params);
    set_total_emissions(e, &total_emissions);
    log!(e, "root gauge emissions", last, emissions);

    Events::new(e).checkpoint(last, emissions, total_emissions);
    emissions
}
