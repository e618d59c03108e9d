use cosmwasm_std::{
    from_json, to_json_binary, Addr, DepsMut, Event, Reply, Response, Storage, SubMsg,
    SubMsgResult,
};

use crate::error::ContractError;
use crate::ledger;
use crate::state::{SweepLeg, SPLIT_TOTALS};

pub const SWEEP_LEG_REPLY_ID: u64 = 2;

pub struct Sweep {
    pub legs: Vec<SubMsg>,
    pub event: Event,
}

/// Drain every reserved token to `winner`.
///
/// Each token is forwarded by its own `reply_on_error` sub-message so one
/// failing token cannot revert the others. The ledger is drained before any
/// leg is dispatched.
pub fn sweep_to_winner(storage: &mut dyn Storage, winner: &Addr) -> Result<Sweep, ContractError> {
    let mut legs = Vec::new();
    let mut swept = Vec::new();

    for token in ledger::reserved_tokens(storage)? {
        let amount = ledger::drain(storage, &token)?;
        if amount.is_zero() {
            continue;
        }

        let key = token.key();
        let mut totals = SPLIT_TOTALS.may_load(storage, &key)?.unwrap_or_default();
        totals.swept = totals
            .swept
            .checked_add(amount)
            .map_err(|_| ContractError::ArithmeticOverflow { token: key.clone() })?;
        SPLIT_TOTALS.save(storage, &key, &totals)?;

        let transfer = token.transfer_msg(winner, amount)?;
        let leg = SweepLeg { token, amount };
        legs.push(
            SubMsg::reply_on_error(transfer, SWEEP_LEG_REPLY_ID)
                .with_payload(to_json_binary(&leg)?),
        );
        swept.push(format!("{}={}", key, amount));
    }

    let event = Event::new("honeypot_pool_swept")
        .add_attribute("winner", winner.to_string())
        .add_attribute("legs", legs.len().to_string())
        .add_attribute("swept", swept.join(","));

    Ok(Sweep { legs, event })
}

/// A sweep leg failed. The drained amount stays with the contract as a
/// stranded balance; the pool ledger is not refilled.
pub fn handle_sweep_leg_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let error = match msg.result {
        SubMsgResult::Err(error) => error,
        SubMsgResult::Ok(_) => return Ok(Response::new()),
    };

    let leg: SweepLeg = from_json(&msg.payload)?;
    let stranded = ledger::credit_stranded(deps.storage, &leg.token, leg.amount)?;

    Ok(Response::new()
        .add_attribute("action", "sweep_leg_failed")
        .add_attribute("token", leg.token.key())
        .add_event(
            Event::new("honeypot_sweep_leg_failed")
                .add_attribute("token", leg.token.key())
                .add_attribute("amount", leg.amount.to_string())
                .add_attribute("stranded_total", stranded.to_string())
                .add_attribute("error", error),
        ))
}
