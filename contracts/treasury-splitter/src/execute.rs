use cosmwasm_std::{from_json, Addr, Coin, DepsMut, Env, Event, MessageInfo, Response, Uint128};
use honeypot_common::{Cw20ReceiveMsg, SplitShares, TokenId};

use crate::error::ContractError;
use crate::ledger;
use crate::msg::ReceiveMsg;
use crate::state::{SelectionState, CONFIG, SELECTION, SPLIT_TOTALS};

/// Split a deposit pulled from the caller.
///
/// cw20 deposits are pulled through the caller's allowance with a
/// `TransferFrom` dispatched ahead of every payout, so a missing allowance
/// reverts the whole transaction. Native deposits must arrive as funds.
pub fn split(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: TokenId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let token = token.validate(deps.api)?;

    let pull_msg = match &token {
        TokenId::Native { denom } => {
            ensure_native_funds(&info.funds, denom, amount, &token)?;
            None
        }
        TokenId::Cw20 { .. } => {
            if !info.funds.is_empty() {
                return Err(ContractError::TransferFailed {
                    token: token.key(),
                    reason: "native funds attached to a cw20 deposit".to_string(),
                });
            }
            token.transfer_from_msg(&info.sender, &env.contract.address, amount)?
        }
    };

    let mut response = Response::new();
    if let Some(msg) = pull_msg {
        response = response.add_message(msg);
    }
    record_split(deps, response, &info.sender, token, amount)
}

/// cw20 `Send` hook: the token contract is the sender and already moved the
/// tokens into custody.
pub fn receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    if wrapper.amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let hook: ReceiveMsg = from_json(&wrapper.msg)?;
    match hook {
        ReceiveMsg::Split {} => {}
    }

    let depositor = deps.api.addr_validate(&wrapper.sender)?;
    let token = TokenId::Cw20 {
        contract: info.sender.into_string(),
    };
    record_split(deps, Response::new(), &depositor, token, wrapper.amount)
}

/// Allocate a deposit already in (or about to enter) custody.
///
/// All state is written before the payout messages are attached; CosmWasm
/// dispatches them only after this handler returns.
fn record_split(
    deps: DepsMut,
    mut response: Response,
    depositor: &Addr,
    token: TokenId,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let selection = SELECTION.load(deps.storage)?;
    let shares = SplitShares::compute(amount);
    let key = token.key();

    let direct_winner = match selection {
        SelectionState::Finalized { winner } => Some(winner),
        SelectionState::Idle | SelectionState::RequestIssued { .. } => {
            ledger::reserve(deps.storage, &token, shares.winner)?;
            None
        }
    };

    let mut totals = SPLIT_TOTALS
        .may_load(deps.storage, &key)?
        .unwrap_or_default();
    totals
        .record_split(&shares, direct_winner.is_some())
        .map_err(|_| ContractError::ArithmeticOverflow { token: key.clone() })?;
    SPLIT_TOTALS.save(deps.storage, &key, &totals)?;

    if !shares.pot.is_zero() {
        response = response.add_message(token.transfer_msg(&config.pot, shares.pot)?);
    }
    if !shares.creator.is_zero() {
        response = response.add_message(token.transfer_msg(&config.creator, shares.creator)?);
    }
    let route = match &direct_winner {
        Some(winner) => {
            if !shares.winner.is_zero() {
                response = response.add_message(token.transfer_msg(winner, shares.winner)?);
            }
            "winner"
        }
        None => "reserved",
    };

    Ok(response
        .add_attribute("action", "split")
        .add_attribute("token", key.clone())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("honeypot_split_recorded")
                .add_attribute("token", key)
                .add_attribute("amount", amount.to_string())
                .add_attribute("depositor", depositor.to_string())
                .add_attribute("pot_share", shares.pot.to_string())
                .add_attribute("creator_share", shares.creator.to_string())
                .add_attribute("winner_share", shares.winner.to_string())
                .add_attribute("winner_route", route),
        ))
}

fn ensure_native_funds(
    funds: &[Coin],
    denom: &str,
    amount: Uint128,
    token: &TokenId,
) -> Result<(), ContractError> {
    let failed = |reason: String| ContractError::TransferFailed {
        token: token.key(),
        reason,
    };
    match funds {
        [] => Err(failed(format!("no {} attached", denom))),
        [coin] if coin.denom != denom => Err(failed(format!(
            "expected {}, got {}",
            denom, coin.denom
        ))),
        [coin] if coin.amount != amount => Err(failed(format!(
            "attached {} does not match amount {}",
            coin.amount, amount
        ))),
        [_] => Ok(()),
        _ => Err(failed("must attach exactly one coin".to_string())),
    }
}

/// Forward stranded sweep funds. Admin only.
pub fn recover_stranded(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token: TokenId,
    amount: Uint128,
    recipient: Option<String>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can recover stranded funds".to_string(),
        });
    }
    if amount.is_zero() {
        return Err(ContractError::InvalidAmount);
    }
    let token = token.validate(deps.api)?;

    let recipient = match recipient {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => SELECTION
            .load(deps.storage)?
            .winner()
            .cloned()
            .ok_or(ContractError::RecipientRequired)?,
    };

    let remaining = ledger::debit_stranded(deps.storage, &token, amount)?;

    Ok(Response::new()
        .add_message(token.transfer_msg(&recipient, amount)?)
        .add_attribute("action", "recover_stranded")
        .add_attribute("token", token.key())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("honeypot_stranded_recovered")
                .add_attribute("token", token.key())
                .add_attribute("amount", amount.to_string())
                .add_attribute("recipient", recipient.to_string())
                .add_attribute("remaining", remaining.to_string()),
        ))
}
