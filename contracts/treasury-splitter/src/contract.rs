use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::selection::{self, REQUEST_REPLY_ID};
use crate::state::{Config, SelectionState, CONFIG, RESERVED_TOKEN_COUNT, SELECTION};
use crate::sweep::{self, SWEEP_LEG_REPLY_ID};

const CONTRACT_NAME: &str = "crates.io:honeypot-treasury-splitter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound on confirmations a VRF coordinator accepts.
const MAX_REQUEST_CONFIRMATIONS: u16 = 200;
/// Only the first word is used to pick the winner.
const NUM_WORDS: u32 = 1;

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let key_hash = hex::decode(&msg.key_hash).map_err(|_| ContractError::InvalidHex {
        field: "key_hash".to_string(),
    })?;
    if key_hash.len() != 32 {
        return Err(ContractError::InvalidKeyHashLength {
            got: key_hash.len(),
        });
    }
    if msg.request_confirmations == 0 || msg.request_confirmations > MAX_REQUEST_CONFIRMATIONS {
        return Err(ContractError::InvalidConfig {
            field: "request_confirmations".to_string(),
            reason: format!("must be between 1 and {}", MAX_REQUEST_CONFIRMATIONS),
        });
    }
    if msg.callback_gas_limit == 0 {
        return Err(ContractError::InvalidConfig {
            field: "callback_gas_limit".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    let config = Config {
        admin: info.sender.clone(),
        pot: deps.api.addr_validate(&msg.pot)?,
        creator: deps.api.addr_validate(&msg.creator)?,
        membership_registry: deps.api.addr_validate(&msg.membership_registry)?,
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        key_hash: hex::encode(key_hash),
        subscription_id: msg.subscription_id,
        request_confirmations: msg.request_confirmations,
        callback_gas_limit: msg.callback_gas_limit,
        num_words: NUM_WORDS,
    };
    CONFIG.save(deps.storage, &config)?;
    SELECTION.save(deps.storage, &SelectionState::Idle)?;
    RESERVED_TOKEN_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "treasury-splitter")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("pot", config.pot.to_string())
        .add_attribute("creator", config.creator.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Split { token, amount } => execute::split(deps, env, info, token, amount),
        ExecuteMsg::Receive(wrapper) => execute::receive(deps, env, info, wrapper),
        ExecuteMsg::RequestWinnerSelection {} => {
            selection::request_winner_selection(deps, env, info)
        }
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => selection::fulfill_random_words(deps, env, info, request_id, random_words),
        ExecuteMsg::RecoverStranded {
            token,
            amount,
            recipient,
        } => execute::recover_stranded(deps, env, info, token, amount, recipient),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_REPLY_ID => selection::handle_request_reply(deps, msg),
        SWEEP_LEG_REPLY_ID => sweep::handle_sweep_leg_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Selection {} => query::query_selection(deps),
        QueryMsg::Winner {} => query::query_winner(deps),
        QueryMsg::PoolBalance { token } => query::query_pool_balance(deps, token),
        QueryMsg::PoolBalances { start_after, limit } => {
            query::query_pool_balances(deps, start_after, limit)
        }
        QueryMsg::StrandedBalance { token } => query::query_stranded_balance(deps, token),
        QueryMsg::SplitTotals { token } => query::query_split_totals(deps, token),
        QueryMsg::PreviewSplit { amount } => query::query_preview_split(amount),
    }
}
