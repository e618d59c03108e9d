//! Winner selection handshake with the randomness coordinator.
//!
//! `RequestWinnerSelection` dispatches the request as a sub-message; the
//! coordinator's reply carries the request id, which becomes the single
//! pending correlation id. The coordinator later calls
//! `FulfillRandomWords` exactly once, which finalizes the winner and runs
//! the sweep.

use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Reply, Response, StdError, SubMsg,
    Uint256, WasmMsg,
};
use honeypot_common::registry::{query_owner_of, query_size};
use honeypot_common::vrf::request_id_from_events;
use honeypot_common::CoordinatorExecuteMsg;

use crate::error::ContractError;
use crate::state::{SelectionState, CONFIG, SELECTION};
use crate::sweep::sweep_to_winner;

pub const REQUEST_REPLY_ID: u64 = 1;

fn ensure_idle(state: &SelectionState) -> Result<(), ContractError> {
    match state {
        SelectionState::Idle => Ok(()),
        SelectionState::RequestIssued { .. } => Err(ContractError::SelectionAlreadyInProgress),
        SelectionState::Finalized { .. } => Err(ContractError::SelectionAlreadyFinalized),
    }
}

/// Issue the one and only randomness request. Admin only.
pub fn request_winner_selection(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can request winner selection".to_string(),
        });
    }
    ensure_idle(&SELECTION.load(deps.storage)?)?;

    let request = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.key_hash.clone(),
            sub_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: config.num_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(request, REQUEST_REPLY_ID))
        .add_attribute("action", "request_winner_selection")
        .add_attribute("coordinator", config.vrf_coordinator.to_string()))
}

/// Record the id the coordinator assigned to our request.
pub fn handle_request_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let result = msg.result.into_result().map_err(StdError::generic_err)?;
    let request_id = request_id_from_events(&result.events, &config.vrf_coordinator)
        .ok_or(ContractError::MissingRequestId)?;

    // A re-entrant request during the coordinator call must not leave a
    // second id behind.
    ensure_idle(&SELECTION.load(deps.storage)?)?;
    SELECTION.save(deps.storage, &SelectionState::RequestIssued { request_id })?;

    Ok(Response::new()
        .set_data(to_json_binary(&request_id)?)
        .add_attribute("action", "selection_requested")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("honeypot_selection_requested")
                .add_attribute("request_id", request_id.to_string()),
        ))
}

/// Coordinator callback. Resolves the winner, finalizes, and sweeps the pool.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: Uint256,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vrf_coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the vrf coordinator can fulfill".to_string(),
        });
    }

    match SELECTION.load(deps.storage)? {
        SelectionState::RequestIssued {
            request_id: pending,
        } if pending == request_id => {}
        _ => {
            return Err(ContractError::UnknownRequest {
                request_id: request_id.to_string(),
            })
        }
    }

    let word = *random_words.first().ok_or(ContractError::NoRandomWords)?;
    let size = query_size(&deps.querier, &config.membership_registry)?;
    if size == 0 {
        return Err(ContractError::EmptyRegistry);
    }
    let index = winner_index(word, size);
    let owner = query_owner_of(&deps.querier, &config.membership_registry, index)?;
    let winner = deps.api.addr_validate(&owner)?;

    SELECTION.save(
        deps.storage,
        &SelectionState::Finalized {
            winner: winner.clone(),
        },
    )?;

    let sweep = sweep_to_winner(deps.storage, &winner)?;

    Ok(Response::new()
        .add_submessages(sweep.legs)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_event(sweep.event)
        .add_event(
            Event::new("honeypot_winner_selected")
                .add_attribute("winner", winner.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("random_word", word.to_string())
                .add_attribute("registry_size", size.to_string())
                .add_attribute("index", index.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// `word % size`, as a registry index.
pub fn winner_index(word: Uint256, size: u64) -> u64 {
    let reduced = word % Uint256::from(size);
    // reduced < size <= u64::MAX, so only the low 8 bytes are set
    let bytes = reduced.to_be_bytes();
    let mut low = [0u8; 8];
    low.copy_from_slice(&bytes[24..32]);
    u64::from_be_bytes(low)
}
