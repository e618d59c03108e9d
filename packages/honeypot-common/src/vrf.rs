use std::str::FromStr;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event, Uint256};

/// Attribute the coordinator sets on its `wasm` event when it accepts a request.
pub const REQUEST_ID_ATTRIBUTE: &str = "request_id";

/// Execute interface of the randomness coordinator.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        /// Hex-encoded 32 byte key hash selecting the proving key
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// Extract the request id emitted by `coordinator` from a sub-message's events.
///
/// Only the `wasm` event whose `_contract_address` is the coordinator is
/// considered, so ids emitted by nested contracts are ignored.
pub fn request_id_from_events(events: &[Event], coordinator: &Addr) -> Option<Uint256> {
    events
        .iter()
        .filter(|e| e.ty == "wasm")
        .filter(|e| {
            e.attributes
                .iter()
                .any(|a| a.key == "_contract_address" && a.value == coordinator.as_str())
        })
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == REQUEST_ID_ATTRIBUTE)
        .and_then(|a| Uint256::from_str(&a.value).ok())
}
