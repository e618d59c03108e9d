use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Queries understood by the membership registry (cw721 shape).
#[cw_serde]
pub enum RegistryQueryMsg {
    NumTokens {},
    OwnerOf {
        token_id: String,
        include_expired: Option<bool>,
    },
}

// Responses are decoded leniently: registries return extra fields
// (approvals, expirations) the splitter does not need.

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct NumTokensResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerOfResponse {
    pub owner: String,
}

/// Number of entries currently held in the registry.
pub fn query_size(querier: &QuerierWrapper, registry: &Addr) -> StdResult<u64> {
    let res: NumTokensResponse =
        querier.query_wasm_smart(registry, &RegistryQueryMsg::NumTokens {})?;
    Ok(res.count)
}

/// Owner of entry `index`. Entries are addressed by their decimal index.
pub fn query_owner_of(querier: &QuerierWrapper, registry: &Addr, index: u64) -> StdResult<String> {
    let res: OwnerOfResponse = querier.query_wasm_smart(
        registry,
        &RegistryQueryMsg::OwnerOf {
            token_id: index.to_string(),
            include_expired: None,
        },
    )?;
    Ok(res.owner)
}
