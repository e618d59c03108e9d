use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use honeypot_common::{SplitShares, TokenId};

use crate::ledger;
use crate::msg::{
    PoolBalanceEntry, PoolBalanceResponse, PoolBalancesResponse, StrandedBalanceResponse,
    WinnerResponse,
};
use crate::state::{CONFIG, POOL_BALANCES, RESERVED_TOKENS, SELECTION, SPLIT_TOTALS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_selection(deps: Deps) -> StdResult<Binary> {
    let selection = SELECTION.load(deps.storage)?;
    to_json_binary(&selection)
}

pub fn query_winner(deps: Deps) -> StdResult<Binary> {
    let selection = SELECTION.load(deps.storage)?;
    to_json_binary(&WinnerResponse {
        winner: selection.winner().cloned(),
    })
}

pub fn query_pool_balance(deps: Deps, token: TokenId) -> StdResult<Binary> {
    let token = token.validate(deps.api)?;
    let amount = ledger::balance(deps.storage, &token)?;
    to_json_binary(&PoolBalanceResponse { token, amount })
}

pub fn query_pool_balances(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let balances = RESERVED_TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (slot, token) = item?;
            let amount = POOL_BALANCES
                .may_load(deps.storage, &token.key())?
                .unwrap_or_default();
            Ok(PoolBalanceEntry {
                slot,
                token,
                amount,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&PoolBalancesResponse { balances })
}

pub fn query_stranded_balance(deps: Deps, token: TokenId) -> StdResult<Binary> {
    let token = token.validate(deps.api)?;
    let amount = ledger::stranded(deps.storage, &token)?;
    to_json_binary(&StrandedBalanceResponse { token, amount })
}

pub fn query_split_totals(deps: Deps, token: TokenId) -> StdResult<Binary> {
    let token = token.validate(deps.api)?;
    let totals = SPLIT_TOTALS
        .may_load(deps.storage, &token.key())?
        .unwrap_or_default();
    to_json_binary(&totals)
}

pub fn query_preview_split(amount: Uint128) -> StdResult<Binary> {
    to_json_binary(&SplitShares::compute(amount))
}
