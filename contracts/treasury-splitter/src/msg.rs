use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128, Uint256};
use honeypot_common::{Cw20ReceiveMsg, SplitShares, TokenId};

use crate::state::{Config, SelectionState, SplitTotals};

#[cw_serde]
pub struct InstantiateMsg {
    pub pot: String,
    pub creator: String,
    pub membership_registry: String,
    pub vrf_coordinator: String,
    /// Hex-encoded VRF key hash (32 bytes = 64 hex chars)
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit and split `amount` of `token`.
    /// cw20: the caller must have granted an allowance to this contract.
    /// native: exactly `amount` of the denom must be attached.
    Split { token: TokenId, amount: Uint128 },
    /// cw20 `Send` hook. The tokens are already in custody.
    Receive(Cw20ReceiveMsg),
    /// Ask the coordinator for randomness. Admin only, once per contract.
    RequestWinnerSelection {},
    /// Randomness callback. Coordinator only.
    FulfillRandomWords {
        request_id: Uint256,
        random_words: Vec<Uint256>,
    },
    /// Forward funds stranded by a failed sweep leg. Admin only.
    /// `recipient` defaults to the winner.
    RecoverStranded {
        token: TokenId,
        amount: Uint128,
        recipient: Option<String>,
    },
}

/// Payload accepted inside a cw20 `Send`.
#[cw_serde]
pub enum ReceiveMsg {
    Split {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(SelectionState)]
    Selection {},
    #[returns(WinnerResponse)]
    Winner {},
    #[returns(PoolBalanceResponse)]
    PoolBalance { token: TokenId },
    #[returns(PoolBalancesResponse)]
    PoolBalances {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(StrandedBalanceResponse)]
    StrandedBalance { token: TokenId },
    #[returns(SplitTotals)]
    SplitTotals { token: TokenId },
    #[returns(SplitShares)]
    PreviewSplit { amount: Uint128 },
}

#[cw_serde]
pub struct WinnerResponse {
    pub winner: Option<Addr>,
}

#[cw_serde]
pub struct PoolBalanceResponse {
    pub token: TokenId,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PoolBalanceEntry {
    pub slot: u32,
    pub token: TokenId,
    pub amount: Uint128,
}

#[cw_serde]
pub struct PoolBalancesResponse {
    pub balances: Vec<PoolBalanceEntry>,
}

#[cw_serde]
pub struct StrandedBalanceResponse {
    pub token: TokenId,
    pub amount: Uint128,
}
