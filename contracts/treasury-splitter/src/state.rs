use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, OverflowError, Uint128, Uint256};
use cw_storage_plus::{Item, Map};
use honeypot_common::{SplitShares, TokenId};

pub const CONFIG: Item<Config> = Item::new("config");
pub const SELECTION: Item<SelectionState> = Item::new("selection");

/// Winner pool balance per token, keyed by `TokenId::key()`.
pub const POOL_BALANCES: Map<&str, Uint128> = Map::new("pool_balances");

/// Every token that ever received a reservation, in insertion order.
/// Append-only; the sweep walks this index since the balance map is keyed
/// by opaque strings.
pub const RESERVED_TOKENS: Map<u32, TokenId> = Map::new("reserved_tokens");
/// Token key -> slot in `RESERVED_TOKENS`. Dedups inserts.
pub const RESERVED_TOKEN_SLOTS: Map<&str, u32> = Map::new("reserved_slots");
pub const RESERVED_TOKEN_COUNT: Item<u32> = Item::new("reserved_count");

/// Funds drained from the pool whose forward to the winner failed.
/// Held by the contract until recovered; never returned to the pool.
pub const STRANDED: Map<&str, Uint128> = Map::new("stranded");

/// Running totals per token.
pub const SPLIT_TOTALS: Map<&str, SplitTotals> = Map::new("split_totals");

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    pub pot: Addr,
    pub creator: Addr,
    pub membership_registry: Addr,
    pub vrf_coordinator: Addr,
    /// Hex-encoded 32 byte VRF key hash
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Winner selection state machine: `Idle -> RequestIssued -> Finalized`.
#[cw_serde]
pub enum SelectionState {
    Idle,
    RequestIssued { request_id: Uint256 },
    Finalized { winner: Addr },
}

impl SelectionState {
    pub fn winner(&self) -> Option<&Addr> {
        match self {
            SelectionState::Finalized { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn phase(&self) -> &'static str {
        match self {
            SelectionState::Idle => "idle",
            SelectionState::RequestIssued { .. } => "request_issued",
            SelectionState::Finalized { .. } => "finalized",
        }
    }
}

#[cw_serde]
#[derive(Default)]
pub struct SplitTotals {
    pub deposits: u64,
    pub deposited: Uint128,
    pub pot_paid: Uint128,
    pub creator_paid: Uint128,
    /// Winner shares reserved in the pool before finalization
    pub reserved: Uint128,
    /// Winner shares paid straight to the winner after finalization
    pub winner_paid_direct: Uint128,
    /// Pool amounts drained by the sweep
    pub swept: Uint128,
}

impl SplitTotals {
    pub fn record_split(&mut self, shares: &SplitShares, direct: bool) -> Result<(), OverflowError> {
        self.deposits = self.deposits.saturating_add(1);
        self.deposited = self.deposited.checked_add(shares.total())?;
        self.pot_paid = self.pot_paid.checked_add(shares.pot)?;
        self.creator_paid = self.creator_paid.checked_add(shares.creator)?;
        if direct {
            self.winner_paid_direct = self.winner_paid_direct.checked_add(shares.winner)?;
        } else {
            self.reserved = self.reserved.checked_add(shares.winner)?;
        }
        Ok(())
    }
}

/// One token's forward to the winner during the sweep.
/// Travels as the sub-message payload so a failed leg can be accounted for.
#[cw_serde]
pub struct SweepLeg {
    pub token: TokenId,
    pub amount: Uint128,
}
