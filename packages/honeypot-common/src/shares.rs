use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

pub const BPS_DENOMINATOR: u128 = 10_000;
/// Pot recipient share in basis points (5000 = 50%)
pub const POT_SHARE_BPS: u16 = 5_000;
/// Creator recipient share in basis points (4000 = 40%)
pub const CREATOR_SHARE_BPS: u16 = 4_000;

/// Three-way allocation of a single deposit.
#[cw_serde]
pub struct SplitShares {
    pub pot: Uint128,
    pub creator: Uint128,
    /// Remainder after the floored pot and creator shares.
    pub winner: Uint128,
}

impl SplitShares {
    /// Split `amount` using floor division in basis points.
    ///
    /// The winner share is computed as the remainder, so the three shares
    /// always add up to exactly `amount`.
    pub fn compute(amount: Uint128) -> Self {
        let pot = amount.multiply_ratio(POT_SHARE_BPS as u128, BPS_DENOMINATOR);
        let creator = amount.multiply_ratio(CREATOR_SHARE_BPS as u128, BPS_DENOMINATOR);
        let winner = amount - pot - creator;
        SplitShares {
            pot,
            creator,
            winner,
        }
    }

    pub fn total(&self) -> Uint128 {
        self.pot + self.creator + self.winner
    }
}
