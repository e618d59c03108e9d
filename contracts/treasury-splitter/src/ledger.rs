//! Winner pool accounting. Pure storage arithmetic, no messages.

use cosmwasm_std::{Order, StdResult, Storage, Uint128};
use honeypot_common::TokenId;

use crate::error::ContractError;
use crate::state::{
    POOL_BALANCES, RESERVED_TOKENS, RESERVED_TOKEN_COUNT, RESERVED_TOKEN_SLOTS, STRANDED,
};

/// Upper bound on distinct tokens in the winner pool. The sweep walks the
/// whole index inside the randomness callback, which runs under a fixed gas
/// limit.
pub const MAX_RESERVED_TOKENS: u32 = 32;

/// Add `amount` to the token's pool balance, indexing the token on its first
/// non-zero reservation. Returns the new balance.
pub fn reserve(
    storage: &mut dyn Storage,
    token: &TokenId,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let key = token.key();
    let current = POOL_BALANCES.may_load(storage, &key)?.unwrap_or_default();
    if amount.is_zero() {
        return Ok(current);
    }

    let updated = current
        .checked_add(amount)
        .map_err(|_| ContractError::ArithmeticOverflow { token: key.clone() })?;

    if !RESERVED_TOKEN_SLOTS.has(storage, &key) {
        index_token(storage, token, &key)?;
    }
    POOL_BALANCES.save(storage, &key, &updated)?;
    Ok(updated)
}

/// Reset the token's pool balance to zero and return what was removed.
pub fn drain(storage: &mut dyn Storage, token: &TokenId) -> Result<Uint128, ContractError> {
    let key = token.key();
    let amount = POOL_BALANCES.may_load(storage, &key)?.unwrap_or_default();
    if !amount.is_zero() {
        POOL_BALANCES.save(storage, &key, &Uint128::zero())?;
    }
    Ok(amount)
}

pub fn balance(storage: &dyn Storage, token: &TokenId) -> StdResult<Uint128> {
    Ok(POOL_BALANCES
        .may_load(storage, &token.key())?
        .unwrap_or_default())
}

/// All tokens that ever held a reservation, in first-reservation order.
pub fn reserved_tokens(storage: &dyn Storage) -> StdResult<Vec<TokenId>> {
    RESERVED_TOKENS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, token)| token))
        .collect()
}

pub fn credit_stranded(
    storage: &mut dyn Storage,
    token: &TokenId,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let key = token.key();
    let current = STRANDED.may_load(storage, &key)?.unwrap_or_default();
    let updated = current
        .checked_add(amount)
        .map_err(|_| ContractError::ArithmeticOverflow { token: key.clone() })?;
    STRANDED.save(storage, &key, &updated)?;
    Ok(updated)
}

/// Remove `amount` from the stranded balance. Never saturates.
pub fn debit_stranded(
    storage: &mut dyn Storage,
    token: &TokenId,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let key = token.key();
    let current = STRANDED.may_load(storage, &key)?.unwrap_or_default();
    let updated = current
        .checked_sub(amount)
        .map_err(|_| ContractError::InvariantViolation {
            reason: format!(
                "debit of {} exceeds stranded balance {} for {}",
                amount, current, key
            ),
        })?;
    STRANDED.save(storage, &key, &updated)?;
    Ok(updated)
}

pub fn stranded(storage: &dyn Storage, token: &TokenId) -> StdResult<Uint128> {
    Ok(STRANDED.may_load(storage, &token.key())?.unwrap_or_default())
}

fn index_token(storage: &mut dyn Storage, token: &TokenId, key: &str) -> Result<(), ContractError> {
    let slot = RESERVED_TOKEN_COUNT.may_load(storage)?.unwrap_or(0);
    if slot >= MAX_RESERVED_TOKENS {
        return Err(ContractError::TooManyReservedTokens {
            limit: MAX_RESERVED_TOKENS,
        });
    }
    let next = slot
        .checked_add(1)
        .ok_or_else(|| ContractError::ArithmeticOverflow {
            token: key.to_string(),
        })?;
    RESERVED_TOKENS.save(storage, slot, token)?;
    RESERVED_TOKEN_SLOTS.save(storage, key, &slot)?;
    RESERVED_TOKEN_COUNT.save(storage, &next)?;
    Ok(())
}
