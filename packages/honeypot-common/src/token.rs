use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Api, BankMsg, Binary, CosmosMsg, StdError, StdResult, Uint128,
    WasmMsg,
};

/// A token the splitter can hold: a bank denom or a cw20 contract.
#[cw_serde]
pub enum TokenId {
    Native { denom: String },
    Cw20 { contract: String },
}

impl TokenId {
    pub fn native(denom: impl Into<String>) -> Self {
        TokenId::Native {
            denom: denom.into(),
        }
    }

    pub fn cw20(contract: impl Into<String>) -> Self {
        TokenId::Cw20 {
            contract: contract.into(),
        }
    }

    /// Validate user input. cw20 contract addresses are normalized through the API.
    pub fn validate(self, api: &dyn Api) -> StdResult<TokenId> {
        match self {
            TokenId::Native { denom } => {
                if denom.trim().is_empty() {
                    return Err(StdError::generic_err("native denom must not be empty"));
                }
                Ok(TokenId::Native { denom })
            }
            TokenId::Cw20 { contract } => Ok(TokenId::Cw20 {
                contract: api.addr_validate(&contract)?.into_string(),
            }),
        }
    }

    /// Storage key, unique per token.
    pub fn key(&self) -> String {
        match self {
            TokenId::Native { denom } => format!("native:{}", denom),
            TokenId::Cw20 { contract } => format!("cw20:{}", contract),
        }
    }

    /// Push `amount` from the contract's custody to `recipient`.
    pub fn transfer_msg(&self, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
        let msg = match self {
            TokenId::Native { denom } => BankMsg::Send {
                to_address: recipient.to_string(),
                amount: coins(amount.u128(), denom),
            }
            .into(),
            TokenId::Cw20 { contract } => WasmMsg::Execute {
                contract_addr: contract.clone(),
                msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                    recipient: recipient.to_string(),
                    amount,
                })?,
                funds: vec![],
            }
            .into(),
        };
        Ok(msg)
    }

    /// Pull `amount` from `owner` using a previously granted cw20 allowance.
    /// Native tokens cannot be pulled; they arrive as attached funds.
    pub fn transfer_from_msg(
        &self,
        owner: &Addr,
        recipient: &Addr,
        amount: Uint128,
    ) -> StdResult<Option<CosmosMsg>> {
        match self {
            TokenId::Native { .. } => Ok(None),
            TokenId::Cw20 { contract } => Ok(Some(
                WasmMsg::Execute {
                    contract_addr: contract.clone(),
                    msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                        owner: owner.to_string(),
                        recipient: recipient.to_string(),
                        amount,
                    })?,
                    funds: vec![],
                }
                .into(),
            )),
        }
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Subset of the cw20 execute interface used by the splitter.
/// Mirrors `cw20::Cw20ExecuteMsg`.
#[cw_serde]
pub enum Cw20ExecuteMsg {
    Transfer {
        recipient: String,
        amount: Uint128,
    },
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },
}

/// Hook payload delivered by a cw20 contract on `Send`.
/// Mirrors `cw20::Cw20ReceiveMsg`.
#[cw_serde]
pub struct Cw20ReceiveMsg {
    pub sender: String,
    pub amount: Uint128,
    pub msg: Binary,
}
