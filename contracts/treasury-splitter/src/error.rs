use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("transfer of {token} failed: {reason}")]
    TransferFailed { token: String, reason: String },

    #[error("a winner selection request is already in progress")]
    SelectionAlreadyInProgress,

    #[error("winner selection has already been finalized")]
    SelectionAlreadyFinalized,

    #[error("unknown randomness request {request_id}")]
    UnknownRequest { request_id: String },

    #[error("randomness fulfillment carried no random words")]
    NoRandomWords,

    #[error("membership registry has no entries")]
    EmptyRegistry,

    #[error("arithmetic overflow while accounting for {token}")]
    ArithmeticOverflow { token: String },

    #[error("ledger invariant violated: {reason}")]
    InvariantViolation { reason: String },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("invalid key hash length: expected 32 bytes, got {got}")]
    InvalidKeyHashLength { got: usize },

    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("coordinator reply did not carry a request id")]
    MissingRequestId,

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },

    #[error("winner pool already holds the maximum of {limit} tokens")]
    TooManyReservedTokens { limit: u32 },

    #[error("a recipient is required before a winner is finalized")]
    RecipientRequired,
}
