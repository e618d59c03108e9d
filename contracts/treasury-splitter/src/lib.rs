pub mod contract;
pub mod error;
pub mod execute;
pub mod ledger;
pub mod msg;
pub mod query;
pub mod selection;
pub mod state;
pub mod sweep;

pub use crate::error::ContractError;
