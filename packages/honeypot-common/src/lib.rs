pub mod registry;
pub mod shares;
pub mod token;
pub mod vrf;

pub use shares::SplitShares;
pub use token::{Cw20ExecuteMsg, Cw20ReceiveMsg, TokenId};
pub use vrf::CoordinatorExecuteMsg;
