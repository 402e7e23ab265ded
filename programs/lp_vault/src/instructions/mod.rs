pub mod accrue_fee;
pub mod cancel_withdraw_request;
pub mod claim_rewards;
pub mod claim_withdraw;
pub mod configure_pool;
pub mod create_lp_position;
pub mod deposit_lp;
pub mod initialize_pool;
pub mod request_withdraw;

pub use accrue_fee::*;
pub use cancel_withdraw_request::*;
pub use claim_rewards::*;
pub use claim_withdraw::*;
pub use configure_pool::*;
pub use create_lp_position::*;
pub use deposit_lp::*;
pub use initialize_pool::*;
pub use request_withdraw::*;
