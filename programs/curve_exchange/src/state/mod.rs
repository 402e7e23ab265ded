pub mod asset_state;
pub mod engine_config;
pub mod order;
pub mod order_book;
pub mod user_account;
pub mod user_share_balance;

pub use asset_state::*;
pub use engine_config::*;
pub use order::*;
pub use order_book::*;
pub use user_account::*;
pub use user_share_balance::*;
