pub mod buy_shares;
pub mod cancel_order;
pub mod create_share_balance;
pub mod create_user_account;
pub mod deposit_cash;
pub mod initialize_asset_state;
pub mod initialize_engine;
pub mod match_orders;
pub mod place_order;
pub mod sell_shares;
pub mod update_fundamental;
pub mod withdraw_cash;

pub use buy_shares::*;
pub use cancel_order::*;
pub use create_share_balance::*;
pub use create_user_account::*;
pub use deposit_cash::*;
pub use initialize_asset_state::*;
pub use initialize_engine::*;
pub use match_orders::*;
pub use place_order::*;
pub use sell_shares::*;
pub use update_fundamental::*;
pub use withdraw_cash::*;
