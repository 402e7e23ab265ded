pub mod lp_position;
pub mod pool;
pub mod types;
pub mod withdraw_request;

pub use lp_position::*;
pub use pool::*;
pub use types::*;
pub use withdraw_request::*;
