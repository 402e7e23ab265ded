pub mod asset;
pub mod global_config;
pub mod oracle_set;
pub mod types;

pub use asset::*;
pub use global_config::*;
pub use oracle_set::*;
pub use types::*;
