pub mod add_oracle;
pub mod create_asset;
pub mod initialize_global;
pub mod remove_oracle;
pub mod set_asset_status;
pub mod set_global_pause;
pub mod update_asset_params;

pub use add_oracle::*;
pub use create_asset::*;
pub use initialize_global::*;
pub use remove_oracle::*;
pub use set_asset_status::*;
pub use set_global_pause::*;
pub use update_asset_params::*;
