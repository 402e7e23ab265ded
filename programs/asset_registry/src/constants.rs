pub const SYMBOL_LEN: usize = 12;
pub const MAX_ORACLES: usize = 16;
pub const BPS_DENOM: u64 = 10_000;

pub const DEFAULT_TRADE_FEE_BPS: u16 = 100;
pub const DEFAULT_EMA_BETA_BPS: u16 = 2_000;
pub const DEFAULT_MAX_FUNDAMENTAL_DELTA_BPS: u16 = 3_000;
// 1_000 USDC with a 6-decimal mint.
pub const DEFAULT_VOLUME_MIDPOINT: u64 = 1_000_000_000;
