pub const BPS_DENOM: u64 = 10_000;

/// Fixed-point scale shared by prices (micro-USDC per share), cash
/// (micro-USDC) and share quantities (micro-shares).
pub const PRICE_SCALE: u128 = 1_000_000;
pub const SHARE_SCALE: u128 = 1_000_000;

/// Resting orders per side of one asset's book.
pub const MAX_BOOK_ORDERS: usize = 64;

/// Bounds on the AMM-vs-fundamental blend weight. The floor keeps the
/// fundamental signal from ever being ignored; the cap keeps the market
/// price from ever being ignored.
pub const WEIGHT_FLOOR_BPS: u64 = 2_000;
pub const WEIGHT_CEIL_BPS: u64 = 9_500;

pub const SECONDS_PER_DAY: i64 = 86_400;
