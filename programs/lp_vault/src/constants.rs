pub const BPS_DENOM: u64 = 10_000;

/// Scale of `acc_reward_per_share`; large enough that one micro-USDC of
/// fees over the biggest plausible share count still moves the
/// accumulator.
pub const REWARD_PRECISION: u128 = 1_000_000_000_000;

pub const MAX_VESTING_MILESTONES: usize = 8;
pub const MAX_CONTRIBUTIONS: usize = 16;

/// Share of a position's vested principal withdrawable without queueing.
pub const DEFAULT_MAX_INSTANT_WITHDRAWAL_BPS: u16 = 2_500;
/// Share of total pool liquidity withdrawable per UTC day.
pub const DEFAULT_DAILY_WITHDRAWAL_CAP_BPS: u16 = 1_000;

pub const SECONDS_PER_DAY: i64 = 86_400;
