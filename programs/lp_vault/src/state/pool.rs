use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_VESTING_MILESTONES, SECONDS_PER_DAY},
    state::VestingMilestone,
};

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub admin: Pubkey,
    pub usdc_mint: Pubkey,
    pub exchange_program: Pubkey,
    pub engine_authority: Pubkey,
    pub liquidity_vault: Pubkey,
    pub protocol_fee_vault: Pubkey,
    pub total_shares: u128,
    /// Principal book: deposits minus principal withdrawals. The token
    /// vault additionally holds accrued, unclaimed rewards, so the two
    /// are never compared directly.
    pub total_liquidity: u64,
    /// MasterChef-style accumulator, scaled by `REWARD_PRECISION`.
    pub acc_reward_per_share: u128,
    /// Rewards accrued to holders and not yet claimed.
    pub pending_rewards: u64,
    /// Fees that arrived while the pool had no shares; folded into the
    /// next accrual instead of being lost.
    pub carry_fees: u64,
    pub total_fees_accrued: u64,
    pub protocol_fees_accrued: u64,
    pub max_instant_withdrawal_bps: u16,
    pub daily_withdrawal_cap_bps: u16,
    /// When set, withdrawals over a limit queue for the next UTC day;
    /// otherwise they are rejected outright.
    pub queue_excess: bool,
    pub withdrawal_day: i64,
    pub withdrawn_today: u64,
    #[max_len(MAX_VESTING_MILESTONES)]
    pub vesting_schedule: Vec<VestingMilestone>,
    pub bump: u8,
}

impl Pool {
    /// Resets the daily withdrawal tally when the UTC day turns over.
    pub fn roll_withdrawal_day(&mut self, now: i64) {
        let day = now / SECONDS_PER_DAY;
        if day != self.withdrawal_day {
            self.withdrawal_day = day;
            self.withdrawn_today = 0;
        }
    }
}
