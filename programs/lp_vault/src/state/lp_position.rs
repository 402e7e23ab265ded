use anchor_lang::prelude::*;

use crate::{constants::MAX_CONTRIBUTIONS, state::Contribution};

#[account]
#[derive(InitSpace)]
pub struct LpPosition {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub shares: u128,
    /// Shares parked behind queued withdraw requests. Still counted in
    /// `pool.total_shares` and still earning rewards until claimed.
    pub pending_shares: u128,
    /// Lifetime principal deposited.
    pub contributed: u64,
    /// Lifetime principal withdrawn; subtracted from the vested amount
    /// when sizing the instant limit.
    pub principal_withdrawn: u64,
    /// Dated deposits driving the vesting walk. Same-day deposits merge
    /// into one entry.
    #[max_len(MAX_CONTRIBUTIONS)]
    pub contributions: Vec<Contribution>,
    pub reward_debt: u128,
    pub unclaimed: u64,
    pub withdraw_nonce: u64,
    pub bump: u8,
}

impl LpPosition {
    pub fn total_shares(&self) -> u128 {
        self.shares.saturating_add(self.pending_shares)
    }
}
