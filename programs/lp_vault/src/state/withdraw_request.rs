use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum WithdrawKind {
    /// Settled in the same instruction that created the request.
    Instant,
    /// Over a limit; claimable from `eligible_day` onward.
    Queued,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum RequestStatus {
    Pending,
    Processed,
    Cancelled,
}

#[account]
#[derive(InitSpace)]
pub struct WithdrawRequest {
    pub owner: Pubkey,
    pub pool: Pubkey,
    pub nonce: u64,
    pub share_amount: u128,
    /// Principal value of the shares at request time; the payout is
    /// re-valued at claim time.
    pub amount_usdc: u64,
    pub kind: WithdrawKind,
    pub eligible_day: i64,
    pub requested_at: i64,
    pub status: RequestStatus,
    pub bump: u8,
}
