use anchor_lang::prelude::*;

/// Per-user cash ledger. `free_cash + locked_cash` equals everything the
/// user has deposited minus everything withdrawn or settled away; orders
/// move value between the two halves, never create or destroy it.
#[account]
#[derive(InitSpace)]
pub struct UserAccount {
    pub owner: Pubkey,
    pub free_cash: u64,
    pub locked_cash: u64,
    pub next_order_nonce: u64,
    pub bump: u8,
}
