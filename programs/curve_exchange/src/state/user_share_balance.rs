use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct UserShareBalance {
    pub user_account: Pubkey,
    pub asset_id: u64,
    pub free_shares: u64,
    pub locked_shares: u64,
    pub bump: u8,
}
