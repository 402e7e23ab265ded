use anchor_lang::prelude::*;
use asset_registry::program::AssetRegistry;

use crate::{
    error::ErrorCode,
    state::{UserAccount, UserShareBalance},
};

pub fn handler(ctx: Context<CreateShareBalance>, asset_id: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.user_account.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let balance = &mut ctx.accounts.share_balance;
    balance.user_account = ctx.accounts.user_account.key();
    balance.asset_id = asset_id;
    balance.free_shares = 0;
    balance.locked_shares = 0;
    balance.bump = ctx.bumps.share_balance;
    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct CreateShareBalance<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"user-account", user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    pub asset_registry_program: Program<'info, AssetRegistry>,
    #[account(
        seeds = [b"asset".as_ref(), &asset_id.to_le_bytes()],
        seeds::program = asset_registry_program.key(),
        bump = asset.bump,
    )]
    pub asset: Account<'info, asset_registry::Asset>,
    #[account(
        init,
        payer = user,
        seeds = [b"share-balance", user_account.key().as_ref(), &asset_id.to_le_bytes()],
        bump,
        space = 8 + UserShareBalance::INIT_SPACE,
    )]
    pub share_balance: Account<'info, UserShareBalance>,
    pub system_program: Program<'info, System>,
}
