use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::require_admin,
    state::{Asset, AssetStatus, GlobalConfig, OracleSet},
};

pub fn handler(ctx: Context<SetAssetStatus>, status: AssetStatus) -> Result<()> {
    require_admin(
        &ctx.accounts.authority,
        &ctx.accounts.global_config,
        &ctx.accounts.oracle_set,
    )?;

    // Cancellation is terminal.
    require!(
        ctx.accounts.asset.status != AssetStatus::Cancelled,
        ErrorCode::AssetCancelled
    );

    ctx.accounts.asset.status = status;
    ctx.accounts.global_config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct SetAssetStatus<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    #[account(
        seeds = [b"oracle-set"],
        bump = oracle_set.bump,
    )]
    pub oracle_set: Account<'info, OracleSet>,
    #[account(
        mut,
        seeds = [b"asset".as_ref(), &asset.asset_id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Account<'info, Asset>,
}
