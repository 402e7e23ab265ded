use anchor_lang::prelude::*;

use crate::{
    helpers::require_admin,
    state::{GlobalConfig, OracleSet},
};

pub fn handler(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
    require_admin(
        &ctx.accounts.authority,
        &ctx.accounts.global_config,
        &ctx.accounts.oracle_set,
    )?;

    ctx.accounts.global_config.global_pause = paused;
    ctx.accounts.global_config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct SetGlobalPause<'info> {
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
}
