use anchor_lang::prelude::*;

use crate::{
    helpers::require_admin,
    state::{Pool, PoolConfigParams},
};

pub fn handler(ctx: Context<ConfigurePool>, params: PoolConfigParams) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.pool)?;
    params.validate()?;

    let pool = &mut ctx.accounts.pool;
    pool.max_instant_withdrawal_bps = params.max_instant_withdrawal_bps;
    pool.daily_withdrawal_cap_bps = params.daily_withdrawal_cap_bps;
    pool.queue_excess = params.queue_excess;
    pool.vesting_schedule = params.vesting_schedule;

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigurePool<'info> {
    pub admin: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.usdc_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
