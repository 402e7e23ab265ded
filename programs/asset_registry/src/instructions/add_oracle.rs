use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ORACLES,
    error::ErrorCode,
    helpers::require_admin,
    state::{GlobalConfig, OracleSet},
};

pub fn handler(ctx: Context<AddOracle>, oracle: Pubkey) -> Result<()> {
    require_admin(
        &ctx.accounts.authority,
        &ctx.accounts.global_config,
        &ctx.accounts.oracle_set,
    )?;

    let set = &mut ctx.accounts.oracle_set;
    require!(set.oracles.len() < MAX_ORACLES, ErrorCode::OracleSetFull);
    require!(
        !set.oracles.contains(&oracle),
        ErrorCode::OracleAlreadyExists
    );

    set.oracles.push(oracle);
    ctx.accounts.global_config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct AddOracle<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    #[account(
        mut,
        seeds = [b"oracle-set"],
        bump = oracle_set.bump,
    )]
    pub oracle_set: Account<'info, OracleSet>,
}
