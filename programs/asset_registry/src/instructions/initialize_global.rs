use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ORACLES,
    state::{FeeSplit, GlobalConfig, OracleSet},
};

pub fn handler(
    ctx: Context<InitializeGlobal>,
    admin: Pubkey,
    fee_split: FeeSplit,
    pause_flag: bool,
) -> Result<()> {
    fee_split.validate()?;
    let now = Clock::get()?.unix_timestamp;

    let global = &mut ctx.accounts.global_config;
    global.admin = admin;
    global.global_pause = pause_flag;
    global.fee_split = fee_split;
    global.oracle_set = ctx.accounts.oracle_set.key();
    global.created_at = now;
    global.last_updated_at = now;
    global.bump = ctx.bumps.global_config;

    let oracle_set = &mut ctx.accounts.oracle_set;
    oracle_set.authority = admin;
    oracle_set.oracles = Vec::with_capacity(MAX_ORACLES);
    oracle_set.bump = ctx.bumps.oracle_set;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGlobal<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(
        init,
        payer = payer,
        seeds = [b"global-config"],
        bump,
        space = 8 + GlobalConfig::INIT_SPACE,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    #[account(
        init,
        payer = payer,
        seeds = [b"oracle-set"],
        bump,
        space = 8 + OracleSet::INIT_SPACE,
    )]
    pub oracle_set: Account<'info, OracleSet>,
    pub system_program: Program<'info, System>,
}
