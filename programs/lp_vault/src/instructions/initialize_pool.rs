use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    error::ErrorCode,
    state::{Pool, PoolConfigParams},
};

pub fn handler(ctx: Context<InitializePool>, params: PoolConfigParams) -> Result<()> {
    params.validate()?;
    require!(
        ctx.accounts.exchange_program.executable,
        ErrorCode::InvalidProgramAccount
    );

    let (expected_engine_authority, _) = Pubkey::find_program_address(
        &[b"engine-authority"],
        &ctx.accounts.exchange_program.key(),
    );
    require_keys_eq!(
        expected_engine_authority,
        ctx.accounts.engine_authority.key(),
        ErrorCode::InvalidEngineAuthority
    );

    let now = Clock::get()?.unix_timestamp;
    let pool = &mut ctx.accounts.pool;
    pool.admin = ctx.accounts.admin.key();
    pool.usdc_mint = ctx.accounts.usdc_mint.key();
    pool.exchange_program = ctx.accounts.exchange_program.key();
    pool.engine_authority = ctx.accounts.engine_authority.key();
    pool.liquidity_vault = ctx.accounts.liquidity_vault.key();
    pool.protocol_fee_vault = ctx.accounts.protocol_fee_vault.key();
    pool.total_shares = 0;
    pool.total_liquidity = 0;
    pool.acc_reward_per_share = 0;
    pool.pending_rewards = 0;
    pool.carry_fees = 0;
    pool.total_fees_accrued = 0;
    pool.protocol_fees_accrued = 0;
    pool.max_instant_withdrawal_bps = params.max_instant_withdrawal_bps;
    pool.daily_withdrawal_cap_bps = params.daily_withdrawal_cap_bps;
    pool.queue_excess = params.queue_excess;
    pool.withdrawal_day = now / crate::constants::SECONDS_PER_DAY;
    pool.withdrawn_today = 0;
    pool.vesting_schedule = params.vesting_schedule;
    pool.bump = ctx.bumps.pool;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub usdc_mint: Account<'info, Mint>,
    /// CHECK: external program id pinned into pool config.
    pub exchange_program: UncheckedAccount<'info>,
    /// CHECK: PDA owned by the exchange used as CPI signer.
    pub engine_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"pool", usdc_mint.key().as_ref()],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    /// CHECK: PDA authority for liquidity vault transfer signing.
    #[account(seeds = [b"liquidity-auth", pool.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    /// CHECK: PDA authority for protocol fee vault transfer signing.
    #[account(seeds = [b"protocol-fee-auth", pool.key().as_ref()], bump)]
    pub protocol_fee_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"liquidity-vault", pool.key().as_ref()],
        bump,
        token::mint = usdc_mint,
        token::authority = liquidity_auth,
    )]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = admin,
        seeds = [b"protocol-fee-vault", pool.key().as_ref()],
        bump,
        token::mint = usdc_mint,
        token::authority = protocol_fee_auth,
    )]
    pub protocol_fee_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
