use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::RewardsClaimed,
    helpers::{settle_rewards, transfer_from_liquidity_vault},
    state::{LpPosition, Pool},
};

/// Pays out everything the position has earned from trade fees. Rewards
/// live in the liquidity vault alongside principal; `pending_rewards`
/// keeps the two books reconciled.
pub fn handler(ctx: Context<ClaimRewards>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.lp_position.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.lp_position.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidLpPosition
    );

    let lp = &mut ctx.accounts.lp_position;
    settle_rewards(ctx.accounts.pool.acc_reward_per_share, lp)?;

    let amount = lp.unclaimed;
    require!(amount > 0, ErrorCode::NothingToClaim);

    transfer_from_liquidity_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.liquidity_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.liquidity_auth,
        ctx.accounts.pool.key(),
        ctx.bumps.liquidity_auth,
        amount,
    )?;

    lp.unclaimed = 0;
    let pool = &mut ctx.accounts.pool;
    pool.pending_rewards = pool
        .pending_rewards
        .checked_sub(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(RewardsClaimed {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.user.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.usdc_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        mut,
        seeds = [b"lp-pos", pool.key().as_ref(), user.key().as_ref()],
        bump = lp_position.bump,
    )]
    pub lp_position: Account<'info, LpPosition>,
    /// CHECK: liquidity auth PDA.
    #[account(seeds = [b"liquidity-auth", pool.key().as_ref()], bump)]
    pub liquidity_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_account.mint == pool.usdc_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
