use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::WithdrawClaimed,
    helpers::{
        amount_for_shares, mul_bps, rearm_reward_debt, settle_rewards,
        transfer_from_liquidity_vault,
    },
    state::{LpPosition, Pool, RequestStatus, WithdrawRequest},
};

/// Settles a queued withdraw request once its eligible day arrives. The
/// payout is the current principal value of the parked shares; the daily
/// cap is re-checked so a backlog of queued requests cannot jointly
/// exceed one day's allowance.
pub fn handler(ctx: Context<ClaimWithdraw>) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.withdraw_request.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.withdraw_request.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidWithdrawRequest
    );
    require!(
        ctx.accounts.withdraw_request.status == RequestStatus::Pending,
        ErrorCode::RequestNotPending
    );

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.pool.roll_withdrawal_day(now);
    require!(
        ctx.accounts.pool.withdrawal_day >= ctx.accounts.withdraw_request.eligible_day,
        ErrorCode::RequestNotEligible
    );

    let share_amount = ctx.accounts.withdraw_request.share_amount;
    require!(
        ctx.accounts.lp_position.pending_shares >= share_amount,
        ErrorCode::InsufficientShares
    );

    let total_shares = ctx.accounts.pool.total_shares;
    let total_liquidity = ctx.accounts.pool.total_liquidity;
    let acc = ctx.accounts.pool.acc_reward_per_share;

    let payout = amount_for_shares(share_amount, total_shares, total_liquidity)?;
    require!(payout > 0, ErrorCode::InvalidAmount);

    let daily_cap = mul_bps(
        total_liquidity,
        ctx.accounts.pool.daily_withdrawal_cap_bps as u64,
    )?;
    require!(
        ctx.accounts.pool.withdrawn_today.saturating_add(payout) <= daily_cap,
        ErrorCode::ExceedsDailyCap
    );

    let lp = &mut ctx.accounts.lp_position;
    settle_rewards(acc, lp)?;

    transfer_from_liquidity_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.liquidity_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.liquidity_auth,
        ctx.accounts.pool.key(),
        ctx.bumps.liquidity_auth,
        payout,
    )?;

    lp.pending_shares = lp
        .pending_shares
        .checked_sub(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    lp.principal_withdrawn = lp
        .principal_withdrawn
        .checked_add(payout)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    rearm_reward_debt(acc, lp)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_shares = pool
        .total_shares
        .checked_sub(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.total_liquidity = pool
        .total_liquidity
        .checked_sub(payout)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.withdrawn_today = pool
        .withdrawn_today
        .checked_add(payout)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    ctx.accounts.withdraw_request.status = RequestStatus::Processed;

    emit!(WithdrawClaimed {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.user.key(),
        nonce: ctx.accounts.withdraw_request.nonce,
        amount_usdc: payout,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimWithdraw<'info> {
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
    #[account(
        mut,
        seeds = [b"withdraw-req", pool.key().as_ref(), user.key().as_ref(), &withdraw_request.nonce.to_le_bytes()],
        bump = withdraw_request.bump,
    )]
    pub withdraw_request: Account<'info, WithdrawRequest>,
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
