use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    events::WithdrawRequested,
    helpers::{
        amount_for_shares, mul_bps, rearm_reward_debt, route_withdrawal, settle_rewards,
        shares_for_amount, transfer_from_liquidity_vault, vested_principal,
    },
    state::{LpPosition, Pool, RequestStatus, WithdrawKind, WithdrawRequest},
};

/// Withdraws principal. Within the caller's instant allowance (a capped
/// fraction of their vested principal) and the pool's daily cap, the
/// tokens leave in this instruction. Over either limit, the request is
/// queued for the next UTC day when the pool allows queueing, otherwise
/// rejected.
pub fn handler(ctx: Context<RequestWithdraw>, amount_usdc: u64) -> Result<()> {
    require!(amount_usdc > 0, ErrorCode::InvalidAmount);
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

    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.pool.roll_withdrawal_day(now);

    let total_shares = ctx.accounts.pool.total_shares;
    let total_liquidity = ctx.accounts.pool.total_liquidity;
    let acc = ctx.accounts.pool.acc_reward_per_share;

    let share_amount = shares_for_amount(amount_usdc, total_shares, total_liquidity)?;
    require!(share_amount > 0, ErrorCode::InvalidAmount);

    let lp = &mut ctx.accounts.lp_position;
    require!(lp.shares >= share_amount, ErrorCode::InsufficientShares);
    settle_rewards(acc, lp)?;

    // Instant allowance: the capped share of vested principal, less what
    // already left or is queued to leave.
    let vested = vested_principal(
        &ctx.accounts.pool.vesting_schedule,
        &lp.contributions,
        now,
    )?;
    let pending_value = if lp.pending_shares > 0 {
        amount_for_shares(lp.pending_shares, total_shares, total_liquidity)?
    } else {
        0
    };
    let instant_allowance = mul_bps(
        vested,
        ctx.accounts.pool.max_instant_withdrawal_bps as u64,
    )?
    .saturating_sub(lp.principal_withdrawn)
    .saturating_sub(pending_value);

    let daily_cap = mul_bps(
        total_liquidity,
        ctx.accounts.pool.daily_withdrawal_cap_bps as u64,
    )?;
    let kind = route_withdrawal(
        amount_usdc,
        instant_allowance,
        ctx.accounts.pool.withdrawn_today,
        daily_cap,
        ctx.accounts.pool.queue_excess,
    )?;

    let req = &mut ctx.accounts.withdraw_request;
    req.owner = ctx.accounts.user.key();
    req.pool = ctx.accounts.pool.key();
    req.nonce = lp.withdraw_nonce;
    req.share_amount = share_amount;
    req.amount_usdc = amount_usdc;
    req.requested_at = now;
    req.bump = ctx.bumps.withdraw_request;
    lp.withdraw_nonce = lp
        .withdraw_nonce
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    if kind == WithdrawKind::Instant {
        transfer_from_liquidity_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.liquidity_vault,
            &ctx.accounts.user_token_account,
            &ctx.accounts.liquidity_auth,
            ctx.accounts.pool.key(),
            ctx.bumps.liquidity_auth,
            amount_usdc,
        )?;

        lp.shares = lp
            .shares
            .checked_sub(share_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        lp.principal_withdrawn = lp
            .principal_withdrawn
            .checked_add(amount_usdc)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        rearm_reward_debt(acc, lp)?;

        let pool = &mut ctx.accounts.pool;
        pool.total_shares = pool
            .total_shares
            .checked_sub(share_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pool.total_liquidity = pool
            .total_liquidity
            .checked_sub(amount_usdc)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pool.withdrawn_today = pool
            .withdrawn_today
            .checked_add(amount_usdc)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        req.kind = WithdrawKind::Instant;
        req.eligible_day = ctx.accounts.pool.withdrawal_day;
        req.status = RequestStatus::Processed;
    } else {
        // Queued: the shares stop being withdrawable but keep earning
        // until the claim lands.
        lp.shares = lp
            .shares
            .checked_sub(share_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        lp.pending_shares = lp
            .pending_shares
            .checked_add(share_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

        req.kind = WithdrawKind::Queued;
        req.eligible_day = ctx.accounts.pool.withdrawal_day + 1;
        req.status = RequestStatus::Pending;
    }

    emit!(WithdrawRequested {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.user.key(),
        nonce: ctx.accounts.withdraw_request.nonce,
        amount_usdc,
        share_amount,
        kind,
        eligible_day: ctx.accounts.withdraw_request.eligible_day,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RequestWithdraw<'info> {
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
        init,
        payer = user,
        seeds = [b"withdraw-req", pool.key().as_ref(), user.key().as_ref(), &lp_position.withdraw_nonce.to_le_bytes()],
        bump,
        space = 8 + WithdrawRequest::INIT_SPACE,
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
    pub system_program: Program<'info, System>,
}
