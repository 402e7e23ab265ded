use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::WithdrawCancelled,
    state::{LpPosition, Pool, RequestStatus, WithdrawRequest},
};

/// Returns a queued request's shares to the active balance. The total
/// share count never changes, so reward accounting is untouched.
pub fn handler(ctx: Context<CancelWithdrawRequest>) -> Result<()> {
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

    let share_amount = ctx.accounts.withdraw_request.share_amount;
    let lp = &mut ctx.accounts.lp_position;
    lp.pending_shares = lp
        .pending_shares
        .checked_sub(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    lp.shares = lp
        .shares
        .checked_add(share_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    ctx.accounts.withdraw_request.status = RequestStatus::Cancelled;

    emit!(WithdrawCancelled {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.user.key(),
        nonce: ctx.accounts.withdraw_request.nonce,
        share_amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelWithdrawRequest<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
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
}
