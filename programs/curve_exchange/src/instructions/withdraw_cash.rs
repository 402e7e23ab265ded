use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{
    error::ErrorCode,
    helpers::transfer_from_cash_vault,
    state::{EngineConfig, UserAccount},
};

/// Withdraws free cash back to the user's token account. Cash locked
/// behind resting orders must be released by `cancel_order` first.
pub fn handler(ctx: Context<WithdrawCash>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    require_keys_eq!(
        ctx.accounts.user_account.owner,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let free_cash = ctx.accounts.user_account.free_cash;
    require!(free_cash >= amount, ErrorCode::InsufficientCash);

    transfer_from_cash_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.cash_vault,
        &ctx.accounts.user_token_account,
        &ctx.accounts.engine_authority,
        ctx.bumps.engine_authority,
        amount,
    )?;

    ctx.accounts.user_account.free_cash = free_cash
        .checked_sub(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawCash<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"engine-config"],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,
    #[account(
        mut,
        seeds = [b"user-account", user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    /// CHECK: engine authority PDA.
    #[account(seeds = [b"engine-authority"], bump)]
    pub engine_authority: UncheckedAccount<'info>,
    #[account(mut, address = engine_config.cash_vault)]
    pub cash_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = user_token_account.mint == engine_config.usdc_mint @ ErrorCode::InvalidCashMint,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
