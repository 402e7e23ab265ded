use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{MAX_CONTRIBUTIONS, SECONDS_PER_DAY},
    error::ErrorCode,
    events::LiquidityDeposited,
    helpers::{rearm_reward_debt, settle_rewards, shares_for_amount},
    state::{Contribution, LpPosition, Pool},
};

pub fn handler(ctx: Context<DepositLp>, amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
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
    let minted_shares = shares_for_amount(
        amount,
        ctx.accounts.pool.total_shares,
        ctx.accounts.pool.total_liquidity,
    )?;
    require!(minted_shares > 0, ErrorCode::InvalidAmount);

    token::transfer(ctx.accounts.deposit_ctx(), amount)?;

    let lp = &mut ctx.accounts.lp_position;
    settle_rewards(ctx.accounts.pool.acc_reward_per_share, lp)?;

    lp.shares = lp
        .shares
        .checked_add(minted_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    lp.contributed = lp
        .contributed
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    // Same-day deposits merge into one vesting entry.
    let day = now / SECONDS_PER_DAY;
    match lp.contributions.last_mut() {
        Some(last) if last.deposited_at / SECONDS_PER_DAY == day => {
            last.amount = last
                .amount
                .checked_add(amount)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
        _ => {
            require!(
                lp.contributions.len() < MAX_CONTRIBUTIONS,
                ErrorCode::ContributionLimitReached
            );
            lp.contributions.push(Contribution {
                amount,
                deposited_at: now,
            });
        }
    }

    rearm_reward_debt(ctx.accounts.pool.acc_reward_per_share, lp)?;

    let pool = &mut ctx.accounts.pool;
    pool.total_shares = pool
        .total_shares
        .checked_add(minted_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.total_liquidity = pool
        .total_liquidity
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    emit!(LiquidityDeposited {
        pool: ctx.accounts.pool.key(),
        user: ctx.accounts.user.key(),
        amount,
        shares_minted: minted_shares,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositLp<'info> {
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
        constraint = user_token_account.mint == pool.usdc_mint @ ErrorCode::InvalidTokenAccount,
        constraint = user_token_account.owner == user.key() @ ErrorCode::Unauthorized,
    )]
    pub user_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> DepositLp<'info> {
    fn deposit_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.user_token_account.to_account_info(),
            to: self.liquidity_vault.to_account_info(),
            authority: self.user.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
