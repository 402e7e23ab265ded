use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::REWARD_PRECISION,
    error::ErrorCode,
    events::FeeAccrued,
    helpers::assert_engine_authority,
    state::Pool,
};

/// Books a trade fee that the exchange has already transferred into the
/// vaults. The LP share raises the reward accumulator for the holders of
/// record; with no shares outstanding it parks in `carry_fees` until the
/// first depositor arrives.
pub fn handler(
    ctx: Context<AccrueFee>,
    asset_id: u64,
    trade_id: u64,
    lp_amount: u64,
    protocol_amount: u64,
) -> Result<()> {
    assert_engine_authority(&ctx.accounts.pool, &ctx.accounts.engine_authority)?;

    let pool = &mut ctx.accounts.pool;
    require!(
        protocol_amount <= ctx.accounts.protocol_fee_vault.amount,
        ErrorCode::InsufficientProtocolFeeVault
    );

    pool.total_fees_accrued = pool
        .total_fees_accrued
        .checked_add(lp_amount)
        .and_then(|x| x.checked_add(protocol_amount))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    pool.protocol_fees_accrued = pool
        .protocol_fees_accrued
        .checked_add(protocol_amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let distributed = if pool.total_shares == 0 {
        pool.carry_fees = pool
            .carry_fees
            .checked_add(lp_amount)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        0
    } else {
        let distributable = lp_amount
            .checked_add(pool.carry_fees)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pool.carry_fees = 0;

        pool.acc_reward_per_share = pool
            .acc_reward_per_share
            .checked_add(
                (distributable as u128)
                    .checked_mul(REWARD_PRECISION)
                    .ok_or_else(|| error!(ErrorCode::MathOverflow))?
                    / pool.total_shares,
            )
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        pool.pending_rewards = pool
            .pending_rewards
            .checked_add(distributable)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        distributable
    };

    emit!(FeeAccrued {
        pool: pool.key(),
        asset_id,
        trade_id,
        lp_amount,
        protocol_amount,
        distributed,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AccrueFee<'info> {
    pub engine_authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"pool", pool.usdc_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
    #[account(address = pool.liquidity_vault)]
    pub liquidity_vault: Account<'info, TokenAccount>,
    #[account(address = pool.protocol_fee_vault)]
    pub protocol_fee_vault: Account<'info, TokenAccount>,
}
