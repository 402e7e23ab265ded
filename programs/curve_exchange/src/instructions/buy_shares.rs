use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use asset_registry::program::AssetRegistry;
use lp_vault::program::LpVault;

use crate::{
    constants::SHARE_SCALE,
    error::ErrorCode,
    events::CurveTraded,
    helpers::{curve, math::mul_bps_ceil, settle_fee},
    state::{AssetState, EngineConfig, Side, UserAccount, UserShareBalance},
};

/// Market buy against the bonding curve. `usdc_in` is spent in full on
/// shares; the trade fee is charged on top of it.
pub fn handler(ctx: Context<BuyShares>, asset_id: u64, usdc_in: u64, min_shares_out: u64) -> Result<()> {
    require!(usdc_in > 0, ErrorCode::InvalidAmount);
    require!(
        !ctx.accounts.global_config.global_pause,
        ErrorCode::GlobalPaused
    );
    require!(
        ctx.accounts.asset.status == asset_registry::AssetStatus::Active,
        ErrorCode::AssetNotActive
    );

    let now = Clock::get()?.unix_timestamp;
    let asset = &ctx.accounts.asset;
    let state = &mut ctx.accounts.asset_state;
    let user_account = &mut ctx.accounts.user_account;
    let share_balance = &mut ctx.accounts.share_balance;

    let fee = mul_bps_ceil(usdc_in, asset.fee_params.trade_fee_bps as u64)?;
    let total_debit = usdc_in
        .checked_add(fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    require!(
        user_account.free_cash >= total_debit,
        ErrorCode::InsufficientCash
    );

    let delta_shares = curve::solve_delta_shares(
        asset.curve_params.base_price,
        asset.curve_params.slope,
        state.total_supply,
        usdc_in,
    )?;
    require!(delta_shares >= min_shares_out, ErrorCode::SlippageExceeded);

    user_account.free_cash = user_account
        .free_cash
        .checked_sub(total_debit)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    state.reserve = state
        .reserve
        .checked_add(usdc_in)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    state.total_supply = state
        .total_supply
        .checked_add(delta_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    share_balance.free_shares = share_balance
        .free_shares
        .checked_add(delta_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    state.record_volume(usdc_in, now)?;
    state.refresh_prices(&asset.curve_params, &asset.blend_params)?;
    let trade_id = state.take_trade_id()?;

    settle_fee(
        &ctx.accounts.token_program,
        &ctx.accounts.cash_vault,
        &ctx.accounts.lp_liquidity_vault,
        &ctx.accounts.lp_protocol_fee_vault,
        &ctx.accounts.engine_authority,
        ctx.bumps.engine_authority,
        &ctx.accounts.lp_vault_program,
        &ctx.accounts.lp_pool,
        &ctx.accounts.global_config.fee_split,
        asset_id,
        trade_id,
        fee,
    )?;

    // Effective average price paid per share.
    let avg_price: u64 = ((usdc_in as u128)
        .checked_mul(SHARE_SCALE)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / delta_shares as u128)
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))?;

    emit!(CurveTraded {
        asset_id,
        trade_id,
        user: ctx.accounts.user.key(),
        side: Side::Buy,
        price: avg_price,
        quantity: delta_shares,
        cash_amount: usdc_in,
        fee,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct BuyShares<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [b"engine-config"],
        bump = engine_config.bump,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,
    pub asset_registry_program: Program<'info, AssetRegistry>,
    #[account(address = engine_config.registry_global_config)]
    pub global_config: Box<Account<'info, asset_registry::GlobalConfig>>,
    #[account(
        seeds = [b"asset".as_ref(), &asset_id.to_le_bytes()],
        seeds::program = asset_registry_program.key(),
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, asset_registry::Asset>>,
    #[account(
        mut,
        seeds = [b"asset-state".as_ref(), &asset_id.to_le_bytes()],
        bump = asset_state.bump,
    )]
    pub asset_state: Box<Account<'info, AssetState>>,
    #[account(
        mut,
        seeds = [b"user-account", user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        seeds = [b"share-balance", user_account.key().as_ref(), &asset_id.to_le_bytes()],
        bump = share_balance.bump,
    )]
    pub share_balance: Box<Account<'info, UserShareBalance>>,
    /// CHECK: engine authority PDA.
    #[account(seeds = [b"engine-authority"], bump)]
    pub engine_authority: UncheckedAccount<'info>,
    #[account(mut, address = engine_config.cash_vault)]
    pub cash_vault: Box<Account<'info, TokenAccount>>,
    pub lp_vault_program: Program<'info, LpVault>,
    #[account(mut, address = engine_config.lp_pool)]
    pub lp_pool: Box<Account<'info, lp_vault::Pool>>,
    #[account(mut, address = engine_config.lp_liquidity_vault)]
    pub lp_liquidity_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = engine_config.lp_protocol_fee_vault)]
    pub lp_protocol_fee_vault: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
