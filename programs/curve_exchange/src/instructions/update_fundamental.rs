use anchor_lang::prelude::*;
use asset_registry::program::AssetRegistry;

use crate::{
    error::ErrorCode,
    events::FundamentalUpdated,
    helpers::blend,
    state::{AssetState, EngineConfig},
};

/// Applies a signed fundamental move from a registered oracle. The move
/// is clamped and EMA-smoothed before it reaches the display blend.
/// Allowed while an asset is paused so the signal stays fresh, but not
/// after cancellation.
pub fn handler(ctx: Context<UpdateFundamental>, asset_id: u64, delta_bps: i64) -> Result<()> {
    require!(
        ctx.accounts.oracle_set.contains(&ctx.accounts.oracle.key()),
        ErrorCode::UnauthorizedOracle
    );
    require!(
        ctx.accounts.asset.status != asset_registry::AssetStatus::Cancelled,
        ErrorCode::AssetNotActive
    );

    let now = Clock::get()?.unix_timestamp;
    let asset = &ctx.accounts.asset;
    let state = &mut ctx.accounts.asset_state;

    state.fundamental_price = blend::apply_fundamental_delta(
        state.fundamental_price,
        delta_bps,
        asset.blend_params.max_fundamental_delta_bps,
        asset.blend_params.ema_beta_bps as u64,
    )?;
    state.refresh_prices(&asset.curve_params, &asset.blend_params)?;
    state.last_fundamental_update_at = now;

    emit!(FundamentalUpdated {
        asset_id,
        fundamental_price: state.fundamental_price,
        display_price: state.display_price,
        weight_bps: state.last_weight_bps,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct UpdateFundamental<'info> {
    pub oracle: Signer<'info>,
    #[account(
        seeds = [b"engine-config"],
        bump = engine_config.bump,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,
    pub asset_registry_program: Program<'info, AssetRegistry>,
    #[account(address = engine_config.oracle_set)]
    pub oracle_set: Box<Account<'info, asset_registry::OracleSet>>,
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
}
