use anchor_lang::prelude::*;
use asset_registry::program::AssetRegistry;

use crate::{
    constants::{SECONDS_PER_DAY, WEIGHT_FLOOR_BPS},
    error::ErrorCode,
    state::{AssetState, EngineConfig, OrderBook},
};

pub fn handler(ctx: Context<InitializeAssetState>, asset_id: u64) -> Result<()> {
    require_keys_eq!(
        ctx.accounts.admin.key(),
        ctx.accounts.engine_config.admin,
        ErrorCode::Unauthorized
    );
    require!(
        ctx.accounts.asset.asset_id == asset_id,
        ErrorCode::AssetMismatch
    );

    let now = Clock::get()?.unix_timestamp;
    let base_price = ctx.accounts.asset.curve_params.base_price;

    let state = &mut ctx.accounts.asset_state;
    state.asset_id = asset_id;
    state.total_supply = 0;
    state.reserve = 0;
    state.last_market_price = base_price;
    // Until the first oracle update the fundamental tracks the curve base.
    state.fundamental_price = base_price;
    state.display_price = base_price;
    state.last_weight_bps = WEIGHT_FLOOR_BPS as u16;
    state.volume_day = now / SECONDS_PER_DAY;
    state.volume_current = 0;
    state.volume_previous = 0;
    state.last_fundamental_update_at = 0;
    state.next_order_seq = 0;
    state.next_trade_id = 0;
    state.bump = ctx.bumps.asset_state;

    let book = &mut ctx.accounts.order_book;
    book.asset_id = asset_id;
    book.bids = Vec::new();
    book.asks = Vec::new();
    book.bump = ctx.bumps.order_book;

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct InitializeAssetState<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        seeds = [b"engine-config"],
        bump = engine_config.bump,
    )]
    pub engine_config: Account<'info, EngineConfig>,
    pub asset_registry_program: Program<'info, AssetRegistry>,
    #[account(
        seeds = [b"asset".as_ref(), &asset_id.to_le_bytes()],
        seeds::program = asset_registry_program.key(),
        bump = asset.bump,
    )]
    pub asset: Account<'info, asset_registry::Asset>,
    #[account(
        init,
        payer = admin,
        seeds = [b"asset-state".as_ref(), &asset_id.to_le_bytes()],
        bump,
        space = 8 + AssetState::INIT_SPACE,
    )]
    pub asset_state: Account<'info, AssetState>,
    #[account(
        init,
        payer = admin,
        seeds = [b"order-book".as_ref(), &asset_id.to_le_bytes()],
        bump,
        space = 8 + OrderBook::INIT_SPACE,
    )]
    pub order_book: Box<Account<'info, OrderBook>>,
    pub system_program: Program<'info, System>,
}
