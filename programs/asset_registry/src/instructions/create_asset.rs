use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{require_admin, to_fixed_symbol},
    state::{Asset, AssetStatus, BlendParams, CurveParams, FeeParams, GlobalConfig, OracleSet},
};

pub fn handler(
    ctx: Context<CreateAsset>,
    asset_id: u64,
    symbol: String,
    curve_params: CurveParams,
    fee_params: FeeParams,
    blend_params: BlendParams,
) -> Result<()> {
    require_admin(
        &ctx.accounts.authority,
        &ctx.accounts.global_config,
        &ctx.accounts.oracle_set,
    )?;
    require!(
        !ctx.accounts.global_config.global_pause,
        ErrorCode::GlobalPaused
    );

    curve_params.validate()?;
    fee_params.validate()?;
    blend_params.validate()?;

    let asset = &mut ctx.accounts.asset;
    asset.asset_id = asset_id;
    asset.symbol = to_fixed_symbol(&symbol)?;
    asset.status = AssetStatus::Funding;
    asset.curve_params = curve_params;
    asset.fee_params = fee_params;
    asset.blend_params = blend_params;
    asset.created_at = Clock::get()?.unix_timestamp;
    asset.bump = ctx.bumps.asset;

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct CreateAsset<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"global-config"],
        bump = global_config.bump,
    )]
    pub global_config: Account<'info, GlobalConfig>,
    #[account(
        seeds = [b"oracle-set"],
        bump = oracle_set.bump,
    )]
    pub oracle_set: Account<'info, OracleSet>,
    #[account(
        init,
        payer = authority,
        seeds = [b"asset".as_ref(), &asset_id.to_le_bytes()],
        bump,
        space = 8 + Asset::INIT_SPACE,
    )]
    pub asset: Account<'info, Asset>,
    pub system_program: Program<'info, System>,
}
