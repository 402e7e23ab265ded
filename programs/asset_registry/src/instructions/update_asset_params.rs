use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::require_admin,
    state::{Asset, AssetStatus, BlendParams, CurveParams, FeeParams, GlobalConfig, OracleSet},
};

pub fn handler(
    ctx: Context<UpdateAssetParams>,
    curve_params: CurveParams,
    fee_params: FeeParams,
    blend_params: BlendParams,
) -> Result<()> {
    require_admin(
        &ctx.accounts.authority,
        &ctx.accounts.global_config,
        &ctx.accounts.oracle_set,
    )?;

    curve_params.validate()?;
    fee_params.validate()?;
    blend_params.validate()?;

    let asset = &mut ctx.accounts.asset;
    // Supply already issued was priced off the curve; the curve can only be
    // changed while the asset is still in its funding phase.
    if asset.curve_params != curve_params {
        require!(
            asset.status == AssetStatus::Funding,
            ErrorCode::CurveParamsFrozen
        );
        asset.curve_params = curve_params;
    }
    asset.fee_params = fee_params;
    asset.blend_params = blend_params;

    ctx.accounts.global_config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateAssetParams<'info> {
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
        mut,
        seeds = [b"asset".as_ref(), &asset.asset_id.to_le_bytes()],
        bump = asset.bump,
    )]
    pub asset: Account<'info, Asset>,
}
