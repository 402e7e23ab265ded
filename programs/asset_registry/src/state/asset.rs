use anchor_lang::prelude::*;

use crate::{
    constants::SYMBOL_LEN,
    state::{AssetStatus, BlendParams, CurveParams, FeeParams},
};

/// Static definition of a tradable synthetic asset. All dynamic state
/// (supply, reserve, prices, order book) lives in the exchange program.
#[account]
#[derive(InitSpace)]
pub struct Asset {
    pub asset_id: u64,
    pub symbol: [u8; SYMBOL_LEN],
    pub status: AssetStatus,
    pub curve_params: CurveParams,
    pub fee_params: FeeParams,
    pub blend_params: BlendParams,
    pub created_at: i64,
    pub bump: u8,
}
