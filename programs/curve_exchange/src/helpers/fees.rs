use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use asset_registry::state::FeeSplit;
use lp_vault::program::LpVault;

use crate::{
    error::ErrorCode,
    helpers::{math::mul_bps_u64, vault::transfer_from_cash_vault},
};

/// Moves a trade fee out of the cash vault and books it with the LP
/// program: the LP share goes to the liquidity vault, the rest to the
/// protocol fee vault, then `accrue_fee` updates the pool's reward
/// accounting in the same transaction.
#[allow(clippy::too_many_arguments)]
pub fn settle_fee<'info>(
    token_program: &Program<'info, Token>,
    cash_vault: &Account<'info, TokenAccount>,
    lp_liquidity_vault: &Account<'info, TokenAccount>,
    lp_protocol_fee_vault: &Account<'info, TokenAccount>,
    engine_authority: &UncheckedAccount<'info>,
    engine_authority_bump: u8,
    lp_vault_program: &Program<'info, LpVault>,
    lp_pool: &Account<'info, lp_vault::Pool>,
    fee_split: &FeeSplit,
    asset_id: u64,
    trade_id: u64,
    fee: u64,
) -> Result<()> {
    if fee == 0 {
        return Ok(());
    }

    let lp_fee = mul_bps_u64(fee, fee_split.lp_bps as u64)?;
    let protocol_fee = fee
        .checked_sub(lp_fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    transfer_from_cash_vault(
        token_program,
        cash_vault,
        lp_liquidity_vault,
        engine_authority,
        engine_authority_bump,
        lp_fee,
    )?;

    transfer_from_cash_vault(
        token_program,
        cash_vault,
        lp_protocol_fee_vault,
        engine_authority,
        engine_authority_bump,
        protocol_fee,
    )?;

    let seeds: &[&[u8]] = &[b"engine-authority", &[engine_authority_bump]];
    let signer_seeds = &[seeds];

    let cpi_accounts = lp_vault::cpi::accounts::AccrueFee {
        engine_authority: engine_authority.to_account_info(),
        pool: lp_pool.to_account_info(),
        liquidity_vault: lp_liquidity_vault.to_account_info(),
        protocol_fee_vault: lp_protocol_fee_vault.to_account_info(),
    };

    lp_vault::cpi::accrue_fee(
        CpiContext::new_with_signer(
            lp_vault_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        asset_id,
        trade_id,
        lp_fee,
        protocol_fee,
    )
}
