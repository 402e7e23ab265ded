use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct EngineConfig {
    pub admin: Pubkey,
    pub usdc_mint: Pubkey,
    pub cash_vault: Pubkey,
    pub registry_program: Pubkey,
    pub registry_global_config: Pubkey,
    pub oracle_set: Pubkey,
    pub lp_vault_program: Pubkey,
    pub lp_pool: Pubkey,
    pub lp_liquidity_vault: Pubkey,
    pub lp_protocol_fee_vault: Pubkey,
    pub engine_authority: Pubkey,
    pub bump: u8,
}
