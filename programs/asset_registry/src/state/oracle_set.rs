use anchor_lang::prelude::*;

use crate::constants::MAX_ORACLES;

/// Authorities allowed to push fundamental-price updates into the exchange.
#[account]
#[derive(InitSpace)]
pub struct OracleSet {
    pub authority: Pubkey,
    #[max_len(MAX_ORACLES)]
    pub oracles: Vec<Pubkey>,
    pub bump: u8,
}

impl OracleSet {
    pub fn contains(&self, key: &Pubkey) -> bool {
        self.oracles.contains(key)
    }
}
