use anchor_lang::prelude::*;

use crate::{
    constants::SYMBOL_LEN,
    error::ErrorCode,
    state::{GlobalConfig, OracleSet},
};

pub fn require_admin(
    authority: &Signer<'_>,
    global_config: &Account<GlobalConfig>,
    oracle_set: &Account<OracleSet>,
) -> Result<()> {
    require_keys_eq!(
        authority.key(),
        global_config.admin,
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        oracle_set.key(),
        global_config.oracle_set,
        ErrorCode::InvalidOracleSet
    );
    Ok(())
}

pub fn to_fixed_symbol(symbol: &str) -> Result<[u8; SYMBOL_LEN]> {
    let bytes = symbol.as_bytes();
    require!(
        !bytes.is_empty() && bytes.len() <= SYMBOL_LEN,
        ErrorCode::InvalidSymbolLength
    );

    let mut out = [0u8; SYMBOL_LEN];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}
