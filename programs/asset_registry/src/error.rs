use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid oracle set")]
    InvalidOracleSet,
    #[msg("Oracle set is full")]
    OracleSetFull,
    #[msg("Oracle already registered")]
    OracleAlreadyExists,
    #[msg("Oracle not found")]
    OracleNotFound,
    #[msg("Invalid symbol length")]
    InvalidSymbolLength,
    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Invalid fee split")]
    InvalidFeeSplit,
    #[msg("Invalid curve params")]
    InvalidCurveParams,
    #[msg("Invalid fee params")]
    InvalidFeeParams,
    #[msg("Invalid blend params")]
    InvalidBlendParams,
    #[msg("Curve params are immutable once trading has started")]
    CurveParamsFrozen,
    #[msg("Asset is cancelled")]
    AssetCancelled,
    #[msg("Math overflow")]
    MathOverflow,
}
