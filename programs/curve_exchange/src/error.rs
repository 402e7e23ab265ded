use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Signer is not a registered oracle")]
    UnauthorizedOracle,
    #[msg("Invalid cash mint")]
    InvalidCashMint,
    #[msg("Registry config mismatch")]
    RegistryConfigMismatch,
    #[msg("LP pool config mismatch")]
    LpPoolConfigMismatch,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid limit price")]
    InvalidLimitPrice,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Insufficient cash balance")]
    InsufficientCash,
    #[msg("Insufficient share balance")]
    InsufficientShares,
    #[msg("Order is not open")]
    OrderNotOpen,
    #[msg("Asset is not active")]
    AssetNotActive,
    #[msg("Asset mismatch")]
    AssetMismatch,
    #[msg("Global pause is enabled")]
    GlobalPaused,
    #[msg("Invalid curve input")]
    InvalidCurveInput,
    #[msg("Invalid blend input")]
    InvalidBlendInput,
    #[msg("Order book side is full")]
    BookFull,
    #[msg("Order is not on the book")]
    OrderNotOnBook,
    #[msg("Order is not at the head of its book side")]
    NotBookHead,
    #[msg("Orders do not cross")]
    OrdersDoNotCross,
    #[msg("Order owners must differ")]
    SelfMatchNotAllowed,
    #[msg("Slippage limit exceeded")]
    SlippageExceeded,
}
