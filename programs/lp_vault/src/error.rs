use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Invalid engine authority PDA")]
    InvalidEngineAuthority,
    #[msg("Unauthorized engine signer")]
    UnauthorizedEngine,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Invalid vesting schedule")]
    InvalidVestingSchedule,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Insufficient shares")]
    InsufficientShares,
    #[msg("Contribution slots exhausted")]
    ContributionLimitReached,
    #[msg("Amount exceeds the instant withdrawal limit")]
    ExceedsInstantLimit,
    #[msg("Amount exceeds the daily pool withdrawal cap")]
    ExceedsDailyCap,
    #[msg("Nothing to claim")]
    NothingToClaim,
    #[msg("Withdraw request is not pending")]
    RequestNotPending,
    #[msg("Withdraw request is not yet eligible")]
    RequestNotEligible,
    #[msg("Invalid LP position")]
    InvalidLpPosition,
    #[msg("Invalid withdraw request")]
    InvalidWithdrawRequest,
    #[msg("Invalid pool state")]
    InvalidPoolState,
    #[msg("Insufficient protocol fee vault balance")]
    InsufficientProtocolFeeVault,
}
