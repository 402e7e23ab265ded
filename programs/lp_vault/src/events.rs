use anchor_lang::prelude::*;

use crate::state::WithdrawKind;

#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub shares_minted: u128,
    pub timestamp: i64,
}

/// A trade fee booked by the exchange. Consumers must be idempotent on
/// `(asset_id, trade_id)`.
#[event]
pub struct FeeAccrued {
    pub pool: Pubkey,
    pub asset_id: u64,
    pub trade_id: u64,
    pub lp_amount: u64,
    pub protocol_amount: u64,
    /// Amount distributed to holders, carried forward included. Zero
    /// when the pool had no shares and the fee parked in `carry_fees`.
    pub distributed: u64,
    pub timestamp: i64,
}

#[event]
pub struct RewardsClaimed {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawRequested {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub nonce: u64,
    pub amount_usdc: u64,
    pub share_amount: u128,
    pub kind: WithdrawKind,
    pub eligible_day: i64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawClaimed {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub nonce: u64,
    pub amount_usdc: u64,
    pub timestamp: i64,
}

#[event]
pub struct WithdrawCancelled {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub nonce: u64,
    pub share_amount: u128,
    pub timestamp: i64,
}
