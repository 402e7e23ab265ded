use anchor_lang::prelude::*;

use crate::state::Side;

/// A trade against the bonding curve.
#[event]
pub struct CurveTraded {
    pub asset_id: u64,
    pub trade_id: u64,
    pub user: Pubkey,
    pub side: Side,
    pub price: u64,
    pub quantity: u64,
    pub cash_amount: u64,
    pub fee: u64,
    pub timestamp: i64,
}

/// A fill between two resting orders. Consumers must be idempotent on
/// `(asset_id, trade_id)`.
#[event]
pub struct TradeExecuted {
    pub asset_id: u64,
    pub trade_id: u64,
    pub price: u64,
    pub quantity: u64,
    pub buyer: Pubkey,
    pub seller: Pubkey,
    pub buy_order_id: u64,
    pub sell_order_id: u64,
    pub fee: u64,
    pub timestamp: i64,
}

#[event]
pub struct OrderPlaced {
    pub asset_id: u64,
    pub order_id: u64,
    pub user: Pubkey,
    pub side: Side,
    pub price: u64,
    pub quantity: u64,
    pub timestamp: i64,
}

#[event]
pub struct OrderCancelled {
    pub asset_id: u64,
    pub order_id: u64,
    pub user: Pubkey,
    pub released: u64,
    pub timestamp: i64,
}

#[event]
pub struct FundamentalUpdated {
    pub asset_id: u64,
    pub fundamental_price: u64,
    pub display_price: u64,
    pub weight_bps: u16,
    pub timestamp: i64,
}
