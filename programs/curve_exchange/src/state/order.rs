use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Order {
    pub id: u64,
    pub user_account: Pubkey,
    pub user: Pubkey,
    pub asset_id: u64,
    pub side: Side,
    pub price: u64,
    pub initial_qty: u64,
    pub remaining_qty: u64,
    /// Exact amount moved out of the owner's free balance at placement:
    /// cash for buys, shares for sells. Fills and the terminal release
    /// always debit this field, so locking reconciles to zero.
    pub locked: u64,
    /// Book-wide arrival sequence; the tie-breaker at equal price.
    pub seq: u64,
    pub created_at: i64,
    pub status: OrderStatus,
    pub bump: u8,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum Side {
    Buy,
    Sell,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum OrderStatus {
    Open,
    Filled,
    Cancelled,
}
