use anchor_lang::prelude::*;

use crate::{constants::MAX_BOOK_ORDERS, error::ErrorCode, state::Side};

/// One resting order's footprint on the book. The order's PDA stays the
/// durable record; the entry is removed the moment the order leaves
/// `Open`. `remaining` is kept in lockstep by fill and cancel handlers so
/// depth snapshots can be served straight from this account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct RestingEntry {
    pub order_id: u64,
    pub owner: Pubkey,
    pub price: u64,
    pub remaining: u64,
    pub seq: u64,
}

/// Price-time-priority book for one asset. Bids are kept best-first
/// (price descending, then arrival), asks likewise (price ascending,
/// then arrival), so index 0 of each side is the current best.
#[account]
#[derive(InitSpace)]
pub struct OrderBook {
    pub asset_id: u64,
    #[max_len(MAX_BOOK_ORDERS)]
    pub bids: Vec<RestingEntry>,
    #[max_len(MAX_BOOK_ORDERS)]
    pub asks: Vec<RestingEntry>,
    pub bump: u8,
}

impl OrderBook {
    fn side_mut(&mut self, side: Side) -> &mut Vec<RestingEntry> {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    fn side_ref(&self, side: Side) -> &Vec<RestingEntry> {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    /// Inserts an entry at its price-time position. New entries always
    /// carry the largest `seq`, so within a price level they land after
    /// every resting entry at the same price.
    pub fn insert(&mut self, side: Side, entry: RestingEntry) -> Result<()> {
        let level = self.side_mut(side);
        require!(level.len() < MAX_BOOK_ORDERS, ErrorCode::BookFull);

        let idx = match side {
            Side::Buy => level.partition_point(|e| e.price >= entry.price),
            Side::Sell => level.partition_point(|e| e.price <= entry.price),
        };
        level.insert(idx, entry);
        Ok(())
    }

    pub fn best(&self, side: Side) -> Option<&RestingEntry> {
        self.side_ref(side).first()
    }

    /// Decrements the head entry's remaining quantity, removing it once
    /// exhausted. The caller must have verified `order_id` is the head.
    pub fn fill_head(&mut self, side: Side, order_id: u64, quantity: u64) -> Result<()> {
        let level = self.side_mut(side);
        let head = level.first_mut().ok_or_else(|| error!(ErrorCode::OrderNotOnBook))?;
        require!(head.order_id == order_id, ErrorCode::NotBookHead);
        head.remaining = head
            .remaining
            .checked_sub(quantity)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        if head.remaining == 0 {
            level.remove(0);
        }
        Ok(())
    }

    pub fn remove(&mut self, side: Side, order_id: u64) -> Result<RestingEntry> {
        let level = self.side_mut(side);
        let idx = level
            .iter()
            .position(|e| e.order_id == order_id)
            .ok_or_else(|| error!(ErrorCode::OrderNotOnBook))?;
        Ok(level.remove(idx))
    }

    /// True when the best bid and best ask cross; `match_orders` cranks
    /// until this turns false.
    pub fn crossed(&self) -> bool {
        match (self.best(Side::Buy), self.best(Side::Sell)) {
            (Some(bid), Some(ask)) => bid.price >= ask.price,
            _ => false,
        }
    }

    /// Read-side depth snapshot: open quantity aggregated by price level,
    /// best level first.
    pub fn depth(&self, side: Side) -> Vec<(u64, u64)> {
        let mut out: Vec<(u64, u64)> = Vec::new();
        for e in self.side_ref(side) {
            match out.last_mut() {
                Some((price, qty)) if *price == e.price => *qty += e.remaining,
                _ => out.push((e.price, e.remaining)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = 1_000_000;

    fn entry(order_id: u64, price: u64, remaining: u64, seq: u64) -> RestingEntry {
        RestingEntry {
            order_id,
            owner: Pubkey::new_unique(),
            price,
            remaining,
            seq,
        }
    }

    fn empty_book() -> OrderBook {
        OrderBook {
            asset_id: 1,
            bids: Vec::new(),
            asks: Vec::new(),
            bump: 255,
        }
    }

    #[test]
    fn bids_sort_price_descending_time_ascending() {
        let mut book = empty_book();
        book.insert(Side::Buy, entry(1, ONE, 10, 1)).unwrap();
        book.insert(Side::Buy, entry(2, 2 * ONE, 10, 2)).unwrap();
        book.insert(Side::Buy, entry(3, ONE, 10, 3)).unwrap();

        let ids: Vec<u64> = book.bids.iter().map(|e| e.order_id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(book.best(Side::Buy).unwrap().order_id, 2);
    }

    #[test]
    fn asks_sort_price_ascending_time_ascending() {
        let mut book = empty_book();
        book.insert(Side::Sell, entry(1, 2 * ONE, 10, 1)).unwrap();
        book.insert(Side::Sell, entry(2, ONE, 10, 2)).unwrap();
        book.insert(Side::Sell, entry(3, ONE, 10, 3)).unwrap();

        let ids: Vec<u64> = book.asks.iter().map(|e| e.order_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn crossed_only_when_best_prices_overlap() {
        let mut book = empty_book();
        assert!(!book.crossed());
        book.insert(Side::Buy, entry(1, ONE, 10, 1)).unwrap();
        book.insert(Side::Sell, entry(2, 2 * ONE, 10, 2)).unwrap();
        assert!(!book.crossed());
        book.insert(Side::Buy, entry(3, 2 * ONE, 10, 3)).unwrap();
        assert!(book.crossed());
    }

    #[test]
    fn fill_head_removes_exhausted_entries() {
        let mut book = empty_book();
        book.insert(Side::Sell, entry(1, ONE, 10, 1)).unwrap();
        book.fill_head(Side::Sell, 1, 4).unwrap();
        assert_eq!(book.best(Side::Sell).unwrap().remaining, 6);
        book.fill_head(Side::Sell, 1, 6).unwrap();
        assert!(book.best(Side::Sell).is_none());
        // Filling a non-head order id is refused.
        book.insert(Side::Sell, entry(2, ONE, 10, 2)).unwrap();
        assert!(book.fill_head(Side::Sell, 99, 1).is_err());
    }

    #[test]
    fn remove_unknown_order_fails() {
        let mut book = empty_book();
        book.insert(Side::Buy, entry(1, ONE, 10, 1)).unwrap();
        assert!(book.remove(Side::Buy, 2).is_err());
        assert_eq!(book.remove(Side::Buy, 1).unwrap().order_id, 1);
    }

    #[test]
    fn capacity_is_enforced() {
        let mut book = empty_book();
        for i in 0..MAX_BOOK_ORDERS as u64 {
            book.insert(Side::Buy, entry(i, ONE, 1, i)).unwrap();
        }
        assert!(book.insert(Side::Buy, entry(999, ONE, 1, 999)).is_err());
    }

    #[test]
    fn depth_aggregates_by_price_level() {
        let mut book = empty_book();
        book.insert(Side::Sell, entry(1, ONE, 10, 1)).unwrap();
        book.insert(Side::Sell, entry(2, ONE, 5, 2)).unwrap();
        book.insert(Side::Sell, entry(3, 2 * ONE, 7, 3)).unwrap();
        assert_eq!(book.depth(Side::Sell), vec![(ONE, 15), (2 * ONE, 7)]);
    }
}
