use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::math::{mul_bps_ceil, notional_floor},
};

/// Settlement plan for one fill between a crossing bid and ask. The fill
/// executes at the maker's (earlier order's) price.
#[derive(Debug, PartialEq, Eq)]
pub struct FillPlan {
    pub price: u64,
    pub quantity: u64,
    /// Cash leg paid by the buyer.
    pub cash: u64,
    /// Fee taken out of the cash leg before it reaches the seller.
    pub fee: u64,
}

pub fn plan_fill(
    bid_price: u64,
    bid_seq: u64,
    bid_remaining: u64,
    ask_price: u64,
    ask_seq: u64,
    ask_remaining: u64,
    trade_fee_bps: u16,
) -> Result<FillPlan> {
    require!(bid_price >= ask_price, ErrorCode::OrdersDoNotCross);

    let price = if bid_seq <= ask_seq {
        bid_price
    } else {
        ask_price
    };
    let quantity = bid_remaining.min(ask_remaining);
    require!(quantity > 0, ErrorCode::InvalidAmount);

    let cash = notional_floor(price, quantity)?;
    // The fee can never exceed the cash leg it is carved out of.
    let fee = mul_bps_ceil(cash, trade_fee_bps as u64)?.min(cash);

    Ok(FillPlan {
        price,
        quantity,
        cash,
        fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = 1_000_000;

    #[test]
    fn fill_executes_at_maker_price() {
        // Resting bid at 1.10, incoming ask at 1.00: maker is the bid.
        let plan = plan_fill(1_100_000, 1, 10 * ONE, ONE, 2, 10 * ONE, 100).unwrap();
        assert_eq!(plan.price, 1_100_000);
        assert_eq!(plan.quantity, 10 * ONE);
        assert_eq!(plan.cash, 11 * ONE);
        assert_eq!(plan.fee, 110_000);

        // Resting ask at 1.00, incoming bid at 1.10: maker is the ask.
        let plan = plan_fill(1_100_000, 5, 10 * ONE, ONE, 2, 10 * ONE, 100).unwrap();
        assert_eq!(plan.price, ONE);
        assert_eq!(plan.cash, 10 * ONE);
    }

    #[test]
    fn fill_quantity_is_min_of_remainings() {
        let plan = plan_fill(ONE, 1, 10 * ONE, ONE, 2, 4 * ONE, 100).unwrap();
        assert_eq!(plan.quantity, 4 * ONE);
    }

    #[test]
    fn non_crossing_orders_rejected() {
        assert!(plan_fill(ONE, 1, ONE, 1_100_000, 2, ONE, 100).is_err());
    }

    #[test]
    fn dust_fill_fee_capped_at_cash() {
        // 1 micro-share at 1 USDC/share: cash leg is 1 micro-USDC, the
        // rounded-up fee would exceed it without the cap.
        let plan = plan_fill(ONE, 1, 1, ONE, 2, 1, 100).unwrap();
        assert_eq!(plan.cash, 1);
        assert_eq!(plan.fee, 1);
    }

    #[test]
    fn equal_price_fill_uses_maker_price() {
        // Buy 10 @ 1.00 then sell 10 @ 1.00: one trade of 10 at 1.00.
        let plan = plan_fill(ONE, 1, 10 * ONE, ONE, 2, 10 * ONE, 100).unwrap();
        assert_eq!(plan.price, ONE);
        assert_eq!(plan.quantity, 10 * ONE);
        assert_eq!(plan.cash, 10 * ONE);
    }
}
