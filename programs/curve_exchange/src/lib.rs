use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use events::*;
pub use instructions::*;
pub use state::*;

declare_id!("FM7SQyRJExhzjFYvZ6XZTLkSSjNcMdDkCq89PWF9FtMB");

#[program]
pub mod curve_exchange {
    use super::*;

    pub fn initialize_engine(ctx: Context<InitializeEngine>) -> Result<()> {
        instructions::initialize_engine::handler(ctx)
    }

    pub fn initialize_asset_state(
        ctx: Context<InitializeAssetState>,
        asset_id: u64,
    ) -> Result<()> {
        instructions::initialize_asset_state::handler(ctx, asset_id)
    }

    pub fn create_user_account(ctx: Context<CreateUserAccount>) -> Result<()> {
        instructions::create_user_account::handler(ctx)
    }

    pub fn create_share_balance(ctx: Context<CreateShareBalance>, asset_id: u64) -> Result<()> {
        instructions::create_share_balance::handler(ctx, asset_id)
    }

    pub fn deposit_cash(ctx: Context<DepositCash>, amount: u64) -> Result<()> {
        instructions::deposit_cash::handler(ctx, amount)
    }

    pub fn withdraw_cash(ctx: Context<WithdrawCash>, amount: u64) -> Result<()> {
        instructions::withdraw_cash::handler(ctx, amount)
    }

    pub fn buy_shares(
        ctx: Context<BuyShares>,
        asset_id: u64,
        usdc_in: u64,
        min_shares_out: u64,
    ) -> Result<()> {
        instructions::buy_shares::handler(ctx, asset_id, usdc_in, min_shares_out)
    }

    pub fn sell_shares(
        ctx: Context<SellShares>,
        asset_id: u64,
        shares_in: u64,
        min_usdc_out: u64,
    ) -> Result<()> {
        instructions::sell_shares::handler(ctx, asset_id, shares_in, min_usdc_out)
    }

    pub fn place_order(
        ctx: Context<PlaceOrder>,
        asset_id: u64,
        side: Side,
        price: u64,
        quantity: u64,
    ) -> Result<()> {
        instructions::place_order::handler(ctx, asset_id, side, price, quantity)
    }

    pub fn cancel_order(ctx: Context<CancelOrder>) -> Result<()> {
        instructions::cancel_order::handler(ctx)
    }

    pub fn match_orders(ctx: Context<MatchOrders>, asset_id: u64) -> Result<()> {
        instructions::match_orders::handler(ctx, asset_id)
    }

    pub fn update_fundamental(
        ctx: Context<UpdateFundamental>,
        asset_id: u64,
        delta_bps: i64,
    ) -> Result<()> {
        instructions::update_fundamental::handler(ctx, asset_id, delta_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::{math, matching};

    const ONE: u64 = 1_000_000;

    // A buyer's lock must always cover any sequence of partial fills at
    // or below the limit price: after each partial fill consumes the
    // rounded-down value of its quantity, what is left of the lock still
    // covers the rounded-up value of the remaining quantity.
    #[test]
    fn test_lock_covers_partial_fills() {
        let price = 1_333_333u64;
        let quantity = 7 * ONE + 1;
        let lock = math::notional_ceil(price, quantity).unwrap();

        let mut remaining_lock = lock;
        let mut remaining_qty = quantity;
        for chunk in [ONE, 2 * ONE, ONE / 3, ONE - 1] {
            remaining_lock -= math::notional_floor(price, chunk).unwrap();
            remaining_qty -= chunk;
            assert!(remaining_lock >= math::notional_ceil(price, remaining_qty).unwrap());
        }
        // The terminal fill takes the whole remainder, so the lock
        // reconciles to zero with at most dust refunded.
        let final_cash = math::notional_floor(price, remaining_qty).unwrap();
        assert!(remaining_lock >= final_cash);
        assert!(remaining_lock - final_cash <= 4);
    }

    #[test]
    fn test_fill_fee_never_exceeds_cash() {
        let plan = matching::plan_fill(ONE, 1, 1, ONE, 2, 1, 10_000).unwrap();
        assert!(plan.fee <= plan.cash);
    }
}
