use anchor_lang::prelude::*;

use asset_registry::state::{BlendParams, CurveParams};

use crate::{
    constants::SECONDS_PER_DAY,
    error::ErrorCode,
    helpers::{blend, curve},
};

/// Dynamic per-asset state. Static parameters live in the registry; this
/// account is the single serialization point for everything a trade or a
/// fundamental update touches on one asset.
#[account]
#[derive(InitSpace)]
pub struct AssetState {
    pub asset_id: u64,
    /// Shares issued by the bonding curve, in micro-shares.
    pub total_supply: u64,
    /// USDC held against curve buys, in micro-USDC. A separate book from
    /// the LP pool's liquidity; the two meet only through fee flow.
    pub reserve: u64,
    pub last_market_price: u64,
    /// EMA-smoothed external signal.
    pub fundamental_price: u64,
    /// Blended user-facing price.
    pub display_price: u64,
    /// Weight used for the last blend, kept for audit of manipulation
    /// claims.
    pub last_weight_bps: u16,
    pub volume_day: i64,
    pub volume_current: u64,
    pub volume_previous: u64,
    pub last_fundamental_update_at: i64,
    pub next_order_seq: u64,
    pub next_trade_id: u64,
    pub bump: u8,
}

impl AssetState {
    /// Trailing traded notional: today's plus the previous day's.
    pub fn recent_volume(&self) -> u64 {
        self.volume_current.saturating_add(self.volume_previous)
    }

    pub fn record_volume(&mut self, notional: u64, now: i64) -> Result<()> {
        let day = now / SECONDS_PER_DAY;
        if day != self.volume_day {
            self.volume_previous = if day == self.volume_day + 1 {
                self.volume_current
            } else {
                0
            };
            self.volume_current = 0;
            self.volume_day = day;
        }
        self.volume_current = self
            .volume_current
            .checked_add(notional)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Recomputes the marginal price from the curve and re-blends the
    /// display price. Called after every supply, volume or fundamental
    /// mutation.
    pub fn refresh_prices(
        &mut self,
        curve_params: &CurveParams,
        blend_params: &BlendParams,
    ) -> Result<()> {
        self.last_market_price = curve::marginal_price(
            curve_params.base_price,
            curve_params.slope,
            self.total_supply,
        )?;
        let weight =
            blend::market_weight_bps(self.recent_volume(), blend_params.volume_midpoint);
        self.display_price =
            blend::combine_price(self.last_market_price, self.fundamental_price, weight)?;
        self.last_weight_bps = weight as u16;
        Ok(())
    }

    pub fn take_order_seq(&mut self) -> Result<u64> {
        let seq = self.next_order_seq;
        self.next_order_seq = seq
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(seq)
    }

    pub fn take_trade_id(&mut self) -> Result<u64> {
        let id = self.next_trade_id;
        self.next_trade_id = id
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = 1_000_000;

    fn fresh_state() -> AssetState {
        AssetState {
            asset_id: 1,
            total_supply: 0,
            reserve: 0,
            last_market_price: ONE,
            fundamental_price: ONE,
            display_price: ONE,
            last_weight_bps: 2_000,
            volume_day: 0,
            volume_current: 0,
            volume_previous: 0,
            last_fundamental_update_at: 0,
            next_order_seq: 0,
            next_trade_id: 0,
            bump: 255,
        }
    }

    #[test]
    fn volume_window_rolls_daily() {
        let mut st = fresh_state();
        st.record_volume(100, 10).unwrap();
        st.record_volume(50, 20).unwrap();
        assert_eq!(st.recent_volume(), 150);

        // Next day: yesterday's volume still counts.
        st.record_volume(30, SECONDS_PER_DAY + 1).unwrap();
        assert_eq!(st.volume_previous, 150);
        assert_eq!(st.recent_volume(), 180);

        // A gap of more than one day drops the old window entirely.
        st.record_volume(7, 5 * SECONDS_PER_DAY).unwrap();
        assert_eq!(st.volume_previous, 0);
        assert_eq!(st.recent_volume(), 7);
    }

    #[test]
    fn refresh_keeps_market_price_consistent_with_curve() {
        let curve_params = CurveParams {
            base_price: ONE,
            slope: 10_000,
        };
        let blend_params = BlendParams {
            volume_midpoint: 1_000 * ONE,
            ema_beta_bps: 2_000,
            max_fundamental_delta_bps: 3_000,
        };

        let mut st = fresh_state();
        st.total_supply = 1_000 * ONE;
        st.fundamental_price = 10 * ONE;
        st.refresh_prices(&curve_params, &blend_params).unwrap();

        assert_eq!(st.last_market_price, 11 * ONE);
        // Zero volume: 20% market, 80% fundamental.
        assert_eq!(st.last_weight_bps, 2_000);
        assert_eq!(st.display_price, (11 * ONE / 5) + (10 * ONE * 4 / 5));
    }
}
