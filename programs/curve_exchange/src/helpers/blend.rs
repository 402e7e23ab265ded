//! Blending of the AMM marginal price with the externally supplied
//! fundamental signal. All weights and factors are in basis points.

use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, WEIGHT_CEIL_BPS, WEIGHT_FLOOR_BPS},
    error::ErrorCode,
};

/// Volume-adaptive weight of the market price in the display blend.
/// More trading activity trusts the AMM price more. A dead market sits
/// at the floor: the fundamental carries a fresh or stale asset.
pub fn market_weight_bps(recent_volume: u64, volume_midpoint: u64) -> u64 {
    if recent_volume == 0 {
        return WEIGHT_FLOOR_BPS;
    }
    let vol = recent_volume as u128;
    let mid = volume_midpoint as u128;
    let w = 5_000 + (5_000 * vol) / (vol + mid);
    (w as u64).clamp(WEIGHT_FLOOR_BPS, WEIGHT_CEIL_BPS)
}

/// `weight * market + (1 - weight) * fundamental`.
pub fn combine_price(market_price: u64, fundamental_price: u64, weight_bps: u64) -> Result<u64> {
    require!(weight_bps <= BPS_DENOM, ErrorCode::InvalidBlendInput);
    let num = (market_price as u128)
        .checked_mul(weight_bps as u128)
        .and_then(|m| {
            (fundamental_price as u128)
                .checked_mul((BPS_DENOM - weight_bps) as u128)
                .and_then(|f| m.checked_add(f))
        })
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    (num / BPS_DENOM as u128)
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Exponential smoothing: `beta * new + (1 - beta) * current`.
pub fn ema(current: u64, new_value: u64, beta_bps: u64) -> Result<u64> {
    require!(beta_bps <= BPS_DENOM, ErrorCode::InvalidBlendInput);
    let num = (new_value as u128)
        .checked_mul(beta_bps as u128)
        .and_then(|n| {
            (current as u128)
                .checked_mul((BPS_DENOM - beta_bps) as u128)
                .and_then(|c| n.checked_add(c))
        })
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    (num / BPS_DENOM as u128)
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Applies an oracle delta as a relative move, clamped to
/// `max_delta_bps`, then EMA-smooths the result. The clamp bounds the
/// blast radius of a single bad oracle reading.
pub fn apply_fundamental_delta(
    current: u64,
    delta_bps: i64,
    max_delta_bps: u16,
    beta_bps: u64,
) -> Result<u64> {
    let max = max_delta_bps as i64;
    let clamped = delta_bps.clamp(-max, max);
    let factor = (BPS_DENOM as i128)
        .checked_add(clamped as i128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let target = (current as i128)
        .checked_mul(factor)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / BPS_DENOM as i128;
    let target: u64 = target
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))?;
    ema(current, target, beta_bps)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = 1_000_000;
    const V0: u64 = 1_000 * ONE;

    #[test]
    fn weight_zero_volume_sits_at_floor() {
        assert_eq!(market_weight_bps(0, V0), WEIGHT_FLOOR_BPS);
    }

    #[test]
    fn weight_is_monotone_and_bounded() {
        let mut last = 0u64;
        for vol in [1, ONE, 100 * ONE, V0, 10 * V0, 1_000 * V0, u64::MAX / 2] {
            let w = market_weight_bps(vol, V0);
            assert!(w >= last, "weight not monotone at vol {vol}");
            assert!((WEIGHT_FLOOR_BPS..=WEIGHT_CEIL_BPS).contains(&w));
            last = w;
        }
        // At the midpoint the raw formula gives 75%.
        assert_eq!(market_weight_bps(V0, V0), 7_500);
        // Heavy volume saturates at the cap, never 100%.
        assert_eq!(market_weight_bps(u64::MAX / 2, V0), WEIGHT_CEIL_BPS);
    }

    #[test]
    fn combine_blends_between_inputs() {
        let blended = combine_price(12 * ONE, 10 * ONE, 7_500).unwrap();
        assert_eq!(blended, 11_500_000);
        assert_eq!(combine_price(12 * ONE, 10 * ONE, 10_000).unwrap(), 12 * ONE);
        assert_eq!(combine_price(12 * ONE, 10 * ONE, 0).unwrap(), 10 * ONE);
        assert!(combine_price(ONE, ONE, 10_001).is_err());
    }

    #[test]
    fn ema_smooths_toward_new_value() {
        // beta = 0.2: 0.2*15 + 0.8*10 = 11.
        assert_eq!(ema(10 * ONE, 15 * ONE, 2_000).unwrap(), 11 * ONE);
        assert_eq!(ema(10 * ONE, 15 * ONE, 0).unwrap(), 10 * ONE);
        assert_eq!(ema(10 * ONE, 15 * ONE, 10_000).unwrap(), 15 * ONE);
        assert!(ema(ONE, ONE, 10_001).is_err());
    }

    #[test]
    fn fundamental_delta_is_clamped() {
        // +50% requested, clamped to +30%, then smoothed at beta 0.2:
        // target 13, ema = 0.2*13 + 0.8*10 = 10.6.
        let f = apply_fundamental_delta(10 * ONE, 5_000, 3_000, 2_000).unwrap();
        assert_eq!(f, 10_600_000);
        let down = apply_fundamental_delta(10 * ONE, -5_000, 3_000, 2_000).unwrap();
        assert_eq!(down, 9_400_000);
        // Inside the clamp the delta passes through untouched.
        let small = apply_fundamental_delta(10 * ONE, 1_000, 3_000, 10_000).unwrap();
        assert_eq!(small, 11 * ONE);
    }
}
