use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, SHARE_SCALE},
    error::ErrorCode,
};

pub fn mul_bps_u64(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Like [`mul_bps_u64`] but rounds up. Fees round toward the platform so
/// repeated small trades cannot leak value.
pub fn mul_bps_ceil(value: u64, bps: u64) -> Result<u64> {
    let num = (value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let den = BPS_DENOM as u128;
    Ok(num.div_ceil(den) as u64)
}

/// Cash value of `quantity` micro-shares at `price` micro-USDC per share,
/// rounded down.
pub fn notional_floor(price: u64, quantity: u64) -> Result<u64> {
    let num = (price as u128)
        .checked_mul(quantity as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    (num / SHARE_SCALE)
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Cash value rounded up; used when reserving funds against an order so
/// the lock always covers the worst-case settlement.
pub fn notional_ceil(price: u64, quantity: u64) -> Result<u64> {
    let num = (price as u128)
        .checked_mul(quantity as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    num.div_ceil(SHARE_SCALE)
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Integer square root, rounded down.
pub fn isqrt_u128(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = 1u128 << ((128 - n.leading_zeros()).div_ceil(2));
    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_bps_rounding() {
        assert_eq!(mul_bps_u64(1_000_000, 500).unwrap(), 50_000);
        assert_eq!(mul_bps_u64(1, 1).unwrap(), 0);
        assert_eq!(mul_bps_ceil(1, 1).unwrap(), 1);
        assert_eq!(mul_bps_ceil(1_000_000, 500).unwrap(), 50_000);
    }

    #[test]
    fn notional_rounding_pair() {
        // 3 micro-shares at 0.333333 USDC/share: floor 0, ceil 1.
        assert_eq!(notional_floor(333_333, 3).unwrap(), 0);
        assert_eq!(notional_ceil(333_333, 3).unwrap(), 1);
        // Exact case agrees in both directions.
        assert_eq!(notional_floor(1_000_000, 10_000_000).unwrap(), 10_000_000);
        assert_eq!(notional_ceil(1_000_000, 10_000_000).unwrap(), 10_000_000);
    }

    #[test]
    fn isqrt_exact_and_floor() {
        assert_eq!(isqrt_u128(0), 0);
        assert_eq!(isqrt_u128(1), 1);
        assert_eq!(isqrt_u128(144), 12);
        assert_eq!(isqrt_u128(145), 12);
        assert_eq!(isqrt_u128(u128::from(u64::MAX)).pow(2) <= u128::from(u64::MAX), true);
        let n: u128 = 123_000_000_000_000;
        let r = isqrt_u128(n);
        assert!(r * r <= n && (r + 1) * (r + 1) > n);
    }
}
