use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum AssetStatus {
    /// LPs may fund the pool; trading is not yet open.
    Funding,
    Active,
    Paused,
    /// Soft-cancelled. The account is kept while trades and positions
    /// still reference it.
    Cancelled,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct FeeSplit {
    pub lp_bps: u16,
    pub protocol_bps: u16,
}

impl FeeSplit {
    pub fn validate(&self) -> Result<()> {
        let sum = self
            .lp_bps
            .checked_add(self.protocol_bps)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        require!(sum == 10_000, ErrorCode::InvalidFeeSplit);
        Ok(())
    }
}

/// Linear bonding curve `P(S) = base_price + slope * S`.
///
/// `base_price` is in micro-USDC per share, `slope` in micro-USDC per share
/// per whole share.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq)]
pub struct CurveParams {
    pub base_price: u64,
    pub slope: u64,
}

impl CurveParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.base_price > 0, ErrorCode::InvalidCurveParams);
        Ok(())
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct FeeParams {
    pub trade_fee_bps: u16,
}

impl FeeParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.trade_fee_bps <= 1_000, ErrorCode::InvalidFeeParams);
        Ok(())
    }
}

/// Parameters for blending the AMM marginal price with the external
/// fundamental signal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct BlendParams {
    /// Volume at which the market weight sits halfway between its floor
    /// and its cap, in micro-USDC.
    pub volume_midpoint: u64,
    /// EMA smoothing factor applied to fundamental updates.
    pub ema_beta_bps: u16,
    /// Largest relative move a single fundamental update may apply.
    pub max_fundamental_delta_bps: u16,
}

impl BlendParams {
    pub fn validate(&self) -> Result<()> {
        require!(self.volume_midpoint > 0, ErrorCode::InvalidBlendParams);
        require!(self.ema_beta_bps <= 10_000, ErrorCode::InvalidBlendParams);
        require!(
            self.max_fundamental_delta_bps <= 10_000,
            ErrorCode::InvalidBlendParams
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_split_must_sum_to_denominator() {
        assert!(FeeSplit {
            lp_bps: 7_000,
            protocol_bps: 3_000
        }
        .validate()
        .is_ok());
        assert!(FeeSplit {
            lp_bps: 7_000,
            protocol_bps: 2_000
        }
        .validate()
        .is_err());
    }

    #[test]
    fn curve_params_reject_zero_base_price() {
        assert!(CurveParams {
            base_price: 0,
            slope: 10_000
        }
        .validate()
        .is_err());
        assert!(CurveParams {
            base_price: 1_000_000,
            slope: 0
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn blend_params_bounds() {
        let ok = BlendParams {
            volume_midpoint: 1_000_000_000,
            ema_beta_bps: 2_000,
            max_fundamental_delta_bps: 3_000,
        };
        assert!(ok.validate().is_ok());
        assert!(BlendParams {
            ema_beta_bps: 10_001,
            ..ok
        }
        .validate()
        .is_err());
        assert!(BlendParams {
            volume_midpoint: 0,
            ..ok
        }
        .validate()
        .is_err());
    }
}
