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

declare_id!("FeLNaVGuQZWizZMd2hfy4MaXoko3kLC5q675q5EE5KaC");

#[program]
pub mod lp_vault {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, params: PoolConfigParams) -> Result<()> {
        instructions::initialize_pool::handler(ctx, params)
    }

    pub fn configure_pool(ctx: Context<ConfigurePool>, params: PoolConfigParams) -> Result<()> {
        instructions::configure_pool::handler(ctx, params)
    }

    pub fn create_lp_position(ctx: Context<CreateLpPosition>) -> Result<()> {
        instructions::create_lp_position::handler(ctx)
    }

    pub fn deposit_lp(ctx: Context<DepositLp>, amount: u64) -> Result<()> {
        instructions::deposit_lp::handler(ctx, amount)
    }

    pub fn accrue_fee(
        ctx: Context<AccrueFee>,
        asset_id: u64,
        trade_id: u64,
        lp_amount: u64,
        protocol_amount: u64,
    ) -> Result<()> {
        instructions::accrue_fee::handler(ctx, asset_id, trade_id, lp_amount, protocol_amount)
    }

    pub fn claim_rewards(ctx: Context<ClaimRewards>) -> Result<()> {
        instructions::claim_rewards::handler(ctx)
    }

    pub fn request_withdraw(ctx: Context<RequestWithdraw>, amount_usdc: u64) -> Result<()> {
        instructions::request_withdraw::handler(ctx, amount_usdc)
    }

    pub fn claim_withdraw(ctx: Context<ClaimWithdraw>) -> Result<()> {
        instructions::claim_withdraw::handler(ctx)
    }

    pub fn cancel_withdraw_request(ctx: Context<CancelWithdrawRequest>) -> Result<()> {
        instructions::cancel_withdraw_request::handler(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::mul_bps;

    #[test]
    fn test_mul_bps() {
        assert_eq!(mul_bps(1_000_000, 500).unwrap(), 50_000);
        assert_eq!(mul_bps(2_500_000, 10_000).unwrap(), 2_500_000);
    }
}
