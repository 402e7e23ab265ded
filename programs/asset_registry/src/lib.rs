use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use helpers::*;
pub use instructions::*;
pub use state::*;

declare_id!("8NeEkxgPMV5AnZ8o5ksjPhqsHwkWXdvGCGyHmEt6tJTn");

#[program]
pub mod asset_registry {
    use super::*;

    pub fn initialize_global(
        ctx: Context<InitializeGlobal>,
        admin: Pubkey,
        fee_split: FeeSplit,
        pause_flag: bool,
    ) -> Result<()> {
        instructions::initialize_global::handler(ctx, admin, fee_split, pause_flag)
    }

    pub fn create_asset(
        ctx: Context<CreateAsset>,
        asset_id: u64,
        symbol: String,
        curve_params: CurveParams,
        fee_params: FeeParams,
        blend_params: BlendParams,
    ) -> Result<()> {
        instructions::create_asset::handler(
            ctx,
            asset_id,
            symbol,
            curve_params,
            fee_params,
            blend_params,
        )
    }

    pub fn update_asset_params(
        ctx: Context<UpdateAssetParams>,
        curve_params: CurveParams,
        fee_params: FeeParams,
        blend_params: BlendParams,
    ) -> Result<()> {
        instructions::update_asset_params::handler(ctx, curve_params, fee_params, blend_params)
    }

    pub fn set_asset_status(ctx: Context<SetAssetStatus>, status: AssetStatus) -> Result<()> {
        instructions::set_asset_status::handler(ctx, status)
    }

    pub fn set_global_pause(ctx: Context<SetGlobalPause>, paused: bool) -> Result<()> {
        instructions::set_global_pause::handler(ctx, paused)
    }

    pub fn add_oracle(ctx: Context<AddOracle>, oracle: Pubkey) -> Result<()> {
        instructions::add_oracle::handler(ctx, oracle)
    }

    pub fn remove_oracle(ctx: Context<RemoveOracle>, oracle: Pubkey) -> Result<()> {
        instructions::remove_oracle::handler(ctx, oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_symbol_roundtrip() {
        let sym = to_fixed_symbol("sAAPL").unwrap();
        assert_eq!(&sym[..5], b"sAAPL");
        assert!(sym[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fixed_symbol_rejects_bad_lengths() {
        assert!(to_fixed_symbol("").is_err());
        assert!(to_fixed_symbol("ALONGERSYMBOLNAME").is_err());
    }
}
