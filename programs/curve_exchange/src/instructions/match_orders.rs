use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use asset_registry::program::AssetRegistry;
use lp_vault::program::LpVault;

use crate::{
    error::ErrorCode,
    events::TradeExecuted,
    helpers::{matching::plan_fill, math::notional_floor, settle_fee},
    state::{
        AssetState, EngineConfig, Order, OrderBook, OrderStatus, Side, UserAccount,
        UserShareBalance,
    },
};

/// Permissionless matching crank. Settles exactly one fill between the
/// best bid and the best ask; anyone may call it, and repeated calls
/// drain the book until the heads no longer cross. Constraining fills to
/// the two heads makes the fill sequence a deterministic function of the
/// book, whoever cranks.
pub fn handler(ctx: Context<MatchOrders>, asset_id: u64) -> Result<()> {
    require!(
        !ctx.accounts.global_config.global_pause,
        ErrorCode::GlobalPaused
    );
    require!(
        ctx.accounts.asset.status == asset_registry::AssetStatus::Active,
        ErrorCode::AssetNotActive
    );

    let now = Clock::get()?.unix_timestamp;
    let buy_order = &mut ctx.accounts.buy_order;
    let sell_order = &mut ctx.accounts.sell_order;

    require!(
        buy_order.status == OrderStatus::Open,
        ErrorCode::OrderNotOpen
    );
    require!(
        sell_order.status == OrderStatus::Open,
        ErrorCode::OrderNotOpen
    );
    require!(buy_order.asset_id == asset_id, ErrorCode::AssetMismatch);
    require!(sell_order.asset_id == asset_id, ErrorCode::AssetMismatch);
    require!(
        buy_order.user_account != sell_order.user_account,
        ErrorCode::SelfMatchNotAllowed
    );

    {
        let book = &ctx.accounts.order_book;
        let best_bid = book
            .best(Side::Buy)
            .ok_or_else(|| error!(ErrorCode::NotBookHead))?;
        require!(best_bid.order_id == buy_order.id, ErrorCode::NotBookHead);
        let best_ask = book
            .best(Side::Sell)
            .ok_or_else(|| error!(ErrorCode::NotBookHead))?;
        require!(best_ask.order_id == sell_order.id, ErrorCode::NotBookHead);
    }

    let plan = plan_fill(
        buy_order.price,
        buy_order.seq,
        buy_order.remaining_qty,
        sell_order.price,
        sell_order.seq,
        sell_order.remaining_qty,
        ctx.accounts.asset.fee_params.trade_fee_bps,
    )?;

    // Buyer side: a partial fill consumes the rounded-down value of the
    // filled quantity at the order's own limit price, which keeps the
    // remaining lock covering the remaining quantity. The final fill
    // consumes whatever is left of the lock and refunds the rounding
    // dust along with any price improvement.
    let terminal_buy = plan.quantity == buy_order.remaining_qty;
    let consumed = if terminal_buy {
        buy_order.locked
    } else {
        notional_floor(buy_order.price, plan.quantity)?
    };
    let refund = consumed
        .checked_sub(plan.cash)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let buyer_account = &mut ctx.accounts.buyer_account;
    buyer_account.locked_cash = buyer_account
        .locked_cash
        .checked_sub(consumed)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    buyer_account.free_cash = buyer_account
        .free_cash
        .checked_add(refund)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    buy_order.locked = buy_order
        .locked
        .checked_sub(consumed)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let buyer_shares = &mut ctx.accounts.buyer_share_balance;
    buyer_shares.free_shares = buyer_shares
        .free_shares
        .checked_add(plan.quantity)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    // Seller side: shares leave the lock, the cash leg net of the fee
    // arrives as free cash.
    let seller_shares = &mut ctx.accounts.seller_share_balance;
    seller_shares.locked_shares = seller_shares
        .locked_shares
        .checked_sub(plan.quantity)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    sell_order.locked = sell_order
        .locked
        .checked_sub(plan.quantity)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let seller_proceeds = plan
        .cash
        .checked_sub(plan.fee)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let seller_account = &mut ctx.accounts.seller_account;
    seller_account.free_cash = seller_account
        .free_cash
        .checked_add(seller_proceeds)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    buy_order.remaining_qty = buy_order
        .remaining_qty
        .checked_sub(plan.quantity)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if buy_order.remaining_qty == 0 {
        buy_order.status = OrderStatus::Filled;
    }
    sell_order.remaining_qty = sell_order
        .remaining_qty
        .checked_sub(plan.quantity)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    if sell_order.remaining_qty == 0 {
        sell_order.status = OrderStatus::Filled;
    }

    let book = &mut ctx.accounts.order_book;
    book.fill_head(Side::Buy, buy_order.id, plan.quantity)?;
    book.fill_head(Side::Sell, sell_order.id, plan.quantity)?;

    let state = &mut ctx.accounts.asset_state;
    state.record_volume(plan.cash, now)?;
    state.refresh_prices(
        &ctx.accounts.asset.curve_params,
        &ctx.accounts.asset.blend_params,
    )?;
    let trade_id = state.take_trade_id()?;

    settle_fee(
        &ctx.accounts.token_program,
        &ctx.accounts.cash_vault,
        &ctx.accounts.lp_liquidity_vault,
        &ctx.accounts.lp_protocol_fee_vault,
        &ctx.accounts.engine_authority,
        ctx.bumps.engine_authority,
        &ctx.accounts.lp_vault_program,
        &ctx.accounts.lp_pool,
        &ctx.accounts.global_config.fee_split,
        asset_id,
        trade_id,
        plan.fee,
    )?;

    emit!(TradeExecuted {
        asset_id,
        trade_id,
        price: plan.price,
        quantity: plan.quantity,
        buyer: buy_order.user,
        seller: sell_order.user,
        buy_order_id: buy_order.id,
        sell_order_id: sell_order.id,
        fee: plan.fee,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct MatchOrders<'info> {
    pub cranker: Signer<'info>,
    #[account(
        seeds = [b"engine-config"],
        bump = engine_config.bump,
    )]
    pub engine_config: Box<Account<'info, EngineConfig>>,
    pub asset_registry_program: Program<'info, AssetRegistry>,
    #[account(address = engine_config.registry_global_config)]
    pub global_config: Box<Account<'info, asset_registry::GlobalConfig>>,
    #[account(
        seeds = [b"asset".as_ref(), &asset_id.to_le_bytes()],
        seeds::program = asset_registry_program.key(),
        bump = asset.bump,
    )]
    pub asset: Box<Account<'info, asset_registry::Asset>>,
    #[account(
        mut,
        seeds = [b"asset-state".as_ref(), &asset_id.to_le_bytes()],
        bump = asset_state.bump,
    )]
    pub asset_state: Box<Account<'info, AssetState>>,
    #[account(
        mut,
        seeds = [b"order-book".as_ref(), &asset_id.to_le_bytes()],
        bump = order_book.bump,
    )]
    pub order_book: Box<Account<'info, OrderBook>>,
    #[account(
        mut,
        constraint = buy_order.side == Side::Buy @ ErrorCode::OrdersDoNotCross,
    )]
    pub buy_order: Box<Account<'info, Order>>,
    #[account(
        mut,
        constraint = sell_order.side == Side::Sell @ ErrorCode::OrdersDoNotCross,
    )]
    pub sell_order: Box<Account<'info, Order>>,
    #[account(mut, address = buy_order.user_account)]
    pub buyer_account: Box<Account<'info, UserAccount>>,
    #[account(mut, address = sell_order.user_account)]
    pub seller_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        seeds = [b"share-balance", buyer_account.key().as_ref(), &asset_id.to_le_bytes()],
        bump = buyer_share_balance.bump,
    )]
    pub buyer_share_balance: Box<Account<'info, UserShareBalance>>,
    #[account(
        mut,
        seeds = [b"share-balance", seller_account.key().as_ref(), &asset_id.to_le_bytes()],
        bump = seller_share_balance.bump,
    )]
    pub seller_share_balance: Box<Account<'info, UserShareBalance>>,
    /// CHECK: engine authority PDA.
    #[account(seeds = [b"engine-authority"], bump)]
    pub engine_authority: UncheckedAccount<'info>,
    #[account(mut, address = engine_config.cash_vault)]
    pub cash_vault: Box<Account<'info, TokenAccount>>,
    pub lp_vault_program: Program<'info, LpVault>,
    #[account(mut, address = engine_config.lp_pool)]
    pub lp_pool: Box<Account<'info, lp_vault::Pool>>,
    #[account(mut, address = engine_config.lp_liquidity_vault)]
    pub lp_liquidity_vault: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = engine_config.lp_protocol_fee_vault)]
    pub lp_protocol_fee_vault: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
