use anchor_lang::prelude::*;
use asset_registry::program::AssetRegistry;

use crate::{
    error::ErrorCode,
    events::OrderPlaced,
    helpers::math::notional_ceil,
    state::{
        AssetState, EngineConfig, Order, OrderBook, OrderStatus, RestingEntry, Side, UserAccount,
        UserShareBalance,
    },
};

/// Places a resting limit order. Buys lock the worst-case cash value of
/// the order up front; sells lock the shares. Orders never match at
/// placement time, the `match_orders` crank settles crossed heads.
pub fn handler(
    ctx: Context<PlaceOrder>,
    asset_id: u64,
    side: Side,
    price: u64,
    quantity: u64,
) -> Result<()> {
    require!(price > 0, ErrorCode::InvalidLimitPrice);
    require!(quantity > 0, ErrorCode::InvalidAmount);
    require!(
        !ctx.accounts.global_config.global_pause,
        ErrorCode::GlobalPaused
    );
    require!(
        ctx.accounts.asset.status == asset_registry::AssetStatus::Active,
        ErrorCode::AssetNotActive
    );

    let now = Clock::get()?.unix_timestamp;
    let state = &mut ctx.accounts.asset_state;
    let user_account = &mut ctx.accounts.user_account;
    let share_balance = &mut ctx.accounts.share_balance;

    let locked = match side {
        Side::Buy => {
            let lock = notional_ceil(price, quantity)?;
            require!(user_account.free_cash >= lock, ErrorCode::InsufficientCash);
            user_account.free_cash = user_account
                .free_cash
                .checked_sub(lock)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            user_account.locked_cash = user_account
                .locked_cash
                .checked_add(lock)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            lock
        }
        Side::Sell => {
            require!(
                share_balance.free_shares >= quantity,
                ErrorCode::InsufficientShares
            );
            share_balance.free_shares = share_balance
                .free_shares
                .checked_sub(quantity)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            share_balance.locked_shares = share_balance
                .locked_shares
                .checked_add(quantity)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            quantity
        }
    };

    let seq = state.take_order_seq()?;
    user_account.next_order_nonce = user_account
        .next_order_nonce
        .checked_add(1)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    ctx.accounts.order_book.insert(
        side,
        RestingEntry {
            order_id: seq,
            owner: user_account.key(),
            price,
            remaining: quantity,
            seq,
        },
    )?;

    let order = &mut ctx.accounts.order;
    order.id = seq;
    order.user_account = user_account.key();
    order.user = ctx.accounts.user.key();
    order.asset_id = asset_id;
    order.side = side;
    order.price = price;
    order.initial_qty = quantity;
    order.remaining_qty = quantity;
    order.locked = locked;
    order.seq = seq;
    order.created_at = now;
    order.status = OrderStatus::Open;
    order.bump = ctx.bumps.order;

    emit!(OrderPlaced {
        asset_id,
        order_id: seq,
        user: ctx.accounts.user.key(),
        side,
        price,
        quantity,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(asset_id: u64)]
pub struct PlaceOrder<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
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
        seeds = [b"user-account", user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        seeds = [b"share-balance", user_account.key().as_ref(), &asset_id.to_le_bytes()],
        bump = share_balance.bump,
    )]
    pub share_balance: Box<Account<'info, UserShareBalance>>,
    #[account(
        init,
        payer = user,
        seeds = [
            b"order",
            user_account.key().as_ref(),
            &user_account.next_order_nonce.to_le_bytes(),
        ],
        bump,
        space = 8 + Order::INIT_SPACE,
    )]
    pub order: Box<Account<'info, Order>>,
    pub system_program: Program<'info, System>,
}
