use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::OrderCancelled,
    state::{Order, OrderBook, OrderStatus, Side, UserAccount, UserShareBalance},
};

/// Cancels an open order and releases whatever is still locked behind
/// it. Works regardless of asset status or global pause: funds are never
/// trapped behind a halted market.
pub fn handler(ctx: Context<CancelOrder>) -> Result<()> {
    let order = &mut ctx.accounts.order;
    require!(order.status == OrderStatus::Open, ErrorCode::OrderNotOpen);

    let now = Clock::get()?.unix_timestamp;
    let released = order.locked;

    ctx.accounts.order_book.remove(order.side, order.id)?;

    match order.side {
        Side::Buy => {
            let user_account = &mut ctx.accounts.user_account;
            user_account.locked_cash = user_account
                .locked_cash
                .checked_sub(released)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            user_account.free_cash = user_account
                .free_cash
                .checked_add(released)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
        Side::Sell => {
            let share_balance = &mut ctx.accounts.share_balance;
            share_balance.locked_shares = share_balance
                .locked_shares
                .checked_sub(released)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
            share_balance.free_shares = share_balance
                .free_shares
                .checked_add(released)
                .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        }
    }

    order.locked = 0;
    order.status = OrderStatus::Cancelled;

    emit!(OrderCancelled {
        asset_id: order.asset_id,
        order_id: order.id,
        user: order.user,
        released,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CancelOrder<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        mut,
        seeds = [b"user-account", user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Box<Account<'info, UserAccount>>,
    #[account(
        mut,
        constraint = order.user_account == user_account.key() @ ErrorCode::Unauthorized,
    )]
    pub order: Box<Account<'info, Order>>,
    #[account(
        mut,
        seeds = [b"share-balance", user_account.key().as_ref(), &order.asset_id.to_le_bytes()],
        bump = share_balance.bump,
    )]
    pub share_balance: Box<Account<'info, UserShareBalance>>,
    #[account(
        mut,
        seeds = [b"order-book".as_ref(), &order.asset_id.to_le_bytes()],
        bump = order_book.bump,
    )]
    pub order_book: Box<Account<'info, OrderBook>>,
}
