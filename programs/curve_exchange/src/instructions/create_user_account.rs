use anchor_lang::prelude::*;

use crate::state::UserAccount;

pub fn handler(ctx: Context<CreateUserAccount>) -> Result<()> {
    let account = &mut ctx.accounts.user_account;
    account.owner = ctx.accounts.user.key();
    account.free_cash = 0;
    account.locked_cash = 0;
    account.next_order_nonce = 0;
    account.bump = ctx.bumps.user_account;
    Ok(())
}

#[derive(Accounts)]
pub struct CreateUserAccount<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        init,
        payer = user,
        seeds = [b"user-account", user.key().as_ref()],
        bump,
        space = 8 + UserAccount::INIT_SPACE,
    )]
    pub user_account: Account<'info, UserAccount>,
    pub system_program: Program<'info, System>,
}
