use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    constants::{BPS_DENOM, REWARD_PRECISION, SECONDS_PER_DAY},
    error::ErrorCode,
    state::{Contribution, LpPosition, Pool, VestingMilestone, WithdrawKind},
};

pub fn require_admin(admin: &Signer<'_>, pool: &Account<Pool>) -> Result<()> {
    require_keys_eq!(admin.key(), pool.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn assert_engine_authority(pool: &Account<Pool>, engine_authority: &Signer<'_>) -> Result<()> {
    require_keys_eq!(
        pool.engine_authority,
        engine_authority.key(),
        ErrorCode::UnauthorizedEngine
    );
    Ok(())
}

pub fn mul_bps(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

pub fn current_day(now: i64) -> i64 {
    now / SECONDS_PER_DAY
}

/// Unlocked fraction of a contribution `elapsed_days` after it was made:
/// the highest milestone already reached, zero before the first.
pub fn vested_bps(schedule: &[VestingMilestone], elapsed_days: i64) -> u64 {
    schedule
        .iter()
        .rev()
        .find(|m| elapsed_days >= m.day_offset as i64)
        .map(|m| m.unlock_bps as u64)
        .unwrap_or(0)
}

/// Walks every dated contribution through the step schedule.
pub fn vested_principal(
    schedule: &[VestingMilestone],
    contributions: &[Contribution],
    now: i64,
) -> Result<u64> {
    let mut total = 0u64;
    for c in contributions {
        let elapsed_days = current_day(now) - current_day(c.deposited_at);
        let vested = mul_bps(c.amount, vested_bps(schedule, elapsed_days))?;
        total = total
            .checked_add(vested)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }
    Ok(total)
}

/// Routes a withdrawal against the caller's instant allowance and the
/// pool's remaining daily cap. Within both limits it settles instantly.
/// Over either limit the request queues for the next day when the pool
/// allows queueing, otherwise the binding limit rejects it.
pub fn route_withdrawal(
    amount: u64,
    instant_allowance: u64,
    withdrawn_today: u64,
    daily_cap: u64,
    queue_excess: bool,
) -> Result<WithdrawKind> {
    let within_instant = amount <= instant_allowance;
    let within_cap = withdrawn_today.saturating_add(amount) <= daily_cap;
    if within_instant && within_cap {
        return Ok(WithdrawKind::Instant);
    }
    if !queue_excess {
        require!(within_instant, ErrorCode::ExceedsInstantLimit);
        require!(within_cap, ErrorCode::ExceedsDailyCap);
    }
    Ok(WithdrawKind::Queued)
}

/// Folds rewards accrued since the last settlement into `unclaimed` and
/// re-arms `reward_debt`. Must run before any change to the position's
/// share count; rewards are pro-rata to holders at accrual time, never
/// retroactive.
pub fn settle_rewards(acc_reward_per_share: u128, lp: &mut LpPosition) -> Result<()> {
    let entitled = lp
        .total_shares()
        .checked_mul(acc_reward_per_share)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / REWARD_PRECISION;
    let accrued: u64 = entitled
        .checked_sub(lp.reward_debt)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))?;
    lp.unclaimed = lp
        .unclaimed
        .checked_add(accrued)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    lp.reward_debt = entitled;
    Ok(())
}

/// Re-arms `reward_debt` after the position's share count changed.
pub fn rearm_reward_debt(acc_reward_per_share: u128, lp: &mut LpPosition) -> Result<()> {
    lp.reward_debt = lp
        .total_shares()
        .checked_mul(acc_reward_per_share)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        / REWARD_PRECISION;
    Ok(())
}

/// Shares minted for a deposit at the current principal valuation, 1:1
/// on the empty pool.
pub fn shares_for_amount(amount: u64, total_shares: u128, total_liquidity: u64) -> Result<u128> {
    if total_shares == 0 {
        return Ok(amount as u128);
    }
    require!(total_liquidity > 0, ErrorCode::InvalidPoolState);
    (amount as u128)
        .checked_mul(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(total_liquidity as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

/// Principal value of a share amount, rounded down.
pub fn amount_for_shares(shares: u128, total_shares: u128, total_liquidity: u64) -> Result<u64> {
    require!(total_shares > 0, ErrorCode::InvalidPoolState);
    shares
        .checked_mul(total_liquidity as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .checked_div(total_shares)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?
        .try_into()
        .map_err(|_| error!(ErrorCode::MathOverflow))
}

pub fn transfer_from_liquidity_vault<'info>(
    token_program: &Program<'info, Token>,
    liquidity_vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    liquidity_auth: &UncheckedAccount<'info>,
    pool_key: Pubkey,
    auth_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[b"liquidity-auth", pool_key.as_ref(), &[auth_bump]];
    let signer = &[seeds];

    let cpi_accounts = Transfer {
        from: liquidity_vault.to_account_info(),
        to: to.to_account_info(),
        authority: liquidity_auth.to_account_info(),
    };

    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer),
        amount,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: u64 = 1_000_000;

    fn schedule() -> Vec<VestingMilestone> {
        [(0u16, 1_000u16), (30, 2_500), (90, 5_000), (180, 10_000)]
            .iter()
            .map(|&(day_offset, unlock_bps)| VestingMilestone {
                day_offset,
                unlock_bps,
            })
            .collect()
    }

    fn position(shares: u128) -> LpPosition {
        LpPosition {
            owner: Pubkey::new_unique(),
            pool: Pubkey::new_unique(),
            shares,
            pending_shares: 0,
            contributed: 0,
            principal_withdrawn: 0,
            contributions: Vec::new(),
            reward_debt: 0,
            unclaimed: 0,
            withdraw_nonce: 0,
            bump: 255,
        }
    }

    #[test]
    fn vesting_walks_the_step_function() {
        let s = schedule();
        assert_eq!(vested_bps(&s, 0), 1_000);
        assert_eq!(vested_bps(&s, 29), 1_000);
        assert_eq!(vested_bps(&s, 30), 2_500);
        assert_eq!(vested_bps(&s, 40), 2_500);
        assert_eq!(vested_bps(&s, 90), 5_000);
        assert_eq!(vested_bps(&s, 500), 10_000);
    }

    #[test]
    fn vesting_example_day_forty() {
        // 1,000 USDC contributed on day 0; at day 40 the 30-day milestone
        // (25%) is the latest reached: vested 250, instant limit at the
        // default 25% cap is 62.5.
        let s = schedule();
        let contributions = vec![Contribution {
            amount: 1_000 * ONE,
            deposited_at: 0,
        }];
        let now = 40 * SECONDS_PER_DAY + 123;
        let vested = vested_principal(&s, &contributions, now).unwrap();
        assert_eq!(vested, 250 * ONE);
        assert_eq!(mul_bps(vested, 2_500).unwrap(), 62 * ONE + ONE / 2);
    }

    #[test]
    fn unvested_before_first_milestone() {
        let s = vec![
            VestingMilestone {
                day_offset: 7,
                unlock_bps: 5_000,
            },
            VestingMilestone {
                day_offset: 14,
                unlock_bps: 10_000,
            },
        ];
        let contributions = vec![Contribution {
            amount: 100 * ONE,
            deposited_at: 0,
        }];
        assert_eq!(vested_principal(&s, &contributions, 0).unwrap(), 0);
        assert_eq!(
            vested_principal(&s, &contributions, 7 * SECONDS_PER_DAY).unwrap(),
            50 * ONE
        );
    }

    #[test]
    fn withdrawals_within_both_limits_settle_instantly() {
        for queue_excess in [false, true] {
            assert_eq!(
                route_withdrawal(50 * ONE, 60 * ONE, 0, 100 * ONE, queue_excess).unwrap(),
                WithdrawKind::Instant
            );
        }
    }

    #[test]
    fn excess_withdrawals_queue_when_the_pool_allows() {
        // Over the instant allowance.
        assert_eq!(
            route_withdrawal(70 * ONE, 60 * ONE, 0, 100 * ONE, true).unwrap(),
            WithdrawKind::Queued
        );
        // Within the allowance but over what is left of the daily cap.
        assert_eq!(
            route_withdrawal(50 * ONE, 60 * ONE, 80 * ONE, 100 * ONE, true).unwrap(),
            WithdrawKind::Queued
        );
    }

    #[test]
    fn excess_withdrawals_reject_when_queueing_is_off() {
        assert_eq!(
            route_withdrawal(70 * ONE, 60 * ONE, 0, 100 * ONE, false).unwrap_err(),
            ErrorCode::ExceedsInstantLimit.into()
        );
        assert_eq!(
            route_withdrawal(50 * ONE, 60 * ONE, 80 * ONE, 100 * ONE, false).unwrap_err(),
            ErrorCode::ExceedsDailyCap.into()
        );
    }

    #[test]
    fn rewards_are_not_retroactive() {
        let acc0 = 0u128;
        let mut early = position(100);
        settle_rewards(acc0, &mut early).unwrap();

        // 1 USDC of fees lands while only `early` holds shares.
        let acc1 = acc0 + (ONE as u128) * REWARD_PRECISION / 100;
        let mut late = position(100);
        // The late joiner arms its debt at the current accumulator.
        rearm_reward_debt(acc1, &mut late).unwrap();

        settle_rewards(acc1, &mut early).unwrap();
        settle_rewards(acc1, &mut late).unwrap();
        assert_eq!(early.unclaimed, ONE);
        assert_eq!(late.unclaimed, 0);

        // The next fee splits between them.
        let acc2 = acc1 + (ONE as u128) * REWARD_PRECISION / 200;
        settle_rewards(acc2, &mut early).unwrap();
        settle_rewards(acc2, &mut late).unwrap();
        assert_eq!(early.unclaimed, ONE + ONE / 2);
        assert_eq!(late.unclaimed, ONE / 2);
    }

    #[test]
    fn pending_shares_keep_earning() {
        let mut lp = position(60);
        lp.pending_shares = 40;
        let acc = (ONE as u128) * REWARD_PRECISION / 100;
        settle_rewards(acc, &mut lp).unwrap();
        assert_eq!(lp.unclaimed, ONE);
    }

    #[test]
    fn share_conversions_roundtrip() {
        assert_eq!(shares_for_amount(100 * ONE, 0, 0).unwrap(), (100 * ONE) as u128);
        let shares = shares_for_amount(50 * ONE, 1_000, 100 * ONE).unwrap();
        assert_eq!(shares, 500);
        assert_eq!(amount_for_shares(500, 1_500, 150 * ONE).unwrap(), 50 * ONE);
        assert!(amount_for_shares(1, 0, ONE).is_err());
    }
}
