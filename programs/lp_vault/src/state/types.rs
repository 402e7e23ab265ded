use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, MAX_VESTING_MILESTONES},
    error::ErrorCode,
};

/// One step of the vesting schedule: from `day_offset` days after a
/// contribution, `unlock_bps` of it counts as vested.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct VestingMilestone {
    pub day_offset: u16,
    pub unlock_bps: u16,
}

/// One dated deposit into a position.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct Contribution {
    pub amount: u64,
    pub deposited_at: i64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PoolConfigParams {
    pub max_instant_withdrawal_bps: u16,
    pub daily_withdrawal_cap_bps: u16,
    pub queue_excess: bool,
    pub vesting_schedule: Vec<VestingMilestone>,
}

impl PoolConfigParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.max_instant_withdrawal_bps <= BPS_DENOM as u16,
            ErrorCode::InvalidBps
        );
        require!(
            self.daily_withdrawal_cap_bps <= BPS_DENOM as u16,
            ErrorCode::InvalidBps
        );

        let schedule = &self.vesting_schedule;
        require!(
            !schedule.is_empty() && schedule.len() <= MAX_VESTING_MILESTONES,
            ErrorCode::InvalidVestingSchedule
        );
        for pair in schedule.windows(2) {
            require!(
                pair[1].day_offset > pair[0].day_offset,
                ErrorCode::InvalidVestingSchedule
            );
            require!(
                pair[1].unlock_bps > pair[0].unlock_bps,
                ErrorCode::InvalidVestingSchedule
            );
        }
        // The schedule must eventually release everything.
        let last = schedule[schedule.len() - 1];
        require!(
            last.unlock_bps == BPS_DENOM as u16,
            ErrorCode::InvalidVestingSchedule
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestones(steps: &[(u16, u16)]) -> Vec<VestingMilestone> {
        steps
            .iter()
            .map(|&(day_offset, unlock_bps)| VestingMilestone {
                day_offset,
                unlock_bps,
            })
            .collect()
    }

    fn params(schedule: Vec<VestingMilestone>) -> PoolConfigParams {
        PoolConfigParams {
            max_instant_withdrawal_bps: 2_500,
            daily_withdrawal_cap_bps: 1_000,
            queue_excess: true,
            vesting_schedule: schedule,
        }
    }

    #[test]
    fn schedule_must_be_monotone_and_complete() {
        let ok = params(milestones(&[(0, 1_000), (30, 2_500), (90, 5_000), (180, 10_000)]));
        assert!(ok.validate().is_ok());

        // Not reaching 100%.
        assert!(params(milestones(&[(0, 1_000), (30, 9_000)]))
            .validate()
            .is_err());
        // Non-monotone days.
        assert!(params(milestones(&[(30, 1_000), (30, 10_000)]))
            .validate()
            .is_err());
        // Non-monotone unlocks.
        assert!(params(milestones(&[(0, 5_000), (30, 5_000), (60, 10_000)]))
            .validate()
            .is_err());
        // Empty.
        assert!(params(vec![]).validate().is_err());
    }

    #[test]
    fn bps_bounds_enforced() {
        let mut p = params(milestones(&[(0, 10_000)]));
        assert!(p.validate().is_ok());
        p.max_instant_withdrawal_bps = 10_001;
        assert!(p.validate().is_err());
    }
}
