//! Tranche arithmetic for vesting locks.
//!
//! A schedule releases `first_release` percent at `start` (the lock's
//! `end_time`), then `amount_per_vesting` percent every `vesting_period` days
//! until 100% is reached. Percentages are held in basis points so every
//! amount is computed with integer math.

use crate::{LockError, LockRecord, BPS_DENOMINATOR, SECONDS_PER_DAY};

/// Convert a percentage to basis points, rounding to the nearest bp.
///
/// Returns `None` for NaN or anything outside `0.0..=100.0`.
pub fn percent_to_bps(percent: f64) -> Option<u64> {
    if !(0.0..=100.0).contains(&percent) {
        return None;
    }
    let bps = (percent * 100.0 + 0.5) as u64;
    Some(bps.min(BPS_DENOMINATOR))
}

/// Schedule for a single allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VestingTerms {
    pub amount: u64,
    pub first_release_bps: u64,
    pub per_vesting_bps: u64,
    pub period_secs: u64,
    pub start: u64,
}

impl VestingTerms {
    /// Build and validate terms from the lock arguments.
    ///
    /// `vesting_period` is in days. A schedule that does not release 100% up
    /// front needs a non-zero per-tranche percentage and period.
    pub fn new(
        amount: u64,
        first_release: f64,
        amount_per_vesting: f64,
        vesting_period: u64,
        start: u64,
    ) -> Result<Self, LockError> {
        let first_release_bps =
            percent_to_bps(first_release).ok_or(LockError::InvalidVestingTerms)?;
        let per_vesting_bps =
            percent_to_bps(amount_per_vesting).ok_or(LockError::InvalidVestingTerms)?;

        if first_release_bps < BPS_DENOMINATOR && (per_vesting_bps == 0 || vesting_period == 0) {
            return Err(LockError::InvalidVestingTerms);
        }

        let period_secs = vesting_period
            .checked_mul(SECONDS_PER_DAY)
            .ok_or(LockError::MathOverflow)?;

        Ok(Self {
            amount,
            first_release_bps,
            per_vesting_bps,
            period_secs,
            start,
        })
    }

    /// Terms for one beneficiary allocation of a stored vesting lock.
    pub fn for_allocation(record: &LockRecord, amount: u64) -> Result<Self, LockError> {
        Self::new(
            amount,
            record.first_release,
            record.amount_per_vesting,
            record.vesting_period,
            record.end_time,
        )
    }

    /// Whole periods elapsed since `start`, or `None` before it.
    pub fn elapsed_periods(&self, now: u64) -> Option<u64> {
        let elapsed = now.checked_sub(self.start)?;
        if self.period_secs == 0 {
            return Some(0);
        }
        Some(elapsed / self.period_secs)
    }

    pub fn vested_bps(&self, now: u64) -> u64 {
        match self.elapsed_periods(now) {
            None => 0,
            Some(periods) => self
                .first_release_bps
                .saturating_add(self.per_vesting_bps.saturating_mul(periods))
                .min(BPS_DENOMINATOR),
        }
    }

    pub fn vested_amount(&self, now: u64) -> u64 {
        let bps = self.vested_bps(now);
        // bps <= 10_000, so the quotient never exceeds `amount`
        (self.amount as u128 * bps as u128 / BPS_DENOMINATOR as u128) as u64
    }

    #[inline]
    pub fn claimable(&self, claimed: u64, now: u64) -> u64 {
        self.vested_amount(now).saturating_sub(claimed)
    }

    /// Number of releases including the first: `1 + ceil((100% - first) / per)`.
    pub fn tranche_count(&self) -> u64 {
        let rest = BPS_DENOMINATOR - self.first_release_bps;
        if rest == 0 {
            return 1;
        }
        1 + rest.div_ceil(self.per_vesting_bps.max(1))
    }

    /// Timestamp at which the whole allocation is vested.
    pub fn fully_vested_at(&self) -> u64 {
        let later = (self.tranche_count() - 1).saturating_mul(self.period_secs);
        self.start.saturating_add(later)
    }

    /// Amount to release now for a beneficiary that has claimed `claimed` so far.
    ///
    /// Errors when nothing is releasable: [`LockError::NotUnlockTime`] before
    /// `start`, [`LockError::AlreadyUnlocked`] once everything is claimed,
    /// [`LockError::AlreadyDidFirstClaim`] when the first tranche was taken and
    /// the first period has not elapsed, [`LockError::NotPerVestingUnlockTime`]
    /// otherwise.
    pub fn next_release(&self, claimed: u64, now: u64) -> Result<u64, LockError> {
        let Some(periods) = self.elapsed_periods(now) else {
            return Err(LockError::NotUnlockTime);
        };
        if claimed >= self.amount {
            return Err(LockError::AlreadyUnlocked);
        }
        let amount = self.claimable(claimed, now);
        if amount == 0 {
            if claimed > 0 && periods == 0 {
                return Err(LockError::AlreadyDidFirstClaim);
            }
            return Err(LockError::NotPerVestingUnlockTime);
        }
        Ok(amount)
    }
}
