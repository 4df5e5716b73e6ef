//! Event lines for indexers.
//!
//! Each state change logs one line: `event=<name>` followed by `key=value`
//! pairs. Text fields are capped at 100 bytes, so the buffers are sized to fit
//! a full record.

use gemlock::{Beneficiary, LockKind, LockRecord};
use pinocchio_log::log;

fn seed_str(record: &LockRecord) -> &str {
    core::str::from_utf8(record.seed()).unwrap_or_default()
}

/// `create_lock` for token locks, `create_dex_lock` for position locks.
pub fn create_lock(record: &LockRecord) {
    let seed = seed_str(record);
    if record.kind() == Some(LockKind::Lp) {
        log!(
            512,
            "event=create_dex_lock seed={} lock_id={} lock_amount={} start_time={} end_time={} lock_name={} extra_data={} dex_name={}",
            seed,
            record.lock_id,
            record.lock_amount,
            record.start_time,
            record.end_time,
            record.lock_name(),
            record.extra_data(),
            record.dex_name()
        );
    } else {
        log!(
            512,
            "event=create_lock seed={} lock_id={} lock_amount={} start_time={} end_time={} lock_name={} extra_data={} dex_name={}",
            seed,
            record.lock_id,
            record.lock_amount,
            record.start_time,
            record.end_time,
            record.lock_name(),
            record.extra_data(),
            record.dex_name()
        );
    }
}

pub fn lock_vesting(record: &LockRecord) {
    log!(
        512,
        "event=lock_vesting seed={} lock_id={} lock_amount={} start_time={} end_time={} vesting_period={} beneficiaries={} lock_name={} extra_data={}",
        seed_str(record),
        record.lock_id,
        record.lock_amount,
        record.start_time,
        record.end_time,
        record.vesting_period,
        record.beneficiary_count,
        record.lock_name(),
        record.extra_data()
    );
}

pub fn unlock(record: &LockRecord, amount: u64) {
    log!(
        256,
        "event=unlock seed={} lock_id={} unlock_amount={} end_time={}",
        seed_str(record),
        record.lock_id,
        amount,
        record.end_time
    );
}

pub fn unlock_lp(record: &LockRecord, amount: u64) {
    log!(
        256,
        "event=unlock_lp_event seed={} lock_id={} unlock_amount={} end_time={} dex_name={}",
        seed_str(record),
        record.lock_id,
        amount,
        record.end_time,
        record.dex_name()
    );
}

pub fn unlock_vesting(record: &LockRecord, amount: u64, entry: &Beneficiary) {
    log!(
        256,
        "event=unlock_vesting seed={} lock_id={} unlock_amount={} claimed={} allocation={} remaining={} remaining_lock={}",
        seed_str(record),
        record.lock_id,
        amount,
        entry.claimed,
        entry.amount,
        entry.remaining(),
        record.lock_amount
    );
}

pub fn extend_lock_time(record: &LockRecord, previous_end_time: u64) {
    log!(
        256,
        "event=extend_lock_time_event seed={} lock_id={} previous_end_time={} end_time={}",
        seed_str(record),
        record.lock_id,
        previous_end_time,
        record.end_time
    );
}
