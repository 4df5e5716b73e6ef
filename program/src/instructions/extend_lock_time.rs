use crate::{error::IntoProgramError, events, pda::verify_record_address};
use gemlock::{LockError, LockRecord};
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

/// Push a lock's `end_time` later.
///
/// Accounts: `[authority (signer), lock]`.
///
/// Works on every lock kind. `authority` must be the record authority and
/// `new_end_time` must not be earlier than the current `end_time`.
pub fn process(program_id: &Address, accounts: &[AccountView], new_end_time: u64) -> ProgramResult {
    let [authority, lock] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }

    if !lock.owned_by(program_id) {
        return Err(ProgramError::IncorrectProgramId);
    }

    let mut data = lock.try_borrow_mut()?;
    let (record, _) = LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;
    if record.kind().is_none() {
        return Err(ProgramError::InvalidAccountData);
    }
    verify_record_address(program_id, lock, record)?;

    if record.authority != *authority.address() {
        return Err(LockError::AuthorizationErr.into_program_error());
    }
    if new_end_time < record.end_time {
        return Err(LockError::NotBiggerThanEndTime.into_program_error());
    }

    let previous_end_time = record.end_time;
    record.end_time = new_end_time;

    events::extend_lock_time(record, previous_end_time);
    Ok(())
}
