pub mod extend_lock_time;
pub mod lock_lp;
pub mod lock_token;
pub mod lock_vesting;
pub mod unlock_lp;
pub mod unlock_token;
pub mod unlock_vesting;

use crate::{error::IntoProgramError, pda::verify_lock_address};
use gemlock::{LockError, LockKind, LockRecord};
use pinocchio::{
    cpi::{Seed, Signer},
    error::ProgramError,
    sysvars::{clock::Clock, rent::Rent, Sysvar},
    AccountView, Address, ProgramResult,
};
use pinocchio_system::instructions::{Allocate, Assign, Transfer};

/// Current cluster time in unix seconds. Pre-epoch clocks read as 0.
pub(crate) fn now() -> Result<u64, ProgramError> {
    let clock = Clock::get()?;
    Ok(u64::try_from(clock.unix_timestamp).unwrap_or(0))
}

/// Creation-time checks on `end_time` shared by every lock instruction.
pub(crate) fn check_end_time(end_time: u64, now: u64) -> ProgramResult {
    if end_time == 0 {
        return Err(LockError::TimeZero.into_program_error());
    }
    if end_time <= now {
        return Err(LockError::BeforeNow.into_program_error());
    }
    Ok(())
}

/// Copy the header of an existing lock record out of `lock`.
///
/// The copy lets handlers drop the data borrow before invoking the token
/// program with the lock as signer.
pub(crate) fn read_lock(
    program_id: &Address,
    lock: &AccountView,
    expected: LockKind,
) -> Result<LockRecord, ProgramError> {
    if !lock.owned_by(program_id) {
        return Err(ProgramError::IncorrectProgramId);
    }
    let data = lock.try_borrow()?;
    let (record, _) = LockRecord::split(&data).ok_or(ProgramError::InvalidAccountData)?;
    if record.kind() != Some(expected) {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(*record)
}

/// The seed an unlock names must be the one the lock was created with.
pub(crate) fn check_seed(record: &LockRecord, seed: &str) -> ProgramResult {
    if record.seed() != seed.as_bytes() {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Allocate a fresh lock record at `PDA([seed, mint, authority, bump])`.
///
/// `payer` funds rent. An account already owned by the program is an
/// existing lock ([`LockError::AlreadyLocked`]).
#[allow(clippy::too_many_arguments)]
pub(crate) fn create_lock_account(
    program_id: &Address,
    payer: &AccountView,
    lock: &AccountView,
    seed: &[u8],
    mint: &Address,
    authority: &Address,
    bump: u8,
    space: usize,
) -> ProgramResult {
    verify_lock_address(program_id, lock, seed, mint, authority, bump)?;

    if lock.owned_by(program_id) {
        return Err(LockError::AlreadyLocked.into_program_error());
    }
    if !lock.owned_by(&pinocchio_system::ID) {
        return Err(ProgramError::IncorrectProgramId);
    }
    if lock.data_len() != 0 {
        return Err(ProgramError::InvalidAccountData);
    }

    let rent_exempt_lamports = Rent::get()?.try_minimum_balance(space)?;
    let current_lamports = lock.lamports();

    if current_lamports < rent_exempt_lamports {
        Transfer {
            from: payer,
            to: lock,
            lamports: rent_exempt_lamports - current_lamports,
        }
        .invoke()?;
    }

    let bump = [bump];
    let seeds = [
        Seed::from(seed),
        Seed::from(mint.as_ref()),
        Seed::from(authority.as_ref()),
        Seed::from(&bump[..]),
    ];
    let signer = Signer::from(&seeds[..]);

    Allocate {
        account: lock,
        space: space as u64,
    }
    .invoke_signed(core::slice::from_ref(&signer))?;

    Assign {
        account: lock,
        owner: program_id,
    }
    .invoke_signed(core::slice::from_ref(&signer))?;

    Ok(())
}

/// Signer seeds of a stored record. `bump` must outlive the returned seeds.
pub(crate) fn record_seeds<'a>(record: &'a LockRecord, bump: &'a [u8; 1]) -> [Seed<'a>; 4] {
    [
        Seed::from(record.seed()),
        Seed::from(record.mint.as_ref()),
        Seed::from(record.authority.as_ref()),
        Seed::from(&bump[..]),
    ]
}

/// Sorted pool mints as stored in `token_mint_a` / `token_mint_b`.
pub(crate) fn sorted_pair(x: Address, y: Address) -> (Address, Address) {
    if x.as_ref() > y.as_ref() {
        (y, x)
    } else {
        (x, y)
    }
}
