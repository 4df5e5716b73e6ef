use super::{check_seed, now, read_lock, record_seeds};
use crate::{error::IntoProgramError, events, pda::verify_record_address, token};
use gemlock::{LockError, LockKind, LockRecord};
use pinocchio::{cpi::Signer, error::ProgramError, AccountView, Address, ProgramResult};

/// Checks shared by token and LP unlocks, in the order clients see them:
/// the lock must have expired, still hold tokens and belong to `authority`.
pub(crate) fn check_unlock(record: &LockRecord, authority: &Address, now: u64) -> ProgramResult {
    if now < record.end_time {
        return Err(LockError::NotUnlockTime.into_program_error());
    }
    if record.lock_amount == 0 {
        return Err(LockError::AlreadyUnlocked.into_program_error());
    }
    if record.authority != *authority {
        return Err(LockError::AuthorizationErr.into_program_error());
    }
    Ok(())
}

/// Return every locked token to the authority once `end_time` has passed.
///
/// Accounts: `[authority (signer), lock, mint, vault, destination,
/// system_program, token_program, associated_token_program]`.
///
/// `destination` is the authority's associated token account and is created
/// if missing.
pub fn process(program_id: &Address, accounts: &[AccountView], seed: &str) -> ProgramResult {
    let [authority, lock, mint, vault, destination, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let record = read_lock(program_id, lock, LockKind::Token)?;
    check_seed(&record, seed)?;
    verify_record_address(program_id, lock, &record)?;

    check_unlock(&record, authority.address(), now()?)?;
    if mint.address() != &record.mint {
        return Err(LockError::SplMintError.into_program_error());
    }

    let decimals = token::mint_decimals(mint)?;
    token::check_vault(vault, lock.address(), record.custody_mint())?;
    token::create_associated_account(authority, destination, authority, mint, system_program, token_program)?;

    let amount = record.lock_amount;
    let bump = [record.bump];
    let seeds = record_seeds(&record, &bump);
    let signer = Signer::from(&seeds[..]);
    token::transfer(
        vault,
        mint,
        destination,
        lock,
        amount,
        decimals,
        core::slice::from_ref(&signer),
    )?;

    let mut data = lock.try_borrow_mut()?;
    let (stored, _) = LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;
    stored.lock_amount = 0;
    stored.unlocked_amount = stored
        .unlocked_amount
        .checked_add(amount)
        .ok_or(LockError::MathOverflow.into_program_error())?;

    events::unlock(stored, amount);
    Ok(())
}
