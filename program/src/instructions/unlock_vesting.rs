use super::{check_seed, now, read_lock, record_seeds};
use crate::{error::IntoProgramError, events, pda::verify_record_address, token};
use gemlock::{Beneficiary, LockError, LockKind, LockRecord, VestingTerms};
use pinocchio::{cpi::Signer, error::ProgramError, AccountView, Address, ProgramResult};

/// Release the signer's vested, unclaimed share of a vesting lock.
///
/// Accounts: `[beneficiary (signer), lock, mint, vault, destination,
/// system_program, token_program, associated_token_program]`.
///
/// Each beneficiary tracks its own `claimed` amount, so claims by one never
/// change what another may take.
pub fn process(program_id: &Address, accounts: &[AccountView], seed: &str) -> ProgramResult {
    let [beneficiary, lock, mint, vault, destination, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !beneficiary.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let record = read_lock(program_id, lock, LockKind::Vesting)?;
    check_seed(&record, seed)?;
    verify_record_address(program_id, lock, &record)?;

    if mint.address() != &record.mint {
        return Err(LockError::SplMintError.into_program_error());
    }

    let (index, entry) = find_beneficiary(lock, beneficiary.address())?;
    let terms =
        VestingTerms::for_allocation(&record, entry.amount).map_err(IntoProgramError::into_program_error)?;
    let amount = terms
        .next_release(entry.claimed, now()?)
        .map_err(IntoProgramError::into_program_error)?;
    if amount > record.lock_amount {
        return Err(LockError::LowBalance.into_program_error());
    }

    let decimals = token::mint_decimals(mint)?;
    token::check_vault(vault, lock.address(), &record.mint)?;
    token::create_associated_account(
        beneficiary,
        destination,
        beneficiary,
        mint,
        system_program,
        token_program,
    )?;

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
    let (stored, entries) =
        LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;
    let entry = entries.get_mut(index).ok_or(ProgramError::InvalidAccountData)?;

    let overflow = || LockError::MathOverflow.into_program_error();
    entry.claimed = entry.claimed.checked_add(amount).ok_or_else(overflow)?;
    stored.lock_amount = stored.lock_amount.checked_sub(amount).ok_or_else(overflow)?;
    stored.unlocked_amount = stored.unlocked_amount.checked_add(amount).ok_or_else(overflow)?;

    events::unlock_vesting(stored, amount, entry);
    Ok(())
}

/// Position and copy of `address`'s entry. Unlisted signers are
/// [`LockError::AuthorizationErr`].
fn find_beneficiary(
    lock: &AccountView,
    address: &Address,
) -> Result<(usize, Beneficiary), ProgramError> {
    let data = lock.try_borrow()?;
    let (_, entries) = LockRecord::split(&data).ok_or(ProgramError::InvalidAccountData)?;
    entries
        .iter()
        .position(|entry| entry.address == *address)
        .map(|index| (index, entries[index]))
        .ok_or(LockError::AuthorizationErr.into_program_error())
}
