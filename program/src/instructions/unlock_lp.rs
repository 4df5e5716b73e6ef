use super::{check_seed, now, read_lock, record_seeds, unlock_token::check_unlock};
use crate::{error::IntoProgramError, events, pda::verify_record_address, token};
use gemlock::{LockError, LockKind, LockRecord};
use pinocchio::{cpi::Signer, error::ProgramError, AccountView, Address, ProgramResult};

/// Return an LP lock's position tokens to the authority.
///
/// Accounts: `[authority (signer), lock, mint, position_mint, vault,
/// destination, system_program, token_program, associated_token_program]`.
///
/// `mint` is the record mint that seeds the lock address; the vault and
/// `destination` hold `position_mint` tokens.
pub fn process(program_id: &Address, accounts: &[AccountView], seed: &str) -> ProgramResult {
    let [authority, lock, mint, position_mint, vault, destination, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let record = read_lock(program_id, lock, LockKind::Lp)?;
    check_seed(&record, seed)?;
    verify_record_address(program_id, lock, &record)?;

    check_unlock(&record, authority.address(), now()?)?;
    if mint.address() != &record.mint || position_mint.address() != record.custody_mint() {
        return Err(LockError::SplMintError.into_program_error());
    }

    let decimals = token::mint_decimals(position_mint)?;
    token::check_vault(vault, lock.address(), record.custody_mint())?;
    token::create_associated_account(
        authority,
        destination,
        authority,
        position_mint,
        system_program,
        token_program,
    )?;

    let amount = record.lock_amount;
    let bump = [record.bump];
    let seeds = record_seeds(&record, &bump);
    let signer = Signer::from(&seeds[..]);
    token::transfer(
        vault,
        position_mint,
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

    events::unlock_lp(stored, amount);
    Ok(())
}
