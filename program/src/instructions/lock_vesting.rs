extern crate alloc;

use super::{check_end_time, create_lock_account, now};
use crate::{error::IntoProgramError, events, token};
use alloc::vec::Vec;
use gemlock::{
    LockError, LockKind, LockRecord, VestingTerms, DEX_NAME_MANUAL, MAX_BENEFICIARIES,
};
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

pub struct LockVestingArgs<'a> {
    pub seed: &'a str,
    pub bump: u8,
    pub end_time: u64,
    pub lock_name: &'a str,
    pub extra_data: &'a str,
    pub first_release: f64,
    pub vesting_period: u64,
    pub amount_per_vesting: f64,
    pub users: Vec<[u8; 32]>,
    pub amounts: Vec<u64>,
}

/// Sum of allocations after checking the beneficiary list shape.
///
/// Lists must be the same length ([`LockError::BeneficiaryMismatch`]), hold
/// `1..=MAX_BENEFICIARIES` entries ([`LockError::TooManyBeneficiaries`]),
/// name each address once ([`LockError::DuplicateBeneficiary`]) and give
/// every beneficiary a non-zero amount ([`LockError::AmountZero`]).
pub fn total_allocation(users: &[[u8; 32]], amounts: &[u64]) -> Result<u64, LockError> {
    if users.len() != amounts.len() {
        return Err(LockError::BeneficiaryMismatch);
    }
    if users.is_empty() || users.len() > MAX_BENEFICIARIES {
        return Err(LockError::TooManyBeneficiaries);
    }
    for (i, user) in users.iter().enumerate() {
        if users[..i].contains(user) {
            return Err(LockError::DuplicateBeneficiary);
        }
    }
    amounts.iter().try_fold(0u64, |total, &amount| {
        if amount == 0 {
            return Err(LockError::AmountZero);
        }
        total.checked_add(amount).ok_or(LockError::MathOverflow)
    })
}

/// Lock tokens for a list of beneficiaries on a vesting schedule.
///
/// Accounts: `[authority (signer), lock, mint, metadata, vault, source,
/// system_program, token_program, associated_token_program]`.
///
/// The first tranche unlocks at `end_time`; `vesting_period` is in days.
pub fn process(
    program_id: &Address,
    accounts: &[AccountView],
    args: LockVestingArgs,
) -> ProgramResult {
    let [authority, lock, mint, metadata, vault, source, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let now = now()?;
    check_end_time(args.end_time, now)?;

    let total =
        total_allocation(&args.users, &args.amounts).map_err(IntoProgramError::into_program_error)?;
    VestingTerms::new(
        total,
        args.first_release,
        args.amount_per_vesting,
        args.vesting_period,
        args.end_time,
    )
    .map_err(IntoProgramError::into_program_error)?;

    let decimals = token::mint_decimals(mint)?;
    token::source_balance(source, mint.address(), authority.address(), total)?;

    create_lock_account(
        program_id,
        authority,
        lock,
        args.seed.as_bytes(),
        mint.address(),
        authority.address(),
        args.bump,
        LockRecord::account_size(args.users.len()),
    )?;

    token::create_associated_account(authority, vault, lock, mint, system_program, token_program)?;
    token::transfer(source, mint, vault, authority, total, decimals, &[])?;

    let mut data = lock.try_borrow_mut()?;
    {
        // beneficiary_count has to be set before the entries are addressable
        let (record, _) =
            LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;
        record.beneficiary_count = args.users.len() as u16;
    }
    let (record, entries) =
        LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;

    record.authority = *authority.address();
    record.mint = *mint.address();
    record.metadata = *metadata.address();
    record.lock_amount = total;
    record.start_time = now;
    record.end_time = args.end_time;
    record.first_release = args.first_release;
    record.amount_per_vesting = args.amount_per_vesting;
    record.vesting_period = args.vesting_period;
    record.lock_id = now as u32;
    record.kind = LockKind::Vesting as u8;
    record.bump = args.bump;

    if !(record.set_seed(args.seed.as_bytes())
        && record.set_lock_name(args.lock_name)
        && record.set_extra_data(args.extra_data)
        && record.set_dex_name(DEX_NAME_MANUAL))
    {
        return Err(ProgramError::InvalidInstructionData);
    }

    for ((entry, user), amount) in entries.iter_mut().zip(&args.users).zip(&args.amounts) {
        entry.address = Address::new_from_array(*user);
        entry.amount = *amount;
        entry.claimed = 0;
    }

    events::lock_vesting(record);
    Ok(())
}
