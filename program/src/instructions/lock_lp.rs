use super::{check_end_time, create_lock_account, now};
use crate::{error::IntoProgramError, events, token};
use gemlock::{LockError, LockKind, LockRecord};
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

pub struct LockLpArgs<'a> {
    pub seed: &'a str,
    pub bump: u8,
    pub amount: u64,
    pub end_time: u64,
    pub lock_name: &'a str,
    pub extra_data: &'a str,
    pub dex_name: &'a str,
    pub token_mint_a: Address,
    pub token_mint_b: Address,
}

/// Lock liquidity position tokens of a DEX pool.
///
/// Accounts: `[authority (signer), lock, mint, position_mint, metadata, vault,
/// source, system_program, token_program, associated_token_program]`.
///
/// `mint` is the project token the lock is listed under and seeds the PDA;
/// the vault holds `position_mint` tokens.
pub fn process(program_id: &Address, accounts: &[AccountView], args: LockLpArgs) -> ProgramResult {
    let [authority, lock, mint, position_mint, metadata, vault, source, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let now = now()?;
    if args.amount == 0 {
        return Err(LockError::AmountZero.into_program_error());
    }
    check_end_time(args.end_time, now)?;

    token::mint_decimals(mint)?;
    let decimals = token::mint_decimals(position_mint)?;
    token::source_balance(source, position_mint.address(), authority.address(), args.amount)?;

    create_lock_account(
        program_id,
        authority,
        lock,
        args.seed.as_bytes(),
        mint.address(),
        authority.address(),
        args.bump,
        LockRecord::SIZE,
    )?;

    token::create_associated_account(authority, vault, lock, position_mint, system_program, token_program)?;
    token::transfer(source, position_mint, vault, authority, args.amount, decimals, &[])?;

    let mut data = lock.try_borrow_mut()?;
    let (record, _) = LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;

    record.authority = *authority.address();
    record.mint = *mint.address();
    record.metadata = *metadata.address();
    record.position_mint = *position_mint.address();
    record.token_mint_a = args.token_mint_a;
    record.token_mint_b = args.token_mint_b;
    record.lock_amount = args.amount;
    record.start_time = now;
    record.end_time = args.end_time;
    record.lock_id = now as u32;
    record.kind = LockKind::Lp as u8;
    record.bump = args.bump;

    if !(record.set_seed(args.seed.as_bytes())
        && record.set_lock_name(args.lock_name)
        && record.set_extra_data(args.extra_data)
        && record.set_dex_name(args.dex_name.as_bytes()))
    {
        return Err(ProgramError::InvalidInstructionData);
    }

    events::create_lock(record);
    Ok(())
}
