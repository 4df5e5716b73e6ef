use super::{check_end_time, create_lock_account, now, sorted_pair};
use crate::{error::IntoProgramError, events, token};
use gemlock::{LockError, LockKind, LockRecord, DEX_NAME_MANUAL, DEX_NAME_MANUAL_LP};
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

/// Arguments of a token lock, as decoded from the instruction.
pub struct LockTokenArgs<'a> {
    pub seed: &'a str,
    pub bump: u8,
    pub amount: u64,
    pub end_time: u64,
    pub lock_name: &'a str,
    pub extra_data: &'a str,
    pub is_nft: bool,
    pub project_token_mint: Address,
    pub wsol_mint: Address,
}

/// Lock tokens until `end_time` on behalf of `owner`.
///
/// Accounts: `[authority (signer), owner, lock, mint, metadata, vault, source,
/// system_program, token_program, associated_token_program]`.
///
/// `authority` pays rent and moves tokens out of `source`; the record
/// authority is `owner`, who alone may extend or unlock.
///
/// With `is_nft` the lock holds a manually created LP position: the whole
/// `source` balance of `mint` is locked, the record mint (and PDA seed mint)
/// is `project_token_mint`, `mint` is kept as `position_mint`, and the pool
/// pair is stored sorted. Such a lock is released with `UnlockLp`.
pub fn process(program_id: &Address, accounts: &[AccountView], args: LockTokenArgs) -> ProgramResult {
    let [authority, owner, lock, mint, metadata, vault, source, system_program, token_program, associated_token_program] =
        accounts
    else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !authority.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    token::check_programs(system_program, token_program, associated_token_program)?;

    let now = now()?;
    if !args.is_nft && args.amount == 0 {
        return Err(LockError::AmountZero.into_program_error());
    }
    check_end_time(args.end_time, now)?;

    let record_mint = if args.is_nft {
        args.project_token_mint
    } else {
        *mint.address()
    };

    let decimals = token::mint_decimals(mint)?;
    let amount = if args.is_nft {
        let balance = token::source_balance(source, mint.address(), authority.address(), 0)?;
        if balance == 0 {
            return Err(LockError::AmountZero.into_program_error());
        }
        balance
    } else {
        token::source_balance(source, mint.address(), authority.address(), args.amount)?;
        args.amount
    };

    create_lock_account(
        program_id,
        authority,
        lock,
        args.seed.as_bytes(),
        &record_mint,
        owner.address(),
        args.bump,
        LockRecord::SIZE,
    )?;

    token::create_associated_account(authority, vault, lock, mint, system_program, token_program)?;
    token::transfer(source, mint, vault, authority, amount, decimals, &[])?;

    let mut data = lock.try_borrow_mut()?;
    let (record, _) = LockRecord::split_mut(&mut data).ok_or(ProgramError::InvalidAccountData)?;

    record.authority = *owner.address();
    record.mint = record_mint;
    record.metadata = *metadata.address();
    record.lock_amount = amount;
    record.start_time = now;
    record.end_time = args.end_time;
    record.lock_id = now as u32;
    record.bump = args.bump;

    let text_ok = record.set_seed(args.seed.as_bytes())
        && record.set_lock_name(args.lock_name)
        && record.set_extra_data(args.extra_data);

    let dex_ok = if args.is_nft {
        let (a, b) = sorted_pair(args.project_token_mint, args.wsol_mint);
        record.kind = LockKind::Lp as u8;
        record.position_mint = *mint.address();
        record.token_mint_a = a;
        record.token_mint_b = b;
        record.set_dex_name(DEX_NAME_MANUAL_LP)
    } else {
        record.kind = LockKind::Token as u8;
        record.set_dex_name(DEX_NAME_MANUAL)
    };

    if !(text_ok && dex_ok) {
        return Err(ProgramError::InvalidInstructionData);
    }

    events::create_lock(record);
    Ok(())
}
