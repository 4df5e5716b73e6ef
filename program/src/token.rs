use crate::error::IntoProgramError;
use gemlock::LockError;
use pinocchio::{cpi::Signer, error::ProgramError, AccountView, Address, ProgramResult};
use pinocchio_associated_token_account::instructions::CreateIdempotent;
use pinocchio_token::{
    instructions::TransferChecked,
    state::{Mint, TokenAccount},
};

/// Fields of a token account the handlers compare against the lock record.
#[derive(Clone, Copy)]
pub struct TokenBalance {
    pub mint: Address,
    pub owner: Address,
    pub amount: u64,
}

/// Check the system, token and associated token program accounts.
pub fn check_programs(
    system_program: &AccountView,
    token_program: &AccountView,
    associated_token_program: &AccountView,
) -> ProgramResult {
    if system_program.address() != &pinocchio_system::ID
        || token_program.address() != &pinocchio_token::ID
        || associated_token_program.address() != &pinocchio_associated_token_account::ID
    {
        return Err(ProgramError::IncorrectProgramId);
    }
    Ok(())
}

/// Decimals of an initialized SPL Token mint. Anything else is
/// [`LockError::NotValidToken`].
pub fn mint_decimals(mint: &AccountView) -> Result<u8, ProgramError> {
    if !mint.owned_by(&pinocchio_token::ID) {
        return Err(LockError::NotValidToken.into_program_error());
    }
    let state = Mint::from_account_view(mint)
        .map_err(|_| LockError::NotValidToken.into_program_error())?;
    if !state.is_initialized() {
        return Err(LockError::NotValidToken.into_program_error());
    }
    Ok(state.decimals())
}

/// Read an initialized, unfrozen token account.
pub fn token_balance(account: &AccountView) -> Result<TokenBalance, ProgramError> {
    if !account.owned_by(&pinocchio_token::ID) {
        return Err(ProgramError::InvalidAccountData);
    }
    let state =
        TokenAccount::from_account_view(account).map_err(|_| ProgramError::InvalidAccountData)?;
    if !state.is_initialized() || state.is_frozen() {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(TokenBalance {
        mint: *state.mint(),
        owner: *state.owner(),
        amount: state.amount(),
    })
}

/// Validate the depositor's token account and return its balance.
///
/// Wrong mint is [`LockError::SplMintError`], wrong owner
/// [`LockError::AuthorizationErr`], and a balance under `required`
/// [`LockError::LowBalance`].
pub fn source_balance(
    source: &AccountView,
    mint: &Address,
    owner: &Address,
    required: u64,
) -> Result<u64, ProgramError> {
    let balance = token_balance(source)?;
    if balance.mint != *mint {
        return Err(LockError::SplMintError.into_program_error());
    }
    if balance.owner != *owner {
        return Err(LockError::AuthorizationErr.into_program_error());
    }
    if balance.amount < required {
        return Err(LockError::LowBalance.into_program_error());
    }
    Ok(balance.amount)
}

/// A vault must hold `mint` tokens on behalf of `lock`.
pub fn check_vault(vault: &AccountView, lock: &Address, mint: &Address) -> Result<u64, ProgramError> {
    let balance = token_balance(vault)?;
    if balance.mint != *mint || balance.owner != *lock {
        return Err(ProgramError::InvalidAccountData);
    }
    Ok(balance.amount)
}

/// Create `wallet`'s associated token account for `mint` unless it already exists.
///
/// The associated token program rejects an `account` that is not the
/// derived address, so a successful call also authenticates it.
pub fn create_associated_account(
    payer: &AccountView,
    account: &AccountView,
    wallet: &AccountView,
    mint: &AccountView,
    system_program: &AccountView,
    token_program: &AccountView,
) -> ProgramResult {
    CreateIdempotent {
        funding_account: payer,
        account,
        wallet,
        mint,
        system_program,
        token_program,
    }
    .invoke()
}

/// `transfer_checked` from `from` to `to`. Zero amounts are skipped.
pub fn transfer(
    from: &AccountView,
    mint: &AccountView,
    to: &AccountView,
    authority: &AccountView,
    amount: u64,
    decimals: u8,
    signers: &[Signer],
) -> ProgramResult {
    if amount == 0 {
        return Ok(());
    }
    TransferChecked {
        from,
        mint,
        to,
        authority,
        amount,
        decimals,
    }
    .invoke_signed(signers)
}
