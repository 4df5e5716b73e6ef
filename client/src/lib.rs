//! Off-chain helpers for the gemlock program: address derivation,
//! instruction builders and lock account decoding.

mod account;

pub use account::LockAccount;

use gemlock::{lock_seeds, LockError};
use gemlock_instruction::LockInstruction;
use solana_address::Address;
use solana_instruction::{AccountMeta, Instruction};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("account data is {0} bytes, shorter than a lock record")]
    TooShort(usize),
    #[error("lock record has unknown kind {0}")]
    UnknownKind(u8),
    #[error("account data ends before beneficiary {0}")]
    TruncatedBeneficiaries(u16),
    #[error("address {0:?} is not a beneficiary of this lock")]
    NotBeneficiary(Address),
    #[error("instruction failed to encode")]
    Encode,
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Lock record address and bump for `seed` / `mint` / `authority`.
pub fn find_lock_address(
    program_id: &Address,
    seed: &str,
    mint: &Address,
    authority: &Address,
) -> (Address, u8) {
    Address::find_program_address(&lock_seeds(seed.as_bytes(), mint, authority), program_id)
}

/// Associated token account of `wallet` for `mint` (classic SPL Token).
pub fn find_vault_address(wallet: &Address, mint: &Address) -> Address {
    Address::find_program_address(
        &[wallet.as_ref(), pinocchio_token::ID.as_ref(), mint.as_ref()],
        &pinocchio_associated_token_account::ID,
    )
    .0
}

/// Serialize any lock instruction.
pub fn instruction_data(ix: &LockInstruction) -> Result<Vec<u8>, ClientError> {
    wincode::serialize(ix).map_err(|_| ClientError::Encode)
}

/// Serialize an ExtendLockTime instruction.
pub fn extend_lock_time_instruction_data(new_end_time: u64) -> Result<Vec<u8>, ClientError> {
    instruction_data(&LockInstruction::ExtendLockTime { new_end_time })
}

/// Serialize an UnlockToken instruction.
pub fn unlock_token_instruction_data(seed: &str) -> Result<Vec<u8>, ClientError> {
    instruction_data(&LockInstruction::UnlockToken {
        seed: seed.to_string(),
    })
}

/// Serialize an UnlockLp instruction.
pub fn unlock_lp_instruction_data(seed: &str) -> Result<Vec<u8>, ClientError> {
    instruction_data(&LockInstruction::UnlockLp {
        seed: seed.to_string(),
    })
}

/// Serialize an UnlockVesting instruction.
pub fn unlock_vesting_instruction_data(seed: &str) -> Result<Vec<u8>, ClientError> {
    instruction_data(&LockInstruction::UnlockVesting {
        seed: seed.to_string(),
    })
}

fn token_program_metas() -> [AccountMeta; 3] {
    [
        AccountMeta::new_readonly(solana_system_interface::program::ID, false),
        AccountMeta::new_readonly(pinocchio_token::ID, false),
        AccountMeta::new_readonly(pinocchio_associated_token_account::ID, false),
    ]
}

/// Inputs of a token lock. `authority` signs and pays; `owner` controls the lock.
#[derive(Clone, Debug)]
pub struct LockTokenParams {
    pub authority: Address,
    pub owner: Address,
    pub mint: Address,
    pub metadata: Address,
    pub seed: String,
    pub amount: u64,
    pub end_time: u64,
    pub lock_name: String,
    pub extra_data: String,
}

/// Inputs of a manual LP lock through `LockToken` with `is_nft` set.
///
/// The whole source balance of `position_mint` is locked; the lock address is
/// seeded by `project_token_mint`.
#[derive(Clone, Debug)]
pub struct LockPositionParams {
    pub authority: Address,
    pub owner: Address,
    pub position_mint: Address,
    pub metadata: Address,
    pub seed: String,
    pub end_time: u64,
    pub lock_name: String,
    pub extra_data: String,
    pub project_token_mint: Address,
    pub wsol_mint: Address,
}

#[derive(Clone, Debug)]
pub struct LockLpParams {
    pub authority: Address,
    pub mint: Address,
    pub position_mint: Address,
    pub metadata: Address,
    pub seed: String,
    pub amount: u64,
    pub end_time: u64,
    pub lock_name: String,
    pub extra_data: String,
    pub dex_name: String,
    pub token_mint_a: Address,
    pub token_mint_b: Address,
}

/// Inputs of a vesting lock. Percentages are in `0.0..=100.0`,
/// `vesting_period` in days.
#[derive(Clone, Debug)]
pub struct LockVestingParams {
    pub authority: Address,
    pub mint: Address,
    pub metadata: Address,
    pub seed: String,
    pub end_time: u64,
    pub lock_name: String,
    pub extra_data: String,
    pub first_release: f64,
    pub vesting_period: u64,
    pub amount_per_vesting: f64,
    pub beneficiaries: Vec<(Address, u64)>,
}

pub fn lock_token(program_id: &Address, params: &LockTokenParams) -> Result<Instruction, ClientError> {
    let (lock, bump) = find_lock_address(program_id, &params.seed, &params.mint, &params.owner);
    let data = instruction_data(&LockInstruction::LockToken {
        seed: params.seed.clone(),
        bump,
        amount: params.amount,
        end_time: params.end_time,
        lock_name: params.lock_name.clone(),
        extra_data: params.extra_data.clone(),
        is_nft: false,
        project_token_mint: [0; 32],
        wsol_mint: [0; 32],
    })?;
    Ok(lock_token_instruction(
        program_id,
        &params.authority,
        &params.owner,
        &lock,
        &params.mint,
        &params.metadata,
        data,
    ))
}

pub fn lock_position(
    program_id: &Address,
    params: &LockPositionParams,
) -> Result<Instruction, ClientError> {
    let (lock, bump) = find_lock_address(
        program_id,
        &params.seed,
        &params.project_token_mint,
        &params.owner,
    );
    let data = instruction_data(&LockInstruction::LockToken {
        seed: params.seed.clone(),
        bump,
        amount: 0,
        end_time: params.end_time,
        lock_name: params.lock_name.clone(),
        extra_data: params.extra_data.clone(),
        is_nft: true,
        project_token_mint: params.project_token_mint.to_bytes(),
        wsol_mint: params.wsol_mint.to_bytes(),
    })?;
    Ok(lock_token_instruction(
        program_id,
        &params.authority,
        &params.owner,
        &lock,
        &params.position_mint,
        &params.metadata,
        data,
    ))
}

fn lock_token_instruction(
    program_id: &Address,
    authority: &Address,
    owner: &Address,
    lock: &Address,
    custody_mint: &Address,
    metadata: &Address,
    data: Vec<u8>,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(*owner, false),
        AccountMeta::new(*lock, false),
        AccountMeta::new_readonly(*custody_mint, false),
        AccountMeta::new_readonly(*metadata, false),
        AccountMeta::new(find_vault_address(lock, custody_mint), false),
        AccountMeta::new(find_vault_address(authority, custody_mint), false),
    ];
    accounts.extend(token_program_metas());
    Instruction::new_with_bytes(*program_id, &data, accounts)
}

pub fn lock_lp(program_id: &Address, params: &LockLpParams) -> Result<Instruction, ClientError> {
    let (lock, bump) =
        find_lock_address(program_id, &params.seed, &params.mint, &params.authority);
    let data = instruction_data(&LockInstruction::LockLp {
        seed: params.seed.clone(),
        bump,
        amount: params.amount,
        end_time: params.end_time,
        lock_name: params.lock_name.clone(),
        extra_data: params.extra_data.clone(),
        dex_name: params.dex_name.clone(),
        token_mint_a: params.token_mint_a.to_bytes(),
        token_mint_b: params.token_mint_b.to_bytes(),
    })?;
    let mut accounts = vec![
        AccountMeta::new(params.authority, true),
        AccountMeta::new(lock, false),
        AccountMeta::new_readonly(params.mint, false),
        AccountMeta::new_readonly(params.position_mint, false),
        AccountMeta::new_readonly(params.metadata, false),
        AccountMeta::new(find_vault_address(&lock, &params.position_mint), false),
        AccountMeta::new(find_vault_address(&params.authority, &params.position_mint), false),
    ];
    accounts.extend(token_program_metas());
    Ok(Instruction::new_with_bytes(*program_id, &data, accounts))
}

pub fn lock_vesting(
    program_id: &Address,
    params: &LockVestingParams,
) -> Result<Instruction, ClientError> {
    let (lock, bump) =
        find_lock_address(program_id, &params.seed, &params.mint, &params.authority);
    let (users, amounts) = params
        .beneficiaries
        .iter()
        .map(|(address, amount)| (address.to_bytes(), *amount))
        .unzip();
    let data = instruction_data(&LockInstruction::LockVesting {
        seed: params.seed.clone(),
        bump,
        end_time: params.end_time,
        lock_name: params.lock_name.clone(),
        extra_data: params.extra_data.clone(),
        first_release: params.first_release,
        vesting_period: params.vesting_period,
        amount_per_vesting: params.amount_per_vesting,
        users,
        amounts,
    })?;
    let mut accounts = vec![
        AccountMeta::new(params.authority, true),
        AccountMeta::new(lock, false),
        AccountMeta::new_readonly(params.mint, false),
        AccountMeta::new_readonly(params.metadata, false),
        AccountMeta::new(find_vault_address(&lock, &params.mint), false),
        AccountMeta::new(find_vault_address(&params.authority, &params.mint), false),
    ];
    accounts.extend(token_program_metas());
    Ok(Instruction::new_with_bytes(*program_id, &data, accounts))
}

/// Extend the lock at `lock`. Only the record authority may sign.
pub fn extend_lock_time(
    program_id: &Address,
    authority: &Address,
    lock: &Address,
    new_end_time: u64,
) -> Result<Instruction, ClientError> {
    Ok(Instruction::new_with_bytes(
        *program_id,
        &extend_lock_time_instruction_data(new_end_time)?,
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(*lock, false),
        ],
    ))
}

pub fn unlock_token(
    program_id: &Address,
    authority: &Address,
    mint: &Address,
    seed: &str,
) -> Result<Instruction, ClientError> {
    let (lock, _) = find_lock_address(program_id, seed, mint, authority);
    let mut accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new(lock, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(find_vault_address(&lock, mint), false),
        AccountMeta::new(find_vault_address(authority, mint), false),
    ];
    accounts.extend(token_program_metas());
    Ok(Instruction::new_with_bytes(
        *program_id,
        &unlock_token_instruction_data(seed)?,
        accounts,
    ))
}

/// Unlock an LP lock. `mint` is the record mint (the project token for
/// position locks), `position_mint` the custody mint.
pub fn unlock_lp(
    program_id: &Address,
    authority: &Address,
    mint: &Address,
    position_mint: &Address,
    seed: &str,
) -> Result<Instruction, ClientError> {
    let (lock, _) = find_lock_address(program_id, seed, mint, authority);
    let mut accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new(lock, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new_readonly(*position_mint, false),
        AccountMeta::new(find_vault_address(&lock, position_mint), false),
        AccountMeta::new(find_vault_address(authority, position_mint), false),
    ];
    accounts.extend(token_program_metas());
    Ok(Instruction::new_with_bytes(
        *program_id,
        &unlock_lp_instruction_data(seed)?,
        accounts,
    ))
}

/// Claim for `beneficiary` from the vesting lock created by `authority`.
pub fn unlock_vesting(
    program_id: &Address,
    beneficiary: &Address,
    authority: &Address,
    mint: &Address,
    seed: &str,
) -> Result<Instruction, ClientError> {
    let (lock, _) = find_lock_address(program_id, seed, mint, authority);
    let mut accounts = vec![
        AccountMeta::new(*beneficiary, true),
        AccountMeta::new(lock, false),
        AccountMeta::new_readonly(*mint, false),
        AccountMeta::new(find_vault_address(&lock, mint), false),
        AccountMeta::new(find_vault_address(beneficiary, mint), false),
    ];
    accounts.extend(token_program_metas());
    Ok(Instruction::new_with_bytes(
        *program_id,
        &unlock_vesting_instruction_data(seed)?,
        accounts,
    ))
}
