#![allow(dead_code)]

use bytemuck::{bytes_of, Zeroable};
use gemlock::{Beneficiary, LockKind, LockRecord};
use gemlock_client::find_lock_address;
use pinocchio::Address;
use solana_sdk::account::Account;
use spl_token::solana_program::{program_option::COption, program_pack::Pack, pubkey::Pubkey};
use spl_token::state::{Account as TokenAccount, AccountState, Mint};
use std::sync::RwLock;

/// Tests that change the global log level take this for writing; everyone
/// else holds a read guard while running.
pub static LOG_LOCK: RwLock<()> = RwLock::new(());

pub const PROGRAM_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../target/deploy/gemlock_program"
);

pub const PROGRAM_ID: Address = Address::new_from_array([
    0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, 0x10,
    0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, 0x20,
]);

/// January 1, 2025 00:00:00 UTC
pub const NOW: i64 = 1_735_689_600;
pub const ONE_DAY: u64 = 86_400;
pub const DECIMALS: u8 = 6;

/// Run `f` with logging at `level`, restoring the previous level afterwards.
pub fn with_log_level<R>(level: log::LevelFilter, f: impl FnOnce() -> R) -> R {
    let _guard = LOG_LOCK.write().unwrap();
    let previous = log::max_level();
    log::set_max_level(level);
    let result = f();
    log::set_max_level(previous);
    result
}

pub fn create_funded_account(lamports: u64) -> Account {
    Account {
        lamports,
        data: vec![],
        owner: Address::default(),
        executable: false,
        rent_epoch: 0,
    }
}

/// Stand-in for a program account in single-instruction tests that fail
/// before any CPI.
pub fn program_placeholder() -> Account {
    Account {
        lamports: 1,
        data: vec![],
        owner: Address::default(),
        executable: true,
        rent_epoch: 0,
    }
}

fn spl_pubkey(address: &Address) -> Pubkey {
    Pubkey::new_from_array(address.to_bytes())
}

/// Packed SPL Token mint with no freeze authority.
pub fn mint_data(authority: &Address, supply: u64, decimals: u8) -> Vec<u8> {
    let mint = Mint {
        mint_authority: COption::Some(spl_pubkey(authority)),
        supply,
        decimals,
        is_initialized: true,
        freeze_authority: COption::None,
    };
    let mut data = vec![0u8; Mint::LEN];
    Mint::pack(mint, &mut data).unwrap();
    data
}

/// Packed SPL Token account with no delegate.
pub fn token_account_data(
    mint: &Address,
    owner: &Address,
    amount: u64,
    state: AccountState,
) -> Vec<u8> {
    let account = TokenAccount {
        mint: spl_pubkey(mint),
        owner: spl_pubkey(owner),
        amount,
        delegate: COption::None,
        state,
        is_native: COption::None,
        delegated_amount: 0,
        close_authority: COption::None,
    };
    let mut data = vec![0u8; TokenAccount::LEN];
    TokenAccount::pack(account, &mut data).unwrap();
    data
}

fn token_owned(data: Vec<u8>) -> Account {
    Account {
        lamports: 10_000_000,
        data,
        owner: pinocchio_token::ID,
        executable: false,
        rent_epoch: 0,
    }
}

pub fn mint_account(authority: &Address) -> Account {
    token_owned(mint_data(authority, 1_000_000_000_000, DECIMALS))
}

/// A mint account whose data was allocated but never initialized.
pub fn uninitialized_mint_account() -> Account {
    token_owned(vec![0u8; Mint::LEN])
}

pub fn token_account(mint: &Address, owner: &Address, amount: u64) -> Account {
    token_owned(token_account_data(mint, owner, amount, AccountState::Initialized))
}

pub fn frozen_token_account(mint: &Address, owner: &Address, amount: u64) -> Account {
    token_owned(token_account_data(mint, owner, amount, AccountState::Frozen))
}

/// Token amount held by a packed token account.
pub fn token_amount(data: &[u8]) -> u64 {
    TokenAccount::unpack(data).unwrap().amount
}

pub fn ata(wallet: &Address, mint: &Address) -> Address {
    gemlock_client::find_vault_address(wallet, mint)
}

/// A stored lock record at its real PDA, as the program would have written it.
pub struct StoredLock<'a> {
    pub seed: &'a str,
    pub kind: LockKind,
    pub authority: Address,
    pub mint: Address,
    pub lock_amount: u64,
    pub end_time: u64,
    pub beneficiaries: &'a [(Address, u64)],
}

pub fn lock_record(stored: &StoredLock) -> (Address, Account) {
    let (lock, bump) = find_lock_address(&PROGRAM_ID, stored.seed, &stored.mint, &stored.authority);

    let mut record = LockRecord::zeroed();
    record.authority = stored.authority;
    record.mint = stored.mint;
    record.lock_amount = stored.lock_amount;
    record.start_time = NOW as u64;
    record.end_time = stored.end_time;
    record.kind = stored.kind as u8;
    record.bump = bump;
    record.beneficiary_count = stored.beneficiaries.len() as u16;
    assert!(record.set_seed(stored.seed.as_bytes()));
    if stored.kind == LockKind::Vesting {
        record.first_release = 20.0;
        record.amount_per_vesting = 10.0;
        record.vesting_period = 7;
    }

    let mut data = bytes_of(&record).to_vec();
    for (address, amount) in stored.beneficiaries {
        let entry = Beneficiary {
            address: *address,
            amount: *amount,
            claimed: 0,
        };
        data.extend_from_slice(bytes_of(&entry));
    }

    (
        lock,
        Account {
            lamports: 10_000_000,
            data,
            owner: PROGRAM_ID,
            executable: false,
            rent_epoch: 0,
        },
    )
}

pub fn read_record(data: &[u8]) -> LockRecord {
    bytemuck::pod_read_unaligned(&data[..LockRecord::SIZE])
}
