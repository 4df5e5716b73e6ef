#![no_std]
//! Instruction types for the gemlock program.
//!
//! Serialized with `wincode`: a little-endian `u32` discriminant followed by the
//! variant fields. Discriminant tags are stable on-chain (see test
//! `discriminant_stability`).

extern crate alloc;

use alloc::{string::String, vec::Vec};
use gemlock::{MAX_SEED_LEN, MAX_TEXT_LEN};
use wincode::{SchemaRead, SchemaWrite};

/// Instruction enum for the lock program.
///
/// Every variant that creates a lock carries the lock PDA `bump` found by the
/// client; the program checks it with `create_program_address` rather than
/// searching for it.
///
/// # Variants
///
/// - `LockToken`: lock `amount` tokens of `mint` until `end_time` on behalf of
///   an owner. With `is_nft` the whole source balance of a position token is
///   locked and `project_token_mint`/`wsol_mint` name the pool.
/// - `UnlockToken`: return the full custody balance once `end_time` has passed.
/// - `LockLp`: lock `amount` position tokens for a named DEX pool.
/// - `UnlockLp`: return an LP lock's position tokens.
/// - `LockVesting`: lock the sum of `amounts` for a list of beneficiaries with a
///   first release percentage and per-period percentage (`vesting_period` in days).
/// - `UnlockVesting`: release the signer's currently vested, unclaimed tokens.
/// - `ExtendLockTime`: move the lock's `end_time` to `new_end_time`, never earlier.
#[derive(Debug, Clone, PartialEq, SchemaWrite, SchemaRead)]
pub enum LockInstruction {
    #[wincode(tag = 0)]
    LockToken {
        seed: String,
        bump: u8,
        amount: u64,
        end_time: u64,
        lock_name: String,
        extra_data: String,
        is_nft: bool,
        project_token_mint: [u8; 32],
        wsol_mint: [u8; 32],
    },
    #[wincode(tag = 1)]
    UnlockToken { seed: String },
    #[wincode(tag = 2)]
    LockLp {
        seed: String,
        bump: u8,
        amount: u64,
        end_time: u64,
        lock_name: String,
        extra_data: String,
        dex_name: String,
        token_mint_a: [u8; 32],
        token_mint_b: [u8; 32],
    },
    #[wincode(tag = 3)]
    UnlockLp { seed: String },
    #[wincode(tag = 4)]
    LockVesting {
        seed: String,
        bump: u8,
        end_time: u64,
        lock_name: String,
        extra_data: String,
        first_release: f64,
        vesting_period: u64,
        amount_per_vesting: f64,
        users: Vec<[u8; 32]>,
        amounts: Vec<u64>,
    },
    #[wincode(tag = 5)]
    UnlockVesting { seed: String },
    #[wincode(tag = 6)]
    ExtendLockTime { new_end_time: u64 },
}

impl LockInstruction {
    /// Returns `false` if a field cannot be stored in a lock record.
    ///
    /// - seeds must be 1..=`MAX_SEED_LEN` bytes (they are PDA seeds).
    /// - `lock_name`, `extra_data` and `dex_name` must fit `MAX_TEXT_LEN` bytes.
    ///
    /// Amounts, times, beneficiary lists and percentages are business rules
    /// checked by the handlers, which report them with `LockError` codes.
    pub fn validate(&self) -> bool {
        match self {
            LockInstruction::LockToken {
                seed,
                lock_name,
                extra_data,
                ..
            }
            | LockInstruction::LockVesting {
                seed,
                lock_name,
                extra_data,
                ..
            } => valid_seed(seed) && fits_text(lock_name) && fits_text(extra_data),
            LockInstruction::LockLp {
                seed,
                lock_name,
                extra_data,
                dex_name,
                ..
            } => {
                valid_seed(seed)
                    && fits_text(lock_name)
                    && fits_text(extra_data)
                    && fits_text(dex_name)
            }
            LockInstruction::UnlockToken { seed }
            | LockInstruction::UnlockLp { seed }
            | LockInstruction::UnlockVesting { seed } => valid_seed(seed),
            LockInstruction::ExtendLockTime { .. } => true,
        }
    }
}

#[inline]
fn valid_seed(seed: &str) -> bool {
    !seed.is_empty() && seed.len() <= MAX_SEED_LEN
}

#[inline]
fn fits_text(value: &str) -> bool {
    value.len() <= MAX_TEXT_LEN
}
