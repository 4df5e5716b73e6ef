#![no_std]
//! Shared types for the gemlock token lock program.
//!
//! A lock record is a program-owned account at `PDA([seed, mint, authority])`.
//! Its data is a fixed [`LockRecord`] header followed by
//! `beneficiary_count` [`Beneficiary`] entries (only vesting locks have any).
//! Everything here is `no_std` so the program, the client and tests share one
//! definition of the layout.

mod error;
pub mod vesting;

pub use error::LockError;
pub use vesting::VestingTerms;

use bytemuck::{Pod, Zeroable};
use solana_address::Address;

/// PDA seeds are capped at 32 bytes each by the runtime.
pub const MAX_SEED_LEN: usize = 32;
/// Capacity of `lock_name`, `extra_data` and `dex_name`.
pub const MAX_TEXT_LEN: usize = 100;
pub const MAX_BENEFICIARIES: usize = 100;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const BPS_DENOMINATOR: u64 = 10_000;

pub const DEX_NAME_MANUAL: &[u8] = b"manual";
pub const DEX_NAME_MANUAL_LP: &[u8] = b"manual lp";

/// What a lock record holds. Stored as the `kind` byte; `0` is never a valid record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum LockKind {
    Token = 1,
    Lp = 2,
    Vesting = 3,
}

impl LockKind {
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Token),
            2 => Some(Self::Lp),
            3 => Some(Self::Vesting),
            _ => None,
        }
    }
}

/// Seeds of a lock record address, bump excluded.
#[inline]
pub fn lock_seeds<'a>(seed: &'a [u8], mint: &'a Address, authority: &'a Address) -> [&'a [u8]; 3] {
    [seed, mint.as_ref(), authority.as_ref()]
}

/// Lock record header (600 bytes).
///
/// Field layout (byte offsets):
/// - `[0..32]`    authority
/// - `[32..64]`   mint (PDA seed mint; project token for LP locks)
/// - `[64..96]`   metadata
/// - `[96..128]`  token_mint_a
/// - `[128..160]` token_mint_b
/// - `[160..192]` position_mint (custody mint of LP locks, zeroed otherwise)
/// - `[192..256]` lock_amount, start_time, end_time, first_release,
///   amount_per_vesting, vesting_period, unlocked_amount, reserved
/// - `[256..268]` lock_id, beneficiary_count, kind, bump, text lengths
/// - `[268..600]` seed, lock_name, extra_data, dex_name
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
pub struct LockRecord {
    pub authority: Address,
    pub mint: Address,
    pub metadata: Address,
    pub token_mint_a: Address,
    pub token_mint_b: Address,
    pub position_mint: Address,
    pub lock_amount: u64,
    pub start_time: u64,
    pub end_time: u64,
    pub first_release: f64,
    pub amount_per_vesting: f64,
    /// Days between vesting tranches.
    pub vesting_period: u64,
    pub unlocked_amount: u64,
    pub _reserved: u64,
    pub lock_id: u32,
    pub beneficiary_count: u16,
    pub kind: u8,
    pub bump: u8,
    pub seed_len: u8,
    pub lock_name_len: u8,
    pub extra_data_len: u8,
    pub dex_name_len: u8,
    pub seed: [u8; MAX_SEED_LEN],
    pub lock_name: [u8; MAX_TEXT_LEN],
    pub extra_data: [u8; MAX_TEXT_LEN],
    pub dex_name: [u8; MAX_TEXT_LEN],
}

/// One vesting allocation. `claimed` only grows, up to `amount`.
#[derive(Clone, Copy, Pod, Zeroable, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Beneficiary {
    pub address: Address,
    pub amount: u64,
    pub claimed: u64,
}

const _: () = assert!(
    core::mem::size_of::<LockRecord>() == 600,
    "LockRecord must be 600 bytes"
);

const _: () = assert!(
    core::mem::size_of::<Beneficiary>() == 48,
    "Beneficiary must be 48 bytes"
);

impl Beneficiary {
    pub const SIZE: usize = core::mem::size_of::<Self>();

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.amount.saturating_sub(self.claimed)
    }
}

impl LockRecord {
    pub const SIZE: usize = core::mem::size_of::<Self>();

    /// Account size for a record carrying `beneficiaries` vesting entries.
    pub const fn account_size(beneficiaries: usize) -> usize {
        Self::SIZE + beneficiaries * Beneficiary::SIZE
    }

    #[inline]
    pub fn kind(&self) -> Option<LockKind> {
        LockKind::from_u8(self.kind)
    }

    pub fn seed(&self) -> &[u8] {
        text(&self.seed, self.seed_len)
    }

    pub fn lock_name(&self) -> &str {
        utf8(text(&self.lock_name, self.lock_name_len))
    }

    pub fn extra_data(&self) -> &str {
        utf8(text(&self.extra_data, self.extra_data_len))
    }

    pub fn dex_name(&self) -> &str {
        utf8(text(&self.dex_name, self.dex_name_len))
    }

    /// Returns `false` (leaving the record untouched) if `seed` exceeds [`MAX_SEED_LEN`].
    pub fn set_seed(&mut self, seed: &[u8]) -> bool {
        write_text(&mut self.seed, &mut self.seed_len, seed)
    }

    pub fn set_lock_name(&mut self, value: &str) -> bool {
        write_text(&mut self.lock_name, &mut self.lock_name_len, value.as_bytes())
    }

    pub fn set_extra_data(&mut self, value: &str) -> bool {
        write_text(&mut self.extra_data, &mut self.extra_data_len, value.as_bytes())
    }

    pub fn set_dex_name(&mut self, value: &[u8]) -> bool {
        write_text(&mut self.dex_name, &mut self.dex_name_len, value)
    }

    /// Mint whose tokens sit in the vault: the position mint for LP locks,
    /// the record mint otherwise.
    #[inline]
    pub fn custody_mint(&self) -> &Address {
        if self.kind() == Some(LockKind::Lp) {
            &self.position_mint
        } else {
            &self.mint
        }
    }

    /// Split raw account data into header and beneficiary entries.
    ///
    /// Returns `None` if the data is shorter than the header plus
    /// `beneficiary_count` entries, or is misaligned for the Pod casts.
    pub fn split(data: &[u8]) -> Option<(&LockRecord, &[Beneficiary])> {
        if data.len() < Self::SIZE {
            return None;
        }
        let (head, tail) = data.split_at(Self::SIZE);
        let record: &LockRecord = bytemuck::try_from_bytes(head).ok()?;
        let entries_len = record.beneficiary_count as usize * Beneficiary::SIZE;
        let entries = tail.get(..entries_len)?;
        let entries: &[Beneficiary] = bytemuck::try_cast_slice(entries).ok()?;
        Some((record, entries))
    }

    pub fn split_mut(data: &mut [u8]) -> Option<(&mut LockRecord, &mut [Beneficiary])> {
        if data.len() < Self::SIZE {
            return None;
        }
        let (head, tail) = data.split_at_mut(Self::SIZE);
        let record: &mut LockRecord = bytemuck::try_from_bytes_mut(head).ok()?;
        let entries_len = record.beneficiary_count as usize * Beneficiary::SIZE;
        let entries = tail.get_mut(..entries_len)?;
        let entries: &mut [Beneficiary] = bytemuck::try_cast_slice_mut(entries).ok()?;
        Some((record, entries))
    }
}

#[inline]
fn text<const N: usize>(buf: &[u8; N], len: u8) -> &[u8] {
    &buf[..(len as usize).min(N)]
}

fn utf8(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or_default()
}

fn write_text<const N: usize>(buf: &mut [u8; N], len: &mut u8, value: &[u8]) -> bool {
    if value.len() > N {
        return false;
    }
    buf.fill(0);
    buf[..value.len()].copy_from_slice(value);
    *len = value.len() as u8;
    true
}
