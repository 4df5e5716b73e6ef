use gemlock::{lock_seeds, LockRecord};
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

/// Compute a program-derived address from `seeds` and `program_id`.
///
/// Returns [`ProgramError::InvalidSeeds`] if the seeds do not produce a valid off-curve address.
///
/// Platform dispatch:
/// - On `target_os = "solana"` / `target_arch = "bpf"`: calls `Address::create_program_address`.
/// - In non-BPF tests: delegates to `solana_sdk::pubkey::Pubkey::create_program_address`.
/// - Non-BPF, non-test: panics (`unimplemented!`).
#[cfg(any(target_os = "solana", target_arch = "bpf"))]
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, ProgramError> {
    Address::create_program_address(seeds, program_id).map_err(|_| ProgramError::InvalidSeeds)
}

#[cfg(all(not(any(target_os = "solana", target_arch = "bpf")), test))]
pub fn create_program_address(
    seeds: &[&[u8]],
    program_id: &Address,
) -> Result<Address, ProgramError> {
    use solana_sdk::pubkey::Pubkey as SolanaPubkey;
    let program_pubkey = SolanaPubkey::new_from_array(program_id.to_bytes());
    SolanaPubkey::create_program_address(seeds, &program_pubkey)
        .map(|pk| Address::from(pk.to_bytes()))
        .map_err(|_| ProgramError::InvalidSeeds)
}

#[cfg(all(not(any(target_os = "solana", target_arch = "bpf")), not(test)))]
pub fn create_program_address(
    _seeds: &[&[u8]],
    _program_id: &Address,
) -> Result<Address, ProgramError> {
    unimplemented!("create_program_address only available on BPF or in tests")
}

/// Check that `lock` sits at `PDA([seed, mint, authority, bump])`.
pub fn verify_lock_address(
    program_id: &Address,
    lock: &AccountView,
    seed: &[u8],
    mint: &Address,
    authority: &Address,
    bump: u8,
) -> ProgramResult {
    let [s, m, a] = lock_seeds(seed, mint, authority);
    let bump = [bump];
    let expected = create_program_address(&[s, m, a, &bump], program_id)?;
    if lock.address() != &expected {
        return Err(ProgramError::InvalidSeeds);
    }
    Ok(())
}

/// Re-derive a stored record's address from its own seed, mint, authority and bump.
#[inline]
pub fn verify_record_address(
    program_id: &Address,
    lock: &AccountView,
    record: &LockRecord,
) -> ProgramResult {
    verify_lock_address(
        program_id,
        lock,
        record.seed(),
        &record.mint,
        &record.authority,
        record.bump,
    )
}
