use crate::instructions::{
    extend_lock_time, lock_lp, lock_token, lock_vesting, unlock_lp, unlock_token, unlock_vesting,
};
use gemlock_instruction::LockInstruction;
use pinocchio::{error::ProgramError, AccountView, Address, ProgramResult};

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    data: &[u8],
) -> ProgramResult {
    let ix: LockInstruction =
        wincode::deserialize(data).map_err(|_| ProgramError::InvalidInstructionData)?;

    if !ix.validate() {
        return Err(ProgramError::InvalidInstructionData);
    }

    match ix {
        LockInstruction::LockToken {
            seed,
            bump,
            amount,
            end_time,
            lock_name,
            extra_data,
            is_nft,
            project_token_mint,
            wsol_mint,
        } => lock_token::process(
            program_id,
            accounts,
            lock_token::LockTokenArgs {
                seed: &seed,
                bump,
                amount,
                end_time,
                lock_name: &lock_name,
                extra_data: &extra_data,
                is_nft,
                project_token_mint: Address::new_from_array(project_token_mint),
                wsol_mint: Address::new_from_array(wsol_mint),
            },
        ),
        LockInstruction::UnlockToken { seed } => unlock_token::process(program_id, accounts, &seed),
        LockInstruction::LockLp {
            seed,
            bump,
            amount,
            end_time,
            lock_name,
            extra_data,
            dex_name,
            token_mint_a,
            token_mint_b,
        } => lock_lp::process(
            program_id,
            accounts,
            lock_lp::LockLpArgs {
                seed: &seed,
                bump,
                amount,
                end_time,
                lock_name: &lock_name,
                extra_data: &extra_data,
                dex_name: &dex_name,
                token_mint_a: Address::new_from_array(token_mint_a),
                token_mint_b: Address::new_from_array(token_mint_b),
            },
        ),
        LockInstruction::UnlockLp { seed } => unlock_lp::process(program_id, accounts, &seed),
        LockInstruction::LockVesting {
            seed,
            bump,
            end_time,
            lock_name,
            extra_data,
            first_release,
            vesting_period,
            amount_per_vesting,
            users,
            amounts,
        } => lock_vesting::process(
            program_id,
            accounts,
            lock_vesting::LockVestingArgs {
                seed: &seed,
                bump,
                end_time,
                lock_name: &lock_name,
                extra_data: &extra_data,
                first_release,
                vesting_period,
                amount_per_vesting,
                users,
                amounts,
            },
        ),
        LockInstruction::UnlockVesting { seed } => {
            unlock_vesting::process(program_id, accounts, &seed)
        }
        LockInstruction::ExtendLockTime { new_end_time } => {
            extend_lock_time::process(program_id, accounts, new_end_time)
        }
    }
}
