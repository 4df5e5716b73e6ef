use gemlock::LockError;
use pinocchio::error::ProgramError;

/// Maps lock failures onto `ProgramError::Custom(code)`.
pub(crate) trait IntoProgramError {
    fn into_program_error(self) -> ProgramError;
}

impl IntoProgramError for LockError {
    #[inline]
    fn into_program_error(self) -> ProgramError {
        ProgramError::Custom(self.code())
    }
}
