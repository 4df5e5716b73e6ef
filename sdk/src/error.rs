/// Program-specific failures, surfaced on-chain as `ProgramError::Custom(code)`.
///
/// Codes 0..=12 are stable and shared with clients that match on the
/// variant name; new variants are only ever appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u32)]
pub enum LockError {
    #[error("Lock amount is zero")]
    AmountZero = 0,
    #[error("Lock time is zero")]
    TimeZero = 1,
    #[error("Token is not valid")]
    NotValidToken = 2,
    #[error("Token is already locked")]
    AlreadyLocked = 3,
    #[error("Not reached to unlock time")]
    NotUnlockTime = 4,
    #[error("Token is already unlocked")]
    AlreadyUnlocked = 5,
    #[error("Token address is wrong")]
    SplMintError = 6,
    #[error("Token authorization is not valid")]
    AuthorizationErr = 7,
    #[error("Lock time is less than now")]
    BeforeNow = 8,
    #[error("Low Balance")]
    LowBalance = 9,
    #[error("Not Per Vesting Unlock Time")]
    NotPerVestingUnlockTime = 10,
    #[error("AlreadyDidFirstClaim")]
    AlreadyDidFirstClaim = 11,
    #[error("Not Bigger Than End Time")]
    NotBiggerThanEndTime = 12,
    #[error("Beneficiary and amount lists differ in length")]
    BeneficiaryMismatch = 13,
    #[error("Beneficiary list is empty or too long")]
    TooManyBeneficiaries = 14,
    #[error("Beneficiary listed twice")]
    DuplicateBeneficiary = 15,
    #[error("Vesting percentages or period are invalid")]
    InvalidVestingTerms = 16,
    #[error("Arithmetic overflow")]
    MathOverflow = 17,
}

impl LockError {
    const ALL: [LockError; 18] = [
        LockError::AmountZero,
        LockError::TimeZero,
        LockError::NotValidToken,
        LockError::AlreadyLocked,
        LockError::NotUnlockTime,
        LockError::AlreadyUnlocked,
        LockError::SplMintError,
        LockError::AuthorizationErr,
        LockError::BeforeNow,
        LockError::LowBalance,
        LockError::NotPerVestingUnlockTime,
        LockError::AlreadyDidFirstClaim,
        LockError::NotBiggerThanEndTime,
        LockError::BeneficiaryMismatch,
        LockError::TooManyBeneficiaries,
        LockError::DuplicateBeneficiary,
        LockError::InvalidVestingTerms,
        LockError::MathOverflow,
    ];

    #[inline]
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Variant name as clients see it in error strings.
    pub const fn name(self) -> &'static str {
        match self {
            LockError::AmountZero => "AmountZero",
            LockError::TimeZero => "TimeZero",
            LockError::NotValidToken => "NotValidToken",
            LockError::AlreadyLocked => "AlreadyLocked",
            LockError::NotUnlockTime => "NotUnlockTime",
            LockError::AlreadyUnlocked => "AlreadyUnlocked",
            LockError::SplMintError => "SplMintError",
            LockError::AuthorizationErr => "AuthorizationErr",
            LockError::BeforeNow => "BeforeNow",
            LockError::LowBalance => "LowBalance",
            LockError::NotPerVestingUnlockTime => "NotPerVestingUnlockTime",
            LockError::AlreadyDidFirstClaim => "AlreadyDidFirstClaim",
            LockError::NotBiggerThanEndTime => "NotBiggerThanEndTime",
            LockError::BeneficiaryMismatch => "BeneficiaryMismatch",
            LockError::TooManyBeneficiaries => "TooManyBeneficiaries",
            LockError::DuplicateBeneficiary => "DuplicateBeneficiary",
            LockError::InvalidVestingTerms => "InvalidVestingTerms",
            LockError::MathOverflow => "MathOverflow",
        }
    }
}
