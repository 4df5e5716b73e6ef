use crate::ClientError;
use gemlock::{Beneficiary, LockKind, LockRecord, VestingTerms};
use solana_address::Address;

/// Owned copy of a lock record and its beneficiaries.
///
/// RPC account data carries no alignment guarantee, so fields are read with
/// unaligned copies instead of the Pod casts the program uses.
#[derive(Clone)]
pub struct LockAccount {
    pub record: LockRecord,
    pub beneficiaries: Vec<Beneficiary>,
}

impl LockAccount {
    pub fn decode(data: &[u8]) -> Result<Self, ClientError> {
        let head = data
            .get(..LockRecord::SIZE)
            .ok_or(ClientError::TooShort(data.len()))?;
        let record: LockRecord = bytemuck::pod_read_unaligned(head);
        if record.kind().is_none() {
            return Err(ClientError::UnknownKind(record.kind));
        }

        let beneficiaries = (0..record.beneficiary_count)
            .map(|i| {
                let start = LockRecord::SIZE + i as usize * Beneficiary::SIZE;
                data.get(start..start + Beneficiary::SIZE)
                    .map(bytemuck::pod_read_unaligned::<Beneficiary>)
                    .ok_or(ClientError::TruncatedBeneficiaries(i))
            })
            .collect::<Result<Vec<Beneficiary>, _>>()?;

        Ok(Self {
            record,
            beneficiaries,
        })
    }

    pub fn kind(&self) -> LockKind {
        // decode rejects unknown kinds
        self.record.kind().unwrap_or(LockKind::Token)
    }

    pub fn beneficiary(&self, address: &Address) -> Option<&Beneficiary> {
        self.beneficiaries.iter().find(|b| b.address == *address)
    }

    /// What `address` could claim from a vesting lock at `now`.
    pub fn claimable(&self, address: &Address, now: u64) -> Result<u64, ClientError> {
        let entry = self
            .beneficiary(address)
            .ok_or(ClientError::NotBeneficiary(*address))?;
        let terms = VestingTerms::for_allocation(&self.record, entry.amount)?;
        Ok(terms.claimable(entry.claimed, now))
    }
}
