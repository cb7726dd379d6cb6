use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use super::LedgerResult;
use crate::error::PdaPayersError;

/// An account as the runtime stores it: lamports, owning program and raw data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: Vec<u8>,
}

impl LedgerAccount {
    /// A data-less account owned by the system program.
    pub fn system(lamports: u64) -> Self {
        Self {
            lamports,
            owner: system_program::ID,
            data: Vec::new(),
        }
    }

    /// The runtime drops accounts with no lamports and no data.
    pub fn is_empty(&self) -> bool {
        self.lamports == 0 && self.data.is_empty()
    }

    pub fn decode<T: AccountDeserialize>(&self) -> LedgerResult<T> {
        T::try_deserialize(&mut self.data.as_slice()).map_err(|_| PdaPayersError::InvalidAccountData)
    }
}

pub(crate) fn encode<T: AccountSerialize>(record: &T) -> LedgerResult<Vec<u8>> {
    let mut data = Vec::new();
    record
        .try_serialize(&mut data)
        .map_err(|_| PdaPayersError::InvalidAccountData)?;
    Ok(data)
}

/// Look up an account that must exist and belong to `program_id`.
pub(crate) fn program_account<'a>(
    accounts: &'a BTreeMap<Pubkey, LedgerAccount>,
    program_id: &Pubkey,
    address: &Pubkey,
) -> LedgerResult<&'a LedgerAccount> {
    let account = accounts
        .get(address)
        .filter(|account| !account.is_empty())
        .ok_or(PdaPayersError::AccountNotFound)?;

    if account.owner != *program_id {
        return Err(PdaPayersError::InvalidAccountData);
    }

    Ok(account)
}
