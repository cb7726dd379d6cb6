use anchor_lang::prelude::*;

use crate::constants::DEFAULT_LAMPORTS_PER_SIGNATURE;

/// Runtime parameters the ledger consults but does not own.
#[derive(Clone, Debug)]
pub struct LedgerConfig {
    /// Rent cost table used for every minimum-balance computation
    pub rent: Rent,

    /// Transport fee charged to the submitting identity per operation
    pub lamports_per_signature: u64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            rent: Rent::default(),
            lamports_per_signature: DEFAULT_LAMPORTS_PER_SIGNATURE,
        }
    }
}

impl LedgerConfig {
    pub fn with_rent(mut self, rent: Rent) -> Self {
        self.rent = rent;
        self
    }

    pub fn with_lamports_per_signature(mut self, lamports_per_signature: u64) -> Self {
        self.lamports_per_signature = lamports_per_signature;
        self
    }
}
