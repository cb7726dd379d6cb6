// =============================================================================
// Rent Exemption
// =============================================================================
// Minimum balances an account must hold to be exempt from rent collection.
// The cost table itself belongs to the runtime (the `Rent` sysvar on-chain,
// `LedgerConfig::rent` in the simulation); this module only asks it.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::FEE_VAULT_WALLET_SIZE;
use crate::state::{Collaborator, FeeVault};

/// Lamports required for an account of `size_in_bytes` to be rent exempt.
pub fn minimum_balance(rent: &Rent, size_in_bytes: u32) -> u64 {
    rent.minimum_balance(size_in_bytes as usize)
}

/// Floor the wallet balance may never be debited below.
pub fn wallet_floor(rent: &Rent) -> u64 {
    rent.minimum_balance(FEE_VAULT_WALLET_SIZE)
}

/// Rent the authority pays to allocate its FeeVault record.
pub fn fee_vault_rent(rent: &Rent) -> u64 {
    rent.minimum_balance(FeeVault::SIZE)
}

/// Rent the wallet pays for each collaborator it sponsors.
pub fn collaborator_rent(rent: &Rent) -> u64 {
    rent.minimum_balance(Collaborator::SIZE)
}
