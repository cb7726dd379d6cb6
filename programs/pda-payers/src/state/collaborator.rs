// =============================================================================
// Collaborator State Account
// =============================================================================
// A per-third-party record registered under a FeeVault. Its rent is paid by
// the FeeVaultWallet, never by the signer.
//
// The record stores only its bump. Which vault and which base identity it
// belongs to is bound by its address:
//   ["collaborator", fee_vault_pubkey, collaborator_base_pubkey]
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::*;

/// Account size calculation:
/// - discriminator: 8 bytes
/// - bump: 1 byte
/// Total: 9 bytes
#[account]
#[derive(InitSpace)]
pub struct Collaborator {
    /// Bump seed for this Collaborator PDA
    pub bump: u8,
}

impl Collaborator {
    pub const SIZE: usize = DISCRIMINATOR_LEN + Collaborator::INIT_SPACE;
}

/// A collaborator resolved from its derivation inputs.
///
/// `fee_vault` and `collaborator_base` are back-references for lookup; the
/// account itself holds only the bump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollaboratorRecord {
    pub address: Pubkey,
    pub fee_vault: Pubkey,
    pub collaborator_base: Pubkey,
    pub bump: u8,
}
