// =============================================================================
// FeeVault State Account
// =============================================================================
// One FeeVault per authority. It records who may move the escrow funds and
// the bumps needed to re-derive itself and its wallet without a search.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::*;

/// Escrow record controlling a FeeVaultWallet.
///
/// This account is a PDA derived from ["fee_vault", authority_pubkey].
/// The paired wallet is a PDA derived from ["fee_vault_wallet", fee_vault_pubkey].
///
/// Account size calculation:
/// - discriminator: 8 bytes
/// - authority: 32 bytes
/// - bump: 1 byte
/// - wallet_bump: 1 byte
/// Total: 42 bytes
#[account]
#[derive(InitSpace)]
pub struct FeeVault {
    /// The only identity allowed to deposit, withdraw or register collaborators.
    /// Immutable after creation.
    pub authority: Pubkey,

    /// Bump seed for this FeeVault PDA
    pub bump: u8,

    /// Bump seed for the FeeVaultWallet PDA (the wallet signs transfers out)
    pub wallet_bump: u8,
}

impl FeeVault {
    pub const SIZE: usize = DISCRIMINATOR_LEN + FeeVault::INIT_SPACE;

    pub fn is_authority(&self, signer: &Pubkey) -> bool {
        self.authority == *signer
    }
}
