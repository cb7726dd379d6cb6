// =============================================================================
// PDA Payers - Sponsored Account Creation
// =============================================================================
//
// An authority pre-funds an escrow (the fee vault wallet) and that escrow,
// not the authority's own balance, pays the rent of the collaborator accounts
// registered under it.
//
// - create_fee_vault: allocate the vault record and fund its wallet
// - deposit_in_fee_vault / withdraw_from_fee_vault: move lamports in and out
// - create_collaborator: allocate a collaborator, rent paid by the wallet
//
// Every account is found by derivation (see `pda`); every instruction is one
// all-or-nothing transition.
// =============================================================================

pub mod accounting;
pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod rent;
pub mod state;

// Host-side runtime simulation, not part of the deployed program
#[cfg(not(target_os = "solana"))]
pub mod ledger;

use anchor_lang::prelude::*;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("B7pJLjbKUJhgdDmadvDSjjRpdFV59mg3uJTohoW3hxe2");

/// The PDA Payers program module
#[program]
pub mod pda_payers {
    use super::*;

    // =========================================================================
    // Fee Vault
    // =========================================================================

    /// Create the signer's fee vault and move `amount` lamports into its wallet
    ///
    /// Creates:
    /// - FeeVault account (rent paid by the authority)
    /// - FeeVaultWallet, implicitly, by funding its address
    ///
    /// Can only be called once per authority
    pub fn create_fee_vault(ctx: Context<CreateFeeVault>, amount: u64) -> Result<()> {
        instructions::create_fee_vault::handler_create_fee_vault(ctx, amount)
    }

    /// Top up the fee vault wallet from the authority's balance
    pub fn deposit_in_fee_vault(ctx: Context<DepositInFeeVault>, amount: u64) -> Result<()> {
        instructions::deposit_in_fee_vault::handler_deposit_in_fee_vault(ctx, amount)
    }

    /// Return lamports from the fee vault wallet to the authority
    ///
    /// The wallet must stay rent exempt after the withdrawal.
    pub fn withdraw_from_fee_vault(ctx: Context<WithdrawFromFeeVault>, amount: u64) -> Result<()> {
        instructions::withdraw_from_fee_vault::handler_withdraw_from_fee_vault(ctx, amount)
    }

    // =========================================================================
    // Collaborators
    // =========================================================================

    /// Register a collaborator for `collaborator_base`
    ///
    /// The collaborator's rent is paid out of the fee vault wallet; the
    /// authority only pays the transaction fee.
    pub fn create_collaborator(ctx: Context<CreateCollaborator>) -> Result<()> {
        instructions::create_collaborator::handler_create_collaborator(ctx)
    }
}
