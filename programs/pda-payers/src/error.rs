// =============================================================================
// PDA Payers Error Codes
// =============================================================================
// Every rejection the program (or its ledger) can produce. A failed operation
// never leaves partial effects behind, so the error is the only thing the
// caller observes.
// =============================================================================

use anchor_lang::prelude::*;

/// Errors returned by the fee vault instructions.
///
/// Anchor assigns numeric codes starting from 6000 in declaration order.
#[error_code]
pub enum PdaPayersError {
    // =========================================================================
    // Authorization (6000)
    // =========================================================================

    /// Signer is not the authority recorded in the fee vault
    #[msg("Unauthorized - signer is not the fee vault authority")]
    Unauthorized,

    // =========================================================================
    // Account Lifecycle (6001-6002)
    // =========================================================================

    /// The referenced fee vault or collaborator does not exist
    #[msg("Account not found")]
    AccountNotFound,

    /// A fee vault or collaborator already lives at the derived address
    #[msg("Account already exists")]
    AccountAlreadyExists,

    // =========================================================================
    // Balances (6003)
    // =========================================================================

    /// The source balance cannot cover the debit, including any rent floor
    #[msg("Insufficient funds for operation")]
    InsufficientFunds,

    // =========================================================================
    // Derivation (6004-6005)
    // =========================================================================

    /// No bump in 0..=255 produced an off-curve address
    #[msg("Unable to find a valid program address")]
    AddressDerivationExhausted,

    /// The stored bump does not re-derive a valid program address
    #[msg("Invalid bump seed")]
    InvalidBump,

    // =========================================================================
    // Math & Data (6006-6007)
    // =========================================================================

    #[msg("Math overflow - calculation exceeded maximum value")]
    MathOverflow,

    /// Account data is not a record of the expected type
    #[msg("Invalid account data")]
    InvalidAccountData,
}
