// =============================================================================
// Instructions Module
// =============================================================================
// The four state transitions of the fee vault program. Each one is a single
// transaction: it either commits in full or leaves no trace.
// =============================================================================

// Vault operations
pub mod create_fee_vault;
pub mod deposit_in_fee_vault;
pub mod withdraw_from_fee_vault;

// Sponsored account creation
pub mod create_collaborator;

// The #[derive(Accounts)] macro generates helper types that need to be at crate root
pub use create_collaborator::*;
pub use create_fee_vault::*;
pub use deposit_in_fee_vault::*;
pub use withdraw_from_fee_vault::*;
