// =============================================================================
// State Module
// =============================================================================
// Program-owned account layouts. The FeeVaultWallet has no entry here: it is
// a plain system account whose lamports are the escrow balance.
// =============================================================================

pub mod collaborator;
pub mod fee_vault;

pub use collaborator::*;
pub use fee_vault::*;
