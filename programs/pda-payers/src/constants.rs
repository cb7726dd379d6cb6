// =============================================================================
// PDA Payers Constants
// =============================================================================
// Seeds, account sizes and the handful of numbers the fee vault program and
// its host-side ledger agree on. Keeping them here ensures the on-chain
// instructions and the simulation derive identical addresses.
// =============================================================================

// =============================================================================
// PDA SEEDS
// =============================================================================
// Every account this program touches is found by derivation, never by a
// stored pointer. Seeds are the domain tag followed by the key parts.
// =============================================================================

/// Seed for the FeeVault account PDA
/// Full seed: ["fee_vault", authority_pubkey]
pub const FEE_VAULT_SEED: &[u8] = b"fee_vault";

/// Seed for the FeeVaultWallet PDA (system-owned, holds the escrow lamports)
/// Full seed: ["fee_vault_wallet", fee_vault_pubkey]
pub const FEE_VAULT_WALLET_SEED: &[u8] = b"fee_vault_wallet";

/// Seed for Collaborator account PDAs
/// Full seed: ["collaborator", fee_vault_pubkey, collaborator_base_pubkey]
pub const COLLABORATOR_SEED: &[u8] = b"collaborator";

// =============================================================================
// ACCOUNT SIZES
// =============================================================================

/// Anchor account discriminator length
pub const DISCRIMINATOR_LEN: usize = 8;

/// The wallet carries no data, only lamports
pub const FEE_VAULT_WALLET_SIZE: usize = 0;

// =============================================================================
// TRANSPORT
// =============================================================================

/// Lamports charged per signature by the simulated runtime.
/// Matches the cluster default; only the ledger uses it.
pub const DEFAULT_LAMPORTS_PER_SIGNATURE: u64 = 5_000;
