use anchor_lang::prelude::*;

// Vault events
#[event]
pub struct FeeVaultCreated {
    pub authority: Pubkey,
    pub fee_vault: Pubkey,
    pub fee_vault_wallet: Pubkey,
    pub amount: u64,
}

#[event]
pub struct FeeVaultDeposited {
    pub authority: Pubkey,
    pub fee_vault: Pubkey,
    pub amount: u64,
    pub wallet_balance: u64,
}

#[event]
pub struct FeeVaultWithdrawn {
    pub authority: Pubkey,
    pub fee_vault: Pubkey,
    pub amount: u64,
    pub wallet_balance: u64,
}

// Collaborator events
#[event]
pub struct CollaboratorCreated {
    pub fee_vault: Pubkey,
    pub collaborator: Pubkey,
    pub collaborator_base: Pubkey,
    pub rent_paid: u64,
}
