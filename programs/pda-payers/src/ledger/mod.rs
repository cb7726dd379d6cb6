// =============================================================================
// In-Memory Ledger
// =============================================================================
// A host-side stand-in for the runtime: accounts live in a map keyed by their
// derived address, and each of the four fee vault operations is executed as
// one copy-then-commit transition with the same checks as the on-chain
// instructions.
//
// Flow of every operation:
// 1. Clone the account map into a Transaction
// 2. Charge the transport fee to the submitting identity
// 3. Run the operation's checks and mutations against the copy
// 4. On success, replace the live map with the copy; on failure, drop it
// =============================================================================

mod account;
mod config;
mod transaction;

use std::collections::BTreeMap;

use anchor_lang::prelude::*;

pub use account::LedgerAccount;
pub use config::LedgerConfig;

use account::{encode, program_account};
use transaction::Transaction;

use crate::accounting;
use crate::constants::*;
use crate::error::PdaPayersError;
use crate::pda;
use crate::rent;
use crate::state::{Collaborator, CollaboratorRecord, FeeVault};

pub type LedgerResult<T> = std::result::Result<T, PdaPayersError>;

/// The vault and wallet addresses belonging to one authority.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeVaultAddresses {
    pub fee_vault: Pubkey,
    pub fee_vault_wallet: Pubkey,
}

pub struct Ledger {
    program_id: Pubkey,
    config: LedgerConfig,
    accounts: BTreeMap<Pubkey, LedgerAccount>,
}

impl Ledger {
    pub fn new(program_id: Pubkey, config: LedgerConfig) -> Self {
        Self {
            program_id,
            config,
            accounts: BTreeMap::new(),
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Fee charged to the submitter of one single-signature operation.
    pub fn transaction_fee(&self) -> u64 {
        self.config.lamports_per_signature
    }

    /// Credit a personal balance from outside the ledger.
    pub fn airdrop(&mut self, to: &Pubkey, lamports: u64) -> LedgerResult<()> {
        self.transact(None, "airdrop", |tx| tx.credit(to, lamports))
    }

    // =========================================================================
    // Reads
    // =========================================================================

    pub fn account(&self, address: &Pubkey) -> Option<&LedgerAccount> {
        self.accounts.get(address)
    }

    pub fn lamports(&self, address: &Pubkey) -> u64 {
        self.accounts.get(address).map_or(0, |account| account.lamports)
    }

    pub fn fee_vault_addresses(&self, authority: &Pubkey) -> LedgerResult<FeeVaultAddresses> {
        let fee_vault = pda::fee_vault_address(authority, &self.program_id)?.address;
        let fee_vault_wallet = pda::fee_vault_wallet_address(&fee_vault, &self.program_id)?.address;

        Ok(FeeVaultAddresses {
            fee_vault,
            fee_vault_wallet,
        })
    }

    pub fn fee_vault(&self, address: &Pubkey) -> LedgerResult<FeeVault> {
        program_account(&self.accounts, &self.program_id, address)?.decode()
    }

    /// Resolve the collaborator registered for `collaborator_base` under `fee_vault`.
    pub fn collaborator(
        &self,
        fee_vault: &Pubkey,
        collaborator_base: &Pubkey,
    ) -> LedgerResult<CollaboratorRecord> {
        let derived = pda::collaborator_address(fee_vault, collaborator_base, &self.program_id)?;
        let stored: Collaborator =
            program_account(&self.accounts, &self.program_id, &derived.address)?.decode()?;

        let address = pda::rederive(
            COLLABORATOR_SEED,
            &[fee_vault.as_ref(), collaborator_base.as_ref()],
            stored.bump,
            &self.program_id,
        )?;
        if address != derived.address {
            return Err(PdaPayersError::InvalidBump);
        }

        Ok(CollaboratorRecord {
            address,
            fee_vault: *fee_vault,
            collaborator_base: *collaborator_base,
            bump: stored.bump,
        })
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Create `authority`'s fee vault and move `amount` into its wallet.
    ///
    /// The authority pays the FeeVault record's rent plus `amount`. Lamports
    /// already sitting on the vault address count towards its rent. The
    /// wallet must end up empty or rent exempt.
    pub fn create_fee_vault(
        &mut self,
        authority: &Pubkey,
        amount: u64,
    ) -> LedgerResult<FeeVaultAddresses> {
        self.transact(Some(authority), "create_fee_vault", |tx| {
            let fee_vault = pda::fee_vault_address(authority, tx.program_id())?;
            let wallet = pda::fee_vault_wallet_address(&fee_vault.address, tx.program_id())?;

            let record = FeeVault {
                authority: *authority,
                bump: fee_vault.bump,
                wallet_bump: wallet.bump,
            };
            let vault_rent = rent::fee_vault_rent(tx.rent());
            tx.create_account(authority, 0, &fee_vault.address, vault_rent, encode(&record)?)?;

            tx.transfer(authority, &wallet.address, amount, 0)?;
            accounting::ensure_rent_exempt_or_empty(
                tx.lamports(&wallet.address),
                rent::wallet_floor(tx.rent()),
            )?;

            Ok(FeeVaultAddresses {
                fee_vault: fee_vault.address,
                fee_vault_wallet: wallet.address,
            })
        })
    }

    /// Move `amount` from the authority's personal balance into the wallet.
    pub fn deposit_in_fee_vault(
        &mut self,
        authority: &Pubkey,
        fee_vault: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        self.transact(Some(authority), "deposit_in_fee_vault", |tx| {
            let vault = tx.authorized_fee_vault(authority, fee_vault)?;
            let wallet = tx.fee_vault_wallet(fee_vault, &vault)?;

            tx.transfer(authority, &wallet, amount, 0)?;
            accounting::ensure_rent_exempt_or_empty(
                tx.lamports(&wallet),
                rent::wallet_floor(tx.rent()),
            )
        })
    }

    /// Move `amount` from the wallet back to the authority.
    ///
    /// The wallet must remain rent exempt afterwards.
    pub fn withdraw_from_fee_vault(
        &mut self,
        authority: &Pubkey,
        fee_vault: &Pubkey,
        amount: u64,
    ) -> LedgerResult<()> {
        self.transact(Some(authority), "withdraw_from_fee_vault", |tx| {
            let vault = tx.authorized_fee_vault(authority, fee_vault)?;
            let wallet = tx.fee_vault_wallet(fee_vault, &vault)?;
            let floor = rent::wallet_floor(tx.rent());

            tx.transfer(&wallet, authority, amount, floor)
        })
    }

    /// Register `collaborator_base` under `fee_vault`, paying its rent from the wallet.
    ///
    /// Stray lamports on the collaborator address reduce what the wallet pays.
    pub fn create_collaborator(
        &mut self,
        authority: &Pubkey,
        fee_vault: &Pubkey,
        collaborator_base: &Pubkey,
    ) -> LedgerResult<CollaboratorRecord> {
        self.transact(Some(authority), "create_collaborator", |tx| {
            let vault = tx.authorized_fee_vault(authority, fee_vault)?;
            let wallet = tx.fee_vault_wallet(fee_vault, &vault)?;
            let collaborator =
                pda::collaborator_address(fee_vault, collaborator_base, tx.program_id())?;

            let required = rent::collaborator_rent(tx.rent());
            let floor = rent::wallet_floor(tx.rent());
            let record = Collaborator {
                bump: collaborator.bump,
            };
            tx.create_account(&wallet, floor, &collaborator.address, required, encode(&record)?)?;

            Ok(CollaboratorRecord {
                address: collaborator.address,
                fee_vault: *fee_vault,
                collaborator_base: *collaborator_base,
                bump: collaborator.bump,
            })
        })
    }

    // =========================================================================
    // Commit
    // =========================================================================

    fn transact<T>(
        &mut self,
        signer: Option<&Pubkey>,
        operation: &str,
        f: impl FnOnce(&mut Transaction) -> LedgerResult<T>,
    ) -> LedgerResult<T> {
        let mut tx = Transaction::new(
            self.program_id,
            self.config.rent.clone(),
            self.accounts.clone(),
        );

        let result = match signer {
            Some(payer) => tx
                .charge_fee(payer, self.config.lamports_per_signature)
                .and_then(|_| f(&mut tx)),
            None => f(&mut tx),
        };

        match result {
            Ok(value) => {
                self.accounts = tx.into_accounts();
                msg!("{} committed", operation);
                Ok(value)
            }
            Err(err) => {
                msg!("{} rejected: {}", operation, err);
                Err(err)
            }
        }
    }
}
