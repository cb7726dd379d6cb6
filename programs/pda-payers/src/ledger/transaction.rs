use std::collections::BTreeMap;

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use super::account::{program_account, LedgerAccount};
use super::LedgerResult;
use crate::accounting;
use crate::constants::*;
use crate::error::PdaPayersError;
use crate::pda;
use crate::state::FeeVault;

/// A private working copy of the ledger's accounts.
///
/// Every check and mutation of one operation runs against this copy. The
/// ledger swaps it in only when the whole operation succeeded, so a
/// rejected operation cannot leave a partial effect.
pub(crate) struct Transaction {
    program_id: Pubkey,
    rent: Rent,
    accounts: BTreeMap<Pubkey, LedgerAccount>,
}

impl Transaction {
    pub(crate) fn new(
        program_id: Pubkey,
        rent: Rent,
        accounts: BTreeMap<Pubkey, LedgerAccount>,
    ) -> Self {
        Self {
            program_id,
            rent,
            accounts,
        }
    }

    pub(crate) fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    pub(crate) fn rent(&self) -> &Rent {
        &self.rent
    }

    pub(crate) fn into_accounts(self) -> BTreeMap<Pubkey, LedgerAccount> {
        self.accounts
    }

    pub(crate) fn lamports(&self, key: &Pubkey) -> u64 {
        self.accounts.get(key).map_or(0, |account| account.lamports)
    }

    /// An address is taken once it holds data or belongs to a program.
    /// Stray lamports on a system account do not count.
    pub(crate) fn is_allocated(&self, key: &Pubkey) -> bool {
        self.accounts
            .get(key)
            .is_some_and(|account| !account.data.is_empty() || account.owner != system_program::ID)
    }

    // =========================================================================
    // Lamport movement
    // =========================================================================

    /// Move `amount` from `from` to `to`; `from` must keep at least `floor`.
    pub(crate) fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        amount: u64,
        floor: u64,
    ) -> LedgerResult<()> {
        let from_balance = accounting::debit(self.lamports(from), amount, floor)?;
        self.set_lamports(from, from_balance);

        let to_balance = accounting::credit(self.lamports(to), amount)?;
        self.set_lamports(to, to_balance);

        Ok(())
    }

    /// Add lamports that arrive from outside the ledger.
    pub(crate) fn credit(&mut self, to: &Pubkey, amount: u64) -> LedgerResult<()> {
        let balance = accounting::credit(self.lamports(to), amount)?;
        self.set_lamports(to, balance);
        Ok(())
    }

    /// Charge the transport fee to the submitting identity.
    pub(crate) fn charge_fee(&mut self, payer: &Pubkey, fee: u64) -> LedgerResult<()> {
        let remaining = accounting::debit(self.lamports(payer), fee, 0)?;
        self.set_lamports(payer, remaining);
        Ok(())
    }

    fn set_lamports(&mut self, key: &Pubkey, lamports: u64) {
        let account = self
            .accounts
            .entry(*key)
            .or_insert_with(|| LedgerAccount::system(0));
        account.lamports = lamports;

        if account.is_empty() {
            self.accounts.remove(key);
        }
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Allocate a program-owned account at `address` holding at least
    /// `lamports`, with `payer` covering whatever is missing.
    ///
    /// Fails with AccountAlreadyExists before touching any balance if the
    /// address is already allocated. Lamports already sitting on the address
    /// count towards `lamports`. Returns what the payer was charged.
    pub(crate) fn create_account(
        &mut self,
        payer: &Pubkey,
        payer_floor: u64,
        address: &Pubkey,
        lamports: u64,
        data: Vec<u8>,
    ) -> LedgerResult<u64> {
        if self.is_allocated(address) {
            return Err(PdaPayersError::AccountAlreadyExists);
        }

        let charged = lamports.saturating_sub(self.lamports(address));
        self.transfer(payer, address, charged, payer_floor)?;

        let account = self
            .accounts
            .entry(*address)
            .or_insert_with(|| LedgerAccount::system(0));
        account.owner = self.program_id;
        account.data = data;

        Ok(charged)
    }

    // =========================================================================
    // Vault lookups
    // =========================================================================

    /// Load the vault at `address` and check `signer` may act on it.
    ///
    /// The stored authority and bump must re-derive `address`, mirroring the
    /// seeds constraint of the on-chain instructions.
    pub(crate) fn authorized_fee_vault(
        &self,
        signer: &Pubkey,
        address: &Pubkey,
    ) -> LedgerResult<FeeVault> {
        let fee_vault: FeeVault =
            program_account(&self.accounts, &self.program_id, address)?.decode()?;

        let expected = pda::rederive(
            FEE_VAULT_SEED,
            &[fee_vault.authority.as_ref()],
            fee_vault.bump,
            &self.program_id,
        )?;
        if expected != *address {
            return Err(PdaPayersError::InvalidAccountData);
        }

        if !fee_vault.is_authority(signer) {
            return Err(PdaPayersError::Unauthorized);
        }

        Ok(fee_vault)
    }

    /// Wallet address from the vault's stored wallet bump.
    pub(crate) fn fee_vault_wallet(
        &self,
        fee_vault_address: &Pubkey,
        fee_vault: &FeeVault,
    ) -> LedgerResult<Pubkey> {
        pda::rederive(
            FEE_VAULT_WALLET_SEED,
            &[fee_vault_address.as_ref()],
            fee_vault.wallet_bump,
            &self.program_id,
        )
    }
}
