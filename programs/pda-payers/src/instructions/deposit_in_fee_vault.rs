// =============================================================================
// Deposit In Fee Vault Instruction
// =============================================================================
// Moves lamports from the authority's personal balance into the vault wallet.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::accounting;
use crate::constants::*;
use crate::error::PdaPayersError;
use crate::events::FeeVaultDeposited;
use crate::rent;
use crate::state::FeeVault;

/// Accounts required for the deposit_in_fee_vault instruction
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct DepositInFeeVault<'info> {
    /// Must be the vault's recorded authority
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The vault being topped up
    ///
    /// Seeds are taken from the stored authority so that a foreign signer is
    /// rejected as Unauthorized rather than as a seeds mismatch.
    #[account(
        seeds = [FEE_VAULT_SEED, fee_vault.authority.as_ref()],
        bump = fee_vault.bump,
        has_one = authority @ PdaPayersError::Unauthorized
    )]
    pub fee_vault: Account<'info, FeeVault>,

    #[account(
        mut,
        seeds = [FEE_VAULT_WALLET_SEED, fee_vault.key().as_ref()],
        bump = fee_vault.wallet_bump
    )]
    pub fee_vault_wallet: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for the deposit_in_fee_vault instruction
///
/// # Arguments
/// * `ctx` - The instruction context with all accounts
/// * `amount` - Lamports to add to the wallet
pub fn handler_deposit_in_fee_vault(ctx: Context<DepositInFeeVault>, amount: u64) -> Result<()> {
    accounting::debit(ctx.accounts.authority.lamports(), amount, 0)?;
    let wallet_balance = accounting::credit(ctx.accounts.fee_vault_wallet.lamports(), amount)?;
    accounting::ensure_rent_exempt_or_empty(wallet_balance, rent::wallet_floor(&Rent::get()?))?;

    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.authority.to_account_info(),
            to: ctx.accounts.fee_vault_wallet.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    msg!("Deposited {} lamports, wallet balance {}", amount, wallet_balance);

    emit!(FeeVaultDeposited {
        authority: ctx.accounts.authority.key(),
        fee_vault: ctx.accounts.fee_vault.key(),
        amount,
        wallet_balance,
    });

    Ok(())
}
