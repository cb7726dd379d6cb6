// =============================================================================
// Withdraw From Fee Vault Instruction
// =============================================================================
// Returns lamports from the vault wallet to the authority.
//
// The wallet is a PDA with no private key, so the transfer is signed with
// its seeds: ["fee_vault_wallet", fee_vault_pubkey, wallet_bump].
// =============================================================================

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::accounting;
use crate::constants::*;
use crate::error::PdaPayersError;
use crate::events::FeeVaultWithdrawn;
use crate::rent;
use crate::state::FeeVault;

/// Accounts required for the withdraw_from_fee_vault instruction
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct WithdrawFromFeeVault<'info> {
    /// Must be the vault's recorded authority; receives the lamports
    #[account(mut)]
    pub authority: Signer<'info>,

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

/// Handler for the withdraw_from_fee_vault instruction
///
/// # Arguments
/// * `ctx` - The instruction context with all accounts
/// * `amount` - Lamports to take out of the wallet
pub fn handler_withdraw_from_fee_vault(
    ctx: Context<WithdrawFromFeeVault>,
    amount: u64,
) -> Result<()> {
    let rent = Rent::get()?;

    // The wallet must stay rent exempt after the withdrawal
    let wallet_balance = accounting::debit(
        ctx.accounts.fee_vault_wallet.lamports(),
        amount,
        rent::wallet_floor(&rent),
    )?;

    let fee_vault_key = ctx.accounts.fee_vault.key();
    let wallet_seeds = &[
        FEE_VAULT_WALLET_SEED,
        fee_vault_key.as_ref(),
        &[ctx.accounts.fee_vault.wallet_bump],
    ];
    let signer_seeds = &[&wallet_seeds[..]];

    let transfer_ctx = CpiContext::new_with_signer(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.fee_vault_wallet.to_account_info(),
            to: ctx.accounts.authority.to_account_info(),
        },
        signer_seeds,
    );
    system_program::transfer(transfer_ctx, amount)?;

    msg!("Withdrew {} lamports, wallet balance {}", amount, wallet_balance);

    emit!(FeeVaultWithdrawn {
        authority: ctx.accounts.authority.key(),
        fee_vault: fee_vault_key,
        amount,
        wallet_balance,
    });

    Ok(())
}
