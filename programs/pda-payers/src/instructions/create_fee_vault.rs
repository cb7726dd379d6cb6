// =============================================================================
// Create Fee Vault Instruction
// =============================================================================
// Creates the authority's FeeVault record and funds its wallet.
//
// Flow:
// 1. Anchor allocates the FeeVault PDA (rent paid by the authority)
// 2. Authority, bump and wallet bump are recorded
// 3. `amount` lamports move authority -> wallet
//
// The wallet is never allocated: a system account springs into existence the
// moment lamports land on its address. Its resulting balance must be zero or
// rent exempt.
//
// `init` also accepts a vault address that already holds stray lamports with
// no data. It tops the balance up to the rent-exempt minimum, then allocates
// and assigns the account.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::accounting;
use crate::constants::*;
use crate::events::FeeVaultCreated;
use crate::rent;
use crate::state::FeeVault;

/// Accounts required for the create_fee_vault instruction
#[derive(Accounts)]
#[instruction(amount: u64)]
pub struct CreateFeeVault<'info> {
    /// The authority funding and controlling the new vault
    #[account(mut)]
    pub authority: Signer<'info>,

    /// The FeeVault to create
    ///
    /// `init` fails if the address already holds data or belongs to a
    /// program, so each authority gets exactly one vault.
    #[account(
        init,
        payer = authority,
        space = FeeVault::SIZE,
        seeds = [FEE_VAULT_SEED, authority.key().as_ref()],
        bump
    )]
    pub fee_vault: Account<'info, FeeVault>,

    /// The wallet holding the vault's lamports
    #[account(
        mut,
        seeds = [FEE_VAULT_WALLET_SEED, fee_vault.key().as_ref()],
        bump
    )]
    pub fee_vault_wallet: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for the create_fee_vault instruction
///
/// # Arguments
/// * `ctx` - The instruction context with all accounts
/// * `amount` - Lamports to move into the new wallet
pub fn handler_create_fee_vault(ctx: Context<CreateFeeVault>, amount: u64) -> Result<()> {
    // The vault's own rent has already been taken by `init`
    accounting::debit(ctx.accounts.authority.lamports(), amount, 0)?;
    let wallet_balance = accounting::credit(ctx.accounts.fee_vault_wallet.lamports(), amount)?;
    accounting::ensure_rent_exempt_or_empty(wallet_balance, rent::wallet_floor(&Rent::get()?))?;

    let fee_vault = &mut ctx.accounts.fee_vault;
    fee_vault.authority = ctx.accounts.authority.key();
    fee_vault.bump = ctx.bumps.fee_vault;
    fee_vault.wallet_bump = ctx.bumps.fee_vault_wallet;

    msg!("Creating fee vault for {}", fee_vault.authority);

    let transfer_ctx = CpiContext::new(
        ctx.accounts.system_program.to_account_info(),
        Transfer {
            from: ctx.accounts.authority.to_account_info(),
            to: ctx.accounts.fee_vault_wallet.to_account_info(),
        },
    );
    system_program::transfer(transfer_ctx, amount)?;

    msg!("Fee vault wallet funded with {} lamports, balance {}", amount, wallet_balance);

    emit!(FeeVaultCreated {
        authority: ctx.accounts.authority.key(),
        fee_vault: ctx.accounts.fee_vault.key(),
        fee_vault_wallet: ctx.accounts.fee_vault_wallet.key(),
        amount,
    });

    Ok(())
}
