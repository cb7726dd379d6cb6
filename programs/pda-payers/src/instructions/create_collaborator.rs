// =============================================================================
// Create Collaborator Instruction
// =============================================================================
// Registers a collaborator under a fee vault. The rent for the new account
// comes out of the FeeVaultWallet; the authority only pays the transaction fee.
//
// Anchor's `init` can only charge a signer, so the account is created by hand.
// An untouched address gets one `create_account` CPI signed by both the wallet
// seeds (the payer) and the collaborator seeds (the new account). An address
// that already holds stray lamports but no data is topped up from the wallet,
// then allocated and assigned, the same way `init` treats a pre-funded PDA.
// The record is written last.
// =============================================================================

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::accounting;
use crate::constants::*;
use crate::error::PdaPayersError;
use crate::events::CollaboratorCreated;
use crate::rent;
use crate::state::{Collaborator, FeeVault};

/// Accounts required for the create_collaborator instruction
#[derive(Accounts)]
pub struct CreateCollaborator<'info> {
    /// Must be the vault's recorded authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [FEE_VAULT_SEED, fee_vault.authority.as_ref()],
        bump = fee_vault.bump,
        has_one = authority @ PdaPayersError::Unauthorized
    )]
    pub fee_vault: Account<'info, FeeVault>,

    /// Pays the collaborator's rent
    #[account(
        mut,
        seeds = [FEE_VAULT_WALLET_SEED, fee_vault.key().as_ref()],
        bump = fee_vault.wallet_bump
    )]
    pub fee_vault_wallet: SystemAccount<'info>,

    /// CHECK: only used as a derivation key for the collaborator address
    pub collaborator_base: UncheckedAccount<'info>,

    /// CHECK: created in this instruction; address pinned by seeds
    #[account(
        mut,
        seeds = [COLLABORATOR_SEED, fee_vault.key().as_ref(), collaborator_base.key().as_ref()],
        bump
    )]
    pub collaborator: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

/// Handler for the create_collaborator instruction
pub fn handler_create_collaborator(ctx: Context<CreateCollaborator>) -> Result<()> {
    let collaborator_info = ctx.accounts.collaborator.to_account_info();

    // Never overwrite: data or a foreign owner means the address is taken
    require!(
        collaborator_info.data_is_empty() && collaborator_info.owner == &system_program::ID,
        PdaPayersError::AccountAlreadyExists
    );

    let rent = Rent::get()?;
    let required = rent::collaborator_rent(&rent);
    let prefunded = collaborator_info.lamports();
    let rent_paid = required.saturating_sub(prefunded);

    let wallet_balance = accounting::debit(
        ctx.accounts.fee_vault_wallet.lamports(),
        rent_paid,
        rent::wallet_floor(&rent),
    )?;

    msg!(
        "Creating collaborator {} for {} lamports from the fee vault",
        collaborator_info.key(),
        rent_paid
    );

    // =========================================================================
    // Allocate: wallet -> collaborator
    // =========================================================================

    let fee_vault_key = ctx.accounts.fee_vault.key();
    let collaborator_base_key = ctx.accounts.collaborator_base.key();
    let collaborator_bump = ctx.bumps.collaborator;

    let wallet_seeds = &[
        FEE_VAULT_WALLET_SEED,
        fee_vault_key.as_ref(),
        &[ctx.accounts.fee_vault.wallet_bump],
    ];
    let collaborator_seeds = &[
        COLLABORATOR_SEED,
        fee_vault_key.as_ref(),
        collaborator_base_key.as_ref(),
        &[collaborator_bump],
    ];
    let wallet_signer = &[&wallet_seeds[..]];
    let collaborator_signer = &[&collaborator_seeds[..]];
    let system = ctx.accounts.system_program.to_account_info();

    if prefunded == 0 {
        let signer_seeds = &[&wallet_seeds[..], &collaborator_seeds[..]];
        let create_ctx = CpiContext::new_with_signer(
            system,
            CreateAccount {
                from: ctx.accounts.fee_vault_wallet.to_account_info(),
                to: collaborator_info.clone(),
            },
            signer_seeds,
        );
        system_program::create_account(create_ctx, required, Collaborator::SIZE as u64, ctx.program_id)?;
    } else {
        msg!("Collaborator address pre-funded with {} lamports", prefunded);

        if rent_paid > 0 {
            let transfer_ctx = CpiContext::new_with_signer(
                system.clone(),
                Transfer {
                    from: ctx.accounts.fee_vault_wallet.to_account_info(),
                    to: collaborator_info.clone(),
                },
                wallet_signer,
            );
            system_program::transfer(transfer_ctx, rent_paid)?;
        }

        let allocate_ctx = CpiContext::new_with_signer(
            system.clone(),
            Allocate {
                account_to_allocate: collaborator_info.clone(),
            },
            collaborator_signer,
        );
        system_program::allocate(allocate_ctx, Collaborator::SIZE as u64)?;

        let assign_ctx = CpiContext::new_with_signer(
            system,
            Assign {
                account_to_assign: collaborator_info.clone(),
            },
            collaborator_signer,
        );
        system_program::assign(assign_ctx, ctx.program_id)?;
    }

    // =========================================================================
    // Write the record
    // =========================================================================

    let record = Collaborator {
        bump: collaborator_bump,
    };
    let mut data = collaborator_info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    record.try_serialize(&mut dst)?;

    msg!("Collaborator created, wallet balance {}", wallet_balance);

    emit!(CollaboratorCreated {
        fee_vault: fee_vault_key,
        collaborator: collaborator_info.key(),
        collaborator_base: collaborator_base_key,
        rent_paid,
    });

    Ok(())
}
