//! Program tests for the fee vault instructions.
//!
//! Runs the compiled instruction handlers inside `solana-program-test`, so
//! Anchor's account constraints, the system program CPIs and the runtime's
//! rent rules all take part.

use anchor_lang::solana_program::account_info::AccountInfo;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::program_error::ProgramResult;
use anchor_lang::solana_program::pubkey::Pubkey;
use anchor_lang::solana_program::system_program;
use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::instruction::InstructionError;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

use pda_payers::state::{Collaborator, FeeVault};
use pda_payers::{pda, rent, PdaPayersError};

const LAMPORTS_PER_SOL: u64 = 1_000_000_000;
const FEE_VAULT_BALANCE: u64 = LAMPORTS_PER_SOL;

// ── Harness ────────────────────────────────────────────────────────────────

fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    data: &[u8],
) -> ProgramResult {
    // Anchor's entry ties the slice lifetime to the accounts it holds
    let accounts = Box::leak(accounts.to_vec().into_boxed_slice());
    pda_payers::entry(program_id, accounts, data)
}

fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "pda_payers",
        pda_payers::ID,
        processor!(process_instruction),
    );
    program_test.prefer_bpf(false);
    program_test
}

fn fund(program_test: &mut ProgramTest, address: &Pubkey, lamports: u64) {
    program_test.add_account(
        *address,
        Account {
            lamports,
            ..Account::default()
        },
    );
}

async fn start_with(authorities: &[&Keypair]) -> ProgramTestContext {
    let mut program_test = program_test();
    for authority in authorities {
        fund(&mut program_test, &authority.pubkey(), 10 * LAMPORTS_PER_SOL);
    }
    program_test.start_with_context().await
}

async fn send(
    context: &mut ProgramTestContext,
    instruction: Instruction,
    signer: &Keypair,
) -> Result<(), BanksClientError> {
    let blockhash = context.get_new_latest_blockhash().await.unwrap();
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&signer.pubkey()),
        &[signer],
        blockhash,
    );
    context.banks_client.process_transaction(transaction).await
}

fn program_error(result: Result<(), BanksClientError>) -> u32 {
    match result.unwrap_err().unwrap() {
        TransactionError::InstructionError(0, InstructionError::Custom(code)) => code,
        other => panic!("expected a program error, got {other:?}"),
    }
}

async fn balance(context: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    context.banks_client.get_balance(*address).await.unwrap()
}

async fn fee_vault_state(context: &mut ProgramTestContext, address: &Pubkey) -> FeeVault {
    let account = context
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .unwrap();
    FeeVault::try_deserialize(&mut account.data.as_slice()).unwrap()
}

// ── Instruction builders ───────────────────────────────────────────────────

fn fee_vault_of(authority: &Pubkey) -> Pubkey {
    pda::fee_vault_address(authority, &pda_payers::ID)
        .unwrap()
        .address
}

fn wallet_of(fee_vault: &Pubkey) -> Pubkey {
    pda::fee_vault_wallet_address(fee_vault, &pda_payers::ID)
        .unwrap()
        .address
}

fn collaborator_of(fee_vault: &Pubkey, collaborator_base: &Pubkey) -> Pubkey {
    pda::collaborator_address(fee_vault, collaborator_base, &pda_payers::ID)
        .unwrap()
        .address
}

fn create_fee_vault_ix(authority: &Pubkey, amount: u64) -> Instruction {
    let fee_vault = fee_vault_of(authority);
    Instruction {
        program_id: pda_payers::ID,
        accounts: pda_payers::accounts::CreateFeeVault {
            authority: *authority,
            fee_vault,
            fee_vault_wallet: wallet_of(&fee_vault),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: pda_payers::instruction::CreateFeeVault { amount }.data(),
    }
}

fn deposit_ix(authority: &Pubkey, fee_vault: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: pda_payers::ID,
        accounts: pda_payers::accounts::DepositInFeeVault {
            authority: *authority,
            fee_vault: *fee_vault,
            fee_vault_wallet: wallet_of(fee_vault),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: pda_payers::instruction::DepositInFeeVault { amount }.data(),
    }
}

fn withdraw_ix(authority: &Pubkey, fee_vault: &Pubkey, amount: u64) -> Instruction {
    Instruction {
        program_id: pda_payers::ID,
        accounts: pda_payers::accounts::WithdrawFromFeeVault {
            authority: *authority,
            fee_vault: *fee_vault,
            fee_vault_wallet: wallet_of(fee_vault),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: pda_payers::instruction::WithdrawFromFeeVault { amount }.data(),
    }
}

fn create_collaborator_ix(
    authority: &Pubkey,
    fee_vault: &Pubkey,
    collaborator_base: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: pda_payers::ID,
        accounts: pda_payers::accounts::CreateCollaborator {
            authority: *authority,
            fee_vault: *fee_vault,
            fee_vault_wallet: wallet_of(fee_vault),
            collaborator_base: *collaborator_base,
            collaborator: collaborator_of(fee_vault, collaborator_base),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: pda_payers::instruction::CreateCollaborator {}.data(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Lifecycle
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_fee_vault_lifecycle_on_chain() {
    let authority = Keypair::new();
    let mut context = start_with(&[&authority]).await;
    let fee_vault = fee_vault_of(&authority.pubkey());
    let wallet = wallet_of(&fee_vault);

    send(&mut context, create_fee_vault_ix(&authority.pubkey(), FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();
    assert_eq!(balance(&mut context, &wallet).await, FEE_VAULT_BALANCE);
    let state = fee_vault_state(&mut context, &fee_vault).await;
    assert_eq!(state.authority, authority.pubkey());

    send(&mut context, deposit_ix(&authority.pubkey(), &fee_vault, FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();
    assert_eq!(balance(&mut context, &wallet).await, 2 * FEE_VAULT_BALANCE);

    send(&mut context, withdraw_ix(&authority.pubkey(), &fee_vault, FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();
    assert_eq!(balance(&mut context, &wallet).await, FEE_VAULT_BALANCE);

    let base = Pubkey::new_unique();
    let authority_before = balance(&mut context, &authority.pubkey()).await;
    send(&mut context, create_collaborator_ix(&authority.pubkey(), &fee_vault, &base), &authority)
        .await
        .unwrap();

    let rent_table = context.banks_client.get_rent().await.unwrap();
    let required = rent::collaborator_rent(&rent_table);
    assert_eq!(balance(&mut context, &wallet).await, FEE_VAULT_BALANCE - required);
    // the authority only paid the transaction fee
    assert!(authority_before - balance(&mut context, &authority.pubkey()).await < required);

    let collaborator = context
        .banks_client
        .get_account(collaborator_of(&fee_vault, &base))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(collaborator.owner, pda_payers::ID);
    assert_eq!(collaborator.lamports, required);
    assert_eq!(collaborator.data.len(), Collaborator::SIZE);
}

// ═══════════════════════════════════════════════════════════════════════════
// Rejections
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_foreign_signer_is_unauthorized() {
    let authority = Keypair::new();
    let intruder = Keypair::new();
    let mut context = start_with(&[&authority, &intruder]).await;
    let fee_vault = fee_vault_of(&authority.pubkey());

    send(&mut context, create_fee_vault_ix(&authority.pubkey(), FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();

    let unauthorized = u32::from(PdaPayersError::Unauthorized);
    let deposit = send(&mut context, deposit_ix(&intruder.pubkey(), &fee_vault, 1), &intruder).await;
    assert_eq!(program_error(deposit), unauthorized);

    let withdraw = send(&mut context, withdraw_ix(&intruder.pubkey(), &fee_vault, 1), &intruder).await;
    assert_eq!(program_error(withdraw), unauthorized);

    let register = send(
        &mut context,
        create_collaborator_ix(&intruder.pubkey(), &fee_vault, &Pubkey::new_unique()),
        &intruder,
    )
    .await;
    assert_eq!(program_error(register), unauthorized);

    assert_eq!(
        balance(&mut context, &wallet_of(&fee_vault)).await,
        FEE_VAULT_BALANCE
    );
}

#[tokio::test]
async fn test_duplicate_collaborator_already_exists() {
    let authority = Keypair::new();
    let mut context = start_with(&[&authority]).await;
    let fee_vault = fee_vault_of(&authority.pubkey());
    let base = Pubkey::new_unique();

    send(&mut context, create_fee_vault_ix(&authority.pubkey(), FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();
    send(&mut context, create_collaborator_ix(&authority.pubkey(), &fee_vault, &base), &authority)
        .await
        .unwrap();
    let wallet_before = balance(&mut context, &wallet_of(&fee_vault)).await;

    let result = send(
        &mut context,
        create_collaborator_ix(&authority.pubkey(), &fee_vault, &base),
        &authority,
    )
    .await;

    assert_eq!(
        program_error(result),
        u32::from(PdaPayersError::AccountAlreadyExists)
    );
    assert_eq!(balance(&mut context, &wallet_of(&fee_vault)).await, wallet_before);
}

#[tokio::test]
async fn test_funding_between_zero_and_wallet_floor_fails() {
    let authority = Keypair::new();
    let mut context = start_with(&[&authority]).await;
    let rent_table = context.banks_client.get_rent().await.unwrap();
    let floor = rent::wallet_floor(&rent_table);

    let result = send(
        &mut context,
        create_fee_vault_ix(&authority.pubkey(), floor - 1),
        &authority,
    )
    .await;

    assert_eq!(
        program_error(result),
        u32::from(PdaPayersError::InsufficientFunds)
    );
    let fee_vault = fee_vault_of(&authority.pubkey());
    assert!(context
        .banks_client
        .get_account(fee_vault)
        .await
        .unwrap()
        .is_none());

    send(&mut context, create_fee_vault_ix(&authority.pubkey(), floor), &authority)
        .await
        .unwrap();
    assert_eq!(balance(&mut context, &wallet_of(&fee_vault)).await, floor);
}

// ═══════════════════════════════════════════════════════════════════════════
// Pre-funded addresses
// ═══════════════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_stray_lamports_do_not_block_creation() {
    let authority = Keypair::new();
    let fee_vault = fee_vault_of(&authority.pubkey());
    let base = Pubkey::new_unique();
    let collaborator = collaborator_of(&fee_vault, &base);

    let mut program_test = program_test();
    fund(&mut program_test, &authority.pubkey(), 10 * LAMPORTS_PER_SOL);
    fund(&mut program_test, &fee_vault, 1);
    fund(&mut program_test, &collaborator, 1);
    let mut context = program_test.start_with_context().await;

    send(&mut context, create_fee_vault_ix(&authority.pubkey(), FEE_VAULT_BALANCE), &authority)
        .await
        .unwrap();
    let state = fee_vault_state(&mut context, &fee_vault).await;
    assert_eq!(state.authority, authority.pubkey());

    send(&mut context, create_collaborator_ix(&authority.pubkey(), &fee_vault, &base), &authority)
        .await
        .unwrap();

    let rent_table = context.banks_client.get_rent().await.unwrap();
    let required = rent::collaborator_rent(&rent_table);
    assert_eq!(balance(&mut context, &collaborator).await, required);
    assert_eq!(
        balance(&mut context, &wallet_of(&fee_vault)).await,
        FEE_VAULT_BALANCE - (required - 1)
    );
    let account = context
        .banks_client
        .get_account(collaborator)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(account.owner, pda_payers::ID);
    assert_eq!(account.data.len(), Collaborator::SIZE);
}
