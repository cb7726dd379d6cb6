// =============================================================================
// Address Derivation
// =============================================================================
// Program derived addresses for the fee vault, its wallet and collaborators.
//
// `derive` performs the bump search once (at account creation). The bump is
// then stored in the account so every later lookup goes through `rederive`,
// which is a single hash instead of a search.
// =============================================================================

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::PdaPayersError;

/// An address together with the bump that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

/// Search for the first off-curve address for `[domain_tag, key_parts..]`.
///
/// Bumps are tried from 255 downwards, so the result is the canonical bump
/// Anchor's `bump` constraint also finds.
pub fn derive(
    domain_tag: &[u8],
    key_parts: &[&[u8]],
    program_id: &Pubkey,
) -> std::result::Result<DerivedAddress, PdaPayersError> {
    let seeds = seeds_for(domain_tag, key_parts);

    Pubkey::try_find_program_address(&seeds, program_id)
        .map(|(address, bump)| DerivedAddress { address, bump })
        .ok_or(PdaPayersError::AddressDerivationExhausted)
}

/// Recompute an address from a stored bump without searching.
pub fn rederive(
    domain_tag: &[u8],
    key_parts: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> std::result::Result<Pubkey, PdaPayersError> {
    let bump_seed = [bump];
    let mut seeds = seeds_for(domain_tag, key_parts);
    seeds.push(&bump_seed);

    Pubkey::create_program_address(&seeds, program_id).map_err(|_| PdaPayersError::InvalidBump)
}

fn seeds_for<'a>(domain_tag: &'a [u8], key_parts: &[&'a [u8]]) -> Vec<&'a [u8]> {
    let mut seeds = Vec::with_capacity(key_parts.len() + 2);
    seeds.push(domain_tag);
    seeds.extend_from_slice(key_parts);
    seeds
}

// =============================================================================
// Typed helpers
// =============================================================================

/// ["fee_vault", authority]
pub fn fee_vault_address(
    authority: &Pubkey,
    program_id: &Pubkey,
) -> std::result::Result<DerivedAddress, PdaPayersError> {
    derive(FEE_VAULT_SEED, &[authority.as_ref()], program_id)
}

/// ["fee_vault_wallet", fee_vault]
pub fn fee_vault_wallet_address(
    fee_vault: &Pubkey,
    program_id: &Pubkey,
) -> std::result::Result<DerivedAddress, PdaPayersError> {
    derive(FEE_VAULT_WALLET_SEED, &[fee_vault.as_ref()], program_id)
}

/// ["collaborator", fee_vault, collaborator_base]
pub fn collaborator_address(
    fee_vault: &Pubkey,
    collaborator_base: &Pubkey,
    program_id: &Pubkey,
) -> std::result::Result<DerivedAddress, PdaPayersError> {
    derive(
        COLLABORATOR_SEED,
        &[fee_vault.as_ref(), collaborator_base.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_is_deterministic() {
        let authority = Pubkey::new_unique();

        let first = fee_vault_address(&authority, &crate::ID).unwrap();
        let second = fee_vault_address(&authority, &crate::ID).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn derived_addresses_are_off_curve() {
        let authority = Pubkey::new_unique();
        let vault = fee_vault_address(&authority, &crate::ID).unwrap();
        let wallet = fee_vault_wallet_address(&vault.address, &crate::ID).unwrap();

        assert!(!vault.address.is_on_curve());
        assert!(!wallet.address.is_on_curve());
    }

    #[test]
    fn matches_runtime_find_program_address() {
        let fee_vault = Pubkey::new_unique();
        let base = Pubkey::new_unique();

        let derived = collaborator_address(&fee_vault, &base, &crate::ID).unwrap();
        let (expected, bump) = Pubkey::find_program_address(
            &[COLLABORATOR_SEED, fee_vault.as_ref(), base.as_ref()],
            &crate::ID,
        );

        assert_eq!(derived.address, expected);
        assert_eq!(derived.bump, bump);
    }

    #[test]
    fn stored_bump_rederives_same_address() {
        let authority = Pubkey::new_unique();
        let vault = fee_vault_address(&authority, &crate::ID).unwrap();

        let address =
            rederive(FEE_VAULT_SEED, &[authority.as_ref()], vault.bump, &crate::ID).unwrap();

        assert_eq!(address, vault.address);
    }

    #[test]
    fn domain_tag_separates_address_spaces() {
        let key = Pubkey::new_unique();

        let vault = fee_vault_address(&key, &crate::ID).unwrap();
        let wallet = fee_vault_wallet_address(&key, &crate::ID).unwrap();

        assert_ne!(vault.address, wallet.address);
    }

    #[test]
    fn collaborator_address_depends_on_vault_and_base() {
        let vault_a = Pubkey::new_unique();
        let vault_b = Pubkey::new_unique();
        let base = Pubkey::new_unique();

        let under_a = collaborator_address(&vault_a, &base, &crate::ID).unwrap();
        let under_b = collaborator_address(&vault_b, &base, &crate::ID).unwrap();

        assert_ne!(under_a.address, under_b.address);
    }

    #[test]
    fn different_program_ids_yield_different_addresses() {
        let authority = Pubkey::new_unique();
        let other_program = Pubkey::new_unique();

        let ours = fee_vault_address(&authority, &crate::ID).unwrap();
        let theirs = fee_vault_address(&authority, &other_program).unwrap();

        assert_ne!(ours.address, theirs.address);
    }
}
