// =============================================================================
// Lamport Accounting
// =============================================================================
// Exact credit/debit arithmetic used by both the on-chain handlers and the
// ledger. Amounts are moved as given; nothing here rounds or clamps.
// =============================================================================

use crate::error::PdaPayersError;

/// Add `amount` to `balance`.
pub fn credit(balance: u64, amount: u64) -> std::result::Result<u64, PdaPayersError> {
    balance
        .checked_add(amount)
        .ok_or(PdaPayersError::MathOverflow)
}

/// Subtract `amount` from `balance`, keeping at least `floor` behind.
///
/// Personal balances use a floor of 0. The fee vault wallet uses its own
/// rent-exempt minimum so a debit can never leave it collectable.
pub fn debit(balance: u64, amount: u64, floor: u64) -> std::result::Result<u64, PdaPayersError> {
    let remaining = balance
        .checked_sub(amount)
        .ok_or(PdaPayersError::InsufficientFunds)?;

    if remaining < floor {
        return Err(PdaPayersError::InsufficientFunds);
    }

    Ok(remaining)
}

/// A wallet may be empty or rent exempt, nothing in between.
///
/// The runtime refuses to leave a system account holding a non-zero balance
/// under its rent-exempt minimum, so credits that land there are rejected.
pub fn ensure_rent_exempt_or_empty(
    balance: u64,
    floor: u64,
) -> std::result::Result<(), PdaPayersError> {
    if balance != 0 && balance < floor {
        return Err(PdaPayersError::InsufficientFunds);
    }
    Ok(())
}
