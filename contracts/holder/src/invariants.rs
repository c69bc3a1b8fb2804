// ============================================================================
// INVARIANTS MODULE - For Formal Verification
// ============================================================================
//
// Predicates over holder state used by the entry points (debug builds), the
// unit tests and the Certora rules.
//
// INVARIANT CATEGORIES:
//
// 1. LEDGER INVARIANTS
//    - Utilized balance is never negative
//    - Deposits add exactly the amount, withdrawals remove exactly the amount
//
// 2. ATOMICITY INVARIANTS
//    - A failed call leaves the utilized balance untouched
//
// 3. SOLVENCY INVARIANTS
//    - The utilized balance never exceeds what the token reports as held
//
// 4. AUTHORIZATION INVARIANTS
//    - Only the owner changes state
//
// ============================================================================

use holder_types::Amount;

// ============================================================================
// LEDGER INVARIANTS
// ============================================================================

/// Invariant: utilized balance is non-negative
///
/// Property:
///   balance >= 0
pub fn balance_non_negative(balance: Amount) -> bool {
    balance >= 0
}

/// Invariant: a deposit adds exactly the deposited amount
///
/// Property:
///   after == before + amount
pub fn deposit_accounting(before: Amount, amount: Amount, after: Amount) -> bool {
    match before.checked_add(amount) {
        Some(expected) => amount >= 0 && after == expected,
        None => false,
    }
}

/// Invariant: a withdrawal removes exactly the withdrawn amount
///
/// Property:
///   after == before - amount && after >= 0
pub fn withdraw_accounting(before: Amount, amount: Amount, after: Amount) -> bool {
    match before.checked_sub(amount) {
        Some(expected) => amount >= 0 && after == expected && balance_non_negative(after),
        None => false,
    }
}

/// Invariant: balance equals net flow over a history of successful calls
///
/// Property:
///   balance == sum(deposits) - sum(withdrawals)
pub fn balance_matches_net_flow(
    balance: Amount,
    total_deposited: Amount,
    total_withdrawn: Amount,
) -> bool {
    match total_deposited.checked_sub(total_withdrawn) {
        Some(net) => balance == net,
        None => false,
    }
}

// ============================================================================
// ATOMICITY INVARIANTS
// ============================================================================

/// Invariant: a failed call does not move the utilized balance
pub fn unchanged_on_failure(succeeded: bool, before: Amount, after: Amount) -> bool {
    succeeded || before == after
}

// ============================================================================
// SOLVENCY INVARIANTS
// ============================================================================

/// Invariant: the holder never believes it holds more than it does
///
/// Property:
///   utilized <= held
///
/// Equality is the expected steady state; `held` can exceed `utilized` when
/// tokens are sent to the holder outside of `deposit`.
pub fn backed_by_holdings(utilized: Amount, held: Amount) -> bool {
    balance_non_negative(utilized) && utilized <= held
}

// ============================================================================
// AUTHORIZATION INVARIANTS
// ============================================================================

/// Invariant: a state change implies the caller was the owner
pub fn change_implies_owner(caller_is_owner: bool, before: Amount, after: Amount) -> bool {
    caller_is_owner || before == after
}
