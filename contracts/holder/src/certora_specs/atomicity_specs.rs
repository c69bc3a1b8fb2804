// ============================================================================
// ATOMICITY SPECIFICATIONS
// ============================================================================
//
// For the owner, deposit and withdraw are all-or-nothing: a call that
// succeeds moves the utilized balance by exactly `amount`, and a call that
// fails leaves the snapshot untouched. Token movements go through the mock
// client in `token.rs`.
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::certora_specs::model::HolderSnapshot;

#[cfg(feature = "certora")]
use crate::Holder;

#[cfg(feature = "certora")]
use crate::invariants::{deposit_accounting, withdraw_accounting};

#[cfg(feature = "certora")]
use holder_types::HolderError;

/// RULE: owner deposit either credits exactly `amount` or changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn owner_deposit_exact_or_unchanged(
    env: Env,
    owner: Address,
    source: Address,
    token: Address,
    amount: i128,
) {
    cvlr_assume!(amount > 0);
    Holder::__constructor(env.clone(), owner.clone());

    let before = HolderSnapshot::capture(&env, &token);
    let result = Holder::deposit(env.clone(), owner, source, token.clone(), amount);
    let after = HolderSnapshot::capture(&env, &token);

    match result {
        Ok(()) => {
            cvlr_assert!(before.owner == after.owner);
            cvlr_assert!(deposit_accounting(
                before.utilized_balance,
                amount,
                after.utilized_balance
            ));
        }
        Err(_) => {
            cvlr_assert!(before.unchanged(&after));
        }
    }
}

/// RULE: owner withdraw either debits exactly `amount` or changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn owner_withdraw_exact_or_unchanged(
    env: Env,
    owner: Address,
    destination: Address,
    token: Address,
    amount: i128,
) {
    cvlr_assume!(amount > 0);
    Holder::__constructor(env.clone(), owner.clone());

    let before = HolderSnapshot::capture(&env, &token);
    let result = Holder::withdraw(env.clone(), owner, destination, token.clone(), amount);
    let after = HolderSnapshot::capture(&env, &token);

    match result {
        Ok(()) => {
            cvlr_assert!(before.owner == after.owner);
            cvlr_assert!(withdraw_accounting(
                before.utilized_balance,
                amount,
                after.utilized_balance
            ));
        }
        Err(_) => {
            cvlr_assert!(before.unchanged(&after));
        }
    }
}

/// SANITY: a withdraw the ledger cannot cover is reachable and fails
#[cfg(feature = "certora")]
#[rule]
pub fn owner_withdraw_underflow_reachable(
    env: Env,
    owner: Address,
    destination: Address,
    token: Address,
    amount: i128,
) {
    cvlr_assume!(amount > 0);
    Holder::__constructor(env.clone(), owner.clone());
    cvlr_assume!(Holder::utilized_total_balance(env.clone(), token.clone()) < amount);
    let result = Holder::withdraw(env.clone(), owner, destination, token, amount);
    cvlr_satisfy!(result == Err(HolderError::LedgerUnderflow));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{deposit_accounting, unchanged_on_failure, withdraw_accounting};

    #[test]
    fn test_failed_call_must_leave_balance() {
        assert!(unchanged_on_failure(false, 10, 10));
        assert!(!unchanged_on_failure(false, 10, 15));
    }

    #[test]
    fn test_successful_call_moves_exact_amount() {
        assert!(deposit_accounting(10, 5, 15));
        assert!(!deposit_accounting(10, 5, 16));
        assert!(withdraw_accounting(10, 5, 5));
        assert!(!withdraw_accounting(10, 5, 6));
    }
}
