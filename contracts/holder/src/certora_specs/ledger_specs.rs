// ============================================================================
// LEDGER SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Credit adds exactly the amount or fails
// 2. Debit removes exactly the amount, never goes below zero, or fails
// 3. Credit followed by debit of the same amount is the identity
// 4. A failed credit/debit leaves nothing to commit
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use holder_ledger::{credit, debit};

#[cfg(feature = "certora")]
use crate::invariants::{balance_non_negative, deposit_accounting, withdraw_accounting};

/// RULE: a successful credit satisfies deposit accounting
#[cfg(feature = "certora")]
#[rule]
pub fn credit_is_exact(balance: i128, amount: i128) {
    cvlr_assume!(balance_non_negative(balance));
    if let Ok(after) = credit(balance, amount) {
        cvlr_assert!(deposit_accounting(balance, amount, after));
    }
}

/// RULE: a successful debit satisfies withdraw accounting
#[cfg(feature = "certora")]
#[rule]
pub fn debit_is_exact(balance: i128, amount: i128) {
    cvlr_assume!(balance_non_negative(balance));
    if let Ok(after) = debit(balance, amount) {
        cvlr_assert!(withdraw_accounting(balance, amount, after));
    }
}

/// RULE: debit never produces a negative balance
#[cfg(feature = "certora")]
#[rule]
pub fn debit_never_negative(balance: i128, amount: i128) {
    cvlr_assume!(balance_non_negative(balance));
    match debit(balance, amount) {
        Ok(after) => {
            cvlr_assert!(balance_non_negative(after));
        }
        Err(_) => {
            cvlr_assert!(amount < 0 || amount > balance);
        }
    }
}

/// RULE: credit then debit of the same amount returns the prior balance
#[cfg(feature = "certora")]
#[rule]
pub fn credit_debit_round_trip(balance: i128, amount: i128) {
    cvlr_assume!(balance_non_negative(balance));
    cvlr_assume!(amount >= 0);
    if let Ok(after_credit) = credit(balance, amount) {
        cvlr_assert!(debit(after_credit, amount) == Ok(balance));
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{
        balance_non_negative, deposit_accounting, unchanged_on_failure, withdraw_accounting,
    };
    use holder_ledger::{credit, debit};
    use holder_types::HolderError;

    #[test]
    fn test_credit_satisfies_accounting() {
        for (balance, amount) in [(0i128, 10i128), (5, 0), (1 << 100, 1 << 90)] {
            let after = credit(balance, amount).unwrap();
            assert!(deposit_accounting(balance, amount, after));
        }
    }

    #[test]
    fn test_debit_satisfies_accounting() {
        for (balance, amount) in [(10i128, 10i128), (10, 0), (1 << 100, 1 << 90)] {
            let after = debit(balance, amount).unwrap();
            assert!(withdraw_accounting(balance, amount, after));
            assert!(balance_non_negative(after));
        }
    }

    #[test]
    fn test_failed_debit_commits_nothing() {
        let balance = 4i128;
        let committed = match debit(balance, 5) {
            Ok(after) => after,
            Err(err) => {
                assert_eq!(err, HolderError::LedgerUnderflow);
                balance
            }
        };
        assert!(unchanged_on_failure(false, balance, committed));
    }
}
