use holder_types::{Amount, HolderError};

/// Reject amounts below zero.
///
/// SEP-41 amounts are signed; the holder only ever moves non-negative
/// quantities, so a negative amount is refused before any side effect.
pub fn check_amount(amount: Amount) -> Result<(), HolderError> {
    if amount < 0 {
        return Err(HolderError::NegativeAmount);
    }
    Ok(())
}

/// Utilized balance after a deposit of `amount`
pub fn credit(balance: Amount, amount: Amount) -> Result<Amount, HolderError> {
    check_amount(amount)?;
    balance
        .checked_add(amount)
        .ok_or(HolderError::LedgerOverflow)
}

/// Utilized balance after a withdrawal of `amount`.
///
/// Never wraps or saturates: a result below zero is an error.
pub fn debit(balance: Amount, amount: Amount) -> Result<Amount, HolderError> {
    check_amount(amount)?;
    match balance.checked_sub(amount) {
        Some(remaining) if remaining >= 0 => Ok(remaining),
        _ => Err(HolderError::LedgerUnderflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_amount() {
        assert_eq!(check_amount(0), Ok(()));
        assert_eq!(check_amount(1), Ok(()));
        assert_eq!(check_amount(i128::MAX), Ok(()));
        assert_eq!(check_amount(-1), Err(HolderError::NegativeAmount));
        assert_eq!(check_amount(i128::MIN), Err(HolderError::NegativeAmount));
    }

    #[test]
    fn test_credit() {
        assert_eq!(credit(0, 10), Ok(10));
        assert_eq!(credit(100, 50), Ok(150));
        assert_eq!(credit(100, 0), Ok(100));
    }

    #[test]
    fn test_credit_overflow() {
        assert_eq!(credit(i128::MAX, 1), Err(HolderError::LedgerOverflow));
        assert_eq!(credit(i128::MAX - 5, 5), Ok(i128::MAX));
    }

    #[test]
    fn test_credit_negative_amount() {
        assert_eq!(credit(100, -1), Err(HolderError::NegativeAmount));
    }

    #[test]
    fn test_debit() {
        assert_eq!(debit(10, 5), Ok(5));
        assert_eq!(debit(10, 10), Ok(0));
        assert_eq!(debit(10, 0), Ok(10));
    }

    #[test]
    fn test_debit_underflow() {
        assert_eq!(debit(0, 5), Err(HolderError::LedgerUnderflow));
        assert_eq!(debit(4, 5), Err(HolderError::LedgerUnderflow));
    }

    #[test]
    fn test_debit_negative_amount() {
        // A negative debit would otherwise act as a credit
        assert_eq!(debit(10, -5), Err(HolderError::NegativeAmount));
    }

    #[test]
    fn test_credit_then_debit_round_trip() {
        let start = 1_000_000_000_000_000_000i128;
        let amount = 10_000_000_000_000_000_000i128;
        let after_credit = credit(start, amount).unwrap();
        assert_eq!(debit(after_credit, amount), Ok(start));
    }
}
