use soroban_sdk::contracterror;

/// Failures surfaced by the holder entry points.
///
/// Codes are part of the contract interface; clients match on them through
/// the generated `try_*` methods, so existing values must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum HolderError {
    /// Caller is not the owner fixed at construction
    Unauthorized = 1,
    /// The token contract rejected the movement (allowance, balance, trustline)
    TransferFailed = 2,
    /// Amount below zero
    NegativeAmount = 3,
    /// Crediting the utilized balance would overflow
    LedgerOverflow = 4,
    /// Debiting the utilized balance would take it below zero
    LedgerUnderflow = 5,
}
