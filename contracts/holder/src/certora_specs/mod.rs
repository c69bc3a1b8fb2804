// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the holder contract: owner gate, ledger accounting and
// all-or-nothing behaviour of deposit/withdraw.
//
// STRUCTURE:
//
// - model.rs        : State snapshots for before/after comparisons
// - auth_specs.rs   : Only the owner changes state
// - ledger_specs.rs : Credit/debit arithmetic and balance bounds
// - atomicity_specs.rs : Owner calls move exactly `amount` or nothing
// - token.rs        : Mock SEP-41 client used in place of the real token
//
// USAGE:
// - Unit tests: cargo test -p holder
// - Certora build: cargo build --features certora -p holder
// - Verification: certoraSorobanProver holder.conf
//
// ============================================================================

#[cfg(feature = "certora")]
pub mod model;
#[cfg(feature = "certora")]
pub mod token;

pub mod auth_specs;
pub mod ledger_specs;
pub mod atomicity_specs;
