#![no_std]

mod auth;
mod certora_specs;
pub mod invariants;
mod storage;
mod transfer;

use holder_ledger::{check_amount, credit, debit};
use holder_types::{Amount, HolderError};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};
use storage::{get_owner, get_utilized_balance, set_owner, set_utilized_balance};

/// Custodial holder: a single owner moves tokens in and out, and the
/// contract keeps a per-token record of what it holds for that owner.
#[contract]
pub struct Holder;

#[contractimpl]
impl Holder {
    /// Fix the owner for the lifetime of the contract
    pub fn __constructor(env: Env, owner: Address) {
        set_owner(&env, &owner);
    }

    /// Pull `amount` of `token` from `source` into the holder.
    ///
    /// `source` must have approved the holder for at least `amount`. A zero
    /// amount succeeds without touching the token contract.
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` is not the owner
    /// * `NegativeAmount` - `amount` < 0
    /// * `LedgerOverflow` - the utilized balance cannot absorb `amount`
    /// * `TransferFailed` - the token contract rejected the pull
    pub fn deposit(
        env: Env,
        caller: Address,
        source: Address,
        token: Address,
        amount: Amount,
    ) -> Result<(), HolderError> {
        auth::require_owner(&env, &caller)?;
        check_amount(amount)?;
        if amount == 0 {
            return Ok(());
        }

        let balance = get_utilized_balance(&env, &token);
        let new_balance = credit(balance, amount)?;
        debug_assert!(invariants::deposit_accounting(balance, amount, new_balance));

        transfer::pull(&env, &token, &source, amount)?;
        set_utilized_balance(&env, &token, new_balance);

        env.events().publish(
            (Symbol::new(&env, "deposit"), token),
            (source, amount, new_balance),
        );
        Ok(())
    }

    /// Push `amount` of `token` from the holder to `destination`.
    ///
    /// Solvency is left to the token contract: withdrawing more than the
    /// holder actually has fails with `TransferFailed`. A zero amount
    /// succeeds without touching the token contract.
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` is not the owner
    /// * `NegativeAmount` - `amount` < 0
    /// * `TransferFailed` - the token contract rejected the push
    /// * `LedgerUnderflow` - the push succeeded on tokens that were never
    ///   deposited; the whole call is rolled back
    pub fn withdraw(
        env: Env,
        caller: Address,
        destination: Address,
        token: Address,
        amount: Amount,
    ) -> Result<(), HolderError> {
        auth::require_owner(&env, &caller)?;
        check_amount(amount)?;
        if amount == 0 {
            return Ok(());
        }

        transfer::push(&env, &token, &destination, amount)?;

        let balance = get_utilized_balance(&env, &token);
        let new_balance = debit(balance, amount)?;
        debug_assert!(invariants::withdraw_accounting(balance, amount, new_balance));
        set_utilized_balance(&env, &token, new_balance);

        env.events().publish(
            (Symbol::new(&env, "withdraw"), token),
            (destination, amount, new_balance),
        );
        Ok(())
    }

    // === View Functions ===

    /// Amount of `token` the holder tracks for the owner; zero if never deposited
    pub fn utilized_total_balance(env: Env, token: Address) -> Amount {
        get_utilized_balance(&env, &token)
    }

    /// Amount of `token` the token contract reports the holder as holding
    pub fn held_balance(env: Env, token: Address) -> Amount {
        transfer::held_balance(&env, &token)
    }

    /// Owner fixed at construction
    pub fn owner(env: Env) -> Address {
        get_owner(&env)
    }
}
