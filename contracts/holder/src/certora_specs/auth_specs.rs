// ============================================================================
// AUTHORIZATION SPECIFICATIONS
// ============================================================================
//
// A caller other than the owner can never change holder state, whatever the
// amount, token or counterparty. The gate runs before any token call, so
// these rules need no token model.
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
use holder_types::HolderError;

/// RULE: non-owner deposit fails with Unauthorized and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_deposit(
    env: Env,
    owner: Address,
    caller: Address,
    source: Address,
    token: Address,
    amount: i128,
) {
    cvlr_assume!(caller != owner);
    Holder::__constructor(env.clone(), owner.clone());

    let before = HolderSnapshot::capture(&env, &token);
    let result = Holder::deposit(env.clone(), caller, source, token.clone(), amount);
    let after = HolderSnapshot::capture(&env, &token);

    cvlr_assert!(result == Err(HolderError::Unauthorized));
    cvlr_assert!(before.unchanged(&after));
}

/// RULE: non-owner withdraw fails with Unauthorized and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn non_owner_cannot_withdraw(
    env: Env,
    owner: Address,
    caller: Address,
    destination: Address,
    token: Address,
    amount: i128,
) {
    cvlr_assume!(caller != owner);
    Holder::__constructor(env.clone(), owner.clone());

    let before = HolderSnapshot::capture(&env, &token);
    let result = Holder::withdraw(env.clone(), caller, destination, token.clone(), amount);
    let after = HolderSnapshot::capture(&env, &token);

    cvlr_assert!(result == Err(HolderError::Unauthorized));
    cvlr_assert!(before.unchanged(&after));
}

/// RULE: owner is whatever the constructor was given
#[cfg(feature = "certora")]
#[rule]
pub fn owner_fixed_at_construction(env: Env, owner: Address) {
    Holder::__constructor(env.clone(), owner.clone());
    cvlr_assert!(Holder::owner(env.clone()) == owner);
}

/// SANITY: a negative amount from the owner is reachable and rejected
#[cfg(feature = "certora")]
#[rule]
pub fn owner_negative_amount_reachable(env: Env, owner: Address, token: Address, amount: i128) {
    cvlr_assume!(amount < 0);
    Holder::__constructor(env.clone(), owner.clone());
    let result = Holder::deposit(env.clone(), owner.clone(), owner, token, amount);
    cvlr_satisfy!(result == Err(HolderError::NegativeAmount));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
