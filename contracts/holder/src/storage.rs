use holder_types::{Amount, ZERO_BALANCE};
use soroban_sdk::{contracttype, Address, Env};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Owner lives in Instance storage: read on every mutating call, written
//   once by the constructor.
// - Each token's utilized balance is a separate Persistent entry (~60 bytes),
//   so the number of tokens held is not bounded by a single entry's size.
// - A balance that returns to zero is removed instead of stored.
// ============================================================================

/// Storage keys for the holder contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner address (Instance storage)
    Owner,
    /// Token address -> utilized balance (Persistent storage)
    UtilizedBalance(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Owner ===

pub fn get_owner(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .expect("Holder not initialized")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    extend_instance_ttl(env);
}

// === Utilized balance ===

pub fn get_utilized_balance(env: &Env, token: &Address) -> Amount {
    let key = DataKey::UtilizedBalance(token.clone());
    match env.storage().persistent().get(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => ZERO_BALANCE,
    }
}

pub fn set_utilized_balance(env: &Env, token: &Address, balance: Amount) {
    let key = DataKey::UtilizedBalance(token.clone());
    if balance == ZERO_BALANCE {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

#[cfg(test)]
pub fn has_utilized_balance(env: &Env, token: &Address) -> bool {
    let key = DataKey::UtilizedBalance(token.clone());
    env.storage().persistent().has(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::storage::Persistent as _;
    use soroban_sdk::testutils::{Address as _, Ledger as _};

    /// Helper to run test code within a holder contract context
    fn with_contract<F, R>(env: &Env, owner: &Address, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let contract_id = env.register(crate::Holder, (owner.clone(),));
        env.as_contract(&contract_id, f)
    }

    #[test]
    fn test_constructor_stores_owner() {
        let env = Env::default();
        let owner = Address::generate(&env);
        with_contract(&env, &owner, || {
            assert_eq!(get_owner(&env), owner);
        });
    }

    #[test]
    fn test_unknown_token_defaults_to_zero() {
        let env = Env::default();
        let owner = Address::generate(&env);
        with_contract(&env, &owner, || {
            let token = Address::generate(&env);
            assert_eq!(get_utilized_balance(&env, &token), 0);
            assert!(!has_utilized_balance(&env, &token));
        });
    }

    #[test]
    fn test_set_and_get_balance() {
        let env = Env::default();
        let owner = Address::generate(&env);
        with_contract(&env, &owner, || {
            let token = Address::generate(&env);
            set_utilized_balance(&env, &token, 1_000);
            assert_eq!(get_utilized_balance(&env, &token), 1_000);
            assert!(has_utilized_balance(&env, &token));
        });
    }

    #[test]
    fn test_zero_balance_removes_entry() {
        let env = Env::default();
        let owner = Address::generate(&env);
        with_contract(&env, &owner, || {
            let token = Address::generate(&env);
            set_utilized_balance(&env, &token, 500);
            set_utilized_balance(&env, &token, 0);

            assert!(!has_utilized_balance(&env, &token), "Empty entry should be removed");
            assert_eq!(get_utilized_balance(&env, &token), 0);
        });
    }

    #[test]
    fn test_balances_are_keyed_per_token() {
        let env = Env::default();
        let owner = Address::generate(&env);
        with_contract(&env, &owner, || {
            let token_a = Address::generate(&env);
            let token_b = Address::generate(&env);
            set_utilized_balance(&env, &token_a, 10);
            set_utilized_balance(&env, &token_b, 20);

            assert_eq!(get_utilized_balance(&env, &token_a), 10);
            assert_eq!(get_utilized_balance(&env, &token_b), 20);
        });
    }

    #[test]
    fn test_read_extends_balance_ttl() {
        let env = Env::default();
        let owner = Address::generate(&env);
        let token = Address::generate(&env);
        let key = DataKey::UtilizedBalance(token.clone());
        let contract_id = env.register(crate::Holder, (owner,));

        env.as_contract(&contract_id, || {
            set_utilized_balance(&env, &token, 42);
        });

        // Move close to expiry, below the extension threshold
        env.ledger().set_sequence_number(PERSISTENT_TTL_EXTEND - PERSISTENT_TTL_THRESHOLD + 100);

        env.as_contract(&contract_id, || {
            let ttl_before = env.storage().persistent().get_ttl(&key);
            assert!(ttl_before < PERSISTENT_TTL_THRESHOLD);

            assert_eq!(get_utilized_balance(&env, &token), 42);

            let ttl_after = env.storage().persistent().get_ttl(&key);
            assert!(ttl_after > PERSISTENT_TTL_THRESHOLD, "Read should extend TTL");
        });
    }
}
