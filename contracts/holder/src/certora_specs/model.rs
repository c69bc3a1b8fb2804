// ============================================================================
// STATE SNAPSHOT HELPERS
// ============================================================================

/// Captures holder state for one token for before/after comparisons
#[cfg(feature = "certora")]
#[derive(Clone)]
pub struct HolderSnapshot {
    pub owner: soroban_sdk::Address,
    pub utilized_balance: i128,
}

#[cfg(feature = "certora")]
impl HolderSnapshot {
    pub fn capture(env: &soroban_sdk::Env, token: &soroban_sdk::Address) -> Self {
        Self {
            owner: crate::Holder::owner(env.clone()),
            utilized_balance: crate::Holder::utilized_total_balance(env.clone(), token.clone()),
        }
    }

    pub fn unchanged(&self, other: &Self) -> bool {
        self.owner == other.owner && self.utilized_balance == other.utilized_balance
    }
}
