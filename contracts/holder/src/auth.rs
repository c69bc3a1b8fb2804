use crate::storage::get_owner;
use holder_types::HolderError;
use soroban_sdk::{log, Address, Env};

/// Gate every mutating entry point on the owner fixed at construction.
///
/// The identity comparison runs before `require_auth` so that a non-owner
/// always gets `Unauthorized` back rather than an auth failure. Must be the
/// first thing an entry point does: nothing may be written or invoked before
/// it returns `Ok`.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), HolderError> {
    let owner = get_owner(env);
    if *caller != owner {
        log!(env, "rejected caller", caller.clone());
        return Err(HolderError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}
