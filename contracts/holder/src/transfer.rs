use holder_types::{Amount, HolderError};
use soroban_sdk::{Address, Env};

#[cfg(not(feature = "certora"))]
use soroban_sdk::{log, token::Client as TokenClient};

#[cfg(feature = "certora")]
use crate::certora_specs::token::Client as TokenClient;

// Token movements go through the fallible client so that any rejection by the
// token contract (allowance, balance, trustline, frozen account) surfaces as
// `TransferFailed`. The host rolls back the token's own writes on failure.

/// Pull `amount` of `token` from `from` into the holder, spending the
/// allowance `from` granted to the holder.
#[cfg(not(feature = "certora"))]
pub fn pull(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: Amount,
) -> Result<(), HolderError> {
    let contract_address = env.current_contract_address();
    let token_client = TokenClient::new(env, token);

    match token_client.try_transfer_from(&contract_address, from, &contract_address, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(error)) => {
            log!(
                env,
                "pull rejected by token",
                token.clone(),
                from.clone(),
                amount,
                error
            );
            Err(HolderError::TransferFailed)
        }
        Err(Err(_)) | Ok(Err(_)) => {
            log!(env, "pull aborted by token", token.clone(), from.clone(), amount);
            Err(HolderError::TransferFailed)
        }
    }
}

/// Push `amount` of `token` from the holder's own holdings to `to`
#[cfg(not(feature = "certora"))]
pub fn push(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), HolderError> {
    let contract_address = env.current_contract_address();
    let token_client = TokenClient::new(env, token);

    match token_client.try_transfer(&contract_address, to, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(Ok(error)) => {
            log!(
                env,
                "push rejected by token",
                token.clone(),
                to.clone(),
                amount,
                error
            );
            Err(HolderError::TransferFailed)
        }
        Err(Err(_)) | Ok(Err(_)) => {
            log!(env, "push aborted by token", token.clone(), to.clone(), amount);
            Err(HolderError::TransferFailed)
        }
    }
}

// Under verification the token is the mock client: a rejected movement
// reverts the whole invocation instead of returning.

#[cfg(feature = "certora")]
pub fn pull(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: Amount,
) -> Result<(), HolderError> {
    let contract_address = env.current_contract_address();
    TokenClient::new(env, token).transfer_from(
        &contract_address,
        from,
        &contract_address,
        &amount,
    );
    Ok(())
}

#[cfg(feature = "certora")]
pub fn push(
    env: &Env,
    token: &Address,
    to: &Address,
    amount: Amount,
) -> Result<(), HolderError> {
    let contract_address = env.current_contract_address();
    TokenClient::new(env, token).transfer(&contract_address, to, &amount);
    Ok(())
}

/// Holder's actual balance of `token` as reported by the token contract
pub fn held_balance(env: &Env, token: &Address) -> Amount {
    TokenClient::new(env, token).balance(&env.current_contract_address())
}
