// ============================================================================
// SEP-41 TOKEN MODEL
// ============================================================================
//
// Stand-in for `soroban_sdk::token::Client` under verification. Every call
// returns a nondeterministic value; a rejected transfer reverts the whole
// invocation, so a holder call that returns has seen the movement succeed.
//
// ============================================================================

use cvlr_soroban::nondet_string;
use cvlr_soroban_derive::cvlr_mock_client as mockclient;
use soroban_sdk::{Address, Env, String};

#[allow(unused)]
#[mockclient(name = "Client")]
trait TokenInterface {
    fn allowance(env: Env, from: Address, spender: Address) -> i128;
    fn approve(env: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32);
    fn balance(env: Env, id: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);
    fn decimals(env: Env) -> u32;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
}
