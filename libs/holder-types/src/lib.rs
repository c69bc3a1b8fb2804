#![no_std]

mod error;

pub use error::*;

/// Token amount in the SEP-41 width. Amounts accepted by the holder are never negative.
pub type Amount = i128;

/// Amount reported for a token the holder has never custodied
pub const ZERO_BALANCE: Amount = 0;
