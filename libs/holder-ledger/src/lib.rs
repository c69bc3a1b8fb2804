#![no_std]

pub mod balance_math;

pub use balance_math::*;
