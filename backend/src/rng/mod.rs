//! Deterministic random number generation
//!
//! Uses xorshift64* for fast, reproducible sampling.
//! CRITICAL: Every choice model draws through this module. There is no
//! ambient generator; callers thread an `RngManager` through each call.

mod xorshift;

pub use xorshift::RngManager;
