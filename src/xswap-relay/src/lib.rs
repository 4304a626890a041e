//! Cross-domain swap relay for Arbitrum Stylus.
//!
//! A messaging bus delivers `(token, amount, payload)` after debiting tokens
//! into this contract's custody; the relay decodes the payload into a swap
//! intent, executes it against an allowlisted liquidity pool, and guarantees
//! the deposit is either swapped-and-forwarded or refunded, never stranded.
//! A separate recovery path replays failed cross-domain deposits through an
//! allowlisted router and settles by measured balance delta.

#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod adapter;
pub mod engine;
pub mod errors;
pub mod relay;
pub mod utils;

pub use relay::SwapRelay;
