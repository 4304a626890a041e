//! Shared types for the swap relay: intent, wire codec, and the pool adapter seam.
//!
//! This crate is `no_std` + alloc so the same definitions serve the Stylus
//! contract and the off-chain tooling.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod adapter;
pub mod codec;
pub mod intent;

pub use adapter::{AdapterError, PoolAdapter};
pub use codec::{decode_swap_intent, decode_swap_outcome, encode_swap_intent, encode_swap_outcome, DecodeError};
pub use intent::{ExchangeMode, SwapIntent};
