//! Off-chain payload tooling for the swap relay.
//!
//! The messaging layer carries intents as opaque bytes; this crate builds
//! those payloads and reconstructs retry requests from observed `ExecFailed`
//! signals.

pub mod encoder;
mod tests;

pub use encoder::{decode_outcome_hex, encode_intent_hex, RetryRequest};
pub use xswap_relay_types::{ExchangeMode, SwapIntent};
