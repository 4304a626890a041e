//! Shared raw-call plumbing for the relay.
//!
//! These helpers are intentionally small and deterministic, as they run inside Stylus / WASM.

pub mod abi;
pub mod token;
