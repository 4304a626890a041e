//! Minimal ABI word-encoding helpers for selector-addressed raw calls.

use stylus_sdk::alloy_primitives::{keccak256, Address, FixedBytes, U256};

pub fn selector(sig: &str) -> [u8; 4] {
    let h = keccak256(sig.as_bytes());
    [h[0], h[1], h[2], h[3]]
}

/// Address left-padded into a 32-byte ABI word.
pub fn address_word(addr: Address) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[12..32].copy_from_slice(addr.as_slice());
    w
}

/// `int128` sign-extended into a 32-byte ABI word.
pub fn int128_word(v: i128) -> [u8; 32] {
    let mut w = if v < 0 { [0xffu8; 32] } else { [0u8; 32] };
    w[16..32].copy_from_slice(&v.to_be_bytes());
    w
}

pub fn u256_word(v: U256) -> [u8; 32] {
    v.to_be_bytes::<32>()
}

pub fn bool_word(v: bool) -> [u8; 32] {
    let mut w = [0u8; 32];
    w[31] = v as u8;
    w
}

pub fn b32_word(v: FixedBytes<32>) -> [u8; 32] {
    v.0
}
