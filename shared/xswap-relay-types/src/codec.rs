//! Wire codec for swap intents and execution outcomes.
//!
//! Layout is fixed-order big-endian with no framing:
//!
//! ```text
//! address pool      (20)
//! address receiver  (20)
//! u8      mode      (1)
//! u64     deadline  (8)
//! i128    leg_in    (16)
//! i128    leg_out   (16)
//! u256    min_out   (32)
//! ```
//!
//! `encode_swap_intent` performs no validation; `decode_swap_intent` is its
//! exact inverse and rejects anything that is not a well-formed 125-byte
//! payload.

use alloc::vec::Vec;

use alloy_primitives::{Address, U256};

use crate::intent::{ExchangeMode, SwapIntent};

/// Total size of an encoded [`SwapIntent`].
pub const INTENT_LEN: usize = 20 + 20 + 1 + 8 + 16 + 16 + 32;

/// Total size of an encoded success outcome (`token || amount`).
pub const OUTCOME_LEN: usize = 20 + 32;

/// Errors during payload decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    Truncated,
    TrailingBytes,
    UnknownMode(u8),
}

pub fn encode_swap_intent(intent: &SwapIntent) -> Vec<u8> {
    let mut buf = Vec::with_capacity(INTENT_LEN);
    buf.extend_from_slice(intent.pool.as_slice());
    buf.extend_from_slice(intent.receiver.as_slice());
    buf.push(intent.mode as u8);
    buf.extend_from_slice(&intent.deadline.to_be_bytes());
    buf.extend_from_slice(&intent.leg_in.to_be_bytes());
    buf.extend_from_slice(&intent.leg_out.to_be_bytes());
    buf.extend_from_slice(&intent.min_out.to_be_bytes::<32>());
    buf
}

pub fn decode_swap_intent(bytes: &[u8]) -> Result<SwapIntent, DecodeError> {
    let mut i = 0usize;

    let pool = read_address(bytes, &mut i)?;
    let receiver = read_address(bytes, &mut i)?;
    let mode_byte = read_u8(bytes, &mut i)?;
    let mode = ExchangeMode::try_from(mode_byte).map_err(DecodeError::UnknownMode)?;
    let deadline = read_u64_be(bytes, &mut i)?;
    let leg_in = read_i128_be(bytes, &mut i)?;
    let leg_out = read_i128_be(bytes, &mut i)?;
    let min_out = read_u256_be(bytes, &mut i)?;

    if i != bytes.len() {
        return Err(DecodeError::TrailingBytes);
    }

    Ok(SwapIntent {
        pool,
        receiver,
        mode,
        deadline,
        leg_in,
        leg_out,
        min_out,
    })
}

/// Encode a success outcome as returned by `exec`.
pub fn encode_swap_outcome(token: Address, amount: U256) -> Vec<u8> {
    let mut buf = Vec::with_capacity(OUTCOME_LEN);
    buf.extend_from_slice(token.as_slice());
    buf.extend_from_slice(&amount.to_be_bytes::<32>());
    buf
}

/// Inverse of [`encode_swap_outcome`], used by off-chain tooling.
pub fn decode_swap_outcome(bytes: &[u8]) -> Result<(Address, U256), DecodeError> {
    let mut i = 0usize;
    let token = read_address(bytes, &mut i)?;
    let amount = read_u256_be(bytes, &mut i)?;
    if i != bytes.len() {
        return Err(DecodeError::TrailingBytes);
    }
    Ok((token, amount))
}

fn read_u8(bytes: &[u8], i: &mut usize) -> Result<u8, DecodeError> {
    if bytes.len() <= *i {
        return Err(DecodeError::Truncated);
    }
    let b = bytes[*i];
    *i += 1;
    Ok(b)
}

fn read_u64_be(bytes: &[u8], i: &mut usize) -> Result<u64, DecodeError> {
    if bytes.len() < *i + 8 {
        return Err(DecodeError::Truncated);
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&bytes[*i..*i + 8]);
    *i += 8;
    Ok(u64::from_be_bytes(buf))
}

fn read_i128_be(bytes: &[u8], i: &mut usize) -> Result<i128, DecodeError> {
    if bytes.len() < *i + 16 {
        return Err(DecodeError::Truncated);
    }
    let mut buf = [0u8; 16];
    buf.copy_from_slice(&bytes[*i..*i + 16]);
    *i += 16;
    Ok(i128::from_be_bytes(buf))
}

fn read_u256_be(bytes: &[u8], i: &mut usize) -> Result<U256, DecodeError> {
    if bytes.len() < *i + 32 {
        return Err(DecodeError::Truncated);
    }
    let out = U256::from_be_slice(&bytes[*i..*i + 32]);
    *i += 32;
    Ok(out)
}

fn read_address(bytes: &[u8], i: &mut usize) -> Result<Address, DecodeError> {
    if bytes.len() < *i + 20 {
        return Err(DecodeError::Truncated);
    }
    let addr = Address::from_slice(&bytes[*i..*i + 20]);
    *i += 20;
    Ok(addr)
}
