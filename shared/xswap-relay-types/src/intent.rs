use alloy_primitives::{Address, U256};

/// Which pair of venue entry points a swap uses.
///
/// `Direct` trades pool coins by index; `Underlying` trades the underlying
/// assets of wrapped/interest-bearing pool coins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExchangeMode {
    Direct = 0,
    Underlying = 1,
}

impl TryFrom<u8> for ExchangeMode {
    type Error = u8;

    fn try_from(b: u8) -> Result<Self, u8> {
        match b {
            0 => Ok(ExchangeMode::Direct),
            1 => Ok(ExchangeMode::Underlying),
            other => Err(other),
        }
    }
}

/// Decoded swap instruction carried by the messaging layer.
///
/// Immutable once decoded; the engine only reads it. Leg indices are signed
/// (Curve-style `int128`) and their sign is venue metadata that must survive
/// encode/decode bit-for-bit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapIntent {
    /// Target venue. Must be allowlisted at execution time.
    pub pool: Address,
    /// Sole principal entitled to proceeds, refunds, and recovery. Non-zero.
    pub receiver: Address,
    pub mode: ExchangeMode,
    /// Unix-seconds deadline; the intent is invalid once `now > deadline`.
    pub deadline: u64,
    pub leg_in: i128,
    pub leg_out: i128,
    /// Minimum acceptable proceeds, enforced by the venue.
    pub min_out: U256,
}
