use alloy_primitives::{Address, U256};

/// Errors during venue calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterError {
    /// Used by off-chain mocks or partially implemented adapters.
    NotImplemented,
    /// The underlying call failed (reverted, out of gas, no code).
    CallFailed,
    /// Return data was malformed or could not be decoded.
    MalformedReturn,
}

/// Fixed-shape interface over a liquidity venue, implemented differently
/// on-chain vs off-chain.
///
/// Index semantics (and the meaning of negative indices) belong to the venue;
/// the relay only passes them through.
pub trait PoolAdapter {
    /// Resolve a coin index to its token address.
    fn coin(&self, _index: i128) -> Result<Address, AdapterError> {
        Err(AdapterError::NotImplemented)
    }

    /// Resolve an underlying-coin index to its token address.
    fn underlying_coin(&self, _index: i128) -> Result<Address, AdapterError> {
        Err(AdapterError::NotImplemented)
    }

    /// Swap `dx` of coin `i` for at least `min_dy` of coin `j`; returns the
    /// proceeds.
    fn exchange(&mut self, _i: i128, _j: i128, _dx: U256, _min_dy: U256) -> Result<U256, AdapterError> {
        Err(AdapterError::NotImplemented)
    }

    /// Underlying-asset variant of [`PoolAdapter::exchange`].
    fn exchange_underlying(
        &mut self,
        _i: i128,
        _j: i128,
        _dx: U256,
        _min_dy: U256,
    ) -> Result<U256, AdapterError> {
        Err(AdapterError::NotImplemented)
    }
}
