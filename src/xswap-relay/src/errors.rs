use xswap_relay_types::adapter::AdapterError;

/// Failures raised by the execution engine's validation and swap path.
///
/// These stay as plain Rust values inside the compensation boundary; only the
/// raising paths (direct ABI calls, recovery) translate them into Solidity
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    Expired,
    UnsupportedPool,
    InvalidReceiver,
    TokenMismatch,
    InvalidOutputToken,
    /// The venue call itself failed (revert, bad return data).
    Adapter(AdapterError),
    /// The deposited token refused the venue allowance.
    ApprovalFailed,
    /// Measured balance delta fell outside `[0, nominal]`.
    BalanceOutOfBounds,
}

impl From<AdapterError> for EngineError {
    fn from(e: AdapterError) -> Self {
        EngineError::Adapter(e)
    }
}
