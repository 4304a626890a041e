use alloy_primitives::{Address, U256};

use xswap_relay_types::codec::{decode_swap_intent, decode_swap_outcome, encode_swap_intent, DecodeError};
use xswap_relay_types::SwapIntent;

/// Encode an intent as the 0x-prefixed hex payload the message bus carries.
pub fn encode_intent_hex(intent: &SwapIntent) -> String {
    format!("0x{}", hex::encode(encode_swap_intent(intent)))
}

/// Decode a success result returned by `exec`.
pub fn decode_outcome_hex(data: &str) -> Result<(Address, U256), DecodeError> {
    let bytes = hex::decode(data.trim_start_matches("0x")).map_err(|_| DecodeError::Truncated)?;
    decode_swap_outcome(&bytes)
}

/// A recovery submission reconstructed from an observed
/// `ExecFailed(token, amount, payload)` signal.
///
/// `payload` is resubmitted verbatim so the relay re-derives the same intent
/// (and therefore the same receiver) that the failed execution used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryRequest {
    pub nominal_token: Address,
    pub nominal_amount: U256,
    pub payload: Vec<u8>,
    pub intent: SwapIntent,
}

impl RetryRequest {
    pub fn from_exec_failed(
        token: Address,
        amount: U256,
        payload: Vec<u8>,
    ) -> Result<Self, DecodeError> {
        let intent = decode_swap_intent(&payload)?;
        Ok(Self {
            nominal_token: token,
            nominal_amount: amount,
            payload,
            intent,
        })
    }

    /// The identity that must sign the `retryAndReconcile` call.
    pub fn submitter(&self) -> Address {
        self.intent.receiver
    }
}
