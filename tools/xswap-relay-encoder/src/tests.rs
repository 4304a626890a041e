#[cfg(test)]
mod tests {
    use crate::encoder::{decode_outcome_hex, encode_intent_hex, RetryRequest};
    use alloy_primitives::{address, Address, U256};
    use xswap_relay_types::codec::{decode_swap_intent, encode_swap_outcome, DecodeError, INTENT_LEN};
    use xswap_relay_types::{ExchangeMode, SwapIntent};

    fn intent() -> SwapIntent {
        SwapIntent {
            pool: address!("1111111111111111111111111111111111111111"),
            receiver: address!("2222222222222222222222222222222222222222"),
            mode: ExchangeMode::Direct,
            deadline: 1_800_000_000,
            leg_in: 0,
            leg_out: 1,
            min_out: U256::from(95u64),
        }
    }

    #[test]
    fn test_encode_intent_hex() {
        let encoded = encode_intent_hex(&intent());
        assert!(encoded.starts_with("0x"));
        // 2 for the prefix, two hex chars per payload byte.
        assert_eq!(encoded.len(), 2 + INTENT_LEN * 2);

        let bytes = hex::decode(&encoded[2..]).unwrap();
        assert_eq!(decode_swap_intent(&bytes).unwrap(), intent());
    }

    #[test]
    fn test_decode_outcome_hex() {
        let token = address!("3333333333333333333333333333333333333333");
        let amount = U256::from(97u64);
        let data = format!("0x{}", hex::encode(encode_swap_outcome(token, amount)));
        assert_eq!(decode_outcome_hex(&data).unwrap(), (token, amount));
    }

    #[test]
    fn test_retry_request_from_exec_failed() {
        let token = address!("00000000000000000000000000000000000000aa");
        let amount = U256::from(100u64);
        let payload = hex::decode(&encode_intent_hex(&intent())[2..]).unwrap();

        let req = RetryRequest::from_exec_failed(token, amount, payload.clone()).unwrap();
        assert_eq!(req.nominal_token, token);
        assert_eq!(req.nominal_amount, amount);
        assert_eq!(req.payload, payload);
        assert_eq!(req.intent, intent());
        assert_eq!(req.submitter(), intent().receiver);
    }

    #[test]
    fn test_retry_request_rejects_bad_payload() {
        let err = RetryRequest::from_exec_failed(Address::ZERO, U256::ZERO, vec![0u8; 10]);
        assert_eq!(err, Err(DecodeError::Truncated));
    }
}
