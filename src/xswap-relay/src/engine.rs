//! Pure execution-engine logic: intent validation, leg resolution, swap
//! dispatch, and the recovery reconciliation bound.
//!
//! Everything here is deterministic over its arguments so the risk-bearing
//! decisions can be tested without a chain; the contract supplies the
//! timestamp, allowlist lookups, and the on-chain adapter.

use stylus_sdk::alloy_primitives::{Address, U256};

use xswap_relay_types::{ExchangeMode, PoolAdapter, SwapIntent};

use crate::errors::EngineError;

/// Validate an intent before any external call.
///
/// Checks run in a fixed order, each with a distinct rejection:
/// deadline, pool allowlist, receiver.
pub fn check_intent(now: u64, pool_supported: bool, intent: &SwapIntent) -> Result<(), EngineError> {
    if intent.deadline < now {
        return Err(EngineError::Expired);
    }
    if !pool_supported {
        return Err(EngineError::UnsupportedPool);
    }
    if intent.receiver == Address::ZERO {
        return Err(EngineError::InvalidReceiver);
    }
    Ok(())
}

/// Resolve the intent's token legs to `(src, dst)` addresses.
///
/// The exchange mode selects which resolver the venue exposes for the leg
/// indices; `deposited` must match the resolved source leg, which stops a
/// caller from mislabelling which token was actually deposited.
pub fn resolve_legs<A: PoolAdapter>(
    adapter: &A,
    intent: &SwapIntent,
    deposited: Address,
) -> Result<(Address, Address), EngineError> {
    let (src, dst) = match intent.mode {
        ExchangeMode::Direct => (adapter.coin(intent.leg_in)?, adapter.coin(intent.leg_out)?),
        ExchangeMode::Underlying => (
            adapter.underlying_coin(intent.leg_in)?,
            adapter.underlying_coin(intent.leg_out)?,
        ),
    };
    if src != deposited {
        return Err(EngineError::TokenMismatch);
    }
    if dst == Address::ZERO {
        return Err(EngineError::InvalidOutputToken);
    }
    Ok((src, dst))
}

/// Dispatch the mode-selected exchange entry point; returns the proceeds.
pub fn swap<A: PoolAdapter>(
    adapter: &mut A,
    intent: &SwapIntent,
    amount: U256,
) -> Result<U256, EngineError> {
    let out = match intent.mode {
        ExchangeMode::Direct => {
            adapter.exchange(intent.leg_in, intent.leg_out, amount, intent.min_out)?
        }
        ExchangeMode::Underlying => {
            adapter.exchange_underlying(intent.leg_in, intent.leg_out, amount, intent.min_out)?
        }
    };
    Ok(out)
}

/// Bounded balance-delta reconciliation.
///
/// After an external call that should have credited at most `nominal` of a
/// token, the only trustworthy measure of what arrived is
/// `after - before`. Anything outside `[0, nominal]` means the counterparty
/// misbehaved (or the token rebased adversarially) and the amount cannot be
/// trusted at all.
pub fn reconcile_delta(before: U256, after: U256, nominal: U256) -> Result<U256, EngineError> {
    if after < before {
        return Err(EngineError::BalanceOutOfBounds);
    }
    let delta = after - before;
    if delta > nominal {
        return Err(EngineError::BalanceOutOfBounds);
    }
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use xswap_relay_types::AdapterError;

    const TOKEN_A: Address = address!("00000000000000000000000000000000000000aa");
    const TOKEN_B: Address = address!("00000000000000000000000000000000000000bb");
    const WRAPPED_A: Address = address!("0000000000000000000000000000000000000a0a");
    const WRAPPED_B: Address = address!("0000000000000000000000000000000000000b0b");
    const RECEIVER: Address = address!("00000000000000000000000000000000000000ee");

    /// Two-coin pool: coins are wrapped tokens, underlying coins are the bare
    /// tokens. `exchange*` pays out 97% of the input.
    struct MockPool {
        fail_exchange: bool,
        last_call: Option<(&'static str, i128, i128, U256, U256)>,
    }

    impl MockPool {
        fn new() -> Self {
            Self {
                fail_exchange: false,
                last_call: None,
            }
        }
    }

    impl PoolAdapter for MockPool {
        fn coin(&self, index: i128) -> Result<Address, AdapterError> {
            match index {
                0 => Ok(WRAPPED_A),
                1 => Ok(WRAPPED_B),
                2 => Ok(Address::ZERO),
                _ => Err(AdapterError::CallFailed),
            }
        }

        fn underlying_coin(&self, index: i128) -> Result<Address, AdapterError> {
            match index {
                0 => Ok(TOKEN_A),
                1 => Ok(TOKEN_B),
                _ => Err(AdapterError::CallFailed),
            }
        }

        fn exchange(&mut self, i: i128, j: i128, dx: U256, min_dy: U256) -> Result<U256, AdapterError> {
            if self.fail_exchange {
                return Err(AdapterError::CallFailed);
            }
            self.last_call = Some(("exchange", i, j, dx, min_dy));
            Ok(dx * U256::from(97u64) / U256::from(100u64))
        }

        fn exchange_underlying(
            &mut self,
            i: i128,
            j: i128,
            dx: U256,
            min_dy: U256,
        ) -> Result<U256, AdapterError> {
            if self.fail_exchange {
                return Err(AdapterError::CallFailed);
            }
            self.last_call = Some(("exchange_underlying", i, j, dx, min_dy));
            Ok(dx * U256::from(97u64) / U256::from(100u64))
        }
    }

    fn intent(mode: ExchangeMode) -> SwapIntent {
        SwapIntent {
            pool: address!("0000000000000000000000000000000000000cc0"),
            receiver: RECEIVER,
            mode,
            deadline: 1_000,
            leg_in: 0,
            leg_out: 1,
            min_out: U256::from(95u64),
        }
    }

    #[test]
    fn deadline_boundary() {
        let i = intent(ExchangeMode::Direct);
        // deadline == now is still valid; one second past is not.
        assert_eq!(check_intent(1_000, true, &i), Ok(()));
        assert_eq!(check_intent(1_001, true, &i), Err(EngineError::Expired));
    }

    #[test]
    fn unsupported_pool_rejected_after_deadline() {
        let i = intent(ExchangeMode::Direct);
        assert_eq!(check_intent(999, false, &i), Err(EngineError::UnsupportedPool));
        // Deadline is checked first even when the pool is also unsupported.
        assert_eq!(check_intent(1_001, false, &i), Err(EngineError::Expired));
    }

    #[test]
    fn zero_receiver_rejected() {
        let mut i = intent(ExchangeMode::Direct);
        i.receiver = Address::ZERO;
        assert_eq!(check_intent(0, true, &i), Err(EngineError::InvalidReceiver));
    }

    #[test]
    fn direct_mode_resolves_pool_coins() {
        let pool = MockPool::new();
        let i = intent(ExchangeMode::Direct);
        let legs = resolve_legs(&pool, &i, WRAPPED_A).unwrap();
        assert_eq!(legs, (WRAPPED_A, WRAPPED_B));
    }

    #[test]
    fn underlying_mode_resolves_underlying_coins() {
        let pool = MockPool::new();
        let i = intent(ExchangeMode::Underlying);
        let legs = resolve_legs(&pool, &i, TOKEN_A).unwrap();
        assert_eq!(legs, (TOKEN_A, TOKEN_B));
    }

    #[test]
    fn deposited_token_mismatch_rejected() {
        let pool = MockPool::new();
        let i = intent(ExchangeMode::Underlying);
        // Caller claims TOKEN_B was deposited but leg 0 resolves to TOKEN_A.
        assert_eq!(
            resolve_legs(&pool, &i, TOKEN_B),
            Err(EngineError::TokenMismatch)
        );
    }

    #[test]
    fn zero_output_leg_rejected() {
        let pool = MockPool::new();
        let mut i = intent(ExchangeMode::Direct);
        i.leg_out = 2;
        assert_eq!(
            resolve_legs(&pool, &i, WRAPPED_A),
            Err(EngineError::InvalidOutputToken)
        );
    }

    #[test]
    fn unresolvable_leg_surfaces_adapter_error() {
        let pool = MockPool::new();
        let mut i = intent(ExchangeMode::Direct);
        i.leg_in = 9;
        assert_eq!(
            resolve_legs(&pool, &i, WRAPPED_A),
            Err(EngineError::Adapter(AdapterError::CallFailed))
        );
    }

    #[test]
    fn swap_dispatches_by_mode() {
        let mut pool = MockPool::new();
        let out = swap(&mut pool, &intent(ExchangeMode::Direct), U256::from(100u64)).unwrap();
        assert_eq!(out, U256::from(97u64));
        assert_eq!(
            pool.last_call,
            Some(("exchange", 0, 1, U256::from(100u64), U256::from(95u64)))
        );

        let out = swap(&mut pool, &intent(ExchangeMode::Underlying), U256::from(200u64)).unwrap();
        assert_eq!(out, U256::from(194u64));
        assert_eq!(
            pool.last_call,
            Some(("exchange_underlying", 0, 1, U256::from(200u64), U256::from(95u64)))
        );
    }

    #[test]
    fn swap_failure_propagates() {
        let mut pool = MockPool::new();
        pool.fail_exchange = true;
        assert_eq!(
            swap(&mut pool, &intent(ExchangeMode::Direct), U256::from(100u64)),
            Err(EngineError::Adapter(AdapterError::CallFailed))
        );
    }

    #[test]
    fn reconcile_within_bounds() {
        let before = U256::from(1_000u64);
        let nominal = U256::from(50u64);
        // Zero delta (replay delivered nothing, balance intact) is accepted.
        assert_eq!(reconcile_delta(before, before, nominal), Ok(U256::ZERO));
        // Partial delivery (fee-on-transfer token) is accepted.
        assert_eq!(
            reconcile_delta(before, U256::from(1_030u64), nominal),
            Ok(U256::from(30u64))
        );
        // Exactly the nominal amount is the inclusive ceiling.
        assert_eq!(
            reconcile_delta(before, U256::from(1_050u64), nominal),
            Ok(U256::from(50u64))
        );
    }

    #[test]
    fn reconcile_rejects_out_of_bounds() {
        let before = U256::from(1_000u64);
        let nominal = U256::from(50u64);
        // Balance shrank across the replay.
        assert_eq!(
            reconcile_delta(before, U256::from(999u64), nominal),
            Err(EngineError::BalanceOutOfBounds)
        );
        // Router claims to have delivered more than the nominal deposit.
        assert_eq!(
            reconcile_delta(before, U256::from(1_051u64), nominal),
            Err(EngineError::BalanceOutOfBounds)
        );
    }
}
