//! Custodial swap relay: the cross-domain message bus debits tokens into this
//! contract and calls `exec` with an opaque intent payload.
//!
//! Design notes:
//! - `exec` is the compensation boundary. Every business failure inside it is
//!   settled locally with a refund to the intent's receiver and reported as
//!   `(false, empty)`; the bus only sees a revert for protocol-level faults
//!   (bad caller, undecodable payload, a token that refuses transfers).
//! - `execute_swap` exists on the ABI for the self-call shape of the original
//!   protocol, but the isolation here is structural (a `Result` match inside
//!   `exec`); any external call to it is rejected.
//! - Recovery settles by measured balance delta, never by a router-declared
//!   amount: routers and bridge tokens may apply fees or rounding on transfer.

use alloc::vec;
use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes, U256},
    prelude::*,
    stylus_core::calls::context::Call,
};

use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

use xswap_relay_types::{
    codec::{decode_swap_intent, encode_swap_outcome},
    SwapIntent,
};

use crate::{
    adapter::CurvePoolAdapter,
    engine,
    errors::EngineError,
    utils::{
        abi::{address_word, b32_word, bool_word, selector, u256_word},
        token,
    },
};

sol! {
    error AlreadyInitialized();
    error Unauthorized();
    error Expired();
    error UnsupportedPool();
    error InvalidReceiver();
    error TokenMismatch();
    error InvalidOutputToken();
    error DirectCallForbidden();
    error MalformedPayload();
    error Forbidden();
    error UnsupportedRouter();
    error NoUnderlying();
    error BalanceReconciliationFailed();
    error AdapterCallFailed();
    error TokenCallFailed();
    error RouterCallFailed();

    event SwapExecuted(address pool, address receiver, address tokenOut, uint256 amountOut);
    /// Carries enough to let off-chain tooling reconstruct and resubmit the
    /// failed request through the recovery path.
    event ExecFailed(address token, uint256 amount, bytes payload);
    event PoolSupportUpdated(address pool, bool enabled);
    event RouterSupportUpdated(address router, bool enabled);
    event RecoveryReconciled(bytes32 replayId, address token, address receiver, uint256 amount);
    event MessageBusUpdated(address messageBus);
}

#[derive(SolidityError)]
pub enum RelayError {
    AlreadyInitialized(AlreadyInitialized),
    Unauthorized(Unauthorized),
    Expired(Expired),
    UnsupportedPool(UnsupportedPool),
    InvalidReceiver(InvalidReceiver),
    TokenMismatch(TokenMismatch),
    InvalidOutputToken(InvalidOutputToken),
    DirectCallForbidden(DirectCallForbidden),
    MalformedPayload(MalformedPayload),
    Forbidden(Forbidden),
    UnsupportedRouter(UnsupportedRouter),
    NoUnderlying(NoUnderlying),
    BalanceReconciliationFailed(BalanceReconciliationFailed),
    AdapterCallFailed(AdapterCallFailed),
    TokenCallFailed(TokenCallFailed),
    RouterCallFailed(RouterCallFailed),
}

sol_storage! {
    /// Relay storage. Token custody itself lives in the external token
    /// ledgers; the only durable state here is configuration.
    #[entrypoint]
    pub struct SwapRelay {
        /// Administrative principal; zero until `init`.
        address admin;

        /// Only identity allowed to call `exec`.
        address message_bus;

        /// Pools execution may touch, read on every call.
        mapping(address => bool) supported_pool;

        /// Routers trusted to replay failed deposits into this contract.
        mapping(address => bool) supported_router;
    }
}

#[public]
impl SwapRelay {
    /// One-shot initialisation; the deployer-side caller becomes admin.
    pub fn init(&mut self, message_bus: Address) -> Result<(), RelayError> {
        if self.admin.get() != Address::ZERO {
            return Err(RelayError::AlreadyInitialized(AlreadyInitialized {}));
        }
        self.admin.set(self.vm().msg_sender());
        self.message_bus.set(message_bus);
        Ok(())
    }

    pub fn admin(&self) -> Address {
        self.admin.get()
    }

    pub fn message_bus(&self) -> Address {
        self.message_bus.get()
    }

    pub fn is_pool_supported(&self, pool: Address) -> bool {
        self.supported_pool.get(pool)
    }

    pub fn is_router_supported(&self, router: Address) -> bool {
        self.supported_router.get(router)
    }

    /// Idempotent bulk flip of the pool allowlist.
    pub fn set_supported_pools(&mut self, pools: Vec<Address>, enabled: bool) -> Result<(), RelayError> {
        self.ensure_admin()?;
        for pool in pools {
            self.supported_pool.insert(pool, enabled);
            log(self.vm(), PoolSupportUpdated { pool, enabled });
        }
        Ok(())
    }

    /// Idempotent bulk flip of the recovery-router allowlist.
    pub fn set_supported_routers(
        &mut self,
        routers: Vec<Address>,
        enabled: bool,
    ) -> Result<(), RelayError> {
        self.ensure_admin()?;
        for router in routers {
            self.supported_router.insert(router, enabled);
            log(self.vm(), RouterSupportUpdated { router, enabled });
        }
        Ok(())
    }

    pub fn set_message_bus(&mut self, message_bus: Address) -> Result<(), RelayError> {
        self.ensure_admin()?;
        self.message_bus.set(message_bus);
        log(self.vm(), MessageBusUpdated {
            messageBus: message_bus,
        });
        Ok(())
    }

    /// Message-bus entry point: swap the deposited tokens per the payload.
    ///
    /// Always returns a settled `(success, result)` pair for business
    /// outcomes. On success the result is `tokenOut || amountOut`; on failure
    /// the deposit has already been refunded to the intent's receiver and the
    /// result is empty. The one business failure that reverts instead is an
    /// undecodable payload, since it names no receiver to refund to.
    pub fn exec(
        &mut self,
        token: Address,
        amount: U256,
        payload: Vec<u8>,
    ) -> Result<(bool, Vec<u8>), RelayError> {
        if self.vm().msg_sender() != self.message_bus.get() {
            return Err(RelayError::Unauthorized(Unauthorized {}));
        }
        let intent = decode_swap_intent(&payload)
            .map_err(|_| RelayError::MalformedPayload(MalformedPayload {}))?;

        // Structural isolation boundary. No state of ours mutates before the
        // venue call, and a reverting venue call leaves no venue state either,
        // so a refund fully settles any `Err` from the engine.
        match self.execute_swap_inner(token, amount, &intent) {
            Ok((token_out, amount_out)) => {
                // A proceeds transfer that fails after the swap went through
                // cannot be compensated without corrupting custody; revert the
                // whole invocation instead.
                token::transfer(self.vm(), token_out, intent.receiver, amount_out)
                    .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?;
                log(self.vm(), SwapExecuted {
                    pool: intent.pool,
                    receiver: intent.receiver,
                    tokenOut: token_out,
                    amountOut: amount_out,
                });
                Ok((true, encode_swap_outcome(token_out, amount_out)))
            }
            Err(_) => {
                token::transfer(self.vm(), token, intent.receiver, amount)
                    .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?;
                log(self.vm(), ExecFailed {
                    token,
                    amount,
                    payload: payload.into(),
                });
                Ok((false, Vec::new()))
            }
        }
    }

    /// ABI twin of the risky sub-operation.
    ///
    /// The only legitimate caller is this contract acting on a bus request,
    /// and since the SDK denies re-entry an external self-call cannot occur:
    /// every direct call is rejected. `exec` reaches the same logic through
    /// the internal function.
    pub fn execute_swap(
        &mut self,
        token: Address,
        amount: U256,
        payload: Vec<u8>,
    ) -> Result<(Address, U256), RelayError> {
        if self.vm().msg_sender() != self.vm().contract_address() {
            return Err(RelayError::DirectCallForbidden(DirectCallForbidden {}));
        }
        let intent = decode_swap_intent(&payload)
            .map_err(|_| RelayError::MalformedPayload(MalformedPayload {}))?;
        let (token_out, amount_out) = self
            .execute_swap_inner(token, amount, &intent)
            .map_err(raise)?;
        token::transfer(self.vm(), token_out, intent.receiver, amount_out)
            .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?;
        Ok((token_out, amount_out))
    }

    /// Replay a failed cross-domain deposit through an allowlisted router and
    /// reconcile what actually arrived.
    ///
    /// With `skip_execution` the router only returns funds: the credited
    /// amount is measured as a balance delta bounded by the nominal deposit
    /// and forwarded to the intent's receiver. Without it the router drives
    /// the funds back through the normal execution path and nothing further
    /// happens here. All failures on this path revert; a delta outside
    /// `[0, nominal]` means the measured funds cannot be trusted, so no
    /// partial refund is attempted.
    pub fn retry_and_reconcile(
        &mut self,
        router: Address,
        replay_id: FixedBytes<32>,
        nominal_token: Address,
        nominal_amount: U256,
        payload: Vec<u8>,
        skip_execution: bool,
    ) -> Result<(), RelayError> {
        if !self.supported_router.get(router) {
            return Err(RelayError::UnsupportedRouter(UnsupportedRouter {}));
        }
        let intent = decode_swap_intent(&payload)
            .map_err(|_| RelayError::MalformedPayload(MalformedPayload {}))?;
        if self.vm().msg_sender() != intent.receiver {
            return Err(RelayError::Forbidden(Forbidden {}));
        }

        let underlying = match token::underlying_of(self.vm(), nominal_token) {
            Ok(addr) if addr != Address::ZERO => addr,
            _ => return Err(RelayError::NoUnderlying(NoUnderlying {})),
        };

        let this = self.vm().contract_address();

        // Snapshot strictly precedes the replay call; call-at-a-time
        // execution plus denied re-entry keeps custody untouched in between.
        let before = if skip_execution {
            token::balance_of(self.vm(), underlying, this)
                .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?
        } else {
            U256::ZERO
        };

        self.call_router(router, replay_id, nominal_token, nominal_amount, this, skip_execution)?;

        if skip_execution {
            let after = token::balance_of(self.vm(), underlying, this)
                .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?;
            let delta = engine::reconcile_delta(before, after, nominal_amount)
                .map_err(|_| RelayError::BalanceReconciliationFailed(BalanceReconciliationFailed {}))?;
            if delta > U256::ZERO {
                token::transfer(self.vm(), underlying, intent.receiver, delta)
                    .map_err(|_| RelayError::TokenCallFailed(TokenCallFailed {}))?;
            }
            log(self.vm(), RecoveryReconciled {
                replayId: replay_id,
                token: underlying,
                receiver: intent.receiver,
                amount: delta,
            });
        }

        Ok(())
    }
}

impl SwapRelay {
    fn ensure_admin(&self) -> Result<(), RelayError> {
        if self.vm().msg_sender() != self.admin.get() {
            return Err(RelayError::Unauthorized(Unauthorized {}));
        }
        Ok(())
    }

    /// Validation, leg resolution, and the venue swap. Returns
    /// `(token_out, amount_out)`; forwarding proceeds stays with the caller.
    fn execute_swap_inner(
        &mut self,
        token: Address,
        amount: U256,
        intent: &SwapIntent,
    ) -> Result<(Address, U256), EngineError> {
        engine::check_intent(
            self.vm().block_timestamp(),
            self.supported_pool.get(intent.pool),
            intent,
        )?;
        let mut adapter = CurvePoolAdapter::new(self.vm(), intent.pool);
        let (src, dst) = engine::resolve_legs(&adapter, intent, token)?;
        // The venue pulls the input leg via transferFrom; grant it exactly
        // this swap's amount first.
        token::approve(self.vm(), src, intent.pool, amount).map_err(|_| EngineError::ApprovalFailed)?;
        let amount_out = engine::swap(&mut adapter, intent, amount)?;
        Ok((dst, amount_out))
    }

    /// `router.retryDeposit(replayId, token, amount, recipient, skipExecution)`
    /// with this contract as the fund recipient.
    fn call_router(
        &mut self,
        router: Address,
        replay_id: FixedBytes<32>,
        nominal_token: Address,
        nominal_amount: U256,
        recipient: Address,
        skip_execution: bool,
    ) -> Result<(), RelayError> {
        let mut data = Vec::with_capacity(4 + 32 * 5);
        data.extend_from_slice(&selector(
            "retryDeposit(bytes32,address,uint256,address,bool)",
        ));
        data.extend_from_slice(&b32_word(replay_id));
        data.extend_from_slice(&address_word(nominal_token));
        data.extend_from_slice(&u256_word(nominal_amount));
        data.extend_from_slice(&address_word(recipient));
        data.extend_from_slice(&bool_word(skip_execution));

        self.vm()
            .call(&Call::new(), router, &data)
            .map_err(|_| RelayError::RouterCallFailed(RouterCallFailed {}))?;
        Ok(())
    }
}


/// Translate an engine failure for the raising (non-compensated) paths.
fn raise(e: EngineError) -> RelayError {
    match e {
        EngineError::Expired => RelayError::Expired(Expired {}),
        EngineError::UnsupportedPool => RelayError::UnsupportedPool(UnsupportedPool {}),
        EngineError::InvalidReceiver => RelayError::InvalidReceiver(InvalidReceiver {}),
        EngineError::TokenMismatch => RelayError::TokenMismatch(TokenMismatch {}),
        EngineError::InvalidOutputToken => RelayError::InvalidOutputToken(InvalidOutputToken {}),
        EngineError::Adapter(_) => RelayError::AdapterCallFailed(AdapterCallFailed {}),
        EngineError::ApprovalFailed => RelayError::TokenCallFailed(TokenCallFailed {}),
        EngineError::BalanceOutOfBounds => {
            RelayError::BalanceReconciliationFailed(BalanceReconciliationFailed {})
        }
    }
}
