//! On-chain pool adapter speaking the Curve-style selector ABI.
//!
//! The venue is untrusted code; every call here can revert, return garbage, or
//! attempt to re-enter (re-entry is denied by the SDK). Views are gas-capped,
//! swap calls run with remaining gas since their cost is venue-defined.

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    stylus_core::{calls::context::Call, Host},
};

use xswap_relay_types::adapter::{AdapterError, PoolAdapter};

use crate::utils::abi::{int128_word, selector, u256_word};

/// Gas allowance for coin-resolution staticcalls.
const VIEW_GAS_CAP: u64 = 100_000;

pub struct CurvePoolAdapter<'a> {
    pub pool: Address,
    vm: &'a dyn Host,
}

impl<'a> CurvePoolAdapter<'a> {
    pub fn new(vm: &'a dyn Host, pool: Address) -> Self {
        Self { pool, vm }
    }

    fn coin_at(&self, signature: &str, index: i128) -> Result<Address, AdapterError> {
        let mut data = Vec::with_capacity(4 + 32);
        data.extend_from_slice(&selector(signature));
        data.extend_from_slice(&int128_word(index));

        let out = self
            .vm
            .static_call(&Call::new().gas(VIEW_GAS_CAP), self.pool, &data)
            .map_err(|_| AdapterError::CallFailed)?;
        if out.len() < 32 {
            return Err(AdapterError::MalformedReturn);
        }
        Ok(Address::from_slice(&out[12..32]))
    }

    fn exchange_call(
        &mut self,
        signature: &str,
        i: i128,
        j: i128,
        dx: U256,
        min_dy: U256,
    ) -> Result<U256, AdapterError> {
        let mut data = Vec::with_capacity(4 + 32 * 4);
        data.extend_from_slice(&selector(signature));
        data.extend_from_slice(&int128_word(i));
        data.extend_from_slice(&int128_word(j));
        data.extend_from_slice(&u256_word(dx));
        data.extend_from_slice(&u256_word(min_dy));

        let out = self
            .vm
            .call(&Call::new(), self.pool, &data)
            .map_err(|_| AdapterError::CallFailed)?;
        if out.len() < 32 {
            return Err(AdapterError::MalformedReturn);
        }
        Ok(U256::from_be_slice(&out[0..32]))
    }
}

impl PoolAdapter for CurvePoolAdapter<'_> {
    fn coin(&self, index: i128) -> Result<Address, AdapterError> {
        self.coin_at("coins(int128)", index)
    }

    fn underlying_coin(&self, index: i128) -> Result<Address, AdapterError> {
        self.coin_at("underlying_coins(int128)", index)
    }

    fn exchange(&mut self, i: i128, j: i128, dx: U256, min_dy: U256) -> Result<U256, AdapterError> {
        self.exchange_call("exchange(int128,int128,uint256,uint256)", i, j, dx, min_dy)
    }

    fn exchange_underlying(
        &mut self,
        i: i128,
        j: i128,
        dx: U256,
        min_dy: U256,
    ) -> Result<U256, AdapterError> {
        self.exchange_call(
            "exchange_underlying(int128,int128,uint256,uint256)",
            i,
            j,
            dx,
            min_dy,
        )
    }
}
