//! Raw ERC-20 and bridge-token helpers.
//!
//! Transfers and approvals tolerate non-standard tokens: a missing return
//! value counts as success (USDT-style), a returned `false` word counts as
//! failure.

use alloc::vec::Vec;

use stylus_sdk::{
    alloy_primitives::{Address, U256},
    stylus_core::{calls::context::Call, Host},
};

use crate::utils::abi::{address_word, selector, u256_word};

/// Gas allowance for balance/underlying staticcalls.
const VIEW_GAS_CAP: u64 = 100_000;

/// Errors during token calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    CallFailed,
    /// The token returned an explicit `false` word.
    Rejected,
    MalformedReturn,
}

/// Shared success check for `transfer`/`approve` style calls.
fn check_bool_return(out: &[u8]) -> Result<(), TokenError> {
    if !out.is_empty() && out.len() >= 32 && U256::from_be_slice(&out[0..32]) == U256::ZERO {
        return Err(TokenError::Rejected);
    }
    Ok(())
}

pub fn balance_of(vm: &dyn Host, token: Address, owner: Address) -> Result<U256, TokenError> {
    let mut data = Vec::with_capacity(4 + 32);
    data.extend_from_slice(&selector("balanceOf(address)"));
    data.extend_from_slice(&address_word(owner));

    let out = vm
        .static_call(&Call::new().gas(VIEW_GAS_CAP), token, &data)
        .map_err(|_| TokenError::CallFailed)?;
    if out.len() < 32 {
        return Err(TokenError::MalformedReturn);
    }
    Ok(U256::from_be_slice(&out[0..32]))
}

pub fn transfer(vm: &dyn Host, token: Address, to: Address, amount: U256) -> Result<(), TokenError> {
    let mut data = Vec::with_capacity(4 + 64);
    data.extend_from_slice(&selector("transfer(address,uint256)"));
    data.extend_from_slice(&address_word(to));
    data.extend_from_slice(&u256_word(amount));

    let out = vm
        .call(&Call::new(), token, &data)
        .map_err(|_| TokenError::CallFailed)?;
    check_bool_return(&out)
}

/// Grant `spender` an exact-amount allowance over this contract's tokens.
///
/// The venue consumes the whole allowance in the following exchange call, so
/// the allowance returns to zero and no reset-to-zero dance is needed for
/// strict tokens.
pub fn approve(vm: &dyn Host, token: Address, spender: Address, amount: U256) -> Result<(), TokenError> {
    let mut data = Vec::with_capacity(4 + 64);
    data.extend_from_slice(&selector("approve(address,uint256)"));
    data.extend_from_slice(&address_word(spender));
    data.extend_from_slice(&u256_word(amount));

    let out = vm
        .call(&Call::new(), token, &data)
        .map_err(|_| TokenError::CallFailed)?;
    check_bool_return(&out)
}

/// Canonical underlying settlement token of a bridge-wrapped nominal token.
///
/// Returns the zero address when the token reports none; a failing call is
/// also treated as "no underlying" by the caller.
pub fn underlying_of(vm: &dyn Host, token: Address) -> Result<Address, TokenError> {
    let data = selector("underlying()");

    let out = vm
        .static_call(&Call::new().gas(VIEW_GAS_CAP), token, &data)
        .map_err(|_| TokenError::CallFailed)?;
    if out.len() < 32 {
        return Err(TokenError::MalformedReturn);
    }
    Ok(Address::from_slice(&out[12..32]))
}
