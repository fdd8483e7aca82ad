//! Execute handlers for the optimistic verifier.
//!
//! - `claim` - SubmitClaim, Finalize, ConsumeFinalized
//! - `challenge` - Challenge, ResolveChallenge
//! - `config` - wiring and parameter updates

mod challenge;
mod claim;
mod config;

pub use challenge::*;
pub use claim::*;
pub use config::*;

use cosmwasm_std::{Addr, BankMsg, Coin, CosmosMsg, MessageInfo, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{Claim, AUTHORIZED_CALLERS, CLAIMS};

pub(crate) fn load_claim(storage: &dyn Storage, claim_id: u64) -> Result<Claim, ContractError> {
    CLAIMS
        .may_load(storage, claim_id)?
        .ok_or(ContractError::ClaimNotFound { claim_id })
}

pub(crate) fn is_authorized(storage: &dyn Storage, caller: &Addr) -> Result<bool, ContractError> {
    Ok(AUTHORIZED_CALLERS
        .may_load(storage, caller)?
        .unwrap_or(false))
}

/// Take `required` of `denom` from the attached funds.
///
/// Returns the refund of everything else attached, if any.
pub(crate) fn take_bond(
    info: &MessageInfo,
    denom: &str,
    required: Uint128,
) -> Result<Option<CosmosMsg>, ContractError> {
    let provided: Uint128 = info
        .funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum();
    if provided < required {
        return Err(ContractError::InsufficientBond {
            required,
            provided,
            denom: denom.to_string(),
        });
    }

    let mut refund: Vec<Coin> = info
        .funds
        .iter()
        .filter(|c| c.denom != denom && !c.amount.is_zero())
        .cloned()
        .collect();
    let excess = provided - required;
    if !excess.is_zero() {
        refund.push(Coin {
            denom: denom.to_string(),
            amount: excess,
        });
    }

    if refund.is_empty() {
        return Ok(None);
    }
    Ok(Some(CosmosMsg::Bank(BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: refund,
    })))
}

/// Bank transfer of `amount`, or nothing for a zero amount.
pub(crate) fn payout(to: &Addr, denom: &str, amount: Uint128) -> Option<CosmosMsg> {
    if amount.is_zero() {
        return None;
    }
    Some(CosmosMsg::Bank(BankMsg::Send {
        to_address: to.to_string(),
        amount: vec![Coin {
            denom: denom.to_string(),
            amount,
        }],
    }))
}
