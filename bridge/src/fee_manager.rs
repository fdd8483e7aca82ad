//! Fee Manager Module
//!
//! Withdrawals pay a flat basis-point fee to the fee recipient. Deposits lock
//! the full amount.
//!
//! | Setting       | Range            |
//! |---------------|------------------|
//! | `fee_bps`     | 0-1% (0-100 bps) |

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Maximum fee in basis points (1% = 100 bps)
pub const MAX_FEE_BPS: u64 = 100;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10000;

// ============================================================================
// Data Structures
// ============================================================================

/// Fee configuration parameters
#[cw_serde]
pub struct FeeConfig {
    /// Withdrawal fee in basis points
    pub fee_bps: u64,
    /// Address to receive collected fees
    pub fee_recipient: Addr,
}

impl FeeConfig {
    pub fn validate(&self) -> Result<(), ContractError> {
        validate_fee_bps(self.fee_bps)
    }

    /// Split a gross amount into `(net, fee)`.
    pub fn split(&self, amount: Uint128) -> (Uint128, Uint128) {
        let fee = calculate_fee_from_bps(amount, self.fee_bps);
        (calculate_net_amount(amount, self.fee_bps), fee)
    }
}

// ============================================================================
// Storage
// ============================================================================

pub const FEE_CONFIG: Item<FeeConfig> = Item::new("fee_config");

// ============================================================================
// Helper Functions
// ============================================================================

/// Calculate fee amount from amount and bps
pub fn calculate_fee_from_bps(amount: Uint128, fee_bps: u64) -> Uint128 {
    amount.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}

/// Calculate net amount after fee deduction
pub fn calculate_net_amount(amount: Uint128, fee_bps: u64) -> Uint128 {
    let fee = calculate_fee_from_bps(amount, fee_bps);
    amount.checked_sub(fee).unwrap_or(Uint128::zero())
}

pub fn validate_fee_bps(fee_bps: u64) -> Result<(), ContractError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(ContractError::InvalidFee {
            bps: fee_bps,
            max_bps: MAX_FEE_BPS,
        });
    }
    Ok(())
}
