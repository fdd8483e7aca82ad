//! State definitions for the validator contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

use crate::error::ContractError;

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-validator";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest signer set this deployment accepts
pub const MIN_SIGNERS: usize = 3;

#[cw_serde]
pub struct Config {
    /// Governance address allowed to replace the signer set
    pub admin: Addr,
}

/// Ordered, duplicate-free signer addresses plus the approval threshold.
#[cw_serde]
pub struct SignerSet {
    pub signers: Vec<[u8; 20]>,
    pub threshold: u32,
}

impl SignerSet {
    /// Build a signer set, enforcing size, uniqueness and threshold bounds.
    pub fn new(signers: Vec<[u8; 20]>, threshold: u32) -> Result<Self, ContractError> {
        if signers.len() < MIN_SIGNERS {
            return Err(ContractError::InvalidSignerSet {
                reason: format!(
                    "at least {} signers required, got {}",
                    MIN_SIGNERS,
                    signers.len()
                ),
            });
        }

        for (i, signer) in signers.iter().enumerate() {
            if signers[..i].contains(signer) {
                return Err(ContractError::InvalidSignerSet {
                    reason: format!("duplicate signer 0x{}", hex::encode(signer)),
                });
            }
        }

        if threshold == 0 || threshold as usize > signers.len() {
            return Err(ContractError::InvalidThreshold {
                threshold,
                signers: signers.len() as u32,
            });
        }

        Ok(Self { signers, threshold })
    }

    pub fn contains(&self, signer: &[u8; 20]) -> bool {
        self.signers.contains(signer)
    }

    pub fn len(&self) -> usize {
        self.signers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

pub const SIGNER_SET: Item<SignerSet> = Item::new("signer_set");
