//! Threshold attestation check.
//!
//! [`verify_attestation`] is a pure function over
//! `(signer set, message hash, signatures, recovery)`. The recovery primitive
//! is injected so the state machine does not depend on a particular curve.

use cosmwasm_std::{Api, Binary};
use thiserror::Error;

use common::hash::{eth_signed_message_hash, evm_address_from_pubkey, evm_address_to_hex};

use crate::state::SignerSet;

/// Upper bound on signatures accepted in one attestation.
pub const MAX_ATTESTATION_SIGNATURES: usize = 64;

#[derive(Error, Debug, PartialEq)]
pub enum AttestationError {
    #[error("malformed signature at index {index}: {reason}")]
    MalformedSignature { index: usize, reason: String },

    #[error("duplicate signer {signer}")]
    DuplicateSigner { signer: String },

    #[error("too many signatures: {got} (max {max})")]
    TooManySignatures { got: usize, max: usize },

    #[error("insufficient signatures: got {got}, need {required}")]
    InsufficientSignatures { got: u32, required: u32 },
}

/// Recovers the signer address behind a signature over `digest`.
pub trait SignerRecovery {
    fn recover_signer(&self, digest: &[u8; 32], signature: &[u8]) -> Result<[u8; 20], String>;
}

/// secp256k1 recovery through the chain's crypto API.
///
/// Signatures are 65 bytes `r || s || v` with `v` in `{0, 1, 27, 28}`.
pub struct ApiRecovery<'a> {
    api: &'a dyn Api,
}

impl<'a> ApiRecovery<'a> {
    pub fn new(api: &'a dyn Api) -> Self {
        Self { api }
    }
}

impl SignerRecovery for ApiRecovery<'_> {
    fn recover_signer(&self, digest: &[u8; 32], signature: &[u8]) -> Result<[u8; 20], String> {
        if signature.len() != 65 {
            return Err(format!("expected 65 bytes, got {}", signature.len()));
        }
        let recovery_param = match signature[64] {
            0 | 1 => signature[64],
            27 | 28 => signature[64] - 27,
            v => return Err(format!("invalid recovery id {}", v)),
        };
        let pubkey = self
            .api
            .secp256k1_recover_pubkey(digest, &signature[..64], recovery_param)
            .map_err(|e| e.to_string())?;
        evm_address_from_pubkey(&pubkey).map_err(|e| e.to_string())
    }
}

/// Check that `signatures` over `message_hash` come from at least
/// `set.threshold` distinct members of `set`.
///
/// Signatures from non-members are ignored. A member signing twice fails the
/// whole attestation. Returns the counted signers in signature order.
pub fn verify_attestation<R: SignerRecovery + ?Sized>(
    set: &SignerSet,
    message_hash: &[u8; 32],
    signatures: &[Binary],
    recovery: &R,
) -> Result<Vec<[u8; 20]>, AttestationError> {
    if signatures.len() > MAX_ATTESTATION_SIGNATURES {
        return Err(AttestationError::TooManySignatures {
            got: signatures.len(),
            max: MAX_ATTESTATION_SIGNATURES,
        });
    }

    let digest = eth_signed_message_hash(message_hash);
    let mut counted: Vec<[u8; 20]> = Vec::with_capacity(set.threshold as usize);

    for (index, signature) in signatures.iter().enumerate() {
        let signer = recovery
            .recover_signer(&digest, signature.as_slice())
            .map_err(|reason| AttestationError::MalformedSignature { index, reason })?;

        if !set.contains(&signer) {
            continue;
        }
        if counted.contains(&signer) {
            return Err(AttestationError::DuplicateSigner {
                signer: evm_address_to_hex(&signer),
            });
        }
        counted.push(signer);
    }

    if (counted.len() as u32) < set.threshold {
        return Err(AttestationError::InsufficientSignatures {
            got: counted.len() as u32,
            required: set.threshold,
        });
    }

    Ok(counted)
}
