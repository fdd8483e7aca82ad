//! Fraud proof evidence and adjudication results.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

use crate::payload::WithdrawPayload;

/// Evidence a challenger attaches to a challenge (JSON-encoded into the
/// challenge's opaque `evidence` bytes).
#[cw_serde]
pub enum FraudProof {
    /// The signer set attested a different transfer for the same deposit.
    ConflictingAttestation {
        /// Preimage of the challenged claim's payload hash
        claimed: WithdrawPayload,
        /// Transfer the signers actually attested
        conflicting: WithdrawPayload,
        /// Signatures over `conflicting.hash()`
        signatures: Vec<Binary>,
    },
    /// The signer set attested that the claimed deposit does not exist.
    DepositAbsent {
        /// Preimage of the challenged claim's payload hash
        claimed: WithdrawPayload,
        /// Signatures over `claimed.absence_digest()`
        signatures: Vec<Binary>,
    },
    /// An earlier, still-valid claim already commits to the same payload.
    DuplicateClaim { other_claim_id: u64 },
}

#[cw_serde]
#[derive(Copy)]
pub enum FraudVerdict {
    Fraudulent,
    Legitimate,
}

impl FraudVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            FraudVerdict::Fraudulent => "fraudulent",
            FraudVerdict::Legitimate => "legitimate",
        }
    }
}

#[cw_serde]
pub struct FraudVerdictResponse {
    pub verdict: FraudVerdict,
    /// Short explanation, surfaced in event attributes
    pub reason: String,
}

impl FraudVerdictResponse {
    pub fn fraudulent(reason: impl Into<String>) -> Self {
        Self {
            verdict: FraudVerdict::Fraudulent,
            reason: reason.into(),
        }
    }

    pub fn legitimate(reason: impl Into<String>) -> Self {
        Self {
            verdict: FraudVerdict::Legitimate,
            reason: reason.into(),
        }
    }
}
