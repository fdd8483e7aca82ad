//! Fraud proof evaluation.
//!
//! A proof only ever turns a claim `Fraudulent` through evidence the signer
//! set itself stands behind, or through a provable double claim by the same
//! submitter. Anything
//! that fails to decode or does not line up with the challenged claim leaves
//! the claim `Legitimate`.

use cosmwasm_std::{from_json, Binary, Deps, StdResult};

use common::{
    parse_bytes32, ClaimQueryMsg, ClaimResponse, ClaimState, FraudProof, FraudVerdictResponse,
};
use validator::msg::{QueryMsg as ValidatorQueryMsg, VerifyResponse};

use crate::state::Config;

pub fn adjudicate(
    deps: Deps,
    config: &Config,
    claim_id: u64,
    proof: &Binary,
) -> StdResult<FraudVerdictResponse> {
    let claim = query_claim(deps, config, claim_id)?;
    let claim_hash = parse_bytes32(&claim.payload_hash)?;

    let proof: FraudProof = match from_json(proof) {
        Ok(proof) => proof,
        Err(_) => return Ok(FraudVerdictResponse::legitimate("undecodable proof")),
    };

    match proof {
        FraudProof::ConflictingAttestation {
            claimed,
            conflicting,
            signatures,
        } => {
            if claimed.hash() != claim_hash {
                return Ok(FraudVerdictResponse::legitimate(
                    "claimed payload does not match claim",
                ));
            }
            if conflicting.deposit_key() != claimed.deposit_key() {
                return Ok(FraudVerdictResponse::legitimate(
                    "conflicting payload is for another deposit",
                ));
            }
            let conflicting_hash = conflicting.hash();
            if conflicting_hash == claim_hash {
                return Ok(FraudVerdictResponse::legitimate(
                    "conflicting payload equals claimed payload",
                ));
            }
            let verdict = verify_attestation(deps, config, &conflicting_hash, signatures)?;
            Ok(if verdict.valid {
                FraudVerdictResponse::fraudulent("signer set attested a conflicting transfer")
            } else {
                FraudVerdictResponse::legitimate(format!(
                    "conflicting attestation rejected: {}",
                    verdict.reason.unwrap_or_default()
                ))
            })
        }
        FraudProof::DepositAbsent {
            claimed,
            signatures,
        } => {
            if claimed.hash() != claim_hash {
                return Ok(FraudVerdictResponse::legitimate(
                    "claimed payload does not match claim",
                ));
            }
            let verdict =
                verify_attestation(deps, config, &claimed.absence_digest(), signatures)?;
            Ok(if verdict.valid {
                FraudVerdictResponse::fraudulent("signer set attested the deposit is absent")
            } else {
                FraudVerdictResponse::legitimate(format!(
                    "absence attestation rejected: {}",
                    verdict.reason.unwrap_or_default()
                ))
            })
        }
        FraudProof::DuplicateClaim { other_claim_id } => {
            duplicate_claim(deps, config, &claim, other_claim_id)
        }
    }
}

/// An earlier claim on the same payload, opened by the same submitter and
/// not invalidated, already covers the transfer. Claims opened by other
/// callers are not counted against it.
fn duplicate_claim(
    deps: Deps,
    config: &Config,
    claim: &ClaimResponse,
    other_claim_id: u64,
) -> StdResult<FraudVerdictResponse> {
    if other_claim_id >= claim.id {
        return Ok(FraudVerdictResponse::legitimate(
            "duplicate must reference an earlier claim",
        ));
    }
    let other = query_claim(deps, config, other_claim_id)?;
    if other.payload_hash != claim.payload_hash {
        return Ok(FraudVerdictResponse::legitimate(
            "referenced claim has a different payload",
        ));
    }
    if other.submitter != claim.submitter {
        return Ok(FraudVerdictResponse::legitimate(
            "referenced claim was opened by another submitter",
        ));
    }
    if other.state == ClaimState::Invalidated {
        return Ok(FraudVerdictResponse::legitimate(
            "referenced claim was invalidated",
        ));
    }
    Ok(FraudVerdictResponse::fraudulent(format!(
        "payload already claimed by claim {}",
        other.id
    )))
}

fn query_claim(deps: Deps, config: &Config, claim_id: u64) -> StdResult<ClaimResponse> {
    deps.querier.query_wasm_smart(
        config.optimistic_verifier()?,
        &ClaimQueryMsg::Claim { claim_id },
    )
}

fn verify_attestation(
    deps: Deps,
    config: &Config,
    message_hash: &[u8; 32],
    signatures: Vec<Binary>,
) -> StdResult<VerifyResponse> {
    deps.querier.query_wasm_smart(
        config.bridge_validator()?,
        &ValidatorQueryMsg::Verify {
            message_hash: Binary::from(message_hash.to_vec()),
            signatures,
        },
    )
}
