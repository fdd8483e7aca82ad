//! Disputes: raising a challenge and settling it on the verifier's verdict.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use common::claim::InvalidTransition;
use common::{ClaimState, FraudVerdict, FraudVerdictResponse};
use fraud_proof_verifier::msg::QueryMsg as FraudProofQueryMsg;

use super::{load_claim, payout, take_bond};
use crate::error::ContractError;
use crate::state::{Challenge, CHALLENGES, CLAIMS, CONFIG};

/// Challenge a `Submitted` claim strictly before its deadline, matching the
/// claim's bond.
pub fn execute_challenge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    claim_id: u64,
    evidence: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut claim = load_claim(deps.storage, claim_id)?;

    let next = claim
        .state
        .challenge()
        .map_err(|transition| ContractError::InvalidClaimState {
            claim_id,
            transition,
        })?;

    if env.block.time >= claim.challenge_deadline {
        return Err(ContractError::ChallengeWindowClosed {
            claim_id,
            deadline: claim.challenge_deadline,
        });
    }

    let refund = take_bond(&info, &config.bond_denom, claim.bond_amount)?;

    claim.state = next;
    CLAIMS.save(deps.storage, claim_id, &claim)?;

    let challenge = Challenge {
        claim_id,
        challenger: info.sender.clone(),
        evidence,
        bond_amount: claim.bond_amount,
        raised_at: env.block.time,
        verdict: None,
        reason: None,
    };
    CHALLENGES.save(deps.storage, claim_id, &challenge)?;

    Ok(Response::new()
        .add_messages(refund)
        .add_attribute("action", "challenge_claim")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("challenger", info.sender)
        .add_attribute("bond", challenge.bond_amount.to_string()))
}

/// Resolve a challenged claim. Anyone may call.
///
/// `Fraudulent`: claim invalidated; challenger gets its bond plus the reward
/// out of the claimant's bond. `Legitimate`: claim finalized; claimant gets
/// its bond plus the reward out of the challenger's bond. The rest of the
/// losing bond goes to the treasury.
pub fn execute_resolve_challenge(
    deps: DepsMut,
    claim_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let verifier = config
        .fraud_proof_verifier
        .clone()
        .ok_or(ContractError::FraudProofVerifierNotSet)?;

    let mut claim = load_claim(deps.storage, claim_id)?;
    if claim.state != ClaimState::Challenged {
        return Err(ContractError::InvalidClaimState {
            claim_id,
            transition: InvalidTransition {
                from: claim.state,
                action: "resolve",
            },
        });
    }
    let mut challenge = CHALLENGES.load(deps.storage, claim_id)?;

    let verdict: FraudVerdictResponse = deps.querier.query_wasm_smart(
        &verifier,
        &FraudProofQueryMsg::VerifyFraudProof {
            claim_id,
            proof: challenge.evidence.clone(),
        },
    )?;

    claim.state = claim
        .state
        .resolve(&verdict.verdict)
        .map_err(|transition| ContractError::InvalidClaimState {
            claim_id,
            transition,
        })?;
    CLAIMS.save(deps.storage, claim_id, &claim)?;

    challenge.verdict = Some(verdict.verdict);
    challenge.reason = Some(verdict.reason.clone());
    CHALLENGES.save(deps.storage, claim_id, &challenge)?;

    // Winner: own bond + reward. Treasury: rest of the loser's bond.
    let (winner, winner_bond, loser_bond) = match verdict.verdict {
        FraudVerdict::Fraudulent => (
            &challenge.challenger,
            challenge.bond_amount,
            claim.bond_amount,
        ),
        FraudVerdict::Legitimate => (&claim.claimant, claim.bond_amount, challenge.bond_amount),
    };
    let reward = claim.reward_amount.min(loser_bond);
    let winner_amount = winner_bond + reward;
    let treasury_amount = loser_bond - reward;

    let messages = [
        payout(winner, &config.bond_denom, winner_amount),
        payout(&config.treasury, &config.bond_denom, treasury_amount),
    ];

    Ok(Response::new()
        .add_messages(messages.into_iter().flatten())
        .add_attribute("action", "resolve_challenge")
        .add_attribute("claim_id", claim_id.to_string())
        .add_attribute("verdict", verdict.verdict.as_str())
        .add_attribute("reason", verdict.reason)
        .add_attribute("state", claim.state.as_str())
        .add_attribute("winner", winner.to_string())
        .add_attribute("winner_payout", winner_amount.to_string())
        .add_attribute("treasury_payout", treasury_amount.to_string()))
}
