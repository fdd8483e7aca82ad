//! Claim lifecycle shared between the optimistic verifier and its readers.
//!
//! ```text
//! Submitted --challenge--> Challenged --resolve(Fraudulent)--> Invalidated
//!     |                        |
//!     |                        +--resolve(Legitimate)--> Finalized
//!     +--finalize (after deadline)--> Finalized
//! ```
//!
//! `Finalized` and `Invalidated` are terminal.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128};

use crate::fraud::FraudVerdict;

#[cw_serde]
#[derive(Copy)]
pub enum ClaimState {
    Submitted,
    Challenged,
    Finalized,
    Invalidated,
}

/// Rejected transition: `action` is not allowed from `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidTransition {
    pub from: ClaimState,
    pub action: &'static str,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot {} a {} claim", self.action, self.from)
    }
}

impl ClaimState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimState::Submitted => "submitted",
            ClaimState::Challenged => "challenged",
            ClaimState::Finalized => "finalized",
            ClaimState::Invalidated => "invalidated",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ClaimState::Finalized | ClaimState::Invalidated)
    }

    pub fn challenge(self) -> Result<ClaimState, InvalidTransition> {
        match self {
            ClaimState::Submitted => Ok(ClaimState::Challenged),
            ClaimState::Challenged | ClaimState::Finalized | ClaimState::Invalidated => {
                Err(InvalidTransition {
                    from: self,
                    action: "challenge",
                })
            }
        }
    }

    pub fn resolve(self, verdict: &FraudVerdict) -> Result<ClaimState, InvalidTransition> {
        match (self, verdict) {
            (ClaimState::Challenged, FraudVerdict::Fraudulent) => Ok(ClaimState::Invalidated),
            (ClaimState::Challenged, FraudVerdict::Legitimate) => Ok(ClaimState::Finalized),
            (ClaimState::Submitted | ClaimState::Finalized | ClaimState::Invalidated, _) => {
                Err(InvalidTransition {
                    from: self,
                    action: "resolve",
                })
            }
        }
    }

    pub fn finalize(self) -> Result<ClaimState, InvalidTransition> {
        match self {
            ClaimState::Submitted => Ok(ClaimState::Finalized),
            ClaimState::Challenged | ClaimState::Finalized | ClaimState::Invalidated => {
                Err(InvalidTransition {
                    from: self,
                    action: "finalize",
                })
            }
        }
    }
}

impl fmt::Display for ClaimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claim as reported by the optimistic verifier's `Claim` query.
#[cw_serde]
pub struct ClaimResponse {
    pub id: u64,
    pub claimant: Addr,
    /// Address that called `SubmitClaim`; the bridge when it submits for a user
    pub submitter: Addr,
    pub payload_hash: Binary,
    /// Bond posted by the claimant; a challenger must match it
    pub bond_amount: Uint128,
    /// Paid from the losing bond to the winner of a challenge
    pub reward_amount: Uint128,
    pub submitted_at: Timestamp,
    pub challenge_deadline: Timestamp,
    pub state: ClaimState,
    pub settled: bool,
}

/// Subset of the optimistic verifier's query interface read by contracts
/// that cannot link its crate (the fraud proof verifier sits beneath it).
#[cw_serde]
pub enum ClaimQueryMsg {
    Claim { claim_id: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_paths() {
        assert_eq!(
            ClaimState::Submitted.finalize().unwrap(),
            ClaimState::Finalized
        );
        let challenged = ClaimState::Submitted.challenge().unwrap();
        assert_eq!(challenged, ClaimState::Challenged);
        assert_eq!(
            challenged.resolve(&FraudVerdict::Fraudulent).unwrap(),
            ClaimState::Invalidated
        );
        assert_eq!(
            challenged.resolve(&FraudVerdict::Legitimate).unwrap(),
            ClaimState::Finalized
        );
    }

    #[test]
    fn test_terminal_states_never_move() {
        for terminal in [ClaimState::Finalized, ClaimState::Invalidated] {
            assert!(terminal.is_terminal());
            assert!(terminal.challenge().is_err());
            assert!(terminal.finalize().is_err());
            assert!(terminal.resolve(&FraudVerdict::Fraudulent).is_err());
            assert!(terminal.resolve(&FraudVerdict::Legitimate).is_err());
        }
    }

    #[test]
    fn test_challenged_claim_cannot_finalize_or_rechallenge() {
        let err = ClaimState::Challenged.finalize().unwrap_err();
        assert_eq!(err.to_string(), "cannot finalize a challenged claim");
        assert!(ClaimState::Challenged.challenge().is_err());
    }

    #[test]
    fn test_submitted_claim_cannot_resolve() {
        let err = ClaimState::Submitted
            .resolve(&FraudVerdict::Legitimate)
            .unwrap_err();
        assert_eq!(err.from, ClaimState::Submitted);
        assert_eq!(err.action, "resolve");
    }

    #[test]
    fn test_rejected_transitions_compare_by_value() {
        assert_eq!(
            ClaimState::Invalidated.challenge().unwrap_err(),
            InvalidTransition {
                from: ClaimState::Invalidated,
                action: "challenge",
            }
        );
        assert_ne!(
            ClaimState::Finalized.finalize().unwrap_err(),
            ClaimState::Invalidated.finalize().unwrap_err()
        );
    }
}
