//! Optimistic Verifier Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_challenge, execute_consume_finalized, execute_finalize, execute_resolve_challenge,
    execute_set_authorized_caller, execute_set_fraud_proof_verifier, execute_submit_claim,
    execute_update_params, validate_params,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_challenge, query_claim, query_claims, query_config, query_is_authorized,
    query_next_claim_id,
};
use crate::state::{
    Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, DEFAULT_CHALLENGER_REWARD,
    DEFAULT_CHALLENGE_BOND, DEFAULT_CHALLENGE_PERIOD, NEXT_CLAIM_ID,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    let treasury = match msg.treasury {
        Some(t) => deps.api.addr_validate(&t)?,
        None => admin.clone(),
    };
    let fraud_proof_verifier = msg
        .fraud_proof_verifier
        .map(|v| deps.api.addr_validate(&v))
        .transpose()?;

    if msg.bond_denom.is_empty() {
        return Err(ContractError::InvalidParams {
            reason: "bond_denom must not be empty".to_string(),
        });
    }

    let config = Config {
        admin,
        fraud_proof_verifier,
        treasury,
        bond_denom: msg.bond_denom,
        challenge_period: msg.challenge_period.unwrap_or(DEFAULT_CHALLENGE_PERIOD),
        challenge_bond: msg.challenge_bond.unwrap_or(DEFAULT_CHALLENGE_BOND),
        challenger_reward: msg.challenger_reward.unwrap_or(DEFAULT_CHALLENGER_REWARD),
    };
    validate_params(
        config.challenge_period,
        config.challenge_bond,
        config.challenger_reward,
    )?;

    CONFIG.save(deps.storage, &config)?;
    NEXT_CLAIM_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("bond_denom", config.bond_denom)
        .add_attribute("challenge_period", config.challenge_period.to_string())
        .add_attribute("challenge_bond", config.challenge_bond.to_string())
        .add_attribute("challenger_reward", config.challenger_reward.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SubmitClaim {
            payload_hash,
            claimant,
        } => execute_submit_claim(deps, env, info, payload_hash, claimant),
        ExecuteMsg::Challenge { claim_id, evidence } => {
            execute_challenge(deps, env, info, claim_id, evidence)
        }
        ExecuteMsg::ResolveChallenge { claim_id } => execute_resolve_challenge(deps, claim_id),
        ExecuteMsg::Finalize { claim_id } => execute_finalize(deps, env, claim_id),
        ExecuteMsg::ConsumeFinalized { claim_id } => {
            execute_consume_finalized(deps, info, claim_id)
        }
        ExecuteMsg::SetFraudProofVerifier { address } => {
            execute_set_fraud_proof_verifier(deps, info, address)
        }
        ExecuteMsg::SetAuthorizedCaller { caller, authorized } => {
            execute_set_authorized_caller(deps, info, caller, authorized)
        }
        ExecuteMsg::UpdateParams {
            challenge_period,
            challenge_bond,
            challenger_reward,
            treasury,
        } => execute_update_params(
            deps,
            info,
            challenge_period,
            challenge_bond,
            challenger_reward,
            treasury,
        ),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Claim { claim_id } => to_json_binary(&query_claim(deps, claim_id)?),
        QueryMsg::Challenge { claim_id } => to_json_binary(&query_challenge(deps, claim_id)?),
        QueryMsg::Claims { start_after, limit } => {
            to_json_binary(&query_claims(deps, start_after, limit)?)
        }
        QueryMsg::NextClaimId {} => to_json_binary(&query_next_claim_id(deps)?),
        QueryMsg::IsAuthorized { caller } => to_json_binary(&query_is_authorized(deps, caller)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{coins, BankMsg, CosmosMsg, OwnedDeps, Uint128};

    use common::ClaimState;

    const DENOM: &str = "uluna";
    const BOND: u128 = 1_000_000;

    type TestDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    fn setup() -> TestDeps {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                bond_denom: DENOM.to_string(),
                challenge_period: None,
                challenge_bond: None,
                challenger_reward: None,
                treasury: None,
                fraud_proof_verifier: None,
            },
        )
        .unwrap();
        deps
    }

    fn submit(deps: &mut TestDeps, who: &str) -> u64 {
        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(who, &coins(BOND, DENOM)),
            ExecuteMsg::SubmitClaim {
                payload_hash: Binary::from(vec![7u8; 32]),
                claimant: None,
            },
        )
        .unwrap();
        res.attributes
            .iter()
            .find(|a| a.key == "claim_id")
            .unwrap()
            .value
            .parse()
            .unwrap()
    }

    fn env_at(offset: u64) -> Env {
        let mut env = mock_env();
        env.block.time = env.block.time.plus_seconds(offset);
        env
    }

    #[test]
    fn test_instantiate_defaults() {
        let deps = setup();
        let config = query_config(deps.as_ref()).unwrap();
        assert_eq!(config.challenge_period, 86_400);
        assert_eq!(config.challenge_bond, Uint128::new(1_000_000));
        assert_eq!(config.challenger_reward, Uint128::new(500_000));
        assert_eq!(config.treasury.as_str(), "admin");
        assert_eq!(query_next_claim_id(deps.as_ref()).unwrap().next_claim_id, 1);
    }

    #[test]
    fn test_instantiate_rejects_reward_above_bond() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                bond_denom: DENOM.to_string(),
                challenge_period: None,
                challenge_bond: Some(Uint128::new(10)),
                challenger_reward: Some(Uint128::new(11)),
                treasury: None,
                fraud_proof_verifier: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidParams { .. }));
    }

    #[test]
    fn test_submit_claim_records_deadline() {
        let mut deps = setup();
        let id = submit(&mut deps, "claimant");
        assert_eq!(id, 1);

        let claim = query_claim(deps.as_ref(), id).unwrap();
        assert_eq!(claim.state, ClaimState::Submitted);
        assert_eq!(claim.claimant.as_str(), "claimant");
        assert_eq!(claim.submitter.as_str(), "claimant");
        assert_eq!(
            claim.challenge_deadline,
            mock_env().block.time.plus_seconds(86_400)
        );
        assert_eq!(query_next_claim_id(deps.as_ref()).unwrap().next_claim_id, 2);
    }

    #[test]
    fn test_submit_claim_validation() {
        let mut deps = setup();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("claimant", &coins(BOND - 1, DENOM)),
            ExecuteMsg::SubmitClaim {
                payload_hash: Binary::from(vec![7u8; 32]),
                claimant: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBond { .. }));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("claimant", &coins(BOND, DENOM)),
            ExecuteMsg::SubmitClaim {
                payload_hash: Binary::from(vec![7u8; 31]),
                claimant: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidPayloadHash { .. }));

        // Naming another claimant needs authorization
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &coins(BOND, DENOM)),
            ExecuteMsg::SubmitClaim {
                payload_hash: Binary::from(vec![7u8; 32]),
                claimant: Some("victim".to_string()),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::UnauthorizedCaller { .. }));
    }

    #[test]
    fn test_finalize_only_after_deadline() {
        let mut deps = setup();
        let id = submit(&mut deps, "claimant");

        let err = execute(
            deps.as_mut(),
            env_at(86_399),
            mock_info("anyone", &[]),
            ExecuteMsg::Finalize { claim_id: id },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::ChallengeWindowOpen { .. }));

        let res = execute(
            deps.as_mut(),
            env_at(86_400),
            mock_info("anyone", &[]),
            ExecuteMsg::Finalize { claim_id: id },
        )
        .unwrap();
        assert_eq!(
            res.messages[0].msg,
            CosmosMsg::Bank(BankMsg::Send {
                to_address: "claimant".to_string(),
                amount: coins(BOND, DENOM),
            })
        );
        assert_eq!(
            query_claim(deps.as_ref(), id).unwrap().state,
            ClaimState::Finalized
        );

        // Terminal: a second finalize fails
        let err = execute(
            deps.as_mut(),
            env_at(90_000),
            mock_info("anyone", &[]),
            ExecuteMsg::Finalize { claim_id: id },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidClaimState { .. }));
    }

    #[test]
    fn test_challenge_only_before_deadline() {
        let mut deps = setup();
        let id = submit(&mut deps, "claimant");

        let err = execute(
            deps.as_mut(),
            env_at(86_400),
            mock_info("challenger", &coins(BOND, DENOM)),
            ExecuteMsg::Challenge {
                claim_id: id,
                evidence: Binary::default(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::ChallengeWindowClosed { .. }));

        execute(
            deps.as_mut(),
            env_at(86_399),
            mock_info("challenger", &coins(BOND, DENOM)),
            ExecuteMsg::Challenge {
                claim_id: id,
                evidence: Binary::default(),
            },
        )
        .unwrap();
        assert_eq!(
            query_claim(deps.as_ref(), id).unwrap().state,
            ClaimState::Challenged
        );

        // Second challenger loses the race
        let err = execute(
            deps.as_mut(),
            env_at(86_399),
            mock_info("latecomer", &coins(BOND, DENOM)),
            ExecuteMsg::Challenge {
                claim_id: id,
                evidence: Binary::default(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidClaimState { .. }));

        // A challenged claim never finalizes through the timeout path
        let err = execute(
            deps.as_mut(),
            env_at(1_000_000),
            mock_info("anyone", &[]),
            ExecuteMsg::Finalize { claim_id: id },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidClaimState { .. }));
    }

    #[test]
    fn test_resolve_requires_verifier() {
        let mut deps = setup();
        let id = submit(&mut deps, "claimant");
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::ResolveChallenge { claim_id: id },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::FraudProofVerifierNotSet);
    }

    #[test]
    fn test_submit_on_behalf_records_submitter() {
        let mut deps = setup();
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetAuthorizedCaller {
                caller: "bridge".to_string(),
                authorized: true,
            },
        )
        .unwrap();

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &coins(BOND, DENOM)),
            ExecuteMsg::SubmitClaim {
                payload_hash: Binary::from(vec![7u8; 32]),
                claimant: Some("user".to_string()),
            },
        )
        .unwrap();

        let claim = query_claim(deps.as_ref(), 1).unwrap();
        assert_eq!(claim.claimant.as_str(), "user");
        assert_eq!(claim.submitter.as_str(), "bridge");
    }

    #[test]
    fn test_consume_finalized_once() {
        let mut deps = setup();
        let id = submit(&mut deps, "claimant");

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetAuthorizedCaller {
                caller: "bridge".to_string(),
                authorized: true,
            },
        )
        .unwrap();

        let consume = ExecuteMsg::ConsumeFinalized { claim_id: id };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &[]),
            consume.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ClaimNotFinalized { claim_id: id });

        execute(
            deps.as_mut(),
            env_at(86_400),
            mock_info("anyone", &[]),
            ExecuteMsg::Finalize { claim_id: id },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            consume.clone(),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::UnauthorizedCaller { .. }));

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("bridge", &[]),
            consume.clone(),
        )
        .unwrap();
        assert!(query_claim(deps.as_ref(), id).unwrap().settled);

        let err = execute(deps.as_mut(), mock_env(), mock_info("bridge", &[]), consume).unwrap_err();
        assert_eq!(err, ContractError::ClaimAlreadySettled { claim_id: id });
    }

    #[test]
    fn test_update_params_affects_new_claims_only() {
        let mut deps = setup();
        let first = submit(&mut deps, "claimant");

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::UpdateParams {
                challenge_period: Some(3_600),
                challenge_bond: None,
                challenger_reward: None,
                treasury: None,
            },
        )
        .unwrap();
        let second = submit(&mut deps, "claimant");

        let start = mock_env().block.time;
        assert_eq!(
            query_claim(deps.as_ref(), first).unwrap().challenge_deadline,
            start.plus_seconds(86_400)
        );
        assert_eq!(
            query_claim(deps.as_ref(), second).unwrap().challenge_deadline,
            start.plus_seconds(3_600)
        );
    }
}
