//! Bridge Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_cancel_admin_proposal, execute_deposit_native,
    execute_propose_admin, execute_receive, execute_recover_asset, execute_release_claim,
    execute_set_fee_params, execute_set_paused, execute_withdraw,
};
use crate::fee_manager::{FeeConfig, FEE_CONFIG};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_compute_payload_hash, query_config, query_deposit, query_is_processed,
    query_locked_balance, query_pending_admin, query_pending_release, query_stats, query_status,
};
use crate::state::{
    Config, Stats, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, OUTGOING_NONCE, STATS,
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

    let config = Config {
        admin: deps.api.addr_validate(&msg.admin)?,
        paused: false,
        validator: deps.api.addr_validate(&msg.validator)?,
        optimistic_verifier: deps.api.addr_validate(&msg.optimistic_verifier)?,
        rate_limiter: deps.api.addr_validate(&msg.rate_limiter)?,
        guardian: deps.api.addr_validate(&msg.guardian)?,
    };

    let fee_config = FeeConfig {
        fee_bps: msg.fee_bps,
        fee_recipient: deps.api.addr_validate(&msg.fee_recipient)?,
    };
    fee_config.validate()?;

    CONFIG.save(deps.storage, &config)?;
    FEE_CONFIG.save(deps.storage, &fee_config)?;
    STATS.save(deps.storage, &Stats::default())?;
    OUTGOING_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("validator", config.validator)
        .add_attribute("optimistic_verifier", config.optimistic_verifier)
        .add_attribute("rate_limiter", config.rate_limiter)
        .add_attribute("guardian", config.guardian)
        .add_attribute("fee_bps", fee_config.fee_bps.to_string()))
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
        // Outgoing transfers
        ExecuteMsg::Deposit {
            dest_chain,
            dest_account,
        } => execute_deposit_native(deps, env, info, dest_chain, dest_account),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Incoming transfers
        ExecuteMsg::Withdraw {
            payload,
            signatures,
        } => execute_withdraw(deps, info, payload, signatures),
        ExecuteMsg::ReleaseClaim { claim_id } => execute_release_claim(deps, claim_id),

        // Guardian
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_paused(deps, info, false),

        // Admin
        ExecuteMsg::ProposeAdmin { new_admin } => {
            execute_propose_admin(deps, env, info, new_admin)
        }
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
        ExecuteMsg::SetFeeParams {
            fee_bps,
            fee_recipient,
        } => execute_set_fee_params(deps, info, fee_bps, fee_recipient),
        ExecuteMsg::RecoverAsset {
            asset,
            amount,
            recipient,
        } => execute_recover_asset(deps, info, asset, amount, recipient),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
        QueryMsg::Deposit { nonce } => to_json_binary(&query_deposit(deps, nonce)?),
        QueryMsg::PendingRelease { claim_id } => {
            to_json_binary(&query_pending_release(deps, claim_id)?)
        }
        QueryMsg::IsProcessed { payload_hash } => {
            to_json_binary(&query_is_processed(deps, payload_hash)?)
        }
        QueryMsg::LockedBalance { token } => to_json_binary(&query_locked_balance(deps, token)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
        QueryMsg::ComputePayloadHash { payload } => {
            to_json_binary(&query_compute_payload_hash(payload)?)
        }
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
    use cosmwasm_std::{
        coin, coins, from_json, Addr, BankMsg, ContractResult, CosmosMsg, OwnedDeps, SubMsg,
        SystemError, SystemResult, Uint128, WasmMsg, WasmQuery,
    };

    use crate::msg::{
        IsProcessedResponse, LockedBalanceResponse, PendingReleaseResponse, StatusResponse,
    };
    use common::{AssetInfo, ClaimResponse, ClaimState, WithdrawPayload};
    use optimistic_verifier::msg::{
        ConfigResponse as VerifierConfigResponse, ExecuteMsg as VerifierExecuteMsg,
        NextClaimIdResponse, QueryMsg as VerifierQueryMsg,
    };
    use rate_limiter::msg::{
        CanConsumeResponse, ExecuteMsg as RateLimiterExecuteMsg, QueryMsg as RateLimiterQueryMsg,
    };
    use validator::msg::{QueryMsg as ValidatorQueryMsg, VerifyResponse};

    const DENOM: &str = "uluna";

    type TestDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    /// Canned answers from the collaborating contracts.
    #[derive(Clone)]
    struct Stack {
        attestation_valid: bool,
        capacity: bool,
        claim_state: ClaimState,
    }

    impl Default for Stack {
        fn default() -> Self {
            Stack {
                attestation_valid: true,
                capacity: true,
                claim_state: ClaimState::Submitted,
            }
        }
    }

    fn payload(amount: u128) -> WithdrawPayload {
        WithdrawPayload {
            src_chain: 56,
            src_nonce: 9,
            src_account: Binary::from(vec![1u8; 32]),
            token: AssetInfo::Native {
                denom: DENOM.to_string(),
            },
            recipient: "recipient".to_string(),
            amount: Uint128::new(amount),
        }
    }

    fn mock_stack(deps: &mut TestDeps, stack: Stack) {
        let claimed = payload(10_000).hash();
        deps.querier.update_wasm(move |query| {
            let WasmQuery::Smart { contract_addr, msg } = query else {
                return SystemResult::Err(SystemError::Unknown {});
            };
            let response = match contract_addr.as_str() {
                "validator" => match from_json::<ValidatorQueryMsg>(msg).unwrap() {
                    ValidatorQueryMsg::Verify { .. } => to_json_binary(&VerifyResponse {
                        valid: stack.attestation_valid,
                        signers: vec![],
                        threshold: 2,
                        reason: (!stack.attestation_valid)
                            .then(|| "insufficient signatures".to_string()),
                    }),
                    _ => panic!("unexpected validator query"),
                },
                "limiter" => match from_json::<RateLimiterQueryMsg>(msg).unwrap() {
                    RateLimiterQueryMsg::CanConsume { .. } => to_json_binary(&CanConsumeResponse {
                        allowed: stack.capacity,
                        reason: (!stack.capacity).then(|| "period limit".to_string()),
                    }),
                    _ => panic!("unexpected rate limiter query"),
                },
                "verifier" => match from_json::<VerifierQueryMsg>(msg).unwrap() {
                    VerifierQueryMsg::Config {} => to_json_binary(&VerifierConfigResponse {
                        admin: Addr::unchecked("admin"),
                        fraud_proof_verifier: None,
                        treasury: Addr::unchecked("admin"),
                        bond_denom: DENOM.to_string(),
                        challenge_period: 86_400,
                        challenge_bond: Uint128::new(1_000_000),
                        challenger_reward: Uint128::new(500_000),
                    }),
                    VerifierQueryMsg::NextClaimId {} => {
                        to_json_binary(&NextClaimIdResponse { next_claim_id: 7 })
                    }
                    VerifierQueryMsg::Claim { claim_id } => to_json_binary(&ClaimResponse {
                        id: claim_id,
                        claimant: Addr::unchecked("submitter"),
                        submitter: Addr::unchecked("bridge"),
                        payload_hash: Binary::from(claimed.to_vec()),
                        bond_amount: Uint128::new(1_000_000),
                        reward_amount: Uint128::new(500_000),
                        submitted_at: mock_env().block.time,
                        challenge_deadline: mock_env().block.time.plus_seconds(86_400),
                        state: stack.claim_state,
                        settled: false,
                    }),
                    _ => panic!("unexpected verifier query"),
                },
                _ => return SystemResult::Err(SystemError::Unknown {}),
            };
            SystemResult::Ok(ContractResult::Ok(response.unwrap()))
        });
    }

    fn setup(stack: Stack) -> TestDeps {
        let mut deps = mock_dependencies();
        mock_stack(&mut deps, stack);
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                validator: "validator".to_string(),
                optimistic_verifier: "verifier".to_string(),
                rate_limiter: "limiter".to_string(),
                guardian: "guardian".to_string(),
                fee_recipient: "fees".to_string(),
                fee_bps: 50,
            },
        )
        .unwrap();
        deps
    }

    fn deposit(deps: &mut TestDeps, amount: u128) -> Result<Response, ContractError> {
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("depositor", &coins(amount, DENOM)),
            ExecuteMsg::Deposit {
                dest_chain: 56,
                dest_account: Binary::from(vec![2u8; 32]),
            },
        )
    }

    fn withdraw(
        deps: &mut TestDeps,
        payload: WithdrawPayload,
        signatures: Vec<Binary>,
        funds: &[cosmwasm_std::Coin],
    ) -> Result<Response, ContractError> {
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("submitter", funds),
            ExecuteMsg::Withdraw {
                payload,
                signatures,
            },
        )
    }

    fn signatures() -> Vec<Binary> {
        vec![Binary::from(vec![0u8; 65]), Binary::from(vec![1u8; 65])]
    }

    fn locked(deps: &TestDeps) -> Uint128 {
        let res: LockedBalanceResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::LockedBalance {
                    token: DENOM.to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        res.amount
    }

    #[test]
    fn test_instantiate_rejects_high_fee() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                validator: "validator".to_string(),
                optimistic_verifier: "verifier".to_string(),
                rate_limiter: "limiter".to_string(),
                guardian: "guardian".to_string(),
                fee_recipient: "fees".to_string(),
                fee_bps: 101,
            },
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidFee {
                bps: 101,
                max_bps: 100
            }
        );
    }

    #[test]
    fn test_pause_only_from_guardian() {
        let mut deps = setup(Stack::default());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::NotGuardian { .. }));

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("guardian", &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap();
        assert!(res.attributes.iter().any(|a| a.key == "result" && a.value == "updated"));

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("guardian", &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap();
        assert!(res.attributes.iter().any(|a| a.key == "result" && a.value == "noop"));

        let status: StatusResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Status {}).unwrap()).unwrap();
        assert!(status.paused);

        let err = deposit(&mut deps, 1_000).unwrap_err();
        assert_eq!(err, ContractError::BridgePaused);
        let err = withdraw(&mut deps, payload(1_000), signatures(), &[]).unwrap_err();
        assert_eq!(err, ContractError::BridgePaused);
    }

    #[test]
    fn test_deposit_locks_full_amount() {
        let mut deps = setup(Stack::default());
        let res = deposit(&mut deps, 10_000).unwrap();
        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: "limiter".to_string(),
                msg: to_json_binary(&RateLimiterExecuteMsg::Consume {
                    token: DENOM.to_string(),
                    amount: Uint128::new(10_000),
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
        assert_eq!(locked(&deps), Uint128::new(10_000));

        let status: StatusResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Status {}).unwrap()).unwrap();
        assert_eq!(status.next_nonce, 1);
    }

    #[test]
    fn test_deposit_requires_single_coin() {
        let mut deps = setup(Stack::default());
        let msg = ExecuteMsg::Deposit {
            dest_chain: 56,
            dest_account: Binary::from(vec![2u8; 32]),
        };

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("depositor", &[]),
            msg.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NoFundsSent);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("depositor", &[coin(1, "uluna"), coin(1, "uusd")]),
            msg,
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidAmount { .. }));
    }

    #[test]
    fn test_deposit_respects_capacity() {
        let mut deps = setup(Stack {
            capacity: false,
            ..Stack::default()
        });
        let err = deposit(&mut deps, 1_000).unwrap_err();
        assert!(matches!(err, ContractError::RateLimitExceeded { .. }));
        assert_eq!(locked(&deps), Uint128::zero());
    }

    #[test]
    fn test_fast_withdraw_pays_net_and_fee() {
        let mut deps = setup(Stack::default());
        deposit(&mut deps, 50_000).unwrap();

        let res = withdraw(&mut deps, payload(10_000), signatures(), &[]).unwrap();
        assert_eq!(
            res.messages,
            vec![
                SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: "limiter".to_string(),
                    msg: to_json_binary(&RateLimiterExecuteMsg::Consume {
                        token: DENOM.to_string(),
                        amount: Uint128::new(10_000),
                    })
                    .unwrap(),
                    funds: vec![],
                })),
                SubMsg::new(BankMsg::Send {
                    to_address: "recipient".to_string(),
                    amount: coins(9_950, DENOM),
                }),
                SubMsg::new(BankMsg::Send {
                    to_address: "fees".to_string(),
                    amount: coins(50, DENOM),
                }),
            ]
        );
        assert_eq!(locked(&deps), Uint128::new(40_000));

        let processed: IsProcessedResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsProcessed {
                    payload_hash: Binary::from(payload(10_000).hash().to_vec()),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(processed.processed);

        let err = withdraw(&mut deps, payload(10_000), signatures(), &[]).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyProcessed { .. }));
    }

    #[test]
    fn test_fast_withdraw_rejects_bad_attestation() {
        let mut deps = setup(Stack {
            attestation_valid: false,
            ..Stack::default()
        });
        deposit(&mut deps, 50_000).unwrap();

        let err = withdraw(&mut deps, payload(10_000), signatures(), &[]).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidAttestation {
                reason: "insufficient signatures".to_string()
            }
        );
        assert_eq!(locked(&deps), Uint128::new(50_000));
    }

    #[test]
    fn test_fast_withdraw_needs_liquidity() {
        let mut deps = setup(Stack::default());
        deposit(&mut deps, 5_000).unwrap();

        let err = withdraw(&mut deps, payload(10_000), signatures(), &[]).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientLiquidity {
                token: DENOM.to_string(),
                locked: Uint128::new(5_000),
                requested: Uint128::new(10_000),
            }
        );
    }

    #[test]
    fn test_slow_withdraw_forwards_bond() {
        let mut deps = setup(Stack::default());

        let err = withdraw(&mut deps, payload(10_000), vec![], &coins(10, DENOM)).unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBond { .. }));

        let res = withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_200_000, DENOM),
        )
        .unwrap();
        assert_eq!(
            res.messages,
            vec![
                SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                    contract_addr: "verifier".to_string(),
                    msg: to_json_binary(&VerifierExecuteMsg::SubmitClaim {
                        payload_hash: Binary::from(payload(10_000).hash().to_vec()),
                        claimant: Some("submitter".to_string()),
                    })
                    .unwrap(),
                    funds: coins(1_000_000, DENOM),
                })),
                SubMsg::new(BankMsg::Send {
                    to_address: "submitter".to_string(),
                    amount: coins(200_000, DENOM),
                }),
            ]
        );

        let pending: Option<PendingReleaseResponse> = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::PendingRelease { claim_id: 7 },
            )
            .unwrap(),
        )
        .unwrap();
        let pending = pending.unwrap();
        assert_eq!(pending.submitter, Addr::unchecked("submitter"));
        assert!(!pending.released);

        // The mocked claim is still Submitted, so a second claim is refused.
        let err = withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_000_000, DENOM),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ClaimAlreadyPending { claim_id: 7 });
    }

    #[test]
    fn test_release_requires_finalized_claim() {
        let mut deps = setup(Stack::default());
        deposit(&mut deps, 50_000).unwrap();
        withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_000_000, DENOM),
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::ReleaseClaim { claim_id: 7 },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::ClaimNotFinalized { claim_id: 7 });

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::ReleaseClaim { claim_id: 8 },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnknownClaim { claim_id: 8 });
    }

    #[test]
    fn test_release_pays_out_once() {
        let mut deps = setup(Stack::default());
        deposit(&mut deps, 50_000).unwrap();
        withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_000_000, DENOM),
        )
        .unwrap();

        mock_stack(
            &mut deps,
            Stack {
                claim_state: ClaimState::Finalized,
                ..Stack::default()
            },
        );

        let res = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::ReleaseClaim { claim_id: 7 },
        )
        .unwrap();
        assert_eq!(res.messages.len(), 4);
        assert_eq!(
            res.messages[0],
            SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: "verifier".to_string(),
                msg: to_json_binary(&VerifierExecuteMsg::ConsumeFinalized { claim_id: 7 })
                    .unwrap(),
                funds: vec![],
            }))
        );
        assert_eq!(
            res.messages[2],
            SubMsg::new(BankMsg::Send {
                to_address: "recipient".to_string(),
                amount: coins(9_950, DENOM),
            })
        );
        assert_eq!(locked(&deps), Uint128::new(40_000));

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("anyone", &[]),
            ExecuteMsg::ReleaseClaim { claim_id: 7 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::AlreadyProcessed { .. }));

        // The fast path cannot pay the same payload again either.
        let err = withdraw(&mut deps, payload(10_000), signatures(), &[]).unwrap_err();
        assert!(matches!(err, ContractError::AlreadyProcessed { .. }));
    }

    #[test]
    fn test_invalidated_claim_can_be_replaced() {
        let mut deps = setup(Stack::default());
        withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_000_000, DENOM),
        )
        .unwrap();

        mock_stack(
            &mut deps,
            Stack {
                claim_state: ClaimState::Invalidated,
                ..Stack::default()
            },
        );
        withdraw(
            &mut deps,
            payload(10_000),
            vec![],
            &coins(1_000_000, DENOM),
        )
        .unwrap();
    }

    #[test]
    fn test_admin_timelock() {
        let mut deps = setup(Stack::default());

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::ProposeAdmin {
                new_admin: "newadmin".to_string(),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("newadmin", &[]),
            ExecuteMsg::AcceptAdmin {},
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::TimelockNotExpired { .. }));

        let mut env = mock_env();
        env.block.time = env.block.time.plus_seconds(604_800);
        execute(
            deps.as_mut(),
            env,
            mock_info("newadmin", &[]),
            ExecuteMsg::AcceptAdmin {},
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::SetFeeParams {
                fee_bps: Some(10),
                fee_recipient: None,
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);
    }

    #[test]
    fn test_recover_asset_only_while_paused() {
        let mut deps = setup(Stack::default());
        let msg = ExecuteMsg::RecoverAsset {
            asset: AssetInfo::Native {
                denom: DENOM.to_string(),
            },
            amount: Uint128::new(5),
            recipient: "rescue".to_string(),
        };

        let err = execute(deps.as_mut(), mock_env(), mock_info("admin", &[]), msg.clone())
            .unwrap_err();
        assert_eq!(err, ContractError::RecoveryNotAvailable);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("guardian", &[]),
            ExecuteMsg::Pause {},
        )
        .unwrap();
        let res = execute(deps.as_mut(), mock_env(), mock_info("admin", &[]), msg).unwrap();
        assert_eq!(res.messages.len(), 1);
    }
}
