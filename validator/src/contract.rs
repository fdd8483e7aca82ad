//! Validator Contract - Entry Points

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use common::hash::{evm_address_to_hex, parse_bytes32, parse_evm_address};

use crate::attestation::{verify_attestation, ApiRecovery};
use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, IsSignerResponse, MigrateMsg, QueryMsg,
    SignerSetResponse, VerifyResponse,
};
use crate::state::{Config, SignerSet, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, SIGNER_SET};

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
    let set = parse_signer_set(&msg.signers, msg.threshold)?;

    CONFIG.save(deps.storage, &Config { admin: admin.clone() })?;
    SIGNER_SET.save(deps.storage, &set)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", admin)
        .add_attribute("signer_count", set.len().to_string())
        .add_attribute("threshold", set.threshold.to_string()))
}

fn parse_signer_set(signers: &[String], threshold: u32) -> Result<SignerSet, ContractError> {
    let parsed = signers
        .iter()
        .map(|s| {
            parse_evm_address(s).map_err(|e| ContractError::InvalidSignerSet {
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    SignerSet::new(parsed, threshold)
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateSignerSet { signers, threshold } => {
            execute_update_signer_set(deps, info, signers, threshold)
        }
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, info, admin),
    }
}

pub fn execute_update_signer_set(
    deps: DepsMut,
    info: MessageInfo,
    signers: Vec<String>,
    threshold: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let set = parse_signer_set(&signers, threshold)?;
    SIGNER_SET.save(deps.storage, &set)?;

    Ok(Response::new()
        .add_attribute("method", "update_signer_set")
        .add_attribute("signer_count", set.len().to_string())
        .add_attribute("threshold", set.threshold.to_string()))
}

pub fn execute_update_admin(
    deps: DepsMut,
    info: MessageInfo,
    admin: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    config.admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_admin")
        .add_attribute("admin", config.admin))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::SignerSet {} => to_json_binary(&query_signer_set(deps)?),
        QueryMsg::IsSigner { address } => to_json_binary(&query_is_signer(deps, address)?),
        QueryMsg::Verify {
            message_hash,
            signatures,
        } => to_json_binary(&query_verify(deps, message_hash, signatures)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
    })
}

pub fn query_signer_set(deps: Deps) -> StdResult<SignerSetResponse> {
    let set = SIGNER_SET.load(deps.storage)?;
    Ok(SignerSetResponse {
        signers: set.signers.iter().map(evm_address_to_hex).collect(),
        threshold: set.threshold,
    })
}

pub fn query_is_signer(deps: Deps, address: String) -> StdResult<IsSignerResponse> {
    let set = SIGNER_SET.load(deps.storage)?;
    let is_signer = match parse_evm_address(&address) {
        Ok(parsed) => set.contains(&parsed),
        Err(_) => false,
    };
    Ok(IsSignerResponse { is_signer })
}

/// Attestation failures are reported in the response, not as query errors.
pub fn query_verify(
    deps: Deps,
    message_hash: Binary,
    signatures: Vec<Binary>,
) -> StdResult<VerifyResponse> {
    let message_hash = parse_bytes32(&message_hash)?;
    let set = SIGNER_SET.load(deps.storage)?;
    let recovery = ApiRecovery::new(deps.api);

    let response = match verify_attestation(&set, &message_hash, &signatures, &recovery) {
        Ok(counted) => VerifyResponse {
            valid: true,
            signers: counted.iter().map(evm_address_to_hex).collect(),
            threshold: set.threshold,
            reason: None,
        },
        Err(err) => VerifyResponse {
            valid: false,
            signers: vec![],
            threshold: set.threshold,
            reason: Some(err.to_string()),
        },
    };
    Ok(response)
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
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    const SIGNERS: [&str; 3] = [
        "0x1111111111111111111111111111111111111111",
        "0x2222222222222222222222222222222222222222",
        "0x3333333333333333333333333333333333333333",
    ];

    fn init_msg(signers: &[&str], threshold: u32) -> InstantiateMsg {
        InstantiateMsg {
            admin: "admin".to_string(),
            signers: signers.iter().map(|s| s.to_string()).collect(),
            threshold,
        }
    }

    #[test]
    fn test_instantiate_stores_set() {
        let mut deps = mock_dependencies();
        let res = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&SIGNERS, 2),
        )
        .unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "threshold" && a.value == "2"));

        let set = query_signer_set(deps.as_ref()).unwrap();
        assert_eq!(set.signers, SIGNERS.to_vec());
        assert_eq!(set.threshold, 2);
    }

    #[test]
    fn test_instantiate_rejects_small_set() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&SIGNERS[..2], 1),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidSignerSet { .. }));
    }

    #[test]
    fn test_instantiate_rejects_threshold_out_of_range() {
        for threshold in [0, 4] {
            let mut deps = mock_dependencies();
            let err = instantiate(
                deps.as_mut(),
                mock_env(),
                mock_info("creator", &[]),
                init_msg(&SIGNERS, threshold),
            )
            .unwrap_err();
            assert!(matches!(err, ContractError::InvalidThreshold { .. }));
        }
    }

    #[test]
    fn test_instantiate_rejects_bad_address() {
        let mut deps = mock_dependencies();
        let err = instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&[SIGNERS[0], SIGNERS[1], "0xnothex"], 2),
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidSignerSet { .. }));
    }

    #[test]
    fn test_update_signer_set_admin_only() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&SIGNERS, 2),
        )
        .unwrap();

        let update = ExecuteMsg::UpdateSignerSet {
            signers: SIGNERS.iter().map(|s| s.to_string()).collect(),
            threshold: 3,
        };
        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            update.clone(),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(deps.as_mut(), mock_env(), mock_info("admin", &[]), update).unwrap();
        assert_eq!(query_signer_set(deps.as_ref()).unwrap().threshold, 3);
    }

    #[test]
    fn test_is_signer() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&SIGNERS, 2),
        )
        .unwrap();

        // Checksummed input matches the lowercase stored form
        assert!(
            query_is_signer(deps.as_ref(), SIGNERS[0].to_uppercase().replace("0X", "0x"))
                .unwrap()
                .is_signer
        );
        assert!(
            !query_is_signer(
                deps.as_ref(),
                "0x4444444444444444444444444444444444444444".to_string()
            )
            .unwrap()
            .is_signer
        );
        assert!(!query_is_signer(deps.as_ref(), "garbage".to_string()).unwrap().is_signer);
    }

    #[test]
    fn test_verify_rejects_bad_hash_length() {
        let mut deps = mock_dependencies();
        instantiate(
            deps.as_mut(),
            mock_env(),
            mock_info("creator", &[]),
            init_msg(&SIGNERS, 2),
        )
        .unwrap();
        assert!(query_verify(deps.as_ref(), Binary::from(vec![1u8; 31]), vec![]).is_err());

        let res = query_verify(deps.as_ref(), Binary::from(vec![1u8; 32]), vec![]).unwrap();
        assert!(!res.valid);
        assert_eq!(
            res.reason.unwrap(),
            "insufficient signatures: got 0, need 2"
        );
    }
}
