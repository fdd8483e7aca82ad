use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// At least three distinct addresses
    pub guardians: Vec<String>,
    pub threshold: u32,
    /// Optional initial target; can be set later with `SetBridgeTarget`
    pub bridge_target: Option<String>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum PauseAction {
    Pause,
    Unpause,
}

impl PauseAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PauseAction::Pause => "pause",
            PauseAction::Unpause => "unpause",
        }
    }
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Vote for a pause state change (guardians only)
    Vote { action: PauseAction },
    /// Withdraw the sender's vote in the current round (guardians only)
    RevokeVote {},
    /// Register the contract to pause (admin only). Same address is a no-op.
    SetBridgeTarget { address: String },
}

/// Messages the guardian sends to its target.
#[cw_serde]
pub enum TargetExecuteMsg {
    Pause {},
    Unpause {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(GuardiansResponse)]
    Guardians {},

    #[returns(PauseStateResponse)]
    PauseState {},

    /// Whether `guardian` has voted in the current round
    #[returns(HasVotedResponse)]
    HasVoted { guardian: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub threshold: u32,
    pub bridge_target: Option<Addr>,
}

#[cw_serde]
pub struct GuardiansResponse {
    pub guardians: Vec<Addr>,
    pub threshold: u32,
}

#[cw_serde]
pub struct PauseStateResponse {
    pub paused: bool,
    pub round: u64,
    /// Votes collected so far in the current round
    pub votes: u32,
}

#[cw_serde]
pub struct HasVotedResponse {
    pub has_voted: bool,
}
