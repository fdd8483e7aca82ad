use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Timestamp, Uint128};

use crate::state::RateLimitConfig;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    /// Limit for tokens without their own configuration
    pub default_limit: Option<RateLimitConfig>,
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Consume capacity for an outgoing transfer (authorized callers only)
    Consume { token: String, amount: Uint128 },

    // ========================================================================
    // Admin
    // ========================================================================
    /// Grant or revoke consume rights. Repeating the current value is a no-op.
    SetAuthorizedCaller { caller: String, authorized: bool },

    SetRateLimit {
        token: String,
        /// Maximum per single transaction (0 = unlimited)
        max_per_transaction: Uint128,
        /// Maximum per window (0 = unlimited)
        max_per_period: Uint128,
        /// Window length; defaults to 24 hours
        window_seconds: Option<u64>,
    },

    RemoveRateLimit { token: String },

    SetDefaultLimit { limit: Option<RateLimitConfig> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Effective limit for a token (own or default)
    #[returns(Option<RateLimitResponse>)]
    RateLimit { token: String },

    /// Current window with expiry applied at the query's block time
    #[returns(WindowResponse)]
    Window { token: String },

    /// Whether `amount` would be accepted right now
    #[returns(CanConsumeResponse)]
    CanConsume { token: String, amount: Uint128 },

    #[returns(IsAuthorizedResponse)]
    IsAuthorized { caller: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub default_limit: Option<RateLimitConfig>,
}

#[cw_serde]
pub struct RateLimitResponse {
    pub token: String,
    pub max_per_transaction: Uint128,
    pub max_per_period: Uint128,
    pub window_seconds: u64,
    /// True when the token falls back to the default limit
    pub is_default: bool,
}

#[cw_serde]
pub struct WindowResponse {
    pub token: String,
    pub window_start: Timestamp,
    pub window_end: Timestamp,
    pub used: Uint128,
    /// None when the token has no period cap
    pub remaining: Option<Uint128>,
}

#[cw_serde]
pub struct CanConsumeResponse {
    pub allowed: bool,
    pub reason: Option<String>,
}

#[cw_serde]
pub struct IsAuthorizedResponse {
    pub authorized: bool,
}
