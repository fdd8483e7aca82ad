//! State definitions for the rate limiter contract

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:bridge-rate-limiter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Window length used when a limit does not name one (24 hours)
pub const DEFAULT_WINDOW_SECONDS: u64 = 86_400;

// ============================================================================
// Types
// ============================================================================

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Limit applied to tokens without a specific configuration
    pub default_limit: Option<RateLimitConfig>,
}

/// Rate limit configuration for a token
#[cw_serde]
pub struct RateLimitConfig {
    /// Maximum amount per single transaction (0 = unlimited)
    pub max_per_transaction: Uint128,
    /// Maximum total amount per window (0 = unlimited)
    pub max_per_period: Uint128,
    /// Window length in seconds
    pub window_seconds: u64,
}

/// Rate limit window tracking for a token
#[cw_serde]
pub struct RateLimitWindow {
    /// Timestamp when the current window started
    pub window_start: Timestamp,
    /// Amount used in the current window
    pub used: Uint128,
}

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

/// Per-token rate limit configurations
/// Key: token identifier (denom or CW20 address)
pub const RATE_LIMITS: Map<&str, RateLimitConfig> = Map::new("rate_limits");

/// Per-token rate limit window tracking
pub const RATE_WINDOWS: Map<&str, RateLimitWindow> = Map::new("rate_windows");

/// Contracts allowed to consume capacity
pub const AUTHORIZED_CALLERS: Map<&Addr, bool> = Map::new("authorized_callers");
