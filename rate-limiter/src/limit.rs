//! Fixed-window accounting.
//!
//! A window opens at the first consumption after the previous one expired and
//! lasts `window_seconds`. Expiry is checked against block time only when the
//! token is touched, so an idle token simply reopens on its next use.

use cosmwasm_std::{Env, StdError, StdResult, Storage, Timestamp, Uint128};

use crate::error::ContractError;
use crate::state::{RateLimitConfig, RateLimitWindow, CONFIG, RATE_LIMITS, RATE_WINDOWS};

/// The token's own limit, falling back to the configured default.
pub fn effective_limit(storage: &dyn Storage, token: &str) -> StdResult<Option<RateLimitConfig>> {
    if let Some(limit) = RATE_LIMITS.may_load(storage, token)? {
        return Ok(Some(limit));
    }
    Ok(CONFIG.load(storage)?.default_limit)
}

/// The window as seen at `now`: a fresh one if none is stored or the stored
/// one has expired.
pub fn current_window(
    stored: Option<RateLimitWindow>,
    limit: &RateLimitConfig,
    now: Timestamp,
) -> RateLimitWindow {
    match stored {
        Some(window)
            if now.seconds() < window.window_start.seconds().saturating_add(limit.window_seconds) =>
        {
            window
        }
        _ => RateLimitWindow {
            window_start: now,
            used: Uint128::zero(),
        },
    }
}

/// Check `amount` against `limit` and return the window after consuming it.
///
/// Returns `None` when the limit has no period cap (nothing to track).
pub fn try_consume(
    limit: &RateLimitConfig,
    stored: Option<RateLimitWindow>,
    now: Timestamp,
    amount: Uint128,
) -> Result<Option<RateLimitWindow>, ContractError> {
    if !limit.max_per_transaction.is_zero() && amount > limit.max_per_transaction {
        return Err(ContractError::RateLimitExceeded {
            limit_type: "per_transaction".to_string(),
            limit: limit.max_per_transaction,
            requested: amount,
        });
    }

    if limit.max_per_period.is_zero() {
        return Ok(None);
    }

    let mut window = current_window(stored, limit, now);
    let new_used = window.used.checked_add(amount).map_err(StdError::from)?;
    if new_used > limit.max_per_period {
        return Err(ContractError::RateLimitExceeded {
            limit_type: "per_period".to_string(),
            limit: limit.max_per_period,
            requested: amount,
        });
    }

    window.used = new_used;
    Ok(Some(window))
}

/// Check and commit a consumption for `token`. Nothing is written on error.
pub fn check_and_update_rate_limit(
    storage: &mut dyn Storage,
    env: &Env,
    token: &str,
    amount: Uint128,
) -> Result<Option<RateLimitWindow>, ContractError> {
    let Some(limit) = effective_limit(storage, token)? else {
        return Ok(None); // No limit configured
    };

    let stored = RATE_WINDOWS.may_load(storage, token)?;
    let window = try_consume(&limit, stored, env.block.time, amount)?;
    if let Some(window) = &window {
        RATE_WINDOWS.save(storage, token, window)?;
    }
    Ok(window)
}
