use std::time::Duration;

use super::env::{ConfigViolation, EnvMap};

/// Fixed-window throttle thresholds.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    pub max_requests: u64,
    pub window_ms: u64,
}

impl RateLimitConfig {
    /// Load rate-limit thresholds from the environment snapshot
    ///
    /// Environment variables:
    /// - COMMON_RATE_LIMIT_MAX_REQUESTS: requests allowed per window
    ///   (default: 1000, must be positive)
    /// - COMMON_RATE_LIMIT_WINDOW_MS: window length in milliseconds
    ///   (default: 1000, must be positive)
    pub(crate) fn load(env: &EnvMap, violations: &mut Vec<ConfigViolation>) -> Self {
        let max_requests = positive(env, "COMMON_RATE_LIMIT_MAX_REQUESTS", 1000, violations);
        let window_ms = positive(env, "COMMON_RATE_LIMIT_WINDOW_MS", 1000, violations);

        Self {
            max_requests,
            window_ms,
        }
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }
}

fn positive(
    env: &EnvMap,
    key: &'static str,
    default: u64,
    violations: &mut Vec<ConfigViolation>,
) -> u64 {
    let value = super::env::parse_or(env, key, default, "must be a positive integer", violations);
    if value == 0 {
        violations.push(ConfigViolation {
            key,
            reason: "must be a positive integer".to_string(),
        });
        return default;
    }
    value
}
