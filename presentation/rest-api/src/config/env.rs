use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Snapshot of the process environment, taken once in `main`. Every loader
/// reads from this map; nothing else touches `std::env`.
pub type EnvMap = HashMap<String, String>;

pub fn snapshot() -> EnvMap {
    std::env::vars().collect()
}

/// One rejected environment variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigViolation {
    pub key: &'static str,
    pub reason: String,
}

impl fmt::Display for ConfigViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.reason)
    }
}

/// Returned by `AppConfig::load` with every violation found in one pass.
#[derive(Debug, thiserror::Error)]
#[error("invalid environment variables")]
pub struct ConfigError {
    pub violations: Vec<ConfigViolation>,
}

fn trimmed<'a>(env: &'a EnvMap, key: &str) -> Option<&'a str> {
    env.get(key).map(|value| value.trim())
}

/// Required key. Records a violation and returns a placeholder on absence;
/// the placeholder never escapes because the aggregate loader fails when any
/// violation was recorded.
pub fn required_string(
    env: &EnvMap,
    key: &'static str,
    violations: &mut Vec<ConfigViolation>,
) -> String {
    match trimmed(env, key) {
        Some(value) if !value.is_empty() => value.to_string(),
        Some(_) => {
            violations.push(ConfigViolation {
                key,
                reason: "must not be empty".to_string(),
            });
            String::new()
        }
        None => {
            violations.push(ConfigViolation {
                key,
                reason: "is required".to_string(),
            });
            String::new()
        }
    }
}

/// Optional key with a default. A present-but-empty value is a violation,
/// not a fallback to the default.
pub fn non_empty_or(
    env: &EnvMap,
    key: &'static str,
    default: &str,
    violations: &mut Vec<ConfigViolation>,
) -> String {
    match trimmed(env, key) {
        Some(value) if !value.is_empty() => value.to_string(),
        Some(_) => {
            violations.push(ConfigViolation {
                key,
                reason: "must not be empty".to_string(),
            });
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Optional typed key. Absent falls back to the default; present but
/// unparseable records `reason` as the violation.
pub fn parse_or<T: FromStr>(
    env: &EnvMap,
    key: &'static str,
    default: T,
    reason: &str,
    violations: &mut Vec<ConfigViolation>,
) -> T {
    match trimmed(env, key) {
        Some(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                violations.push(ConfigViolation {
                    key,
                    reason: reason.to_string(),
                });
                default
            }
        },
        None => default,
    }
}

/// Optional key that must be a valid URL when present. The original string
/// is kept; only its shape is checked.
pub fn url_or(
    env: &EnvMap,
    key: &'static str,
    default: &str,
    violations: &mut Vec<ConfigViolation>,
) -> String {
    match trimmed(env, key) {
        Some(value) => {
            if url::Url::parse(value).is_err() {
                violations.push(ConfigViolation {
                    key,
                    reason: "must be a valid URL".to_string(),
                });
                default.to_string()
            } else {
                value.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// Fully optional URL key: `None` when absent, violation when malformed.
pub fn optional_url(
    env: &EnvMap,
    key: &'static str,
    violations: &mut Vec<ConfigViolation>,
) -> Option<String> {
    let value = trimmed(env, key)?;
    if url::Url::parse(value).is_err() {
        violations.push(ConfigViolation {
            key,
            reason: "must be a valid URL".to_string(),
        });
        return None;
    }
    Some(value.to_string())
}
