use persistence::db::DatabaseConfig;

use super::env::{ConfigViolation, EnvMap};

/// Load database connection coordinates from the environment snapshot
///
/// Environment variables:
/// - MONGODB_HOSTNAME: store host (required)
/// - MONGODB_PORT: store port (default: 27017, must be positive)
/// - MONGODB_DB_NAME: database name (required)
pub(crate) fn load(env: &EnvMap, violations: &mut Vec<ConfigViolation>) -> DatabaseConfig {
    let hostname = super::env::required_string(env, "MONGODB_HOSTNAME", violations);
    let port: u16 = super::env::parse_or(
        env,
        "MONGODB_PORT",
        27017,
        "must be a positive integer",
        violations,
    );
    if port == 0 {
        violations.push(ConfigViolation {
            key: "MONGODB_PORT",
            reason: "must be a positive integer".to_string(),
        });
    }
    let db_name = super::env::required_string(env, "MONGODB_DB_NAME", violations);

    DatabaseConfig {
        hostname,
        port,
        db_name,
    }
}
