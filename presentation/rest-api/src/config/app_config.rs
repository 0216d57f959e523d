use persistence::db::DatabaseConfig;

use super::cors_config::CorsConfig;
use super::env::{ConfigError, EnvMap};
use super::environment::Environment;
use super::logging_config::LogLevel;
use super::rate_limit_config::RateLimitConfig;
use super::server_config::ServerConfig;
use super::{database_config, environment, logging_config};

/// The whole configuration, validated in one pass. Loading either yields a
/// complete config or a `ConfigError` carrying every violation; no partial
/// configuration ever escapes.
#[derive(Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub log_level: LogLevel,
    pub environment: Environment,
    pub redis_uri: Option<String>,
}

impl AppConfig {
    pub fn load(env: &EnvMap) -> Result<Self, ConfigError> {
        let mut violations = Vec::new();

        let server = ServerConfig::load(env, &mut violations);
        let database = database_config::load(env, &mut violations);
        let cors = CorsConfig::load(env, &mut violations);
        let rate_limit = RateLimitConfig::load(env, &mut violations);
        let log_level = logging_config::load(env, &mut violations);
        let environment = environment::load(env, &mut violations);
        let redis_uri = super::env::optional_url(env, "REDIS_URI", &mut violations);

        if !violations.is_empty() {
            return Err(ConfigError { violations });
        }

        Ok(Self {
            server,
            database,
            cors,
            rate_limit,
            log_level,
            environment,
            redis_uri,
        })
    }
}
