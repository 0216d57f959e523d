use super::env::{ConfigViolation, EnvMap};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Load server configuration from the environment snapshot
    ///
    /// Environment variables:
    /// - HOST: address to bind (default: "localhost")
    /// - PORT: port to bind (default: 0, meaning OS-assigned)
    pub(crate) fn load(env: &EnvMap, violations: &mut Vec<ConfigViolation>) -> Self {
        let host = super::env::non_empty_or(env, "HOST", "localhost", violations);
        let port = super::env::parse_or(
            env,
            "PORT",
            0,
            "must be an integer between 0 and 65535",
            violations,
        );

        Self { host, port }
    }

    /// Get the bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
