use std::fmt;
use std::str::FromStr;

use super::env::{ConfigViolation, EnvMap};

/// Deployment environment, from `NODE_ENV` (default: development).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn is_test(self) -> bool {
        self == Environment::Test
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(Environment::Development),
            "test" => Ok(Environment::Test),
            "production" => Ok(Environment::Production),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        };
        write!(f, "{name}")
    }
}

pub(crate) fn load(env: &EnvMap, violations: &mut Vec<ConfigViolation>) -> Environment {
    super::env::parse_or(
        env,
        "NODE_ENV",
        Environment::default(),
        "must be one of development, test, production",
        violations,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_development() {
        let mut violations = Vec::new();

        let environment = load(&EnvMap::new(), &mut violations);

        assert_eq!(environment, Environment::Development);
        assert!(environment.is_development());
        assert!(!environment.is_production());
        assert!(violations.is_empty());
    }

    #[test]
    fn should_reject_unknown_environment_name() {
        let env: EnvMap = [("NODE_ENV".to_string(), "staging".to_string())]
            .into_iter()
            .collect();
        let mut violations = Vec::new();

        load(&env, &mut violations);

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "NODE_ENV must be one of development, test, production"
        );
    }

    #[test]
    fn should_parse_production() {
        let env: EnvMap = [("NODE_ENV".to_string(), "production".to_string())]
            .into_iter()
            .collect();
        let mut violations = Vec::new();

        let environment = load(&env, &mut violations);

        assert!(environment.is_production());
        assert_eq!(environment.to_string(), "production");
    }
}
