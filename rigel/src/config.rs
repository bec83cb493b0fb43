use std::fmt::{Debug, Formatter};

use rigel_core::Context;

use crate::constants::*;

/// Config carries all the configuration the client needs.
///
/// All three fields must be set before [`Client`](crate::Client)
/// construction succeeds.
#[derive(Clone, Default)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RIGEL_ENDPOINT`]
    ///
    /// A trailing `/` is stripped when the client is built.
    pub endpoint: Option<String>,
    /// `key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RIGEL_KEY`]
    pub key: Option<String>,
    /// `salt` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`RIGEL_SALT`]
    pub salt: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("key", &self.key.as_deref().map(|_| "***"))
            .field("salt", &self.salt.as_deref().map(|_| "***"))
            .finish()
    }
}

impl Config {
    /// Fill unset fields from the process environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        self.endpoint = self.endpoint.or_else(|| ctx.env_var(RIGEL_ENDPOINT));
        self.key = self.key.or_else(|| ctx.env_var(RIGEL_KEY));
        self.salt = self.salt.or_else(|| ctx.env_var(RIGEL_SALT));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rigel_core::StaticEnv;
    use std::collections::HashMap;

    #[test]
    fn test_from_env_fills_unset_fields() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (RIGEL_ENDPOINT.to_string(), "http://localhost:8080/rigel".to_string()),
                (RIGEL_KEY.to_string(), "secretkey".to_string()),
                (RIGEL_SALT.to_string(), "secretsalt".to_string()),
            ]),
        });

        let config = Config::default().from_env(&ctx);

        assert_eq!(config.endpoint.as_deref(), Some("http://localhost:8080/rigel"));
        assert_eq!(config.key.as_deref(), Some("secretkey"));
        assert_eq!(config.salt.as_deref(), Some("secretsalt"));
    }

    #[test]
    fn test_from_env_keeps_explicit_values() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([(RIGEL_KEY.to_string(), "env-key".to_string())]),
        });

        let config = Config {
            key: Some("explicit-key".to_string()),
            ..Default::default()
        }
        .from_env(&ctx);

        assert_eq!(config.key.as_deref(), Some("explicit-key"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config {
            endpoint: Some("http://localhost:8080/rigel".to_string()),
            key: Some("secretkey".to_string()),
            salt: Some("secretsalt".to_string()),
        };

        let rendered = format!("{config:?}");
        assert!(rendered.contains("http://localhost:8080/rigel"));
        assert!(!rendered.contains("secretkey"));
        assert!(!rendered.contains("secretsalt"));
    }
}
