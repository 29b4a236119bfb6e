use std::env;

use thiserror::Error;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub max_connections: u32,
    pub server_address: String,
}

impl Settings {
    /// Reads settings from the process environment. Call `dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value,
                })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let server_address =
            lookup("SERVER_ADDRESS").unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());

        Ok(Settings {
            database_url,
            max_connections,
            server_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_database_url_is_set() {
        let settings =
            Settings::from_lookup(lookup_from(&[("DATABASE_URL", "sqlite::memory:")])).unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(settings.server_address, DEFAULT_SERVER_ADDRESS);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Settings::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));
    }

    #[test]
    fn zero_or_garbage_pool_size_is_rejected() {
        for bad in ["0", "five", "-1"] {
            let err = Settings::from_lookup(lookup_from(&[
                ("DATABASE_URL", "sqlite::memory:"),
                ("DATABASE_MAX_CONNECTIONS", bad),
            ]))
            .unwrap_err();
            assert!(matches!(
                err,
                ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    ..
                }
            ));
        }
    }

    #[test]
    fn explicit_values_override_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite://recipe.db?mode=rwc"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("SERVER_ADDRESS", "127.0.0.1:9000"),
        ]))
        .unwrap();
        assert_eq!(settings.max_connections, 12);
        assert_eq!(settings.server_address, "127.0.0.1:9000");
    }
}
