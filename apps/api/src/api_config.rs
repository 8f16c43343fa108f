use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use filmorate_core::AppError;
use tracing_subscriber::EnvFilter;

const DEFAULT_API_HOST: &str = "127.0.0.1";
const DEFAULT_API_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_ID_SEED: i64 = 1;

/// Runtime settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub api_port: u16,
    pub frontend_url: String,
    pub id_seed: i64,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let api_host = optional_value(&lookup, "API_HOST")
            .unwrap_or_else(|| DEFAULT_API_HOST.to_owned());
        let api_port = optional_value(&lookup, "API_PORT")
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|error| AppError::Validation(format!("invalid API_PORT: {error}")))
            })
            .transpose()?
            .unwrap_or(DEFAULT_API_PORT);
        let frontend_url = optional_value(&lookup, "FRONTEND_URL")
            .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_owned());
        let id_seed = optional_value(&lookup, "FILMORATE_ID_SEED")
            .map(|value| parse_id_seed(&value))
            .transpose()?
            .unwrap_or(DEFAULT_ID_SEED);

        Ok(Self {
            api_host,
            api_port,
            frontend_url,
            id_seed,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn optional_value(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|value| !value.trim().is_empty())
}

fn parse_id_seed(value: &str) -> Result<i64, AppError> {
    let seed = value
        .trim()
        .parse::<i64>()
        .map_err(|error| AppError::Validation(format!("invalid FILMORATE_ID_SEED: {error}")))?;
    if seed <= 0 {
        return Err(AppError::Validation(format!(
            "FILMORATE_ID_SEED must be positive, got {seed}"
        )));
    }

    Ok(seed)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use filmorate_core::AppError;

    use super::ApiConfig;

    fn load_from(pairs: &[(&str, &str)]) -> Result<ApiConfig, AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(|name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let config = load_from(&[]).unwrap_or_else(|error| panic!("config: {error}"));

        assert_eq!(config.api_host, "127.0.0.1");
        assert_eq!(config.api_port, 8080);
        assert_eq!(config.frontend_url, "http://localhost:3000");
        assert_eq!(config.id_seed, 1);
        assert_eq!(
            config.socket_address().map(|address| address.to_string()),
            Ok("127.0.0.1:8080".to_owned())
        );
    }

    #[test]
    fn overrides_are_read() {
        let config = load_from(&[
            ("API_HOST", "0.0.0.0"),
            ("API_PORT", "9090"),
            ("FRONTEND_URL", "https://filmorate.example"),
            ("FILMORATE_ID_SEED", "100"),
        ])
        .unwrap_or_else(|error| panic!("config: {error}"));

        assert_eq!(config.api_port, 9090);
        assert_eq!(config.frontend_url, "https://filmorate.example");
        assert_eq!(config.id_seed, 100);
    }

    #[test]
    fn invalid_values_fail_startup() {
        for pairs in [
            [("API_PORT", "eighty")],
            [("FILMORATE_ID_SEED", "0")],
            [("FILMORATE_ID_SEED", "-4")],
        ] {
            assert!(matches!(load_from(&pairs), Err(AppError::Validation(_))));
        }

        let config = load_from(&[("API_HOST", "not-an-ip")])
            .unwrap_or_else(|error| panic!("config: {error}"));
        assert!(matches!(
            config.socket_address(),
            Err(AppError::Validation(_))
        ));
    }
}
