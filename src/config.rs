use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::constants::{defaults, envvars};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported URL scheme '{scheme}' in {var}")]
    UnsupportedScheme { var: &'static str, scheme: String },
    #[error("invalid request timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("{0} is set but blank")]
    BlankToken(&'static str),
}

/// Connection settings for one FIWARE backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub fiware_service: String,
    pub fiware_servicepath: String,
    pub request_timeout: Duration,
    pub api_token: Option<String>,
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        fiware_service: impl Into<String>,
        fiware_servicepath: impl Into<String>,
        request_timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            fiware_service: fiware_service.into(),
            fiware_servicepath: fiware_servicepath.into(),
            request_timeout,
            api_token: None,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }
}

/// Environment-wide settings for both backends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub iota_base_url: String,
    pub orion_base_url: String,
    pub fiware_service: String,
    pub fiware_servicepath: String,
    pub fiware_resource: String,
    pub api_token: Option<String>,
    pub request_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            iota_base_url: defaults::IOTA_BASE_URL.to_string(),
            orion_base_url: defaults::ORION_BASE_URL.to_string(),
            fiware_service: defaults::FIWARE_SERVICE.to_string(),
            fiware_servicepath: defaults::FIWARE_SERVICEPATH.to_string(),
            fiware_resource: defaults::FIWARE_RESOURCE.to_string(),
            api_token: None,
            request_timeout: defaults::REQUEST_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = match env::var(envvars::API_TOKEN) {
            Ok(token) if token.trim().is_empty() => {
                return Err(ConfigError::BlankToken(envvars::API_TOKEN))
            }
            Ok(token) => Some(token),
            Err(_) => None,
        };

        Ok(Self {
            iota_base_url: base_url_from_env(envvars::IOTA_URL, defaults::IOTA_BASE_URL)?,
            orion_base_url: base_url_from_env(envvars::ORION_URL, defaults::ORION_BASE_URL)?,
            fiware_service: env_or(envvars::FIWARE_SERVICE, defaults::FIWARE_SERVICE),
            fiware_servicepath: env_or(envvars::FIWARE_SERVICEPATH, defaults::FIWARE_SERVICEPATH),
            fiware_resource: env_or(envvars::FIWARE_RESOURCE, defaults::FIWARE_RESOURCE),
            api_token,
            request_timeout: timeout_from_env()?,
        })
    }

    pub fn iot_agent_config(&self) -> ClientConfig {
        self.client_config(&self.iota_base_url)
    }

    pub fn orion_config(&self) -> ClientConfig {
        self.client_config(&self.orion_base_url)
    }

    fn client_config(&self, base_url: &str) -> ClientConfig {
        ClientConfig {
            base_url: base_url.to_string(),
            fiware_service: self.fiware_service.clone(),
            fiware_servicepath: self.fiware_servicepath.clone(),
            request_timeout: self.request_timeout,
            api_token: self.api_token.clone(),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var).unwrap_or_else(|_| default.to_string())
}

fn base_url_from_env(var: &'static str, default: &str) -> Result<String, ConfigError> {
    let base_url = env_or(var, default);
    let parsed = Url::parse(&base_url).map_err(|source| ConfigError::InvalidUrl { var, source })?;
    match parsed.scheme() {
        "http" | "https" => Ok(base_url),
        scheme => Err(ConfigError::UnsupportedScheme {
            var,
            scheme: scheme.to_string(),
        }),
    }
}

fn timeout_from_env() -> Result<Duration, ConfigError> {
    let Ok(raw) = env::var(envvars::REQUEST_TIMEOUT) else {
        return Ok(defaults::REQUEST_TIMEOUT);
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout(raw)),
    }
}
