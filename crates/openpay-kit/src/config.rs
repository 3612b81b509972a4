use std::{fmt::Debug, time::Duration};

use bon::Builder;
use url::Url;

/// Default per-call timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

pub const SANDBOX_URL: &str = "https://sandbox-api.openpay.mx";
pub const PRODUCTION_URL: &str = "https://api.openpay.mx";

/// Openpay deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn base_url(&self) -> Result<Url, url::ParseError> {
        match self {
            Environment::Sandbox => Url::parse(SANDBOX_URL),
            Environment::Production => Url::parse(PRODUCTION_URL),
        }
    }
}

/// Client configuration, fixed at construction and shared by every resource view.
///
/// Resource paths are absolute (`/v1/{merchantId}/...`), so any path in `base_url` is
/// replaced when requests are resolved.
#[derive(Builder, Clone)]
pub struct ClientConfig {
    /// API host, e.g. [`SANDBOX_URL`].
    pub base_url: Url,
    /// The merchant account every resource path is scoped to.
    #[builder(into)]
    pub merchant_id: String,
    /// Private API key, sent as the HTTP basic auth user name.
    #[builder(into)]
    pub private_key: String,
    /// Maximum duration of a single call, connection included.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    #[builder(into, default = concat!("openpay-rust/", env!("CARGO_PKG_VERSION")).to_string())]
    pub user_agent: String,
}

impl Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("merchant_id", &self.merchant_id)
            .field("private_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid timeout '{0}': expected whole seconds")]
    InvalidTimeout(String),

    #[error("Credentials or user agent cannot be sent as a header: {0}")]
    InvalidHeader(#[from] http::header::InvalidHeaderValue),

    #[cfg(feature = "reqwest-transport")]
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ClientConfig {
    /// Reads the configuration from the environment.
    ///
    /// - `OPENPAY_MERCHANT_ID` and `OPENPAY_PRIVATE_KEY` are required.
    /// - `OPENPAY_BASE_URL` defaults to the sandbox.
    /// - `OPENPAY_TIMEOUT_SECS` defaults to [`DEFAULT_TIMEOUT`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let merchant_id =
            lookup("OPENPAY_MERCHANT_ID").ok_or(ConfigError::MissingVar("OPENPAY_MERCHANT_ID"))?;
        let private_key =
            lookup("OPENPAY_PRIVATE_KEY").ok_or(ConfigError::MissingVar("OPENPAY_PRIVATE_KEY"))?;

        let base_url = match lookup("OPENPAY_BASE_URL") {
            Some(url) => Url::parse(&url)?,
            None => Environment::Sandbox.base_url()?,
        };

        let timeout = match lookup("OPENPAY_TIMEOUT_SECS") {
            Some(secs) => secs
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(secs))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(ClientConfig::builder()
            .base_url(base_url)
            .merchant_id(merchant_id)
            .private_key(private_key)
            .timeout(timeout)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn builder_defaults() {
        let config = ClientConfig::builder()
            .base_url(Environment::Sandbox.base_url().unwrap())
            .merchant_id("mzdtln0bmtms6o3kck8f")
            .private_key("sk_e568c42a6c384b7ab02cd47d2e407cab")
            .build();

        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("openpay-rust/"));
        assert_eq!(config.base_url.as_str(), "https://sandbox-api.openpay.mx/");
    }

    #[test]
    fn debug_redacts_private_key() {
        let config = ClientConfig::builder()
            .base_url(Environment::Production.base_url().unwrap())
            .merchant_id("mzdtln0bmtms6o3kck8f")
            .private_key("sk_e568c42a6c384b7ab02cd47d2e407cab")
            .build();

        let debug = format!("{config:?}");
        assert!(!debug.contains("sk_e568c42a6c384b7ab02cd47d2e407cab"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn reads_environment() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("OPENPAY_MERCHANT_ID", "mzdtln0bmtms6o3kck8f"),
            ("OPENPAY_PRIVATE_KEY", "sk_test"),
            ("OPENPAY_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.merchant_id, "mzdtln0bmtms6o3kck8f");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.base_url.as_str(), "https://sandbox-api.openpay.mx/");
    }

    #[test]
    fn environment_errors() {
        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[("OPENPAY_PRIVATE_KEY", "sk_test")])),
            Err(ConfigError::MissingVar("OPENPAY_MERCHANT_ID"))
        ));

        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[
                ("OPENPAY_MERCHANT_ID", "m"),
                ("OPENPAY_PRIVATE_KEY", "k"),
                ("OPENPAY_TIMEOUT_SECS", "soon"),
            ])),
            Err(ConfigError::InvalidTimeout(_))
        ));

        assert!(matches!(
            ClientConfig::from_lookup(lookup(&[
                ("OPENPAY_MERCHANT_ID", "m"),
                ("OPENPAY_PRIVATE_KEY", "k"),
                ("OPENPAY_BASE_URL", "not a url"),
            ])),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
