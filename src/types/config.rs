//! Client configuration

use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT};
use std::env;
use std::time::Duration;
use url::Url;

use super::constants::{api, env as env_vars};
use crate::{BfinancialError, Result};

/// Configuration for a payment client
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the payment API (e.g. `http://127.0.0.1:8080/api`)
    pub base_url: String,
    /// Bearer credential sent with every request
    pub auth_token: String,
    /// Upper bound on the whole request, connect to last body byte
    pub timeout: Duration,
    /// Name of the header carrying the credential
    pub auth_header: String,
    /// Optional User-Agent override
    pub user_agent: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("auth_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("auth_header", &self.auth_header)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    /// Create a new client config
    pub fn new(base_url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth_token: auth_token.into(),
            timeout: Duration::from_secs(api::DEFAULT_TIMEOUT_SECS),
            auth_header: api::DEFAULT_AUTH_HEADER.to_string(),
            user_agent: None,
        }
    }

    /// Config for the default endpoint with the given credential
    pub fn login(auth_token: impl Into<String>) -> Self {
        Self::new(api::DEFAULT_API_URL, auth_token)
    }

    /// Load the config from `BFINANCIAL_*` environment variables
    pub fn from_env() -> Result<Self> {
        let auth_token = env::var(env_vars::API_KEY).map_err(|_| {
            BfinancialError::config(format!("Missing credentials: {} must be set", env_vars::API_KEY))
        })?;
        let base_url =
            env::var(env_vars::API_URL).unwrap_or_else(|_| api::DEFAULT_API_URL.to_string());

        let mut config = Self::new(base_url, auth_token);

        if let Ok(raw) = env::var(env_vars::TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                BfinancialError::config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env_vars::TIMEOUT_SECS,
                    raw
                ))
            })?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(BfinancialError::config("API URL cannot be empty"));
        }

        let url = Url::parse(&self.base_url)
            .map_err(|e| BfinancialError::config(format!("Invalid API URL '{}': {}", self.base_url, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(BfinancialError::config(
                "API URL must start with http:// or https://",
            ));
        }

        if self.auth_token.trim().is_empty() {
            return Err(BfinancialError::config("Auth token cannot be empty"));
        }

        HeaderName::from_bytes(self.auth_header.as_bytes()).map_err(|_| {
            BfinancialError::config(format!("Invalid auth header name '{}'", self.auth_header))
        })?;

        if self.timeout.is_zero() {
            return Err(BfinancialError::config("Timeout must be greater than zero"));
        }

        Ok(())
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the name of the header carrying the credential
    pub fn with_auth_header(mut self, header: impl Into<String>) -> Self {
        self.auth_header = header.into();
        self
    }

    /// Set the User-Agent sent with requests
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Full URL of the payment creation endpoint
    pub fn create_payment_url(&self) -> String {
        api::create_payment_url(&self.base_url)
    }

    /// Value of the auth header
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.auth_token)
    }

    /// Headers sent with every request: content type, credential and User-Agent
    pub fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let name = HeaderName::from_bytes(self.auth_header.as_bytes()).map_err(|_| {
            BfinancialError::config(format!("Invalid auth header name '{}'", self.auth_header))
        })?;
        let mut value = HeaderValue::from_str(&self.bearer())
            .map_err(|_| BfinancialError::config("Auth token contains invalid header characters"))?;
        value.set_sensitive(true);
        headers.insert(name, value);

        if let Some(user_agent) = &self.user_agent {
            let value = HeaderValue::from_str(user_agent)
                .map_err(|_| BfinancialError::config(format!("Invalid User-Agent '{}'", user_agent)))?;
            headers.insert(USER_AGENT, value);
        }

        Ok(headers)
    }
}
