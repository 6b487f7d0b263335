//! Client configuration.
//!
//! A [`Config`] holds the secret key, the target environment and transport settings. It
//! can be built in code or read from `CKO_*` environment variables.

use crate::errors::{CheckoutError, Result};
use std::time::Duration;
use url::Url;

/// Sandbox API root.
pub const SANDBOX_URL: &str = "https://api.sandbox.checkout.com";

/// Production API root.
pub const PRODUCTION_URL: &str = "https://api.checkout.com";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Gateway environment a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Test environment, no real money moves
    #[default]
    Sandbox,
    /// Live environment
    Production,
}

impl Environment {
    /// API root of this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }
}

/// Configuration for the payments client.
#[derive(Clone)]
pub struct Config {
    /// Secret key sent in the `Authorization` header
    pub secret_key: String,

    /// Public key, used for client-side tokenization only
    pub public_key: Option<String>,

    /// Target environment
    pub environment: Environment,

    /// Request timeout
    pub timeout: Duration,

    /// Overrides the environment's API root (e.g. a local mock)
    pub base_url: Option<String>,
}

// The secret key never shows up in logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("secret_key", &"***")
            .field("public_key", &self.public_key)
            .field("environment", &self.environment)
            .field("timeout", &self.timeout)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Config {
    /// Creates a sandbox configuration with the default timeout.
    ///
    /// # Examples
    ///
    /// ```
    /// use checkout_sdk::config::{Config, Environment};
    ///
    /// let config = Config::new("sk_test_fde517a8-3f01-41ef-b4bd-4282384b0a64");
    /// assert_eq!(config.environment, Environment::Sandbox);
    /// assert_eq!(config.api_base().unwrap().as_str(), "https://api.sandbox.checkout.com/");
    /// ```
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            public_key: None,
            environment: Environment::Sandbox,
            timeout: DEFAULT_TIMEOUT,
            base_url: None,
        }
    }

    /// Reads the configuration from the environment.
    ///
    /// `CKO_SECRET_KEY` is required. `CKO_PUBLIC_KEY`, `CKO_SANDBOX` (`false`, `0` or
    /// `no` selects production), `CKO_TIMEOUT` (milliseconds) and `CKO_BASE_URL` are
    /// optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret_key = lookup("CKO_SECRET_KEY")
            .filter(|key| !key.is_empty())
            .ok_or_else(|| CheckoutError::ConfigError("CKO_SECRET_KEY is not set".to_string()))?;

        let mut config = Config::new(secret_key);
        config.public_key = lookup("CKO_PUBLIC_KEY").filter(|key| !key.is_empty());

        if let Some(sandbox) = lookup("CKO_SANDBOX") {
            let sandbox = sandbox.trim().to_ascii_lowercase();
            if matches!(sandbox.as_str(), "false" | "0" | "no") {
                config.environment = Environment::Production;
            }
        }

        if let Some(timeout) = lookup("CKO_TIMEOUT") {
            let millis: u64 = timeout.trim().parse().map_err(|_| {
                CheckoutError::ConfigError(format!("CKO_TIMEOUT is not a number: {}", timeout))
            })?;
            config.timeout = Duration::from_millis(millis);
        }

        config.base_url = lookup("CKO_BASE_URL").filter(|url| !url.is_empty());
        Ok(config)
    }

    /// Sets the public key.
    pub fn with_public_key(mut self, public_key: impl Into<String>) -> Self {
        self.public_key = Some(public_key.into());
        self
    }

    /// Sets the environment.
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// The API root requests are resolved against.
    ///
    /// Always ends in `/` so relative paths join below any path of an overridden root.
    pub fn api_base(&self) -> Result<Url> {
        let base = self
            .base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url());
        let mut url = Url::parse(base)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}
