//! Client configuration.
//!
//! The orders endpoint is addressed relative to an origin, the way a page
//! script resolves `orders?...` against its own location. [`ClientConfig`]
//! carries that origin plus the few knobs of the default transport.
//!
//! ```rust
//! use orders_client::config::ClientConfig;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = ClientConfig::builder()
//!     .base_url("http://localhost:8000/")
//!     .user_agent("orders-dashboard/0.1")
//!     .build()?;
//! assert_eq!(cfg.base_url.as_str(), "http://localhost:8000/");
//! # Ok(()) }
//! ```
//!
//! Note that `orders` replaces the last path segment of the base URL, so a
//! base of `http://host/app` resolves to `http://host/orders` while
//! `http://host/app/` resolves to `http://host/app/orders`.
use std::fmt;
use url::Url;

const DEFAULT_BASE_URL: &str = "http://localhost:8000/";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// URL that `orders` is resolved against
    pub base_url: Url,
    /// User agent sent by the default transport. `None` sends none.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Config for the given origin with everything else left at its default.
    pub fn for_base(base_url: &str) -> Result<Self, ClientConfigError> {
        Self::builder().base_url(base_url).build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
}

impl ClientConfigBuilder {
    pub fn base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, ua: S) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Validate and build the final config.
    pub fn build(self) -> Result<ClientConfig, ClientConfigError> {
        let mut cfg = ClientConfig::default();
        if let Some(raw) = self.base_url {
            cfg.base_url = parse_base(&raw)?;
        }
        if let Some(ua) = self.user_agent {
            if ua.trim().is_empty() {
                return Err(ClientConfigError::EmptyUserAgent);
            }
            cfg.user_agent = Some(ua);
        }
        Ok(cfg)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientConfigError {
    InvalidBaseUrl { url: String, reason: String },
    UnsupportedScheme(String),
    CannotBeABase(String),
    EmptyUserAgent,
}

impl fmt::Display for ClientConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientConfigError::InvalidBaseUrl { url, reason } => write!(f, "base url {url:?} is invalid: {reason}"),
            ClientConfigError::UnsupportedScheme(s) => write!(f, "scheme {s:?} is not supported (expected http or https)"),
            ClientConfigError::CannotBeABase(url) => write!(f, "{url:?} cannot be used as a base url"),
            ClientConfigError::EmptyUserAgent => write!(f, "user_agent must not be empty"),
        }
    }
}
impl std::error::Error for ClientConfigError {}

fn parse_base(raw: &str) -> Result<Url, ClientConfigError> {
    let url = Url::parse(raw).map_err(|e| ClientConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ClientConfigError::CannotBeABase(raw.to_string()));
    }
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClientConfigError::UnsupportedScheme(other.to_string())),
    }
}
