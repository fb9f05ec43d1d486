//! Order query client.
//!
//! [`OrderClient::fetch_orders`] serializes its parameters into a query
//! string, issues one `GET orders?<query>` against the configured origin and
//! resolves to whatever JSON the server sent back. The HTTP status is never
//! looked at: a `404` with a JSON body resolves just like a `200`. Only two
//! things make a call fail:
//!
//! - the transport could not get a response at all ([`FetchError::Transport`])
//! - the body is not JSON, or not the requested shape ([`FetchError::Parse`])
//!
//! There are no retries, no caching and no timeouts. Each call is independent;
//! clones of a client share the transport (and so its connection pool) but
//! nothing else.
//!
//! ```rust,no_run
//! use orders_client::{ClientConfig, OrderClient};
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OrderClient::new(ClientConfig::for_base("http://localhost:8000/")?)?;
//! let json = client.fetch_orders([("limit", "5")]).await?;
//! println!("{json}");
//! # Ok(()) }
//! ```
use crate::config::ClientConfig;
use crate::errors::FetchError;
use crate::models::Orders;
use crate::net::{HttpTransport, Transport};
use crate::query::{self, OrderQuery};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::fmt::Display;
use std::sync::Arc;
use url::Url;

const ORDERS_PATH: &str = "orders";

#[derive(Clone)]
pub struct OrderClient {
    base_url: Url,
    transport: Arc<dyn Transport>,
}

impl fmt::Debug for OrderClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderClient").field("base_url", &self.base_url.as_str()).finish_non_exhaustive()
    }
}

impl OrderClient {
    /// Creates a client that talks HTTP through reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let transport = match config.user_agent.as_deref() {
            Some(ua) => HttpTransport::with_user_agent(ua)?,
            None => HttpTransport::new(),
        };
        Ok(Self::from_parts(config.base_url, Arc::new(transport)))
    }

    /// Creates a client over a custom transport. `config.user_agent` is up to
    /// the transport and ignored here.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self::from_parts(config.base_url, transport)
    }

    fn from_parts(base_url: Url, transport: Arc<dyn Transport>) -> Self {
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The URL [`fetch_orders`](Self::fetch_orders) would request for `params`.
    pub fn orders_url<I, K, V>(&self, params: I) -> Result<Url, FetchError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let mut url = self.base_url.join(ORDERS_PATH)?;
        url.set_query(Some(&query::encode(params)));
        Ok(url)
    }

    /// URL of a single order. The id is encoded as one path segment.
    ///
    /// Ids that URL parsing would collapse (`""`, `"."`, `".."`) are rejected,
    /// they would otherwise address the listing or its parent.
    pub fn order_url(&self, id: &str) -> Result<Url, FetchError> {
        if matches!(id, "" | "." | "..") {
            return Err(FetchError::InvalidOrderId(id.to_string()));
        }
        let mut url = self.base_url.join(ORDERS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .push(id);
        Ok(url)
    }

    /// `GET orders?<params>` and parse the body as JSON, whatever the status.
    pub async fn fetch_orders<I, K, V>(&self, params: I) -> Result<Value, FetchError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        self.fetch_orders_as(params).await
    }

    /// Like [`fetch_orders`](Self::fetch_orders), decoding into `T`.
    pub async fn fetch_orders_as<T, I, K, V>(&self, params: I) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Display,
    {
        let url = self.orders_url(params)?;
        self.get_json(url).await
    }

    /// Typed listing call.
    ///
    /// An error status from the service (e.g. a bad token) usually has a body
    /// that is not an [`Orders`] page and so ends up as [`FetchError::Parse`].
    /// Use [`fetch_orders`](Self::fetch_orders) to see such bodies as-is.
    pub async fn search(&self, query: &OrderQuery) -> Result<Orders, FetchError> {
        self.fetch_orders_as(query).await
    }

    /// `GET orders/<id>` and parse the body as JSON, whatever the status.
    pub async fn fetch_order(&self, id: &str) -> Result<Value, FetchError> {
        self.fetch_order_as(id).await
    }

    pub async fn fetch_order_as<T: DeserializeOwned>(&self, id: &str) -> Result<T, FetchError> {
        let url = self.order_url(id)?;
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let resp = self.transport.get(url).await?;
        if !resp.is_success() {
            log::debug!("{} answered {} {}, parsing body anyway", resp.url, resp.status, resp.status_text);
        }
        Ok(resp.json()?)
    }
}

/// One-shot helper: `GET <base>/orders?<params>` with a fresh reqwest client.
///
/// Prefer an [`OrderClient`] for more than one call so connections get reused.
/// `base` goes through the same validation as [`ClientConfig::for_base`].
pub async fn fetch_orders<I, K, V>(base: &str, params: I) -> Result<Value, FetchError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Display,
{
    let config = ClientConfig::for_base(base)?;
    OrderClient::from_parts(config.base_url, Arc::new(HttpTransport::new()))
        .fetch_orders(params)
        .await
}
