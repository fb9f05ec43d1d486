use crate::config::ClientConfigError;

/// Boxed source error carried by a failed transport call.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure that happened before any response was received (DNS, connect,
/// TLS, transport level timeouts).
#[derive(Debug, thiserror::Error)]
#[error("transport error: {source}")]
pub struct TransportError {
    #[source]
    source: BoxError,
}

impl TransportError {
    pub fn new<E>(source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self { source: source.into() }
    }

    /// Returns the underlying reqwest error, if the default transport produced this error.
    pub fn as_reqwest(&self) -> Option<&reqwest::Error> {
        self.source.downcast_ref::<reqwest::Error>()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        Self::new(e)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("cannot parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid client config: {0}")]
    Config(#[from] ClientConfigError),

    #[error("order id {0:?} cannot be used as a path segment")]
    InvalidOrderId(String),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, FetchError::Parse(_))
    }
}
