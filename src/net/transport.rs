use crate::errors::TransportError;
use crate::net::fetch::fetch;
use crate::net::Response;
use futures::future::BoxFuture;
use futures::FutureExt;
use url::Url;

/// Something that can GET a URL and return the fully buffered response.
///
/// Implementations must resolve with a [`Response`] for every status code
/// and only fail when no response could be obtained at all.
pub trait Transport: Send + Sync {
    fn get(&self, url: Url) -> BoxFuture<'_, Result<Response, TransportError>>;
}

/// Default transport backed by a shared `reqwest::Client` (and its pool).
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already configured reqwest client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Builds a client that sends the given `User-Agent` on every request.
    pub fn with_user_agent(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: Url) -> BoxFuture<'_, Result<Response, TransportError>> {
        async move { fetch(&self.client, url).await.map_err(TransportError::from) }.boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves exactly one canned HTTP/1.1 response and reports the request head.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (Url, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut sock, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = sock.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            let _ = tx.send(String::from_utf8_lossy(&head).into_owned());

            let reply = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            sock.write_all(reply.as_bytes()).await.unwrap();
            sock.shutdown().await.ok();
        });

        (Url::parse(&format!("http://{addr}/")).unwrap(), rx)
    }

    #[tokio::test]
    async fn get_sends_plain_get_and_buffers_body() {
        let (base, rx) = serve_once("200 OK", r#"{"orders":[]}"#).await;
        let url = base.join("orders?limit=5").unwrap();

        let resp = HttpTransport::new().get(url.clone()).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.status_text, "OK");
        assert_eq!(resp.url, url);
        assert_eq!(resp.body, br#"{"orders":[]}"#);
        assert_eq!(resp.headers.get("content-type").unwrap(), "application/json");

        let head = rx.await.unwrap();
        assert!(head.starts_with("GET /orders?limit=5 HTTP/1.1\r\n"), "unexpected request head: {head}");
    }

    #[tokio::test]
    async fn error_status_is_still_a_response() {
        let (base, _rx) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

        let resp = HttpTransport::new().get(base.join("orders").unwrap()).await.unwrap();
        assert_eq!(resp.status, 404);
        assert!(!resp.is_success());
        assert_eq!(resp.body, br#"{"error":"not found"}"#);
    }

    #[tokio::test]
    async fn user_agent_is_sent() {
        let (base, rx) = serve_once("200 OK", "{}").await;

        let transport = HttpTransport::with_user_agent("orders-client-test/1.0").unwrap();
        transport.get(base.join("orders").unwrap()).await.unwrap();

        let head = rx.await.unwrap().to_ascii_lowercase();
        assert!(head.contains("user-agent: orders-client-test/1.0"), "missing UA in: {head}");
    }

    #[tokio::test]
    async fn refused_connection_is_transport_error() {
        // Grab a free port, then close it again
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{addr}/orders")).unwrap();
        let err = HttpTransport::new().get(url).await.unwrap_err();
        let source = err.as_reqwest().expect("reqwest error");
        assert!(source.is_connect() || source.is_request(), "unexpected error: {source:?}");
    }
}
