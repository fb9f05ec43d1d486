use crate::net::Response;
use url::Url;

// Issues a single GET and buffers the response. The status code is recorded,
// never turned into an error.
pub(crate) async fn fetch(client: &reqwest::Client, url: Url) -> Result<Response, reqwest::Error> {
    log::debug!("GET {url}");
    let res = client.get(url).send().await?;

    let final_url = res.url().clone();
    let status = res.status().as_u16();
    let status_text = res.status().canonical_reason().unwrap_or("Unknown").to_string();
    let headers = res.headers().clone();

    // No streaming, the body is parsed as a whole anyway
    let body = res.bytes().await?.to_vec();
    log::trace!("{final_url} -> {status} {status_text} ({} bytes)", body.len());

    Ok(Response {
        url: final_url,
        status,
        status_text,
        headers,
        body,
    })
}
