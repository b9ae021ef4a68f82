//! `/api/*` forwarding to the annotation backend.
//!
//! The browser client only ever talks to this host; the backend that owns
//! authentication sits behind it. Only the headers the session flow depends
//! on cross in either direction.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

/// Request headers copied to the backend.
pub const FORWARDED_REQUEST_HEADERS: [header::HeaderName; 3] = [header::COOKIE, header::CONTENT_TYPE, header::ACCEPT];

/// Response headers copied back to the browser.
pub const RELAYED_RESPONSE_HEADERS: [header::HeaderName; 3] =
    [header::CONTENT_TYPE, header::SET_COOKIE, header::CACHE_CONTROL];

/// Errors surfaced by the forwarding route.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("no backend configured")]
    NotConfigured,

    #[error("backend request failed: {0}")]
    Upstream(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!(error = %self, %status, "api forward failed");
        (status, self.to_string()).into_response()
    }
}

/// Shared state of the forwarding route.
#[derive(Clone)]
pub struct ProxyState {
    pub client: reqwest::Client,
    pub backend_url: Option<String>,
}

/// Backend URL for an incoming request URI.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{backend_url}{path_and_query}")
}

/// Copy the listed headers, keeping repeated values.
pub fn filter_headers(source: &HeaderMap, allowed: &[header::HeaderName]) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in allowed {
        for value in source.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: forward to the backend and relay its answer.
pub async fn forward(
    State(proxy): State<ProxyState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let Some(backend_url) = proxy.backend_url.as_deref() else {
        return Err(ProxyError::NotConfigured);
    };
    let url = upstream_url(backend_url, &uri);
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = proxy
        .client
        .request(method, &url)
        .headers(filter_headers(&headers, &FORWARDED_REQUEST_HEADERS));
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;
    let status = upstream.status();
    let relayed = filter_headers(upstream.headers(), &RELAYED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await.map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = relayed;
    Ok(response)
}
