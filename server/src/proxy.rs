//! `/api` reverse proxy to the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. Every `/api/*` request is
//! replayed against `{BACKEND_URL}` with the same method, path, query, body
//! and end-to-end headers, and the backend's response is relayed as-is.
//! Connection-scoped headers never cross the hop in either direction.
//!
//! ERROR HANDLING
//! ==============
//! Backend status codes (including 401) pass through untouched. Only
//! transport failures are answered here: 504 on timeout, 502 otherwise,
//! both with a `{ "message": ... }` body the client already understands.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::header::{self, HeaderMap, HeaderName};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::state::AppState;

/// Headers that describe one connection rather than the message.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("backend request timed out")]
    Timeout,
    #[error("backend unavailable")]
    Unreachable(#[source] reqwest::Error),
}

impl ProxyError {
    fn from_upstream(error: reqwest::Error) -> Self {
        if error.is_timeout() { Self::Timeout } else { Self::Unreachable(error) }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Unreachable(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Backend URL for an incoming `/api/...` request, query included.
pub fn upstream_url(backend_url: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path_and_query}", backend_url.trim_end_matches('/'))
}

/// Copy `headers` minus hop-by-hop fields, anything named in `Connection`,
/// `Host` and `Content-Length` (recomputed for the buffered body).
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    let listed: Vec<HeaderName> = headers
        .get_all(header::CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| HeaderName::from_bytes(name.trim().as_bytes()).ok())
        .collect();

    let mut out = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let dropped = HOP_BY_HOP.contains(&name.as_str())
            || listed.contains(name)
            || name == header::HOST
            || name == header::CONTENT_LENGTH;
        if !dropped {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the backend.
///
/// # Errors
///
/// `ProxyError` when the backend cannot be reached or does not answer in
/// time.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &uri);
    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwardable_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "backend request failed");
            ProxyError::from_upstream(e)
        })?;

    let status = upstream.status();
    let response_headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await.map_err(|e| {
        tracing::warn!(%method, %url, error = %e, "backend response body failed");
        ProxyError::from_upstream(e)
    })?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
