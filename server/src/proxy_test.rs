use std::time::Duration;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::any;
use serde_json::{Value, json};

use super::*;
use crate::test_support::{closed_origin, proxy_state, serve};

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Response {
    match uri.path() {
        "/api/slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            StatusCode::OK.into_response()
        }
        "/api/users/logout" => (StatusCode::UNAUTHORIZED, Json(json!({ "message": "expired" }))).into_response(),
        "/api/manuals/model/5/download" => {
            ([(header::CONTENT_TYPE, "application/pdf")], vec![0x25_u8, 0x50, 0x44, 0x46]).into_response()
        }
        _ => Json(json!({
            "method": method.as_str(),
            "path": uri.path(),
            "query": uri.query(),
            "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            "host": headers.get(header::HOST).and_then(|v| v.to_str().ok()),
            "body": String::from_utf8_lossy(&body),
        }))
        .into_response(),
    }
}

/// Start a stub backend plus a proxy in front of it; returns the proxy origin
/// and the backend origin.
async fn proxied() -> (String, String) {
    let backend = serve(Router::new().route("/api/{*path}", any(echo))).await;
    let proxy = serve(proxy_router(&backend)).await;
    (proxy, backend)
}

fn proxy_router(backend: &str) -> Router {
    Router::new()
        .route("/api/{*path}", any(forward))
        .with_state(proxy_state(backend, Duration::from_millis(300)))
}

// =============================================================
// Forwarding
// =============================================================

#[tokio::test]
async fn forwards_method_path_query_body_and_bearer() {
    let (proxy, _) = proxied().await;
    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/chat/manual?lang=en"))
        .header(header::AUTHORIZATION, "Bearer abc")
        .body(r#"{"modelId":5}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let echoed: Value = response.json().await.unwrap();
    assert_eq!(echoed["method"], "POST");
    assert_eq!(echoed["path"], "/api/chat/manual");
    assert_eq!(echoed["query"], "lang=en");
    assert_eq!(echoed["authorization"], "Bearer abc");
    assert_eq!(echoed["body"], r#"{"modelId":5}"#);
}

#[tokio::test]
async fn host_header_names_the_backend() {
    let (proxy, backend) = proxied().await;
    let echoed: Value = reqwest::get(format!("{proxy}/api/brands")).await.unwrap().json().await.unwrap();
    assert_eq!(echoed["host"], backend.trim_start_matches("http://"));
}

#[tokio::test]
async fn backend_status_and_body_pass_through() {
    let (proxy, _) = proxied().await;
    let response = reqwest::Client::new()
        .post(format!("{proxy}/api/users/logout"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "expired");
}

#[tokio::test]
async fn binary_downloads_keep_content_type() {
    let (proxy, _) = proxied().await;
    let response = reqwest::get(format!("{proxy}/api/manuals/model/5/download")).await.unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"%PDF");
}

// =============================================================
// Failures
// =============================================================

#[tokio::test]
async fn slow_backend_is_gateway_timeout() {
    let (proxy, _) = proxied().await;
    let response = reqwest::get(format!("{proxy}/api/slow")).await.unwrap();
    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "backend request timed out");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let proxy = serve(proxy_router(&closed_origin().await)).await;
    let response = reqwest::get(format!("{proxy}/api/brands")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "backend unavailable");
}

// =============================================================
// Header filtering
// =============================================================

#[test]
fn hop_by_hop_and_connection_listed_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive, x-session-hint"));
    headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
    headers.insert("x-session-hint", HeaderValue::from_static("abc"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let kept = forwardable_headers(&headers);
    let mut names: Vec<&str> = kept.keys().map(HeaderName::as_str).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["authorization", "content-type"]);
}

#[test]
fn upstream_url_keeps_path_and_query() {
    let uri: Uri = "/api/models/category/3?page=2".parse().unwrap();
    assert_eq!(
        upstream_url("http://backend:8080/", &uri),
        "http://backend:8080/api/models/category/3?page=2"
    );
}
