//! Loopback helpers shared by server tests.

use std::time::Duration;

use axum::Router;

use crate::state::AppState;

/// Serve `router` on an ephemeral loopback port and return its origin.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}")
}

/// Proxy state pointed at `backend_url` with a short request timeout.
pub fn proxy_state(backend_url: &str, timeout: Duration) -> AppState {
    let http = reqwest::Client::builder().timeout(timeout).build().expect("reqwest client");
    AppState::with_client(http, backend_url)
}

/// Origin of a loopback port that nothing listens on.
pub async fn closed_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}
