//! REST client core: bearer decoration, status mapping, 401 handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! All service calls (`auth`, `catalog`, `models`, `chat`) funnel through
//! [`ApiClient::execute`]. That is the single place where the session token
//! is attached and where a 401 ends the session and forces `/login`.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged once here and returned as `ApiError`. Callers turn
//! them into inline messages; nothing retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::request::{AUTHORIZATION, ApiRequest, RawResponse, bearer};
use super::session::Session;
use super::transport::{DefaultTransport, Transport};
use super::types::Envelope;
use crate::util::navigation::{BrowserNavigator, LOGIN_PATH, Navigator};

/// API base path. Deployed builds reach the backend through the host's
/// `/api` proxy; `MANUALQA_API_URL` overrides it at compile time.
pub const API_BASE_URL: &str = match option_env!("MANUALQA_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// REST client bound to a transport, a session and a redirect target.
#[derive(Clone)]
pub struct ApiClient<T> {
    transport: T,
    session: Session,
    navigator: Arc<dyn Navigator>,
    base_url: String,
}

/// Client used by views in the current build.
pub type AppClient = ApiClient<DefaultTransport>;

/// Build the browser client: `localStorage` session, hard redirects.
pub fn app_client() -> AppClient {
    ApiClient::new(DefaultTransport::default(), Session::browser(), Arc::new(BrowserNavigator))
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: Session, navigator: Arc<dyn Navigator>) -> Self {
        Self { transport, session, navigator, base_url: API_BASE_URL.to_owned() }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` with the current bearer token and map the status.
    ///
    /// # Errors
    ///
    /// - `Network`/`Timeout` when no response arrived.
    /// - `Unauthorized` on 401, after clearing the session and redirecting.
    /// - `Status` for any other non-2xx response.
    pub async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let request = match self.session.token() {
            Some(token) => request.header(AUTHORIZATION, bearer(&token)),
            None => request,
        };
        let method = request.method.as_str();
        let path = request.path.clone();

        let response = match self.transport.send(&self.base_url, request).await {
            Ok(response) => response,
            Err(err) => {
                leptos::logging::warn!("{method} {path} failed: {err}");
                return Err(err.into());
            }
        };

        if response.status == 401 {
            leptos::logging::warn!("{method} {path}: session expired");
            self.session.end();
            self.navigator.redirect(LOGIN_PATH);
            return Err(ApiError::Unauthorized);
        }
        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            leptos::logging::warn!("{method} {path} failed: {err}");
            return Err(err);
        }
        Ok(response)
    }

    /// Execute and decode a bare JSON body.
    pub(crate) async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let response = self.execute(request).await?;
        decode(&response.body)
    }

    /// Execute and decode a `{ "data": ... }` envelope.
    pub(crate) async fn fetch_data<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let envelope: Envelope<R> = self.fetch_json(request).await?;
        Ok(envelope.data)
    }

    /// Execute and discard the body.
    pub(crate) async fn fetch_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }
}

fn decode<R: DeserializeOwned>(body: &[u8]) -> Result<R, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode(e.to_string()))
}
