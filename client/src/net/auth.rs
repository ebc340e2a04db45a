//! Account endpoints: signup, login, logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;
use super::transport::Transport;
use super::types::{Credentials, LoginResponse};

impl<T: Transport> ApiClient<T> {
    /// `POST /users/signup`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError` when the backend refuses the account.
    pub async fn signup(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = ApiRequest::post("/users/signup").json(&Credentials { email, password })?;
        self.fetch_empty(request).await
    }

    /// `POST /users/login`. A returned token starts the session.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError` for bad credentials or transport failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = ApiRequest::post("/users/login").json(&Credentials { email, password })?;
        let response: LoginResponse = self.fetch_json(request).await?;
        if let Some(token) = response.token.as_deref().filter(|t| !t.is_empty()) {
            self.session().begin(token);
        }
        Ok(response)
    }

    /// `POST /users/logout`. The local token is cleared whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the endpoint's error after the session has been cleared.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let result = self.fetch_empty(ApiRequest::post("/users/logout")).await;
        self.session().end();
        result
    }
}
