//! Manual Q&A endpoint. Stateless: each question is sent alone.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use super::api::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;
use super::transport::Transport;
use super::types::{ChatAnswer, ChatQuestion};

impl<T: Transport> ApiClient<T> {
    /// `POST /chat/manual`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn send_question(&self, model_id: i64, question: &str) -> Result<ChatAnswer, ApiError> {
        let request = ApiRequest::post("/chat/manual").json(&ChatQuestion { model_id, question })?;
        self.fetch_json(request).await
    }
}
