//! Conversation state for the manual Q&A view.
//!
//! DESIGN
//! ======
//! The transcript lives only in the page. Nothing is persisted and the
//! backend never sees history: each question is sent alone.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatAnswer;

/// First message shown in every conversation.
pub const GREETING: &str = "Hello! How can I help you with this product?";

/// Assistant reply appended when a question fails.
pub const FAILURE_REPLY: &str =
    "Sorry, something went wrong while answering your question. Please try again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
    /// Base64 PNG payloads attached by the assistant.
    pub images: Vec<String>,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>, timestamp: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp,
            images: Vec::new(),
        }
    }
}

/// State for the chat page.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub draft: String,
    pub loading: bool,
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ChatState {
    /// Fresh conversation holding only the greeting.
    pub fn new(now: f64) -> Self {
        Self {
            messages: vec![ChatMessage::new(ChatRole::Assistant, GREETING, now)],
            draft: String::new(),
            loading: false,
        }
    }

    /// Move the draft into the transcript and return the question to send.
    ///
    /// Returns `None` (and changes nothing) when the draft is blank or a
    /// question is already in flight.
    pub fn submit_draft(&mut self, now: f64) -> Option<String> {
        if self.loading || self.draft.trim().is_empty() {
            return None;
        }
        let question = std::mem::take(&mut self.draft);
        self.messages.push(ChatMessage::new(ChatRole::User, question.clone(), now));
        self.loading = true;
        Some(question)
    }

    pub fn receive_answer(&mut self, answer: ChatAnswer, now: f64) {
        let mut message = ChatMessage::new(ChatRole::Assistant, answer.answer, now);
        message.images = answer.images;
        self.messages.push(message);
        self.loading = false;
    }

    pub fn receive_failure(&mut self, now: f64) {
        self.messages.push(ChatMessage::new(ChatRole::Assistant, FAILURE_REPLY, now));
        self.loading = false;
    }
}

/// Parse the `/chat/:id` segment. Anything that is not a positive integer
/// means the product does not exist.
pub fn parse_model_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
