//! Personal model list (`/models`).

#[cfg(test)]
#[path = "personal_test.rs"]
mod personal_test;

use crate::net::error::ApiError;
use crate::net::types::Model;

pub const LOAD_FAILED: &str = "Could not load your models.";
pub const DELETE_FAILED: &str = "Could not delete the model.";
pub const DOWNLOAD_FAILED: &str = "Could not download the manual.";

#[derive(Clone, Debug, Default)]
pub struct PersonalModelsState {
    pub models: Vec<Model>,
    pub loading: bool,
    pub error: Option<String>,
    /// Model whose delete request is in flight.
    pub deleting: Option<i64>,
}

impl PersonalModelsState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn receive(&mut self, models: Vec<Model>) {
        self.models = models;
        self.loading = false;
    }

    pub fn fail(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
        self.deleting = None;
    }

    /// Record a failed download. `None` means the manual arrived but the
    /// browser could not save it.
    pub fn fail_download(&mut self, error: Option<&ApiError>) {
        let message = error.map_or_else(|| DOWNLOAD_FAILED.to_owned(), |e| e.user_message(DOWNLOAD_FAILED));
        self.error = Some(message);
    }

    /// Mark `id` as being deleted. Returns false if another delete is pending.
    pub fn begin_delete(&mut self, id: i64) -> bool {
        if self.deleting.is_some() {
            return false;
        }
        self.deleting = Some(id);
        self.error = None;
        true
    }

    /// Drop exactly the model with `id` from the list.
    pub fn remove(&mut self, id: i64) {
        self.models.retain(|m| m.id != id);
        if self.deleting == Some(id) {
            self.deleting = None;
        }
    }

    pub fn is_deleting(&self, id: i64) -> bool {
        self.deleting == Some(id)
    }
}
