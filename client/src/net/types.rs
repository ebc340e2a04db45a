//! Wire DTOs for the manual Q&A REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Optional relations are
//! `Option` rather than defaulted so a `null` owner (public model) stays
//! distinguishable from a missing one.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A product manufacturer grouping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: i64,
    pub name: String,
    /// Categories owned by this brand, when the endpoint embeds them.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// A product-type grouping owned by a brand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub brand_id: i64,
}

/// Uploaded manual metadata. Binary content is fetched separately.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manual {
    pub id: i64,
    pub file_name: String,
}

/// Owner of a personal model.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i64,
    pub email: String,
}

/// A specific product with its manual.
///
/// `owner == None` marks a public model managed by administrators.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub brand: Option<Brand>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub manual: Option<Manual>,
}

impl Model {
    /// Whether this model is shared with all users.
    pub fn is_public(&self) -> bool {
        self.owner.is_none()
    }

    /// File name used when saving the manual locally.
    pub fn manual_file_name(&self) -> String {
        self.manual
            .as_ref()
            .map_or_else(|| "manual.pdf".to_owned(), |m| m.file_name.clone())
    }

    /// `"<brand> | <category>"` caption for model cards.
    pub fn caption(&self) -> String {
        let brand = self.brand.as_ref().map_or("", |b| b.name.as_str());
        let category = self.category.as_ref().map_or("", |c| c.name.as_str());
        format!("{brand} | {category}")
    }
}

/// Credentials payload for signup and login.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body of `POST /users/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Answer returned by `POST /chat/manual`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChatAnswer {
    #[serde(default)]
    pub message: Option<String>,
    pub answer: String,
    /// Base64-encoded PNG payloads referenced by the answer.
    #[serde(default)]
    pub images: Vec<String>,
}

/// Request body of `POST /chat/manual`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatQuestion<'a> {
    pub model_id: i64,
    pub question: &'a str,
}

/// Create/update responses wrap the entity as `{ "data": ... }`.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Error body the backend attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
