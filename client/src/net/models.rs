//! Model and manual endpoints.
//!
//! DESIGN
//! ======
//! Uploading endpoints take a [`ManualFile`] and run the PDF/size check
//! before building the multipart body, so a rejected file never reaches the
//! transport. Progress is coarse: one callback before sending, one after the
//! response.

#[cfg(test)]
#[path = "models_test.rs"]
mod models_test;

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::request::{ApiRequest, FormPart};
use super::transport::Transport;
use super::types::Model;
use super::upload::{ManualFile, UploadProgress};

/// Multipart field carrying the PDF.
pub const MANUAL_FIELD: &str = "manualFile";

fn category_models_path(category_id: i64) -> String {
    format!("/models/category/{category_id}")
}

fn personal_model_path(id: i64) -> String {
    format!("/models/personal/{id}")
}

fn public_model_path(id: i64) -> String {
    format!("/models/public/{id}")
}

fn admin_model_path(id: i64) -> String {
    format!("/models/admin/{id}")
}

fn manual_download_path(model_id: i64) -> String {
    format!("/manuals/model/{model_id}/download")
}

#[derive(Serialize)]
struct PersonalModelPayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PublicModelPayload<'a> {
    name: &'a str,
    category_id: i64,
}

fn text_part(name: &str, value: impl Into<String>) -> FormPart {
    FormPart::Text { name: name.to_owned(), value: value.into() }
}

fn manual_part(file: &ManualFile) -> FormPart {
    FormPart::File { name: MANUAL_FIELD.to_owned(), file: file.clone() }
}

impl<T: Transport> ApiClient<T> {
    /// `GET /models/public`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn public_models(&self) -> Result<Vec<Model>, ApiError> {
        self.fetch_json(ApiRequest::get("/models/public")).await
    }

    /// `GET /models/category/:categoryId`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn public_models_in_category(&self, category_id: i64) -> Result<Vec<Model>, ApiError> {
        self.fetch_json(ApiRequest::get(category_models_path(category_id))).await
    }

    /// `GET /models/personal`, scoped to the session's owner.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn personal_models(&self) -> Result<Vec<Model>, ApiError> {
        self.fetch_json(ApiRequest::get("/models/personal")).await
    }

    /// `GET /models/admin/all`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn all_models(&self) -> Result<Vec<Model>, ApiError> {
        self.fetch_json(ApiRequest::get("/models/admin/all")).await
    }

    /// `POST /models/personal` (multipart: `name`, `manualFile`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` without sending when the file is not an
    /// acceptable PDF; otherwise the mapped `ApiError`.
    pub async fn create_personal_model(
        &self,
        name: &str,
        manual: &ManualFile,
        on_progress: impl Fn(UploadProgress),
    ) -> Result<Model, ApiError> {
        manual.check()?;
        let request = ApiRequest::post("/models/personal")
            .multipart(vec![text_part("name", name), manual_part(manual)]);
        self.upload(request, on_progress).await
    }

    /// `PUT /models/personal/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn update_personal_model(&self, id: i64, name: &str) -> Result<Model, ApiError> {
        let request = ApiRequest::put(personal_model_path(id)).json(&PersonalModelPayload { name })?;
        self.fetch_data(request).await
    }

    /// `DELETE /models/personal/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn delete_personal_model(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(ApiRequest::delete(personal_model_path(id))).await
    }

    /// `POST /models/public` (multipart: `name`, `categoryId`, `manualFile`).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` without sending when the file is not an
    /// acceptable PDF; otherwise the mapped `ApiError`.
    pub async fn create_public_model(
        &self,
        name: &str,
        category_id: i64,
        manual: &ManualFile,
        on_progress: impl Fn(UploadProgress),
    ) -> Result<Model, ApiError> {
        manual.check()?;
        let request = ApiRequest::post("/models/public").multipart(vec![
            text_part("name", name),
            text_part("categoryId", category_id.to_string()),
            manual_part(manual),
        ]);
        self.upload(request, on_progress).await
    }

    /// `PUT /models/public/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn update_public_model(&self, id: i64, name: &str, category_id: i64) -> Result<Model, ApiError> {
        let request = ApiRequest::put(public_model_path(id)).json(&PublicModelPayload { name, category_id })?;
        self.fetch_data(request).await
    }

    /// `DELETE /models/admin/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn delete_model(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(ApiRequest::delete(admin_model_path(id))).await
    }

    /// `GET /manuals/model/:modelId/download` as opaque bytes.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn download_manual(&self, model_id: i64) -> Result<Vec<u8>, ApiError> {
        let response = self.execute(ApiRequest::get(manual_download_path(model_id))).await?;
        Ok(response.body)
    }

    async fn upload(&self, request: ApiRequest, on_progress: impl Fn(UploadProgress)) -> Result<Model, ApiError> {
        let total = request.body.payload_len();
        on_progress(UploadProgress::started(total));
        let model = self.fetch_data(request).await?;
        on_progress(UploadProgress::finished(total));
        Ok(model)
    }
}
