//! Brand and category endpoints.
//!
//! Create/update/delete are admin-only on the server; the client only checks
//! for non-empty names before calling.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

use super::api::ApiClient;
use super::error::ApiError;
use super::request::ApiRequest;
use super::transport::Transport;
use super::types::{Brand, Category};

fn brand_path(id: i64) -> String {
    format!("/brands/{id}")
}

fn category_path(id: i64) -> String {
    format!("/categories/{id}")
}

fn brand_categories_path(brand_id: i64) -> String {
    format!("/categories/brand/{brand_id}")
}

#[derive(Serialize)]
struct BrandPayload<'a> {
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CategoryPayload<'a> {
    name: &'a str,
    brand_id: i64,
}

impl<T: Transport> ApiClient<T> {
    /// `GET /brands`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn brands(&self) -> Result<Vec<Brand>, ApiError> {
        self.fetch_json(ApiRequest::get("/brands")).await
    }

    /// `GET /brands/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn brand(&self, id: i64) -> Result<Brand, ApiError> {
        self.fetch_json(ApiRequest::get(brand_path(id))).await
    }

    /// `POST /brands`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn create_brand(&self, name: &str) -> Result<Brand, ApiError> {
        let request = ApiRequest::post("/brands").json(&BrandPayload { name })?;
        self.fetch_data(request).await
    }

    /// `PUT /brands/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn update_brand(&self, id: i64, name: &str) -> Result<Brand, ApiError> {
        let request = ApiRequest::put(brand_path(id)).json(&BrandPayload { name })?;
        self.fetch_data(request).await
    }

    /// `DELETE /brands/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn delete_brand(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(ApiRequest::delete(brand_path(id))).await
    }

    /// `GET /categories`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.fetch_json(ApiRequest::get("/categories")).await
    }

    /// `GET /categories/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn category(&self, id: i64) -> Result<Category, ApiError> {
        self.fetch_json(ApiRequest::get(category_path(id))).await
    }

    /// `GET /categories/brand/:brandId`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn categories_for_brand(&self, brand_id: i64) -> Result<Vec<Category>, ApiError> {
        self.fetch_json(ApiRequest::get(brand_categories_path(brand_id))).await
    }

    /// `POST /categories`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn create_category(&self, name: &str, brand_id: i64) -> Result<Category, ApiError> {
        let request = ApiRequest::post("/categories").json(&CategoryPayload { name, brand_id })?;
        self.fetch_data(request).await
    }

    /// `PUT /categories/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn update_category(&self, id: i64, name: &str, brand_id: i64) -> Result<Category, ApiError> {
        let request = ApiRequest::put(category_path(id)).json(&CategoryPayload { name, brand_id })?;
        self.fetch_data(request).await
    }

    /// `DELETE /categories/:id`.
    ///
    /// # Errors
    ///
    /// Returns the mapped `ApiError`.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.fetch_empty(ApiRequest::delete(category_path(id))).await
    }
}
