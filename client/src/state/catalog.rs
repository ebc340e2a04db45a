//! Home-page catalog browsing state.
//!
//! DESIGN
//! ======
//! Selection is hierarchical: brand, then category, then model. Changing a
//! level clears everything below it. Which model list to fetch follows from
//! the selection via [`CatalogState::model_query`].

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Brand, Category, Model};

/// Which public-model listing the current selection needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelQuery {
    /// `GET /models/public`, unfiltered.
    All,
    /// `GET /models/public`, then keep models of this brand.
    Brand(i64),
    /// `GET /models/category/:id`.
    Category(i64),
}

#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    pub brands: Vec<Brand>,
    pub categories: Vec<Category>,
    pub models: Vec<Model>,
    pub selected_brand: Option<i64>,
    pub selected_category: Option<i64>,
    pub selected_model: Option<i64>,
    pub loading_models: bool,
    /// Failure of the model load for the current selection.
    pub models_error: Option<String>,
}

impl CatalogState {
    /// Pick a brand. Category, model and the brand's category list reset.
    pub fn select_brand(&mut self, brand_id: i64) {
        self.selected_brand = Some(brand_id);
        self.selected_category = None;
        self.selected_model = None;
        self.categories.clear();
    }

    /// Pick a category within the selected brand. The model resets.
    pub fn select_category(&mut self, category_id: i64) {
        self.selected_category = Some(category_id);
        self.selected_model = None;
    }

    pub fn select_model(&mut self, model_id: i64) {
        self.selected_model = Some(model_id);
    }

    pub fn model_query(&self) -> ModelQuery {
        match (self.selected_brand, self.selected_category) {
            (_, Some(category_id)) => ModelQuery::Category(category_id),
            (Some(brand_id), None) => ModelQuery::Brand(brand_id),
            (None, None) => ModelQuery::All,
        }
    }

    /// A model load for the current selection has started.
    pub fn begin_models(&mut self) {
        self.loading_models = true;
        self.models_error = None;
    }

    /// Store a fetched model list, applying the brand filter when needed.
    ///
    /// A response for a query that no longer matches the selection is dropped.
    pub fn receive_models(&mut self, query: ModelQuery, models: Vec<Model>) {
        if query != self.model_query() {
            return;
        }
        self.models = match query {
            ModelQuery::Brand(brand_id) => filter_by_brand(models, brand_id),
            ModelQuery::All | ModelQuery::Category(_) => models,
        };
        self.loading_models = false;
        self.models_error = None;
    }

    /// Record a failed model load. Failures of superseded queries are
    /// dropped, like their responses.
    pub fn fail_models(&mut self, query: ModelQuery, message: String) {
        if query != self.model_query() {
            return;
        }
        self.loading_models = false;
        self.models_error = Some(message);
    }

    /// Store the category list for `brand_id` if it is still selected.
    pub fn receive_categories(&mut self, brand_id: i64, categories: Vec<Category>) {
        if self.selected_brand == Some(brand_id) {
            self.categories = categories;
        }
    }

    pub fn brand_name(&self) -> Option<&str> {
        let id = self.selected_brand?;
        self.brands.iter().find(|b| b.id == id).map(|b| b.name.as_str())
    }

    pub fn category_name(&self) -> Option<&str> {
        let id = self.selected_category?;
        self.categories.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }

    /// Title above the model grid.
    pub fn heading(&self) -> String {
        match (self.selected_brand, self.selected_category) {
            (None, _) => "All products".to_owned(),
            (Some(_), None) => format!("{} products", self.brand_name().unwrap_or_default()),
            (Some(_), Some(_)) => format!(
                "{} > {}",
                self.brand_name().unwrap_or_default(),
                self.category_name().unwrap_or_default()
            ),
        }
    }

    /// Category buttons show only once a brand with categories is selected.
    pub fn shows_categories(&self) -> bool {
        self.selected_brand.is_some() && !self.categories.is_empty()
    }
}

/// Keep models whose brand matches `brand_id`.
pub fn filter_by_brand(models: Vec<Model>, brand_id: i64) -> Vec<Model> {
    models
        .into_iter()
        .filter(|m| m.brand.as_ref().is_some_and(|b| b.id == brand_id))
        .collect()
}
