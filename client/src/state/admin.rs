//! Admin dashboard state: tabs, catalog snapshot and the three edit forms.
//!
//! DESIGN
//! ======
//! Each form doubles as create and edit: `editing == Some(id)` turns submit
//! into an update. Validation returns the trimmed payload so the page never
//! sends untrimmed strings. After any successful mutation the page reloads
//! brands and models and resets the form.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{Brand, Category, Model};
use crate::net::upload::ManualFile;

pub const CONFIRM_DELETE: &str = "Delete this item? This cannot be undone.";
pub const LOAD_FAILED: &str = "Could not load catalog data.";
pub const SAVE_FAILED: &str = "Could not save changes.";
pub const DELETE_FAILED: &str = "Could not delete the item.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Brands,
    Categories,
    Models,
}

impl AdminTab {
    pub const ALL: [Self; 3] = [Self::Brands, Self::Categories, Self::Models];

    pub fn label(self) -> &'static str {
        match self {
            Self::Brands => "Brands",
            Self::Categories => "Categories",
            Self::Models => "Models",
        }
    }
}

/// Why a form cannot be submitted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Enter a name.")]
    MissingName,
    #[error("Select a brand.")]
    MissingBrand,
    #[error("Select a category.")]
    MissingCategory,
    #[error("Attach a PDF manual.")]
    MissingManual,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrandForm {
    pub name: String,
    pub editing: Option<i64>,
}

impl BrandForm {
    /// # Errors
    ///
    /// `MissingName` when the name is blank.
    pub fn validate(&self) -> Result<String, FormError> {
        non_blank(&self.name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub brand_id: Option<i64>,
    pub editing: Option<i64>,
}

impl CategoryForm {
    /// # Errors
    ///
    /// The first missing field.
    pub fn validate(&self) -> Result<(String, i64), FormError> {
        let name = non_blank(&self.name)?;
        let brand_id = self.brand_id.ok_or(FormError::MissingBrand)?;
        Ok((name, brand_id))
    }
}

/// Validated model form, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelSubmission {
    Create { name: String, category_id: i64, manual: ManualFile },
    Update { id: i64, name: String, category_id: i64 },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelForm {
    pub name: String,
    pub category_id: Option<i64>,
    pub manual: Option<ManualFile>,
    pub editing: Option<i64>,
}

impl ModelForm {
    /// Creating requires a manual; editing keeps the existing one.
    ///
    /// # Errors
    ///
    /// The first missing field.
    pub fn validate(&self) -> Result<ModelSubmission, FormError> {
        let name = non_blank(&self.name)?;
        let category_id = self.category_id.ok_or(FormError::MissingCategory)?;
        match self.editing {
            Some(id) => Ok(ModelSubmission::Update { id, name, category_id }),
            None => {
                let manual = self.manual.clone().ok_or(FormError::MissingManual)?;
                Ok(ModelSubmission::Create { name, category_id, manual })
            }
        }
    }
}

fn non_blank(value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::MissingName);
    }
    Ok(trimmed.to_owned())
}

#[derive(Clone, Debug, Default)]
pub struct AdminState {
    pub tab: AdminTab,
    pub brands: Vec<Brand>,
    pub models: Vec<Model>,
    pub brand_form: BrandForm,
    pub category_form: CategoryForm,
    pub model_form: ModelForm,
    pub loading: bool,
    pub error: Option<String>,
}

impl AdminState {
    pub fn receive(&mut self, brands: Vec<Brand>, models: Vec<Model>) {
        self.brands = brands;
        self.models = models;
        self.loading = false;
    }

    /// Every category embedded in the loaded brands, in brand order.
    pub fn categories(&self) -> Vec<Category> {
        self.brands
            .iter()
            .filter_map(|b| b.categories.as_ref())
            .flatten()
            .cloned()
            .collect()
    }

    pub fn brand_name(&self, brand_id: i64) -> Option<&str> {
        self.brands.iter().find(|b| b.id == brand_id).map(|b| b.name.as_str())
    }

    /// `(category id, "<Brand> - <Category>")` choices for the model form.
    pub fn category_options(&self) -> Vec<(i64, String)> {
        self.brands
            .iter()
            .flat_map(|brand| {
                brand
                    .categories
                    .iter()
                    .flatten()
                    .map(move |c| (c.id, format!("{} - {}", brand.name, c.name)))
            })
            .collect()
    }

    pub fn edit_brand(&mut self, brand: &Brand) {
        self.brand_form = BrandForm { name: brand.name.clone(), editing: Some(brand.id) };
    }

    pub fn edit_category(&mut self, category: &Category) {
        self.category_form = CategoryForm {
            name: category.name.clone(),
            brand_id: Some(category.brand_id),
            editing: Some(category.id),
        };
    }

    pub fn edit_model(&mut self, model: &Model) {
        self.model_form = ModelForm {
            name: model.name.clone(),
            category_id: model.category.as_ref().map(|c| c.id),
            manual: None,
            editing: Some(model.id),
        };
    }

    /// Clear the form on the active tab.
    pub fn reset_form(&mut self) {
        match self.tab {
            AdminTab::Brands => self.brand_form = BrandForm::default(),
            AdminTab::Categories => self.category_form = CategoryForm::default(),
            AdminTab::Models => self.model_form = ModelForm::default(),
        }
    }

    pub fn switch_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
        self.error = None;
    }
}
