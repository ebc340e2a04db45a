//! Home page: brand/category/model browsing plus manual upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public route. Brands load once; the category list follows the selected
//! brand; the model grid follows `CatalogState::model_query`. Everything is
//! fetched from the browser after hydration, so the server renders the
//! empty layout.

use leptos::prelude::*;

use crate::components::manual_upload::ManualUpload;
use crate::components::model_card::ModelCard;
use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::net::types::{Brand, Category, Model};
use crate::state::catalog::{CatalogState, ModelQuery};

pub const BRANDS_FAILED: &str = "Could not load brands.";
pub const MODELS_FAILED: &str = "Could not load products.";

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogState::default());
    let brands_error = RwSignal::new(None::<String>);

    let brands = Memo::new(move |_| catalog.with(|c| c.brands.clone()));
    let categories = Memo::new(move |_| catalog.with(|c| c.categories.clone()));
    let models = Memo::new(move |_| catalog.with(|c| c.models.clone()));
    let selected_brand = Memo::new(move |_| catalog.with(|c| c.selected_brand));
    let query = Memo::new(move |_| catalog.with(CatalogState::model_query));

    Effect::new(move || load_brands(catalog, brands_error));
    Effect::new(move || {
        if let Some(brand_id) = selected_brand.get() {
            load_categories(catalog, brand_id);
        }
    });
    Effect::new(move || load_models(catalog, query.get()));

    let on_select_model = Callback::new(move |id: i64| catalog.update(|c| c.select_model(id)));

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="home">
                <aside class="home__sidebar panel">
                    <h2 class="panel__title">"Find your product"</h2>
                    <Show when=move || brands_error.get().is_some()>
                        <p class="form-error">{move || brands_error.get().unwrap_or_default()}</p>
                    </Show>
                    <section class="picker">
                        <h3 class="picker__label">"Brands"</h3>
                        <div class="picker__grid">
                            {move || {
                                brands
                                    .get()
                                    .into_iter()
                                    .map(|brand| brand_button(catalog, brand))
                                    .collect_view()
                            }}
                        </div>
                    </section>
                    <Show when=move || catalog.with(CatalogState::shows_categories)>
                        <section class="picker">
                            <h3 class="picker__label">"Categories"</h3>
                            <div class="picker__grid">
                                {move || {
                                    categories
                                        .get()
                                        .into_iter()
                                        .map(|category| category_button(catalog, category))
                                        .collect_view()
                                }}
                            </div>
                        </section>
                    </Show>
                    <ManualUpload/>
                </aside>
                <section class="home__main panel">
                    <h2 class="panel__title">{move || catalog.with(CatalogState::heading)}</h2>
                    <Show when=move || catalog.with(|c| c.models_error.is_some())>
                        <p class="form-error">{move || catalog.with(|c| c.models_error.clone()).unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !catalog.with(|c| c.loading_models)
                        fallback=|| view! { <Spinner/> }
                    >
                        <Show when=move || !models.with(Vec::is_empty) fallback=empty_models>
                            <div class="model-grid">
                                {move || {
                                    models
                                        .get()
                                        .into_iter()
                                        .map(|model| model_card(catalog, model, on_select_model))
                                        .collect_view()
                                }}
                            </div>
                        </Show>
                    </Show>
                </section>
            </main>
        </div>
    }
}

fn brand_button(catalog: RwSignal<CatalogState>, brand: Brand) -> impl IntoView {
    let id = brand.id;
    view! {
        <button
            class="chip"
            class:chip--active=move || catalog.with(|c| c.selected_brand == Some(id))
            on:click=move |_| catalog.update(|c| c.select_brand(id))
        >
            {brand.name}
        </button>
    }
}

fn category_button(catalog: RwSignal<CatalogState>, category: Category) -> impl IntoView {
    let id = category.id;
    view! {
        <button
            class="chip"
            class:chip--active=move || catalog.with(|c| c.selected_category == Some(id))
            on:click=move |_| catalog.update(|c| c.select_category(id))
        >
            {category.name}
        </button>
    }
}

fn model_card(catalog: RwSignal<CatalogState>, model: Model, on_select: Callback<i64>) -> impl IntoView {
    let id = model.id;
    let selected = Signal::derive(move || catalog.with(|c| c.selected_model == Some(id)));
    view! { <ModelCard model=model selected=selected on_select=on_select/> }
}

fn empty_models() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">"No products match this selection"</p>
            <p class="empty-state__hint">"Pick another brand or category, or upload your own PDF."</p>
        </div>
    }
}

fn load_brands(catalog: RwSignal<CatalogState>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::app_client().brands().await {
            Ok(brands) => catalog.update(|c| c.brands = brands),
            Err(e) => error.set(Some(e.user_message(BRANDS_FAILED))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (catalog, error);
}

fn load_categories(catalog: RwSignal<CatalogState>, brand_id: i64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::app_client().categories_for_brand(brand_id).await {
            Ok(categories) => catalog.update(|c| c.receive_categories(brand_id, categories)),
            // Category buttons simply stay hidden.
            Err(e) => leptos::logging::warn!("categories for brand {brand_id}: {e}"),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (catalog, brand_id);
}

fn load_models(catalog: RwSignal<CatalogState>, query: ModelQuery) {
    #[cfg(feature = "hydrate")]
    {
        catalog.update(CatalogState::begin_models);
        leptos::task::spawn_local(async move {
            let client = crate::net::api::app_client();
            let result = match query {
                ModelQuery::Category(category_id) => client.public_models_in_category(category_id).await,
                ModelQuery::All | ModelQuery::Brand(_) => client.public_models().await,
            };
            match result {
                Ok(models) => catalog.update(|c| c.receive_models(query, models)),
                Err(e) => catalog.update(|c| c.fail_models(query, e.user_message(MODELS_FAILED))),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (catalog, query);
}
