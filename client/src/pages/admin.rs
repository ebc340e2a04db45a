//! Administrator catalog dashboard (`/admin`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires an admin role claim; anyone else is sent home once the token
//! has been read. Brands (with embedded categories) and every model load
//! together. Each tab edits one entity kind; any successful mutation
//! resets that tab's form and reloads both lists.

use std::future::Future;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::net::error::ApiError;
use crate::net::types::{Brand, Category, Model};
use crate::state::admin::{AdminState, AdminTab, CONFIRM_DELETE, DELETE_FAILED, ModelSubmission, SAVE_FAILED};
use crate::state::auth::AuthState;
use crate::util::auth::install_admin_redirect;
use crate::util::dialog;

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = RwSignal::new(AdminState { loading: true, ..AdminState::default() });
    let requested = RwSignal::new(false);

    install_admin_redirect(auth, use_navigate());

    Effect::new(move || {
        if requested.get_untracked() || !auth.with(AuthState::is_admin) {
            return;
        }
        requested.set(true);
        reload(admin);
    });

    let tab = Memo::new(move |_| admin.with(|a| a.tab));

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__content admin">
                <h1>"Admin dashboard"</h1>
                <nav class="tabs">
                    {AdminTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| admin.update(|a| a.switch_tab(t))
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
                <Show when=move || admin.with(|a| a.error.is_some())>
                    <p class="form-error">{move || admin.with(|a| a.error.clone()).unwrap_or_default()}</p>
                </Show>
                <Show when=move || !admin.with(|a| a.loading) fallback=|| view! { <Spinner label="Loading..."/> }>
                    {move || match tab.get() {
                        AdminTab::Brands => view! { <BrandsTab admin=admin/> }.into_any(),
                        AdminTab::Categories => view! { <CategoriesTab admin=admin/> }.into_any(),
                        AdminTab::Models => view! { <ModelsTab admin=admin/> }.into_any(),
                    }}
                </Show>
            </main>
        </div>
    }
}

// =============================================================
// Brands
// =============================================================

#[component]
fn BrandsTab(admin: RwSignal<AdminState>) -> impl IntoView {
    let editing = Memo::new(move |_| admin.with(|a| a.brand_form.editing.is_some()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = admin.with_untracked(|a| a.brand_form.clone());
        let name = match form.validate() {
            Ok(name) => name,
            Err(e) => return admin.update(|a| a.error = Some(e.to_string())),
        };
        let client = crate::net::api::app_client();
        run_mutation(admin, SAVE_FAILED, true, async move {
            match form.editing {
                Some(id) => client.update_brand(id, &name).await.map(drop),
                None => client.create_brand(&name).await.map(drop),
            }
        });
    };

    view! {
        <form class="admin__form" on:submit=on_submit>
            <h2>{move || if editing.get() { "Edit brand" } else { "New brand" }}</h2>
            <input
                class="input"
                type="text"
                placeholder="Brand name"
                prop:value=move || admin.with(|a| a.brand_form.name.clone())
                on:input=move |ev| admin.update(|a| a.brand_form.name = event_target_value(&ev))
            />
            {form_buttons(admin, editing)}
        </form>
        <ul class="admin__list">
            <For
                each=move || admin.with(|a| a.brands.clone())
                key=|brand| (brand.id, brand.name.clone())
                children=move |brand: Brand| {
                    let id = brand.id;
                    let label = brand.name.clone();
                    view! {
                        <li class="admin__item">
                            <span>{label}</span>
                            <div class="admin__actions">
                                <button class="btn btn--small" on:click=move |_| admin.update(|a| a.edit_brand(&brand))>
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| delete(admin, move |client| async move { client.delete_brand(id).await })
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}

// =============================================================
// Categories
// =============================================================

#[component]
fn CategoriesTab(admin: RwSignal<AdminState>) -> impl IntoView {
    let editing = Memo::new(move |_| admin.with(|a| a.category_form.editing.is_some()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = admin.with_untracked(|a| a.category_form.clone());
        let (name, brand_id) = match form.validate() {
            Ok(valid) => valid,
            Err(e) => return admin.update(|a| a.error = Some(e.to_string())),
        };
        let client = crate::net::api::app_client();
        run_mutation(admin, SAVE_FAILED, true, async move {
            match form.editing {
                Some(id) => client.update_category(id, &name, brand_id).await.map(drop),
                None => client.create_category(&name, brand_id).await.map(drop),
            }
        });
    };

    view! {
        <form class="admin__form" on:submit=on_submit>
            <h2>{move || if editing.get() { "Edit category" } else { "New category" }}</h2>
            <input
                class="input"
                type="text"
                placeholder="Category name"
                prop:value=move || admin.with(|a| a.category_form.name.clone())
                on:input=move |ev| admin.update(|a| a.category_form.name = event_target_value(&ev))
            />
            <select
                class="input"
                prop:value=move || admin.with(|a| a.category_form.brand_id.map(|id| id.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let brand_id = event_target_value(&ev).parse().ok();
                    admin.update(|a| a.category_form.brand_id = brand_id);
                }
            >
                <option value="">"Select a brand"</option>
                {move || {
                    admin
                        .with(|a| a.brands.clone())
                        .into_iter()
                        .map(|b| view! { <option value=b.id.to_string()>{b.name}</option> })
                        .collect_view()
                }}
            </select>
            {form_buttons(admin, editing)}
        </form>
        <ul class="admin__list">
            <For
                each=move || admin.with(AdminState::categories)
                key=|category| (category.id, category.name.clone(), category.brand_id)
                children=move |category: Category| {
                    let id = category.id;
                    let label = format!(
                        "{} ({})",
                        category.name,
                        admin.with_untracked(|a| a.brand_name(category.brand_id).unwrap_or_default().to_owned()),
                    );
                    view! {
                        <li class="admin__item">
                            <span>{label}</span>
                            <div class="admin__actions">
                                <button
                                    class="btn btn--small"
                                    on:click=move |_| admin.update(|a| a.edit_category(&category))
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--small btn--danger"
                                    on:click=move |_| delete(admin, move |client| async move { client.delete_category(id).await })
                                >
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}

// =============================================================
// Models
// =============================================================

#[component]
fn ModelsTab(admin: RwSignal<AdminState>) -> impl IntoView {
    let editing = Memo::new(move |_| admin.with(|a| a.model_form.editing.is_some()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = match admin.with_untracked(|a| a.model_form.validate()) {
            Ok(submission) => submission,
            Err(e) => return admin.update(|a| a.error = Some(e.to_string())),
        };
        let client = crate::net::api::app_client();
        run_mutation(admin, SAVE_FAILED, true, async move {
            match submission {
                ModelSubmission::Create { name, category_id, manual } => client
                    .create_public_model(&name, category_id, &manual, |_| {})
                    .await
                    .map(drop),
                ModelSubmission::Update { id, name, category_id } => {
                    client.update_public_model(id, &name, category_id).await.map(drop)
                }
            }
        });
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = crate::util::file::first_file(input.files()) else {
                admin.update(|a| a.model_form.manual = None);
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file::read_manual(gloo_file::File::from(file)).await {
                    Ok(manual) => admin.update(|a| {
                        a.model_form.manual = Some(manual);
                        a.error = None;
                    }),
                    Err(e) => admin.update(|a| {
                        a.model_form.manual = None;
                        a.error = Some(e.to_string());
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    view! {
        <form class="admin__form" on:submit=on_submit>
            <h2>{move || if editing.get() { "Edit model" } else { "New model" }}</h2>
            <input
                class="input"
                type="text"
                placeholder="Model name"
                prop:value=move || admin.with(|a| a.model_form.name.clone())
                on:input=move |ev| admin.update(|a| a.model_form.name = event_target_value(&ev))
            />
            <select
                class="input"
                prop:value=move || admin.with(|a| a.model_form.category_id.map(|id| id.to_string()).unwrap_or_default())
                on:change=move |ev| {
                    let category_id = event_target_value(&ev).parse().ok();
                    admin.update(|a| a.model_form.category_id = category_id);
                }
            >
                <option value="">"Select a category"</option>
                {move || {
                    admin
                        .with(AdminState::category_options)
                        .into_iter()
                        .map(|(id, label)| view! { <option value=id.to_string()>{label}</option> })
                        .collect_view()
                }}
            </select>
            <Show when=move || !editing.get()>
                <input class="input" type="file" accept=".pdf,application/pdf" on:change=on_file/>
            </Show>
            {form_buttons(admin, editing)}
        </form>
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Brand | Category"</th>
                    <th>"Owner"</th>
                    <th class="table__actions">"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || admin.with(|a| a.models.clone())
                    key=|model| (model.id, model.name.clone(), model.category.as_ref().map(|c| c.id))
                    children=move |model: Model| model_row(admin, model)
                />
            </tbody>
        </table>
    }
}

fn model_row(admin: RwSignal<AdminState>, model: Model) -> impl IntoView {
    let id = model.id;
    let name = model.name.clone();
    let caption = model.caption();
    let owner = model.owner.as_ref().map_or_else(|| "Public".to_owned(), |o| o.email.clone());
    let is_public = model.is_public();

    view! {
        <tr>
            <td>{name}</td>
            <td>{caption}</td>
            <td>{owner}</td>
            <td class="table__actions">
                {is_public
                    .then(|| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| admin.update(|a| a.edit_model(&model))>
                                "Edit"
                            </button>
                        }
                    })}
                <button
                    class="btn btn--small btn--danger"
                    on:click=move |_| delete(admin, move |client| async move { client.delete_model(id).await })
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}

fn form_buttons(admin: RwSignal<AdminState>, editing: Memo<bool>) -> impl IntoView {
    view! {
        <div class="admin__buttons">
            <button class="btn btn--primary" type="submit">
                {move || if editing.get() { "Save" } else { "Create" }}
            </button>
            <Show when=move || editing.get()>
                <button class="btn" type="button" on:click=move |_| admin.update(AdminState::reset_form)>
                    "Cancel"
                </button>
            </Show>
        </div>
    }
}

// =============================================================
// Requests
// =============================================================

fn reload(admin: RwSignal<AdminState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::admin::LOAD_FAILED;

        let client = crate::net::api::app_client();
        let (brands, models) = futures::future::join(client.brands(), client.all_models()).await;
        match (brands, models) {
            (Ok(brands), Ok(models)) => admin.update(|a| a.receive(brands, models)),
            (Err(e), _) | (_, Err(e)) => admin.update(|a| {
                a.loading = false;
                a.error = Some(e.user_message(LOAD_FAILED));
            }),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = admin;
}

fn delete<F, Fut>(admin: RwSignal<AdminState>, request: F)
where
    F: FnOnce(crate::net::api::AppClient) -> Fut,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    if !dialog::confirm(CONFIRM_DELETE) {
        return;
    }
    run_mutation(admin, DELETE_FAILED, false, request(crate::net::api::app_client()));
}

/// Await `request`, then reload on success or show `failure` otherwise.
fn run_mutation<Fut>(admin: RwSignal<AdminState>, failure: &'static str, reset: bool, request: Fut)
where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request.await {
            Ok(()) => {
                admin.update(|a| {
                    a.error = None;
                    if reset {
                        a.reset_form();
                    }
                });
                reload(admin);
            }
            Err(e) => admin.update(|a| a.error = Some(e.user_message(failure))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (admin, failure, reset, request);
}
