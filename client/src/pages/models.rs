//! Personal model management (`/models`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a session: logged-out visitors are sent to `/login` once the
//! stored token has been read. Lists the owner's models with manual
//! download, a link into chat, and delete.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::net::types::Model;
use crate::state::auth::AuthState;
use crate::state::personal::PersonalModelsState;
use crate::util::auth::install_unauth_redirect;

pub const CONFIRM_DELETE: &str = "Delete this model and its manual?";

#[component]
pub fn ModelsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let state = RwSignal::new(PersonalModelsState::loading());
    let requested = RwSignal::new(false);

    install_unauth_redirect(auth, use_navigate());

    Effect::new(move || {
        if requested.get_untracked() || !auth.get().authenticated {
            return;
        }
        requested.set(true);
        load_models(state);
    });

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__content">
                <div class="page__heading">
                    <h1>"My models"</h1>
                    <a class="btn btn--primary" href="/">
                        "Back to home"
                    </a>
                </div>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="form-error">{move || state.with(|s| s.error.clone()).unwrap_or_default()}</p>
                </Show>
                <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <Spinner label="Loading models..."/> }>
                    <Show when=move || state.with(|s| !s.models.is_empty()) fallback=empty_models>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Manual"</th>
                                    <th class="table__actions">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.models.clone())
                                    key=|model| model.id
                                    children=move |model| model_row(state, model)
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </main>
        </div>
    }
}

fn model_row(state: RwSignal<PersonalModelsState>, model: Model) -> impl IntoView {
    let id = model.id;
    let file_name = model.manual_file_name();
    let has_manual = model.manual.is_some();
    let chat_href = format!("/chat/{id}");

    view! {
        <tr>
            <td>{model.name}</td>
            <td>
                {if has_manual {
                    let label = file_name.clone();
                    view! {
                        <button class="link-button" on:click=move |_| download(state, id, file_name.clone())>
                            {label}
                        </button>
                    }
                        .into_any()
                } else {
                    view! { <span class="muted">"No manual"</span> }.into_any()
                }}
            </td>
            <td class="table__actions">
                <a class="btn btn--small" href=chat_href>
                    "Q&A"
                </a>
                <button
                    class="btn btn--small btn--danger"
                    disabled=move || state.with(|s| s.deleting.is_some())
                    on:click=move |_| delete(state, id)
                >
                    {move || if state.with(|s| s.is_deleting(id)) { "Deleting..." } else { "Delete" }}
                </button>
            </td>
        </tr>
    }
}

fn empty_models() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-state__title">"You have no models yet"</p>
            <p class="empty-state__hint">"Upload a PDF manual on the home page to create one."</p>
        </div>
    }
}

fn load_models(state: RwSignal<PersonalModelsState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::personal::LOAD_FAILED;

        match crate::net::api::app_client().personal_models().await {
            Ok(models) => state.update(|s| s.receive(models)),
            Err(e) => state.update(|s| s.fail(e.user_message(LOAD_FAILED))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = state;
}

fn delete(state: RwSignal<PersonalModelsState>, id: i64) {
    if !crate::util::dialog::confirm(CONFIRM_DELETE) {
        return;
    }
    let mut started = false;
    state.update(|s| started = s.begin_delete(id));
    if !started {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::personal::DELETE_FAILED;

        match crate::net::api::app_client().delete_personal_model(id).await {
            Ok(()) => state.update(|s| s.remove(id)),
            Err(e) => state.update(|s| s.fail(e.user_message(DELETE_FAILED))),
        }
    });
}

fn download(state: RwSignal<PersonalModelsState>, model_id: i64, file_name: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::upload::PDF_MIME;

        match crate::net::api::app_client().download_manual(model_id).await {
            Ok(bytes) => {
                if let Err(e) = crate::util::download::save_bytes(&bytes, &file_name, PDF_MIME) {
                    leptos::logging::warn!("saving manual for model {model_id}: {e:?}");
                    state.update(|s| s.fail_download(None));
                }
            }
            Err(e) => state.update(|s| s.fail_download(Some(&e))),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (state, model_id, file_name);
}
