//! PDF drop zone plus the whole-window drag overlay on the home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A file arrives from the `<input type=file>` or from a drop anywhere on
//! the window. Either way it goes through `gate_upload`: non-PDF or
//! oversize files are refused locally, a logged-out user is sent to
//! `/login`, and only then are bytes read and posted as a personal model.
//! Success navigates to the new model's chat.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;
use crate::state::upload::UploadState;

#[component]
pub fn ManualUpload() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let upload = RwSignal::new(UploadState::default());
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use crate::state::upload::should_end_drag;
        use crate::util::file::first_file;

        let drag_over = window_event_listener(leptos::ev::dragover, move |ev| {
            ev.prevent_default();
            if !upload.get_untracked().dragging {
                upload.update(|u| u.dragging = true);
            }
        });
        let drag_leave = window_event_listener(leptos::ev::dragleave, move |ev| {
            ev.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or_default();
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or_default();
            if should_end_drag(ev.client_x(), ev.client_y(), width, height) {
                upload.update(|u| u.dragging = false);
            }
        });
        let drop_navigate = navigate.clone();
        let drop = window_event_listener(leptos::ev::drop, move |ev| {
            ev.prevent_default();
            upload.update(|u| u.dragging = false);
            if let Some(file) = first_file(ev.data_transfer().and_then(|dt| dt.files())) {
                start_upload(file, auth, upload, drop_navigate.clone());
            }
        });
        on_cleanup(move || {
            drag_over.remove();
            drag_leave.remove();
            drop.remove();
        });
    }

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = crate::util::file::first_file(input.files()) {
                start_upload(file, auth, upload, navigate.clone());
            }
            // Allow picking the same file again after a rejection.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, auth, &navigate);
        }
    };

    view! {
        <section class="upload">
            <h3 class="upload__heading">"Upload your own manual"</h3>
            <p class="upload__hint">"Upload a PDF and the assistant will answer questions from it."</p>
            <label class="upload__zone" class:upload__zone--busy=move || upload.get().loading>
                <span class="upload__title">
                    <strong>"Click to choose a file"</strong>
                    " or drag and drop"
                </span>
                <span class="upload__limit">"PDF only (max 20MB)"</span>
                <input
                    class="upload__input"
                    type="file"
                    accept=".pdf,application/pdf"
                    disabled=move || upload.get().loading
                    on:change=on_change
                />
            </label>
            <Show when=move || upload.get().loading>
                <Spinner label=Signal::derive(move || {
                    format!("Uploading... {}%", upload.get().progress.unwrap_or_default())
                })/>
            </Show>
            <Show when=move || upload.get().error.is_some()>
                <p class="upload__error">{move || upload.get().error.unwrap_or_default()}</p>
            </Show>
        </section>
        <Show when=move || upload.get().dragging>
            <div class="drop-overlay">
                <div class="drop-overlay__card">
                    <h3>"Drop your PDF here"</h3>
                    <p>"The assistant will answer product questions from the manual you upload."</p>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn start_upload<F>(file: web_sys::File, auth: RwSignal<AuthState>, upload: RwSignal<UploadState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    use crate::state::upload::{LOGIN_REQUIRED_MESSAGE, UploadGate, gate_upload};
    use crate::util::dialog;
    use crate::util::navigation::LOGIN_PATH;

    if upload.get_untracked().loading {
        return;
    }
    let file = gloo_file::File::from(file);
    match gate_upload(&file.raw_mime_type(), file.size(), auth.get_untracked().authenticated) {
        UploadGate::Rejected(rejection) => {
            let message = rejection.to_string();
            dialog::alert(&message);
            upload.update(|u| u.fail(message));
        }
        UploadGate::LoginRequired => {
            dialog::alert(LOGIN_REQUIRED_MESSAGE);
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
        UploadGate::Proceed => {
            upload.update(UploadState::begin);
            leptos::task::spawn_local(async move {
                match upload_manual(file, upload).await {
                    Ok(model_id) => {
                        upload.update(UploadState::finish);
                        navigate(&format!("/chat/{model_id}"), NavigateOptions::default());
                    }
                    Err(message) => upload.update(|u| u.fail(message)),
                }
            });
        }
    }
}

#[cfg(feature = "hydrate")]
async fn upload_manual(file: gloo_file::File, upload: RwSignal<UploadState>) -> Result<i64, String> {
    use crate::state::upload::UPLOAD_FAILED;

    let manual = crate::util::file::read_manual(file).await.map_err(|e| e.to_string())?;
    let client = crate::net::api::app_client();
    let model = client
        .create_personal_model(&manual.model_name(), &manual, |progress| {
            upload.update(|u| u.progress = Some(progress.percent()));
        })
        .await
        .map_err(|e| e.user_message(UPLOAD_FAILED))?;
    Ok(model.id)
}
