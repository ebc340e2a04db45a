//! Email + password login.
//!
//! SYSTEM CONTEXT
//! ==============
//! A successful login stores the token through the session, refreshes the
//! shared `AuthState` and navigates home. `?registered=true` (set by the
//! signup page) shows a confirmation banner.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::site_header::SiteHeader;
use crate::state::auth::AuthState;

pub const LOGIN_FAILED: &str = "Login failed. Check your email and password.";
pub const REGISTERED_MESSAGE: &str = "Sign-up complete. Please log in.";
const MISSING_FIELDS: &str = "Enter your email and password.";

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let registered = move || query.read().get("registered").as_deref() == Some("true");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(values) => values,
                Err(message) => {
                    error.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let client = crate::net::api::app_client();
                match client.login(&email_value, &password_value).await {
                    Ok(_) if client.session().is_authenticated() => {
                        crate::util::auth::refresh_auth(auth);
                        navigate("/", NavigateOptions::default());
                    }
                    Ok(_) => {
                        error.set(LOGIN_FAILED.to_owned());
                        busy.set(false);
                    }
                    Err(e) => {
                        error.set(e.user_message(LOGIN_FAILED));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, auth, &navigate);
        }
    };

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="auth-page">
                <div class="auth-card">
                    <h1 class="auth-card__title">"Log in"</h1>
                    <Show when=registered>
                        <p class="banner banner--success">{REGISTERED_MESSAGE}</p>
                    </Show>
                    <form class="auth-form" on:submit=on_submit>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <Show when=move || !error.get().is_empty()>
                            <p class="form-error">{move || error.get()}</p>
                        </Show>
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Logging in..." } else { "Log in" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "No account yet? "
                        <a href="/signup">"Sign up"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
