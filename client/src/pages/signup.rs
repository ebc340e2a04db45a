//! Account creation.
//!
//! Fields are validated locally (per-field messages) before `signup` is
//! called. Success lands on `/login?registered=true`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;

pub const SIGNUP_FAILED: &str = "Sign-up failed. Please try again.";
pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// One message per invalid field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl SignupErrors {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// `something@host.tld` with no whitespace.
pub(crate) fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let dot = domain.rfind('.');
    !local.is_empty() && dot.is_some_and(|idx| idx > 0 && idx + 1 < domain.len())
}

/// Validate the whole form, returning the trimmed email and the password.
pub(crate) fn validate_signup(form: &SignupForm) -> Result<(String, String), SignupErrors> {
    let email = form.email.trim();
    let mut errors = SignupErrors::default();

    if email.is_empty() {
        errors.email = Some("Enter your email.");
    } else if !looks_like_email(email) {
        errors.email = Some("Enter a valid email address.");
    }
    if form.password.is_empty() {
        errors.password = Some("Enter a password.");
    } else if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.password = Some("Password must be at least 6 characters.");
    }
    if form.password != form.confirm_password {
        errors.confirm_password = Some("Passwords do not match.");
    }
    if !form.accept_terms {
        errors.terms = Some("Please accept the terms of service.");
    }

    if errors.is_empty() {
        Ok((email.to_owned(), form.password.clone()))
    } else {
        Err(errors)
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let errors = RwSignal::new(SignupErrors::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email, password) = match validate_signup(&form.get_untracked()) {
            Ok(values) => values,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(SignupErrors::default());
        error.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::app_client().signup(&email, &password).await {
                    Ok(()) => navigate("/login?registered=true", NavigateOptions::default()),
                    Err(e) => {
                        error.set(e.user_message(SIGNUP_FAILED));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, &navigate);
        }
    };

    let field_error = move |pick: fn(&SignupErrors) -> Option<&'static str>| {
        move || errors.with(pick).map(|msg| view! { <p class="field__error">{msg}</p> })
    };

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="auth-page">
                <div class="auth-card">
                    <h1 class="auth-card__title">"Create an account"</h1>
                    <form class="auth-form" on:submit=on_submit novalidate=true>
                        <label class="field">
                            <span class="field__label">"Email"</span>
                            <input
                                class="field__input"
                                type="email"
                                autocomplete="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.email = event_target_value(&ev));
                                    errors.update(|e| e.email = None);
                                }
                            />
                            {field_error(|e| e.email)}
                        </label>
                        <label class="field">
                            <span class="field__label">"Password"</span>
                            <input
                                class="field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.password.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.password = event_target_value(&ev));
                                    errors.update(|e| e.password = None);
                                }
                            />
                            {field_error(|e| e.password)}
                        </label>
                        <label class="field">
                            <span class="field__label">"Confirm password"</span>
                            <input
                                class="field__input"
                                type="password"
                                autocomplete="new-password"
                                prop:value=move || form.with(|f| f.confirm_password.clone())
                                on:input=move |ev| {
                                    form.update(|f| f.confirm_password = event_target_value(&ev));
                                    errors.update(|e| e.confirm_password = None);
                                }
                            />
                            {field_error(|e| e.confirm_password)}
                        </label>
                        <label class="field field--inline">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.accept_terms)
                                on:change=move |ev| {
                                    form.update(|f| f.accept_terms = event_target_checked(&ev));
                                    errors.update(|e| e.terms = None);
                                }
                            />
                            <span>"I agree to the terms of service"</span>
                        </label>
                        {field_error(|e| e.terms)}
                        <Show when=move || !error.get().is_empty()>
                            <p class="form-error">{move || error.get()}</p>
                        </Show>
                        <button class="btn btn--primary btn--block" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                        </button>
                    </form>
                    <p class="auth-card__footer">
                        "Already have an account? "
                        <a href="/login">"Log in"</a>
                    </p>
                </div>
            </main>
        </div>
    }
}
