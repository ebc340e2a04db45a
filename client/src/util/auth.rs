//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: `/models` needs a
//! session, `/admin` needs the admin role. Both wait until the browser
//! session has been read so server-rendered markup never redirects.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::session::Session;
use crate::state::auth::AuthState;

/// Re-read the stored token into `auth`. Call after login or logout.
pub fn refresh_auth(auth: RwSignal<AuthState>) {
    auth.set(AuthState::from_session(&Session::browser()));
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    state.loaded && !state.authenticated
}

pub fn should_redirect_non_admin(state: &AuthState) -> bool {
    state.loaded && !state.is_admin()
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(super::navigation::LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and the user is not an admin.
pub fn install_admin_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_non_admin(&auth.get()) {
            navigate("/", NavigateOptions::default());
        }
    });
}
