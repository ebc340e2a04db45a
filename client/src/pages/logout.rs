//! Ends the session on mount, then returns home.
//!
//! The token is cleared even when the logout call fails.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::site_header::SiteHeader;
use crate::components::spinner::Spinner;
use crate::state::auth::AuthState;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::net::api::app_client().logout().await {
                    leptos::logging::warn!("logout request failed: {e}");
                }
                crate::util::auth::refresh_auth(auth);
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, &navigate);
        }
    });

    view! {
        <div class="page">
            <SiteHeader/>
            <main class="page__center">
                <Spinner label="Logging out..."/>
            </main>
        </div>
    }
}
