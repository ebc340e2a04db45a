//! Header shared by every view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `RwSignal<AuthState>` from context. Server-rendered markup always
//! shows the logged-out links; the hydrated client swaps them once the
//! stored session has been read.

use leptos::prelude::*;

use crate::state::auth::AuthState;

pub const APP_TITLE: &str = "Manual Q&A";

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href="/">
                    {APP_TITLE}
                </a>
                <nav class="site-header__nav">
                    <Show
                        when=move || auth.get().authenticated
                        fallback=|| {
                            view! {
                                <a class="btn btn--primary" href="/login">
                                    "Login"
                                </a>
                                <a class="btn" href="/signup">
                                    "Sign up"
                                </a>
                            }
                        }
                    >
                        <span class="site-header__user">
                            {move || auth.with(|a| a.subject().unwrap_or_default().to_owned())}
                        </span>
                        <Show when=move || auth.get().is_admin()>
                            <a class="site-header__link" href="/admin">
                                "Admin"
                            </a>
                        </Show>
                        <a class="site-header__link" href="/models">
                            "My models"
                        </a>
                        <a class="btn" href="/logout">
                            "Logout"
                        </a>
                    </Show>
                </nav>
            </div>
        </header>
    }
}
