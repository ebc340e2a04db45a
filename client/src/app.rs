//! Root application component with routing and the shared auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::APP_TITLE;
use crate::pages::{
    admin::AdminPage, chat::ChatPage, home::HomePage, login::LoginPage, logout::LogoutPage, models::ModelsPage,
    signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::refresh_auth;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// The auth context starts unloaded on both sides; the browser fills it
/// from the stored token right after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    Effect::new(move || refresh_auth(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/manualqa.css"/>
        <Title text=APP_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("logout") view=LogoutPage/>
                <Route path=StaticSegment("models") view=ModelsPage/>
                <Route path=(StaticSegment("chat"), ParamSegment("id")) view=ChatPage/>
                <Route path=StaticSegment("admin") view=AdminPage/>
            </Routes>
        </Router>
    }
}
