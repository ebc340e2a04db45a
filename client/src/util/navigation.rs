//! Hard navigation used when the session ends.
//!
//! SYSTEM CONTEXT
//! ==============
//! In-app links go through `leptos_router`. Forced redirects (expired
//! session) replace the whole document so no stale view state survives.

/// Route to the login view.
pub const LOGIN_PATH: &str = "/login";

/// Something that can send the user to another path.
pub trait Navigator: Send + Sync {
    fn redirect(&self, path: &str);
}

/// Assigns `window.location.href`. No-op outside the hydrated client.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
        }
    }
}
