//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header, route guards and the admin view read this to decide what to
//! render. It mirrors the stored bearer token; the token itself stays in
//! `net::session` and is re-read whenever the state is refreshed.
//!
//! TRUST BOUNDARY
//! ==============
//! Claims are decoded without verifying the signature. They only decide
//! which links and views to show. The backend enforces every permission.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::net::session::Session;

/// Role claim values that grant the admin view.
const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// Subset of the bearer token payload the UI cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role
            .as_deref()
            .is_some_and(|role| ADMIN_ROLES.iter().any(|r| role.eq_ignore_ascii_case(r)))
    }
}

/// Decode the payload segment of a JWT. Returns `None` for anything malformed.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (_header, payload) = (segments.next()?, segments.next()?);
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Authentication state derived from the stored token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub claims: Option<Claims>,
    /// False until the browser session has been read once.
    pub loaded: bool,
}

impl AuthState {
    pub fn from_token(token: Option<&str>) -> Self {
        Self {
            authenticated: token.is_some(),
            claims: token.and_then(decode_claims),
            loaded: true,
        }
    }

    pub fn from_session(session: &Session) -> Self {
        Self::from_token(session.token().as_deref())
    }

    pub fn is_admin(&self) -> bool {
        self.authenticated && self.claims.as_ref().is_some_and(Claims::is_admin)
    }

    /// Subject claim, usually the account email.
    pub fn subject(&self) -> Option<&str> {
        self.claims.as_ref()?.sub.as_deref()
    }
}
