use super::*;
use crate::state::auth::Claims;

fn admin() -> AuthState {
    AuthState {
        authenticated: true,
        claims: Some(Claims { sub: None, role: Some("ADMIN".to_owned()) }),
        loaded: true,
    }
}

#[test]
fn should_redirect_unauth_when_loaded_and_logged_out() {
    assert!(should_redirect_unauth(&AuthState::from_token(None)));
}

#[test]
fn should_not_redirect_before_session_is_read() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_non_admin(&state));
}

#[test]
fn should_not_redirect_when_session_exists() {
    assert!(!should_redirect_unauth(&AuthState::from_token(Some("t"))));
}

#[test]
fn non_admin_is_redirected_from_admin_view() {
    assert!(should_redirect_non_admin(&AuthState::from_token(Some("opaque"))));
    assert!(should_redirect_non_admin(&AuthState::from_token(None)));
    assert!(!should_redirect_non_admin(&admin()));
}
